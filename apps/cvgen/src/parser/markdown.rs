//! Markdown-to-HTML conversion for section bodies.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::errors::ConversionError;

/// Converts a Markdown fragment to an HTML fragment that is safe to embed in a template.
pub trait MarkdownConverter: Send + Sync {
    fn to_html(&self, markdown: &str) -> Result<String, ConversionError>;
}

/// pulldown-cmark backed converter: tables, smart punctuation, strikethrough.
///
/// Raw HTML in the source is emitted as escaped text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkConverter;

impl CmarkConverter {
    fn options() -> Options {
        Options::ENABLE_TABLES | Options::ENABLE_SMART_PUNCTUATION | Options::ENABLE_STRIKETHROUGH
    }
}

impl MarkdownConverter for CmarkConverter {
    fn to_html(&self, markdown: &str) -> Result<String, ConversionError> {
        let parser = Parser::new_ext(markdown, Self::options()).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}
