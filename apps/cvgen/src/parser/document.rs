//! CV document parser: front-matter becomes contact info, the body becomes ordered, classified sections.
//!
//! # Body segmentation
//! Every line starting with `## ` opens a new section whose heading is the rest of the
//! line. The boundary is purely lexical: `## ` inside a fenced code block still splits.
//! Text before the first boundary becomes a synthesized "Perfil" profile section.

use tracing::debug;

use crate::errors::ParseError;
use crate::models::{CvData, Section, SectionType};
use crate::parser::classifier::detect_section_type;
use crate::parser::frontmatter::{contact_from_metadata, read_metadata, split_front_matter};
use crate::parser::markdown::{CmarkConverter, MarkdownConverter};
use crate::parser::normalize::slugify;

/// Heading given to text that precedes the first `## ` boundary.
pub const PREAMBLE_HEADING: &str = "Perfil";
pub const PREAMBLE_SLUG: &str = "perfil";

const SECTION_MARKER: &str = "## ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail on unparseable front-matter instead of ignoring it.
    pub strict_metadata: bool,
}

/// A body segment before classification. `heading` is `None` for the preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection<'a> {
    pub heading: Option<&'a str>,
    /// Trimmed body text.
    pub body: String,
}

/// Splits a Markdown body at `## ` lines.
///
/// The preamble is always the first element (possibly with an empty body); each
/// following element carries the trimmed heading text and trimmed body.
pub fn split_sections(body: &str) -> Vec<RawSection<'_>> {
    let mut sections = Vec::new();
    let mut heading: Option<&str> = None;
    let mut lines: Vec<&str> = Vec::new();

    for line in body.split('\n') {
        if let Some(rest) = line.strip_prefix(SECTION_MARKER) {
            sections.push(RawSection {
                heading,
                body: lines.join("\n").trim().to_string(),
            });
            heading = Some(rest.trim());
            lines.clear();
        } else {
            lines.push(line);
        }
    }
    sections.push(RawSection {
        heading,
        body: lines.join("\n").trim().to_string(),
    });

    sections
}

/// Parses Markdown CVs using a pluggable Markdown converter.
#[derive(Debug, Clone, Default)]
pub struct CvParser<C = CmarkConverter> {
    converter: C,
    options: ParseOptions,
}

impl CvParser<CmarkConverter> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: MarkdownConverter> CvParser<C> {
    pub fn with_converter(converter: C) -> Self {
        Self {
            converter,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Parses a complete document. Missing or empty input yields an empty `CvData`.
    pub fn parse(&self, text: &str) -> Result<CvData, ParseError> {
        let doc = split_front_matter(text);
        let metadata = read_metadata(&doc, self.options.strict_metadata)?;
        let contact = contact_from_metadata(&metadata);

        let mut sections = Vec::new();
        for raw in split_sections(&doc.body) {
            match raw.heading {
                None if raw.body.is_empty() => {}
                None => sections.push(Section {
                    heading: PREAMBLE_HEADING.to_string(),
                    slug: PREAMBLE_SLUG.to_string(),
                    content_html: self.converter.to_html(&raw.body)?,
                    section_type: SectionType::Profile,
                }),
                Some(heading) => {
                    let section_type = detect_section_type(heading);
                    debug!("Section '{heading}' classified as {section_type}");
                    sections.push(Section {
                        heading: heading.to_string(),
                        slug: slugify(heading),
                        content_html: self.render_body(&raw.body)?,
                        section_type,
                    });
                }
            }
        }

        debug!(
            "Parsed CV for '{}' with {} sections",
            contact.name,
            sections.len()
        );
        Ok(CvData { contact, sections })
    }

    fn render_body(&self, body: &str) -> Result<String, ParseError> {
        if body.is_empty() {
            return Ok(String::new());
        }
        Ok(self.converter.to_html(body)?)
    }
}

/// Parses a Markdown CV with the default converter in permissive mode.
pub fn parse_cv(text: &str) -> Result<CvData, ParseError> {
    CvParser::new().parse(text)
}
