// Markdown CV parsing: normalization, classification, front-matter, conversion.
// Everything here is synchronous and stateless; parsers can be shared across threads.

pub mod classifier;
pub mod document;
pub mod frontmatter;
pub mod markdown;
pub mod normalize;

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::CvData;

pub use classifier::detect_section_type;
pub use document::{parse_cv, CvParser, ParseOptions};
pub use markdown::{CmarkConverter, MarkdownConverter};
pub use normalize::{normalize, slugify};

/// Reads and parses a Markdown CV file.
pub fn parse_cv_file(path: &Path, options: ParseOptions) -> Result<CvData> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read CV file '{}'", path.display()))?;
    let cv = CvParser::new()
        .with_options(options)
        .parse(&text)
        .with_context(|| format!("Failed to parse CV file '{}'", path.display()))?;
    Ok(cv)
}
