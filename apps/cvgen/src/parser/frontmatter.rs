//! Front-matter handling: split the leading `---` block from the Markdown body, read it
//! as a flat string map, and project that map onto `ContactInfo`.

use std::collections::BTreeMap;

use serde_yaml::Value;
use tracing::warn;

use crate::errors::MalformedMetadataError;
use crate::models::ContactInfo;

/// Loosely-typed metadata, before projection onto `ContactInfo`.
pub type MetadataMap = BTreeMap<String, String>;

/// A document split into raw front-matter and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument {
    /// Text between the delimiters, `None` when the document has no front-matter.
    pub raw_metadata: Option<String>,
    pub body: String,
}

/// Strips a UTF-8 BOM, normalizes CRLF / CR line endings to LF and trims surrounding
/// whitespace, so blank lines or indentation before the first line are not significant.
pub fn normalize_content(content: &str) -> String {
    content
        .strip_prefix('\u{FEFF}')
        .unwrap_or(content)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .trim()
        .to_string()
}

/// A delimiter line is three or more dashes, optionally followed by whitespace.
fn is_delimiter(line: &str) -> bool {
    let trimmed = line.trim_end();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

/// Splits front-matter from body. The block must open on the first non-blank line; an unclosed
/// block is not front-matter and the whole text is returned as body.
pub fn split_front_matter(content: &str) -> SplitDocument {
    let normalized = normalize_content(content);
    let mut lines = normalized.split('\n');

    let opens = lines.next().map(is_delimiter).unwrap_or(false);
    if !opens {
        return SplitDocument {
            raw_metadata: None,
            body: normalized,
        };
    }

    let mut metadata_lines = Vec::new();
    while let Some(line) = lines.next() {
        if is_delimiter(line) {
            let body = lines.collect::<Vec<_>>().join("\n");
            return SplitDocument {
                raw_metadata: Some(metadata_lines.join("\n")),
                body,
            };
        }
        metadata_lines.push(line);
    }

    SplitDocument {
        raw_metadata: None,
        body: normalized,
    }
}

/// Parses a YAML front-matter block into a flat string map.
///
/// Scalar values (strings, numbers, booleans) are kept as strings. Nulls and nested
/// sequences / mappings are dropped. An empty block is an empty map.
pub fn parse_metadata(raw: &str) -> Result<MetadataMap, MalformedMetadataError> {
    let value: Value = serde_yaml::from_str(raw).map_err(|e| MalformedMetadataError {
        reason: e.to_string(),
    })?;

    let mapping = match value {
        Value::Null => return Ok(MetadataMap::new()),
        Value::Mapping(m) => m,
        _ => {
            return Err(MalformedMetadataError {
                reason: "front-matter must be a key/value mapping".to_string(),
            })
        }
    };

    let metadata = mapping
        .into_iter()
        .filter_map(|(k, v)| Some((scalar_to_string(k)?, scalar_to_string(v)?)))
        .collect();
    Ok(metadata)
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Reads the metadata of a split document.
///
/// Permissive mode degrades an unparseable block to an empty map; strict mode
/// surfaces `MalformedMetadataError`.
pub fn read_metadata(
    doc: &SplitDocument,
    strict: bool,
) -> Result<MetadataMap, MalformedMetadataError> {
    let Some(raw) = doc.raw_metadata.as_deref() else {
        return Ok(MetadataMap::new());
    };

    match parse_metadata(raw) {
        Ok(metadata) => Ok(metadata),
        Err(e) if strict => Err(e),
        Err(e) => {
            warn!("Ignoring malformed front-matter: {}", e.reason);
            Ok(MetadataMap::new())
        }
    }
}

/// Total projection onto `ContactInfo`; absent keys become empty strings.
pub fn contact_from_metadata(metadata: &MetadataMap) -> ContactInfo {
    let field = |key: &str| metadata.get(key).cloned().unwrap_or_default();
    ContactInfo {
        name: field("name"),
        title: field("title"),
        email: field("email"),
        phone: field("phone"),
        location: field("location"),
        linkedin: field("linkedin"),
        github: field("github"),
        website: field("website"),
        photo: field("photo"),
    }
}
