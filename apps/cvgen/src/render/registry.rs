//! Template registry. Installed templates are subdirectories of a root directory that
//! contain a `template.html` and optionally a `style.css`.

use std::path::{Path, PathBuf};

use crate::errors::{RenderError, UnknownTemplateError};

pub const TEMPLATE_FILE: &str = "template.html";
pub const STYLE_FILE: &str = "style.css";

/// Raw assets of one installed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAssets {
    pub name: String,
    /// Template directory; used as base path for relative asset URLs.
    pub dir: PathBuf,
    pub html: String,
    /// Empty when the template ships no stylesheet.
    pub css: String,
}

#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    root: PathBuf,
}

impl TemplateRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sorted identifiers of installed templates.
    pub fn available(&self) -> Result<Vec<String>, RenderError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.join(TEMPLATE_FILE).is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the directory of `name`, or `UnknownTemplateError` listing the valid names.
    /// Does no work beyond a directory listing, so callers can validate before rendering.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, RenderError> {
        let available = self.available()?;
        if !available.iter().any(|n| n == name) {
            return Err(UnknownTemplateError {
                requested: name.to_string(),
                available,
            }
            .into());
        }
        Ok(self.root.join(name))
    }

    pub fn load(&self, name: &str) -> Result<TemplateAssets, RenderError> {
        let dir = self.resolve(name)?;
        let html = std::fs::read_to_string(dir.join(TEMPLATE_FILE))?;
        let css_path = dir.join(STYLE_FILE);
        let css = if css_path.is_file() {
            std::fs::read_to_string(css_path)?
        } else {
            String::new()
        };

        Ok(TemplateAssets {
            name: name.to_string(),
            dir,
            html,
            css,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn fixture_registry() -> (tempfile::TempDir, TemplateRegistry) {
        let root = tempfile::tempdir().unwrap();
        for name in ["modern", "minimal"] {
            let dir = root.path().join(name);
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join(TEMPLATE_FILE), format!("<p>{name}</p>")).unwrap();
        }
        fs::write(root.path().join("modern").join(STYLE_FILE), "body {}").unwrap();
        // Directory without template.html and a stray file: both ignored.
        fs::create_dir(root.path().join("drafts")).unwrap();
        fs::write(root.path().join("README.md"), "notes").unwrap();

        let registry = TemplateRegistry::new(root.path());
        (root, registry)
    }

    #[test]
    fn test_available_lists_sorted_template_dirs() {
        let (_root, registry) = fixture_registry();
        assert_eq!(registry.available().unwrap(), vec!["minimal", "modern"]);
    }

    #[test]
    fn test_unknown_template_lists_alternatives() {
        let (_root, registry) = fixture_registry();
        match registry.resolve("nonexistent") {
            Err(RenderError::UnknownTemplate(e)) => {
                assert_eq!(e.requested, "nonexistent");
                assert_eq!(e.available, vec!["minimal", "modern"]);
            }
            other => panic!("expected UnknownTemplate, got {other:?}"),
        }
    }

    #[test]
    fn test_path_like_names_are_unknown() {
        let (_root, registry) = fixture_registry();
        assert!(matches!(
            registry.resolve("../modern"),
            Err(RenderError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_load_reads_optional_css() {
        let (_root, registry) = fixture_registry();
        let modern = registry.load("modern").unwrap();
        assert_eq!(modern.html, "<p>modern</p>");
        assert_eq!(modern.css, "body {}");

        let minimal = registry.load("minimal").unwrap();
        assert_eq!(minimal.css, "");
    }

    #[test]
    fn test_missing_root_is_io_error() {
        let registry = TemplateRegistry::new("/definitely/not/here");
        assert!(matches!(
            registry.available(),
            Err(RenderError::TemplateIo(_))
        ));
    }
}
