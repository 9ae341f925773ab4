//! HTML rendering of a `CvData` through a Tera template.
//!
//! Templates receive `cv`, `contact`, `sections`, `sidebar_sections`, `main_sections`
//! and `css`. Autoescaping is on; templates must mark `content_html` and `css` as `safe`.

use std::path::PathBuf;

use tera::{Context, Tera};

use crate::errors::RenderError;
use crate::models::CvData;
use crate::render::registry::{TemplateAssets, TemplateRegistry, TEMPLATE_FILE};

/// Rendered document plus the base path for resolving its relative assets.
#[derive(Debug, Clone)]
pub struct RenderedHtml {
    pub template: String,
    pub html: String,
    pub base_path: PathBuf,
}

pub fn render_html(cv: &CvData, assets: &TemplateAssets) -> Result<String, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_FILE, &assets.html)?;

    let mut context = Context::new();
    context.insert("cv", cv);
    context.insert("contact", &cv.contact);
    context.insert("sections", &cv.sections);
    context.insert("sidebar_sections", &cv.sidebar_sections());
    context.insert("main_sections", &cv.main_sections());
    context.insert("css", &assets.css);

    Ok(tera.render(TEMPLATE_FILE, &context)?)
}

/// Resolves `template` (failing fast on unknown names), loads it and renders `cv`.
pub fn render_template(
    registry: &TemplateRegistry,
    cv: &CvData,
    template: &str,
) -> Result<RenderedHtml, RenderError> {
    let assets = registry.load(template)?;
    let html = render_html(cv, &assets)?;
    Ok(RenderedHtml {
        template: assets.name,
        html,
        base_path: assets.dir,
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::models::{ContactInfo, Section, SectionType};

    fn bundled_registry() -> TemplateRegistry {
        TemplateRegistry::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"))
    }

    fn sample_cv() -> CvData {
        CvData {
            contact: ContactInfo {
                name: "Test User".to_string(),
                title: "Developer".to_string(),
                email: "test@example.com".to_string(),
                phone: "+34 600 000 000".to_string(),
                location: "Madrid".to_string(),
                ..ContactInfo::default()
            },
            sections: vec![
                Section {
                    heading: "Perfil".to_string(),
                    slug: "perfil".to_string(),
                    content_html: "<p>Experienced developer.</p>".to_string(),
                    section_type: SectionType::Profile,
                },
                Section {
                    heading: "Experience".to_string(),
                    slug: "experience".to_string(),
                    content_html: "<h3>Senior Dev | Company</h3><ul><li>Did things</li></ul>"
                        .to_string(),
                    section_type: SectionType::Experience,
                },
                Section {
                    heading: "Skills".to_string(),
                    slug: "skills".to_string(),
                    content_html: "<ul><li>Python</li><li>Go</li></ul>".to_string(),
                    section_type: SectionType::Skills,
                },
            ],
        }
    }

    fn assets(html: &str, css: &str) -> TemplateAssets {
        TemplateAssets {
            name: "inline".to_string(),
            dir: PathBuf::from("."),
            html: html.to_string(),
            css: css.to_string(),
        }
    }

    #[test]
    fn test_bundled_templates_available() {
        let available = bundled_registry().available().unwrap();
        assert!(available.contains(&"modern".to_string()));
        assert!(available.contains(&"minimal".to_string()));
    }

    #[test]
    fn test_render_modern_html() {
        let rendered = render_template(&bundled_registry(), &sample_cv(), "modern").unwrap();
        assert!(rendered.html.contains("Test User"));
        assert!(rendered.html.contains("Developer"));
        assert!(rendered.html.contains("test@example.com"));
        assert!(rendered.html.contains("<p>Experienced developer.</p>"));
        assert!(rendered.html.contains("sidebar"));
        assert!(rendered.base_path.ends_with("modern"));
    }

    #[test]
    fn test_render_minimal_html() {
        let rendered = render_template(&bundled_registry(), &sample_cv(), "minimal").unwrap();
        assert!(rendered.html.contains("Test User"));
        assert!(rendered.html.contains("Developer"));
        assert!(rendered.html.contains("Experienced developer."));
    }

    #[test]
    fn test_invalid_template() {
        let err = render_template(&bundled_registry(), &sample_cv(), "nonexistent").unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("modern"));
    }

    #[test]
    fn test_contact_fields_are_escaped_but_content_is_not() {
        let mut cv = sample_cv();
        cv.contact.name = "<b>Eve</b>".to_string();
        let html = render_html(
            &cv,
            &assets(
                "{{ contact.name }}|{% for s in main_sections %}{{ s.content_html | safe }}{% endfor %}",
                "",
            ),
        )
        .unwrap();
        assert!(html.starts_with("&lt;b&gt;Eve"));
        assert!(!html.contains("<b>Eve"));
        assert!(html.contains("<p>Experienced developer.</p>"));
    }

    #[test]
    fn test_groupings_and_css_exposed() {
        let html = render_html(
            &sample_cv(),
            &assets(
                "{{ css | safe }}|{% for s in sidebar_sections %}{{ s.slug }}{% endfor %}|{{ sections | length }}|{{ cv.contact.email }}",
                "body{}",
            ),
        )
        .unwrap();
        assert_eq!(html, "body{}|skills|3|test@example.com");
    }

    #[test]
    fn test_broken_template_is_template_error() {
        let err = render_html(&sample_cv(), &assets("{% for %}", "")).unwrap_err();
        assert!(matches!(err, RenderError::Template(_)));
    }
}
