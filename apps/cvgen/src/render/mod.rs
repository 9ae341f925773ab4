// Rendering: template registry lookup, Tera HTML rendering, external PDF backend.
// Template validation happens before any rendering work so unknown names fail fast.

pub mod html;
pub mod pdf;
pub mod registry;

pub use html::{render_html, render_template, RenderedHtml};
pub use pdf::{CommandPdfRenderer, PdfRenderer};
pub use registry::{TemplateAssets, TemplateRegistry};
