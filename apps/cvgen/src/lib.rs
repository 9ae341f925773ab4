//! cv-gen: Markdown CV to HTML and PDF.
//!
//! The core is [`parser`] (front-matter, section splitting, classification) producing a
//! [`models::CvData`], which [`render`] turns into HTML through a named template and then
//! into PDF through an external backend. [`cli`] and [`routes`] are thin front ends.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod parser;
pub mod render;
pub mod routes;
pub mod state;

pub use errors::{ParseError, RenderError, UnknownTemplateError};
pub use models::{ContactInfo, CvData, Section, SectionType};
pub use parser::{parse_cv, CvParser, ParseOptions};
