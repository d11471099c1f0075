//! Render Core - Low-level page composition
//!
//! This crate provides functionality for:
//! - Loading a template image and normalizing it to RGB
//! - Resolving a font with a built-in fallback
//! - Measuring and drawing horizontally centered text
//! - Serializing a rendered page to a single-page PDF
//!
//! # Example
//!
//! ```ignore
//! use render_core::{canvas_to_pdf, draw_text_centered, Canvas, FontSource, PageEncoding};
//!
//! let font = FontSource::from_path("fuente.ttf");
//! let mut canvas = Canvas::from_bytes(&template_bytes)?;
//! draw_text_centered(&mut canvas, &font, "ANA LOPEZ", 160.0, image::Rgb([0, 0, 0]), 600);
//! let pdf_bytes = canvas_to_pdf(&canvas, PageEncoding::Jpeg)?;
//! ```

mod canvas;
mod font;
mod page;
mod text;

pub use canvas::Canvas;
pub use font::{FontSource, BUILTIN_ADVANCE, BUILTIN_LINE_HEIGHT};
pub use page::{canvas_to_pdf, PageEncoding};
pub use text::{centered_x, draw_text, draw_text_centered};

use thiserror::Error;

/// Errors that can occur during page rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to decode template image: {0}")]
    TemplateDecode(String),

    #[error("Failed to encode page image: {0}")]
    ImageEncode(String),

    #[error("Failed to write PDF page: {0}")]
    PageWrite(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
