//! Diploma Engine - design schema, page rendering and batch export
//!
//! This crate provides:
//! - The design configuration schema (field sizes, positions, colors)
//! - The page renderer (five centered text fields over a template image)
//! - The batch exporter (one PDF per student, bundled into a ZIP archive)
//! - The progress-sink interface for batch observation
//!
//! # Example
//!
//! ```ignore
//! use diploma::{BatchExporter, DiplomaRenderer, GenerationConfig, NullProgress};
//! use render_core::FontSource;
//!
//! let config = GenerationConfig::default();
//! let font = FontSource::from_path("fuente.ttf");
//! let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
//! let exporter = BatchExporter::new(renderer);
//!
//! let archive = exporter.export_all(&template_bytes, &students, &mut NullProgress)?;
//! std::fs::write("diplomas.zip", archive)?;
//! ```

mod exporter;
mod progress;
mod renderer;
mod schema;

pub use exporter::BatchExporter;
pub use progress::{NullProgress, ProgressSink};
pub use renderer::{id_line, DiplomaRenderer};
pub use schema::*;

use thiserror::Error;

/// Errors that can occur during diploma generation
#[derive(Debug, Error)]
pub enum DiplomaError {
    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("Roster is empty")]
    EmptyRoster,

    #[error("Render error: {0}")]
    Render(#[from] render_core::RenderError),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for diploma operations
pub type Result<T> = std::result::Result<T, DiplomaError>;
