//! Batch export of diploma pages into a ZIP archive

use crate::progress::ProgressSink;
use crate::renderer::DiplomaRenderer;
use crate::{DiplomaError, Result};
use render_core::{canvas_to_pdf, PageEncoding};
use roster::Student;
use std::collections::HashMap;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Exports one PDF per student into a single in-memory ZIP archive.
///
/// Rows are processed strictly in input order; the archive writer is owned
/// exclusively by one `export_all` call. Any row failure aborts the whole
/// batch and the partial archive is dropped, never returned.
pub struct BatchExporter<'a> {
    renderer: DiplomaRenderer<'a>,
    encoding: PageEncoding,
}

impl<'a> BatchExporter<'a> {
    /// Create an exporter with the default (JPEG) page encoding
    pub fn new(renderer: DiplomaRenderer<'a>) -> Self {
        Self {
            renderer,
            encoding: PageEncoding::default(),
        }
    }

    /// Override the page encoding
    pub fn with_encoding(mut self, encoding: PageEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Render every student and bundle one PDF per row into a ZIP archive.
    ///
    /// Members are named `Diploma_<name>.pdf`; repeated names get a
    /// `_<k>` suffix so the member count always equals the row count.
    /// Progress is reported as `(i + 1) / total` after each row.
    pub fn export_all(
        &self,
        template: &[u8],
        students: &[Student],
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let total = students.len();
        let mut seen_names: HashMap<String, usize> = HashMap::new();

        for (index, student) in students.iter().enumerate() {
            let canvas = self.renderer.render(template, student)?;
            let pdf = canvas_to_pdf(&canvas, self.encoding)?;

            zip.start_file(member_name(&student.name, &mut seen_names), options)?;
            zip.write_all(&pdf)?;

            progress.report((index + 1) as f64 / total as f64);
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Render only the first row and return it as PNG bytes for display.
    ///
    /// This is the degenerate one-record case of a batch; an empty roster
    /// is an error here, unlike in [`BatchExporter::export_all`].
    pub fn preview(&self, template: &[u8], students: &[Student]) -> Result<Vec<u8>> {
        let first = students.first().ok_or(DiplomaError::EmptyRoster)?;
        let canvas = self.renderer.render(template, first)?;
        Ok(canvas.to_png()?)
    }
}

/// Archive member name for a student.
///
/// First occurrence of a name: `Diploma_<name>.pdf`. The k-th repeat
/// (k >= 2) becomes `Diploma_<name>_<k>.pdf` so later rows never silently
/// overwrite earlier members.
fn member_name(name: &str, seen: &mut HashMap<String, usize>) -> String {
    let count = seen.entry(name.to_string()).or_insert(0);
    *count += 1;

    if *count == 1 {
        format!("Diploma_{name}.pdf")
    } else {
        format!("Diploma_{name}_{}.pdf", *count)
    }
}
