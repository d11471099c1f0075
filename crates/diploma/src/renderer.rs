//! Diploma page rendering

use crate::schema::{DesignConfig, FieldSpec, StaticTexts};
use crate::Result;
use render_core::{draw_text_centered, Canvas, FontSource};
use roster::Student;

/// Identifier line as rendered on the page: prefix, a single space, then the
/// identifier. Holds for any prefix, including an empty one.
pub fn id_line(prefix: &str, identifier: &str) -> String {
    format!("{prefix} {identifier}")
}

/// Renders one diploma page per student over a template image.
///
/// The renderer holds the immutable design for one generation run; every
/// call decodes a fresh copy of the template so pages never bleed into each
/// other.
pub struct DiplomaRenderer<'a> {
    config: &'a DesignConfig,
    texts: &'a StaticTexts,
    font: &'a FontSource,
}

impl<'a> DiplomaRenderer<'a> {
    /// Create a renderer for one generation run
    pub fn new(config: &'a DesignConfig, texts: &'a StaticTexts, font: &'a FontSource) -> Self {
        Self {
            config,
            texts,
            font,
        }
    }

    /// Render one page for a student.
    ///
    /// Fields are drawn in fixed order: name, id, intro, course, hours.
    /// Empty fields are skipped without error; there is no wrapping, no
    /// collision detection and no bounds checking against the canvas
    /// height.
    pub fn render(&self, template: &[u8], student: &Student) -> Result<Canvas> {
        let mut canvas = Canvas::from_bytes(template)?;

        self.draw_field(&mut canvas, &student.name, &self.config.name);
        self.draw_field(
            &mut canvas,
            &id_line(&self.config.id_prefix, &student.identifier),
            &self.config.id,
        );
        self.draw_field(&mut canvas, &self.texts.intro, &self.config.intro);
        self.draw_field(&mut canvas, &self.texts.course, &self.config.course);
        self.draw_field(&mut canvas, &self.texts.hours, &self.config.hours);

        Ok(canvas)
    }

    fn draw_field(&self, canvas: &mut Canvas, text: &str, spec: &FieldSpec) {
        if text.is_empty() {
            return;
        }
        draw_text_centered(
            canvas,
            self.font,
            text,
            spec.size as f32,
            spec.color.into(),
            spec.y as i64,
        );
    }
}
