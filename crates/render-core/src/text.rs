//! Centered text drawing onto a canvas

use crate::canvas::Canvas;
use crate::font::{FontSource, BUILTIN_ADVANCE};
use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::Rgb;
use spleen_font::{PSF2Font, FONT_12X24};

/// Left edge for horizontally centered text: `(canvas_width - text_width) / 2`
pub fn centered_x(canvas_width: u32, text_width: f32) -> i64 {
    ((canvas_width as f32 - text_width) / 2.0).round() as i64
}

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// `y` is the top of the line; the baseline is derived from the font's
/// ascent. Pixels outside the canvas are clipped, never an error.
pub fn draw_text(
    canvas: &mut Canvas,
    font: &FontSource,
    text: &str,
    size: f32,
    color: Rgb<u8>,
    x: i64,
    y: i64,
) {
    match font {
        FontSource::Truetype(face) => draw_truetype(canvas, face, text, size, color, x, y),
        FontSource::Builtin => draw_builtin(canvas, text, color, x, y),
    }
}

/// Draw `text` horizontally centered at vertical position `y`.
///
/// Returns the computed left edge so callers can verify placement.
pub fn draw_text_centered(
    canvas: &mut Canvas,
    font: &FontSource,
    text: &str,
    size: f32,
    color: Rgb<u8>,
    y: i64,
) -> i64 {
    let width = font.measure(text, size);
    let x = centered_x(canvas.width(), width);
    draw_text(canvas, font, text, size, color, x, y);
    x
}

fn draw_truetype(
    canvas: &mut Canvas,
    face: &FontVec,
    text: &str,
    size: f32,
    color: Rgb<u8>,
    x: i64,
    y: i64,
) {
    let scale = PxScale::from(size);
    let scaled = face.as_scaled(scale);
    let baseline = y as f32 + scaled.ascent();

    let mut caret = x as f32;
    for ch in text.chars() {
        let glyph_id = face.glyph_id(ch);
        let glyph = glyph_id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(glyph_id);

        if let Some(outlined) = face.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            let min_x = bounds.min.x as i64;
            let min_y = bounds.min.y as i64;
            outlined.draw(|px, py, coverage| {
                canvas.blend_pixel(min_x + px as i64, min_y + py as i64, color, coverage);
            });
        }
    }
}

fn draw_builtin(canvas: &mut Canvas, text: &str, color: Rgb<u8>, x: i64, y: i64) {
    let Ok(mut psf) = PSF2Font::new(FONT_12X24) else {
        return;
    };

    let mut caret = x;
    for ch in text.chars() {
        let utf8 = ch.to_string();
        if let Some(glyph) = psf.glyph_for_utf8(utf8.as_bytes()) {
            for (row_y, row) in glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if on {
                        canvas.blend_pixel(caret + col_x as i64, y + row_y as i64, color, 1.0);
                    }
                }
            }
        }
        caret += BUILTIN_ADVANCE as i64;
    }
}
