//! Font resolution and text measurement

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use std::fmt;
use std::path::Path;

/// Horizontal advance of one built-in font glyph cell, in pixels
pub const BUILTIN_ADVANCE: u32 = 12;

/// Height of one built-in font glyph cell, in pixels
pub const BUILTIN_LINE_HEIGHT: u32 = 24;

/// A resolved font for page rendering.
///
/// Resolution is a two-branch step that never fails: the configured TrueType
/// file is tried first, and any load or parse failure silently yields the
/// built-in fixed-size bitmap font. The built-in font ignores the requested
/// size and always uses 12x24 glyph cells.
pub enum FontSource {
    /// A parsed TrueType font, scalable to any field size
    Truetype(FontVec),
    /// The embedded fixed-size bitmap font
    Builtin,
}

impl FontSource {
    /// Resolve a font from a file path, falling back to the built-in font
    /// if the file is missing or not a parseable TrueType font.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read(path) {
            Ok(data) => Self::from_ttf_bytes(data),
            Err(_) => FontSource::Builtin,
        }
    }

    /// Resolve a font from raw TTF bytes, falling back to the built-in font
    /// if the bytes do not parse.
    pub fn from_ttf_bytes(data: Vec<u8>) -> Self {
        match FontVec::try_from_vec(data) {
            Ok(font) => FontSource::Truetype(font),
            Err(_) => FontSource::Builtin,
        }
    }

    /// Whether resolution fell back to the built-in font
    pub fn is_builtin(&self) -> bool {
        matches!(self, FontSource::Builtin)
    }

    /// Width of `text` in pixels when rendered at `size`.
    ///
    /// Glyph advances are summed without kerning. The built-in font has a
    /// fixed advance per character regardless of `size`.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        match self {
            FontSource::Truetype(font) => {
                let scaled = font.as_scaled(PxScale::from(size));
                text.chars()
                    .map(|ch| scaled.h_advance(font.glyph_id(ch)))
                    .sum()
            }
            FontSource::Builtin => (text.chars().count() as u32 * BUILTIN_ADVANCE) as f32,
        }
    }
}

impl fmt::Debug for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Truetype(_) => f.write_str("FontSource::Truetype(..)"),
            FontSource::Builtin => f.write_str("FontSource::Builtin"),
        }
    }
}
