//! Single-page PDF serialization of a rendered canvas

use crate::canvas::Canvas;
use crate::{RenderError, Result};
use chrono::Utc;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::io::Write;

/// Encoding for the page bitmap embedded in the PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageEncoding {
    /// Lossy DCT (JPEG) image stream
    #[default]
    Jpeg,
    /// Lossless zlib-compressed RGB image stream
    Flate,
}

/// Serialize a canvas as a one-page PDF.
///
/// The page's MediaBox equals the canvas dimensions (1 pixel = 1 point) and
/// the bitmap covers the whole page as an image XObject.
pub fn canvas_to_pdf(canvas: &Canvas, encoding: PageEncoding) -> Result<Vec<u8>> {
    let width = canvas.width();
    let height = canvas.height();

    let (filter, data) = match encoding {
        PageEncoding::Jpeg => ("DCTDecode", canvas.to_jpeg()?),
        PageEncoding::Flate => {
            let mut encoder =
                flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(canvas.as_raw())?;
            ("FlateDecode", encoder.finish()?)
        }
    };

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8i64,
            "Filter" => filter,
        },
        data,
    ));

    let content = page_image_operators("Im1", width as f64, height as f64);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), (width as i64).into(), (height as i64).into()],
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                "Im1" => image_id,
            },
        },
        "Contents" => content_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Producer" => Object::string_literal("render-core"),
        "CreationDate" => Object::string_literal(creation_date()),
    });
    doc.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::PageWrite(e.to_string()))?;

    Ok(buffer)
}

/// PDF date string for the document info dictionary
fn creation_date() -> String {
    format!("D:{}Z", Utc::now().format("%Y%m%d%H%M%S"))
}

/// Operators drawing the page image over the full MediaBox
fn page_image_operators(image_name: &str, width: f64, height: f64) -> Vec<u8> {
    // q                       - Save graphics state
    // width 0 0 height 0 0 cm - Scale unit image to page size
    // /Im1 Do                 - Draw image
    // Q                       - Restore graphics state
    format!("q\n{width} 0 0 {height} 0 0 cm\n/{image_name} Do\nQ\n").into_bytes()
}
