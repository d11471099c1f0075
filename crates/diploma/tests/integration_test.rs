//! Integration tests for diploma generation
//!
//! These tests run the full batch path: template bytes in, ZIP-of-PDFs out.

use diploma::{
    parse_config, BatchExporter, DiplomaRenderer, GenerationConfig, NullProgress, ProgressSink,
};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use pretty_assertions::assert_eq;
use render_core::{FontSource, PageEncoding};
use roster::Student;
use std::io::{Cursor, Read};

fn template_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn small_config() -> GenerationConfig {
    parse_config(
        r##"{
            "design": {
                "name":   { "size": 24, "y": 20,  "color": "#000000" },
                "id":     { "size": 24, "y": 60,  "color": "#555555" },
                "intro":  { "size": 24, "y": 100, "color": "#002d55" },
                "course": { "size": 24, "y": 140, "color": "#002d55" },
                "hours":  { "size": 24, "y": 180, "color": "#002d55" },
                "idPrefix": "C.C."
            },
            "texts": {
                "intro": "Por haber participado",
                "course": "CURSO",
                "hours": "120 Horas"
            }
        }"##,
    )
    .unwrap()
}

/// Sink that records every reported fraction
#[derive(Default)]
struct CollectingProgress {
    fractions: Vec<f64>,
}

impl ProgressSink for CollectingProgress {
    fn report(&mut self, fraction: f64) {
        self.fractions.push(fraction);
    }
}

fn archive_members(archive_bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(archive_bytes)).unwrap();
    let mut members = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut body = Vec::new();
        file.read_to_end(&mut body).unwrap();
        members.push((file.name().to_string(), body));
    }
    members
}

#[test]
fn test_export_one_member_per_row_in_order() {
    let template = template_png(300, 220);
    let config = small_config();
    let font = FontSource::Builtin;
    let students = vec![Student::new("Ana", "111"), Student::new("Luis", "222")];

    let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
    let exporter = BatchExporter::new(renderer);
    let archive = exporter
        .export_all(&template, &students, &mut NullProgress)
        .unwrap();

    let members = archive_members(&archive);
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].0, "Diploma_Ana.pdf");
    assert_eq!(members[1].0, "Diploma_Luis.pdf");
}

#[test]
fn test_exported_members_are_one_page_pdfs() {
    let template = template_png(300, 220);
    let config = small_config();
    let font = FontSource::Builtin;
    let students = vec![Student::new("Ana", "111"), Student::new("Luis", "222")];

    let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
    let exporter = BatchExporter::new(renderer);
    let archive = exporter
        .export_all(&template, &students, &mut NullProgress)
        .unwrap();

    for (name, body) in archive_members(&archive) {
        assert!(body.starts_with(b"%PDF"), "{name} should be a PDF");
        let doc = lopdf::Document::load_mem(&body).unwrap();
        assert_eq!(doc.get_pages().len(), 1, "{name} should have one page");
    }
}

#[test]
fn test_progress_fractions_in_order() {
    let template = template_png(200, 150);
    let config = small_config();
    let font = FontSource::Builtin;
    let students = vec![
        Student::new("Ana", "111"),
        Student::new("Luis", "222"),
        Student::new("Marta", "333"),
        Student::new("Juan", "444"),
    ];

    let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
    let exporter = BatchExporter::new(renderer);
    let mut progress = CollectingProgress::default();
    exporter
        .export_all(&template, &students, &mut progress)
        .unwrap();

    assert_eq!(progress.fractions, vec![0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_duplicate_names_keep_all_rows() {
    let template = template_png(200, 150);
    let config = small_config();
    let font = FontSource::Builtin;
    let students = vec![
        Student::new("Ana", "111"),
        Student::new("Ana", "222"),
        Student::new("Ana", "333"),
    ];

    let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
    let exporter = BatchExporter::new(renderer);
    let archive = exporter
        .export_all(&template, &students, &mut NullProgress)
        .unwrap();

    let names: Vec<String> = archive_members(&archive)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Diploma_Ana.pdf",
            "Diploma_Ana_2.pdf",
            "Diploma_Ana_3.pdf"
        ]
    );
}

#[test]
fn test_empty_roster_exports_empty_archive() {
    let template = template_png(200, 150);
    let config = small_config();
    let font = FontSource::Builtin;

    let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
    let exporter = BatchExporter::new(renderer);
    let mut progress = CollectingProgress::default();
    let archive = exporter.export_all(&template, &[], &mut progress).unwrap();

    assert!(progress.fractions.is_empty());
    assert!(archive_members(&archive).is_empty());
}

#[test]
fn test_bad_template_aborts_batch() {
    let config = small_config();
    let font = FontSource::Builtin;
    let students = vec![Student::new("Ana", "111")];

    let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
    let exporter = BatchExporter::new(renderer);
    let result = exporter.export_all(b"not an image", &students, &mut NullProgress);

    assert!(result.is_err());
}

#[test]
fn test_lossless_encoding_round_trips() {
    let template = template_png(64, 48);
    let config = small_config();
    let font = FontSource::Builtin;
    let students = vec![Student::new("Ana", "111")];

    let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
    let exporter = BatchExporter::new(renderer).with_encoding(PageEncoding::Flate);
    let archive = exporter
        .export_all(&template, &students, &mut NullProgress)
        .unwrap();

    let members = archive_members(&archive);
    assert_eq!(members.len(), 1);
    assert!(members[0].1.starts_with(b"%PDF"));
}

#[test]
fn test_preview_returns_first_row_png() {
    let template = template_png(200, 150);
    let config = small_config();
    let font = FontSource::Builtin;
    let students = vec![Student::new("Ana", "111"), Student::new("Luis", "222")];

    let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
    let exporter = BatchExporter::new(renderer);
    let png = exporter.preview(&template, &students).unwrap();

    // PNG magic
    assert_eq!(&png[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

    // The preview equals a direct render of the first row
    let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
    let first = renderer.render(&template, &students[0]).unwrap();
    assert_eq!(png, first.to_png().unwrap());
}

#[test]
fn test_preview_of_empty_roster_is_an_error() {
    let template = template_png(100, 80);
    let config = small_config();
    let font = FontSource::Builtin;

    let renderer = DiplomaRenderer::new(&config.design, &config.texts, &font);
    let exporter = BatchExporter::new(renderer);
    let err = exporter.preview(&template, &[]).unwrap_err();

    assert!(matches!(err, diploma::DiplomaError::EmptyRoster));
}
