//! # Diploma CLI
//!
//! Command-line front end for the diploma batch generator.
//!
//! ## Usage
//!
//! ```bash
//! # Preview the first roster row as a PNG
//! diploma preview --template plantilla.png --roster estudiantes.xlsx
//!
//! # Export one PDF per row into a ZIP archive
//! diploma export --template plantilla.png --roster estudiantes.xlsx --out diplomas.zip
//!
//! # Custom layout and texts
//! diploma export --template plantilla.png --roster estudiantes.csv \
//!     --config diseno.json --course "DIPLOMADO EN GESTIÓN" --id-prefix "T.I."
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use diploma::{parse_config, BatchExporter, DiplomaRenderer, GenerationConfig, ProgressSink};
use render_core::{FontSource, PageEncoding};
use roster::Student;

/// Diploma - batch certificate generator
#[derive(Parser, Debug)]
#[command(name = "diploma")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the first roster row and save it as a PNG image
    Preview {
        #[command(flatten)]
        inputs: Inputs,

        /// Output image path
        #[arg(long, default_value = "preview.png")]
        out: PathBuf,
    },

    /// Render every roster row and save a ZIP archive of PDFs
    Export {
        #[command(flatten)]
        inputs: Inputs,

        /// Output archive path
        #[arg(long, default_value = "diplomas.zip")]
        out: PathBuf,

        /// Embed pages losslessly instead of as JPEG
        #[arg(long)]
        lossless: bool,
    },
}

#[derive(clap::Args, Debug)]
struct Inputs {
    /// Template image (PNG or JPEG)
    #[arg(long)]
    template: PathBuf,

    /// Student roster (XLSX or CSV) with "Nombres" and "Identificacion" columns
    #[arg(long)]
    roster: PathBuf,

    /// Design config JSON; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// TrueType font file; the built-in font is used when unavailable
    #[arg(long, default_value = "fuente.ttf")]
    font: PathBuf,

    /// Override the intro line
    #[arg(long)]
    intro: Option<String>,

    /// Override the course line
    #[arg(long)]
    course: Option<String>,

    /// Override the hours line
    #[arg(long)]
    hours: Option<String>,

    /// Override the identifier prefix
    #[arg(long = "id-prefix")]
    id_prefix: Option<String>,
}

/// Progress sink that logs batch progress
struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn report(&mut self, fraction: f64) {
        tracing::info!("rendered {:.0}%", fraction * 100.0);
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Preview { inputs, out } => run_preview(&inputs, &out),
        Commands::Export {
            inputs,
            out,
            lossless,
        } => run_export(&inputs, &out, lossless),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}

/// Everything one generation run needs, loaded once and treated as read-only
struct RunInputs {
    template: Vec<u8>,
    students: Vec<Student>,
    config: GenerationConfig,
    font: FontSource,
}

fn load_inputs(inputs: &Inputs) -> Result<RunInputs> {
    let template = std::fs::read(&inputs.template)
        .with_context(|| format!("failed to read template image {}", inputs.template.display()))?;

    let roster_bytes = std::fs::read(&inputs.roster)
        .with_context(|| format!("failed to read roster {}", inputs.roster.display()))?;
    let students = roster::parse_roster(&roster_bytes)
        .with_context(|| format!("failed to parse roster {}", inputs.roster.display()))?;

    let mut config = match &inputs.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            parse_config(&json)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => GenerationConfig::default(),
    };

    if let Some(intro) = &inputs.intro {
        config.texts.intro = intro.clone();
    }
    if let Some(course) = &inputs.course {
        config.texts.course = course.clone();
    }
    if let Some(hours) = &inputs.hours {
        config.texts.hours = hours.clone();
    }
    if let Some(prefix) = &inputs.id_prefix {
        config.design.id_prefix = prefix.clone();
    }

    if !inputs.font.exists() {
        tracing::warn!(
            "font file {} not found, using the built-in fallback font",
            inputs.font.display()
        );
    }
    let font = FontSource::from_path(&inputs.font);

    Ok(RunInputs {
        template,
        students,
        config,
        font,
    })
}

fn run_preview(inputs: &Inputs, out: &Path) -> Result<()> {
    let run = load_inputs(inputs)?;

    let renderer = DiplomaRenderer::new(&run.config.design, &run.config.texts, &run.font);
    let exporter = BatchExporter::new(renderer);
    let png = exporter.preview(&run.template, &run.students)?;

    std::fs::write(out, png)
        .with_context(|| format!("failed to write preview {}", out.display()))?;

    tracing::info!(
        "wrote preview of the first of {} rows to {}",
        run.students.len(),
        out.display()
    );
    Ok(())
}

fn run_export(inputs: &Inputs, out: &Path, lossless: bool) -> Result<()> {
    let run = load_inputs(inputs)?;

    let encoding = if lossless {
        PageEncoding::Flate
    } else {
        PageEncoding::Jpeg
    };

    let renderer = DiplomaRenderer::new(&run.config.design, &run.config.texts, &run.font);
    let exporter = BatchExporter::new(renderer).with_encoding(encoding);

    let mut progress = ConsoleProgress;
    let archive = exporter.export_all(&run.template, &run.students, &mut progress)?;

    std::fs::write(out, &archive)
        .with_context(|| format!("failed to write archive {}", out.display()))?;

    tracing::info!("wrote {} diplomas to {}", run.students.len(), out.display());
    Ok(())
}
