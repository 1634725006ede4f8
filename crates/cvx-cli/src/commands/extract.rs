//! Extract command - pull candidate fields from a single resume file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use cvx_core::{CandidateRecord, CvxConfig, ResumePipeline};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (.pdf or .docx)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// OCR model directory (overrides config)
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Skip OCR even for scanned PDFs
    #[arg(long)]
    text_only: bool,

    /// Show extraction warnings and timing
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = if let Some(path) = config_path {
        CvxConfig::from_file(std::path::Path::new(path))?
    } else {
        CvxConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Building pipeline...");
    pb.set_position(10);

    let mut pipeline = ResumePipeline::new(&config);
    if !args.text_only {
        let model_dir = args.model_dir.clone().unwrap_or_else(|| config.pdf.model_dir.clone());
        match cvx_core::PureOcrEngine::from_dir(&model_dir) {
            Ok(engine) => {
                debug!("OCR engine loaded from {}", model_dir.display());
                pipeline = pipeline.with_ocr(Box::new(engine));
            }
            Err(e) => {
                // Text-layer PDFs and DOCX files still work without OCR.
                warn!("OCR engine unavailable ({}), scanned PDFs will come back empty", e);
            }
        }
    }

    pb.set_message("Extracting...");
    pb.set_position(40);

    let result = pipeline.process(&args.input)?;

    pb.set_position(90);
    pb.finish_with_message("Done");

    let output = format_record(&result.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings {
        if result.warnings.is_empty() {
            println!("{} Extraction completed without warnings", style("ℹ").blue());
        } else {
            eprintln!("{}", style("Extraction warnings:").yellow());
            for warning in &result.warnings {
                eprintln!("  - {}", warning);
            }
        }
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_record(record: &CandidateRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Text => {
            let mut out = String::new();
            let none = "-".to_string();
            out.push_str(&format!("Name:  {}\n", record.name.as_ref().unwrap_or(&none)));
            out.push_str(&format!("Phone: {}\n", record.phone.as_ref().unwrap_or(&none)));
            out.push_str(&format!("Email: {}\n", record.email.as_ref().unwrap_or(&none)));

            let mut skills: Vec<&str> = record.skills.iter().map(String::as_str).collect();
            skills.sort_unstable();
            out.push_str(&format!("Skills: {}\n", skills.join(", ")));

            out.push_str("Experience:\n");
            for snippet in &record.experience_snippets {
                out.push_str(&format!("  - {}\n", snippet));
            }
            Ok(out)
        }
    }
}
