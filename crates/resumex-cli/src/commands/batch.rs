//! Batch processing command for multiple résumé text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use resumex_core::{ContactExtractor, ExtractionResult, ResumeParser};

use super::extract::{OutputFormat, format_result, read_input};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files",
            )?
            .progress_chars("=>-"),
    );

    // The extractor holds no mutable state, so workers share one instance.
    let extractor = Arc::new(ContactExtractor::from_config(&config.extraction));

    let mut outcomes = stream::iter(files)
        .map(|path| {
            let extractor = Arc::clone(&extractor);
            tokio::task::spawn_blocking(move || {
                let file_start = Instant::now();
                let outcome = process_single_file(&path, extractor.as_ref());
                (path, outcome, file_start.elapsed().as_millis() as u64)
            })
        })
        .buffered(args.jobs.max(1));

    let mut results = Vec::new();

    while let Some(joined) = outcomes.next().await {
        let (path, outcome, processing_time_ms) = joined?;

        match outcome {
            Ok(result) => {
                results.push(ProcessResult {
                    path,
                    result: Some(result),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        result: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_with_message("Complete");

    // Write outputs
    let successful: Vec<_> = results.iter().filter(|r| r.result.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for item in &successful {
            let Some(result) = &item.result else {
                continue;
            };

            let output_name = item
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("resume");

            let output_path =
                output_dir.join(format!("{}.{}", output_name, args.format.extension()));
            let content = format_result(result, args.format, false, true)?;

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    let complete = successful
        .iter()
        .filter(|r| r.result.as_ref().is_some_and(|res| res.missing.is_empty()))
        .count();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful ({} with all fields), {} failed",
        style(successful.len()).green(),
        complete,
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(
    path: &Path,
    extractor: &ContactExtractor,
) -> anyhow::Result<ExtractionResult> {
    let text = read_input(path)?;
    if text.trim().is_empty() {
        warn!("{} contains no text", path.display());
    }

    Ok(extractor.parse(&text))
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "name",
        "email",
        "phone",
        "missing",
        "processing_time_ms",
        "error",
    ])?;

    for item in results {
        let filename = item.path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        let time_ms = item.processing_time_ms.to_string();

        if let Some(result) = &item.result {
            let missing = result
                .missing
                .iter()
                .map(|f| f.label())
                .collect::<Vec<_>>()
                .join(";");

            wtr.write_record([
                filename,
                "success",
                result.info.name.as_deref().unwrap_or(""),
                result.info.email.as_deref().unwrap_or(""),
                result.info.phone.as_deref().unwrap_or(""),
                missing.as_str(),
                time_ms.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                time_ms.as_str(),
                item.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
