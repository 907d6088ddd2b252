//! Check command - upload acceptance for a résumé document.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use resumex_core::intake::{DocumentKind, SourceDescriptor, check_source};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Document to check
    #[arg(required = true)]
    input: PathBuf,

    /// Declared MIME type (default: derived from the file extension)
    #[arg(long)]
    mime: Option<String>,
}

pub async fn run(args: CheckArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let metadata = fs::metadata(&args.input)?;

    let mime_type = match args.mime {
        Some(mime) => mime,
        None => DocumentKind::from_path(&args.input)
            .map(|k| k.mime_type().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string()),
    };

    let mut source = SourceDescriptor::new(mime_type, metadata.len());
    if let Some(name) = args.input.file_name().and_then(|n| n.to_str()) {
        source = source.with_file_name(name);
    }
    debug!("Checking {:?}", source);

    match check_source(&source, &config.intake) {
        Ok(kind) => {
            println!(
                "{} {} accepted as {} ({} bytes)",
                style("✓").green(),
                args.input.display(),
                kind.extension(),
                source.size_bytes
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            std::process::exit(1);
        }
    }
}
