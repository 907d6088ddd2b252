//! Extract command - pull contact details from a single decoded résumé.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use resumex_core::extract::rules::ExtractionMatch;
use resumex_core::intake::DocumentKind;
use resumex_core::{ContactExtractor, ExtractionResult, Field, ResumeParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show which rule matched each field and what is still missing
    #[arg(long)]
    explain: bool,

    /// Leave the document text out of JSON output
    #[arg(long)]
    omit_text: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// JSON view of an extraction result.
#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<Matches<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<&'a [Field]>,
}

#[derive(Serialize)]
struct Matches<'a> {
    name: Option<&'a ExtractionMatch<String>>,
    email: Option<&'a ExtractionMatch<String>>,
    phone: Option<&'a ExtractionMatch<String>>,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;
    let text = read_input(&args.input)?;

    info!("Extracting from {}", args.input.display());

    let extractor = ContactExtractor::from_config(&config.extraction);
    let result = extractor.parse(&text);

    let output = format_result(&result, args.format, args.explain, args.omit_text)?;

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

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read decoded résumé text from a file or stdin.
pub fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    if let Some(kind) = DocumentKind::from_path(input) {
        anyhow::bail!(
            "{} is a {} document; decode it to plain text first",
            input.display(),
            kind.extension()
        );
    }

    Ok(fs::read_to_string(input)?)
}

/// Render an extraction result in the requested format.
pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    explain: bool,
    omit_text: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => format_json(result, explain, omit_text),
        OutputFormat::Csv => format_csv(result, explain),
        OutputFormat::Text => Ok(format_text(result, explain)),
    }
}

fn format_json(
    result: &ExtractionResult,
    explain: bool,
    omit_text: bool,
) -> anyhow::Result<String> {
    let info = &result.info;

    let report = Report {
        name: info.name.as_deref(),
        email: info.email.as_deref(),
        phone: info.phone.as_deref(),
        text: (!omit_text).then_some(info.text.as_str()),
        matches: explain.then(|| Matches {
            name: result.name.as_ref(),
            email: result.email.as_ref(),
            phone: result.phone.as_ref(),
        }),
        missing: explain.then_some(result.missing.as_slice()),
    };

    Ok(serde_json::to_string(&report)?)
}

fn format_csv(result: &ExtractionResult, explain: bool) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["name", "email", "phone", "missing"];
    if explain {
        header.extend(["name_rule", "email_rule", "phone_rule"]);
    }
    wtr.write_record(&header)?;

    let missing = result
        .missing
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(";");

    let mut record = vec![
        result.info.name.clone().unwrap_or_default(),
        result.info.email.clone().unwrap_or_default(),
        result.info.phone.clone().unwrap_or_default(),
        missing,
    ];
    if explain {
        for field in Field::ALL {
            record.push(
                result
                    .field_match(field)
                    .map(|m| m.rule.to_string())
                    .unwrap_or_default(),
            );
        }
    }
    wtr.write_record(&record)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult, explain: bool) -> String {
    let mut output = String::new();

    for field in Field::ALL {
        match (result.info.get(field), result.field_match(field)) {
            (Some(value), Some(m)) if explain => {
                output.push_str(&format!("{}: {} [{}]\n", field, value, m.rule));
            }
            (Some(value), _) => {
                output.push_str(&format!("{}: {}\n", field, value));
            }
            (None, _) => {
                output.push_str(&format!("{}: Not found\n", field));
            }
        }
    }

    if explain && !result.missing.is_empty() {
        let missing: Vec<_> = result.missing.iter().map(|f| f.label()).collect();
        output.push_str(&format!("\nStill need: {}\n", missing.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionResult {
        ContactExtractor::new().parse("Jane Smith\njane@smith.io\n")
    }

    #[test]
    fn test_format_json_omits_absent() {
        let json = format_result(&sample(), OutputFormat::Json, false, true).unwrap();
        assert_eq!(json, r#"{"name":"Jane Smith","email":"jane@smith.io"}"#);
    }

    #[test]
    fn test_format_json_explain() {
        let json = format_result(&sample(), OutputFormat::Json, true, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["matches"]["name"]["rule"], "name-standalone-line");
        assert_eq!(value["missing"], serde_json::json!(["phone"]));
    }

    #[test]
    fn test_format_csv() {
        let csv = format_result(&sample(), OutputFormat::Csv, false, false).unwrap();
        assert_eq!(csv, "name,email,phone,missing\nJane Smith,jane@smith.io,,Phone\n");
    }

    #[test]
    fn test_format_text() {
        let text = format_result(&sample(), OutputFormat::Text, true, false).unwrap();
        assert!(text.contains("Name: Jane Smith [name-standalone-line]"));
        assert!(text.contains("Phone: Not found"));
        assert!(text.contains("Still need: Phone"));
    }
}
