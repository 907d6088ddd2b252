//! Contact extraction engine combining the per-field rule banks.

use serde::Serialize;
use tracing::{debug, info};

use crate::collect::missing_fields;
use crate::models::config::ExtractionConfig;
use crate::models::extracted::{ExtractedInfo, Field};

use super::rules::{
    EmailExtractor, ExtractionMatch, FieldExtractor, NameExtractor, PhoneExtractor,
};

/// Result of contact extraction with per-field diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted contact fields.
    pub info: ExtractedInfo,
    /// Winning name match.
    pub name: Option<ExtractionMatch<String>>,
    /// Winning email match.
    pub email: Option<ExtractionMatch<String>>,
    /// Winning phone match.
    pub phone: Option<ExtractionMatch<String>>,
    /// Fields the collection flow still has to ask for.
    pub missing: Vec<Field>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
}

impl ExtractionResult {
    fn empty() -> Self {
        Self {
            info: ExtractedInfo::empty(),
            name: None,
            email: None,
            phone: None,
            missing: Field::ALL.to_vec(),
            warnings: Vec::new(),
        }
    }

    /// Winning match of a single field.
    pub fn field_match(&self, field: Field) -> Option<&ExtractionMatch<String>> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Phone => self.phone.as_ref(),
        }
    }
}

/// Trait for résumé parsing.
pub trait ResumeParser {
    /// Extract contact fields from decoded document text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Stateless engine that runs each field's pattern bank independently.
#[derive(Debug, Clone)]
pub struct ContactExtractor {
    /// Scan leading lines for a bare name when no pattern matched.
    name_fallback: bool,
    /// Non-blank lines scanned by the name fallback.
    fallback_lines: usize,
}

impl ContactExtractor {
    /// Create a new extractor with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            name_fallback: config.name_fallback,
            fallback_lines: config.fallback_lines,
        }
    }

    /// Set the leading-lines name fallback.
    pub fn with_name_fallback(mut self, enabled: bool) -> Self {
        self.name_fallback = enabled;
        self
    }

    /// Set how many non-blank lines the name fallback scans.
    pub fn with_fallback_lines(mut self, lines: usize) -> Self {
        self.fallback_lines = lines;
        self
    }

    /// Extract contact fields, discarding diagnostics.
    pub fn extract(&self, text: &str) -> ExtractedInfo {
        self.parse(text).info
    }

    fn name_extractor(&self) -> NameExtractor {
        NameExtractor::new()
            .with_fallback(self.name_fallback)
            .with_fallback_lines(self.fallback_lines)
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser for ContactExtractor {
    fn parse(&self, text: &str) -> ExtractionResult {
        if text.trim().is_empty() {
            debug!("Empty document text, nothing to extract");
            return ExtractionResult::empty();
        }

        info!("Extracting contact details from {} characters of text", text.len());

        let name = self.name_extractor().extract(text);
        let email = EmailExtractor::new().extract(text);
        let phone = PhoneExtractor::new().extract(text);

        let found_by_field = [
            (Field::Name, &name),
            (Field::Email, &email),
            (Field::Phone, &phone),
        ];
        for (field, found) in found_by_field {
            match found {
                Some(m) => debug!(
                    "{} matched by rule {} (priority {})",
                    field, m.rule, m.priority
                ),
                None => debug!("{} not found", field),
            }
        }

        let info = ExtractedInfo {
            name: name.as_ref().map(|m| m.value.clone()),
            email: email.as_ref().map(|m| m.value.clone()),
            phone: phone.as_ref().map(|m| m.value.clone()),
            text: text.to_string(),
        };

        let missing = missing_fields(&info);
        let warnings = missing
            .iter()
            .map(|f| format!("Could not extract {}", f.label().to_lowercase()))
            .collect();

        debug!("Extracted {}/3 contact fields", 3 - missing.len());

        ExtractionResult {
            info,
            name,
            email,
            phone,
            missing,
            warnings,
        }
    }
}

/// Extract name, email and phone from decoded résumé text with default settings.
///
/// Never fails: fields without a validated candidate are `None`. Blank input
/// yields an all-absent result with empty `text`.
pub fn extract_info_from_text(text: &str) -> ExtractedInfo {
    ContactExtractor::new().extract(text)
}
