//! Rule-based field extractors for résumé contact details.

pub mod email;
pub mod exclusions;
pub mod name;
pub mod normalize;
pub mod patterns;
pub mod phone;

pub use email::{EmailExtractor, extract_email, validate_email};
pub use exclusions::{
    EXCLUDED_NAME_WORDS, PLACEHOLDER_DOMAINS, is_excluded_word, is_placeholder_domain,
};
pub use name::{NameExtractor, extract_name, validate_name};
pub use normalize::{clean_phone, format_phone, normalize_email, normalize_name};
pub use phone::{PhoneExtractor, extract_phone, validate_phone};

use serde::Serialize;

use patterns::PatternRule;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the highest-priority valid occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all valid occurrences in priority order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A validated field value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionMatch<T> {
    /// Normalized value.
    pub value: T,
    /// Label of the rule that produced the value.
    pub rule: &'static str,
    /// Position of that rule in its bank (lower wins).
    pub priority: usize,
    /// Byte span in source text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: &'static str, priority: usize, source: impl Into<String>) -> Self {
        Self {
            value,
            rule,
            priority,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Walk a bank in priority order and return the first candidate `accept` keeps.
///
/// Candidates are evaluated lazily, so later rules never run once a value wins.
pub(crate) fn first_valid<F>(
    bank: &[PatternRule],
    text: &str,
    accept: F,
) -> Option<ExtractionMatch<String>>
where
    F: Fn(&str) -> Option<String>,
{
    bank.iter().enumerate().find_map(|(priority, rule)| {
        rule.candidates(text).find_map(|(candidate, start, end)| {
            accept(candidate).map(|value| {
                ExtractionMatch::new(value, rule.label, priority, candidate)
                    .with_position(start, end)
            })
        })
    })
}

/// Every accepted candidate of a bank in priority order, first occurrence of each value only.
pub(crate) fn all_valid<F>(
    bank: &[PatternRule],
    text: &str,
    accept: F,
) -> Vec<ExtractionMatch<String>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut results: Vec<ExtractionMatch<String>> = Vec::new();

    for (priority, rule) in bank.iter().enumerate() {
        for (candidate, start, end) in rule.candidates(text) {
            let Some(value) = accept(candidate) else {
                continue;
            };

            // Skip if already found by a higher-priority rule
            if results.iter().any(|r| r.value == value) {
                continue;
            }

            results.push(
                ExtractionMatch::new(value, rule.label, priority, candidate)
                    .with_position(start, end),
            );
        }
    }

    results
}
