//! Email extraction and validation.

use tracing::trace;

use super::exclusions::is_placeholder_domain;
use super::normalize::normalize_email;
use super::patterns::{EMAIL_PATTERNS, EMAIL_SHAPE};
use super::{ExtractionMatch, FieldExtractor, all_valid, first_valid};

/// Email field extractor.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_valid(&EMAIL_PATTERNS, text, accept)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        all_valid(&EMAIL_PATTERNS, text, accept)
    }
}

fn accept(candidate: &str) -> Option<String> {
    let email = normalize_email(candidate);
    if validate_email(&email) {
        Some(email)
    } else {
        trace!(candidate = %email, "rejected email candidate");
        None
    }
}

/// Extract the best email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor::new().extract(text).map(|m| m.value)
}

/// Validate an email address.
///
/// The address is trimmed and lower-cased before checking. Syntactically
/// valid addresses on placeholder domains are rejected.
pub fn validate_email(email: &str) -> bool {
    let email = normalize_email(email);

    if !EMAIL_SHAPE.is_match(&email) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    if domain.len() < 4 || domain.len() > 255 {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return false;
    }

    !is_placeholder_domain(domain)
}
