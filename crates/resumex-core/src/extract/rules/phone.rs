//! Phone number extraction and validation.

use tracing::trace;

use super::normalize::{clean_phone, format_phone, phone_digits};
use super::patterns::{PHONE_PATTERNS, PHONE_SHAPES};
use super::{ExtractionMatch, FieldExtractor, all_valid, first_valid};

/// Phone field extractor.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_valid(&PHONE_PATTERNS, text, accept)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        all_valid(&PHONE_PATTERNS, text, accept)
    }
}

fn accept(candidate: &str) -> Option<String> {
    if validate_phone(candidate) {
        Some(format_phone(candidate))
    } else {
        trace!(candidate = %candidate.trim(), "rejected phone candidate");
        None
    }
}

/// Extract the best phone number from text, formatted for display.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}

/// Validate a phone number.
///
/// Formatting characters are ignored. The number must have 10-15 digits and
/// match a North American, Indian mobile, or generic international shape.
pub fn validate_phone(phone: &str) -> bool {
    let cleaned = clean_phone(phone);
    let digit_count = phone_digits(&cleaned).len();

    if !(10..=15).contains(&digit_count) {
        return false;
    }

    PHONE_SHAPES.iter().any(|shape| shape.is_match(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone_valid() {
        assert!(validate_phone("(555) 234-5678"));
        assert!(validate_phone("5551234567")); // Generic shape
        assert!(validate_phone("+1 555 234 5678"));
        assert!(validate_phone("+91 98765 43210"));
        assert!(validate_phone("+44 20 7946 0958"));
    }

    #[test]
    fn test_validate_phone_invalid() {
        assert!(!validate_phone("555-1234")); // Too short
        assert!(!validate_phone("1234567890123456")); // Too long
        assert!(!validate_phone("0123456789")); // Leading zero fits no shape
        assert!(!validate_phone("not a phone"));
    }

    #[test]
    fn test_extract_phone_bare_digits() {
        assert_eq!(
            extract_phone("Reach me at 5551234567"),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_extract_phone_with_country_code() {
        let found = PhoneExtractor::new()
            .extract("Mobile: +1 (555) 234-5678")
            .unwrap();
        assert_eq!(found.value, "+1 (555) 234-5678");
        assert_eq!(found.rule, "phone-north-american");
    }

    #[test]
    fn test_north_american_shape_takes_priority() {
        // The ten digits after the country code already form a valid number.
        assert_eq!(
            extract_phone("Phone: +91 9876543210"),
            Some("(987) 654-3210".to_string())
        );
    }

    #[test]
    fn test_extract_phone_contiguous_indian() {
        let found = PhoneExtractor::new().extract("Phone: +919876543210").unwrap();
        assert_eq!(found.value, "919876543210");
        assert_eq!(found.rule, "phone-international");
    }

    #[test]
    fn test_extract_phone_parenthesized_area_code() {
        assert_eq!(
            extract_phone("John Doe\n(555) 123-4567\n"),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_extract_phone_none() {
        assert_eq!(extract_phone("Graduated 2016 - 2020, GPA 3.9"), None);
    }

    #[test]
    fn test_first_candidate_of_a_rule_wins() {
        let found = PhoneExtractor::new()
            .extract("Call 555-234-5678 or 555-987-6543")
            .unwrap();
        assert_eq!(found.value, "(555) 234-5678");
        assert_eq!(found.rule, "phone-north-american");
    }

    #[test]
    fn test_labeled_rule_catches_loose_grouping() {
        // No run of three digits, so none of the shaped rules match.
        let found = PhoneExtractor::new()
            .extract("Phone: 98 76 54 32 10")
            .unwrap();
        assert_eq!(found.value, "(987) 654-3210");
        assert_eq!(found.rule, "phone-labeled");
    }

    #[test]
    fn test_grouped_and_digit_rules_rank_last() {
        let text = "555 234 5678";
        assert!(PHONE_PATTERNS[4].candidates(text).next().is_some());
        let all = PhoneExtractor::new().extract_all(text);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].rule, "phone-north-american");

        let text = "447911123456";
        assert!(PHONE_PATTERNS[5].candidates(text).next().is_some());
        let found = PhoneExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "447911123456");
        assert_eq!(found.rule, "phone-international");
    }

    #[test]
    fn test_plus_sign_is_not_captured() {
        let found = PhoneExtractor::new()
            .extract("Reach: +44 20 7946 0958")
            .unwrap();
        assert_eq!(found.value, "442079460958");
        assert_eq!(found.rule, "phone-international");
    }
}
