//! Candidate name extraction and validation.

use tracing::trace;

use super::exclusions::is_excluded_word;
use super::normalize::normalize_name;
use super::patterns::{FALLBACK_NAME_LINE, NAME_PATTERNS};
use super::{ExtractionMatch, FieldExtractor, all_valid, first_valid};

/// Rule label reported for names found by the leading-lines fallback.
pub const FALLBACK_RULE: &str = "leading-lines";

/// Name field extractor.
pub struct NameExtractor {
    fallback: bool,
    fallback_lines: usize,
}

impl NameExtractor {
    /// Create a new name extractor.
    pub fn new() -> Self {
        Self {
            fallback: true,
            fallback_lines: 5,
        }
    }

    /// Set whether to scan leading lines when no pattern yields a name.
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set how many non-blank leading lines the fallback scans.
    pub fn with_fallback_lines(mut self, lines: usize) -> Self {
        self.fallback_lines = lines;
        self
    }

    /// Look for a line holding exactly two capitalized words.
    fn fallback_name(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let base = text.as_ptr() as usize;

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(self.fallback_lines)
            .find(|line| is_bare_name_line(line))
            .map(|line| {
                let start = line.as_ptr() as usize - base;
                ExtractionMatch::new(normalize_name(line), FALLBACK_RULE, NAME_PATTERNS.len(), line)
                    .with_position(start, start + line.len())
            })
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_valid(&NAME_PATTERNS, text, accept).or_else(|| {
            if self.fallback {
                self.fallback_name(text)
            } else {
                None
            }
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = all_valid(&NAME_PATTERNS, text, accept);

        if self.fallback && results.is_empty() {
            results.extend(self.fallback_name(text));
        }

        results
    }
}

fn accept(candidate: &str) -> Option<String> {
    let name = normalize_name(candidate);
    if validate_name(&name) {
        Some(name)
    } else {
        trace!(candidate = %name, "rejected name candidate");
        None
    }
}

fn is_bare_name_line(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    let len = line.chars().count();

    words.len() == 2
        && (4..=30).contains(&len)
        && !line.chars().any(|c| c.is_ascii_digit())
        && FALLBACK_NAME_LINE.is_match(line)
        && !words.iter().any(|w| is_excluded_word(w))
        && validate_name(line)
}

/// Extract the candidate's name from text.
pub fn extract_name(text: &str) -> Option<String> {
    NameExtractor::new().extract(text).map(|m| m.value)
}

/// Validate a full name.
///
/// Accepts 2-4 alphabetic words of at least two letters each, 2-50
/// characters overall, none of which is a job title or section word.
pub fn validate_name(name: &str) -> bool {
    let trimmed = name.trim();
    let len = trimmed.chars().count();

    if !(2..=50).contains(&len) {
        return false;
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return false;
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }

    let valid_words = words
        .iter()
        .all(|w| w.len() >= 2 && w.chars().all(|c| c.is_ascii_alphabetic()));

    valid_words && !words.iter().any(|w| is_excluded_word(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Jane Doe"));
        assert!(validate_name("  mary ann de souza "));
        assert!(validate_name("Li Wu"));
    }

    #[test]
    fn test_validate_name_invalid() {
        assert!(!validate_name("Jane")); // Single name
        assert!(!validate_name("J Doe")); // One-letter word
        assert!(!validate_name("Jane Doe 3rd")); // Digits
        assert!(!validate_name("Jane O'Neil")); // Punctuation
        assert!(!validate_name("Anna Maria Lisa Marie Smith")); // Five words
        assert!(!validate_name("Senior Engineer")); // Job title
        assert!(!validate_name("Jane Developer"));
        assert!(!validate_name(&format!("Jane {}", "a".repeat(50))));
    }

    #[test]
    fn test_extract_name_labeled() {
        let text = "Some header\nFull Name: Priya Raman\nAbout Me";
        let found = NameExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "Priya Raman");
        assert_eq!(found.rule, "name-labeled");
    }

    #[test]
    fn test_extract_name_contact_section() {
        let text = "Personal Information\nCarlos Mendez\ncarlos@mail.org";
        let found = NameExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "Carlos Mendez");
        assert_eq!(found.rule, "name-contact-section");
    }

    #[test]
    fn test_extract_name_resume_header() {
        let found = NameExtractor::new()
            .extract("Resume of Alan Turing\n\nwork history")
            .unwrap();
        assert_eq!(found.value, "Alan Turing");
        assert_eq!(found.rule, "name-resume-header");
    }

    #[test]
    fn test_extract_name_standalone_line() {
        let text = "\nJohn Doe\nSoftware Developer\njohn.doe@email.com\n";
        let found = NameExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "John Doe");
        assert_eq!(found.rule, "name-standalone-line");
    }

    #[test]
    fn test_job_title_is_not_a_name() {
        assert_eq!(extract_name("Senior Software Engineer\njohn@corp.com"), None);
    }

    #[test]
    fn test_fallback_two_short_words() {
        // Two-letter surnames are below the pattern minimum but valid names.
        let text = "objective: build things\nAl Wu\nal.wu@corp.com";
        let found = NameExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "Al Wu");
        assert_eq!(found.rule, FALLBACK_RULE);
        let (start, end) = found.position.unwrap();
        assert_eq!(&text[start..end], "Al Wu");
    }

    #[test]
    fn test_fallback_window() {
        let text = "one\ntwo\nthree\nfour\nfive\nAl Wu";
        assert!(NameExtractor::new().extract(text).is_none());
        assert!(NameExtractor::new().with_fallback_lines(6).extract(text).is_some());
        assert!(
            NameExtractor::new()
                .with_fallback(false)
                .with_fallback_lines(6)
                .extract(text)
                .is_none()
        );
    }

    #[test]
    fn test_first_standalone_line_wins() {
        let found = NameExtractor::new()
            .extract("Jane Doe\nJohn Smith\n")
            .unwrap();
        assert_eq!(found.value, "Jane Doe");
        assert_eq!(found.rule, "name-standalone-line");
    }

    #[test]
    fn test_extract_name_line_start() {
        let text = "Jane Doe  |  Portland, Oregon\nSoftware engineer with ten years";
        let found = NameExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "Jane Doe");
        assert_eq!(found.rule, "name-line-start");
    }

    #[test]
    fn test_contact_heading_takes_next_capitalized_words() {
        let found = NameExtractor::new()
            .extract("Contact\nPhone Number: 555-234-5678")
            .unwrap();
        assert_eq!(found.value, "Phone Number");
        assert_eq!(found.rule, "name-contact-section");
    }
}
