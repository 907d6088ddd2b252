//! Ordered regex pattern banks for résumé contact extraction.
//!
//! Each bank is evaluated front to back; the position of a rule in its bank
//! is its priority. Rules are compiled once and shared read-only.

use lazy_static::lazy_static;
use regex::Regex;

/// A single match rule of a pattern bank.
#[derive(Debug)]
pub struct PatternRule {
    /// Short identifier reported in extraction diagnostics.
    pub label: &'static str,
    /// Compiled pattern.
    pub regex: Regex,
    /// Capture group holding the value (0 = the whole match).
    pub group: usize,
}

impl PatternRule {
    fn new(label: &'static str, group: usize, pattern: &str) -> Self {
        Self {
            label,
            regex: Regex::new(pattern).unwrap(),
            group,
        }
    }

    /// Candidate values in left-to-right order with their byte spans.
    pub fn candidates<'t>(
        &'t self,
        text: &'t str,
    ) -> impl Iterator<Item = (&'t str, usize, usize)> + 't {
        self.regex.captures_iter(text).filter_map(move |caps| {
            caps.get(self.group)
                .map(|m| (m.as_str(), m.start(), m.end()))
        })
    }
}

lazy_static! {
    // Email bank
    pub static ref EMAIL_PATTERNS: Vec<PatternRule> = vec![
        PatternRule::new(
            "email-labeled",
            1,
            r"(?i)(?:e-?mail|mail|contact)[:\s]*([a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,})",
        ),
        PatternRule::new(
            "email-contact-section",
            1,
            r"(?i)(?:contact|reach|correspondence)(?s:.){0,50}?([a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,})",
        ),
        PatternRule::new(
            "email-bare",
            0,
            r"\b[a-zA-Z0-9][a-zA-Z0-9._%+-]*@[a-zA-Z0-9][a-zA-Z0-9.-]*\.[a-zA-Z]{2,}\b",
        ),
        PatternRule::new(
            "email-any",
            1,
            r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})",
        ),
    ];

    /// Phone bank.
    ///
    /// The shaped rules open with `\b`, which cannot sit before a `+`, so a
    /// number written "+44 20 7946 0958" is captured from its first digit and
    /// reported without the plus sign.
    pub static ref PHONE_PATTERNS: Vec<PatternRule> = vec![
        PatternRule::new(
            "phone-north-american",
            0,
            r"\b(?:\+?1[-\s.]?)?\(?([0-9]{3})\)?[-\s.]?([0-9]{3})[-\s.]?([0-9]{4})\b",
        ),
        PatternRule::new(
            "phone-international",
            0,
            r"\b(?:\+?[1-9][0-9]{0,3}[-\s.]?)?\(?([0-9]{2,4})\)?[-\s.]?([0-9]{3,4})[-\s.]?([0-9]{3,4})\b",
        ),
        PatternRule::new(
            "phone-indian",
            0,
            r"\b(?:\+?91[-\s.]?)?([0-9]{10})\b",
        ),
        PatternRule::new(
            "phone-labeled",
            1,
            r"(?i)(?:phone|mobile|cell|tel|contact|number)[:\s]*(\+?[0-9\s().-]{10,15})",
        ),
        PatternRule::new(
            "phone-grouped",
            1,
            r"\b([0-9]{3}[-\s.]?[0-9]{3}[-\s.]?[0-9]{4})\b",
        ),
        PatternRule::new(
            "phone-digits",
            1,
            r"\b([0-9]{10,15})\b",
        ),
    ];

    /// Name bank. Labels are case-insensitive; the captured words must be
    /// capitalized and stay on one line.
    ///
    /// The contact-section rule takes the first capitalized words within 100
    /// characters of the heading, whatever they are, so "Contact\nPhone Number:"
    /// yields "Phone Number".
    pub static ref NAME_PATTERNS: Vec<PatternRule> = vec![
        PatternRule::new(
            "name-labeled",
            1,
            r"(?m)^[ \t]*(?i:name|full[ \t]*name|candidate[ \t]*name)[ \t]*:?[ \t]*([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,3})[ \t]*\r?$",
        ),
        PatternRule::new(
            "name-contact-section",
            1,
            r"(?i:contact[ \t]*(?:info(?:rmation)?)?|personal[ \t]*(?:info(?:rmation)?)?)(?s:.){0,100}?\b([A-Z][a-z]{2,}(?:[ \t]+[A-Z][a-z]{2,}){1,2})\b",
        ),
        PatternRule::new(
            "name-resume-header",
            1,
            r"(?m)^[ \t]*(?i:resume|cv|curriculum[ \t]+vitae)[ \t]*(?i:of|for|-|:)[ \t]*([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2})\b",
        ),
        PatternRule::new(
            "name-standalone-line",
            1,
            r"(?m)^[ \t]*([A-Z][a-z]{2,}(?:[ \t]+[A-Z][a-z]{2,}){1,2})[ \t]*\r?$",
        ),
        PatternRule::new(
            "name-line-start",
            1,
            r"(?m)^([A-Z][a-z]{2,}(?:[ \t]+[A-Z][a-z]{2,}){1,2})\s",
        ),
    ];

    // Validation shapes
    pub static ref EMAIL_SHAPE: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();

    pub static ref PHONE_SHAPES: [Regex; 3] = [
        // North American with valid area and exchange codes
        Regex::new(r"^\+?1?[2-9][0-9]{2}[2-9][0-9]{2}[0-9]{4}$").unwrap(),
        // Indian mobile
        Regex::new(r"^\+?91[6-9][0-9]{9}$").unwrap(),
        // Generic international
        Regex::new(r"^\+?[1-9][0-9]{7,14}$").unwrap(),
    ];

    pub static ref FALLBACK_NAME_LINE: Regex = Regex::new(
        r"^[A-Z][a-z]+\s+[A-Z][a-z]+$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banks_are_ordered() {
        let labels: Vec<_> = EMAIL_PATTERNS.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            ["email-labeled", "email-contact-section", "email-bare", "email-any"]
        );
        assert_eq!(PHONE_PATTERNS.len(), 6);
        assert_eq!(NAME_PATTERNS.len(), 5);
    }

    #[test]
    fn test_labeled_email_isolates_address() {
        let found: Vec<_> = EMAIL_PATTERNS[0]
            .candidates("Email: jane.doe@corp.com")
            .map(|(v, _, _)| v)
            .collect();
        assert_eq!(found, ["jane.doe@corp.com"]);
    }

    #[test]
    fn test_contact_section_email_skips_words() {
        let found: Vec<_> = EMAIL_PATTERNS[1]
            .candidates("Contact me at foo@example.com")
            .map(|(v, _, _)| v)
            .collect();
        assert_eq!(found, ["foo@example.com"]);
    }

    #[test]
    fn test_name_does_not_cross_lines() {
        let text = "Contact Information\nJane Doe\nEmail jane@corp.com";
        let found: Vec<_> = NAME_PATTERNS[1]
            .candidates(text)
            .map(|(v, _, _)| v)
            .collect();
        assert_eq!(found, ["Jane Doe"]);
    }

    #[test]
    fn test_name_label_is_case_insensitive_value_is_not() {
        assert!(NAME_PATTERNS[0].regex.is_match("FULL NAME: Jane Doe"));
        assert!(!NAME_PATTERNS[0].regex.is_match("name: jane doe"));
    }

    #[test]
    fn test_candidate_spans() {
        let text = "call 555-234-5678 now";
        let (value, start, end) = PHONE_PATTERNS[0].candidates(text).next().unwrap();
        assert_eq!(value, "555-234-5678");
        assert_eq!(&text[start..end], value);
    }
}
