//! Exclusion sets that disqualify otherwise well-shaped candidates.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Job titles, section headers and academic terms that are never part of a name.
pub const EXCLUDED_NAME_WORDS: &[&str] = &[
    // Roles
    "software", "developer", "engineer", "programmer", "designer", "manager", "analyst",
    "senior", "junior", "lead", "principal", "architect", "consultant", "specialist",
    "admin", "administrator", "coordinator", "assistant", "intern", "trainee",
    // Section headers
    "experience", "education", "skills", "summary", "objective", "profile", "resume",
    "curriculum", "vitae", "contact", "personal", "professional", "technical",
    // Domains
    "frontend", "backend", "fullstack", "full-stack", "web", "mobile", "application", "system",
    // Applicants and academia
    "candidate", "applicant", "student", "graduate", "bachelor", "master", "university",
    "college",
];

/// Template domains that mark boilerplate rather than real contact data.
pub const PLACEHOLDER_DOMAINS: &[&str] = &["example.com", "test.com", "sample.com", "domain.com"];

lazy_static! {
    static ref NAME_WORDS: HashSet<&'static str> = EXCLUDED_NAME_WORDS.iter().copied().collect();
}

/// Whether a word (any case) is a role or section word.
pub fn is_excluded_word(word: &str) -> bool {
    NAME_WORDS.contains(word.to_lowercase().as_str())
}

/// Whether an email domain is a placeholder.
pub fn is_placeholder_domain(domain: &str) -> bool {
    let domain = domain.trim().to_lowercase();
    PLACEHOLDER_DOMAINS.contains(&domain.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_words_ignore_case() {
        assert!(is_excluded_word("Senior"));
        assert!(is_excluded_word("ENGINEER"));
        assert!(!is_excluded_word("Jane"));
    }

    #[test]
    fn test_placeholder_domains() {
        assert!(is_placeholder_domain("Example.COM"));
        assert!(!is_placeholder_domain("corp.com"));
        assert!(!is_placeholder_domain("mail.example.org"));
    }
}
