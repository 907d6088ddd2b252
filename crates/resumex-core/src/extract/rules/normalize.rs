//! Canonical forms for extracted values.

/// Lower-case and trim an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Trim a name. Capitalization is kept as captured.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}

/// Keep only digits and a leading `+`.
///
/// Any `+` after the first position is dropped.
pub fn clean_phone(phone: &str) -> String {
    let mut cleaned = String::with_capacity(phone.len());
    for c in phone.chars() {
        if c.is_ascii_digit() {
            cleaned.push(c);
        } else if c == '+' && cleaned.is_empty() {
            cleaned.push(c);
        }
    }
    cleaned
}

/// Count the digits of a phone string.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a phone number for display.
///
/// 10 digits become `(AAA) EEE-NNNN`, 11 digits with a leading `1` become
/// `+1 (AAA) EEE-NNNN`. Anything else is returned cleaned but unformatted.
pub fn format_phone(phone: &str) -> String {
    let cleaned = clean_phone(phone);
    let digits = phone_digits(&cleaned);

    match digits.len() {
        10 => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10]),
        11 if digits.starts_with('1') => format!(
            "+1 ({}) {}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..11]
        ),
        _ => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_phone() {
        assert_eq!(clean_phone("+1 (555) 234-5678"), "+15552345678");
        assert_eq!(clean_phone("555+234+5678"), "5552345678");
        assert_eq!(clean_phone("tel: 98.76"), "9876");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone("1-555-234-5678"), "+1 (555) 234-5678");
        assert_eq!(format_phone("+91 98765 43210"), "+919876543210");
        assert_eq!(format_phone("+44 20 7946 0958"), "+442079460958");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane.Doe@Corp.COM "), "jane.doe@corp.com");
    }
}
