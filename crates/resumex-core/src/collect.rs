//! Validation surface for the chat flow that collects missing contact fields.
//!
//! The dialogue itself lives in the front end; it calls into this module to
//! decide what to ask for and whether a typed answer is acceptable.

use std::fmt;

use crate::extract::rules::exclusions::is_placeholder_domain;
use crate::extract::rules::normalize::{format_phone, normalize_email, normalize_name, phone_digits};
use crate::extract::rules::{validate_email, validate_name, validate_phone};
use crate::models::extracted::{ExtractedInfo, Field};

/// Fields that are absent or fail validation, in display order.
pub fn missing_fields(info: &ExtractedInfo) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| match info.get(*field) {
            Some(value) => !is_valid(*field, value),
            None => true,
        })
        .collect()
}

/// Run the validator of a field.
pub fn is_valid(field: Field, value: &str) -> bool {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
    }
}

/// Why a typed answer was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NameTooShort,
    NameInvalidCharacters,
    NameMissingLastName,
    NameInvalid,
    EmailMissingAt,
    EmailMissingDomain,
    EmailPlaceholder,
    EmailInvalid,
    PhoneTooFewDigits,
    PhoneTooManyDigits,
    PhoneInvalid,
}

impl Rejection {
    /// Field the rejection belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::NameTooShort
            | Self::NameInvalidCharacters
            | Self::NameMissingLastName
            | Self::NameInvalid => Field::Name,
            Self::EmailMissingAt
            | Self::EmailMissingDomain
            | Self::EmailPlaceholder
            | Self::EmailInvalid => Field::Email,
            Self::PhoneTooFewDigits | Self::PhoneTooManyDigits | Self::PhoneInvalid => Field::Phone,
        }
    }

    /// User-facing guidance.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NameTooShort => {
                "Please provide a longer name. I need at least your first and last name."
            }
            Self::NameInvalidCharacters => {
                "Please use only letters and spaces in your name. No numbers or special characters."
            }
            Self::NameMissingLastName => {
                "Please provide both your first and last name (e.g., \"Jane Smith\")."
            }
            Self::NameInvalid => {
                "Please provide a valid full name with only letters, like \"Jane Smith\"."
            }
            Self::EmailMissingAt => "Please include an @ symbol in your email address.",
            Self::EmailMissingDomain => {
                "Please include a domain with a dot (e.g., gmail.com) in your email."
            }
            Self::EmailPlaceholder => {
                "Please provide your real email address, not an example one."
            }
            Self::EmailInvalid => {
                "Please provide a valid email address like \"your.name@gmail.com\"."
            }
            Self::PhoneTooFewDigits => "Please provide a phone number with at least 10 digits.",
            Self::PhoneTooManyDigits => {
                "Please provide a shorter phone number (maximum 15 digits)."
            }
            Self::PhoneInvalid => {
                "Please provide a valid phone number like \"(555) 234-5678\" or \"+91 98765 43210\"."
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Rejection {}

/// Check a free-text answer for a field.
///
/// Returns the value to store on success: a trimmed name, a lower-cased
/// email, or a phone number in display form.
pub fn check_answer(field: Field, input: &str) -> Result<String, Rejection> {
    let input = input.trim();

    match field {
        Field::Name => check_name(input),
        Field::Email => check_email(input),
        Field::Phone => check_phone(input),
    }
}

fn check_name(input: &str) -> Result<String, Rejection> {
    if validate_name(input) {
        return Ok(normalize_name(input));
    }

    if input.chars().count() < 2 {
        Err(Rejection::NameTooShort)
    } else if !input
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        Err(Rejection::NameInvalidCharacters)
    } else if input.split_whitespace().count() < 2 {
        Err(Rejection::NameMissingLastName)
    } else {
        Err(Rejection::NameInvalid)
    }
}

fn check_email(input: &str) -> Result<String, Rejection> {
    if validate_email(input) {
        return Ok(normalize_email(input));
    }

    let email = normalize_email(input);
    if !email.contains('@') {
        Err(Rejection::EmailMissingAt)
    } else if !email.contains('.') {
        Err(Rejection::EmailMissingDomain)
    } else if email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| is_placeholder_domain(domain))
    {
        Err(Rejection::EmailPlaceholder)
    } else {
        Err(Rejection::EmailInvalid)
    }
}

fn check_phone(input: &str) -> Result<String, Rejection> {
    if validate_phone(input) {
        return Ok(format_phone(input));
    }

    let digits = phone_digits(input).len();
    if digits < 10 {
        Err(Rejection::PhoneTooFewDigits)
    } else if digits > 15 {
        Err(Rejection::PhoneTooManyDigits)
    } else {
        Err(Rejection::PhoneInvalid)
    }
}
