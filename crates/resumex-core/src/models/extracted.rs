//! Contact information extracted from a résumé.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownField;

/// Best-effort contact fields pulled from a decoded résumé.
///
/// Optional fields are `None` when nothing passed validation; an absent
/// field is never represented as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedInfo {
    /// Candidate full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Lower-cased email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number in canonical display form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Full decoded document body.
    pub text: String,
}

impl ExtractedInfo {
    /// Result for a document with no usable text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the value of a single field.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
        }
    }

    /// Fields that are present, in display order.
    pub fn found_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }

    /// Whether every contact field was found.
    pub fn is_complete(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_some())
    }
}

/// A contact field the engine extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    /// Display label used by the collection flow.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
        }
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    /// Parse a field from its label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "full_name" | "fullname" => Ok(Field::Name),
            "email" | "e-mail" | "mail" => Ok(Field::Email),
            "phone" | "mobile" | "tel" => Ok(Field::Phone),
            _ => Err(UnknownField(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
