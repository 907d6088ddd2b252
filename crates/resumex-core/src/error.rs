//! Error types for the resumex-core library.
//!
//! Extraction never fails: a field that cannot be found is simply absent.
//! Errors come from the upload intake that runs before any text reaches the
//! extraction engine, and from loading or editing configuration.

use thiserror::Error;

/// Main error type for the resumex library.
#[derive(Error, Debug)]
pub enum ResumexError {
    /// Upload acceptance or decoding error.
    #[error("intake error: {0}")]
    Intake(#[from] IntakeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file, unknown key or mistyped value.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A field name that is not one of name, email or phone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

/// Errors raised while accepting or decoding an uploaded document.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// MIME type or extension is not one of pdf, docx, doc.
    #[error("Unsupported file type. Please upload a PDF or Word document (.pdf, .docx, .doc)")]
    UnsupportedType(String),

    /// The document exceeds the configured size limit.
    #[error("File size too large. Please upload a file smaller than {}MB.", limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },

    /// The upload contains no bytes at all.
    #[error("The uploaded file is empty.")]
    Empty,

    /// The decoder could not turn the document into text.
    #[error("Failed to process the resume file: {0}")]
    Decode(String),
}

/// Result type for the resumex library.
pub type Result<T> = std::result::Result<T, ResumexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_message_uses_megabytes() {
        let err = IntakeError::TooLarge {
            size: 11 * 1024 * 1024,
            limit: 10 * 1024 * 1024,
        };
        assert_eq!(
            err.to_string(),
            "File size too large. Please upload a file smaller than 10MB."
        );
    }

    #[test]
    fn test_intake_error_wraps() {
        let err: ResumexError = IntakeError::UnsupportedType("image/png".to_string()).into();
        assert!(err.to_string().starts_with("intake error: Unsupported file type"));
    }
}
