//! Upload intake: document acceptance and the decoder boundary.
//!
//! Turning PDF or Word bytes into text is the job of an injected
//! [`DocumentDecoder`]; this crate only checks what it is handed and feeds
//! the decoded text to the extraction engine.

mod upload;

pub use upload::{check_source, parse_resume};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Result type for intake operations.
pub type Result<T> = std::result::Result<T, IntakeError>;

/// Accepted résumé document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Portable Document Format.
    Pdf,
    /// Office Open XML word processing document.
    Docx,
    /// Legacy Word binary document.
    Doc,
}

impl DocumentKind {
    /// All accepted kinds.
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Pdf, DocumentKind::Docx, DocumentKind::Doc];

    /// MIME type of this kind.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Doc => "application/msword",
        }
    }

    /// Usual file extension of this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Doc => "doc",
        }
    }

    /// Resolve a kind from a MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_lowercase();
        Self::ALL.into_iter().find(|k| k.mime_type() == mime)
    }

    /// Resolve a kind from a file extension (with or without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim().trim_start_matches('.').to_lowercase();
        Self::ALL.into_iter().find(|k| k.extension() == ext)
    }

    /// Resolve a kind from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// What is known about an upload before it is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Declared MIME type.
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Original file name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl SourceDescriptor {
    pub fn new(mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            size_bytes,
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

/// Trait for document decoders supplied by the caller.
pub trait DocumentDecoder {
    /// Decode a document into plain text.
    fn decode(&self, kind: DocumentKind, data: &[u8]) -> Result<String>;
}
