//! Core library for résumé contact extraction.
//!
//! This crate provides:
//! - Ordered regex pattern banks for name, email and phone fields
//! - Standalone field validators shared with the field-collection chat flow
//! - Phone and email normalization
//! - A stateless extraction engine that turns decoded résumé text into
//!   [`ExtractedInfo`]
//! - Upload acceptance checks and a pluggable document decoder boundary

pub mod collect;
pub mod error;
pub mod extract;
pub mod intake;
pub mod models;

pub use collect::{Rejection, check_answer, missing_fields};
pub use error::{IntakeError, Result, ResumexError, UnknownField};
pub use extract::rules::{
    FieldExtractor, format_phone, normalize_email, validate_email, validate_name, validate_phone,
};
pub use extract::{ContactExtractor, ExtractionResult, ResumeParser, extract_info_from_text};
pub use intake::{DocumentDecoder, DocumentKind, SourceDescriptor, check_source, parse_resume};
pub use models::config::ResumexConfig;
pub use models::extracted::{ExtractedInfo, Field};
