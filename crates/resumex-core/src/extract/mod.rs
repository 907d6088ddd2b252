//! Résumé contact extraction module.

mod engine;
pub mod rules;

pub use engine::{ContactExtractor, ExtractionResult, ResumeParser, extract_info_from_text};
