//! Data models for extraction results and configuration.

pub mod config;
pub mod extracted;

pub use config::{ExtractionConfig, IntakeConfig, ResumexConfig};
pub use extracted::{ExtractedInfo, Field};
