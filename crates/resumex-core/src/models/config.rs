//! Configuration structures for intake and extraction.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ResumexError};
use crate::intake::DocumentKind;

/// Default upload size limit (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Main configuration for resumex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumexConfig {
    /// Upload acceptance configuration.
    pub intake: IntakeConfig,

    /// Contact extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Upload acceptance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Largest accepted document in bytes.
    pub max_file_size_bytes: u64,

    /// Accepted MIME types.
    pub accepted_types: Vec<String>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE,
            accepted_types: DocumentKind::ALL
                .iter()
                .map(|k| k.mime_type().to_string())
                .collect(),
        }
    }
}

/// Contact extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Scan the leading lines for a bare two-word name when no pattern matched.
    pub name_fallback: bool,

    /// Number of non-blank leading lines the name fallback looks at.
    pub fallback_lines: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_fallback: true,
            fallback_lines: 5,
        }
    }
}

impl ResumexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ResumexError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ResumexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Look up a value by dotted key, e.g. `extraction.fallback_lines`.
    pub fn get(&self, key: &str) -> Result<Value> {
        let json = self.to_json()?;

        key.split('.')
            .try_fold(&json, |node, part| node.get(part))
            .cloned()
            .ok_or_else(|| unknown_key(key))
    }

    /// Replace the value at an existing dotted key.
    ///
    /// Unknown keys and values of the wrong type are rejected and leave the
    /// configuration unchanged.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut json = self.to_json()?;

        let slot = key
            .split('.')
            .try_fold(&mut json, |node, part| node.get_mut(part))
            .ok_or_else(|| unknown_key(key))?;
        *slot = value;

        *self = serde_json::from_value(json)
            .map_err(|e| ResumexError::Config(format!("invalid value for {}: {}", key, e)))?;
        Ok(())
    }

    fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ResumexError::Config(e.to_string()))
    }
}

fn unknown_key(key: &str) -> ResumexError {
    ResumexError::Config(format!("unknown configuration key: {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ResumexConfig::default();
        assert_eq!(config.intake.max_file_size_bytes, 10 * 1024 * 1024);
        assert_eq!(config.intake.accepted_types.len(), 3);
        assert!(config.extraction.name_fallback);
        assert_eq!(config.extraction.fallback_lines, 5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ResumexConfig =
            serde_json::from_str(r#"{"extraction": {"fallback_lines": 3}}"#).unwrap();
        assert_eq!(config.extraction.fallback_lines, 3);
        assert!(config.extraction.name_fallback);
        assert_eq!(config.intake.max_file_size_bytes, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ResumexConfig::default();
        config.extraction.name_fallback = false;
        config.save(&path).unwrap();

        let loaded = ResumexConfig::from_file(&path).unwrap();
        assert!(!loaded.extraction.name_fallback);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ResumexConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ResumexError::Config(_)));

        let missing = dir.path().join("missing.json");
        let err = ResumexConfig::from_file(&missing).unwrap_err();
        assert!(matches!(err, ResumexError::Io(_)));
    }

    #[test]
    fn test_get_by_dotted_key() {
        let config = ResumexConfig::default();
        assert_eq!(config.get("extraction.fallback_lines").unwrap(), json!(5));
        assert!(matches!(
            config.get("extraction.fallbak_lines"),
            Err(ResumexError::Config(_))
        ));
    }

    #[test]
    fn test_set_existing_key() {
        let mut config = ResumexConfig::default();
        config.set("extraction.fallback_lines", json!(3)).unwrap();
        assert_eq!(config.extraction.fallback_lines, 3);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = ResumexConfig::default();
        let err = config.set("extraction.fallbak_lines", json!(0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: unknown configuration key: extraction.fallbak_lines"
        );
        assert_eq!(config.extraction.fallback_lines, 5);
    }

    #[test]
    fn test_set_rejects_wrong_type() {
        let mut config = ResumexConfig::default();
        assert!(config.set("extraction.fallback_lines", json!("many")).is_err());
        assert!(config.set("intake.max_file_size_bytes", json!(-1)).is_err());
        assert_eq!(config.extraction.fallback_lines, 5);
    }
}
