//! WASM bindings for résumé contact extraction.
//!
//! This crate provides WebAssembly bindings for the interview front end, which
//! runs the extraction engine on decoded résumé text and checks typed answers
//! while collecting missing fields.

use wasm_bindgen::prelude::*;

use resumex_core::{ContactExtractor, ExtractedInfo, Field, ResumeParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract name, email and phone from decoded résumé text.
///
/// Returns `{ name?, email?, phone?, text }`; fields that were not found are
/// left out.
#[wasm_bindgen]
pub fn extract_info_from_text(text: &str) -> Result<JsValue, JsValue> {
    let info = resumex_core::extract_info_from_text(text);
    to_js(&info)
}

/// Extract with the matching rule of each field and the list of missing fields.
#[wasm_bindgen]
pub fn extract_with_details(text: &str) -> Result<JsValue, JsValue> {
    ResumeExtractor::new().extract_with_details(text)
}

/// Check a name as typed by the candidate.
#[wasm_bindgen]
pub fn validate_name(name: &str) -> bool {
    resumex_core::validate_name(name)
}

/// Check an email address as typed by the candidate.
#[wasm_bindgen]
pub fn validate_email(email: &str) -> bool {
    resumex_core::validate_email(email)
}

/// Check a phone number as typed by the candidate.
#[wasm_bindgen]
pub fn validate_phone(phone: &str) -> bool {
    resumex_core::validate_phone(phone)
}

/// Check an answer for `field` ("name", "email" or "phone").
///
/// Resolves to the value to store, or rejects with the message to show the
/// candidate.
#[wasm_bindgen]
pub fn check_answer(field: &str, input: &str) -> Result<String, JsValue> {
    let field = parse_field(field)?;

    resumex_core::check_answer(field, input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// List the fields still to be asked for, in asking order.
///
/// Takes the object returned by [`extract_info_from_text`].
#[wasm_bindgen]
pub fn missing_fields(info: JsValue) -> Result<Vec<String>, JsValue> {
    let info: ExtractedInfo =
        serde_wasm_bindgen::from_value(info).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(resumex_core::missing_fields(&info)
        .into_iter()
        .map(|f| f.label().to_lowercase())
        .collect())
}

/// Format a phone number for display, e.g. "(555) 123-4567".
#[wasm_bindgen]
pub fn format_phone(phone: &str) -> String {
    resumex_core::format_phone(phone)
}

/// Résumé extractor class for browser use.
#[wasm_bindgen]
pub struct ResumeExtractor {
    extractor: ContactExtractor,
}

#[wasm_bindgen]
impl ResumeExtractor {
    /// Create a new résumé extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: ContactExtractor::new(),
        }
    }

    /// Enable or disable the leading-lines name fallback.
    #[wasm_bindgen]
    pub fn set_name_fallback(&mut self, enabled: bool) {
        self.extractor = self.extractor.clone().with_name_fallback(enabled);
    }

    /// Number of leading non-blank lines the name fallback looks at.
    #[wasm_bindgen]
    pub fn set_fallback_lines(&mut self, lines: usize) {
        self.extractor = self.extractor.clone().with_fallback_lines(lines);
    }

    /// Extract contact details from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.extractor.parse(text);
        to_js(&result.info)
    }

    /// Get extraction result with rule details.
    #[wasm_bindgen]
    pub fn extract_with_details(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.extractor.parse(text))
    }
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_field(field: &str) -> Result<Field, JsValue> {
    field
        .parse::<Field>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}
