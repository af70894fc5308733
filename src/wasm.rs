//! WebAssembly bindings for commit-lint
//!
//! JavaScript-callable validation and fixing of commit messages. Config is
//! passed as a JSON object using the camelCase keys (`maxHeaderLength`,
//! `subjectCase`, ...); an empty string means the defaults.

use wasm_bindgen::prelude::*;

use crate::linter::Linter;
use crate::{PartialConfig, ValidationResult};

/// Initialize the WASM module (sets up panic hook for better error messages)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Validation result returned to JavaScript
#[wasm_bindgen]
#[derive(Clone)]
pub struct WasmValidationResult {
    valid: bool,
    issues_json: String,
    error_count: usize,
    warning_count: usize,
    suggestion: Option<String>,
}

#[wasm_bindgen]
impl WasmValidationResult {
    /// Whether the message has no errors
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Errors followed by warnings, as a JSON array
    #[wasm_bindgen(getter)]
    pub fn issues(&self) -> String {
        self.issues_json.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[wasm_bindgen(getter)]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Corrected message, `undefined` when none applies
    #[wasm_bindgen(getter)]
    pub fn suggestion(&self) -> Option<String> {
        self.suggestion.clone()
    }
}

impl WasmValidationResult {
    fn from_result(result: &ValidationResult) -> Result<Self, JsValue> {
        let issues: Vec<_> = result.issues().collect();
        let issues_json = serde_json::to_string(&issues).map_err(to_js_error)?;

        Ok(Self {
            valid: result.valid,
            issues_json,
            error_count: result.errors.len(),
            warning_count: result.warnings.len(),
            suggestion: result.suggestion.clone(),
        })
    }
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn linter_from_json(config_json: &str) -> Result<Linter, JsValue> {
    let partial = if config_json.trim().is_empty() {
        None
    } else {
        Some(PartialConfig::from_json_str(config_json).map_err(to_js_error)?)
    };
    Linter::from_partial(partial.as_ref()).map_err(to_js_error)
}

/// Validate a commit message
///
/// # Arguments
/// * `message` - The raw commit message
/// * `config_json` - JSON object with config overrides (can be empty)
#[wasm_bindgen]
pub fn validate(message: &str, config_json: &str) -> Result<WasmValidationResult, JsValue> {
    let linter = linter_from_json(config_json)?;
    WasmValidationResult::from_result(&linter.validate_with_suggestion(message))
}

/// Corrected message, or `undefined` when valid or unfixable
#[wasm_bindgen]
pub fn suggest_fix(message: &str, config_json: &str) -> Result<Option<String>, JsValue> {
    Ok(linter_from_json(config_json)?.suggest_fix(message))
}

/// Get the version of commit-lint
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get all rule names as a JSON array, in evaluation order
#[wasm_bindgen]
pub fn rule_names() -> String {
    serde_json::to_string(&crate::rules::rule_names()).unwrap_or_else(|_| "[]".to_string())
}
