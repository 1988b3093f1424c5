//! Error handling for WASM bindings.
//!
//! Converts wikitoc's error types into JavaScript-friendly errors.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wikitoc_core::TocError;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Transport failure or non-OK HTTP status
    Network,
    /// The API reported an error or returned no sections
    Api,
    /// A required DOM element is missing or has the wrong type
    Dom,
    /// The configuration object could not be read
    Config,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Network => "NETWORK_ERROR",
            ErrorCode::Api => "API_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct WikiTocError {
    code: ErrorCode,
    message: String,
}

impl WikiTocError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TocError> for WikiTocError {
    fn from(err: TocError) -> Self {
        let code = match &err {
            TocError::Network(_) => ErrorCode::Network,
            TocError::Api { .. } => ErrorCode::Api,
        };
        // the same text the container shows
        Self::new(code, err.user_message())
    }
}

impl From<WikiTocError> for JsValue {
    fn from(err: WikiTocError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();

        js_error.into()
    }
}

impl From<serde_wasm_bindgen::Error> for WikiTocError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::config(err.to_string())
    }
}
