//! Error handling for WASM bindings.
//!
//! Converts wayfinder's error types into JavaScript-friendly errors.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wayfinder_core::{EnhanceError, HostError};

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid options object
    Config,
    /// A required global (window, document) is unavailable
    Environment,
    /// A DOM call threw
    Dom,
    /// Timer scheduling failed
    Scheduling,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Environment => "ENVIRONMENT_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Scheduling => "SCHEDULING_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct WayfinderError {
    code: ErrorCode,
    message: String,
}

impl WayfinderError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Environment, message)
    }

    /// Wrap a value thrown by a DOM call.
    pub fn dom(operation: &str, err: JsValue) -> Self {
        Self::new(
            ErrorCode::Dom,
            format!("{} failed: {}", operation, describe(&err)),
        )
    }
}

/// Best-effort text for a thrown JavaScript value.
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Adapt a DOM result into the host error type used by the core traits.
pub(crate) fn host_result<T>(operation: &str, result: Result<T, JsValue>) -> Result<T, HostError> {
    result.map_err(|e| HostError::dom(operation, describe(&e)))
}

impl From<HostError> for WayfinderError {
    fn from(err: HostError) -> Self {
        let code = match &err {
            HostError::MissingElement(_) => ErrorCode::Environment,
            HostError::Scheduling(_) => ErrorCode::Scheduling,
            HostError::Dom { .. } => ErrorCode::Dom,
        };
        Self::new(code, err.to_string())
    }
}

impl From<EnhanceError> for WayfinderError {
    fn from(err: EnhanceError) -> Self {
        match err {
            EnhanceError::Host(host) => host.into(),
            EnhanceError::Config(msg) => Self::config(msg),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for WayfinderError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::config(err.to_string())
    }
}

impl From<WayfinderError> for JsValue {
    fn from(err: WayfinderError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        // Add the error code as a property
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();

        js_error.into()
    }
}
