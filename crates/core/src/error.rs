// src/error.rs
//! Error types for the enhancement passes.
//!
//! Host failures never reach the page: the sidebar and code-block passes log and
//! drop them. Configuration errors are reported to the caller before any pass runs.

use thiserror::Error;
use wayfinder_traits::HostError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnhanceError {
    #[error("Host error: {0}")]
    Host(#[from] HostError),
    #[error("Configuration error: {0}")]
    Config(String),
}
