//! # wayfinder
//!
//! Client-side enhancements for static documentation sites.
//!
//! The logic lives in `wayfinder-core` and runs against any host that implements the
//! page traits from `wayfinder-traits`; `wayfinder-wasm` provides the browser host.
//! This crate re-exports the pieces a native consumer needs.

pub use wayfinder_core::*;
