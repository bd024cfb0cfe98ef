//! WebAssembly bindings for wayfinder page enhancements.
//!
//! This crate applies the platform-agnostic logic of `wayfinder-core` to a live
//! browser page through `web-sys`.
//!
//! # Enhancements
//!
//! - **Anchors**: every heading gets an id (derived from its text when missing) and a
//!   trailing `a.anchor-link` pointing at itself
//! - **Code blocks**: `pre code` blocks get line numbers and a toolbar (Run for Ruby,
//!   Share, Copy, Open in ChatGPT, Open in Claude)
//! - **Sidebar**: the `.sidebar` nav highlights the current section while scrolling
//!   and collapses on narrow viewports
//!
//! Anchors run first so generated heading ids are visible to the sidebar.
//!
//! ## Module Structure
//!
//! - [`dom`] - `PageElement`/`PageDocument`/`Viewport` over `web-sys`
//! - [`timer`] - `TaskScheduler` over `setTimeout`
//! - [`sidebar`], [`anchors`], [`codeblock`] - the three enhancement passes
//! - [`options`] - options accepted from JavaScript
//! - [`error`] - Error types with JavaScript interop
//!
//! # Example
//!
//! With the default `auto-start` feature the page is enhanced on `DOMContentLoaded`
//! with default options. Without it:
//!
//! ```javascript
//! import init, { enhancePage } from '@wayfinder/wasm';
//!
//! await init();
//! const report = enhancePage({ nav: { narrowMaxWidth: 900 } });
//! console.log(report.headings, report.codeBlocks, report.sidebar);
//! ```

pub mod anchors;
pub mod codeblock;
pub mod dom;
mod error;
mod options;
pub mod sidebar;
pub mod timer;

pub use dom::{WebDocument, WebElement, WindowViewport};
pub use error::{ErrorCode, WayfinderError};
pub use options::{EnhanceOptions, EnhanceReport};
pub use timer::WindowScheduler;

use log::debug;
use std::cell::Cell;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        // Initialize console logging if the feature is enabled
        console_log::init_with_level(log::Level::Debug).ok();
    }

    #[cfg(feature = "auto-start")]
    {
        let scheduled = when_ready(|| {
            if let Err(e) = enhance(&EnhanceOptions::default()) {
                log::warn!("Page enhancement failed: {}", e);
            }
        });
        if let Err(e) = scheduled {
            log::warn!("Could not schedule page enhancement: {}", e);
        }
    }
}

/// Enhance the current page.
///
/// Accepts an optional options object (see [`EnhanceOptions`]); missing fields take
/// their defaults. Meant for builds without the `auto-start` feature; calling it on a
/// page that was already enhanced decorates it twice.
#[wasm_bindgen(js_name = enhancePage)]
pub fn enhance_page(options: JsValue) -> Result<EnhanceReport, JsValue> {
    let options = if options.is_undefined() || options.is_null() {
        EnhanceOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(WayfinderError::from)?
    };
    wayfinder_core::validate_config(&options.nav).map_err(WayfinderError::from)?;
    Ok(enhance(&options)?)
}

/// Get the version of the wayfinder-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Run the enabled enhancement passes against the live document.
pub fn enhance(options: &EnhanceOptions) -> Result<EnhanceReport, WayfinderError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let mut report = EnhanceReport::default();

    if options.anchors {
        report.headings = anchors::install(&document)?;
    }
    if options.code_blocks {
        report.code_blocks = codeblock::install(&window, &document, &options.code)?;
    }
    if options.sidebar {
        report.sidebar =
            sidebar::install(&window, &WebDocument::new(document), options.nav.clone())?;
    }
    debug!("Page enhanced: {:?}", report);
    Ok(report)
}

/// Run `task` once the document has been parsed: immediately if it already has,
/// otherwise on `DOMContentLoaded`.
pub fn when_ready(task: impl FnOnce() + 'static) -> Result<(), WayfinderError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() != "loading" {
        task();
        return Ok(());
    }
    let task = Cell::new(Some(task));
    dom::listen(&document, "DOMContentLoaded", move || {
        if let Some(task) = task.take() {
            task();
        }
    })
}
