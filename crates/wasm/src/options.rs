//! Options accepted from JavaScript.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wayfinder_core::{CodeBlockConfig, NavConfig};

/// Which enhancements to run and how.
///
/// Every field is optional on the JavaScript side:
///
/// ```javascript
/// enhancePage({ codeBlocks: false, nav: { lookaheadBias: 80 } });
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhanceOptions {
    pub anchors: bool,
    pub code_blocks: bool,
    pub sidebar: bool,
    pub nav: NavConfig,
    pub code: CodeBlockConfig,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            anchors: true,
            code_blocks: true,
            sidebar: true,
            nav: NavConfig::default(),
            code: CodeBlockConfig::default(),
        }
    }
}

/// What an enhancement run touched.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnhanceReport {
    /// Headings given anchors.
    pub headings: usize,
    /// Code blocks decorated.
    #[wasm_bindgen(js_name = codeBlocks)]
    pub code_blocks: usize,
    /// Whether a sidebar was found and wired up.
    pub sidebar: bool,
}
