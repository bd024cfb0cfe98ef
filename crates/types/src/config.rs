//! Tunable settings for the page enhancements.
//!
//! Every field has a default matching the stock site theme, so a host may pass a
//! partial object (from JSON or a JS value) and override only what it needs.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the scroll-synced sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// Pixels added to the scroll offset so a section counts as current slightly
    /// before its heading reaches the top of the viewport.
    pub lookahead_bias: f64,
    /// Delay used to coalesce bursts of scroll notifications.
    pub debounce_ms: u32,
    /// Viewport widths at or below this value are narrow.
    pub narrow_max_width: f64,
    pub sidebar_selector: String,
    pub toggle_selector: String,
    pub glyph_selector: String,
    pub nav_list_selector: String,
    pub link_selector: String,
    pub heading_selector: String,
    pub active_class: String,
    pub collapsed_glyph: String,
    pub expanded_glyph: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            lookahead_bias: 100.0,
            debounce_ms: 10,
            narrow_max_width: 768.0,
            sidebar_selector: ".sidebar".to_string(),
            toggle_selector: ".sidebar-toggle".to_string(),
            glyph_selector: ".toggle-icon".to_string(),
            nav_list_selector: ".sidebar-nav".to_string(),
            link_selector: ".sidebar-link".to_string(),
            heading_selector: "h1[id], h2[id], h3[id], h4[id], h5[id], h6[id]".to_string(),
            active_class: "active".to_string(),
            collapsed_glyph: "+".to_string(),
            expanded_glyph: "\u{2212}".to_string(),
        }
    }
}

impl NavConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }
}

/// Settings for the code-block toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeBlockConfig {
    /// Text placed before the code in assistant prompts.
    pub assistant_prompt: String,
    /// How long the copy button shows its confirmation label.
    pub copy_feedback_ms: u32,
    pub share_theme: String,
    pub share_background: String,
    pub share_font: String,
    /// Whether Ruby blocks get a "Run" link to the online playground.
    pub try_ruby: bool,
}

impl Default for CodeBlockConfig {
    fn default() -> Self {
        Self {
            assistant_prompt:
                "Please read the following ruby syntax documentation and help me understand it:"
                    .to_string(),
            copy_feedback_ms: 2000,
            share_theme: "monokai".to_string(),
            share_background: "rgba(248,248,248,1)".to_string(),
            share_font: "SF Mono".to_string(),
            try_ruby: true,
        }
    }
}

impl CodeBlockConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn copy_feedback_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.copy_feedback_ms))
    }
}
