//! # wayfinder-core
//!
//! Platform-agnostic logic for enhancing static documentation pages:
//! - **sidebar**: the `NavigationSync` state machine that highlights the current
//!   section's link and collapses the nav list on narrow viewports
//! - **controller**: routes host notifications to the sidebar, debouncing scroll
//! - **debounce**: single-slot deferred task scheduling
//! - **highlight**: scroll-position bucketing over heading offsets
//! - **anchors**: heading ids and self-link anchors
//! - **codeblock** / **copy**: line numbers, language detection and toolbar plans
//! - **error**: error types shared by the passes
//!
//! ## Design Principle
//!
//! This crate never touches a browser API. Page access goes through the
//! `PageDocument`, `PageElement`, `Viewport` and `TaskScheduler` traits, which the
//! `wayfinder-wasm` crate implements over `web-sys` and `wayfinder-traits`
//! implements in memory.

// Re-export foundation crates
pub use wayfinder_traits as traits;
pub use wayfinder_types as types;

pub mod anchors;
pub mod codeblock;
pub mod controller;
pub mod copy;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod sidebar;

// Re-export commonly used types from foundation crates
pub use types::{CodeBlockConfig, NavConfig, NavState, NavVisibility, SectionId, WidthClass};

// Re-export from internal modules
pub use anchors::{AnchorPlan, HeadingSource, plan_anchors, slugify_heading};
pub use codeblock::{
    CodeBlockPlan, CodeBlockSource, CodeTool, ToolAction, ToolKind, ToolUrl, plan_code_block,
};
pub use controller::{SidebarController, validate_config};
pub use copy::CopyFeedback;
pub use debounce::Debouncer;
pub use error::EnhanceError;
pub use highlight::{HeadingEntry, current_section};
pub use sidebar::{NavigationSync, SidebarLinkEntry, SidebarParts};

// Re-export platform abstraction traits
pub use traits::{
    HostError, ManualScheduler, MemoryDocument, MemoryElement, MemoryViewport, PageDocument,
    PageElement, TaskScheduler, TimerId, Viewport,
};
