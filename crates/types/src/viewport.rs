//! Viewport classification and sidebar visibility states.

use serde::{Deserialize, Serialize};

/// Coarse viewport-width bucket that decides the default nav visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidthClass {
    /// Width at or below the breakpoint (phones, narrow windows).
    Narrow,
    /// Width above the breakpoint.
    Wide,
}

impl WidthClass {
    /// Classifies a viewport width against an inclusive narrow breakpoint.
    pub fn classify(width: f64, narrow_max_width: f64) -> Self {
        if width <= narrow_max_width {
            WidthClass::Narrow
        } else {
            WidthClass::Wide
        }
    }
}

/// Whether the sidebar nav list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavVisibility {
    Collapsed,
    Expanded,
}

impl NavVisibility {
    /// The visibility a width class starts in: collapsed when narrow, expanded when wide.
    pub fn default_for(width: WidthClass) -> Self {
        match width {
            WidthClass::Narrow => NavVisibility::Collapsed,
            WidthClass::Wide => NavVisibility::Expanded,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            NavVisibility::Collapsed => NavVisibility::Expanded,
            NavVisibility::Expanded => NavVisibility::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == NavVisibility::Expanded
    }
}

/// The sidebar's combined state: `{Collapsed, Expanded} x {Narrow, Wide}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    pub width: WidthClass,
    pub visibility: NavVisibility,
}

impl NavState {
    /// The state a sidebar enters for a freshly classified width.
    pub fn for_width(width: WidthClass) -> Self {
        Self {
            width,
            visibility: NavVisibility::default_for(width),
        }
    }
}
