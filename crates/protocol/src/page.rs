use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Navigation pill state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    /// Page scrolled past the top; the pill gets its background.
    pub scrolled: bool,
    /// Scrolling down far enough that the pill collapses.
    pub collapsed: bool,
}

/// Per-card translations for the hero parallax group, in pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroFrame {
    pub offsets: Vec<Vec2>,
}

/// Works-page gallery frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    /// Vertical offset of each slide in percent of the stack height.
    pub slide_offsets: Vec<f64>,
    /// Info panel to highlight.
    pub active_info: usize,
}

/// Quote section reveal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFrame {
    pub progress: f64,
    /// Text alpha per word, `0.08..=1`.
    pub word_alpha: Vec<f64>,
    pub photo_offset_percent: f64,
    pub photo_visible: bool,
}

/// Skills accordion: at most one row open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionState {
    pub open: Option<usize>,
    /// Drives the container's `has-active` class.
    pub has_active: bool,
}
