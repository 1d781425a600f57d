use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::types::Vec2;

/// Which part of the pinned scroll range the card is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// No projects to show. Every output is neutral.
    Idle,
    /// Heading still visible, card sliding to its resting position.
    LeadIn,
    /// Card settled, flat, showing the first project.
    Hold,
    /// One segment per project, the card flips front to back.
    Rotation,
    /// Last project stays flat while the card scales down and fades out.
    Exit,
}

/// Pointer highlight drawn over the front face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glare {
    /// Horizontal centre in percent of the card width.
    pub x_percent: f64,
    /// Vertical centre in percent of the card height.
    pub y_percent: f64,
    pub opacity: f64,
}

impl Glare {
    pub const IDLE: Glare = Glare {
        x_percent: 50.0,
        y_percent: 50.0,
        opacity: 0.7,
    };
}

impl Default for Glare {
    fn default() -> Self {
        Glare::IDLE
    }
}

/// Everything the render sink needs to draw the select-works card for one
/// animation frame.
///
/// Built fresh on every tick. Two ticks with the same scroll input and a
/// settled tilt produce equal frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFrame {
    pub phase: Phase,
    /// Clamped progress in viewport-heights.
    pub progress: f64,
    /// Timeline flip angle in degrees, `0..=180`.
    pub angle: f64,
    /// Angle actually applied to the flip transform. Zero under reduced motion.
    pub effective_angle: f64,
    /// Smoothed pointer tilt in degrees (`x` about the horizontal axis).
    pub tilt: Vec2,
    /// Translation in pixels coupled to the tilt.
    pub drift: Vec2,
    pub glare: Glare,
    pub opacity: f64,
    /// `0.82..=1`.
    pub scale: f64,
    pub header_opacity: f64,
    /// Remaining lead-in displacement, 1 at the top of the section, 0 at rest.
    pub card_offset: f64,
    pub marquee_opacity: f64,
    /// Vertical slide of the marquee text, percent of its own height.
    pub marquee_offset_percent: f64,
    pub front_index: usize,
    pub back_index: usize,
    /// Index of the face that currently dominates (front before the flip
    /// point, back after).
    pub visible_index: usize,
    pub marquee_key: SharedStr,
}

impl CardFrame {
    /// Neutral frame for a component with nothing to show.
    pub fn idle() -> Self {
        CardFrame {
            phase: Phase::Idle,
            progress: 0.0,
            angle: 0.0,
            effective_angle: 0.0,
            tilt: Vec2::ZERO,
            drift: Vec2::ZERO,
            glare: Glare::IDLE,
            opacity: 1.0,
            scale: 1.0,
            header_opacity: 1.0,
            card_offset: 1.0,
            marquee_opacity: 1.0,
            marquee_offset_percent: 0.0,
            front_index: 0,
            back_index: 0,
            visible_index: 0,
            marquee_key: SharedStr::default(),
        }
    }
}
