use serde::{Deserialize, Serialize};

/// A 2D value: a point, an offset in pixels, or a pair of tilt angles in
/// degrees, depending on where it appears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Centre of a normalised `[0,1]×[0,1]` surface.
    pub const CENTER: Vec2 = Vec2 { x: 0.5, y: 0.5 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
