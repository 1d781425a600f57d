//! Device and user-preference signals that scale or disable motion.

use serde::{Deserialize, Serialize};

/// Source of the two media signals the motion layer cares about.
///
/// Implemented by the host environment (media queries in a browser) and by
/// [`Capabilities`] for fixed snapshots.
pub trait CapabilitySource {
    /// `prefers-reduced-motion: reduce`.
    fn prefers_reduced_motion(&self) -> bool;
    /// No hover capability and a coarse pointer.
    fn is_touch_only(&self) -> bool;
}

/// A captured set of capability signals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub reduced_motion: bool,
    pub touch_only: bool,
}

impl CapabilitySource for Capabilities {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn is_touch_only(&self) -> bool {
        self.touch_only
    }
}

/// Motion multiplier: `0` under reduced motion, `touch_scale` on touch-only
/// devices, `1` otherwise.
///
/// Re-query on viewport resize, since a device can change input mode.
pub fn motion_scale(source: &impl CapabilitySource, touch_scale: f64) -> f64 {
    if source.prefers_reduced_motion() {
        0.0
    } else if source.is_touch_only() {
        touch_scale
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_wins_over_touch() {
        let caps = Capabilities {
            reduced_motion: true,
            touch_only: true,
        };
        assert_eq!(motion_scale(&caps, 0.45), 0.0);
    }

    #[test]
    fn touch_only_uses_touch_scale() {
        let caps = Capabilities {
            reduced_motion: false,
            touch_only: true,
        };
        assert_eq!(motion_scale(&caps, 0.45), 0.45);
    }

    #[test]
    fn desktop_is_full_motion() {
        assert_eq!(motion_scale(&Capabilities::default(), 0.45), 1.0);
    }
}
