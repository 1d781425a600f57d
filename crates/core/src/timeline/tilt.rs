use folio_protocol::{Glare, Vec2};

use crate::motion::{approach, clamp};

const HOVER_GLARE_OPACITY: f64 = 0.95;

/// Pointer-driven card tilt with first-order damping.
///
/// `x` is the rotation about the horizontal axis (pointer moving up tilts
/// the top edge away), `y` the rotation about the vertical axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tilt {
    pointer: Option<Vec2>,
    target: Vec2,
    current: Vec2,
}

impl Tilt {
    /// Record the pointer position over the card, normalised to `[0,1]`.
    /// `None` means the pointer left; the target returns to neutral. A
    /// position with a non-finite coordinate is treated the same way.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>, tilt_range: f64, motion_scale: f64) {
        self.pointer = pointer
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .map(|p| Vec2::new(clamp(p.x, 0.0, 1.0), clamp(p.y, 0.0, 1.0)));
        self.retarget(tilt_range, motion_scale);
    }

    /// Recompute the target after the motion scale changed.
    pub fn retarget(&mut self, tilt_range: f64, motion_scale: f64) {
        let p = self.pointer.unwrap_or(Vec2::CENTER);
        let amount = 2.0 * tilt_range * motion_scale;
        self.target = Vec2::new((0.5 - p.y) * amount, (p.x - 0.5) * amount);
    }

    /// Advance one frame.
    pub fn step(&mut self, spring_factor: f64) -> Vec2 {
        self.current = Vec2::new(
            approach(self.current.x, self.target.x, spring_factor),
            approach(self.current.y, self.target.y, spring_factor),
        );
        self.current
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn drift(&self, drift_range: f64, tilt_range: f64) -> Vec2 {
        if tilt_range <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            self.current.y * drift_range / tilt_range,
            -self.current.x * drift_range / tilt_range,
        )
    }

    pub fn glare(&self) -> Glare {
        match self.pointer {
            Some(p) => Glare {
                x_percent: p.x * 100.0,
                y_percent: p.y * 100.0,
                opacity: HOVER_GLARE_OPACITY,
            },
            None => Glare::IDLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::approx_eq;

    #[test]
    fn corners_map_to_full_range() {
        let mut tilt = Tilt::default();
        tilt.set_pointer(Some(Vec2::new(1.0, 0.0)), 15.0, 1.0);
        assert_eq!(tilt.target(), Vec2::new(15.0, 15.0));
        tilt.set_pointer(Some(Vec2::new(0.0, 1.0)), 15.0, 0.5);
        assert_eq!(tilt.target(), Vec2::new(-7.5, -7.5));
    }

    #[test]
    fn leave_returns_to_neutral() {
        let mut tilt = Tilt::default();
        tilt.set_pointer(Some(Vec2::new(0.9, 0.1)), 15.0, 1.0);
        tilt.set_pointer(None, 15.0, 1.0);
        assert_eq!(tilt.target(), Vec2::ZERO);
        assert_eq!(tilt.glare(), Glare::IDLE);
    }

    #[test]
    fn out_of_surface_pointer_is_clamped() {
        let mut tilt = Tilt::default();
        tilt.set_pointer(Some(Vec2::new(3.0, -2.0)), 10.0, 1.0);
        assert_eq!(tilt.target(), Vec2::new(10.0, 10.0));
        assert_eq!(tilt.glare().x_percent, 100.0);
    }

    #[test]
    fn non_finite_pointer_is_neutral() {
        let mut tilt = Tilt::default();
        tilt.set_pointer(Some(Vec2::new(0.9, 0.1)), 15.0, 1.0);
        tilt.set_pointer(Some(Vec2::new(f64::NAN, f64::INFINITY)), 15.0, 1.0);
        assert_eq!(tilt.target(), Vec2::ZERO);
        assert_eq!(tilt.glare(), Glare::IDLE);
    }

    #[test]
    fn step_is_exponential_approach() {
        let mut tilt = Tilt::default();
        tilt.set_pointer(Some(Vec2::new(1.0, 0.5)), 10.0, 1.0);
        let first = tilt.step(0.1);
        assert!(approx_eq(first.y, 1.0));
        let second = tilt.step(0.1);
        assert!(approx_eq(second.y, 1.9));
    }

    #[test]
    fn drift_follows_tilt() {
        let mut tilt = Tilt::default();
        tilt.set_pointer(Some(Vec2::new(1.0, 0.0)), 15.0, 1.0);
        tilt.step(1.0);
        assert_eq!(tilt.drift(8.0, 15.0), Vec2::new(8.0, -8.0));
        assert_eq!(tilt.drift(8.0, 0.0), Vec2::ZERO);
    }
}
