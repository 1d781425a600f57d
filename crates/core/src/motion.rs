//! Stateless numeric helpers shared by every animated component.

/// Linear interpolation. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

/// Cubic Hermite easing, `t² (3 − 2t)` over the clamped edge interval.
///
/// Precondition: `edge0 != edge1`. Callers with a zero-length interval
/// must branch before calling.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn vector_length_2d(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// One step of first-order damping: move `current` toward `target` by
/// `factor` of the remaining distance.
#[inline]
pub fn approach(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(4.0, 2.0, -1.0), 6.0);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn smoothstep_hermite_form() {
        assert_eq!(smoothstep(0.0, 1.0, -3.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 4.0), 1.0);
        assert!(approx_eq(smoothstep(0.0, 1.0, 0.5), 0.5));
        assert!(approx_eq(smoothstep(0.0, 1.0, 0.25), 0.15625));
        assert!(approx_eq(smoothstep(2.0, 4.0, 3.0), 0.5));
    }

    #[test]
    fn vector_length() {
        assert_eq!(vector_length_2d(3.0, 4.0), 5.0);
        assert_eq!(vector_length_2d(0.0, 0.0), 0.0);
    }

    #[test]
    fn approach_moves_fraction_of_gap() {
        assert!(approx_eq(approach(0.0, 10.0, 0.1), 1.0));
        assert_eq!(approach(5.0, 5.0, 0.3), 5.0);
    }
}
