//! Vector math with defined degenerate fallbacks.
//!
//! All chain geometry is [`nalgebra::Vector3<f64>`]. The helpers here
//! exist because the solvers routinely hit degenerate inputs
//! (coincident joints, anti-parallel directions) and need them to
//! produce the zero vector rather than NaN: a zero result makes the
//! offending update a no-op instead of poisoning the whole chain.

use nalgebra::Vector3;

/// Magnitudes below this are treated as zero.
pub const EPS: f64 = 1e-9;

pub type Vec3 = Vector3<f64>;

/// Unit vector in the direction of `v`, or the zero vector when
/// `|v| < EPS`. Never produces NaN.
#[must_use]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    div_or_zero(v, v.norm())
}

/// `v / s`, or the zero vector when `|s| < EPS`.
#[must_use]
pub fn div_or_zero(v: Vec3, s: f64) -> Vec3 {
    if s.abs() < EPS { Vec3::zeros() } else { v / s }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    (a - b).norm()
}

/// Rotate `v` about `axis` by `angle` radians (Rodrigues' formula):
///
/// `v' = v cosθ + (axis × v) sinθ + axis (axis · v)(1 − cosθ)`
///
/// `axis` must be unit length; a non-unit axis produces a non-rigid
/// transform. A zero axis degenerates to `v cosθ` — callers that can
/// see a zero axis (anti-parallel geometry in CCD) skip the rotation
/// instead of applying it.
#[must_use]
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    v * cos + axis.cross(&v) * sin + axis * (axis.dot(&v) * (1.0 - cos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn normalize_zero_vector_is_zero() {
        let v = normalize_or_zero(Vec3::zeros());
        assert_eq!(v, Vec3::zeros());

        // Below-threshold magnitudes collapse too
        let v = normalize_or_zero(Vec3::new(1e-12, -1e-12, 0.0));
        assert_eq!(v, Vec3::zeros());
    }

    #[test]
    fn normalize_unit_length() {
        let v = normalize_or_zero(Vec3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(v.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn div_by_near_zero_is_zero() {
        let v = div_or_zero(Vec3::new(1.0, 2.0, 3.0), 1e-15);
        assert_eq!(v, Vec3::zeros());

        let v = div_or_zero(Vec3::new(2.0, 4.0, 6.0), 2.0);
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = x.cross(&y);
        assert_relative_eq!(z.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_quarter_turn_about_z() {
        let v = Vec3::new(1.0, 0.0, 0.0);
        let axis = Vec3::new(0.0, 0.0, 1.0);
        let r = rotate_about_axis(v, axis, FRAC_PI_2);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_preserves_length() {
        let v = Vec3::new(0.3, -1.2, 2.5);
        let axis = normalize_or_zero(Vec3::new(1.0, 1.0, -0.5));
        let r = rotate_about_axis(v, axis, 1.234);
        assert_relative_eq!(r.norm(), v.norm(), epsilon = 1e-12);
    }

    #[test]
    fn rotate_about_zero_axis_scales_by_cos() {
        // Degenerate axis: Rodrigues collapses to v * cos(angle).
        let v = Vec3::new(1.0, 2.0, 3.0);
        let r = rotate_about_axis(v, Vec3::zeros(), FRAC_PI_2);
        assert_relative_eq!(r.norm(), 0.0, epsilon = 1e-12);
    }
}
