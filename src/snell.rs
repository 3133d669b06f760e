//! Snell's law refraction for real refractive indices.
//!
//! This module computes the transmitted angle at a planar interface between
//! two media. The educational thin-film setup only involves lossless media,
//! so refractive indices are plain reals and the classic form of Snell's law
//! applies: n1 sin(theta_i) = n2 sin(theta_t).
//!
//! Total internal reflection is detected *before* the inverse sine is taken:
//! when |n1 sin(theta_i) / n2| exceeds one there is no transmitted ray, and
//! callers receive a domain error rather than a NaN angle. Within the
//! configured angle and index ranges of the simulation this never fires, but
//! the guard keeps the geometry free of invalid coordinates regardless of
//! input.

use anyhow::Result;

#[cfg(test)]
mod tests {

    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn normal_incidence_same_media() {
        let theta_t = refraction_angle(0.0, 1.0, 1.0).unwrap();
        assert!(theta_t.abs() < f32::EPSILON)
    }

    #[test]
    fn normal_incidence() {
        let theta_t = refraction_angle(0.0, 1.0, 1.38).unwrap();
        assert!(theta_t.abs() < f32::EPSILON)
    }

    #[test]
    fn angle15_into_mgf2() {
        let theta_i = 15.0 * PI / 180.0;
        let theta_t = refraction_angle(theta_i, 1.0, 1.38).unwrap();
        let abs_difference = (theta_t - 0.188_66).abs();
        assert!(abs_difference < 0.001)
    }

    #[test]
    fn angle30_incidence() {
        let theta_i = 30.0 * PI / 180.0;
        let theta_t = refraction_angle(theta_i, 1.0, 1.31).unwrap();
        let abs_difference = (theta_t - 0.3916126).abs();
        assert!(abs_difference < 0.001)
    }

    #[test]
    fn snell_consistency_over_ui_ranges() {
        // sin(theta_t) * n2 == sin(theta_i) * n1 across the slider ranges
        for deg in 0..=30 {
            let theta_i = deg as f32 * PI / 180.0;
            for &n2 in &[1.3, 1.38, 1.5, 2.0] {
                let theta_t = refraction_angle(theta_i, 1.0, n2).unwrap();
                let abs_difference = (theta_t.sin() * n2 - theta_i.sin()).abs();
                assert!(abs_difference < 1e-5);
                assert!((0.0..PI / 2.0).contains(&theta_t));
            }
        }
    }

    #[test]
    fn round_trip_reversibility() {
        let theta_i = 22.5 * PI / 180.0;
        let theta_t = refraction_angle(theta_i, 1.0, 1.38).unwrap();
        let back = refraction_angle(theta_t, 1.38, 1.0).unwrap();
        assert!((back - theta_i).abs() < 1e-5)
    }

    #[test]
    fn total_internal_reflection_is_an_error() {
        // glass to air beyond the critical angle
        let theta_i = 60.0 * PI / 180.0;
        assert!(refraction_angle(theta_i, 1.5, 1.0).is_err())
    }
}

/// Computes the transmitted angle at an interface using Snell's law.
///
/// `theta_i` is the incidence angle in radians, measured from the surface
/// normal; `n1` and `n2` are the refractive indices of the incident and
/// transmitting media. Returns an error when the required sine magnitude
/// exceeds one (total internal reflection), in which case no transmitted
/// ray exists.
pub fn refraction_angle(theta_i: f32, n1: f32, n2: f32) -> Result<f32> {
    let sin_theta_t = n1 * theta_i.sin() / n2;

    if sin_theta_t.abs() > 1.0 {
        return Err(anyhow::anyhow!(
            "total internal reflection: |n1 sin(theta_i) / n2| = {} exceeds 1",
            sin_theta_t.abs()
        ));
    }

    Ok(sin_theta_t.asin())
}
