//! Phase bookkeeping for thin-film interference cues.
//!
//! Two rules drive the constructive/destructive interference shown by the
//! simulation:
//!
//! - a wave accumulates 2 pi radians of phase per wavelength of path
//!   travelled inside a medium, and
//! - reflection off a higher-index medium introduces a half-wave (pi) phase
//!   flip, while reflection off a lower-index medium introduces none.
//!
//! The reflection shift also negates the incoming phase, because a reflected
//! segment's parametrization runs backward from the reflection point relative
//! to the wave that arrived there.

use std::f32::consts::PI;


/// Phase in radians accumulated travelling `path_px` display pixels of a wave
/// with the given wavelength in pixels.
pub fn path_phase(path_px: f32, wavelength_px: f32) -> f32 {
    2.0 * PI * path_px / wavelength_px
}

/// Starting phase of a reflected wave given the phase arriving at the
/// interface and the indices on either side of it.
///
/// The incoming phase is negated because the reflected segment is
/// parametrized away from the reflection point; pi is added when the far
/// medium has the higher index (the half-wave flip behind thin-film
/// interference).
pub fn reflection_phase_shift(incoming_phase: f32, n_incident: f32, n_next: f32) -> f32 {
    let flip = if n_next > n_incident { PI } else { 0.0 };
    -incoming_phase + flip
}
