//! Beam geometry and wavefront phase engine for interactive thin-film
//! interference visualizations.
//!
//! Given an incidence angle, a film thickness, and a film material, the
//! crate derives the five beam segments of the classic thin-film picture
//! (incident, reflected, refracted, internal reflection, transmitted),
//! chains the wave phase across the interfaces including the half-wave flip
//! on low-to-high index reflection, and samples a sinusoidal waveform
//! polyline along each beam for rendering.

pub mod beam;
pub mod geom;
#[cfg(feature = "visualization")]
pub mod helpers;
pub mod material;
pub mod output;
pub mod phase;
pub mod problem;
pub mod result;
pub mod settings;
pub mod snell;
pub mod wave;
