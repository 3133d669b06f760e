//! Per-frame value bundle handed to the presentation layer.

use nalgebra::Point2;
use serde::Serialize;

use crate::beam::BeamSegment;
use crate::geom::LayerBoundaries;

/// Everything derived for one render pass.
///
/// A `Frame` is a pure derivation of the current settings: freshly computed
/// on every parameter change, never mutated, superseded by the next solve.
/// `waveforms` holds one sampled polyline per entry in `beams`, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub boundaries: LayerBoundaries,
    pub beams: Vec<BeamSegment>,
    pub waveforms: Vec<Vec<Point2<f32>>>,
    /// Set when no refracted ray exists at the air/film surface; the
    /// downstream segments are omitted rather than drawn with invalid
    /// geometry.
    pub total_internal_reflection: bool,
}
