//! Waveform sampling along a beam segment.
//!
//! Each beam is rendered as a sinusoid perpendicular to its direction. The
//! generator walks the segment in fixed ~5 px steps and offsets each sample
//! along the 90-degree-rotated beam direction by
//! `amplitude * sin(2 pi * arc / wavelength + start_phase)`.
//!
//! With the `FromEnd` anchor the arc-length parametrization is mirrored and
//! the oscillation sign negated, so the phase reference point sits at the
//! segment's end instead of its start. The sample sequence is lazy and
//! restartable; nothing is cached between frames.

use nalgebra::{Point2, Vector2};

use crate::beam::{BeamSegment, WaveAnchor};

#[cfg(test)]
mod tests {

    use super::*;
    use std::f32::consts::PI;

    fn waveform(
        length: f32,
        amplitude: f32,
        start_phase: f32,
        anchor: WaveAnchor,
    ) -> Waveform {
        Waveform {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(length, 0.0),
            wavelength_px: 20.0,
            amplitude_px: amplitude,
            start_phase,
            anchor,
            step_px: 5.0,
        }
    }

    #[test]
    fn sample_count_is_ceil_length_over_step_plus_one() {
        assert_eq!(waveform(100.0, 1.0, 0.0, WaveAnchor::FromStart).num_samples(), 21);
        assert_eq!(waveform(101.0, 1.0, 0.0, WaveAnchor::FromStart).num_samples(), 22);
        assert_eq!(waveform(4.0, 1.0, 0.0, WaveAnchor::FromStart).num_samples(), 2);
    }

    #[test]
    fn first_sample_sits_on_the_start_point() {
        let points = waveform(100.0, 8.0, 0.0, WaveAnchor::FromStart).polyline();
        assert_eq!(points.len(), 21);
        assert_eq!(points[0], Point2::new(0.0, 0.0));
    }

    #[test]
    fn start_offset_is_amplitude_times_sin_phase() {
        // horizontal beam: the perpendicular is +y
        let points = waveform(100.0, 8.0, PI / 2.0, WaveAnchor::FromStart).polyline();
        assert!((points[0].y - 8.0).abs() < 1e-5);
        assert!(points[0].x.abs() < 1e-5);
    }

    #[test]
    fn from_end_references_phase_at_the_end_point() {
        let points = waveform(100.0, 8.0, 0.0, WaveAnchor::FromEnd).polyline();
        let last = points.last().unwrap();
        assert!((last.x - 100.0).abs() < 1e-5);
        assert!(last.y.abs() < 1e-5);
    }

    #[test]
    fn from_end_mirrors_and_negates() {
        let forward = waveform(100.0, 8.0, 0.3, WaveAnchor::FromStart).polyline();
        let mirrored = waveform(100.0, 8.0, 0.3, WaveAnchor::FromEnd).polyline();
        // sample k of the mirrored wave oscillates like sample n-1-k of the
        // forward wave, sign flipped
        for (k, point) in mirrored.iter().enumerate() {
            let twin = &forward[forward.len() - 1 - k];
            assert!((point.y + twin.y).abs() < 1e-4);
        }
    }

    #[test]
    fn samples_are_restartable_and_identical() {
        let waveform = waveform(73.0, 5.0, 1.1, WaveAnchor::FromStart);
        let first: Vec<_> = waveform.points().collect();
        let second: Vec<_> = waveform.points().collect();
        assert_eq!(first, second)
    }

    #[test]
    fn oscillation_stays_within_amplitude() {
        let waveform = waveform(200.0, 12.0, 0.7, WaveAnchor::FromStart);
        for point in waveform.points() {
            assert!(point.y.abs() <= 12.0 + 1e-4);
        }
    }
}

/// A sampled sinusoid along one beam segment.
///
/// Purely presentational: the polyline is recomputed from scratch whenever a
/// parameter changes and holds no state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub start: Point2<f32>,
    pub end: Point2<f32>,
    pub wavelength_px: f32,
    pub amplitude_px: f32,
    pub start_phase: f32,
    pub anchor: WaveAnchor,
    pub step_px: f32,
}

impl Waveform {
    pub fn from_segment(segment: &BeamSegment, amplitude_px: f32, step_px: f32) -> Self {
        Self {
            start: segment.start,
            end: segment.end,
            wavelength_px: segment.wavelength_px,
            amplitude_px,
            start_phase: segment.start_phase,
            anchor: segment.anchor,
            step_px,
        }
    }

    fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }

    /// Number of samples: one every `step_px` along the beam, inclusive of
    /// both endpoints.
    pub fn num_samples(&self) -> usize {
        (self.length() / self.step_px).ceil() as usize + 1
    }

    /// Lazily yields the sampled polyline. Calling again restarts from the
    /// first sample.
    pub fn points(&self) -> impl Iterator<Item = Point2<f32>> + '_ {
        let length = self.length();
        let num_samples = self.num_samples();
        let direction = if length > 0.0 {
            (self.end - self.start) / length
        } else {
            Vector2::zeros()
        };
        let perpendicular = Vector2::new(-direction.y, direction.x);

        (0..num_samples).map(move |k| {
            let t = if num_samples > 1 {
                k as f32 / (num_samples - 1) as f32
            } else {
                0.0
            };
            let (arc, sign) = match self.anchor {
                WaveAnchor::FromStart => (t * length, 1.0),
                WaveAnchor::FromEnd => ((1.0 - t) * length, -1.0),
            };
            let offset = sign
                * self.amplitude_px
                * (crate::phase::path_phase(arc, self.wavelength_px) + self.start_phase).sin();

            self.start + direction * (t * length) + perpendicular * offset
        })
    }

    /// Collected form of [`Self::points`].
    pub fn polyline(&self) -> Vec<Point2<f32>> {
        self.points().collect()
    }
}
