//! Frame derivation: settings in, `Frame` out.
//!
//! `Problem` is the core's entire contract with the presentation layer. It
//! owns a validated `Settings` and derives one `Frame` on demand: layer
//! boundaries, the five-beam trace, and a sampled waveform per beam. Every
//! solve recomputes from scratch; there is no incremental update and no
//! cached state, so identical settings always yield identical frames.

use anyhow::Result;

use crate::beam;
use crate::geom::LayerBoundaries;
use crate::result::Frame;
use crate::settings::{Settings, FILM_TOP_Y, SAMPLE_STEP_PX, SUBSTRATE_DEPTH_PX};
use crate::wave::Waveform;

#[cfg(test)]
mod tests {

    use super::*;
    use crate::material::Material;

    #[test]
    fn solve_is_idempotent() {
        let problem = Problem::new(Settings::reference()).unwrap();
        let first = problem.solve().unwrap();
        let second = problem.solve().unwrap();
        assert_eq!(first, second)
    }

    #[test]
    fn one_waveform_per_beam() {
        let frame = Problem::new(Settings::reference()).unwrap().solve().unwrap();
        assert_eq!(frame.beams.len(), 5);
        assert_eq!(frame.waveforms.len(), frame.beams.len());
        for (beam, polyline) in frame.beams.iter().zip(&frame.waveforms) {
            let expected = (beam.length() / SAMPLE_STEP_PX).ceil() as usize + 1;
            assert_eq!(polyline.len(), expected);
        }
    }

    #[test]
    fn rejects_out_of_range_angle() {
        let mut settings = Settings::reference();
        settings.incidence_angle_deg = 45.0;
        assert!(Problem::new(settings).is_err())
    }

    #[test]
    fn rejects_out_of_range_thickness() {
        let mut settings = Settings::reference();
        settings.film_thickness_nm = 5.0;
        assert!(Problem::new(settings).is_err())
    }

    #[test]
    fn rejects_non_physical_film_index() {
        let mut settings = Settings::reference();
        settings.film = Material::Index(0.9);
        assert!(Problem::new(settings).is_err())
    }
}

/// A solvable visualization frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub settings: Settings,
}

impl Problem {
    /// Validates the settings and wraps them; invalid parameters are
    /// rejected here rather than computed with silently.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Derives the frame for the current settings.
    pub fn solve(&self) -> Result<Frame> {
        let boundaries = LayerBoundaries::new(
            FILM_TOP_Y,
            self.settings.film_thickness_px(),
            SUBSTRATE_DEPTH_PX,
        )?;

        let trace = beam::trace(&self.settings, &boundaries);

        let waveforms = trace
            .beams
            .iter()
            .map(|beam| {
                Waveform::from_segment(beam, self.settings.amplitude_px, SAMPLE_STEP_PX).polyline()
            })
            .collect();

        Ok(Frame {
            boundaries,
            beams: trace.beams,
            waveforms,
            total_internal_reflection: trace.total_internal_reflection,
        })
    }
}
