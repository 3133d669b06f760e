//! Beam segments and the five-segment trace through the film stack.
//!
//! A frame of the simulation contains exactly five straight beam legs:
//! incident, reflected, refracted, internal (substrate) reflection, and
//! transmitted. Each carries the metadata the waveform generator and the
//! presentation layer need: endpoints, color, wavelength in pixels for the
//! medium it travels in, and a starting phase chained through the interface
//! interactions.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::geom::LayerBoundaries;
use crate::phase::{path_phase, reflection_phase_shift};
use crate::settings::{Settings, DISPLAY_LEG_PX, ENTRY_DROP_PX, ENTRY_X_PX};
use crate::snell::refraction_angle;


/// Which end of a beam the rendered wave's phase is referenced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveAnchor {
    FromStart,
    FromEnd,
}

impl std::str::FromStr for WaveAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" | "from_start" => Ok(WaveAnchor::FromStart),
            "end" | "from_end" => Ok(WaveAnchor::FromEnd),
            other => Err(format!("unknown wave anchor '{}'. Expected start or end", other)),
        }
    }
}

/// The five legs of the ray path through the film stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BeamKind {
    Incident,
    Reflected,
    Refracted,
    InternalReflection,
    Transmitted,
}

impl BeamKind {
    /// Display color handed to the presentation layer.
    pub fn color(&self) -> &'static str {
        match self {
            BeamKind::Incident => "#f2c14e",
            BeamKind::Reflected => "#e4572e",
            BeamKind::Refracted => "#4e9af2",
            BeamKind::InternalReflection => "#29bb89",
            BeamKind::Transmitted => "#a06cd5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BeamKind::Incident => "incident",
            BeamKind::Reflected => "reflected",
            BeamKind::Refracted => "refracted",
            BeamKind::InternalReflection => "internal reflection",
            BeamKind::Transmitted => "transmitted",
        }
    }
}

/// One straight leg of the light path, plus everything the waveform
/// generator needs to draw its wave.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamSegment {
    pub kind: BeamKind,
    pub start: Point2<f32>,
    pub end: Point2<f32>,
    pub color: &'static str,
    pub label: &'static str,
    /// Wavelength in display pixels inside the medium this leg travels in.
    pub wavelength_px: f32,
    /// Phase in radians at the anchor point of the rendered wave.
    pub start_phase: f32,
    pub anchor: WaveAnchor,
}

impl BeamSegment {
    fn new(
        kind: BeamKind,
        start: Point2<f32>,
        end: Point2<f32>,
        wavelength_px: f32,
        start_phase: f32,
        anchor: WaveAnchor,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            color: kind.color(),
            label: kind.label(),
            wavelength_px,
            start_phase,
            anchor,
        }
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }

    /// Unit vector from start to end. Zero-length segments never occur in a
    /// traced frame.
    pub fn direction(&self) -> Vector2<f32> {
        (self.end - self.start).normalize()
    }
}

/// Result of tracing one frame: the beam fan and whether refraction into the
/// film was impossible.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamTrace {
    pub beams: Vec<BeamSegment>,
    pub total_internal_reflection: bool,
}

/// Traces the five beam segments for the current parameters.
///
/// The incident and reflected legs always exist. If Snell's law admits no
/// transmitted ray at the air/film surface the remaining three legs are
/// omitted and the trace is flagged, so callers never see NaN geometry.
pub fn trace(settings: &Settings, bounds: &LayerBoundaries) -> BeamTrace {
    let theta_i = settings.incidence_angle_rad();
    let n_medium = settings.medium_refr_index;
    let n_film = settings.film_refr_index();
    let n_substrate = settings.substrate_refr_index;
    let wavelength_medium = settings.wavelength_px(n_medium);

    // upward-and-outward unit vector for the two legs leaving the film
    let up_and_out = Vector2::new(theta_i.sin(), -theta_i.cos());

    let entry = Point2::new(ENTRY_X_PX, bounds.film_top_y - ENTRY_DROP_PX);
    let hit = Point2::new(ENTRY_X_PX + theta_i.tan() * ENTRY_DROP_PX, bounds.film_top_y);

    let incident = BeamSegment::new(
        BeamKind::Incident,
        entry,
        hit,
        wavelength_medium,
        0.0,
        settings.wave_anchor,
    );

    // phase arriving at the film surface, relative to the incident anchor
    let surface_phase = match settings.wave_anchor {
        WaveAnchor::FromEnd => 0.0,
        WaveAnchor::FromStart => path_phase(incident.length(), wavelength_medium),
    };

    let reflected = BeamSegment::new(
        BeamKind::Reflected,
        hit,
        hit + up_and_out * DISPLAY_LEG_PX,
        wavelength_medium,
        reflection_phase_shift(surface_phase, n_medium, n_film),
        WaveAnchor::FromStart,
    );

    let theta_t = match refraction_angle(theta_i, n_medium, n_film) {
        Ok(theta_t) => theta_t,
        Err(_) => {
            return BeamTrace {
                beams: vec![incident, reflected],
                total_internal_reflection: true,
            };
        }
    };

    let film_px = bounds.film_thickness_px();
    let wavelength_film = settings.wavelength_px(n_film);

    let refracted = BeamSegment::new(
        BeamKind::Refracted,
        hit,
        Point2::new(hit.x + theta_t.tan() * film_px, bounds.film_bottom_y),
        wavelength_film,
        surface_phase,
        WaveAnchor::FromStart,
    );

    let bottom_phase = surface_phase + path_phase(refracted.length(), wavelength_film);

    let internal = BeamSegment::new(
        BeamKind::InternalReflection,
        refracted.end,
        Point2::new(refracted.end.x + theta_t.tan() * film_px, bounds.film_top_y),
        wavelength_film,
        reflection_phase_shift(bottom_phase, n_film, n_substrate),
        WaveAnchor::FromStart,
    );

    let top_phase = internal.start_phase + path_phase(internal.length(), wavelength_film);

    // negated once more so the rendered crest matches the physical exit phase
    let transmitted = BeamSegment::new(
        BeamKind::Transmitted,
        internal.end,
        internal.end + up_and_out * DISPLAY_LEG_PX,
        wavelength_medium,
        -top_phase,
        WaveAnchor::FromStart,
    );

    BeamTrace {
        beams: vec![incident, reflected, refracted, internal, transmitted],
        total_internal_reflection: false,
    }
}
