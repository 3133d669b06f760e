//! Layer geometry in display pixels.
//!
//! The scene is a vertical stack: air above, film in the middle, substrate
//! below. The y axis points down, matching screen coordinates, so "top"
//! boundaries have smaller y values.

use anyhow::Result;
use serde::Serialize;


/// Horizontal boundaries of the film and substrate layers, in pixels.
///
/// `film_bottom_y` is always derived as `film_top_y + film thickness`; it is
/// never set independently. Invariant: `film_top_y < film_bottom_y <=
/// substrate_bottom_y`, with `substrate_top_y == film_bottom_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerBoundaries {
    pub film_top_y: f32,
    pub film_bottom_y: f32,
    pub substrate_top_y: f32,
    pub substrate_bottom_y: f32,
}

impl LayerBoundaries {
    /// Derives the layer stack from the film's top edge, its thickness in
    /// pixels, and the rendered substrate depth.
    pub fn new(film_top_y: f32, film_thickness_px: f32, substrate_depth_px: f32) -> Result<Self> {
        if !film_thickness_px.is_finite() || film_thickness_px <= 0.0 {
            return Err(anyhow::anyhow!(
                "film thickness must be a positive finite pixel count, got {}",
                film_thickness_px
            ));
        }
        if !substrate_depth_px.is_finite() || substrate_depth_px < 0.0 {
            return Err(anyhow::anyhow!(
                "substrate depth must be non-negative, got {}",
                substrate_depth_px
            ));
        }

        let film_bottom_y = film_top_y + film_thickness_px;

        Ok(Self {
            film_top_y,
            film_bottom_y,
            substrate_top_y: film_bottom_y,
            substrate_bottom_y: film_bottom_y + substrate_depth_px,
        })
    }

    pub fn film_thickness_px(&self) -> f32 {
        self.film_bottom_y - self.film_top_y
    }
}
