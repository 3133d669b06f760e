//! Interactive drawing of a solved frame with macroquad.
//!
//! Debug/demo visualization only; the real presentation layer consumes the
//! frame through `result::Frame`. Enabled with the `visualization` feature.

use macroquad::prelude::*;
use nalgebra::Point2;

use crate::beam::BeamKind;
use crate::result::Frame;

const OFFSET_X: f32 = 40.0; // modify this depending on window size
const OFFSET_Y: f32 = 20.0;
const SCENE_WIDTH: f32 = 640.0;

fn to_screen(point: &Point2<f32>) -> (f32, f32) {
    (point.x + OFFSET_X, point.y + OFFSET_Y)
}

fn beam_color(kind: BeamKind) -> Color {
    match kind {
        BeamKind::Incident => GOLD,
        BeamKind::Reflected => ORANGE,
        BeamKind::Refracted => SKYBLUE,
        BeamKind::InternalReflection => GREEN,
        BeamKind::Transmitted => PURPLE,
    }
}

/// Draws the layer stack, beam center lines and waveform polylines.
pub fn draw_frame(frame: &Frame) {
    let bounds = &frame.boundaries;

    draw_rectangle(
        OFFSET_X,
        bounds.film_top_y + OFFSET_Y,
        SCENE_WIDTH,
        bounds.film_thickness_px(),
        Color::from_rgba(220, 235, 250, 255),
    );
    draw_rectangle(
        OFFSET_X,
        bounds.substrate_top_y + OFFSET_Y,
        SCENE_WIDTH,
        bounds.substrate_bottom_y - bounds.substrate_top_y,
        BEIGE,
    );

    for beam in &frame.beams {
        let (x1, y1) = to_screen(&beam.start);
        let (x2, y2) = to_screen(&beam.end);
        draw_line(x1, y1, x2, y2, 1.0, GRAY);
    }

    for (beam, polyline) in frame.beams.iter().zip(&frame.waveforms) {
        let color = beam_color(beam.kind);
        for pair in polyline.windows(2) {
            let (x1, y1) = to_screen(&pair[0]);
            let (x2, y2) = to_screen(&pair[1]);
            draw_line(x1, y1, x2, y2, 2.0, color);
        }
    }
}
