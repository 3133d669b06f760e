//! Writes a solved frame to disk.
//!
//! Three artifacts per run, in a timestamped directory: `frame.json` with
//! the full frame for an external presentation layer, `settings.toml`
//! echoing the parameters that produced it, and `frame.svg`, a standalone
//! rendering of the layer stack, beams, and waveforms.

use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Result;
use itertools::Itertools;
use nalgebra::Point2;

use crate::result::Frame;
use crate::settings::Settings;


const SVG_WIDTH: f32 = 640.0;
const SVG_HEIGHT: f32 = 560.0;
const FILM_FILL: &str = "#dcebfa";
const SUBSTRATE_FILL: &str = "#e7dfd2";

/// Writes `frame.json`, `settings.toml` and `frame.svg` to a timestamped
/// directory under `out/` and returns its path.
pub fn writeup(frame: &Frame, settings: &Settings) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let dir = PathBuf::from("out").join(format!("frame_{}", stamp));
    fs::create_dir_all(&dir)?;

    let file = fs::File::create(dir.join("frame.json"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), frame)?;

    fs::write(dir.join("settings.toml"), toml::to_string_pretty(settings)?)?;
    fs::write(dir.join("frame.svg"), render_svg(frame))?;

    Ok(dir)
}

/// Renders the frame as a standalone SVG document.
pub fn render_svg(frame: &Frame) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\">\n",
        w = SVG_WIDTH,
        h = SVG_HEIGHT
    );

    // layer stack
    let bounds = &frame.boundaries;
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"{:.2}\" width=\"{}\" height=\"{:.2}\" fill=\"{}\"/>\n",
        bounds.film_top_y,
        SVG_WIDTH,
        bounds.film_thickness_px(),
        FILM_FILL
    ));
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"{:.2}\" width=\"{}\" height=\"{:.2}\" fill=\"{}\"/>\n",
        bounds.substrate_top_y,
        SVG_WIDTH,
        bounds.substrate_bottom_y - bounds.substrate_top_y,
        SUBSTRATE_FILL
    ));

    // beam center lines, then the waves on top
    for beam in &frame.beams {
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" \
             stroke=\"{}\" stroke-width=\"1\" stroke-dasharray=\"4 4\"><title>{}</title></line>\n",
            beam.start.x, beam.start.y, beam.end.x, beam.end.y, beam.color, beam.label
        ));
    }
    for (beam, polyline) in frame.beams.iter().zip(&frame.waveforms) {
        svg.push_str(&format!(
            "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            path_data(polyline),
            beam.color
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// SVG path data for a sampled polyline.
fn path_data(points: &[Point2<f32>]) -> String {
    points
        .iter()
        .enumerate()
        .format_with(" ", |(i, point), f| {
            let command = if i == 0 { 'M' } else { 'L' };
            f(&format_args!("{} {:.2},{:.2}", command, point.x, point.y))
        })
        .to_string()
}
