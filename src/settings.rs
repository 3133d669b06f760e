use anyhow::Result;
use clap::Parser;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

use crate::beam::WaveAnchor;
use crate::material::Material;

/// Vertical pixel position of the film's upper surface.
pub const FILM_TOP_Y: f32 = 220.0;
/// Horizontal pixel position where the incident ray enters the scene.
pub const ENTRY_X_PX: f32 = 160.0;
/// Vertical drop of the incident leg from the entry point to the film.
pub const ENTRY_DROP_PX: f32 = 150.0;
/// Display length of the reflected and transmitted legs.
pub const DISPLAY_LEG_PX: f32 = 150.0;
/// Rendered depth of the substrate below the film.
pub const SUBSTRATE_DEPTH_PX: f32 = 80.0;
/// Spatial step between waveform samples along a beam.
pub const SAMPLE_STEP_PX: f32 = 5.0;
/// Incidence angle slider range in degrees.
pub const ANGLE_RANGE_DEG: (f32, f32) = (0.0, 30.0);
/// Film thickness slider range in nanometres.
pub const THICKNESS_RANGE_NM: (f32, f32) = (10.0, 700.0);

/// Runtime configuration for one simulation frame.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Settings {
    /// Incidence angle in degrees from the surface normal.
    pub incidence_angle_deg: f32,
    /// Film thickness in nanometres.
    pub film_thickness_nm: f32,
    /// Film material preset or bare refractive index.
    pub film: Material,
    #[serde(default = "default_wavelength_nm")]
    pub wavelength_nm: f32,
    #[serde(default = "default_pixels_per_nm")]
    pub pixels_per_nm: f32,
    #[serde(default = "default_medium_refr_index")]
    pub medium_refr_index: f32,
    #[serde(default = "default_substrate_refr_index")]
    pub substrate_refr_index: f32,
    /// Peak perpendicular displacement of the rendered waves, in pixels.
    #[serde(default = "default_amplitude_px")]
    pub amplitude_px: f32,
    /// Phase reference point of the incident beam's wave. The two
    /// historical variants of the page differed here.
    #[serde(default = "default_wave_anchor")]
    pub wave_anchor: WaveAnchor,
}

fn default_wavelength_nm() -> f32 {
    500.0
}

fn default_pixels_per_nm() -> f32 {
    0.3
}

fn default_medium_refr_index() -> f32 {
    1.0
}

fn default_substrate_refr_index() -> f32 {
    1.5
}

fn default_amplitude_px() -> f32 {
    10.0
}

fn default_wave_anchor() -> WaveAnchor {
    WaveAnchor::FromEnd
}

impl Settings {
    /// Baseline parameter set: 15 degrees onto 100 nm of MgF2 on glass,
    /// matching `config/default.toml`.
    pub fn reference() -> Self {
        Self {
            incidence_angle_deg: 15.0,
            film_thickness_nm: 100.0,
            film: Material::Preset(crate::material::Preset::Mgf2),
            wavelength_nm: default_wavelength_nm(),
            pixels_per_nm: default_pixels_per_nm(),
            medium_refr_index: default_medium_refr_index(),
            substrate_refr_index: default_substrate_refr_index(),
            amplitude_px: default_amplitude_px(),
            wave_anchor: default_wave_anchor(),
        }
    }

    pub fn incidence_angle_rad(&self) -> f32 {
        self.incidence_angle_deg.to_radians()
    }

    pub fn film_refr_index(&self) -> f32 {
        self.film.refr_index()
    }

    pub fn film_thickness_px(&self) -> f32 {
        self.film_thickness_nm * self.pixels_per_nm
    }

    /// Wavelength in display pixels inside a medium of the given index.
    pub fn wavelength_px(&self, refr_index: f32) -> f32 {
        self.wavelength_nm * self.pixels_per_nm / refr_index
    }

    /// Rejects parameters outside the documented ranges instead of
    /// computing with them.
    pub fn validate(&self) -> Result<()> {
        let (angle_min, angle_max) = ANGLE_RANGE_DEG;
        if !(angle_min..=angle_max).contains(&self.incidence_angle_deg) {
            anyhow::bail!(
                "incidence angle {} deg outside [{}, {}]",
                self.incidence_angle_deg,
                angle_min,
                angle_max
            );
        }
        let (thickness_min, thickness_max) = THICKNESS_RANGE_NM;
        if !(thickness_min..=thickness_max).contains(&self.film_thickness_nm) {
            anyhow::bail!(
                "film thickness {} nm outside [{}, {}]",
                self.film_thickness_nm,
                thickness_min,
                thickness_max
            );
        }
        if self.film_refr_index() <= 1.0 {
            anyhow::bail!(
                "film refractive index must exceed 1, got {}",
                self.film_refr_index()
            );
        }
        if self.medium_refr_index <= 0.0 || self.substrate_refr_index <= 0.0 {
            anyhow::bail!("refractive indices must be positive");
        }
        if self.wavelength_nm <= 0.0 {
            anyhow::bail!("wavelength must be positive, got {}", self.wavelength_nm);
        }
        if self.pixels_per_nm <= 0.0 {
            anyhow::bail!("pixel scale must be positive, got {}", self.pixels_per_nm);
        }
        if self.amplitude_px < 0.0 {
            anyhow::bail!("wave amplitude must be non-negative, got {}", self.amplitude_px);
        }
        Ok(())
    }
}

pub fn load_default_config() -> Result<Settings> {
    let root = retrieve_project_root();
    let default_config_file = root.join("config/default.toml");

    let settings: Config = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()?;

    let config: Settings = settings.try_deserialize()?;
    config.validate()?;

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    let root = retrieve_project_root();

    let default_config_file = root.join("config/default.toml");
    let local_config = root.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        println!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        println!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("thinfilm"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(angle) = args.angle {
        config.incidence_angle_deg = angle;
    }
    if let Some(thickness) = args.thickness {
        config.film_thickness_nm = thickness;
    }
    if let Some(film) = args.film {
        config.film = film;
    }
    if let Some(wavelength) = args.wavelength {
        config.wavelength_nm = wavelength;
    }
    if let Some(scale) = args.scale {
        config.pixels_per_nm = scale;
    }
    if let Some(amplitude) = args.amplitude {
        config.amplitude_px = amplitude;
    }
    if let Some(anchor) = args.anchor {
        config.wave_anchor = anchor;
    }

    config.validate()?;

    Ok(config)
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the THINFILM_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
/// If none of these methods work, the function will panic.
fn retrieve_project_root() -> std::path::PathBuf {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        std::path::PathBuf::from(manifest_dir)
    } else if let Ok(path) = env::var("THINFILM_ROOT_DIR") {
        // Allow explicit configuration via environment variable
        std::path::PathBuf::from(path)
    } else {
        // Fallback: walk upward from the executable directory looking for a
        // "config" subdirectory
        let exe_path = env::current_exe().expect("Failed to get current executable path");
        let mut current_dir = exe_path
            .parent()
            .expect("Failed to get executable directory")
            .to_path_buf();
        let mut found = false;

        while !found && current_dir.parent().is_some() {
            if current_dir.join("config").is_dir() {
                found = true;
            } else {
                current_dir = current_dir.parent().unwrap().to_path_buf();
            }
        }

        if found {
            current_dir
        } else {
            panic!("Could not find project root directory");
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "thinfilm - beam and wavefront geometry for thin-film interference")]
pub struct CliArgs {
    /// Incidence angle in degrees, measured from the surface normal.
    #[arg(short, long)]
    angle: Option<f32>,

    /// Film thickness in nanometres.
    #[arg(short, long)]
    thickness: Option<f32>,

    /// Film material: mgf2, soap, sio2, zns, or a bare refractive index.
    #[arg(short, long)]
    film: Option<Material>,

    /// Vacuum wavelength in nanometres.
    #[arg(short, long)]
    wavelength: Option<f32>,

    /// Display scale in pixels per nanometre.
    #[arg(long)]
    scale: Option<f32>,

    /// Wave amplitude in display pixels.
    #[arg(long)]
    amplitude: Option<f32>,

    /// Phase reference point for the incident wave: start or end.
    #[arg(long)]
    anchor: Option<WaveAnchor>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Incidence Angle: {:.2} deg
  - Film Thickness: {:.1} nm
  - Film: {}
  - Wavelength: {:.1} nm
  - Scale: {:.3} px/nm
  - Medium Refractive Index: {:.3}
  - Substrate Refractive Index: {:.3}
  ",
            self.incidence_angle_deg,
            self.film_thickness_nm,
            self.film,
            self.wavelength_nm,
            self.pixels_per_nm,
            self.medium_refr_index,
            self.substrate_refr_index,
        )
    }
}
