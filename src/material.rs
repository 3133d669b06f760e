//! Film material presets.
//!
//! The UI offers a small dropdown of common coating materials; each maps to a
//! real refractive index at visible wavelengths. A bare index is also
//! accepted so a config file or the command line can explore materials the
//! dropdown does not list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


/// Film material: a named preset or a bare refractive index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Material {
    Preset(Preset),
    Index(f32),
}

/// Named coating materials offered by the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Magnesium fluoride, the classic anti-reflective coating.
    Mgf2,
    /// Soap film (water with surfactant).
    Soap,
    /// Fused silica.
    Sio2,
    /// Zinc sulfide, a high-index coating.
    Zns,
}

impl Preset {
    pub fn refr_index(&self) -> f32 {
        match self {
            Preset::Mgf2 => 1.38,
            Preset::Soap => 1.33,
            Preset::Sio2 => 1.46,
            Preset::Zns => 2.35,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Preset::Mgf2 => "MgF2",
            Preset::Soap => "soap film",
            Preset::Sio2 => "SiO2",
            Preset::Zns => "ZnS",
        }
    }
}

impl Material {
    pub fn refr_index(&self) -> f32 {
        match self {
            Material::Preset(preset) => preset.refr_index(),
            Material::Index(n) => *n,
        }
    }
}

impl FromStr for Material {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mgf2" => Ok(Material::Preset(Preset::Mgf2)),
            "soap" => Ok(Material::Preset(Preset::Soap)),
            "sio2" => Ok(Material::Preset(Preset::Sio2)),
            "zns" => Ok(Material::Preset(Preset::Zns)),
            other => other.parse::<f32>().map(Material::Index).map_err(|_| {
                format!(
                    "unknown material '{}'. Expected mgf2, soap, sio2, zns or a refractive index",
                    other
                )
            }),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Preset(preset) => {
                write!(f, "{} (n = {})", preset.name(), preset.refr_index())
            }
            Material::Index(n) => write!(f, "custom (n = {})", n),
        }
    }
}
