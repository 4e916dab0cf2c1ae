use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::controls::OrbitControls;
use crate::error::ConfigError;
use crate::params::Parameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Viewport {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Viewport {
    type Err = String;

    /// Parses `WIDTHxHEIGHT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|err| format!("invalid dimension '{v}': {err}"))
        };
        Ok(Self {
            width: parse(width)?,
            height: parse(height)?,
        })
    }
}

/// Initial pose of the orbit controls, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f64,
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let controls = OrbitControls::default();
        Self {
            distance: controls.distance,
            azimuth_deg: controls.azimuth.to_degrees(),
            elevation_deg: controls.elevation.to_degrees(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub parameters: Parameters,
    pub viewport: Viewport,
    pub camera: CameraConfig,
    /// Named files that must exist before the first tick.
    pub assets: BTreeMap<String, PathBuf>,
}

impl SimulationConfig {
    /// Reads a TOML file. Relative asset paths resolve against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            for asset in config.assets.values_mut() {
                if asset.is_relative() {
                    *asset = base.join(&*asset);
                }
            }
        }
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.parameters.validate()?;
        Ok(())
    }

    pub fn controls(&self) -> OrbitControls {
        OrbitControls::new(
            self.camera.distance,
            self.camera.azimuth_deg.to_radians(),
            self.camera.elevation_deg.to_radians(),
        )
    }
}
