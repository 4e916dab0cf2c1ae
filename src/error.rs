use std::path::PathBuf;

use thiserror::Error;

/// A configuration value or input the observer core refuses to work with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("radius {0} is at or inside the event horizon (must exceed 1)")]
    InsideHorizon(f64),
    #[error("orbital radius {0} is at or inside the photon sphere (must exceed 1.5)")]
    InsidePhotonSphere(f64),
    #[error("time step must be non-negative, got {0}")]
    NegativeTimeStep(f64),
    #[error("time scale must be non-negative, got {0}")]
    NegativeTimeScale(f64),
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    #[error("cannot normalize a zero-length {0} vector")]
    ZeroLengthVector(&'static str),
    #[error("{name} {value} is outside {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Failure of a single scheduler tick.
#[derive(Debug, Error)]
pub enum TickError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
    #[error("render dispatch failed")]
    RenderDispatch(#[source] anyhow::Error),
    #[error("shader compilation failed")]
    ShaderCompile(#[source] anyhow::Error),
}

/// Failure to load or validate a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ParameterError),
    #[error("viewport must be non-zero, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadinessError {
    #[error("unknown prerequisite '{0}'")]
    Unknown(String),
    #[error("still waiting for: {}", .0.join(", "))]
    Pending(Vec<String>),
}
