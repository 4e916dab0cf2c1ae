use std::path::PathBuf;

use clap::Parser;
use spacetime_observer::config::{SimulationConfig, Viewport};
use spacetime_observer::error::ConfigError;
use spacetime_observer::params::DEFAULT_INCLINATION_DEG;
use spacetime_observer::run::RunOptions;

#[derive(Parser, Debug)]
#[command(
    name = "spacetime-observer",
    version,
    about = "Headless observer simulation around a Schwarzschild black hole"
)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, short, value_name = "FILE", env = "SPACETIME_OBSERVER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Fixed wall-clock step per tick, in seconds. Runs in real time when omitted.
    #[arg(long, value_name = "SECONDS")]
    pub dt: Option<f64>,

    /// Override the viewport size (`WIDTHxHEIGHT`).
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    pub viewport: Option<Viewport>,

    /// Force observer motion on or off.
    #[arg(long, value_name = "BOOL")]
    pub motion: Option<bool>,

    /// Override the simulation speed-up factor.
    #[arg(long, value_name = "FACTOR")]
    pub time_scale: Option<f64>,

    /// Simulated horizontal mouse drag per tick, in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = 0.0, allow_negative_numbers = true)]
    pub pan: f64,

    /// Write the uniform log here instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn load_config(&self) -> Result<SimulationConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(viewport) = self.viewport {
            config.viewport = viewport;
        }
        if let Some(motion) = self.motion {
            let observer = &mut config.parameters.observer;
            if observer.motion_enabled() != motion {
                *observer = observer.toggled(DEFAULT_INCLINATION_DEG);
            }
        }
        if let Some(time_scale) = self.time_scale {
            config.parameters.time_scale = time_scale;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            frames: self.frames,
            fixed_dt: self.dt,
            pan: self.pan,
        }
    }
}
