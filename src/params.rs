use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::metrics::schwarzschild::{HORIZON_RADIUS, PHOTON_SPHERE_RADIUS};

/// Inclination used when an orbit is started without one.
pub const DEFAULT_INCLINATION_DEG: f64 = -10.0;
pub const PLANET_MIN_DISTANCE: f64 = 1.5;
pub const PLANET_RADIUS_RANGE: (f64, f64) = (0.01, 2.0);

/// Ray-marching quality preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
}

impl Quality {
    pub fn name(self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }

    /// Number of integration steps per ray.
    pub fn ray_steps(self) -> u32 {
        match self {
            Quality::Low => 40,
            Quality::Medium => 100,
            Quality::High => 200,
        }
    }
}

/// How the observer moves. Each variant carries only the fields it owns.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ObserverMode {
    /// Hovers at `distance`; the direction comes from the user's camera.
    Static { distance: f64 },
    /// Circular orbit of `radius`, tilted by `inclination_deg` about the Y axis.
    Orbiting { radius: f64, inclination_deg: f64 },
}

impl ObserverMode {
    pub fn motion_enabled(&self) -> bool {
        matches!(self, ObserverMode::Orbiting { .. })
    }

    /// Distance to the body, whichever mode is active.
    pub fn distance(&self) -> f64 {
        match *self {
            ObserverMode::Static { distance } => distance,
            ObserverMode::Orbiting { radius, .. } => radius,
        }
    }

    /// Same distance, other mode.
    pub fn toggled(&self, inclination_deg: f64) -> Self {
        match *self {
            ObserverMode::Static { distance } => ObserverMode::Orbiting {
                radius: distance,
                inclination_deg,
            },
            ObserverMode::Orbiting { radius, .. } => ObserverMode::Static { distance: radius },
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            ObserverMode::Static { distance } => {
                check_finite("observer distance", distance)?;
                if distance <= HORIZON_RADIUS {
                    return Err(ParameterError::InsideHorizon(distance));
                }
            }
            ObserverMode::Orbiting {
                radius,
                inclination_deg,
            } => {
                check_finite("orbital radius", radius)?;
                check_finite("orbital inclination", inclination_deg)?;
                if radius <= HORIZON_RADIUS {
                    return Err(ParameterError::InsideHorizon(radius));
                }
                if radius <= PHOTON_SPHERE_RADIUS {
                    return Err(ParameterError::InsidePhotonSphere(radius));
                }
            }
        }
        Ok(())
    }
}

impl Default for ObserverMode {
    fn default() -> Self {
        ObserverMode::Orbiting {
            radius: 11.0,
            inclination_deg: DEFAULT_INCLINATION_DEG,
        }
    }
}

/// Per-tick snapshot consumed by the observer integrator and the camera reconciler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParameters {
    pub mode: ObserverMode,
    pub time_scale: f64,
    pub gravitational_time_dilation: bool,
}

impl MotionParameters {
    pub fn motion_enabled(&self) -> bool {
        self.mode.motion_enabled()
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        check_finite("time scale", self.time_scale)?;
        if self.time_scale < 0.0 {
            return Err(ParameterError::NegativeTimeScale(self.time_scale));
        }
        self.mode.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlanetParameters {
    pub enabled: bool,
    pub distance: f64,
    pub radius: f64,
}

impl Default for PlanetParameters {
    fn default() -> Self {
        Self {
            enabled: true,
            distance: 7.0,
            radius: 0.4,
        }
    }
}

impl PlanetParameters {
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_finite("planet distance", self.distance)?;
        check_finite("planet radius", self.radius)?;
        if self.distance < PLANET_MIN_DISTANCE {
            return Err(ParameterError::OutOfRange {
                name: "planet distance",
                value: self.distance,
                min: PLANET_MIN_DISTANCE,
                max: f64::INFINITY,
            });
        }
        let (min, max) = PLANET_RADIUS_RANGE;
        if !(min..=max).contains(&self.radius) {
            return Err(ParameterError::OutOfRange {
                name: "planet radius",
                value: self.radius,
                min,
                max,
            });
        }
        Ok(())
    }
}

/// Everything the configuration surface can edit.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Parameters {
    pub quality: Quality,
    pub accretion_disk: bool,
    pub planet: PlanetParameters,
    pub lorentz_contraction: bool,
    pub gravitational_time_dilation: bool,
    pub aberration: bool,
    pub beaming: bool,
    pub doppler_shift: bool,
    pub light_travel_time: bool,
    pub time_scale: f64,
    pub observer: ObserverMode,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            accretion_disk: true,
            planet: PlanetParameters::default(),
            lorentz_contraction: true,
            gravitational_time_dilation: true,
            aberration: true,
            beaming: true,
            doppler_shift: true,
            light_travel_time: true,
            time_scale: 1.0,
            observer: ObserverMode::default(),
        }
    }
}

impl Parameters {
    pub fn motion(&self) -> MotionParameters {
        MotionParameters {
            mode: self.observer,
            time_scale: self.time_scale,
            gravitational_time_dilation: self.gravitational_time_dilation,
        }
    }

    /// The planet is skipped entirely at low quality.
    pub fn planet_visible(&self) -> bool {
        self.planet.enabled && self.quality != Quality::Low
    }

    /// True when something in the scene moves on its own, so every tick must render.
    pub fn has_moving_parts(&self) -> bool {
        self.observer.motion_enabled() || self.planet.enabled
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        self.motion().validate()?;
        self.planet.validate()
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite(name))
    }
}
