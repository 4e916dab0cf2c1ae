//! Observer state for a camera near a Schwarzschild black hole.
//!
//! The crate advances an observer through proper time, keeps it consistent
//! with an orbit-style camera controller, and decides each tick whether the
//! renderer needs a new set of uniforms.

pub mod clock;
pub mod config;
pub mod controls;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod params;
pub mod readiness;
pub mod reconcile;
pub mod renderer;
pub mod run;
pub mod scheduler;

pub use config::SimulationConfig;
pub use controls::{OrbitControls, ViewTransform};
pub use error::{ConfigError, ParameterError, ReadinessError, TickError};
pub use observer::Observer;
pub use params::{MotionParameters, ObserverMode, Parameters, PlanetParameters, Quality};
pub use renderer::uniforms::UniformSet;
pub use renderer::RenderStage;
pub use scheduler::{FrameScheduler, RenderDecision, RenderReason};
