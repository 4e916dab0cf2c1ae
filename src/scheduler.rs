use glam::DMat4;

use crate::controls::ViewTransform;
use crate::error::{ParameterError, TickError};
use crate::observer::{check_time_step, Observer};
use crate::params::Parameters;
use crate::reconcile::reconcile;
use crate::renderer::shader::ShaderFeatures;
use crate::renderer::uniforms::UniformSet;
use crate::renderer::RenderStage;

/// Camera transforms closer than this (Frobenius norm) count as unchanged.
pub const CAMERA_EPSILON: f64 = 1e-10;

/// Square root of the summed squared element-wise differences.
pub fn frobenius_distance(a: &DMat4, b: &DMat4) -> f64 {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderReason {
    ConfigurationChanged,
    MovingParts,
    CameraMoved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDecision {
    Skipped,
    Rendered(RenderReason),
}

impl RenderDecision {
    pub fn rendered(self) -> bool {
        matches!(self, RenderDecision::Rendered(_))
    }
}

/// Owns the observer and decides, once per tick, whether the render stage
/// has to run.
pub struct FrameScheduler {
    observer: Observer,
    params: Parameters,
    features: ShaderFeatures,
    uniforms: UniformSet,
    viewport: (u32, u32),
    last_rendered: DMat4,
    config_changed: bool,
    needs_compile: bool,
}

impl FrameScheduler {
    pub fn new(params: Parameters, viewport: (u32, u32)) -> Result<Self, ParameterError> {
        params.validate()?;
        let observer = Observer::new();
        let uniforms = UniformSet::new(&observer, &params.planet, viewport);
        Ok(Self {
            observer,
            features: ShaderFeatures::from_parameters(&params),
            params,
            uniforms,
            viewport,
            last_rendered: DMat4::IDENTITY,
            config_changed: true,
            needs_compile: true,
        })
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn features(&self) -> &ShaderFeatures {
        &self.features
    }

    /// Uniforms computed by the most recent tick.
    pub fn uniforms(&self) -> &UniformSet {
        &self.uniforms
    }

    pub fn has_moving_parts(&self) -> bool {
        self.params.has_moving_parts()
    }

    /// Applies an edit from the configuration surface. Invalid edits are
    /// refused and the previous parameters stay in effect.
    pub fn set_parameters(&mut self, params: Parameters) -> Result<(), ParameterError> {
        if let Err(err) = params.validate() {
            log::warn!("rejected parameter change: {err}");
            return Err(err);
        }
        if params == self.params {
            return Ok(());
        }
        let features = ShaderFeatures::from_parameters(&params);
        if features != self.features {
            log::debug!("shader features changed, recompiling before next frame");
            self.features = features;
            self.needs_compile = true;
        }
        self.params = params;
        self.config_changed = true;
        Ok(())
    }

    /// Forces the next tick to render.
    pub fn mark_dirty(&mut self) {
        self.config_changed = true;
    }

    pub fn tick<R: RenderStage + ?Sized>(
        &mut self,
        dt: f64,
        view: &ViewTransform,
        viewport: (u32, u32),
        stage: &mut R,
    ) -> Result<RenderDecision, TickError> {
        check_time_step(dt)?;

        let camera = *view.world_to_camera();
        let mode = self.params.observer;
        if !mode.motion_enabled() {
            reconcile(&mut self.observer, view, &mode);
        }

        self.observer.advance(dt, &self.params.motion())?;

        if mode.motion_enabled() {
            reconcile(&mut self.observer, view, &mode);
        }

        if viewport != self.viewport {
            self.viewport = viewport;
            self.config_changed = true;
        }
        self.uniforms = UniformSet::new(&self.observer, &self.params.planet, self.viewport);

        let reason = if self.config_changed {
            RenderReason::ConfigurationChanged
        } else if self.has_moving_parts() {
            RenderReason::MovingParts
        } else if frobenius_distance(&camera, &self.last_rendered) > CAMERA_EPSILON {
            RenderReason::CameraMoved
        } else {
            return Ok(RenderDecision::Skipped);
        };

        if self.needs_compile {
            stage
                .compile(&self.features)
                .map_err(TickError::ShaderCompile)?;
            self.needs_compile = false;
        }
        stage
            .render(&self.uniforms)
            .map_err(TickError::RenderDispatch)?;

        self.last_rendered = camera;
        self.config_changed = false;
        log::trace!("rendered frame: {reason:?}");
        Ok(RenderDecision::Rendered(reason))
    }
}
