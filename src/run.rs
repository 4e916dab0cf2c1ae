use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::clock::FrameClock;
use crate::config::SimulationConfig;
use crate::error::ReadinessError;
use crate::readiness::ReadinessGate;
use crate::renderer::RenderStage;
use crate::scheduler::FrameScheduler;

/// Pace of the real-time loop (~60 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub frames: u64,
    /// Fixed step per tick; `None` measures wall-clock time instead.
    pub fixed_dt: Option<f64>,
    /// Simulated horizontal pointer drag per tick, in pixels.
    pub pan: f64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            fixed_dt: None,
            pan: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub renders: u64,
    pub proper_time: f64,
}

/// Builds the start-up barrier: one prerequisite per configured asset,
/// released for every file that exists.
pub fn check_assets(assets: &BTreeMap<String, PathBuf>) -> Result<ReadinessGate, ReadinessError> {
    let mut gate = ReadinessGate::new(assets.keys().cloned());
    for (name, path) in assets {
        if path.is_file() {
            log::debug!("asset '{name}' ready at {}", path.display());
            gate.mark_ready(name)?;
        } else {
            log::warn!("asset '{name}' not found at {}", path.display());
        }
    }
    Ok(gate)
}

/// Drives the scheduler for `options.frames` ticks against `stage`.
pub fn run<R: RenderStage + ?Sized>(
    config: &SimulationConfig,
    options: &RunOptions,
    stage: &mut R,
) -> anyhow::Result<RunSummary> {
    let gate = check_assets(&config.assets)?;
    gate.require_open()?;
    log::info!("{} assets ready, starting tick loop", config.assets.len());

    let params = config.parameters;
    log::info!(
        "observer {} at r = {}, quality {}, viewport {}",
        if params.observer.motion_enabled() {
            "orbiting"
        } else {
            "static"
        },
        params.observer.distance(),
        params.quality.name(),
        config.viewport,
    );

    let mut scheduler = FrameScheduler::new(params, config.viewport.size())?;
    log::debug!("shader defines: {:?}", scheduler.features().defines());
    let mut controls = config.controls();
    let mut clock = FrameClock::default();
    let mut summary = RunSummary::default();

    for _ in 0..options.frames {
        let dt = match options.fixed_dt {
            Some(dt) => dt,
            None => {
                std::thread::sleep(FRAME_INTERVAL);
                clock.tick()
            }
        };
        if options.pan != 0.0 {
            controls.drag(options.pan, 0.0);
        }

        let decision = scheduler.tick(
            dt,
            &controls.view_transform(),
            config.viewport.size(),
            stage,
        )?;
        log::debug!("tick {}: {decision:?}", summary.ticks);

        summary.ticks += 1;
        if decision.rendered() {
            summary.renders += 1;
        }
    }

    summary.proper_time = scheduler.observer().proper_time;
    log::info!(
        "finished {} ticks, {} renders, proper time {:.3}",
        summary.ticks,
        summary.renders,
        summary.proper_time
    );
    Ok(summary)
}
