use glam::{DMat3, DVec3};

use crate::error::ParameterError;
use crate::metrics::schwarzschild::{
    circular_orbit_angular_velocity, circular_orbit_speed, dilated_interval, HORIZON_RADIUS,
};
use crate::params::{MotionParameters, ObserverMode};

/// How far ahead along the velocity the orbital frame looks.
const LOOK_AHEAD: f64 = 4.0;

/// The moving reference frame the scene is rendered from.
///
/// Positions are in the black hole's rest frame, in units of the
/// Schwarzschild radius; velocities are coordinate velocities with c = 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    pub position: DVec3,
    pub velocity: DVec3,
    /// Columns are the camera's right, forward and up axes.
    pub orientation: DMat3,
    /// Time experienced by the observer.
    pub proper_time: f64,
    /// Proper time the orbital phase was last read at.
    pub orbit_epoch: f64,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            position: DVec3::new(10.0, 0.0, 0.0),
            velocity: DVec3::new(0.0, 1.0, 0.0),
            orientation: DMat3::IDENTITY,
            proper_time: 0.0,
            orbit_epoch: 0.0,
        }
    }
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the observer by `dt` seconds of wall-clock time.
    ///
    /// Everything is checked before any field is touched, so an error leaves
    /// the observer exactly as it was. A zero step still places an orbiting
    /// observer on the configured orbit, at the phase it was last placed at.
    pub fn advance(&mut self, dt: f64, params: &MotionParameters) -> Result<(), ParameterError> {
        check_time_step(dt)?;
        params.validate()?;

        let dt = dt * params.time_scale;
        let paused = dt == 0.0;

        let (r, v) = match params.mode {
            ObserverMode::Orbiting {
                radius,
                inclination_deg,
            } => {
                if !paused {
                    self.orbit_epoch = self.proper_time;
                }
                let v = circular_orbit_speed(radius);
                // The orbit is a function of elapsed proper time, so it does
                // not depend on the frame rate.
                let angle = self.orbit_epoch * circular_orbit_angular_velocity(radius);
                let (s, c) = angle.sin_cos();
                let tilt = DMat3::from_rotation_y(inclination_deg.to_radians());

                self.position = tilt * DVec3::new(c * radius, s * radius, 0.0);
                self.velocity = tilt * DVec3::new(-s * v, c * v, 0.0);
                (radius, v)
            }
            ObserverMode::Static { .. } => {
                let r = self.position.length();
                if r <= HORIZON_RADIUS {
                    return Err(ParameterError::InsideHorizon(r));
                }
                (r, 0.0)
            }
        };
        if paused {
            return Ok(());
        }

        let dtau = if params.gravitational_time_dilation {
            dilated_interval(dt, v, r)
        } else {
            dt
        };
        self.proper_time += dtau;
        if !params.motion_enabled() {
            self.orbit_epoch = self.proper_time;
        }
        Ok(())
    }

    /// Local triad of a circularly orbiting observer.
    ///
    /// Columns are `(up, forward, side)`: forward points from the observer
    /// towards a point a few radii along the velocity, side is normal to the
    /// plane of position and forward.
    pub fn orbital_frame(&self) -> Result<DMat3, ParameterError> {
        let heading = self
            .velocity
            .try_normalize()
            .ok_or(ParameterError::ZeroLengthVector("velocity"))?;
        let forward = (heading * LOOK_AHEAD - self.position)
            .try_normalize()
            .ok_or(ParameterError::ZeroLengthVector("forward"))?;
        let side = self
            .position
            .cross(forward)
            .try_normalize()
            .ok_or(ParameterError::ZeroLengthVector("side"))?;
        let up = forward.cross(side);
        Ok(DMat3::from_cols(up, forward, side))
    }
}

/// Wall-clock steps must be finite and non-negative.
pub fn check_time_step(dt: f64) -> Result<(), ParameterError> {
    if !dt.is_finite() {
        return Err(ParameterError::NonFinite("time step"));
    }
    if dt < 0.0 {
        return Err(ParameterError::NegativeTimeStep(dt));
    }
    Ok(())
}

/// Unit columns, mutually perpendicular, positive determinant.
pub fn is_right_handed_orthonormal(m: &DMat3, tolerance: f64) -> bool {
    let (x, y, z) = (m.x_axis, m.y_axis, m.z_axis);
    let unit = [x, y, z]
        .iter()
        .all(|axis| (axis.length() - 1.0).abs() < tolerance);
    let perpendicular =
        x.dot(y).abs() < tolerance && y.dot(z).abs() < tolerance && z.dot(x).abs() < tolerance;
    unit && perpendicular && (m.determinant() - 1.0).abs() < tolerance
}
