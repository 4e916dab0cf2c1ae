use std::f64::consts::{FRAC_PI_2, PI};

use glam::{DMat3, DMat4, DVec3};

use crate::error::ParameterError;

const DRAG_SENSITIVITY: f64 = 0.005;
const ELEVATION_MARGIN: f64 = 0.1;
const ZOOM_STEP: f64 = 0.5;
const MIN_DISTANCE: f64 = 1.5;
const MAX_DISTANCE: f64 = 100.0;
const INITIAL_PITCH_DEG: f64 = 3.0;

/// World-to-camera transform owned by the input controller.
///
/// Camera space follows the usual right-handed convention: +X right, +Y up,
/// looking down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    world_to_camera: DMat4,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            world_to_camera: DMat4::IDENTITY,
        }
    }
}

impl ViewTransform {
    pub fn from_world_to_camera(world_to_camera: DMat4) -> Self {
        Self { world_to_camera }
    }

    pub fn look_at(eye: DVec3, target: DVec3, up: DVec3) -> Self {
        Self::from_world_to_camera(DMat4::look_at_rh(eye, target, up))
    }

    pub fn world_to_camera(&self) -> &DMat4 {
        &self.world_to_camera
    }

    /// Direction the camera looks along, in world space.
    pub fn forward(&self) -> DVec3 {
        -self.camera_to_world_rotation().z_axis
    }

    fn camera_to_world_rotation(&self) -> DMat3 {
        DMat3::from_mat4(self.world_to_camera).transpose()
    }

    /// Camera orientation as a right-handed basis with columns
    /// `(right, forward, up)`, re-orthonormalized.
    pub fn look_basis(&self) -> Result<DMat3, ParameterError> {
        let forward = self
            .forward()
            .try_normalize()
            .ok_or(ParameterError::ZeroLengthVector("camera forward"))?;
        let up = self.camera_to_world_rotation().y_axis;
        let up = (up - forward * up.dot(forward))
            .try_normalize()
            .ok_or(ParameterError::ZeroLengthVector("camera up"))?;
        let right = forward.cross(up);
        Ok(DMat3::from_cols(right, forward, up))
    }
}

/// Orbit-style pointer controller: the camera sits on a sphere around the
/// origin and always looks at it. Z is up.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Distance from the origin.
    pub distance: f64,
    /// Angle around the Z axis, from +X.
    pub azimuth: f64,
    /// Polar angle from +Z.
    pub elevation: f64,
}

impl Default for OrbitControls {
    /// Looks along +Y, pitched slightly down.
    fn default() -> Self {
        Self::new(MIN_DISTANCE, -FRAC_PI_2, FRAC_PI_2 - INITIAL_PITCH_DEG.to_radians())
    }
}

impl OrbitControls {
    pub fn new(distance: f64, azimuth: f64, elevation: f64) -> Self {
        Self {
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            azimuth,
            elevation: elevation.clamp(ELEVATION_MARGIN, PI - ELEVATION_MARGIN),
        }
    }

    pub fn position(&self) -> DVec3 {
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.distance * DVec3::new(sin_el * cos_az, sin_el * sin_az, cos_el)
    }

    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform::look_at(self.position(), DVec3::ZERO, DVec3::Z)
    }

    /// Pointer drag by `(dx, dy)` pixels.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.azimuth -= dx * DRAG_SENSITIVITY;
        self.elevation = (self.elevation - dy * DRAG_SENSITIVITY)
            .clamp(ELEVATION_MARGIN, PI - ELEVATION_MARGIN);
    }

    /// Scroll wheel, in lines.
    pub fn zoom(&mut self, lines: f64) {
        self.distance = (self.distance - lines * ZOOM_STEP).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}
