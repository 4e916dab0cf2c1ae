use bytemuck::{Pod, Zeroable};
use glam::{DVec2, DVec3};
use serde::Serialize;

use crate::observer::Observer;
use crate::params::PlanetParameters;

/// Everything the render stage needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UniformSet {
    /// Observer proper time.
    pub time: f64,
    /// Viewport size in pixels.
    pub resolution: DVec2,
    pub cam_pos: DVec3,
    pub cam_vel: DVec3,
    pub cam_x: DVec3,
    pub cam_y: DVec3,
    pub cam_z: DVec3,
    pub planet_distance: f64,
    pub planet_radius: f64,
}

impl UniformSet {
    pub fn new(observer: &Observer, planet: &PlanetParameters, viewport: (u32, u32)) -> Self {
        let orientation = observer.orientation;
        Self {
            time: observer.proper_time,
            resolution: DVec2::new(viewport.0 as f64, viewport.1 as f64),
            cam_pos: observer.position,
            cam_vel: observer.velocity,
            cam_x: orientation.x_axis,
            cam_y: orientation.y_axis,
            cam_z: orientation.z_axis,
            planet_distance: planet.distance,
            planet_radius: planet.radius,
        }
    }

    pub fn to_gpu(&self) -> GpuUniforms {
        let vec4 = |v: DVec3| [v.x as f32, v.y as f32, v.z as f32, 0.0];
        GpuUniforms {
            cam_pos: vec4(self.cam_pos),
            cam_vel: vec4(self.cam_vel),
            cam_x: vec4(self.cam_x),
            cam_y: vec4(self.cam_y),
            cam_z: vec4(self.cam_z),
            resolution: [self.resolution.x as f32, self.resolution.y as f32],
            time: self.time as f32,
            planet_distance: self.planet_distance as f32,
            planet_radius: self.planet_radius as f32,
            _padding: [0.0; 3],
        }
    }
}

/// Uniform buffer layout (vec3s padded to 16 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuUniforms {
    pub cam_pos: [f32; 4],
    pub cam_vel: [f32; 4],
    pub cam_x: [f32; 4],
    pub cam_y: [f32; 4],
    pub cam_z: [f32; 4],
    pub resolution: [f32; 2],
    pub time: f32,
    pub planet_distance: f32,
    pub planet_radius: f32,
    pub _padding: [f32; 3],
}

impl GpuUniforms {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
