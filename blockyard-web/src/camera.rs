use blockyard_core::{CameraConfig, Ray};
use macroquad::prelude::*;

const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Free-look camera at a fixed position; the mouse only turns it.
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    pub position: Vec3,
    /// Radians, measured from +X towards +Z.
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub look_sensitivity: f32,
}

impl FirstPersonCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.position),
            yaw: config.yaw_degrees.to_radians(),
            pitch: config.pitch_degrees.to_radians().clamp(-MAX_PITCH, MAX_PITCH),
            fov: config.fov_degrees.to_radians(),
            look_sensitivity: config.look_sensitivity,
        }
    }

    /// `delta` is the pointer motion since the last frame, positive x to the right and
    /// positive y downwards.
    pub fn look(&mut self, delta: Vec2) {
        self.yaw += delta.x * self.look_sensitivity;
        self.pitch -= delta.y * self.look_sensitivity;
        self.pitch = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn forward(&self) -> Vec3 {
        vec3(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize_or_zero()
    }

    /// Ray through the crosshair at the screen center.
    pub fn center_ray(&self) -> Ray {
        Ray::new(self.position.to_array(), self.forward().to_array())
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position,
            target: self.position + self.forward(),
            up: Vec3::Y,
            fovy: self.fov,
            ..Default::default()
        }
    }
}
