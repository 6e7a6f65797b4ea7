use crate::coordinates::{WorldPoint, is_finite_point};
use crate::geometry::GroundPlane;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Session settings. Every section falls back to its defaults when omitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Seed for block colors; random when absent.
    pub seed: Option<u64>,
    pub player: PlayerConfig,
    pub physics: PhysicsConfig,
    pub ground: GroundPlane,
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub move_speed: f32,
    pub jump_speed: f32,
    pub spawn: WorldPoint,
    pub extents: WorldPoint,
    pub mass: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_speed: 5.0,
            spawn: [0.0, 2.0, 0.0],
            extents: [1.0, 2.0, 1.0],
            mass: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub tick_rate_hz: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -9.81,
            tick_rate_hz: 60.0,
        }
    }
}

impl PhysicsConfig {
    pub fn fixed_step_seconds(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: WorldPoint,
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub fov_degrees: f32,
    pub look_sensitivity: f32,
    /// Maximum click distance.
    pub reach: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, 12.0],
            yaw_degrees: -90.0,
            pitch_degrees: -20.0,
            fov_degrees: 75.0,
            look_sensitivity: 1.5,
            reach: 100.0,
        }
    }
}

impl SandboxConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let player = &self.player;
        require(
            player.move_speed.is_finite() && player.move_speed >= 0.0,
            "player.move_speed must be a non-negative number",
        )?;
        require(
            player.jump_speed.is_finite() && player.jump_speed >= 0.0,
            "player.jump_speed must be a non-negative number",
        )?;
        require(
            player.mass.is_finite() && player.mass > 0.0,
            "player.mass must be positive",
        )?;
        require(is_finite_point(player.spawn), "player.spawn must be finite")?;
        require(
            player.extents.iter().all(|e| e.is_finite() && *e > 0.0),
            "player.extents must be positive",
        )?;
        require(self.physics.gravity.is_finite(), "physics.gravity must be finite")?;
        require(
            self.physics.tick_rate_hz.is_finite() && self.physics.tick_rate_hz > 0.0,
            "physics.tick_rate_hz must be positive",
        )?;
        require(
            self.ground.height.is_finite()
                && self.ground.size.is_finite()
                && self.ground.size > 0.0,
            "ground.size must be positive and ground.height finite",
        )?;
        require(is_finite_point(self.camera.position), "camera.position must be finite")?;
        require(
            self.camera.yaw_degrees.is_finite() && self.camera.pitch_degrees.is_finite(),
            "camera.yaw_degrees and camera.pitch_degrees must be finite",
        )?;
        require(
            self.camera.look_sensitivity.is_finite(),
            "camera.look_sensitivity must be finite",
        )?;
        require(
            self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0,
            "camera.fov_degrees must be between 0 and 180",
        )?;
        require(
            self.camera.reach.is_finite() && self.camera.reach > 0.0,
            "camera.reach must be positive",
        )
    }
}

fn require(condition: bool, message: &str) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Invalid(message.to_owned()))
    }
}
