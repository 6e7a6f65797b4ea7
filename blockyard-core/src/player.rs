//! Level-triggered movement: every key-down replaces the body's velocity with a fixed
//! vector, and every key-up (whichever key) stops the body dead.
//!
//! Holding two movement keys does not combine them; the latest key-down wins, and
//! releasing either key halts all motion.

use crate::config::PlayerConfig;
use crate::coordinates::WorldPoint;
use log::trace;

/// Write side of a simulated body's velocity.
pub trait VelocityChannel {
    fn set_velocity(&mut self, velocity: WorldPoint);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
}

impl MoveKey {
    /// Maps a keyboard code string (`KeyboardEvent.code` naming) to a movement key.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(MoveKey::Forward),
            "KeyS" => Some(MoveKey::Backward),
            "KeyA" => Some(MoveKey::Left),
            "KeyD" => Some(MoveKey::Right),
            "Space" => Some(MoveKey::Jump),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            MoveKey::Forward => "KeyW",
            MoveKey::Backward => "KeyS",
            MoveKey::Left => "KeyA",
            MoveKey::Right => "KeyD",
            MoveKey::Jump => "Space",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovementIntent {
    Press(String),
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerController {
    move_speed: f32,
    jump_speed: f32,
}

impl PlayerController {
    pub fn new(move_speed: f32, jump_speed: f32) -> Self {
        Self {
            move_speed,
            jump_speed,
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(config.move_speed, config.jump_speed)
    }

    /// Forward is -Z, right is +X, jump is +Y.
    pub fn velocity_for(&self, key: MoveKey) -> WorldPoint {
        let speed = self.move_speed;
        match key {
            MoveKey::Forward => [0.0, 0.0, -speed],
            MoveKey::Backward => [0.0, 0.0, speed],
            MoveKey::Left => [-speed, 0.0, 0.0],
            MoveKey::Right => [speed, 0.0, 0.0],
            MoveKey::Jump => [0.0, self.jump_speed, 0.0],
        }
    }

    /// Returns `false` and leaves the body untouched for codes that are not movement keys.
    pub fn key_down<B>(&self, code: &str, body: &mut B) -> bool
    where
        B: VelocityChannel + ?Sized,
    {
        let Some(key) = MoveKey::from_code(code) else {
            trace!("ignoring key {code}");
            return false;
        };
        body.set_velocity(self.velocity_for(key));
        true
    }

    pub fn key_up<B>(&self, body: &mut B)
    where
        B: VelocityChannel + ?Sized,
    {
        body.set_velocity([0.0, 0.0, 0.0]);
    }

    /// Returns whether the body's velocity was written.
    pub fn apply<B>(&self, intent: &MovementIntent, body: &mut B) -> bool
    where
        B: VelocityChannel + ?Sized,
    {
        match intent {
            MovementIntent::Press(code) => self.key_down(code, body),
            MovementIntent::Release => {
                self.key_up(body);
                true
            }
        }
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingBody {
        velocity: WorldPoint,
        writes: usize,
    }

    impl VelocityChannel for RecordingBody {
        fn set_velocity(&mut self, velocity: WorldPoint) {
            self.velocity = velocity;
            self.writes += 1;
        }
    }

    #[test]
    fn forward_then_any_release_stops() {
        let controller = PlayerController::default();
        let mut body = RecordingBody::default();

        assert!(controller.key_down("KeyW", &mut body));
        assert_eq!(body.velocity, [0.0, 0.0, -5.0]);

        // Releasing an unrelated key still halts all motion.
        controller.apply(&MovementIntent::Release, &mut body);
        assert_eq!(body.velocity, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn each_key_sets_its_own_vector() {
        let controller = PlayerController::default();
        let mut body = RecordingBody::default();

        let expected = [
            ("KeyS", [0.0, 0.0, 5.0]),
            ("KeyA", [-5.0, 0.0, 0.0]),
            ("KeyD", [5.0, 0.0, 0.0]),
            ("Space", [0.0, 5.0, 0.0]),
        ];
        for (code, velocity) in expected {
            controller.key_down(code, &mut body);
            assert_eq!(body.velocity, velocity, "code {code}");
        }
    }

    #[test]
    fn last_key_down_wins_without_blending() {
        let controller = PlayerController::default();
        let mut body = RecordingBody::default();

        controller.key_down("KeyW", &mut body);
        controller.key_down("KeyD", &mut body);
        assert_eq!(body.velocity, [5.0, 0.0, 0.0]);
    }

    #[test]
    fn unknown_codes_are_ignored() {
        let controller = PlayerController::default();
        let mut body = RecordingBody::default();
        controller.key_down("KeyW", &mut body);

        assert!(!controller.key_down("KeyQ", &mut body));
        assert!(!controller.apply(&MovementIntent::Press("Unidentified".into()), &mut body));
        assert_eq!(body.velocity, [0.0, 0.0, -5.0]);
        assert_eq!(body.writes, 1);
    }

    #[test]
    fn configured_speeds_scale_vectors() {
        let controller = PlayerController::new(2.0, 7.5);
        assert_eq!(controller.velocity_for(MoveKey::Left), [-2.0, 0.0, 0.0]);
        assert_eq!(controller.velocity_for(MoveKey::Jump), [0.0, 7.5, 0.0]);
    }

    #[test]
    fn codes_map_both_ways() {
        for key in [
            MoveKey::Forward,
            MoveKey::Backward,
            MoveKey::Left,
            MoveKey::Right,
            MoveKey::Jump,
        ] {
            assert_eq!(MoveKey::from_code(key.code()), Some(key));
        }
    }
}
