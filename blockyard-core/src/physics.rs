//! Minimal rigid-body stepper: gravity, explicit Euler integration and a one-sided contact
//! against the ground plane. Placed voxels are not colliders.

use crate::config::{PhysicsConfig, PlayerConfig};
use crate::coordinates::WorldPoint;
use crate::geometry::{Aabb, GroundPlane};
use crate::player::VelocityChannel;
use log::{debug, trace};

/// How far below the ground surface a body's bottom may start a step and still be caught.
const CONTACT_SLOP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Dynamic,
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDescriptor {
    pub mass: f32,
    pub kind: BodyKind,
    pub position: WorldPoint,
    /// Full side lengths of the body's box.
    pub extents: WorldPoint,
}

impl BodyDescriptor {
    pub fn player(config: &PlayerConfig) -> Self {
        Self {
            mass: config.mass,
            kind: BodyKind::Dynamic,
            position: config.spawn,
            extents: config.extents,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub descriptor: BodyDescriptor,
    pub position: WorldPoint,
    pub velocity: WorldPoint,
    pub grounded: bool,
}

impl RigidBody {
    fn new(descriptor: BodyDescriptor) -> Self {
        Self {
            descriptor,
            position: descriptor.position,
            velocity: [0.0; 3],
            grounded: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.descriptor.extents)
    }

    fn half_height(&self) -> f32 {
        self.descriptor.extents[1] * 0.5
    }
}

impl VelocityChannel for RigidBody {
    fn set_velocity(&mut self, velocity: WorldPoint) {
        if self.descriptor.kind == BodyKind::Static {
            return;
        }
        self.velocity = velocity;
    }
}

#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    gravity: f32,
    ground: Option<GroundPlane>,
    bodies: Vec<RigidBody>,
}

impl PhysicsWorld {
    pub fn new(gravity: f32, ground: Option<GroundPlane>) -> Self {
        Self {
            gravity,
            ground,
            bodies: Vec::new(),
        }
    }

    pub fn from_config(config: &PhysicsConfig, ground: GroundPlane) -> Self {
        Self::new(config.gravity, Some(ground))
    }

    pub fn add_body(&mut self, descriptor: BodyDescriptor) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len());
        self.bodies.push(RigidBody::new(descriptor));
        debug!(
            "added {:?} body {} at {:?}",
            descriptor.kind, handle.0, descriptor.position
        );
        handle
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.0)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle.0)
    }

    /// Advances every dynamic body by `dt` seconds. Non-positive or non-finite steps are
    /// ignored.
    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            trace!("skipping physics step with dt {dt}");
            return;
        }

        let gravity = self.gravity;
        let ground = self.ground;
        for body in self
            .bodies
            .iter_mut()
            .filter(|body| body.descriptor.kind == BodyKind::Dynamic)
        {
            body.velocity[1] += gravity * dt;

            let half_height = body.half_height();
            let previous_bottom = body.position[1] - half_height;
            for axis in 0..3 {
                body.position[axis] += body.velocity[axis] * dt;
            }

            body.grounded = false;
            let Some(ground) = ground else {
                continue;
            };

            let bottom = body.position[1] - half_height;
            let over_ground = ground.overlaps_footprint(
                body.position[0],
                body.position[2],
                body.descriptor.extents[0] * 0.5,
                body.descriptor.extents[2] * 0.5,
            );
            let crossed = previous_bottom >= ground.height - CONTACT_SLOP && bottom <= ground.height;
            if over_ground && crossed {
                body.position[1] = ground.height + half_height;
                if body.velocity[1] < 0.0 {
                    body.velocity[1] = 0.0;
                }
                body.grounded = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn world_with_player(spawn: WorldPoint) -> (PhysicsWorld, BodyHandle) {
        let mut physics =
            PhysicsWorld::from_config(&PhysicsConfig::default(), GroundPlane::default());
        let player = physics.add_body(BodyDescriptor::player(&PlayerConfig {
            spawn,
            ..PlayerConfig::default()
        }));
        (physics, player)
    }

    #[test]
    fn body_falls_and_rests_on_ground() {
        let (mut physics, player) = world_with_player([0.0, 2.0, 0.0]);

        for _ in 0..180 {
            physics.step(DT);
        }

        let body = physics.body(player).unwrap();
        assert!(body.grounded);
        assert!((body.position[1] - 0.5).abs() < 1e-5);
        assert_eq!(body.velocity[1], 0.0);
        assert!((body.aabb().min[1] + 0.5).abs() < 1e-5);
    }

    #[test]
    fn jump_leaves_ground_and_comes_back() {
        let (mut physics, player) = world_with_player([0.0, 0.5, 0.0]);
        physics.step(DT);
        assert!(physics.body(player).unwrap().grounded);

        physics.body_mut(player).unwrap().set_velocity([0.0, 5.0, 0.0]);
        physics.step(DT);
        let airborne = physics.body(player).unwrap();
        assert!(!airborne.grounded);
        assert!(airborne.position[1] > 0.5);

        let mut peak: f32 = 0.0;
        for _ in 0..120 {
            physics.step(DT);
            peak = peak.max(physics.body(player).unwrap().position[1]);
        }
        let landed = physics.body(player).unwrap();
        assert!(peak > 1.5);
        assert!(landed.grounded);
        assert!((landed.position[1] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn walking_off_the_edge_falls() {
        let (mut physics, player) = world_with_player([49.0, 0.5, 0.0]);
        physics.body_mut(player).unwrap().set_velocity([5.0, 0.0, 0.0]);

        for _ in 0..120 {
            physics.step(DT);
        }

        let body = physics.body(player).unwrap();
        assert!(!body.grounded);
        assert!(body.position[1] < -0.5);
    }

    #[test]
    fn body_under_the_plane_is_not_lifted() {
        let (mut physics, player) = world_with_player([0.0, -3.0, 0.0]);
        physics.body_mut(player).unwrap().set_velocity([0.0, 5.0, 0.0]);

        for _ in 0..30 {
            physics.step(DT);
            let body = physics.body(player).unwrap();
            assert!(!body.grounded);
            assert!(body.aabb().min[1] < -0.5);
        }
        assert!(physics.body(player).unwrap().position[1] > -3.0);
    }

    #[test]
    fn walking_back_under_the_footprint_stays_below() {
        let (mut physics, player) = world_with_player([55.0, -3.0, 0.0]);
        physics.body_mut(player).unwrap().set_velocity([-5.0, 0.0, 0.0]);

        for _ in 0..120 {
            physics.step(DT);
            let body = physics.body(player).unwrap();
            assert!(!body.grounded);
            assert!(body.position[1] < -3.0);
        }
        assert!(physics.body(player).unwrap().position[0] < 50.0);
    }

    #[test]
    fn horizontal_velocity_carries_over_ground() {
        let (mut physics, player) = world_with_player([0.0, 0.5, 0.0]);
        physics.body_mut(player).unwrap().set_velocity([0.0, 0.0, -5.0]);

        for _ in 0..60 {
            physics.step(DT);
        }

        let body = physics.body(player).unwrap();
        assert!((body.position[2] + 5.0).abs() < 1e-3);
        assert!(body.grounded);
    }

    #[test]
    fn invalid_steps_are_ignored() {
        let (mut physics, player) = world_with_player([0.0, 2.0, 0.0]);
        let before = physics.body(player).unwrap().clone();

        physics.step(0.0);
        physics.step(-1.0);
        physics.step(f32::NAN);

        assert_eq!(physics.body(player).unwrap(), &before);
    }

    #[test]
    fn static_bodies_do_not_move() {
        let mut physics = PhysicsWorld::new(-9.81, None);
        let crate_body = physics.add_body(BodyDescriptor {
            mass: 0.0,
            kind: BodyKind::Static,
            position: [0.0, 3.0, 0.0],
            extents: [1.0, 1.0, 1.0],
        });

        physics.body_mut(crate_body).unwrap().set_velocity([1.0, 1.0, 1.0]);
        physics.step(DT);

        let body = physics.body(crate_body).unwrap();
        assert_eq!(body.position, [0.0, 3.0, 0.0]);
        assert_eq!(body.velocity, [0.0; 3]);
    }

    #[test]
    fn no_ground_means_free_fall() {
        let mut physics = PhysicsWorld::new(-10.0, None);
        let handle = physics.add_body(BodyDescriptor::player(&PlayerConfig::default()));

        physics.step(0.5);

        let body = physics.body(handle).unwrap();
        assert_eq!(body.velocity[1], -5.0);
        assert_eq!(body.position[1], -0.5);
    }
}
