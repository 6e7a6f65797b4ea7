use crate::config::SandboxConfig;
use crate::coordinates::{CellCoord, WorldPoint};
use crate::geometry::{GroundPlane, Ray};
use crate::hit::resolve;
use crate::input::{InputEvent, InputHub, Intent, Subscription, route};
use crate::physics::{BodyDescriptor, BodyHandle, PhysicsWorld, RigidBody};
use crate::pick::{PickHit, pick};
use crate::player::PlayerController;
use crate::voxel::{VoxelColor, VoxelId};
use crate::world::{EditOutcome, VoxelWorld};
use log::{debug, info};

/// What handling one input event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Whether the player's velocity was written.
    Movement(bool),
    Edit(EditOutcome),
    Hover(Option<VoxelId>),
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelInstance {
    pub id: VoxelId,
    pub cell: CellCoord,
    pub color: VoxelColor,
    pub hovered: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub voxels: Vec<VoxelInstance>,
    pub player_position: WorldPoint,
    pub player_extents: WorldPoint,
    /// World revision the voxel list was taken from.
    pub revision: u64,
    pub tick: u64,
}

/// One running sandbox session: the voxel world, the player's body and the input
/// subscription feeding them. Dropping it detaches from the input hub.
#[derive(Debug)]
pub struct Sandbox {
    world: VoxelWorld,
    physics: PhysicsWorld,
    controller: PlayerController,
    player: BodyHandle,
    ground: GroundPlane,
    input: Subscription,
    tick: u64,
}

impl Sandbox {
    pub fn start(config: &SandboxConfig, hub: &InputHub) -> Self {
        let world = match config.seed {
            Some(seed) => VoxelWorld::with_seed(seed),
            None => VoxelWorld::new(),
        };
        let mut physics = PhysicsWorld::from_config(&config.physics, config.ground);
        let player = physics.add_body(BodyDescriptor::player(&config.player));

        info!(
            "sandbox started: spawn {:?}, ground {}x{} at y={}, seed {:?}",
            config.player.spawn,
            config.ground.size,
            config.ground.size,
            config.ground.height,
            config.seed
        );

        Self {
            world,
            physics,
            controller: PlayerController::from_config(&config.player),
            player,
            ground: config.ground,
            input: hub.subscribe(),
            tick: 0,
        }
    }

    /// Handles every queued input event in arrival order and returns how many there were.
    pub fn pump_input(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.input.poll() {
            self.handle_event(&event);
            handled += 1;
        }
        handled
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Handled {
        match route(event) {
            Intent::Move(intent) => {
                let Some(body) = self.physics.body_mut(self.player) else {
                    return Handled::Movement(false);
                };
                Handled::Movement(self.controller.apply(&intent, body))
            }
            Intent::Edit(edit) => {
                let outcome = self.world.apply(resolve(&edit));
                debug!("edit {edit:?} -> {outcome:?}");
                Handled::Edit(outcome)
            }
            Intent::Hover(id) => {
                self.world.set_hovered(id);
                Handled::Hover(self.world.hovered())
            }
            Intent::Ignored => Handled::Ignored,
        }
    }

    pub fn step(&mut self, dt: f32) {
        self.physics.step(dt);
        self.tick += 1;
    }

    pub fn frame(&self) -> RenderFrame {
        let hovered = self.world.hovered();
        let voxels = self
            .world
            .list()
            .iter()
            .map(|voxel| VoxelInstance {
                id: voxel.id,
                cell: voxel.cell,
                color: voxel.color,
                hovered: hovered == Some(voxel.id),
            })
            .collect();

        let (player_position, player_extents) = self
            .player_body()
            .map(|body| (body.position, body.descriptor.extents))
            .unwrap_or_default();

        RenderFrame {
            voxels,
            player_position,
            player_extents,
            revision: self.world.revision(),
            tick: self.tick,
        }
    }

    /// Nearest voxel or ground hit along `ray` within `max_distance`.
    pub fn pick(&self, ray: &Ray, max_distance: f32) -> Option<PickHit> {
        pick(ray, self.world.list(), &self.ground, max_distance)
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn player_body(&self) -> Option<&RigidBody> {
        self.physics.body(self.player)
    }

    pub fn ground(&self) -> &GroundPlane {
        &self.ground
    }
}
