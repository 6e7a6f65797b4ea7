pub mod config;
pub mod coordinates;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod physics;
pub mod pick;
pub mod player;
pub mod session;
pub mod voxel;
pub mod world;

pub use config::{CameraConfig, ConfigError, PhysicsConfig, PlayerConfig, SandboxConfig};
pub use coordinates::{CellCoord, WorldPoint};
pub use geometry::{Aabb, Face, GroundPlane, Ray};
pub use hit::{EditAction, EditEvent, resolve};
pub use input::{ClickEvent, InputEvent, InputHub, Intent, Subscription, route};
pub use physics::{BodyDescriptor, BodyHandle, BodyKind, PhysicsWorld, RigidBody};
pub use pick::{DEFAULT_PICK_DISTANCE, PickHit, PickTarget, pick};
pub use player::{MoveKey, MovementIntent, PlayerController, VelocityChannel};
pub use session::{Handled, RenderFrame, Sandbox, VoxelInstance};
pub use voxel::{PALETTE, Voxel, VoxelColor, VoxelId};
pub use world::{EditOutcome, REMOVE_TOLERANCE, VoxelWorld};
