//! Nearest-surface picking against the ground plane and placed voxels.
//!
//! Only the closest hit is reported, so a click on a voxel never also lands on the ground
//! (or on another voxel) behind it.

use crate::coordinates::WorldPoint;
use crate::geometry::{Aabb, GroundPlane, Ray};
use crate::voxel::{Voxel, VoxelId};

pub const DEFAULT_PICK_DISTANCE: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Ground,
    Voxel(VoxelId),
}

impl PickTarget {
    pub fn voxel(self) -> Option<VoxelId> {
        match self {
            PickTarget::Voxel(id) => Some(id),
            PickTarget::Ground => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Hit point, lying exactly on the plane of the hit face.
    pub point: WorldPoint,
    pub normal: WorldPoint,
    pub distance: f32,
    pub target: PickTarget,
}

pub fn pick(
    ray: &Ray,
    voxels: &[Voxel],
    ground: &GroundPlane,
    max_distance: f32,
) -> Option<PickHit> {
    let voxel_hit = nearest_voxel_hit(ray, voxels);
    let ground_hit = ground.ray_hit(ray).map(|distance| {
        let mut point = ray.at(distance);
        point[1] = ground.height;
        PickHit {
            point,
            normal: GroundPlane::NORMAL,
            distance,
            target: PickTarget::Ground,
        }
    });

    // A voxel resting on the ground shares its bottom edge with the plane; the voxel wins ties.
    let nearest = match (voxel_hit, ground_hit) {
        (Some(voxel), Some(ground)) if ground.distance < voxel.distance => Some(ground),
        (Some(voxel), _) => Some(voxel),
        (None, ground) => ground,
    };

    nearest.filter(|hit| hit.distance <= max_distance)
}

/// First voxel in collection order wins among equally distant hits.
fn nearest_voxel_hit(ray: &Ray, voxels: &[Voxel]) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;

    for voxel in voxels {
        let bounds = Aabb::unit_cell(voxel.cell);
        let Some((distance, face)) = bounds.ray_entry(ray) else {
            continue;
        };
        if best.is_some_and(|hit| hit.distance <= distance) {
            continue;
        }

        let mut point = ray.at(distance);
        point[face.axis()] = bounds.face_plane(face);
        best = Some(PickHit {
            point,
            normal: face.normal(),
            distance,
            target: PickTarget::Voxel(voxel.id),
        });
    }

    best
}
