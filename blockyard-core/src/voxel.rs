use crate::coordinates::{CellCoord, WorldPoint};
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// Stable identity of a placed voxel. Never reused within a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoxelColor {
    Red,
    Blue,
    Green,
    Yellow,
}

pub const PALETTE: [VoxelColor; 4] = [
    VoxelColor::Red,
    VoxelColor::Blue,
    VoxelColor::Green,
    VoxelColor::Yellow,
];

impl VoxelColor {
    /// Uniform draw from [`PALETTE`].
    pub fn random(rng: &mut Rng) -> Self {
        PALETTE[rng.usize(..PALETTE.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            VoxelColor::Red => "red",
            VoxelColor::Blue => "blue",
            VoxelColor::Green => "green",
            VoxelColor::Yellow => "yellow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voxel {
    pub id: VoxelId,
    pub cell: CellCoord,
    pub color: VoxelColor,
}

impl Voxel {
    pub fn new(id: VoxelId, cell: CellCoord, color: VoxelColor) -> Self {
        Self { id, cell, color }
    }

    /// True when every axis of `point` lies within `tolerance` of the cell center.
    pub fn is_near(&self, point: WorldPoint, tolerance: f32) -> bool {
        self.cell
            .center()
            .iter()
            .zip(point.iter())
            .all(|(center, axis)| (center - axis).abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_color_stays_in_palette() {
        let mut rng = Rng::with_seed(3);
        for _ in 0..64 {
            assert!(PALETTE.contains(&VoxelColor::random(&mut rng)));
        }
    }

    #[test]
    fn is_near_uses_per_axis_tolerance() {
        let voxel = Voxel::new(VoxelId(0), CellCoord::new(1, 0, -2), VoxelColor::Blue);

        assert!(voxel.is_near([1.5, 0.0, -2.0], 0.5));
        assert!(voxel.is_near([1.4, 0.45, -2.5], 0.5));
        // Chebyshev, not Euclidean: the corner is still inside.
        assert!(voxel.is_near([1.5, 0.5, -1.5], 0.5));
        assert!(!voxel.is_near([1.51, 0.0, -2.0], 0.5));
    }

    #[test]
    fn palette_names_are_lowercase() {
        let names: Vec<&str> = PALETTE.iter().map(|color| color.name()).collect();
        assert_eq!(names, ["red", "blue", "green", "yellow"]);
    }
}
