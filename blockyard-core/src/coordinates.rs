use serde::{Deserialize, Serialize};

/// Continuous world-space point or direction, `[x, y, z]`.
pub type WorldPoint = [f32; 3];

/// Integer grid cell. One world unit per step; the cell center sits on the integer point,
/// so the unit cube of cell `(x, y, z)` spans `x - 0.5 ..= x + 0.5` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn center(&self) -> WorldPoint {
        [self.x as f32, self.y as f32, self.z as f32]
    }

    /// Rounds each axis of `point` to the nearest integer.
    ///
    /// Returns `None` when a coordinate is not finite or does not fit in an `i32`.
    pub fn nearest(point: WorldPoint) -> Option<Self> {
        let [x, y, z] = point;
        Some(Self::new(round_axis(x)?, round_axis(y)?, round_axis(z)?))
    }
}

fn round_axis(value: f32) -> Option<i32> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    (i32::MIN as f32..i32::MAX as f32)
        .contains(&rounded)
        .then_some(rounded as i32)
}

pub fn is_finite_point(point: WorldPoint) -> bool {
    point.iter().all(|axis| axis.is_finite())
}
