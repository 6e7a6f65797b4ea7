use crate::coordinates::{CellCoord, WorldPoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: WorldPoint,
    pub max: WorldPoint,
}

impl Aabb {
    /// Box centered on `center` with full side lengths `extents`.
    pub fn from_center(center: WorldPoint, extents: WorldPoint) -> Self {
        let half = extents.map(|extent| extent * 0.5);
        Self {
            min: [center[0] - half[0], center[1] - half[1], center[2] - half[2]],
            max: [center[0] + half[0], center[1] + half[1], center[2] + half[2]],
        }
    }

    pub fn unit_cell(cell: CellCoord) -> Self {
        Self::from_center(cell.center(), [1.0, 1.0, 1.0])
    }

    /// Slab test. Returns the ray parameter where the ray enters the box and the face it
    /// enters through. Rays starting inside the box, or pointing away from it, miss.
    pub fn ray_entry(&self, ray: &Ray) -> Option<(f32, Face)> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut entry_face = None;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];

            if direction == 0.0 {
                if origin < self.min[axis] || origin > self.max[axis] {
                    return None;
                }
                continue;
            }

            let inverse = 1.0 / direction;
            let mut t0 = (self.min[axis] - origin) * inverse;
            let mut t1 = (self.max[axis] - origin) * inverse;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            if t0 > t_near {
                t_near = t0;
                entry_face = Some(Face::entered_along(axis, direction));
            }
            t_far = t_far.min(t1);

            if t_near > t_far {
                return None;
            }
        }

        let face = entry_face?;
        if t_near < 0.0 {
            return None;
        }
        Some((t_near, face))
    }

    /// Coordinate of `face`'s plane along the face's axis.
    pub fn face_plane(&self, face: Face) -> f32 {
        let axis = face.axis();
        if face.is_positive() {
            self.max[axis]
        } else {
            self.min[axis]
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: WorldPoint,
    pub direction: WorldPoint,
}

impl Ray {
    /// Builds a ray with a unit-length direction, so ray parameters are world distances.
    /// A zero direction is kept as-is and never hits anything.
    pub fn new(origin: WorldPoint, direction: WorldPoint) -> Self {
        let length = direction.iter().map(|axis| axis * axis).sum::<f32>().sqrt();
        let direction = if length > f32::EPSILON {
            direction.map(|axis| axis / length)
        } else {
            [0.0; 3]
        };
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> WorldPoint {
        [
            self.origin[0] + self.direction[0] * t,
            self.origin[1] + self.direction[1] * t,
            self.origin[2] + self.direction[2] * t,
        ]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Face {
    pub fn normal(self) -> WorldPoint {
        match self {
            Face::PosX => [1.0, 0.0, 0.0],
            Face::NegX => [-1.0, 0.0, 0.0],
            Face::PosY => [0.0, 1.0, 0.0],
            Face::NegY => [0.0, -1.0, 0.0],
            Face::PosZ => [0.0, 0.0, 1.0],
            Face::NegZ => [0.0, 0.0, -1.0],
        }
    }

    pub fn axis(self) -> usize {
        match self {
            Face::PosX | Face::NegX => 0,
            Face::PosY | Face::NegY => 1,
            Face::PosZ | Face::NegZ => 2,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Face::PosX | Face::PosY | Face::PosZ)
    }

    /// A ray travelling in +axis enters a box through its negative face.
    fn entered_along(axis: usize, direction: f32) -> Face {
        match (axis, direction > 0.0) {
            (0, true) => Face::NegX,
            (0, false) => Face::PosX,
            (1, true) => Face::NegY,
            (1, false) => Face::PosY,
            (_, true) => Face::NegZ,
            (_, false) => Face::PosZ,
        }
    }
}

/// Finite, horizontal, single-sided square centered on the world origin. Only its top
/// surface (normal +Y) is solid.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundPlane {
    pub height: f32,
    pub size: f32,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            height: -0.5,
            size: 100.0,
        }
    }
}

impl GroundPlane {
    pub const NORMAL: WorldPoint = [0.0, 1.0, 0.0];

    pub fn half_extent(&self) -> f32 {
        self.size * 0.5
    }

    /// Whether a footprint centered on `(x, z)` with the given half widths touches the plane.
    pub fn overlaps_footprint(&self, x: f32, z: f32, half_x: f32, half_z: f32) -> bool {
        let half = self.half_extent();
        x.abs() <= half + half_x && z.abs() <= half + half_z
    }

    /// Ray parameter of the hit on the top surface, if any.
    pub fn ray_hit(&self, ray: &Ray) -> Option<f32> {
        if ray.direction[1] >= 0.0 {
            return None;
        }
        let t = (self.height - ray.origin[1]) / ray.direction[1];
        if !t.is_finite() || t < 0.0 {
            return None;
        }
        let point = ray.at(t);
        let half = self.half_extent();
        (point[0].abs() <= half && point[2].abs() <= half).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_enters_through_the_facing_side() {
        let cube = Aabb::unit_cell(CellCoord::new(3, 0, 0));
        let ray = Ray::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);

        let (t, face) = cube.ray_entry(&ray).unwrap();
        assert!((t - 2.5).abs() < 1e-6);
        assert_eq!(face, Face::NegX);
        assert_eq!(face.normal(), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn ray_from_above_hits_top_face() {
        let cube = Aabb::unit_cell(CellCoord::new(0, 0, 0));
        let ray = Ray::new([0.2, 5.0, -0.1], [0.0, -1.0, 0.0]);

        let (t, face) = cube.ray_entry(&ray).unwrap();
        assert!((t - 4.5).abs() < 1e-6);
        assert_eq!(face, Face::PosY);
        assert_eq!(cube.face_plane(face), 0.5);
    }

    #[test]
    fn ray_misses_boxes_behind_or_around_it() {
        let cube = Aabb::unit_cell(CellCoord::new(0, 0, 0));

        let behind = Ray::new([0.0, 0.0, 3.0], [0.0, 0.0, 1.0]);
        assert!(cube.ray_entry(&behind).is_none());

        let beside = Ray::new([0.0, 2.0, 3.0], [0.0, 0.0, -1.0]);
        assert!(cube.ray_entry(&beside).is_none());

        let inside = Ray::new([0.0, 0.0, 0.0], [0.0, 0.0, -1.0]);
        assert!(cube.ray_entry(&inside).is_none());
    }

    #[test]
    fn ground_is_single_sided_and_finite() {
        let ground = GroundPlane::default();

        let down = Ray::new([1.0, 4.5, 2.0], [0.0, -1.0, 0.0]);
        assert_eq!(ground.ray_hit(&down), Some(5.0));

        let up = Ray::new([1.0, -3.0, 2.0], [0.0, 1.0, 0.0]);
        assert_eq!(ground.ray_hit(&up), None);

        let outside = Ray::new([80.0, 4.5, 0.0], [0.0, -1.0, 0.0]);
        assert_eq!(ground.ray_hit(&outside), None);
    }

    #[test]
    fn zero_direction_ray_never_hits() {
        let ray = Ray::new([0.0, 3.0, 0.0], [0.0, 0.0, 0.0]);
        assert!(Aabb::unit_cell(CellCoord::new(0, 3, 0)).ray_entry(&ray).is_none());
        assert!(GroundPlane::default().ray_hit(&ray).is_none());
    }
}
