//! Turns a resolved click (hit point plus face normal) into an edit on the voxel grid.

use crate::coordinates::{CellCoord, WorldPoint, is_finite_point};

/// Fraction of the face normal added to the hit point before rounding. Half a cell pushes
/// the point off the clicked face into the neighbouring cell.
pub const FACE_OFFSET: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditEvent {
    pub point: WorldPoint,
    pub normal: WorldPoint,
    pub remove_mode: bool,
}

impl EditEvent {
    pub fn place(point: WorldPoint, normal: WorldPoint) -> Self {
        Self {
            point,
            normal,
            remove_mode: false,
        }
    }

    pub fn remove(point: WorldPoint, normal: WorldPoint) -> Self {
        Self {
            point,
            normal,
            remove_mode: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditAction {
    PlaceAt(CellCoord),
    RemoveAt(WorldPoint),
    NoOp,
}

pub fn resolve(event: &EditEvent) -> EditAction {
    if event.remove_mode {
        if !is_finite_point(event.point) {
            return EditAction::NoOp;
        }
        return EditAction::RemoveAt(event.point);
    }

    placement_cell(event.point, event.normal).map_or(EditAction::NoOp, EditAction::PlaceAt)
}

/// Cell just outside the clicked face: `round(point + FACE_OFFSET * normal)` per axis.
pub fn placement_cell(point: WorldPoint, normal: WorldPoint) -> Option<CellCoord> {
    if !is_finite_point(normal) {
        return None;
    }
    let biased = [
        point[0] + normal[0] * FACE_OFFSET,
        point[1] + normal[1] * FACE_OFFSET,
        point[2] + normal[2] * FACE_OFFSET,
    ];
    CellCoord::nearest(biased)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP: WorldPoint = [0.0, 1.0, 0.0];

    #[test]
    fn ground_click_lands_one_cell_above_surface() {
        let action = resolve(&EditEvent::place([2.3, -0.5, 4.6], UP));
        assert_eq!(action, EditAction::PlaceAt(CellCoord::new(2, 0, 5)));
    }

    #[test]
    fn side_faces_offset_along_their_normal() {
        // +X face of the cube at the origin.
        let east = resolve(&EditEvent::place([0.5, 0.1, -0.2], [1.0, 0.0, 0.0]));
        assert_eq!(east, EditAction::PlaceAt(CellCoord::new(1, 0, 0)));

        // -Z face of the cube at (3, 1, 0).
        let north = resolve(&EditEvent::place([3.2, 0.9, -0.5], [0.0, 0.0, -1.0]));
        assert_eq!(north, EditAction::PlaceAt(CellCoord::new(3, 1, -1)));
    }

    #[test]
    fn top_face_of_a_block_stacks_on_it() {
        let action = resolve(&EditEvent::place([-1.3, 0.5, 2.0], UP));
        assert_eq!(action, EditAction::PlaceAt(CellCoord::new(-1, 1, 2)));
    }

    #[test]
    fn remove_mode_forwards_the_raw_point() {
        let point = [1.1, 0.5, -0.3];
        assert_eq!(
            resolve(&EditEvent::remove(point, UP)),
            EditAction::RemoveAt(point)
        );
    }

    #[test]
    fn non_finite_input_is_a_no_op() {
        assert_eq!(
            resolve(&EditEvent::place([f32::NAN, 0.0, 0.0], UP)),
            EditAction::NoOp
        );
        assert_eq!(
            resolve(&EditEvent::place([0.0, 0.0, 0.0], [0.0, f32::INFINITY, 0.0])),
            EditAction::NoOp
        );
        assert_eq!(
            resolve(&EditEvent::remove([0.0, f32::NAN, 0.0], UP)),
            EditAction::NoOp
        );
    }
}
