use crate::coordinates::{CellCoord, WorldPoint};
use crate::hit::EditAction;
use crate::voxel::{Voxel, VoxelColor, VoxelId};
use fastrand::Rng;
use log::{debug, trace};

/// Per-axis distance from a voxel's center within which a removal click still selects it.
pub const REMOVE_TOLERANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Placed(VoxelId),
    Removed(Voxel),
    /// Removal click with no voxel in tolerance.
    Missed,
    /// The resolver produced no action.
    Ignored,
}

/// Authoritative, insertion-ordered set of placed voxels.
///
/// Cells are not deduplicated: placing twice into the same cell keeps both voxels.
#[derive(Debug, Clone)]
pub struct VoxelWorld {
    voxels: Vec<Voxel>,
    next_id: u64,
    revision: u64,
    hovered: Option<VoxelId>,
    rng: Rng,
}

impl VoxelWorld {
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    fn with_rng(rng: Rng) -> Self {
        Self {
            voxels: Vec::new(),
            next_id: 0,
            revision: 0,
            hovered: None,
            rng,
        }
    }

    pub fn add(&mut self, cell: CellCoord, color: VoxelColor) -> VoxelId {
        let id = VoxelId(self.next_id);
        self.next_id += 1;
        self.voxels.push(Voxel::new(id, cell, color));
        self.revision += 1;
        debug!(
            "placed voxel {} at ({}, {}, {}) color {}",
            id.0,
            cell.x,
            cell.y,
            cell.z,
            color.name()
        );
        id
    }

    /// Adds a voxel with a color drawn uniformly from the palette.
    pub fn place(&mut self, cell: CellCoord) -> VoxelId {
        let color = VoxelColor::random(&mut self.rng);
        self.add(cell, color)
    }

    pub fn remove_at(&mut self, point: WorldPoint) -> bool {
        self.take_at(point).is_some()
    }

    /// Removes the first voxel, in insertion order, within [`REMOVE_TOLERANCE`] of `point`
    /// on every axis. The first match wins even if a later voxel is closer.
    pub fn take_at(&mut self, point: WorldPoint) -> Option<Voxel> {
        let Some(index) = self
            .voxels
            .iter()
            .position(|voxel| voxel.is_near(point, REMOVE_TOLERANCE))
        else {
            trace!("no voxel near {:?}", point);
            return None;
        };

        let removed = self.voxels.remove(index);
        if self.hovered == Some(removed.id) {
            self.hovered = None;
        }
        self.revision += 1;
        debug!(
            "removed voxel {} at ({}, {}, {})",
            removed.id.0, removed.cell.x, removed.cell.y, removed.cell.z
        );
        Some(removed)
    }

    pub fn apply(&mut self, action: EditAction) -> EditOutcome {
        match action {
            EditAction::PlaceAt(cell) => EditOutcome::Placed(self.place(cell)),
            EditAction::RemoveAt(point) => self
                .take_at(point)
                .map_or(EditOutcome::Missed, EditOutcome::Removed),
            EditAction::NoOp => EditOutcome::Ignored,
        }
    }

    pub fn list(&self) -> &[Voxel] {
        &self.voxels
    }

    pub fn get(&self, id: VoxelId) -> Option<&Voxel> {
        self.voxels.iter().find(|voxel| voxel.id == id)
    }

    pub fn voxels_at(&self, cell: CellCoord) -> impl Iterator<Item = &Voxel> {
        self.voxels.iter().filter(move |voxel| voxel.cell == cell)
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Bumped on every successful add or remove.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn hovered(&self) -> Option<VoxelId> {
        self.hovered
    }

    /// Ids that are not in the world clear the hover.
    pub fn set_hovered(&mut self, id: Option<VoxelId>) {
        self.hovered = id.filter(|id| self.get(*id).is_some());
    }
}

impl Default for VoxelWorld {
    fn default() -> Self {
        Self::new()
    }
}
