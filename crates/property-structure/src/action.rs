//! Structure Actions
//!
//! One variant per tree mutation, so the UI dispatches data instead of
//! calling into the tree directly.

use crate::error::StructureResult;
use crate::ids::{BedspaceId, CommonAreaId, FloorId, RoomId, UnitId};
use crate::model::{BedspaceDetails, CommonAreaDetails, FloorDetails, RoomDetails, UnitDetails};
use crate::structure::PropertyStructure;

#[derive(Debug, Clone, PartialEq)]
pub enum StructureAction {
    AddFloor,
    RemoveFloor { floor: FloorId },
    UpdateFloor { floor: FloorId, details: FloorDetails },

    AddUnit { floor: FloorId },
    RemoveUnit { floor: FloorId, unit: UnitId },
    UpdateUnit { floor: FloorId, unit: UnitId, details: UnitDetails },

    AddRoom { floor: FloorId, unit: UnitId },
    RemoveRoom { floor: FloorId, unit: UnitId, room: RoomId },
    UpdateRoom { floor: FloorId, unit: UnitId, room: RoomId, details: RoomDetails },

    AddBedspace { floor: FloorId, unit: UnitId, room: RoomId },
    RemoveBedspace { floor: FloorId, unit: UnitId, room: RoomId, bedspace: BedspaceId },
    UpdateBedspace {
        floor: FloorId,
        unit: UnitId,
        room: RoomId,
        bedspace: BedspaceId,
        details: BedspaceDetails,
    },
    /// Reconcile a room's bed list to exactly `count` beds
    SetBedCount { floor: FloorId, unit: UnitId, room: RoomId, count: usize },

    AddCommonArea { floor: FloorId },
    RemoveCommonArea { floor: FloorId, area: CommonAreaId },
    UpdateCommonArea { floor: FloorId, area: CommonAreaId, details: CommonAreaDetails },
}

impl StructureAction {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            StructureAction::AddFloor => "add_floor",
            StructureAction::RemoveFloor { .. } => "remove_floor",
            StructureAction::UpdateFloor { .. } => "update_floor",
            StructureAction::AddUnit { .. } => "add_unit",
            StructureAction::RemoveUnit { .. } => "remove_unit",
            StructureAction::UpdateUnit { .. } => "update_unit",
            StructureAction::AddRoom { .. } => "add_room",
            StructureAction::RemoveRoom { .. } => "remove_room",
            StructureAction::UpdateRoom { .. } => "update_room",
            StructureAction::AddBedspace { .. } => "add_bedspace",
            StructureAction::RemoveBedspace { .. } => "remove_bedspace",
            StructureAction::UpdateBedspace { .. } => "update_bedspace",
            StructureAction::SetBedCount { .. } => "set_bed_count",
            StructureAction::AddCommonArea { .. } => "add_common_area",
            StructureAction::RemoveCommonArea { .. } => "remove_common_area",
            StructureAction::UpdateCommonArea { .. } => "update_common_area",
        }
    }
}

impl PropertyStructure {
    pub fn try_apply(&self, action: &StructureAction) -> StructureResult<Self> {
        use StructureAction::*;

        log::trace!("apply {}", action.name());
        match action {
            AddFloor => Ok(self.add_floor()),
            RemoveFloor { floor } => self.try_remove_floor(floor),
            UpdateFloor { floor, details } => self.try_update_floor(floor, details),

            AddUnit { floor } => self.try_add_unit(floor),
            RemoveUnit { floor, unit } => self.try_remove_unit(floor, unit),
            UpdateUnit { floor, unit, details } => self.try_update_unit(floor, unit, details),

            AddRoom { floor, unit } => self.try_add_room(floor, unit),
            RemoveRoom { floor, unit, room } => self.try_remove_room(floor, unit, room),
            UpdateRoom { floor, unit, room, details } => {
                self.try_update_room(floor, unit, room, details)
            }

            AddBedspace { floor, unit, room } => self.try_add_bedspace(floor, unit, room),
            RemoveBedspace { floor, unit, room, bedspace } => {
                self.try_remove_bedspace(floor, unit, room, bedspace)
            }
            UpdateBedspace { floor, unit, room, bedspace, details } => {
                self.try_update_bedspace(floor, unit, room, bedspace, details)
            }
            SetBedCount { floor, unit, room, count } => {
                self.try_set_bed_count(floor, unit, room, *count)
            }

            AddCommonArea { floor } => self.try_add_common_area(floor),
            RemoveCommonArea { floor, area } => self.try_remove_common_area(floor, area),
            UpdateCommonArea { floor, area, details } => {
                self.try_update_common_area(floor, area, details)
            }
        }
    }

    /// Apply an action; a path that does not resolve leaves the tree as is
    pub fn apply(&self, action: &StructureAction) -> Self {
        self.try_apply(action).unwrap_or_else(|e| {
            log::debug!("{}: {}, structure unchanged", action.name(), e);
            self.clone()
        })
    }
}
