//! Property Structure Tree
//!
//! The root snapshot and its mutation operations.
//!
//! Every operation takes `&self` plus the full ancestor id path and returns a
//! new snapshot. `try_*` variants report the first path segment that does not
//! resolve; the plain variants log the miss and hand back an unchanged copy.

use serde::{Deserialize, Serialize};

use crate::error::{StructureError, StructureResult};
use crate::ids::{BedspaceId, CommonAreaId, FloorId, IdSequence, RoomId, UnitId};
use crate::model::{
    Bedspace, BedspaceDetails, CommonArea, CommonAreaDetails, Floor, FloorDetails, Room,
    RoomDetails, Unit, UnitDetails,
};
use crate::node::{check_unique, find_mut, remove};

/// Full tree snapshot rooted at the floor list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StructureSnapshot")]
pub struct PropertyStructure {
    floors: Vec<Floor>,
    #[serde(skip)]
    ids: IdSequence,
}

/// Serialized shape, validated and resumed by `try_from_floors`
#[derive(Deserialize)]
struct StructureSnapshot {
    floors: Vec<Floor>,
}

impl TryFrom<StructureSnapshot> for PropertyStructure {
    type Error = StructureError;

    fn try_from(snapshot: StructureSnapshot) -> StructureResult<Self> {
        Self::try_from_floors(snapshot.floors)
    }
}

/// Node totals across the whole tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructureTotals {
    pub floors: usize,
    pub units: usize,
    pub rooms: usize,
    pub bedspaces: usize,
    pub common_areas: usize,
}

impl Default for PropertyStructure {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyStructure {
    /// Default tree: one floor, nothing under it
    pub fn new() -> Self {
        Self::empty().add_floor()
    }

    pub fn empty() -> Self {
        Self { floors: Vec::new(), ids: IdSequence::default() }
    }

    /// Adopt an existing floor list; new ids continue after the highest seen.
    ///
    /// Fails if any sibling list holds the same id twice.
    pub fn try_from_floors(floors: Vec<Floor>) -> StructureResult<Self> {
        let mut ids = IdSequence::default();
        check_unique(&floors)?;
        for floor in &floors {
            ids.observe(&floor.id);
            check_unique(&floor.common_areas)?;
            check_unique(&floor.units)?;
            for area in &floor.common_areas {
                ids.observe(&area.id);
            }
            for unit in &floor.units {
                ids.observe(&unit.id);
                check_unique(&unit.rooms)?;
                for room in &unit.rooms {
                    ids.observe(&room.id);
                    check_unique(&room.bedspaces)?;
                    for bed in &room.bedspaces {
                        ids.observe(&bed.id);
                    }
                }
            }
        }
        Ok(Self { floors, ids })
    }

    // ========================
    // Lookups
    // ========================

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor(&self, floor_id: &FloorId) -> Option<&Floor> {
        self.floors.iter().find(|f| &f.id == floor_id)
    }

    pub fn unit(&self, floor_id: &FloorId, unit_id: &UnitId) -> Option<&Unit> {
        self.floor(floor_id)?.units.iter().find(|u| &u.id == unit_id)
    }

    pub fn room(&self, floor_id: &FloorId, unit_id: &UnitId, room_id: &RoomId) -> Option<&Room> {
        self.unit(floor_id, unit_id)?.rooms.iter().find(|r| &r.id == room_id)
    }

    pub fn bedspace(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
        bedspace_id: &BedspaceId,
    ) -> Option<&Bedspace> {
        self.room(floor_id, unit_id, room_id)?
            .bedspaces
            .iter()
            .find(|b| &b.id == bedspace_id)
    }

    pub fn common_area(&self, floor_id: &FloorId, area_id: &CommonAreaId) -> Option<&CommonArea> {
        self.floor(floor_id)?.common_areas.iter().find(|a| &a.id == area_id)
    }

    pub fn totals(&self) -> StructureTotals {
        self.floors.iter().fold(
            StructureTotals { floors: self.floors.len(), ..Default::default() },
            |mut acc, floor| {
                acc.units += floor.unit_count();
                acc.rooms += floor.room_count();
                acc.bedspaces += floor.bedspace_count();
                acc.common_areas += floor.common_areas.len();
                acc
            },
        )
    }

    // ========================
    // Path resolution (on the working copy)
    // ========================

    fn floor_mut(&mut self, floor_id: &FloorId) -> StructureResult<&mut Floor> {
        find_mut(&mut self.floors, floor_id)
    }

    fn unit_mut(&mut self, floor_id: &FloorId, unit_id: &UnitId) -> StructureResult<&mut Unit> {
        find_mut(&mut self.floor_mut(floor_id)?.units, unit_id)
    }

    fn room_mut(
        &mut self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
    ) -> StructureResult<&mut Room> {
        find_mut(&mut self.unit_mut(floor_id, unit_id)?.rooms, room_id)
    }

    /// Run `change` against a copy; the copy only escapes on success
    fn edit<F>(&self, change: F) -> StructureResult<Self>
    where
        F: FnOnce(&mut Self) -> StructureResult<()>,
    {
        let mut next = self.clone();
        change(&mut next)?;
        Ok(next)
    }

    fn or_unchanged(&self, op: &str, result: StructureResult<Self>) -> Self {
        result.unwrap_or_else(|e| {
            log::debug!("{}: {}, structure unchanged", op, e);
            self.clone()
        })
    }

    // ========================
    // Floors
    // ========================

    pub fn add_floor(&self) -> Self {
        let mut next = self.clone();
        let id = next.ids.mint();
        let number = next.floors.len() as u32 + 1;
        next.floors.push(Floor::placeholder(id, number));
        next
    }

    pub fn try_remove_floor(&self, floor_id: &FloorId) -> StructureResult<Self> {
        self.edit(|s| remove(&mut s.floors, floor_id))
    }

    pub fn remove_floor(&self, floor_id: &FloorId) -> Self {
        self.or_unchanged("remove_floor", self.try_remove_floor(floor_id))
    }

    pub fn try_update_floor(&self, floor_id: &FloorId, details: &FloorDetails) -> StructureResult<Self> {
        self.edit(|s| {
            s.floor_mut(floor_id)?.apply_details(details);
            Ok(())
        })
    }

    pub fn update_floor(&self, floor_id: &FloorId, details: &FloorDetails) -> Self {
        self.or_unchanged("update_floor", self.try_update_floor(floor_id, details))
    }

    // ========================
    // Units
    // ========================

    pub fn try_add_unit(&self, floor_id: &FloorId) -> StructureResult<Self> {
        self.edit(|s| {
            let id = s.ids.mint::<UnitId>();
            let floor = s.floor_mut(floor_id)?;
            let ordinal = floor.units.len() + 1;
            floor.units.push(Unit::placeholder(id, ordinal));
            Ok(())
        })
    }

    pub fn add_unit(&self, floor_id: &FloorId) -> Self {
        self.or_unchanged("add_unit", self.try_add_unit(floor_id))
    }

    pub fn try_remove_unit(&self, floor_id: &FloorId, unit_id: &UnitId) -> StructureResult<Self> {
        self.edit(|s| remove(&mut s.floor_mut(floor_id)?.units, unit_id))
    }

    pub fn remove_unit(&self, floor_id: &FloorId, unit_id: &UnitId) -> Self {
        self.or_unchanged("remove_unit", self.try_remove_unit(floor_id, unit_id))
    }

    pub fn try_update_unit(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        details: &UnitDetails,
    ) -> StructureResult<Self> {
        self.edit(|s| {
            s.unit_mut(floor_id, unit_id)?.apply_details(details);
            Ok(())
        })
    }

    pub fn update_unit(&self, floor_id: &FloorId, unit_id: &UnitId, details: &UnitDetails) -> Self {
        self.or_unchanged("update_unit", self.try_update_unit(floor_id, unit_id, details))
    }

    // ========================
    // Rooms
    // ========================

    pub fn try_add_room(&self, floor_id: &FloorId, unit_id: &UnitId) -> StructureResult<Self> {
        self.edit(|s| {
            let id = s.ids.mint::<RoomId>();
            let unit = s.unit_mut(floor_id, unit_id)?;
            let ordinal = unit.rooms.len() + 1;
            unit.rooms.push(Room::placeholder(id, ordinal));
            Ok(())
        })
    }

    pub fn add_room(&self, floor_id: &FloorId, unit_id: &UnitId) -> Self {
        self.or_unchanged("add_room", self.try_add_room(floor_id, unit_id))
    }

    pub fn try_remove_room(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
    ) -> StructureResult<Self> {
        self.edit(|s| remove(&mut s.unit_mut(floor_id, unit_id)?.rooms, room_id))
    }

    pub fn remove_room(&self, floor_id: &FloorId, unit_id: &UnitId, room_id: &RoomId) -> Self {
        self.or_unchanged("remove_room", self.try_remove_room(floor_id, unit_id, room_id))
    }

    pub fn try_update_room(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
        details: &RoomDetails,
    ) -> StructureResult<Self> {
        self.edit(|s| {
            s.room_mut(floor_id, unit_id, room_id)?.apply_details(details);
            Ok(())
        })
    }

    pub fn update_room(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
        details: &RoomDetails,
    ) -> Self {
        self.or_unchanged("update_room", self.try_update_room(floor_id, unit_id, room_id, details))
    }

    // ========================
    // Bedspaces
    // ========================

    pub fn try_add_bedspace(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
    ) -> StructureResult<Self> {
        self.edit(|s| {
            let id = s.ids.mint::<BedspaceId>();
            let room = s.room_mut(floor_id, unit_id, room_id)?;
            let ordinal = room.bedspaces.len() + 1;
            room.bedspaces.push(Bedspace::placeholder(id, ordinal));
            Ok(())
        })
    }

    pub fn add_bedspace(&self, floor_id: &FloorId, unit_id: &UnitId, room_id: &RoomId) -> Self {
        self.or_unchanged("add_bedspace", self.try_add_bedspace(floor_id, unit_id, room_id))
    }

    pub fn try_remove_bedspace(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
        bedspace_id: &BedspaceId,
    ) -> StructureResult<Self> {
        self.edit(|s| remove(&mut s.room_mut(floor_id, unit_id, room_id)?.bedspaces, bedspace_id))
    }

    pub fn remove_bedspace(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
        bedspace_id: &BedspaceId,
    ) -> Self {
        self.or_unchanged(
            "remove_bedspace",
            self.try_remove_bedspace(floor_id, unit_id, room_id, bedspace_id),
        )
    }

    pub fn try_update_bedspace(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
        bedspace_id: &BedspaceId,
        details: &BedspaceDetails,
    ) -> StructureResult<Self> {
        self.edit(|s| {
            let room = s.room_mut(floor_id, unit_id, room_id)?;
            find_mut(&mut room.bedspaces, bedspace_id)?.apply_details(details);
            Ok(())
        })
    }

    pub fn update_bedspace(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
        bedspace_id: &BedspaceId,
        details: &BedspaceDetails,
    ) -> Self {
        self.or_unchanged(
            "update_bedspace",
            self.try_update_bedspace(floor_id, unit_id, room_id, bedspace_id, details),
        )
    }

    /// Grow or shrink a room's bed list to exactly `count` entries.
    ///
    /// New beds continue the `Bed N` naming from the current length; shrinking
    /// drops beds from the end.
    pub fn try_set_bed_count(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
        count: usize,
    ) -> StructureResult<Self> {
        self.edit(|s| {
            let mut ids = s.ids;
            let room = s.room_mut(floor_id, unit_id, room_id)?;
            if count < room.bedspaces.len() {
                room.bedspaces.truncate(count);
            }
            while room.bedspaces.len() < count {
                let ordinal = room.bedspaces.len() + 1;
                room.bedspaces.push(Bedspace::placeholder(ids.mint(), ordinal));
            }
            s.ids = ids;
            Ok(())
        })
    }

    pub fn set_bed_count(
        &self,
        floor_id: &FloorId,
        unit_id: &UnitId,
        room_id: &RoomId,
        count: usize,
    ) -> Self {
        self.or_unchanged("set_bed_count", self.try_set_bed_count(floor_id, unit_id, room_id, count))
    }

    // ========================
    // Common areas
    // ========================

    /// Replace the floor's common areas with one default entry
    pub fn try_add_common_area(&self, floor_id: &FloorId) -> StructureResult<Self> {
        self.edit(|s| {
            let id = s.ids.mint::<CommonAreaId>();
            s.floor_mut(floor_id)?.common_areas = vec![CommonArea::placeholder(id)];
            Ok(())
        })
    }

    pub fn add_common_area(&self, floor_id: &FloorId) -> Self {
        self.or_unchanged("add_common_area", self.try_add_common_area(floor_id))
    }

    pub fn try_remove_common_area(
        &self,
        floor_id: &FloorId,
        area_id: &CommonAreaId,
    ) -> StructureResult<Self> {
        self.edit(|s| remove(&mut s.floor_mut(floor_id)?.common_areas, area_id))
    }

    pub fn remove_common_area(&self, floor_id: &FloorId, area_id: &CommonAreaId) -> Self {
        self.or_unchanged("remove_common_area", self.try_remove_common_area(floor_id, area_id))
    }

    pub fn try_update_common_area(
        &self,
        floor_id: &FloorId,
        area_id: &CommonAreaId,
        details: &CommonAreaDetails,
    ) -> StructureResult<Self> {
        self.edit(|s| {
            find_mut(&mut s.floor_mut(floor_id)?.common_areas, area_id)?.apply_details(details);
            Ok(())
        })
    }

    pub fn update_common_area(
        &self,
        floor_id: &FloorId,
        area_id: &CommonAreaId,
        details: &CommonAreaDetails,
    ) -> Self {
        self.or_unchanged(
            "update_common_area",
            self.try_update_common_area(floor_id, area_id, details),
        )
    }
}
