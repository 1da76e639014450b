//! Structure Outline
//!
//! Flattens the tree into display rows, one variant per node kind.

use crate::ids::{BedspaceId, CommonAreaId, FloorId, RoomId, UnitId};
use crate::model::{BedspaceType, CommonAreaType, RoomType, UnitType};
use crate::structure::PropertyStructure;

/// One row of the flattened tree
#[derive(Debug, Clone, PartialEq)]
pub enum StructureRow {
    Floor {
        id: FloorId,
        name: String,
        number: u32,
        units: usize,
        common_areas: usize,
    },
    CommonArea {
        floor: FloorId,
        id: CommonAreaId,
        name: String,
        kind: CommonAreaType,
        area: f64,
    },
    Unit {
        floor: FloorId,
        id: UnitId,
        name: String,
        kind: UnitType,
        rooms: usize,
        bedspaces: usize,
    },
    Room {
        unit: UnitId,
        id: RoomId,
        name: String,
        kind: RoomType,
        bedspaces: usize,
    },
    Bedspace {
        room: RoomId,
        id: BedspaceId,
        name: String,
        kind: BedspaceType,
    },
}

impl StructureRow {
    /// Indent level, floors at 0
    pub fn depth(&self) -> usize {
        match self {
            StructureRow::Floor { .. } => 0,
            StructureRow::CommonArea { .. } | StructureRow::Unit { .. } => 1,
            StructureRow::Room { .. } => 2,
            StructureRow::Bedspace { .. } => 3,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            StructureRow::Floor { name, .. }
            | StructureRow::CommonArea { name, .. }
            | StructureRow::Unit { name, .. }
            | StructureRow::Room { name, .. }
            | StructureRow::Bedspace { name, .. } => name,
        }
    }

    /// Key unique across the whole outline
    pub fn key(&self) -> String {
        match self {
            StructureRow::Floor { id, .. } => id.to_string(),
            StructureRow::CommonArea { floor, id, .. } => format!("{}/{}", floor, id),
            StructureRow::Unit { floor, id, .. } => format!("{}/{}", floor, id),
            StructureRow::Room { unit, id, .. } => format!("{}/{}", unit, id),
            StructureRow::Bedspace { room, id, .. } => format!("{}/{}", room, id),
        }
    }

    /// Kind column text
    pub fn kind_label(&self) -> &'static str {
        match self {
            StructureRow::Floor { .. } => "Floor",
            StructureRow::CommonArea { kind, .. } => kind.label(),
            StructureRow::Unit { kind, .. } => kind.label(),
            StructureRow::Room { kind, .. } => kind.label(),
            StructureRow::Bedspace { kind, .. } => kind.label(),
        }
    }

    /// Summary column text
    pub fn summary(&self) -> String {
        match self {
            StructureRow::Floor { units, common_areas, .. } => {
                format!("{} Units, {} Common Areas", units, common_areas)
            }
            StructureRow::CommonArea { area, .. } => format!("{} m²", area),
            StructureRow::Unit { rooms, bedspaces, .. } => {
                format!("{} Rooms, {} Bedspaces", rooms, bedspaces)
            }
            StructureRow::Room { bedspaces, .. } => format!("{} Bedspaces", bedspaces),
            StructureRow::Bedspace { .. } => String::new(),
        }
    }
}

/// Depth-first rows: floor, its common areas, then units → rooms → beds
pub fn outline(structure: &PropertyStructure) -> Vec<StructureRow> {
    let mut rows = Vec::new();
    for floor in structure.floors() {
        rows.push(StructureRow::Floor {
            id: floor.id.clone(),
            name: floor.name.clone(),
            number: floor.number,
            units: floor.unit_count(),
            common_areas: floor.common_areas.len(),
        });
        for area in &floor.common_areas {
            rows.push(StructureRow::CommonArea {
                floor: floor.id.clone(),
                id: area.id.clone(),
                name: area.name.clone(),
                kind: area.kind,
                area: area.area,
            });
        }
        for unit in &floor.units {
            rows.push(StructureRow::Unit {
                floor: floor.id.clone(),
                id: unit.id.clone(),
                name: unit.name.clone(),
                kind: unit.kind,
                rooms: unit.room_count(),
                bedspaces: unit.bedspace_count(),
            });
            for room in &unit.rooms {
                rows.push(StructureRow::Room {
                    unit: unit.id.clone(),
                    id: room.id.clone(),
                    name: room.name.clone(),
                    kind: room.kind,
                    bedspaces: room.bedspace_count(),
                });
                for bed in &room.bedspaces {
                    rows.push(StructureRow::Bedspace {
                        room: room.id.clone(),
                        id: bed.id.clone(),
                        name: bed.name.clone(),
                        kind: bed.kind,
                    });
                }
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_order_and_depth() {
        let tree = PropertyStructure::new();
        let floor = tree.floors()[0].id.clone();
        let tree = tree.add_unit(&floor).add_common_area(&floor);
        let unit = tree.floors()[0].units[0].id.clone();
        let tree = tree.add_room(&floor, &unit);
        let room = tree.floors()[0].units[0].rooms[0].id.clone();
        let tree = tree.set_bed_count(&floor, &unit, &room, 2).add_floor();

        let rows = outline(&tree);
        let shape: Vec<(usize, &str)> = rows.iter().map(|r| (r.depth(), r.name())).collect();

        // Should be: Floor 1, its common area, Unit 1, Room 1, Bed 1, Bed 2, Floor 2
        assert_eq!(
            shape,
            vec![
                (0, "Floor 1"),
                (1, "Common Area"),
                (1, "Unit 1"),
                (2, "Room 1"),
                (3, "Bed 1"),
                (3, "Bed 2"),
                (0, "Floor 2"),
            ]
        );
        assert_eq!(rows[2].summary(), "1 Rooms, 2 Bedspaces");
        assert_eq!(rows[0].summary(), "1 Units, 1 Common Areas");
    }

    #[test]
    fn test_outline_keys_unique() {
        let tree = PropertyStructure::new().add_floor().add_floor();
        let rows = outline(&tree);
        let mut keys: Vec<String> = rows.iter().map(StructureRow::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), rows.len());
    }
}
