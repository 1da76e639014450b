//! Structure Scenario Tests
//!
//! End-to-end editing sessions against the public operations.

use crate::*;

/// Tree with two floors; floor 1 has one unit with two rooms
fn populated() -> (PropertyStructure, FloorId, UnitId, RoomId, RoomId) {
    let tree = PropertyStructure::new();
    let floor = tree.floors()[0].id.clone();
    let tree = tree.add_unit(&floor);
    let unit = tree.floors()[0].units[0].id.clone();
    let tree = tree.add_room(&floor, &unit).add_room(&floor, &unit);
    let rooms = &tree.floors()[0].units[0].rooms;
    let (room_a, room_b) = (rooms[0].id.clone(), rooms[1].id.clone());
    let tree = tree.add_bedspace(&floor, &unit, &room_b).add_floor();
    (tree, floor, unit, room_a, room_b)
}

#[test]
fn test_default_tree() {
    let tree = PropertyStructure::default();
    assert_eq!(tree.floors().len(), 1);
    assert_eq!(tree.floors()[0].name, "Floor 1");
    assert!(tree.floors()[0].units.is_empty());
}

#[test]
fn test_add_floor_appends_one() {
    let (tree, ..) = populated();
    let next = tree.add_floor();

    assert_eq!(next.floors().len(), tree.floors().len() + 1);
    assert_eq!(&next.floors()[..tree.floors().len()], tree.floors());
    assert_eq!(next.floors()[2].name, "Floor 3");
    assert_eq!(next.floors()[2].number, 3);
}

#[test]
fn test_remove_floor_drops_subtree_only() {
    let (tree, floor, ..) = populated();
    let sibling = tree.floors()[1].clone();

    let next = tree.remove_floor(&floor);

    assert_eq!(next.floors(), &[sibling][..]);
    assert_eq!(next.totals().units, 0);
    assert_eq!(next.totals().bedspaces, 0);
}

#[test]
fn test_add_unit_touches_one_floor() {
    let (tree, ..) = populated();
    let second = tree.floors()[1].id.clone();

    let next = tree.add_unit(&second);

    assert_eq!(next.floors()[1].units.len(), 1);
    assert_eq!(next.floors()[0], tree.floors()[0]);
    assert_eq!(next.floors()[1].units[0].name, "Unit 1");
}

#[test]
fn test_add_bedspace_leaves_sibling_rooms() {
    let (tree, floor, unit, room_a, room_b) = populated();
    let before_b = tree.room(&floor, &unit, &room_b).unwrap().clone();

    let next = tree.add_bedspace(&floor, &unit, &room_a);

    assert_eq!(next.room(&floor, &unit, &room_a).unwrap().bedspaces.len(), 1);
    assert_eq!(next.room(&floor, &unit, &room_b).unwrap(), &before_b);
    assert_eq!(next.floors()[1], tree.floors()[1]);
}

#[test]
fn test_common_area_replaces() {
    let (tree, floor, ..) = populated();

    let next = tree.add_common_area(&floor).add_common_area(&floor);

    let areas = &next.floor(&floor).unwrap().common_areas;
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].name, "Common Area");

    let area = areas[0].id.clone();
    let cleared = next.remove_common_area(&floor, &area);
    assert!(cleared.floor(&floor).unwrap().common_area().is_none());
}

#[test]
fn test_bed_count_grows_and_truncates() {
    let (tree, floor, unit, room_a, _) = populated();

    let two = tree.set_bed_count(&floor, &unit, &room_a, 2);
    let four = two.set_bed_count(&floor, &unit, &room_a, 4);
    let names: Vec<&str> = four
        .room(&floor, &unit, &room_a)
        .unwrap()
        .bedspaces
        .iter()
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(names, vec!["Bed 1", "Bed 2", "Bed 3", "Bed 4"]);

    let first = two.room(&floor, &unit, &room_a).unwrap().bedspaces[0].clone();
    let one = four.set_bed_count(&floor, &unit, &room_a, 1);
    assert_eq!(one.room(&floor, &unit, &room_a).unwrap().bedspaces, vec![first]);
}

#[test]
fn test_bed_count_unchanged_is_equal() {
    let (tree, floor, unit, _, room_b) = populated();
    assert_eq!(tree.set_bed_count(&floor, &unit, &room_b, 1), tree);
}

#[test]
fn test_missing_floor_is_noop() {
    let (tree, _, unit, room_a, _) = populated();
    let ghost = FloorId::new("floor-404");

    assert_eq!(tree.add_unit(&ghost), tree);
    assert_eq!(tree.add_room(&ghost, &unit), tree);
    assert_eq!(tree.add_bedspace(&ghost, &unit, &room_a), tree);
    assert_eq!(tree.add_common_area(&ghost), tree);
    assert_eq!(tree.remove_floor(&ghost), tree);
    assert_eq!(tree.remove_unit(&ghost, &unit), tree);
    assert_eq!(tree.set_bed_count(&ghost, &unit, &room_a, 3), tree);

    let err = tree.try_add_unit(&ghost).unwrap_err();
    assert_eq!(err, StructureError::NotFound { level: NodeLevel::Floor, id: "floor-404".into() });
}

#[test]
fn test_missing_leaf_is_noop() {
    let (tree, floor, unit, room_a, _) = populated();

    assert_eq!(tree.remove_bedspace(&floor, &unit, &room_a, &BedspaceId::new("bed-1")), tree);
    assert_eq!(tree.remove_common_area(&floor, &CommonAreaId::new("common-area-1")), tree);
    assert!(matches!(
        tree.try_remove_room(&floor, &unit, &RoomId::new("room-0")),
        Err(StructureError::NotFound { level: NodeLevel::Room, .. })
    ));
}

#[test]
fn test_ids_unique_within_lists() {
    let tree = PropertyStructure::new();
    let floor = tree.floors()[0].id.clone();
    let tree = tree.add_unit(&floor).add_unit(&floor);
    let unit = tree.floors()[0].units[1].id.clone();
    let tree = tree.remove_unit(&floor, &tree.floors()[0].units[0].id.clone()).add_unit(&floor);

    let units = &tree.floor(&floor).unwrap().units;
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].id, unit);
    assert_ne!(units[0].id, units[1].id);
}

#[test]
fn test_add_unit_then_collapse() {
    let tree = PropertyStructure::new();
    let floor = tree.floors()[0].id.clone();

    let tree = tree.add_unit(&floor);
    let unit = tree.floors()[0].units[0].id.clone();
    let tree = tree.add_room(&floor, &unit);
    let room = tree.floors()[0].units[0].rooms[0].id.clone();
    let tree = tree.add_bedspace(&floor, &unit, &room);

    assert_eq!(
        tree.totals(),
        StructureTotals { floors: 1, units: 1, rooms: 1, bedspaces: 1, common_areas: 0 }
    );

    let tree = tree.remove_unit(&floor, &unit);
    assert_eq!(tree.floors().len(), 1);
    assert!(tree.floors()[0].units.is_empty());
}

#[test]
fn test_disabled_node_still_cascades() {
    let (tree, floor, unit, ..) = populated();
    let mut floors = tree.floors().to_vec();
    floors[0].units[0].is_enabled = false;
    let tree = PropertyStructure::try_from_floors(floors).unwrap();

    let next = tree.remove_unit(&floor, &unit);
    assert_eq!(next.totals().rooms, 0);
}

#[test]
fn test_payload_shape() {
    let tree = PropertyStructure::new();
    let floor = tree.floors()[0].id.clone();
    let tree = tree.add_common_area(&floor);

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["floors"][0]["name"], "Floor 1");
    assert_eq!(json["floors"][0]["isEnabled"], true);
    assert_eq!(json["floors"][0]["commonAreas"][0]["type"], "lounge");
    assert!(json.get("ids").is_none());
}

#[test]
fn test_loaded_tree_mints_fresh_ids() {
    let (tree, floor, unit, ..) = populated();
    let json = serde_json::to_string(&tree).unwrap();

    let loaded: PropertyStructure = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded.floors(), tree.floors());

    let next = loaded.add_room(&floor, &unit);
    let rooms = &next.unit(&floor, &unit).unwrap().rooms;
    assert_eq!(rooms.len(), 3);
    assert!(rooms[..2].iter().all(|r| r.id != rooms[2].id));
    assert_eq!(rooms[2].name, "Room 3");
}

#[test]
fn test_remove_room_drops_its_beds() {
    let (tree, floor, unit, room_a, room_b) = populated();
    let before_a = tree.room(&floor, &unit, &room_a).unwrap().clone();

    let next = tree.remove_room(&floor, &unit, &room_b);

    let rooms = &next.unit(&floor, &unit).unwrap().rooms;
    assert_eq!(rooms, &vec![before_a]);
    assert_eq!(next.totals().bedspaces, 0);
    assert_eq!(next.floors()[1], tree.floors()[1]);
}

#[test]
fn test_remove_one_bedspace_of_three() {
    let (tree, floor, unit, room_a, _) = populated();
    let tree = tree.set_bed_count(&floor, &unit, &room_a, 3);
    let beds = tree.room(&floor, &unit, &room_a).unwrap().bedspaces.clone();

    let next = tree.remove_bedspace(&floor, &unit, &room_a, &beds[1].id);

    let left = &next.room(&floor, &unit, &room_a).unwrap().bedspaces;
    assert_eq!(left, &vec![beds[0].clone(), beds[2].clone()]);
    assert_eq!(next.totals().bedspaces, tree.totals().bedspaces - 1);
}

#[test]
fn test_update_floor_keeps_children() {
    let (tree, floor, ..) = populated();
    let tree = tree.add_common_area(&floor);
    let before = tree.floor(&floor).unwrap().clone();

    let details = FloorDetails {
        name: "Ground".into(),
        number: 0,
        description: "Lobby level".into(),
    };
    let next = tree.update_floor(&floor, &details);

    let after = next.floor(&floor).unwrap();
    assert_eq!(after.details(), details);
    assert_eq!(after.units, before.units);
    assert_eq!(after.common_areas.len(), 1);
    assert_eq!(after.common_areas[0].id, before.common_areas[0].id);
    assert_eq!(next.floors()[1], tree.floors()[1]);
}

#[test]
fn test_update_common_area_sets_details() {
    let (tree, floor, ..) = populated();
    let tree = tree.add_common_area(&floor);
    let area = tree.floor(&floor).unwrap().common_areas[0].id.clone();
    let units = tree.floor(&floor).unwrap().units.clone();

    let details = CommonAreaDetails {
        name: "Shared kitchen".into(),
        kind: CommonAreaType::Kitchen,
        area: 18.5,
    };
    let next = tree.update_common_area(&floor, &area, &details);

    assert_eq!(next.common_area(&floor, &area).unwrap().details(), details);
    assert_eq!(next.floor(&floor).unwrap().units, units);
}

#[test]
fn test_update_room_keeps_beds() {
    let (tree, floor, unit, room_a, room_b) = populated();
    let beds = tree.room(&floor, &unit, &room_b).unwrap().bedspaces.clone();
    let before_a = tree.room(&floor, &unit, &room_a).unwrap().clone();

    let details = RoomDetails {
        name: "Corner room".into(),
        kind: RoomType::MasterBedroom,
        area: 14.0,
    };
    let next = tree.update_room(&floor, &unit, &room_b, &details);

    let room = next.room(&floor, &unit, &room_b).unwrap();
    assert_eq!(room.details(), details);
    assert_eq!(room.bedspaces, beds);
    assert_eq!(next.room(&floor, &unit, &room_a).unwrap(), &before_a);
}

#[test]
fn test_update_bedspace_touches_one_bed() {
    let (tree, floor, unit, room_a, _) = populated();
    let tree = tree.set_bed_count(&floor, &unit, &room_a, 2);
    let beds = tree.room(&floor, &unit, &room_a).unwrap().bedspaces.clone();

    let details = BedspaceDetails { name: "Window bed".into(), kind: BedspaceType::BunkLower };
    let next = tree.update_bedspace(&floor, &unit, &room_a, &beds[0].id, &details);

    let after = &next.room(&floor, &unit, &room_a).unwrap().bedspaces;
    assert_eq!(after[0].id, beds[0].id);
    assert_eq!(after[0].details(), details);
    assert_eq!(after[1], beds[1]);
}

#[test]
fn test_duplicate_sibling_ids_rejected() {
    let (tree, ..) = populated();
    let mut floors = tree.floors().to_vec();
    let twin = floors[0].units[0].clone();
    floors[0].units.push(twin);

    let err = PropertyStructure::try_from_floors(floors).unwrap_err();
    assert_eq!(err, StructureError::DuplicateId { level: NodeLevel::Unit, id: "unit-2".into() });
}

#[test]
fn test_duplicate_floor_ids_fail_to_load() {
    let (tree, ..) = populated();
    let mut json = serde_json::to_value(&tree).unwrap();
    json["floors"][1]["id"] = json["floors"][0]["id"].clone();

    let err = serde_json::from_value::<PropertyStructure>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate floor floor-1"));
}

#[test]
fn test_same_id_under_different_parents_loads() {
    let (tree, ..) = populated();
    let mut floors = tree.floors().to_vec();
    let copy = floors[0].units[0].clone();
    floors[1].units.push(copy);

    assert!(PropertyStructure::try_from_floors(floors).is_ok());
}

#[test]
fn test_loading_largest_u64_suffix_then_add_floor() {
    let json = r#"{"floors":[{"id":"floor-18446744073709551615","name":"Roof","number":1,
        "description":"","isEnabled":true,"units":[],"commonAreas":[]}]}"#;
    let loaded: PropertyStructure = serde_json::from_str(json).unwrap();

    let next = loaded.add_floor();
    assert_eq!(next.floors()[1].id, FloorId::new("floor-18446744073709551616"));
}

#[test]
fn test_loading_near_u64_limit_keeps_ids_distinct() {
    let json = r#"{"floors":[{"id":"floor-18446744073709551614","name":"Roof","number":1,
        "description":"","isEnabled":true,"units":[],"commonAreas":[]}]}"#;
    let loaded: PropertyStructure = serde_json::from_str(json).unwrap();

    let next = loaded.add_floor().add_floor();
    let ids: Vec<&str> = next.floors().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["floor-18446744073709551614", "floor-18446744073709551615", "floor-18446744073709551616"]
    );
}
