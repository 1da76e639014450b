//! Property Structure Model
//!
//! Floor → Unit → Room → Bedspace, with common areas hanging off each floor.

use serde::{Deserialize, Serialize};

use crate::error::NodeLevel;
use crate::ids::{BedspaceId, CommonAreaId, FloorId, RoomId, UnitId};
use crate::node::Node;

macro_rules! node_kind {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => ($value:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Human-readable label for selects and summaries
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Parse a form value, falling back to the default kind
            pub fn from_str(s: &str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    _ => $name::default(),
                }
            }
        }
    };
}

node_kind!(
    /// What a unit is let as
    UnitType {
        #[default]
        Apartment => ("apartment", "Apartment"),
        Studio => ("studio", "Studio"),
        SharedFlat => ("shared-flat", "Shared flat"),
        Office => ("office", "Office"),
        Retail => ("retail", "Retail"),
    }
);

node_kind!(
    /// Room usage
    RoomType {
        #[default]
        Bedroom => ("bedroom", "Bedroom"),
        MasterBedroom => ("master-bedroom", "Master bedroom"),
        SharedRoom => ("shared-room", "Shared room"),
        Office => ("office", "Office"),
    }
);

node_kind!(
    /// Bed kind for a bedspace
    BedspaceType {
        #[default]
        Single => ("single", "Single"),
        Double => ("double", "Double"),
        BunkUpper => ("bunk-upper", "Bunk (upper)"),
        BunkLower => ("bunk-lower", "Bunk (lower)"),
    }
);

node_kind!(
    /// Shared facility kind
    CommonAreaType {
        #[default]
        Lounge => ("lounge", "Lounge"),
        Kitchen => ("kitchen", "Kitchen"),
        Laundry => ("laundry", "Laundry"),
        Gym => ("gym", "Gym"),
        StudyRoom => ("study-room", "Study room"),
    }
);

/// A storey of the property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    pub number: u32,
    pub description: String,
    pub is_enabled: bool,
    pub units: Vec<Unit>,
    pub common_areas: Vec<CommonArea>,
}

/// A lettable unit on a floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: UnitType,
    /// Square metres
    pub area: f64,
    pub is_enabled: bool,
    pub rooms: Vec<Room>,
}

/// A room inside a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RoomType,
    pub area: f64,
    pub is_enabled: bool,
    pub bedspaces: Vec<Bedspace>,
}

/// One lettable bed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bedspace {
    pub id: BedspaceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BedspaceType,
}

/// Shared space on a floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonArea {
    pub id: CommonAreaId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CommonAreaType,
    pub area: f64,
    pub is_enabled: bool,
}

// ========================
// Editable details
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct FloorDetails {
    pub name: String,
    pub number: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitDetails {
    pub name: String,
    pub kind: UnitType,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomDetails {
    pub name: String,
    pub kind: RoomType,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BedspaceDetails {
    pub name: String,
    pub kind: BedspaceType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommonAreaDetails {
    pub name: String,
    pub kind: CommonAreaType,
    pub area: f64,
}

impl Floor {
    /// New floor with placeholder values, `number` is 1-based
    pub fn placeholder(id: FloorId, number: u32) -> Self {
        Self {
            id,
            name: format!("Floor {}", number),
            number,
            description: String::new(),
            is_enabled: true,
            units: Vec::new(),
            common_areas: Vec::new(),
        }
    }

    pub fn details(&self) -> FloorDetails {
        FloorDetails {
            name: self.name.clone(),
            number: self.number,
            description: self.description.clone(),
        }
    }

    pub(crate) fn apply_details(&mut self, details: &FloorDetails) {
        self.name = details.name.clone();
        self.number = details.number;
        self.description = details.description.clone();
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn room_count(&self) -> usize {
        self.units.iter().map(Unit::room_count).sum()
    }

    pub fn bedspace_count(&self) -> usize {
        self.units.iter().map(Unit::bedspace_count).sum()
    }

    pub fn common_area(&self) -> Option<&CommonArea> {
        self.common_areas.first()
    }
}

impl Unit {
    pub fn placeholder(id: UnitId, ordinal: usize) -> Self {
        Self {
            id,
            name: format!("Unit {}", ordinal),
            kind: UnitType::default(),
            area: 0.0,
            is_enabled: true,
            rooms: Vec::new(),
        }
    }

    pub fn details(&self) -> UnitDetails {
        UnitDetails { name: self.name.clone(), kind: self.kind, area: self.area }
    }

    pub(crate) fn apply_details(&mut self, details: &UnitDetails) {
        self.name = details.name.clone();
        self.kind = details.kind;
        self.area = details.area;
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn bedspace_count(&self) -> usize {
        self.rooms.iter().map(Room::bedspace_count).sum()
    }
}

impl Room {
    pub fn placeholder(id: RoomId, ordinal: usize) -> Self {
        Self {
            id,
            name: format!("Room {}", ordinal),
            kind: RoomType::default(),
            area: 0.0,
            is_enabled: true,
            bedspaces: Vec::new(),
        }
    }

    pub fn details(&self) -> RoomDetails {
        RoomDetails { name: self.name.clone(), kind: self.kind, area: self.area }
    }

    pub(crate) fn apply_details(&mut self, details: &RoomDetails) {
        self.name = details.name.clone();
        self.kind = details.kind;
        self.area = details.area;
    }

    pub fn bedspace_count(&self) -> usize {
        self.bedspaces.len()
    }
}

impl Bedspace {
    pub fn placeholder(id: BedspaceId, ordinal: usize) -> Self {
        Self {
            id,
            name: format!("Bed {}", ordinal),
            kind: BedspaceType::default(),
        }
    }

    pub fn details(&self) -> BedspaceDetails {
        BedspaceDetails { name: self.name.clone(), kind: self.kind }
    }

    pub(crate) fn apply_details(&mut self, details: &BedspaceDetails) {
        self.name = details.name.clone();
        self.kind = details.kind;
    }
}

impl CommonArea {
    pub fn placeholder(id: CommonAreaId) -> Self {
        Self {
            id,
            name: "Common Area".to_string(),
            kind: CommonAreaType::default(),
            area: 0.0,
            is_enabled: true,
        }
    }

    pub fn details(&self) -> CommonAreaDetails {
        CommonAreaDetails { name: self.name.clone(), kind: self.kind, area: self.area }
    }

    pub(crate) fn apply_details(&mut self, details: &CommonAreaDetails) {
        self.name = details.name.clone();
        self.kind = details.kind;
        self.area = details.area;
    }
}

macro_rules! impl_node {
    ($ty:ty, $id:ty, $level:expr) => {
        impl Node for $ty {
            type Id = $id;
            const LEVEL: NodeLevel = $level;

            fn id(&self) -> &Self::Id {
                &self.id
            }
        }
    };
}

impl_node!(Floor, FloorId, NodeLevel::Floor);
impl_node!(Unit, UnitId, NodeLevel::Unit);
impl_node!(Room, RoomId, NodeLevel::Room);
impl_node!(Bedspace, BedspaceId, NodeLevel::Bedspace);
impl_node!(CommonArea, CommonAreaId, NodeLevel::CommonArea);
