//! Property Structure
//!
//! In-memory layout of a property: floors, units, rooms and bedspaces, plus
//! one common area per floor. Every mutation is a pure function of the
//! current snapshot and the ancestor id path of its target.

mod action;
mod error;
mod ids;
mod model;
mod node;
mod outline;
mod structure;

#[cfg(test)]
mod tests;

pub use action::StructureAction;
pub use error::{NodeLevel, StructureError, StructureResult};
pub use ids::{BedspaceId, CommonAreaId, FloorId, GeneratedId, IdSequence, RoomId, UnitId};
pub use model::{
    Bedspace, BedspaceDetails, BedspaceType, CommonArea, CommonAreaDetails, CommonAreaType, Floor,
    FloorDetails, Room, RoomDetails, RoomType, Unit, UnitDetails, UnitType,
};
pub use node::Node;
pub use outline::{outline, StructureRow};
pub use structure::{PropertyStructure, StructureTotals};
