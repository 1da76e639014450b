//! Structure Errors
//!
//! Errors raised when a mutation path does not resolve to a node.

use std::fmt;

/// Level of the property tree a node lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeLevel {
    Floor,
    Unit,
    Room,
    Bedspace,
    CommonArea,
}

impl NodeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeLevel::Floor => "floor",
            NodeLevel::Unit => "unit",
            NodeLevel::Room => "room",
            NodeLevel::Bedspace => "bedspace",
            NodeLevel::CommonArea => "common area",
        }
    }
}

/// Common result type for structure operations
pub type StructureResult<T> = Result<T, StructureError>;

/// Structure-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A path segment did not match any sibling
    NotFound { level: NodeLevel, id: String },
    /// Two siblings in loaded data share an id
    DuplicateId { level: NodeLevel, id: String },
}

impl StructureError {
    pub(crate) fn not_found(level: NodeLevel, id: impl fmt::Display) -> Self {
        StructureError::NotFound { level, id: id.to_string() }
    }

    pub(crate) fn duplicate(level: NodeLevel, id: impl fmt::Display) -> Self {
        StructureError::DuplicateId { level, id: id.to_string() }
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::NotFound { level, id } => {
                write!(f, "Not found: {} {}", level.as_str(), id)
            }
            StructureError::DuplicateId { level, id } => {
                write!(f, "Conflict: duplicate {} {}", level.as_str(), id)
            }
        }
    }
}

impl std::error::Error for StructureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StructureError::not_found(NodeLevel::CommonArea, "common-area-4");
        assert_eq!(err.to_string(), "Not found: common area common-area-4");
    }

    #[test]
    fn test_duplicate_message() {
        let err = StructureError::duplicate(NodeLevel::Room, "room-3");
        assert_eq!(err.to_string(), "Conflict: duplicate room room-3");
    }
}
