//! Tree Node Trait
//!
//! Basic contract for every node stored in a sibling list.

use std::collections::HashSet;

use crate::error::{NodeLevel, StructureError, StructureResult};

/// Core trait for all tree nodes
pub trait Node: Clone {
    /// The type of the node's identifier
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Display;

    /// Tree level, used when reporting a missing node
    const LEVEL: NodeLevel;

    /// Returns the node's identifier
    fn id(&self) -> &Self::Id;
}

/// Find a node in a sibling list by id
pub(crate) fn find_mut<'a, T: Node>(list: &'a mut [T], id: &T::Id) -> StructureResult<&'a mut T> {
    list.iter_mut()
        .find(|node| node.id() == id)
        .ok_or_else(|| StructureError::not_found(T::LEVEL, id))
}

/// Drop a node (and everything it owns) from a sibling list
pub(crate) fn remove<T: Node>(list: &mut Vec<T>, id: &T::Id) -> StructureResult<()> {
    let before = list.len();
    list.retain(|node| node.id() != id);
    if list.len() == before {
        return Err(StructureError::not_found(T::LEVEL, id));
    }
    Ok(())
}

/// Reject a sibling list where two nodes share an id
pub(crate) fn check_unique<T: Node>(list: &[T]) -> StructureResult<()> {
    let mut seen = HashSet::new();
    for node in list {
        if !seen.insert(node.id()) {
            return Err(StructureError::duplicate(T::LEVEL, node.id()));
        }
    }
    Ok(())
}
