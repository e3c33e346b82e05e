//! Newtype wrapper for element identity.
//!
//! Elements live in an arena; an `ElementId` is an index into it and carries
//! no ownership.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of an element inside an element arena.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct ElementId(u32);

impl ElementId {
    /// Creates an id from an arena slot index.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the arena slot index of this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
