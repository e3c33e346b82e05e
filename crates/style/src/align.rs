//! Defines stacking direction and alignment enums for layout containers.
use serde::{Deserialize, Serialize};

/// Primary axis of a stacking container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

/// Placement of a child inside the space available to it on one axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Offset of an item of length `item` inside a slot of length `available`.
    /// Oversized items overflow on both sides when centered.
    pub fn offset(self, available: f32, item: f32) -> f32 {
        let free = available - item;
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => free / 2.0,
            Alignment::End => free,
        }
    }
}
