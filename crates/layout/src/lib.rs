use figura_style::StyleParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid style value: {0}")]
    Style(#[from] StyleParseError),
    #[error(
        "Box model of {element} needs {required:.2}px of {axis} but the border box is only {available:.2}px."
    )]
    BoxModelOverflow {
        element: ElementId,
        axis: &'static str,
        required: f32,
        available: f32,
    },
    #[error("Invalid {property} {value} for {kind}.")]
    InvalidDimension {
        kind: &'static str,
        property: &'static str,
        value: f32,
    },
    #[error("Grid must have at least one column.")]
    EmptyGrid,
    #[error("Unknown element {0}.")]
    UnknownElement(ElementId),
    #[error("Adding {child} to {parent} would create a cycle.")]
    CycleDetected { parent: ElementId, child: ElementId },
    #[error("{child} is not a child of {parent}.")]
    NotAChild { parent: ElementId, child: ElementId },
    #[error("Escaping element {0} has no ancestor outside a proactive layout.")]
    NoEscapeTarget(ElementId),
    #[error("Element {0} is not a {1}.")]
    KindMismatch(ElementId, &'static str),
    #[error("Size of {0} was read while its measurement is stale.")]
    StaleCache(ElementId),
    #[error("Layout has not completed for {0}.")]
    LayoutPending(ElementId),
    #[error("Tree invariant violated: {0}")]
    InvariantViolation(String),
}

pub mod artboard;
pub mod config;
pub mod containers;
pub mod element;
pub mod geometry;
pub mod interface;
pub mod measure;
pub mod output;
pub mod phase;
pub mod properties;
pub mod tree;

pub use self::artboard::{Artboard, ArtboardConfig};
pub use self::config::LayoutConfig;
pub use self::element::{
    AnchorKind, CircleSpec, Element, ElementKind, GridSpec, GroupSpec, LayoutRole, RectSpec,
    StackSpec, TextSpec,
};
pub use self::geometry::{Anchor, PositionSpec};
pub use self::interface::LayoutStrategy;
pub use self::measure::{EstimatingMeasurer, EstimatorMetrics, TextMeasurer};
pub use self::output::Placement;
pub use self::tree::ElementTree;

// Re-export the foundation types nodes are built from.
pub use figura_style::{
    Alignment, BoxLayer, BoxModel, BoxModelConfig, Direction, Extent, Sides, TextStyle,
};
pub use figura_types::{ElementId, Point, Rect, Size};

#[cfg(test)]
mod test_utils;
