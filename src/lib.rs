//! # figura
//!
//! Positioning and layout engine for vector diagrams.
//!
//! The workspace is split the same way the layout pipeline is:
//! - **types**: geometry primitives and element ids
//! - **style**: unit strings, four-sided spacing and the resolved box model
//! - **layout**: the element tree, the measure/layout phases, containers and
//!   the artboard that drives them
//!
//! Rendering is out of scope. A renderer consumes
//! [`Artboard::placements`](layout::Artboard::placements) after a
//! successful [`Artboard::run`](layout::Artboard::run).

// Re-export foundation crates
pub use figura_style as style;
pub use figura_types as types;

// Re-export algorithm crates
pub use figura_layout as layout;

// Re-export commonly used types
pub use layout::{
    Anchor, Artboard, ArtboardConfig, ElementKind, ElementTree, EstimatingMeasurer, LayoutConfig,
    LayoutError, Placement, PositionSpec, TextMeasurer,
};
pub use style::{BoxLayer, BoxModel, BoxModelConfig, Extent, StyleParseError};
pub use types::{ElementId, Point, Rect, Size};

/// Everything needed to build and run an artboard.
pub mod prelude {
    pub use figura_layout::{
        Alignment, Anchor, Artboard, ArtboardConfig, BoxLayer, BoxModelConfig, CircleSpec,
        Direction, ElementId, ElementKind, EstimatingMeasurer, Extent, GridSpec, GroupSpec,
        LayoutConfig, LayoutError, Point, PositionSpec, Rect, RectSpec, Sides, Size, StackSpec,
        TextMeasurer, TextSpec, TextStyle,
    };
}
