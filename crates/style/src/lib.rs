pub mod align;
pub mod box_model;
pub mod extent;
pub mod parsers;
pub mod spacing;
pub mod text;

pub use align::{Alignment, Direction};
pub use box_model::{BoxLayer, BoxModel, BoxModelConfig};
pub use extent::Extent;
pub use parsers::StyleParseError;
pub use spacing::{LengthSpec, Sides, SpacingSpec};
pub use text::{FontWeight, TextStyle};
