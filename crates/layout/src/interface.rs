use crate::LayoutError;
use crate::element::LayoutRole;
use crate::tree::ElementTree;
use figura_types::{ElementId, Size};
use std::fmt::Debug;

/// Sizing and placement logic of a container kind.
///
/// Both hooks are only ever called by the phase system, after the same
/// phase has completed for every child of `id`.
pub trait LayoutStrategy: Debug {
    fn role(&self) -> LayoutRole;

    /// Intrinsic border-box size from the children's measured sizes.
    /// Must not read any position.
    fn measure(&self, tree: &ElementTree, id: ElementId) -> Result<Size, LayoutError>;

    /// Assigns child offsets (proactive) or re-bases them (freeform) and
    /// returns the element's final border-box size.
    fn layout(&self, tree: &mut ElementTree, id: ElementId) -> Result<Size, LayoutError>;
}
