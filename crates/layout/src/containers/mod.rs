//! Container layout strategies.

pub mod freeform;
pub mod grid;
pub mod stack;

use crate::LayoutError;
use crate::element::{ElementKind, GridSpec, GroupSpec, StackSpec};
use crate::interface::LayoutStrategy;
use crate::tree::ElementTree;
use figura_style::{BoxLayer, Extent};
use figura_types::{ElementId, Size};

/// Copy of a container's spec, detached from the tree so the strategy can
/// run while the tree is borrowed mutably.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ContainerStrategy {
    Stack(StackSpec),
    Grid(GridSpec),
    Freeform(GroupSpec),
}

impl ContainerStrategy {
    pub(crate) fn of(kind: &ElementKind) -> Option<Self> {
        match kind {
            ElementKind::Stack(s) => Some(Self::Stack(*s)),
            ElementKind::Grid(g) => Some(Self::Grid(*g)),
            ElementKind::Group(g) | ElementKind::Artboard(g) => Some(Self::Freeform(*g)),
            _ => None,
        }
    }

    pub(crate) fn as_strategy(&self) -> &dyn LayoutStrategy {
        match self {
            Self::Stack(s) => s,
            Self::Grid(g) => g,
            Self::Freeform(g) => g,
        }
    }
}

/// Children of `id` paired with their margin-box sizes.
///
/// Every child must have been measured; reading a stale size here would be
/// an engine bug, not bad input.
pub(crate) fn child_margin_sizes(
    tree: &ElementTree,
    id: ElementId,
) -> Result<Vec<(ElementId, Size)>, LayoutError> {
    let children = tree.children(id)?;
    let mut sizes = Vec::with_capacity(children.len());
    for child in children {
        let node = tree.get(*child)?;
        debug_assert!(node.is_measured(), "{} read before measurement", child);
        if !node.is_measured() {
            return Err(LayoutError::StaleCache(*child));
        }
        sizes.push((*child, tree.box_size(*child, BoxLayer::Margin)?));
    }
    Ok(sizes)
}

/// Border-box length of one axis: the fixed value, or content plus insets.
pub(crate) fn resolve_axis(extent: Extent, content: f32, insets: f32) -> f32 {
    match extent {
        Extent::Fixed(v) => v,
        Extent::Auto => content + insets,
    }
}

pub(crate) fn log_degenerate(tree: &ElementTree, id: ElementId, extents: (Extent, Extent)) {
    if (extents.0.is_auto() || extents.1.is_auto())
        && tree.children(id).is_ok_and(|c| c.is_empty())
    {
        log::debug!("{} auto-sizes with no children; content size resolves to 0", id);
    }
}
