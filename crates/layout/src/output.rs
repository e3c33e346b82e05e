//! Output types from the layout engine.
//!
//! A `Placement` is everything a renderer needs to know about where an
//! element ended up; renderers never walk the tree themselves.

use crate::LayoutError;
use crate::tree::ElementTree;
use figura_style::BoxLayer;
use figura_types::{ElementId, Rect};
use serde::Serialize;

/// World-space geometry of one element after a completed pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub id: ElementId,
    pub kind: &'static str,
    pub border_box: Rect,
    pub content_box: Rect,
    /// Degrees, about the border-box center.
    pub rotation: f32,
    pub z_index: Option<i32>,
    /// Distance from the root; the root itself is 0.
    pub depth: usize,
}

impl ElementTree {
    /// Placements of the subtree under `root` in paint order: ascending
    /// z-index (unset counts as 0), ties broken by tree pre-order.
    ///
    /// Refuses to answer while any element is still dirty.
    pub fn placements(&self, root: ElementId) -> Result<Vec<Placement>, LayoutError> {
        if let Some(dirty) = self.first_dirty(root) {
            return Err(LayoutError::LayoutPending(dirty));
        }
        let base_depth = self.depth(root);
        let mut placements = self
            .pre_order(root)
            .into_iter()
            .map(|id| {
                let node = self.get(id)?;
                Ok(Placement {
                    id,
                    kind: node.kind().name(),
                    border_box: self.box_rect(id, BoxLayer::Border)?,
                    content_box: self.box_rect(id, BoxLayer::Content)?,
                    rotation: node.rotation(),
                    z_index: node.z_index(),
                    depth: self.depth(id) - base_depth,
                })
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;
        placements.sort_by_key(|p| p.z_index.unwrap_or(0));
        Ok(placements)
    }
}
