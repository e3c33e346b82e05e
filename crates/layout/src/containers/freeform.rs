//! Freeform containers: children keep their own offsets and the container
//! sizes itself around them.
//!
//! On an auto axis the container normalizes its bounds: when the union of
//! its children's margin boxes starts before its content-box origin, the
//! container's own offset moves back by the overhang and every child's offset
//! moves forward by the same amount. Net world positions of the children do
//! not change, and a second pass finds nothing to shift.
//!
//! A container whose parent is proactive does not own its offset, so it
//! cannot move back. It leaves its children where they are and lets them
//! overhang its leading edge instead.

use super::{child_margin_sizes, log_degenerate, resolve_axis};
use crate::LayoutError;
use crate::element::{GroupSpec, LayoutRole};
use crate::interface::LayoutStrategy;
use crate::tree::ElementTree;
use figura_style::BoxLayer;
use figura_types::{ElementId, Point, Rect, Size};

impl GroupSpec {
    fn children_bounds(
        &self,
        tree: &ElementTree,
        id: ElementId,
    ) -> Result<Option<Rect>, LayoutError> {
        let mut bounds: Option<Rect> = None;
        for child in tree.children(id)? {
            let rect = tree.margin_rect_in_parent(*child)?;
            bounds = Some(bounds.map_or(rect, |b| b.union(rect)));
        }
        Ok(bounds)
    }
}

/// True when a stack or grid above `id` assigns its offset.
fn offset_owned_by_parent(tree: &ElementTree, id: ElementId) -> Result<bool, LayoutError> {
    match tree.parent(id)? {
        Some(parent) => Ok(tree.get(parent)?.kind().role() == LayoutRole::Proactive),
        None => Ok(false),
    }
}

impl LayoutStrategy for GroupSpec {
    fn role(&self) -> LayoutRole {
        LayoutRole::Freeform
    }

    /// Positions are off limits during measurement, so the provisional size
    /// assumes every child sits at the content origin. Layout replaces it.
    fn measure(&self, tree: &ElementTree, id: ElementId) -> Result<Size, LayoutError> {
        let sizes = child_margin_sizes(tree, id)?;
        let content = sizes.iter().fold(Size::zero(), |acc, (_, s)| {
            Size::new(acc.width.max(s.width), acc.height.max(s.height))
        });
        let insets = tree.get(id)?.box_model().content_insets();
        Ok(Size::new(
            resolve_axis(self.width, content.width, insets.horizontal()),
            resolve_axis(self.height, content.height, insets.vertical()),
        ))
    }

    fn layout(&self, tree: &mut ElementTree, id: ElementId) -> Result<Size, LayoutError> {
        log_degenerate(tree, id, (self.width, self.height));
        child_margin_sizes(tree, id)?;

        let model = *tree.get(id)?.box_model();
        let origin = tree.box_offset(id, BoxLayer::Content)?;

        let Some(bounds) = self.children_bounds(tree, id)? else {
            let insets = model.content_insets();
            return Ok(Size::new(
                resolve_axis(self.width, 0.0, insets.horizontal()),
                resolve_axis(self.height, 0.0, insets.vertical()),
            ));
        };

        let overhang = Point::new(
            if self.width.is_auto() {
                (bounds.x - origin.x).min(0.0)
            } else {
                0.0
            },
            if self.height.is_auto() {
                (bounds.y - origin.y).min(0.0)
            } else {
                0.0
            },
        );

        let shift = if overhang == Point::ZERO {
            Point::ZERO
        } else if offset_owned_by_parent(tree, id)? {
            log::debug!(
                "Children overhang {} by ({:.2}, {:.2}); its parent owns the offset",
                id,
                -overhang.x,
                -overhang.y
            );
            Point::ZERO
        } else {
            log::debug!("Normalizing {} by ({:.2}, {:.2})", id, overhang.x, overhang.y);
            tree.get_mut(id)?.offset += overhang;
            let children = tree.children(id)?.to_vec();
            for child in children {
                tree.get_mut(child)?.offset -= overhang;
            }
            overhang
        };

        let bounds = bounds.translate(-shift);
        // The border box spans from the margin edge to the far content edge
        // plus trailing padding and border.
        let width = bounds.right() + model.padding.right + model.border.right - model.margin.left;
        let height =
            bounds.bottom() + model.padding.bottom + model.border.bottom - model.margin.top;
        Ok(Size::new(
            self.width
                .fixed()
                .unwrap_or(width.max(model.content_insets().horizontal())),
            self.height
                .fixed()
                .unwrap_or(height.max(model.content_insets().vertical())),
        ))
    }
}
