//! Box-model geometry and world-space resolution.
//!
//! Each element stores one canonical value: the offset of its margin-box
//! top-left corner from its parent's margin-box top-left corner. Everything
//! else (layer sizes, layer offsets, the nine anchor points, world
//! coordinates) is derived on every call from the current tree, so no read
//! can observe a position that a later mutation made stale.

use crate::LayoutError;
use crate::element::{AnchorKind, ElementKind};
use crate::tree::ElementTree;
use figura_style::{BoxLayer, BoxModel};
use figura_types::{ElementId, Point, Rect, Size};

/// One of the nine named points of a box layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::Center,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Position of the anchor as a fraction of the box size.
    pub fn fraction(self) -> (f32, f32) {
        match self {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::TopCenter => (0.5, 0.0),
            Anchor::TopRight => (1.0, 0.0),
            Anchor::CenterLeft => (0.0, 0.5),
            Anchor::Center => (0.5, 0.5),
            Anchor::CenterRight => (1.0, 0.5),
            Anchor::BottomLeft => (0.0, 1.0),
            Anchor::BottomCenter => (0.5, 1.0),
            Anchor::BottomRight => (1.0, 1.0),
        }
    }
}

/// One-shot movement instruction consumed by [`ElementTree::position`].
///
/// `relative_from` and `relative_to` are world points already resolved by
/// the caller; the element moves by `relative_to - relative_from + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSpec {
    pub relative_from: Point,
    pub relative_to: Point,
    pub x: f32,
    pub y: f32,
    /// Layer `relative_from` was read from, when the caller picked one.
    pub box_reference: Option<BoxLayer>,
}

impl PositionSpec {
    pub fn new(relative_from: Point, relative_to: Point) -> Self {
        Self {
            relative_from,
            relative_to,
            x: 0.0,
            y: 0.0,
            box_reference: None,
        }
    }

    /// Pure translation by `(x, y)`.
    pub fn by(x: f32, y: f32) -> Self {
        Self::new(Point::ZERO, Point::ZERO).offset(x, y)
    }

    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn box_reference(mut self, layer: BoxLayer) -> Self {
        self.box_reference = Some(layer);
        self
    }

    pub fn delta(&self) -> Point {
        self.relative_to - self.relative_from + Point::new(self.x, self.y)
    }
}

/// Rejects fixed border-box sizes that cannot hold border + padding.
pub(crate) fn check_box_fits(
    element: ElementId,
    kind: &ElementKind,
    box_model: &BoxModel,
) -> Result<(), LayoutError> {
    let (width, height) = match kind {
        ElementKind::Rect(r) => (Some(r.width), Some(r.height)),
        _ => match kind.extents() {
            Some((w, h)) => (w.fixed(), h.fixed()),
            None => (None, None),
        },
    };
    let insets = box_model.content_insets();
    let checks = [
        ("width", width, insets.horizontal()),
        ("height", height, insets.vertical()),
    ];
    for (axis, available, required) in checks {
        if let Some(available) = available
            && required > available
        {
            return Err(LayoutError::BoxModelOverflow {
                element,
                axis,
                required,
                available,
            });
        }
    }
    Ok(())
}

impl ElementTree {
    /// Size of one box layer. The border box is the element's stored size.
    pub fn box_size(&self, id: ElementId, layer: BoxLayer) -> Result<Size, LayoutError> {
        let node = self.get(id)?;
        let (dw, dh) = node.box_model.delta_from_border(layer);
        let size = node.size.expand(dw, dh);
        debug_assert!(
            size.width >= -0.001 && size.height >= -0.001,
            "negative {} box on {}",
            layer.as_str(),
            id
        );
        Ok(Size::new(size.width.max(0.0), size.height.max(0.0)))
    }

    /// Offset of `layer`'s top-left corner from the element's own origin.
    pub fn box_offset(&self, id: ElementId, layer: BoxLayer) -> Result<Point, LayoutError> {
        let (x, y) = self.get(id)?.box_model.offset_to(layer);
        Ok(Point::new(x, y))
    }

    /// World position of the element's origin (margin-box top-left).
    ///
    /// Walks the whole parent chain on every call.
    pub fn absolute_position(&self, id: ElementId) -> Result<Point, LayoutError> {
        let mut position = self.get(id)?.offset;
        for ancestor in self.ancestors(id) {
            position += self.get(ancestor)?.offset;
        }
        Ok(position)
    }

    /// World-space rectangle of one box layer.
    pub fn box_rect(&self, id: ElementId, layer: BoxLayer) -> Result<Rect, LayoutError> {
        let origin = self.absolute_position(id)? + self.box_offset(id, layer)?;
        Ok(Rect::from_origin_size(origin, self.box_size(id, layer)?))
    }

    /// World position of a named anchor. `None` selects the content box.
    pub fn anchor(
        &self,
        id: ElementId,
        anchor: Anchor,
        layer: Option<BoxLayer>,
    ) -> Result<Point, LayoutError> {
        let layer = layer.unwrap_or(BoxLayer::Content);
        let rect = self.box_rect(id, layer)?;
        let (fx, fy) = anchor.fraction();
        Ok(Point::new(
            rect.x + rect.width * fx,
            rect.y + rect.height * fy,
        ))
    }

    pub fn top_left(&self, id: ElementId) -> Result<Point, LayoutError> {
        self.anchor(id, Anchor::TopLeft, None)
    }

    pub fn center(&self, id: ElementId) -> Result<Point, LayoutError> {
        self.anchor(id, Anchor::Center, None)
    }

    pub fn bottom_right(&self, id: ElementId) -> Result<Point, LayoutError> {
        self.anchor(id, Anchor::BottomRight, None)
    }

    /// The anchor that stands for the element when none is named.
    pub fn default_anchor(&self, id: ElementId) -> Result<Anchor, LayoutError> {
        Ok(match self.get(id)?.kind.anchor_kind() {
            AnchorKind::Corner => Anchor::TopLeft,
            AnchorKind::Center => Anchor::Center,
        })
    }

    /// Moves the element by `spec.delta()`. Calls compose.
    ///
    /// A freeform parent has to re-derive its bounds, so the parent's layout
    /// is invalidated. Offsets inside proactive parents are overwritten by
    /// the next layout pass.
    pub fn position(&mut self, id: ElementId, spec: PositionSpec) -> Result<(), LayoutError> {
        let delta = spec.delta();
        let node = self.get_mut(id)?;
        node.offset += delta;
        let parent = node.parent;
        log::trace!(
            "Positioned {} by ({:.2}, {:.2}) against {} box",
            id,
            delta.x,
            delta.y,
            spec.box_reference.unwrap_or_default().as_str()
        );
        if let Some(parent) = parent {
            self.invalidate_layout(parent)?;
        }
        Ok(())
    }

    /// Moves the element so its `anchor` on `layer` lands on `target`.
    pub fn place(
        &mut self,
        id: ElementId,
        anchor: Anchor,
        layer: Option<BoxLayer>,
        target: Point,
    ) -> Result<(), LayoutError> {
        let from = self.anchor(id, anchor, layer)?;
        let mut spec = PositionSpec::new(from, target);
        if let Some(layer) = layer {
            spec = spec.box_reference(layer);
        }
        self.position(id, spec)
    }

    /// Moves the element so its default anchor lands on `target`.
    pub fn move_to(&mut self, id: ElementId, target: Point) -> Result<(), LayoutError> {
        let anchor = self.default_anchor(id)?;
        self.place(id, anchor, None, target)
    }

    /// Margin box of a child in its parent's frame.
    pub(crate) fn margin_rect_in_parent(&self, id: ElementId) -> Result<Rect, LayoutError> {
        let node = self.get(id)?;
        Ok(Rect::from_origin_size(
            node.offset,
            self.box_size(id, BoxLayer::Margin)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{CircleSpec, GroupSpec, RectSpec};
    use figura_style::{BoxModelConfig, Sides};

    fn boxed_rect(tree: &mut ElementTree) -> ElementId {
        let model = BoxModelConfig::new()
            .margin(5.0)
            .border(2.0)
            .padding("3px 4px")
            .resolve()
            .unwrap();
        tree.insert(ElementKind::Rect(RectSpec::new(100.0, 60.0)), model)
            .unwrap()
    }

    #[test]
    fn layer_sizes_nest() {
        let mut tree = ElementTree::new();
        let r = boxed_rect(&mut tree);
        assert_eq!(tree.box_size(r, BoxLayer::Border).unwrap(), Size::new(100.0, 60.0));
        assert_eq!(tree.box_size(r, BoxLayer::Padding).unwrap(), Size::new(96.0, 56.0));
        assert_eq!(tree.box_size(r, BoxLayer::Content).unwrap(), Size::new(88.0, 50.0));
        assert_eq!(tree.box_size(r, BoxLayer::Margin).unwrap(), Size::new(110.0, 70.0));
    }

    #[test]
    fn layer_offsets_sum_outer_thickness() {
        let mut tree = ElementTree::new();
        let r = boxed_rect(&mut tree);
        assert_eq!(tree.box_offset(r, BoxLayer::Margin).unwrap(), Point::new(0.0, 0.0));
        assert_eq!(tree.box_offset(r, BoxLayer::Border).unwrap(), Point::new(5.0, 5.0));
        assert_eq!(tree.box_offset(r, BoxLayer::Padding).unwrap(), Point::new(7.0, 7.0));
        assert_eq!(tree.box_offset(r, BoxLayer::Content).unwrap(), Point::new(11.0, 10.0));
    }

    #[test]
    fn default_anchors_use_content_box() {
        let mut tree = ElementTree::new();
        let r = boxed_rect(&mut tree);
        tree.position(r, PositionSpec::by(100.0, 200.0)).unwrap();

        assert_eq!(tree.top_left(r).unwrap(), Point::new(111.0, 210.0));
        assert_eq!(tree.bottom_right(r).unwrap(), Point::new(199.0, 260.0));
        assert_eq!(tree.center(r).unwrap(), Point::new(155.0, 235.0));
        assert_eq!(
            tree.anchor(r, Anchor::TopRight, Some(BoxLayer::Border)).unwrap(),
            Point::new(205.0, 205.0)
        );
        assert_eq!(
            tree.anchor(r, Anchor::BottomCenter, Some(BoxLayer::Margin)).unwrap(),
            Point::new(155.0, 270.0)
        );
    }

    #[test]
    fn absolute_position_tracks_ancestor_moves() {
        let mut tree = ElementTree::new();
        let outer = tree
            .insert(ElementKind::Group(GroupSpec::auto()), BoxModel::none())
            .unwrap();
        let inner = tree
            .insert(ElementKind::Group(GroupSpec::auto()), BoxModel::none())
            .unwrap();
        let leaf = tree
            .insert(ElementKind::Rect(RectSpec::new(1.0, 1.0)), BoxModel::none())
            .unwrap();
        tree.add_element(outer, inner).unwrap();
        tree.add_element(inner, leaf).unwrap();

        tree.position(leaf, PositionSpec::by(1.0, 1.0)).unwrap();
        tree.position(inner, PositionSpec::by(10.0, 10.0)).unwrap();
        assert_eq!(tree.absolute_position(leaf).unwrap(), Point::new(11.0, 11.0));

        tree.position(outer, PositionSpec::by(100.0, 0.0)).unwrap();
        assert_eq!(tree.absolute_position(leaf).unwrap(), Point::new(111.0, 11.0));
    }

    #[test]
    fn position_composes_rather_than_overwrites() {
        let mut tree = ElementTree::new();
        let r = boxed_rect(&mut tree);
        let spec =
            PositionSpec::new(Point::new(10.0, 10.0), Point::new(30.0, 15.0)).offset(1.0, 2.0);
        tree.position(r, spec).unwrap();
        tree.position(r, spec).unwrap();
        assert_eq!(tree.get(r).unwrap().offset(), Point::new(42.0, 14.0));
    }

    #[test]
    fn place_aligns_named_anchor_with_target() {
        let mut tree = ElementTree::new();
        let a = boxed_rect(&mut tree);
        let b = boxed_rect(&mut tree);
        let target = tree.anchor(a, Anchor::BottomRight, Some(BoxLayer::Margin)).unwrap();
        tree.place(b, Anchor::TopLeft, Some(BoxLayer::Margin), target).unwrap();
        assert_eq!(
            tree.anchor(b, Anchor::TopLeft, Some(BoxLayer::Margin)).unwrap(),
            Point::new(110.0, 70.0)
        );
    }

    #[test]
    fn circles_move_by_their_center() {
        let mut tree = ElementTree::new();
        let c = tree
            .insert(ElementKind::Circle(CircleSpec { radius: 10.0 }), BoxModel::none())
            .unwrap();
        tree.move_to(c, Point::new(50.0, 50.0)).unwrap();
        assert_eq!(tree.center(c).unwrap(), Point::new(50.0, 50.0));
        assert_eq!(tree.absolute_position(c).unwrap(), Point::new(40.0, 40.0));
    }

    #[test]
    fn oversized_box_model_is_rejected() {
        let mut tree = ElementTree::new();
        let model = BoxModel::none()
            .with_border(Sides::all(10.0))
            .with_padding(Sides::x(20.0));
        let err = tree
            .insert(ElementKind::Rect(RectSpec::new(50.0, 100.0)), model)
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::BoxModelOverflow {
                element: ElementId::from_index(0),
                axis: "width",
                required: 60.0,
                available: 50.0
            }
        );
        assert!(tree.is_empty());
    }
}
