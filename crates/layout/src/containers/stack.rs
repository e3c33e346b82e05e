use super::{child_margin_sizes, log_degenerate, resolve_axis};
use crate::LayoutError;
use crate::element::{LayoutRole, StackSpec};
use crate::interface::LayoutStrategy;
use crate::tree::ElementTree;
use figura_style::{BoxLayer, Direction};
use figura_types::{ElementId, Point, Size};

impl StackSpec {
    /// Content size needed to stack `sizes` without overlap.
    fn natural_content(&self, sizes: &[(ElementId, Size)]) -> Size {
        let gaps = self.spacing * sizes.len().saturating_sub(1) as f32;
        let (main, cross) = sizes.iter().fold((0.0f32, 0.0f32), |(main, cross), (_, s)| {
            let (m, c) = self.split(*s);
            (main + m, cross.max(c))
        });
        self.join(main + gaps, cross)
    }

    /// (primary, cross) lengths of a size.
    fn split(&self, size: Size) -> (f32, f32) {
        match self.direction {
            Direction::Vertical => (size.height, size.width),
            Direction::Horizontal => (size.width, size.height),
        }
    }

    fn join(&self, main: f32, cross: f32) -> Size {
        match self.direction {
            Direction::Vertical => Size::new(cross, main),
            Direction::Horizontal => Size::new(main, cross),
        }
    }

    fn border_size(
        &self,
        tree: &ElementTree,
        id: ElementId,
        content: Size,
    ) -> Result<Size, LayoutError> {
        let insets = tree.get(id)?.box_model().content_insets();
        Ok(Size::new(
            resolve_axis(self.width, content.width, insets.horizontal()),
            resolve_axis(self.height, content.height, insets.vertical()),
        ))
    }
}

impl LayoutStrategy for StackSpec {
    fn role(&self) -> LayoutRole {
        LayoutRole::Proactive
    }

    fn measure(&self, tree: &ElementTree, id: ElementId) -> Result<Size, LayoutError> {
        let sizes = child_margin_sizes(tree, id)?;
        self.border_size(tree, id, self.natural_content(&sizes))
    }

    fn layout(&self, tree: &mut ElementTree, id: ElementId) -> Result<Size, LayoutError> {
        log_degenerate(tree, id, (self.width, self.height));
        let sizes = child_margin_sizes(tree, id)?;
        let size = self.border_size(tree, id, self.natural_content(&sizes))?;

        let insets = tree.get(id)?.box_model().content_insets();
        let content = Size::new(
            (size.width - insets.horizontal()).max(0.0),
            (size.height - insets.vertical()).max(0.0),
        );
        let (_, content_cross) = self.split(content);
        let origin = tree.box_offset(id, BoxLayer::Content)?;

        let mut cursor = 0.0;
        for (child, child_size) in sizes {
            let (main, cross) = self.split(child_size);
            let cross_offset = self.alignment.offset(content_cross, cross);
            let local = match self.direction {
                Direction::Vertical => Point::new(cross_offset, cursor),
                Direction::Horizontal => Point::new(cursor, cross_offset),
            };
            tree.get_mut(child)?.offset = origin + local;
            cursor += main + self.spacing;
        }
        Ok(size)
    }
}
