//! Setters for element properties.
//!
//! Anything that feeds sizing goes through `invalidate_measurement` before
//! returning. Presentation-only values (rotation, z-index) leave every cache
//! alone.

use crate::LayoutError;
use crate::element::ElementKind;
use crate::geometry::check_box_fits;
use crate::measure::initial_size;
use crate::tree::ElementTree;
use figura_style::{BoxModel, BoxModelConfig, Extent, TextStyle};
use figura_types::ElementId;

impl ElementTree {
    /// Replaces the text of a text element.
    pub fn set_text(
        &mut self,
        id: ElementId,
        content: impl Into<String>,
    ) -> Result<(), LayoutError> {
        match &mut self.get_mut(id)?.kind {
            ElementKind::Text(text) => text.content = content.into(),
            _ => return Err(LayoutError::KindMismatch(id, "Text")),
        }
        self.invalidate_measurement(id)
    }

    pub fn set_text_style(&mut self, id: ElementId, style: TextStyle) -> Result<(), LayoutError> {
        match &mut self.get_mut(id)?.kind {
            ElementKind::Text(text) => text.style = style,
            _ => return Err(LayoutError::KindMismatch(id, "Text")),
        }
        self.invalidate_measurement(id)
    }

    /// Changes the border-box size of a rectangle or the extents of a
    /// container. Validated against the box model before anything changes.
    pub fn resize(
        &mut self,
        id: ElementId,
        width: Extent,
        height: Extent,
    ) -> Result<(), LayoutError> {
        let node = self.get(id)?;
        let box_model = node.box_model;
        let mut kind = node.kind.clone();
        match &mut kind {
            ElementKind::Rect(r) => match (width, height) {
                (Extent::Fixed(w), Extent::Fixed(h)) => {
                    r.width = w;
                    r.height = h;
                }
                _ => return Err(LayoutError::KindMismatch(id, "container")),
            },
            ElementKind::Stack(s) => {
                s.width = width;
                s.height = height;
            }
            ElementKind::Grid(g) => {
                g.width = width;
                g.height = height;
            }
            ElementKind::Group(g) | ElementKind::Artboard(g) => {
                g.width = width;
                g.height = height;
            }
            _ => return Err(LayoutError::KindMismatch(id, "Rect or container")),
        }
        self.replace_sizing(id, kind, box_model)
    }

    /// Re-resolves and replaces the box model.
    pub fn set_box_model(
        &mut self,
        id: ElementId,
        config: &BoxModelConfig,
    ) -> Result<(), LayoutError> {
        let model = config.resolve()?;
        let kind = self.get(id)?.kind.clone();
        self.replace_sizing(id, kind, model)
    }

    pub fn set_stack_spacing(&mut self, id: ElementId, spacing: f32) -> Result<(), LayoutError> {
        let mut kind = self.get(id)?.kind.clone();
        match &mut kind {
            ElementKind::Stack(s) => s.spacing = spacing,
            _ => return Err(LayoutError::KindMismatch(id, "Stack")),
        }
        let model = self.get(id)?.box_model;
        self.replace_sizing(id, kind, model)
    }

    fn replace_sizing(
        &mut self,
        id: ElementId,
        kind: ElementKind,
        box_model: BoxModel,
    ) -> Result<(), LayoutError> {
        let size = initial_size(&kind, &box_model)?;
        check_box_fits(id, &kind, &box_model)?;
        let node = self.get_mut(id)?;
        if !matches!(kind, ElementKind::Text(_)) {
            node.size = size;
        }
        node.kind = kind;
        node.box_model = box_model;
        self.invalidate_measurement(id)
    }

    /// Rotation in degrees. Carried through to placements; does not affect
    /// layout.
    pub fn set_rotation(&mut self, id: ElementId, degrees: f32) -> Result<(), LayoutError> {
        self.get_mut(id)?.rotation = degrees;
        Ok(())
    }

    pub fn set_z_index(&mut self, id: ElementId, z_index: Option<i32>) -> Result<(), LayoutError> {
        self.get_mut(id)?.z_index = z_index;
        Ok(())
    }

    /// Marks the element as escaping proactive layouts. Takes effect on the
    /// next `add_element`.
    pub fn set_escapes_layout(&mut self, id: ElementId, escapes: bool) -> Result<(), LayoutError> {
        self.get_mut(id)?.escapes_layout = escapes;
        Ok(())
    }
}
