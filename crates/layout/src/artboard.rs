//! The root container and the pipeline that drives the element tree.
//!
//! An `Artboard` owns the arena, the root element and the measurement
//! backend. Elements are created detached through its factory methods and
//! attached explicitly; there is no ambient "current artboard".

use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::element::{CircleSpec, ElementKind, GridSpec, GroupSpec, RectSpec, StackSpec, TextSpec};
use crate::geometry::{Anchor, PositionSpec};
use crate::measure::TextMeasurer;
use crate::output::Placement;
use crate::tree::ElementTree;
use figura_style::{BoxLayer, BoxModelConfig, Direction, Extent};
use figura_types::{ElementId, Point, Size};
use serde::Deserialize;
use std::time::Instant;

/// Root size, root box model and pipeline settings.
///
/// Every field is optional when deserialized; missing extents are `auto`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtboardConfig {
    pub width: Extent,
    pub height: Extent,
    pub box_model: BoxModelConfig,
    pub layout: LayoutConfig,
}

impl ArtboardConfig {
    pub fn fixed(width: f32, height: f32) -> Self {
        Self {
            width: Extent::Fixed(width),
            height: Extent::Fixed(height),
            ..Self::default()
        }
    }

    pub fn with_box_model(mut self, box_model: BoxModelConfig) -> Self {
        self.box_model = box_model;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}

pub struct Artboard {
    tree: ElementTree,
    root: ElementId,
    measurer: Box<dyn TextMeasurer>,
    config: LayoutConfig,
}

impl Artboard {
    pub fn new(
        config: ArtboardConfig,
        measurer: Box<dyn TextMeasurer>,
    ) -> Result<Self, LayoutError> {
        let mut tree = ElementTree::new();
        let box_model = config.box_model.resolve()?;
        let root = tree.insert(
            ElementKind::Artboard(GroupSpec {
                width: config.width,
                height: config.height,
            }),
            box_model,
        )?;
        Ok(Self {
            tree,
            root,
            measurer,
            config: config.layout,
        })
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    // --- Factories (detached elements) ---

    pub fn create(
        &mut self,
        kind: ElementKind,
        box_model: &BoxModelConfig,
    ) -> Result<ElementId, LayoutError> {
        let model = box_model.resolve()?;
        self.tree.insert(kind, model)
    }

    pub fn create_rect(
        &mut self,
        width: f32,
        height: f32,
        box_model: &BoxModelConfig,
    ) -> Result<ElementId, LayoutError> {
        self.create(ElementKind::Rect(RectSpec::new(width, height)), box_model)
    }

    pub fn create_circle(
        &mut self,
        radius: f32,
        box_model: &BoxModelConfig,
    ) -> Result<ElementId, LayoutError> {
        self.create(ElementKind::Circle(CircleSpec { radius }), box_model)
    }

    pub fn create_text(
        &mut self,
        text: TextSpec,
        box_model: &BoxModelConfig,
    ) -> Result<ElementId, LayoutError> {
        self.create(ElementKind::Text(text), box_model)
    }

    pub fn create_stack(
        &mut self,
        spec: StackSpec,
        box_model: &BoxModelConfig,
    ) -> Result<ElementId, LayoutError> {
        self.create(ElementKind::Stack(spec), box_model)
    }

    pub fn create_grid(
        &mut self,
        spec: GridSpec,
        box_model: &BoxModelConfig,
    ) -> Result<ElementId, LayoutError> {
        self.create(ElementKind::Grid(spec), box_model)
    }

    pub fn create_group(
        &mut self,
        spec: GroupSpec,
        box_model: &BoxModelConfig,
    ) -> Result<ElementId, LayoutError> {
        self.create(ElementKind::Group(spec), box_model)
    }

    /// Auto-sized stack using the configured default spacing.
    pub fn stack(&mut self, direction: Direction) -> Result<ElementId, LayoutError> {
        let spec = StackSpec::new(direction).spacing(self.config.default_spacing);
        self.create_stack(spec, &BoxModelConfig::default())
    }

    /// Creates an element and attaches it under `parent` in one step.
    /// Returns the new element's id.
    pub fn add(
        &mut self,
        parent: ElementId,
        kind: ElementKind,
        box_model: &BoxModelConfig,
    ) -> Result<ElementId, LayoutError> {
        let id = self.create(kind, box_model)?;
        self.tree.add_element(parent, id)?;
        Ok(id)
    }

    pub fn add_rect(
        &mut self,
        parent: ElementId,
        width: f32,
        height: f32,
    ) -> Result<ElementId, LayoutError> {
        self.add(
            parent,
            ElementKind::Rect(RectSpec::new(width, height)),
            &BoxModelConfig::default(),
        )
    }

    pub fn add_circle(&mut self, parent: ElementId, radius: f32) -> Result<ElementId, LayoutError> {
        self.add(parent, ElementKind::Circle(CircleSpec { radius }), &BoxModelConfig::default())
    }

    pub fn add_text(
        &mut self,
        parent: ElementId,
        text: TextSpec,
    ) -> Result<ElementId, LayoutError> {
        self.add(parent, ElementKind::Text(text), &BoxModelConfig::default())
    }

    pub fn add_stack(
        &mut self,
        parent: ElementId,
        spec: StackSpec,
    ) -> Result<ElementId, LayoutError> {
        self.add(parent, ElementKind::Stack(spec), &BoxModelConfig::default())
    }

    pub fn add_grid(
        &mut self,
        parent: ElementId,
        spec: GridSpec,
    ) -> Result<ElementId, LayoutError> {
        self.add(parent, ElementKind::Grid(spec), &BoxModelConfig::default())
    }

    pub fn add_group(
        &mut self,
        parent: ElementId,
        spec: GroupSpec,
    ) -> Result<ElementId, LayoutError> {
        self.add(parent, ElementKind::Group(spec), &BoxModelConfig::default())
    }

    // --- Tree & geometry passthroughs ---

    pub fn add_element(
        &mut self,
        parent: ElementId,
        child: ElementId,
    ) -> Result<ElementId, LayoutError> {
        self.tree.add_element(parent, child)
    }

    pub fn remove_element(
        &mut self,
        parent: ElementId,
        child: ElementId,
    ) -> Result<(), LayoutError> {
        self.tree.remove_element(parent, child)
    }

    pub fn position(&mut self, id: ElementId, spec: PositionSpec) -> Result<(), LayoutError> {
        self.tree.position(id, spec)
    }

    pub fn place(
        &mut self,
        id: ElementId,
        anchor: Anchor,
        layer: Option<BoxLayer>,
        target: Point,
    ) -> Result<(), LayoutError> {
        self.tree.place(id, anchor, layer, target)
    }

    pub fn move_to(&mut self, id: ElementId, target: Point) -> Result<(), LayoutError> {
        self.tree.move_to(id, target)
    }

    /// Flags an element to bypass proactive containers when it is attached.
    pub fn set_escapes_layout(&mut self, id: ElementId, escapes: bool) -> Result<(), LayoutError> {
        self.tree.set_escapes_layout(id, escapes)
    }

    pub fn anchor(
        &self,
        id: ElementId,
        anchor: Anchor,
        layer: Option<BoxLayer>,
    ) -> Result<Point, LayoutError> {
        self.tree.anchor(id, anchor, layer)
    }

    pub fn absolute_position(&self, id: ElementId) -> Result<Point, LayoutError> {
        self.tree.absolute_position(id)
    }

    pub fn box_size(&self, id: ElementId, layer: BoxLayer) -> Result<Size, LayoutError> {
        self.tree.box_size(id, layer)
    }

    pub fn box_offset(&self, id: ElementId, layer: BoxLayer) -> Result<Point, LayoutError> {
        self.tree.box_offset(id, layer)
    }

    // --- Pipeline ---

    /// Measure-all, then layout-all, then final root size.
    ///
    /// Running again without intervening mutation does no work.
    pub fn run(&mut self) -> Result<Size, LayoutError> {
        let started = Instant::now();
        self.tree.measure_tree(self.root, self.measurer.as_ref())?;
        let measured = started.elapsed();

        self.tree.layout_tree(self.root)?;
        let size = self.tree.get(self.root)?.size();
        log::debug!(
            "Artboard pipeline over {} elements: measure {:?}, layout {:?}, size {:.1}x{:.1}",
            self.tree.len(),
            measured,
            started.elapsed() - measured,
            size.width,
            size.height
        );

        if self.config.verify_tree {
            self.tree.validate()?;
        }
        Ok(size)
    }

    /// Paint-ordered geometry for a renderer. Fails while layout is pending.
    pub fn placements(&self) -> Result<Vec<Placement>, LayoutError> {
        self.tree.placements(self.root)
    }
}

impl std::fmt::Debug for Artboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artboard")
            .field("root", &self.root)
            .field("elements", &self.tree.len())
            .field("config", &self.config)
            .finish()
    }
}
