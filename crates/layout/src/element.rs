//! Element data stored in the arena and the closed set of element kinds.

use figura_style::{Alignment, BoxModel, Direction, Extent, TextStyle};
use figura_types::{ElementId, Point, Size};

/// Which point of an element "is" the element when it is moved without
/// naming an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    /// Content-box top-left corner (rectangles, text, containers).
    Corner,
    /// Content-box center (circles and other radial shapes).
    Center,
}

/// How an element treats the offsets of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutRole {
    /// Has no layout logic for children.
    Leaf,
    /// Assigns every child's offset itself (stacks, grids).
    Proactive,
    /// Keeps user-assigned child offsets and only sizes itself around them.
    Freeform,
}

/// Fixed border-box rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSpec {
    pub width: f32,
    pub height: f32,
}

impl RectSpec {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Circle whose content box is the bounding square of the circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSpec {
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub content: String,
    pub style: TextStyle,
}

impl TextSpec {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// Primary-axis stacking container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackSpec {
    pub direction: Direction,
    pub spacing: f32,
    /// Cross-axis alignment of every child inside the content box.
    pub alignment: Alignment,
    pub width: Extent,
    pub height: Extent,
}

impl StackSpec {
    pub fn vertical() -> Self {
        Self::new(Direction::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Direction::Horizontal)
    }

    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            spacing: 0.0,
            alignment: Alignment::Start,
            width: Extent::Auto,
            height: Extent::Auto,
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn width(mut self, width: impl Into<Extent>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Extent>) -> Self {
        self.height = height.into();
        self
    }
}

/// Row-major cell partitioning container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub columns: usize,
    pub column_gap: f32,
    pub row_gap: f32,
    pub horizontal: Alignment,
    pub vertical: Alignment,
    pub width: Extent,
    pub height: Extent,
}

impl GridSpec {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            column_gap: 0.0,
            row_gap: 0.0,
            horizontal: Alignment::Start,
            vertical: Alignment::Start,
            width: Extent::Auto,
            height: Extent::Auto,
        }
    }

    pub fn gaps(mut self, column_gap: f32, row_gap: f32) -> Self {
        self.column_gap = column_gap;
        self.row_gap = row_gap;
        self
    }

    pub fn align(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    pub fn width(mut self, width: impl Into<Extent>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Extent>) -> Self {
        self.height = height.into();
        self
    }
}

/// Freeform container: children keep their own offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupSpec {
    pub width: Extent,
    pub height: Extent,
}

impl GroupSpec {
    pub fn auto() -> Self {
        Self::default()
    }

    pub fn fixed(width: f32, height: f32) -> Self {
        Self {
            width: Extent::Fixed(width),
            height: Extent::Fixed(height),
        }
    }
}

/// The closed set of element kinds. Capabilities are answered by the
/// variant, never inferred from which fields happen to be present.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Rect(RectSpec),
    Circle(CircleSpec),
    Text(TextSpec),
    Stack(StackSpec),
    Grid(GridSpec),
    Group(GroupSpec),
    Artboard(GroupSpec),
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Rect(_) => "Rect",
            ElementKind::Circle(_) => "Circle",
            ElementKind::Text(_) => "Text",
            ElementKind::Stack(_) => "Stack",
            ElementKind::Grid(_) => "Grid",
            ElementKind::Group(_) => "Group",
            ElementKind::Artboard(_) => "Artboard",
        }
    }

    pub fn anchor_kind(&self) -> AnchorKind {
        match self {
            ElementKind::Circle(_) => AnchorKind::Center,
            _ => AnchorKind::Corner,
        }
    }

    pub fn role(&self) -> LayoutRole {
        match self {
            ElementKind::Rect(_) | ElementKind::Circle(_) | ElementKind::Text(_) => {
                LayoutRole::Leaf
            }
            ElementKind::Stack(_) | ElementKind::Grid(_) => LayoutRole::Proactive,
            ElementKind::Group(_) | ElementKind::Artboard(_) => LayoutRole::Freeform,
        }
    }

    /// Width/height extents of containers; `None` for leaves.
    pub fn extents(&self) -> Option<(Extent, Extent)> {
        match self {
            ElementKind::Stack(s) => Some((s.width, s.height)),
            ElementKind::Grid(g) => Some((g.width, g.height)),
            ElementKind::Group(g) | ElementKind::Artboard(g) => Some((g.width, g.height)),
            _ => None,
        }
    }
}

/// One node of the element tree.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) kind: ElementKind,
    pub(crate) box_model: BoxModel,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    /// Offset of the margin-box top-left from the parent's origin, or from
    /// the world origin for roots.
    pub(crate) offset: Point,
    pub(crate) rotation: f32,
    pub(crate) z_index: Option<i32>,
    pub(crate) escapes_layout: bool,
    pub(crate) measured: bool,
    pub(crate) laid_out: bool,
    /// Current border-box size.
    pub(crate) size: Size,
}

impl Element {
    pub(crate) fn new(id: ElementId, kind: ElementKind, box_model: BoxModel, size: Size) -> Self {
        Self {
            id,
            kind,
            box_model,
            parent: None,
            children: Vec::new(),
            offset: Point::ZERO,
            rotation: 0.0,
            z_index: None,
            escapes_layout: false,
            measured: false,
            laid_out: false,
            size,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn box_model(&self) -> &BoxModel {
        &self.box_model
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn z_index(&self) -> Option<i32> {
        self.z_index
    }

    pub fn escapes_layout(&self) -> bool {
        self.escapes_layout
    }

    pub fn is_measured(&self) -> bool {
        self.measured
    }

    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    pub fn is_dirty(&self) -> bool {
        !(self.measured && self.laid_out)
    }

    /// Border-box size as of the last completed phase.
    pub fn size(&self) -> Size {
        self.size
    }
}
