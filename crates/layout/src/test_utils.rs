use crate::element::{ElementKind, GridSpec, GroupSpec, RectSpec, StackSpec, TextSpec};
use crate::measure::TextMeasurer;
use crate::tree::ElementTree;
use figura_style::{BoxModel, TextStyle};
use figura_types::{ElementId, Size};
use std::cell::Cell;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Measures every character as 10x20 and counts how often it was asked.
#[derive(Debug, Default)]
pub struct CountingMeasurer {
    calls: Cell<usize>,
}

impl CountingMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TextMeasurer for CountingMeasurer {
    fn measure_intrinsic_size(&self, content: &str, _style: &TextStyle) -> Size {
        self.calls.set(self.calls.get() + 1);
        Size::new(content.chars().count() as f32 * 10.0, 20.0)
    }
}

pub fn rect(tree: &mut ElementTree, width: f32, height: f32) -> ElementId {
    tree.insert(ElementKind::Rect(RectSpec::new(width, height)), BoxModel::none())
        .unwrap()
}

pub fn text(tree: &mut ElementTree, content: &str) -> ElementId {
    tree.insert(ElementKind::Text(TextSpec::new(content)), BoxModel::none())
        .unwrap()
}

pub fn stack(tree: &mut ElementTree, spec: StackSpec) -> ElementId {
    tree.insert(ElementKind::Stack(spec), BoxModel::none()).unwrap()
}

pub fn grid(tree: &mut ElementTree, spec: GridSpec) -> ElementId {
    tree.insert(ElementKind::Grid(spec), BoxModel::none()).unwrap()
}

pub fn group(tree: &mut ElementTree) -> ElementId {
    tree.insert(ElementKind::Group(GroupSpec::auto()), BoxModel::none())
        .unwrap()
}

/// Attaches each child in order.
pub fn attach(tree: &mut ElementTree, parent: ElementId, children: &[ElementId]) {
    for child in children {
        tree.add_element(parent, *child).unwrap();
    }
}

/// Measures and lays out the subtree under `root`.
pub fn run(tree: &mut ElementTree, root: ElementId, measurer: &dyn TextMeasurer) {
    tree.measure_tree(root, measurer).unwrap();
    tree.layout_tree(root).unwrap();
}
