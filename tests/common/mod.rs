pub mod fixtures;

use figura::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Backend that returns 8px per character and 16px per line, and counts how
/// often it was asked. The counter is shared so tests can read it after the
/// backend moved into an artboard.
#[derive(Debug, Clone, Default)]
pub struct FixedMeasurer {
    pub calls: Rc<Cell<usize>>,
}

impl FixedMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl TextMeasurer for FixedMeasurer {
    fn measure_intrinsic_size(&self, content: &str, _style: &TextStyle) -> Size {
        self.calls.set(self.calls.get() + 1);
        let lines = content.split('\n');
        let width = lines.clone().map(|l| l.chars().count()).max().unwrap_or(0);
        Size::new(width as f32 * 8.0, lines.count() as f32 * 16.0)
    }
}

/// Artboard with the given config and a [`FixedMeasurer`].
pub fn artboard(config: ArtboardConfig) -> Result<Artboard, LayoutError> {
    Artboard::new(config, Box::new(FixedMeasurer::new()))
}

/// Asserts two points are equal to within rounding.
#[macro_export]
macro_rules! assert_point_eq {
    ($actual:expr, $expected:expr) => {{
        let (actual, expected): (figura::Point, figura::Point) = ($actual, $expected);
        assert!(
            actual.approx_eq(expected),
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }};
}
