//! The text measurement backend and leaf intrinsic sizes.

use crate::LayoutError;
use crate::element::ElementKind;
use figura_style::{BoxModel, TextStyle};
use figura_types::Size;

/// Measures the intrinsic content size of a piece of text.
///
/// Supplied by the host environment. The engine treats it as a pure,
/// synchronous oracle and asks at most once per unmeasured text element per
/// invalidation.
pub trait TextMeasurer {
    fn measure_intrinsic_size(&self, content: &str, style: &TextStyle) -> Size;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &TextStyle) -> Size,
{
    fn measure_intrinsic_size(&self, content: &str, style: &TextStyle) -> Size {
        self(content, style)
    }
}

/// Average glyph metrics used by [`EstimatingMeasurer`], in ems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorMetrics {
    pub average_advance: f32,
    pub line_height: f32,
}

impl Default for EstimatorMetrics {
    fn default() -> Self {
        Self {
            average_advance: 0.6,
            line_height: 1.2,
        }
    }
}

/// Deterministic fallback backend for environments without font access.
///
/// Every character advances by the same fraction of the font size; lines are
/// split on `\n` only.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatingMeasurer {
    pub metrics: EstimatorMetrics,
}

impl EstimatingMeasurer {
    pub fn new(metrics: EstimatorMetrics) -> Self {
        Self { metrics }
    }
}

impl TextMeasurer for EstimatingMeasurer {
    fn measure_intrinsic_size(&self, content: &str, style: &TextStyle) -> Size {
        if content.is_empty() {
            return Size::zero();
        }
        let longest = content
            .split('\n')
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let lines = content.split('\n').count();
        let line_height = style
            .line_height
            .unwrap_or(style.font_size * self.metrics.line_height);
        Size::new(
            longest as f32 * style.font_size * self.metrics.average_advance,
            lines as f32 * line_height,
        )
    }
}

fn check_dimension(
    kind: &'static str,
    property: &'static str,
    value: f32,
) -> Result<f32, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension {
            kind,
            property,
            value,
        })
    }
}

/// Border-box size an element has before any measurement has run.
///
/// Leaves with a fixed geometry already know their size; text is zero until
/// measured; containers start at their fixed extents, or their insets on an
/// auto axis.
pub(crate) fn initial_size(kind: &ElementKind, box_model: &BoxModel) -> Result<Size, LayoutError> {
    let insets = box_model.content_insets();
    let size = match kind {
        ElementKind::Rect(r) => Size::new(
            check_dimension("Rect", "width", r.width)?,
            check_dimension("Rect", "height", r.height)?,
        ),
        ElementKind::Circle(c) => {
            let diameter = check_dimension("Circle", "radius", c.radius)? * 2.0;
            Size::new(diameter, diameter).expand(insets.horizontal(), insets.vertical())
        }
        ElementKind::Text(_) => Size::zero(),
        ElementKind::Grid(g) if g.columns == 0 => return Err(LayoutError::EmptyGrid),
        _ => {
            let (width, height) = kind.extents().unwrap_or_default();
            let width = width.validate("width")?;
            let height = height.validate("height")?;
            Size::new(
                width.fixed().unwrap_or(insets.horizontal()),
                height.fixed().unwrap_or(insets.vertical()),
            )
        }
    };
    if let ElementKind::Stack(s) = kind {
        check_dimension("Stack", "spacing", s.spacing)?;
    }
    if let ElementKind::Grid(g) = kind {
        check_dimension("Grid", "column gap", g.column_gap)?;
        check_dimension("Grid", "row gap", g.row_gap)?;
    }
    Ok(size)
}

/// Intrinsic border-box size of a leaf. Only text consults the backend.
pub(crate) fn leaf_size(
    kind: &ElementKind,
    box_model: &BoxModel,
    measurer: &dyn TextMeasurer,
) -> Result<Size, LayoutError> {
    match kind {
        ElementKind::Text(text) => {
            let insets = box_model.content_insets();
            let content = measurer.measure_intrinsic_size(&text.content, &text.style);
            Ok(Size::new(content.width.max(0.0), content.height.max(0.0))
                .expand(insets.horizontal(), insets.vertical()))
        }
        _ => initial_size(kind, box_model),
    }
}
