//! Margin / border / padding model and its unresolved configuration.
use crate::parsers::StyleParseError;
use crate::spacing::{Sides, SpacingSpec};
use serde::{Deserialize, Serialize};

/// Selects one layer of the box model, outermost first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum BoxLayer {
    Margin,
    Border,
    Padding,
    #[default]
    Content,
}

impl BoxLayer {
    pub const ALL: [BoxLayer; 4] = [
        BoxLayer::Margin,
        BoxLayer::Border,
        BoxLayer::Padding,
        BoxLayer::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoxLayer::Margin => "margin",
            BoxLayer::Border => "border",
            BoxLayer::Padding => "padding",
            BoxLayer::Content => "content",
        }
    }
}

/// Resolved pixel thickness of every box layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct BoxModel {
    pub margin: Sides,
    pub border: Sides,
    pub padding: Sides,
}

impl BoxModel {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: Sides) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_border(mut self, border: Sides) -> Self {
        self.border = border;
        self
    }

    pub fn with_margin(mut self, margin: Sides) -> Self {
        self.margin = margin;
        self
    }

    pub fn padding_x(&self) -> f32 {
        self.padding.horizontal()
    }

    pub fn padding_y(&self) -> f32 {
        self.padding.vertical()
    }

    pub fn border_x(&self) -> f32 {
        self.border.horizontal()
    }

    pub fn border_y(&self) -> f32 {
        self.border.vertical()
    }

    /// Thickness between the border-box edge and the content box.
    pub fn content_insets(&self) -> Sides {
        self.border.sum(&self.padding)
    }

    /// Offset of `layer`'s top-left corner from the margin-box top-left.
    pub fn offset_to(&self, layer: BoxLayer) -> (f32, f32) {
        let mut left = 0.0;
        let mut top = 0.0;
        let outer = [
            (BoxLayer::Border, &self.margin),
            (BoxLayer::Padding, &self.border),
            (BoxLayer::Content, &self.padding),
        ];
        for (inner_layer, sides) in outer {
            if layer_depth(layer) < layer_depth(inner_layer) {
                break;
            }
            left += sides.left;
            top += sides.top;
        }
        (left, top)
    }

    /// Width/height change when going from the border box to `layer`.
    /// Positive for the margin box, negative for inner layers.
    pub fn delta_from_border(&self, layer: BoxLayer) -> (f32, f32) {
        match layer {
            BoxLayer::Margin => (self.margin.horizontal(), self.margin.vertical()),
            BoxLayer::Border => (0.0, 0.0),
            BoxLayer::Padding => (-self.border_x(), -self.border_y()),
            BoxLayer::Content => (
                -(self.border_x() + self.padding_x()),
                -(self.border_y() + self.padding_y()),
            ),
        }
    }
}

fn layer_depth(layer: BoxLayer) -> u8 {
    match layer {
        BoxLayer::Margin => 0,
        BoxLayer::Border => 1,
        BoxLayer::Padding => 2,
        BoxLayer::Content => 3,
    }
}

/// Box model as configured by the user. Resolved once, when the element is
/// created or the box model is replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxModelConfig {
    #[serde(default)]
    pub margin: Option<SpacingSpec>,
    #[serde(default)]
    pub border: Option<SpacingSpec>,
    #[serde(default)]
    pub padding: Option<SpacingSpec>,
}

impl BoxModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn margin(mut self, spec: impl Into<SpacingSpec>) -> Self {
        self.margin = Some(spec.into());
        self
    }

    pub fn border(mut self, spec: impl Into<SpacingSpec>) -> Self {
        self.border = Some(spec.into());
        self
    }

    pub fn padding(mut self, spec: impl Into<SpacingSpec>) -> Self {
        self.padding = Some(spec.into());
        self
    }

    pub fn resolve(&self) -> Result<BoxModel, StyleParseError> {
        let side = |spec: &Option<SpacingSpec>, property: &str| {
            spec.as_ref()
                .map_or(Ok(Sides::ZERO), |s| s.resolve(property))
        };
        Ok(BoxModel {
            margin: side(&self.margin, "margin")?,
            border: side(&self.border, "border")?,
            padding: side(&self.padding, "padding")?,
        })
    }
}

impl From<BoxModel> for BoxModelConfig {
    fn from(model: BoxModel) -> Self {
        Self {
            margin: Some(model.margin.into()),
            border: Some(model.border.into()),
            padding: Some(model.padding.into()),
        }
    }
}
