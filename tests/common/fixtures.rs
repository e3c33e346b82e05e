use figura::prelude::*;
use serde_json::{Value, json};

/// 800x600 artboard with 40px padding on every side.
pub fn padded_artboard_config() -> Value {
    json!({
        "width": 800,
        "height": 600,
        "boxModel": { "padding": 40 }
    })
}

/// Artboard whose box model mixes units and shorthand forms.
pub fn mixed_units_config() -> Value {
    json!({
        "width": "10in",
        "height": "auto",
        "boxModel": {
            "margin": "0.5in",
            "border": { "top": "3pt", "right": 2, "bottom": "3pt", "left": "2px" },
            "padding": "1cm 5mm"
        },
        "layout": { "defaultSpacing": 12, "verifyTree": true }
    })
}

pub fn parse_config(value: Value) -> ArtboardConfig {
    serde_json::from_value(value).unwrap()
}

/// The two rectangles from the reference stacking scenario: 100x50 and
/// 150x80, stacked vertically 20px apart.
pub fn reference_stack(
    board: &mut Artboard,
) -> Result<(ElementId, ElementId, ElementId), LayoutError> {
    let root = board.root();
    let stack = board.add_stack(root, StackSpec::vertical().spacing(20.0))?;
    let first = board.add_rect(stack, 100.0, 50.0)?;
    let second = board.add_rect(stack, 150.0, 80.0)?;
    Ok((stack, first, second))
}
