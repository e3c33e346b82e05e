//! Four-sided spacing values and their configuration forms.
use crate::parsers::{StyleParseError, check_pixels, parse_shorthand_sides, resolve_length};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Resolved pixel thickness for each side of a box layer.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Sides {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Hash for Sides {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.top.to_bits().hash(state);
        self.right.to_bits().hash(state);
        self.bottom.to_bits().hash(state);
        self.left.to_bits().hash(state);
    }
}

impl Eq for Sides {}

impl Sides {
    pub const ZERO: Sides = Sides {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn x(value: f32) -> Self {
        Self::new(0.0, value, 0.0, value)
    }

    pub fn y(value: f32) -> Self {
        Self::new(value, 0.0, value, 0.0)
    }

    /// left + right
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// top + bottom
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Adds two side sets component-wise.
    pub fn sum(&self, other: &Sides) -> Sides {
        Sides::new(
            self.top + other.top,
            self.right + other.right,
            self.bottom + other.bottom,
            self.left + other.left,
        )
    }

    /// Checks every side is finite and non-negative.
    pub fn validate(self, property: &str) -> Result<Self, StyleParseError> {
        check_pixels(property, self.top)?;
        check_pixels(property, self.right)?;
        check_pixels(property, self.bottom)?;
        check_pixels(property, self.left)?;
        Ok(self)
    }
}

/// A single side value as written by the user: pixels or a unit string.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LengthSpec {
    Px(f32),
    Str(String),
}

impl LengthSpec {
    pub fn resolve(&self, property: &str) -> Result<f32, StyleParseError> {
        match self {
            LengthSpec::Px(v) => check_pixels(property, *v),
            LengthSpec::Str(s) => resolve_length(property, s),
        }
    }
}

impl From<f32> for LengthSpec {
    fn from(v: f32) -> Self {
        LengthSpec::Px(v)
    }
}

impl From<&str> for LengthSpec {
    fn from(s: &str) -> Self {
        LengthSpec::Str(s.to_string())
    }
}

/// Unresolved spacing configuration.
///
/// Deserializes from a number (`8`), a shorthand string (`"4px 8px"`), or a
/// map of sides (`{"top": 4, "left": "1mm"}`); missing sides are zero.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SpacingSpec {
    Uniform(f32),
    Shorthand(String),
    Sides {
        #[serde(default)]
        top: Option<LengthSpec>,
        #[serde(default)]
        right: Option<LengthSpec>,
        #[serde(default)]
        bottom: Option<LengthSpec>,
        #[serde(default)]
        left: Option<LengthSpec>,
    },
}

impl SpacingSpec {
    /// Resolves this configuration into pixel sides, rejecting bad units,
    /// negative values and `auto`.
    pub fn resolve(&self, property: &str) -> Result<Sides, StyleParseError> {
        let sides = match self {
            SpacingSpec::Uniform(v) => Sides::all(*v),
            SpacingSpec::Shorthand(s) => {
                parse_shorthand_sides(s).map_err(|e| match e {
                    StyleParseError::AutoNotAllowed(_) => {
                        StyleParseError::AutoNotAllowed(property.to_string())
                    }
                    _ => StyleParseError::InvalidValue {
                        property: property.to_string(),
                        value: s.clone(),
                    },
                })?
            }
            SpacingSpec::Sides {
                top,
                right,
                bottom,
                left,
            } => {
                let side = |v: &Option<LengthSpec>| -> Result<f32, StyleParseError> {
                    v.as_ref().map_or(Ok(0.0), |l| l.resolve(property))
                };
                Sides::new(side(top)?, side(right)?, side(bottom)?, side(left)?)
            }
        };
        sides.validate(property)
    }
}

impl From<f32> for SpacingSpec {
    fn from(v: f32) -> Self {
        SpacingSpec::Uniform(v)
    }
}

impl From<&str> for SpacingSpec {
    fn from(s: &str) -> Self {
        SpacingSpec::Shorthand(s.to_string())
    }
}

impl From<Sides> for SpacingSpec {
    fn from(s: Sides) -> Self {
        SpacingSpec::Sides {
            top: Some(LengthSpec::Px(s.top)),
            right: Some(LengthSpec::Px(s.right)),
            bottom: Some(LengthSpec::Px(s.bottom)),
            left: Some(LengthSpec::Px(s.left)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_resolves_numbers_strings_and_maps() {
        assert_eq!(SpacingSpec::from(8.0).resolve("padding").unwrap(), Sides::all(8.0));
        assert_eq!(
            SpacingSpec::from("4px 8px").resolve("padding").unwrap(),
            Sides::new(4.0, 8.0, 4.0, 8.0)
        );
        let map = SpacingSpec::Sides {
            top: Some(LengthSpec::Px(2.0)),
            right: None,
            bottom: Some("1in".into()),
            left: None,
        };
        assert_eq!(
            map.resolve("margin").unwrap(),
            Sides::new(2.0, 0.0, 96.0, 0.0)
        );
    }

    #[test]
    fn spacing_rejects_negative_values() {
        let err = SpacingSpec::from(-1.0).resolve("border").unwrap_err();
        assert!(
            matches!(err, StyleParseError::Negative { ref property, .. } if property == "border")
        );
        assert!(SpacingSpec::from("-2px").resolve("border").is_err());
    }

    #[test]
    fn spacing_reports_property_on_bad_unit() {
        let err = SpacingSpec::from("4furlongs").resolve("padding").unwrap_err();
        assert_eq!(
            err,
            StyleParseError::InvalidValue {
                property: "padding".to_string(),
                value: "4furlongs".to_string()
            }
        );
    }

    #[test]
    fn side_helpers() {
        let s = Sides::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.horizontal(), 6.0);
        assert_eq!(s.vertical(), 4.0);
        assert_eq!(s.sum(&Sides::all(1.0)), Sides::new(2.0, 3.0, 4.0, 5.0));
    }
}
