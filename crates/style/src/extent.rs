//! Defines the fixed-or-auto size of a container axis.
use crate::parsers::{StyleParseError, check_pixels, parse_extent, run_parser};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::hash::{Hash, Hasher};

/// The border-box size of one axis: a fixed pixel value, or `Auto` to derive
/// it from the element's children.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Extent {
    Fixed(f32),
    #[default]
    Auto,
}

impl Hash for Extent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Extent::Fixed(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            Extent::Auto => 1u8.hash(state),
        }
    }
}

impl Eq for Extent {}

impl Extent {
    pub fn is_auto(&self) -> bool {
        matches!(self, Extent::Auto)
    }

    pub fn fixed(&self) -> Option<f32> {
        match self {
            Extent::Fixed(v) => Some(*v),
            Extent::Auto => None,
        }
    }

    /// Checks that a fixed value is finite and non-negative.
    pub fn validate(self, property: &str) -> Result<Self, StyleParseError> {
        if let Extent::Fixed(v) = self {
            check_pixels(property, v)?;
        }
        Ok(self)
    }

    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        run_parser(parse_extent, s)
    }
}

impl From<f32> for Extent {
    fn from(v: f32) -> Self {
        Extent::Fixed(v)
    }
}

impl<'de> Deserialize<'de> for Extent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ExtentDef {
            Num(f32),
            Str(String),
        }

        let extent = match ExtentDef::deserialize(deserializer)? {
            ExtentDef::Num(v) => Extent::Fixed(v),
            ExtentDef::Str(s) => Extent::parse(&s).map_err(de::Error::custom)?,
        };
        extent.validate("extent").map_err(de::Error::custom)
    }
}
