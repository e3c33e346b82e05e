//! Style hints handed to the text measurement backend.
use serde::{Deserialize, Deserializer, Serialize, de};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Font weight on the usual 1-1000 scale.
///
/// Deserializes from a number or one of the common keywords.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const SEMIBOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let weight = match keyword.to_ascii_lowercase().as_str() {
            "light" => Self::LIGHT,
            "normal" | "regular" => Self::NORMAL,
            "semibold" => Self::SEMIBOLD,
            "bold" => Self::BOLD,
            _ => return None,
        };
        Some(weight)
    }

    pub fn is_bold(self) -> bool {
        self >= Self::SEMIBOLD
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u16),
            Keyword(String),
        }

        let weight = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => FontWeight(n),
            Raw::Keyword(k) => FontWeight::from_keyword(&k)
                .ok_or_else(|| de::Error::custom(format!("unknown font weight '{}'", k)))?,
        };
        if !(1..=1000).contains(&weight.0) {
            return Err(de::Error::custom(format!(
                "font weight {} is outside 1-1000",
                weight.0
            )));
        }
        Ok(weight)
    }
}

/// What a backend needs to know about a run of text besides its content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: Arc<String>,
    pub font_size: f32,
    pub font_weight: FontWeight,
    /// Absolute line height in pixels; backends pick their own when absent.
    pub line_height: Option<f32>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: Arc::new("sans-serif".to_string()),
            font_size: 16.0,
            font_weight: FontWeight::NORMAL,
            line_height: None,
        }
    }
}

impl TextStyle {
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }
}

impl Eq for TextStyle {}

// f32 fields hash by bit pattern.
impl Hash for TextStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.font_family.hash(state);
        self.font_size.to_bits().hash(state);
        self.font_weight.hash(state);
        self.line_height.map(f32::to_bits).hash(state);
    }
}
