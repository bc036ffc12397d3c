//! Font descriptors

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    /// All weights, lightest first
    pub fn all() -> &'static [FontWeight] {
        &[
            FontWeight::UltraLight,
            FontWeight::Thin,
            FontWeight::Light,
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::Semibold,
            FontWeight::Bold,
            FontWeight::Heavy,
            FontWeight::Black,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            FontWeight::UltraLight => "ultra_light",
            FontWeight::Thin => "thin",
            FontWeight::Light => "light",
            FontWeight::Regular => "regular",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
            FontWeight::Heavy => "heavy",
            FontWeight::Black => "black",
        }
    }

    /// CSS-style numeric weight
    pub fn to_numeric(&self) -> u16 {
        match self {
            FontWeight::UltraLight => 100,
            FontWeight::Thin => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Heavy => 800,
            FontWeight::Black => 900,
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown font weight `{0}`")]
pub struct FontWeightParseError(pub String);

impl FromStr for FontWeight {
    type Err = FontWeightParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        FontWeight::all()
            .iter()
            .copied()
            .find(|w| w.name() == normalized || w.to_numeric().to_string() == normalized)
            .ok_or_else(|| FontWeightParseError(s.to_string()))
    }
}

/// Platform text style a font scales with under dynamic type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption,
    Caption2,
}

impl TextStyle {
    /// Smallest point size that maps onto each style, largest first
    const SIZE_THRESHOLDS: [(f32, TextStyle); 10] = [
        (34.0, TextStyle::LargeTitle),
        (28.0, TextStyle::Title),
        (22.0, TextStyle::Title2),
        (20.0, TextStyle::Title3),
        (17.0, TextStyle::Body),
        (16.0, TextStyle::Callout),
        (15.0, TextStyle::Subheadline),
        (13.0, TextStyle::Footnote),
        (12.0, TextStyle::Caption),
        (11.0, TextStyle::Caption2),
    ];

    /// Style used for scaling a font of the given size
    pub fn for_size(size: f32) -> Self {
        Self::SIZE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| size >= *threshold)
            .map(|(_, style)| *style)
            .unwrap_or(TextStyle::Caption2)
    }
}

/// Font descriptor: optional family name, point size and weight
#[derive(Clone, Debug, PartialEq)]
pub struct FontInfo {
    /// Custom family; `None` means the system font
    pub name: Option<String>,
    pub size: f32,
    pub weight: FontWeight,
}

impl FontInfo {
    pub fn new(size: f32, weight: FontWeight) -> Self {
        Self {
            name: None,
            size,
            weight,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn text_style(&self) -> TextStyle {
        TextStyle::for_size(self.size)
    }
}

impl Default for FontInfo {
    fn default() -> Self {
        Self::new(17.0, FontWeight::Regular)
    }
}

impl fmt::Display for FontInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} {}pt {}", self.size, self.weight),
            None => write!(f, "system {}pt {}", self.size, self.weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_style_thresholds() {
        assert_eq!(TextStyle::for_size(60.0), TextStyle::LargeTitle);
        assert_eq!(TextStyle::for_size(17.0), TextStyle::Body);
        assert_eq!(TextStyle::for_size(14.0), TextStyle::Footnote);
        assert_eq!(TextStyle::for_size(8.0), TextStyle::Caption2);
    }

    #[test]
    fn weight_parsing() {
        assert_eq!("semibold".parse::<FontWeight>(), Ok(FontWeight::Semibold));
        assert_eq!("Ultra-Light".parse::<FontWeight>(), Ok(FontWeight::UltraLight));
        assert_eq!("700".parse::<FontWeight>(), Ok(FontWeight::Bold));
        assert!("chunky".parse::<FontWeight>().is_err());
    }

    #[test]
    fn display() {
        let font = FontInfo::new(15.0, FontWeight::Semibold);
        assert_eq!(font.to_string(), "system 15pt semibold");
        assert_eq!(
            font.with_name("Segoe UI").to_string(),
            "Segoe UI 15pt semibold"
        );
    }
}
