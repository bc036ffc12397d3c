//! Theme files
//!
//! A theme file names a base preset, overrides alias tokens and registers
//! theme-wide control overrides:
//!
//! ```toml
//! name = "Contoso"
//! preset = "purple"
//!
//! [colors.brand_background1]
//! light = "#822FFF"
//! dark = "#A275FF"
//!
//! [typography.body1]
//! size = 18
//! weight = "medium"
//!
//! [controls.badge.background_tint_color]
//! color = "danger_background1"
//!
//! [controls.badge.border_radius]
//! float = 6
//! ```
//!
//! Control entries hold exactly one of `color`, `float`, `font`, `shadow` or
//! `image`. Colors are literals (`"#RRGGBB"`, a light/dark table) or alias
//! names, which keep following the theme at lookup time. Every name is checked
//! on load: unknown aliases, controls and tokens, and entries whose kind does
//! not match the token, are reported as [`ThemeError`]s.

use std::collections::BTreeMap;
use std::path::Path;

use fluent_core::{Color, DynamicColor, FontInfo, FontWeight, ImageAsset};
use serde::Deserialize;

use crate::control::{TokenOverrides, TokenSetKey};
use crate::error::{Result, ThemeError};
use crate::presets::ThemePreset;
use crate::theme::Theme;
use crate::tokens::{ColorToken, ShadowToken, TypographyToken};
use crate::value::ControlTokenValue;

fn default_name() -> String {
    "Custom".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Preset whose alias overrides the file starts from
    #[serde(default)]
    pub preset: Option<String>,

    #[serde(default)]
    pub colors: BTreeMap<String, ColorEntry>,

    #[serde(default)]
    pub typography: BTreeMap<String, FontEntry>,

    /// control name -> token name -> entry
    #[serde(default)]
    pub controls: BTreeMap<String, BTreeMap<String, ControlTokenEntry>>,
}

/// A color literal or alias name, or per-appearance literals
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Single(String),
    Variants(ColorVariants),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorVariants {
    pub light: String,
    pub light_high_contrast: Option<String>,
    pub light_elevated: Option<String>,
    pub light_elevated_high_contrast: Option<String>,
    pub dark: Option<String>,
    pub dark_high_contrast: Option<String>,
    pub dark_elevated: Option<String>,
    pub dark_elevated_high_contrast: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontEntry {
    pub name: Option<String>,
    pub size: f32,
    pub weight: Option<String>,
}

/// A typography alias name or an explicit font
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FontValue {
    Alias(String),
    Custom(FontEntry),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlTokenEntry {
    Color(ColorEntry),
    Float(f32),
    Font(FontValue),
    /// Shadow alias name
    Shadow(String),
    Image(String),
}

/// A parsed color entry: fixed literal or live alias
enum ColorSource {
    Literal(DynamicColor),
    Alias(ColorToken),
}

impl ColorEntry {
    fn source(&self) -> Result<ColorSource> {
        match self {
            ColorEntry::Single(text) => match text.parse::<Color>() {
                Ok(color) => Ok(ColorSource::Literal(DynamicColor::new(color))),
                Err(err) => match ColorToken::from_name(text) {
                    Some(token) => Ok(ColorSource::Alias(token)),
                    None if text.starts_with('#') || text.starts_with("0x") => Err(err.into()),
                    None => Err(ThemeError::UnknownAlias(text.clone())),
                },
            },
            ColorEntry::Variants(variants) => variants.to_dynamic().map(ColorSource::Literal),
        }
    }

    /// Literal color; alias names are resolved against the default alias layer
    fn to_dynamic(&self) -> Result<DynamicColor> {
        Ok(match self.source()? {
            ColorSource::Literal(color) => color,
            ColorSource::Alias(token) => token.default_color(),
        })
    }

    fn to_value(&self) -> Result<ControlTokenValue> {
        Ok(match self.source()? {
            ColorSource::Literal(color) => color.into(),
            ColorSource::Alias(token) => ControlTokenValue::alias_color(token),
        })
    }
}

impl ColorVariants {
    fn to_dynamic(&self) -> Result<DynamicColor> {
        fn parse(value: &Option<String>) -> Result<Option<Color>> {
            value.as_deref().map(str::parse::<Color>).transpose().map_err(Into::into)
        }

        let mut color = DynamicColor::new(self.light.parse()?);
        color.light_high_contrast = parse(&self.light_high_contrast)?;
        color.light_elevated = parse(&self.light_elevated)?;
        color.light_elevated_high_contrast = parse(&self.light_elevated_high_contrast)?;
        color.dark = parse(&self.dark)?;
        color.dark_high_contrast = parse(&self.dark_high_contrast)?;
        color.dark_elevated = parse(&self.dark_elevated)?;
        color.dark_elevated_high_contrast = parse(&self.dark_elevated_high_contrast)?;
        Ok(color)
    }
}

impl FontEntry {
    fn to_font(&self) -> Result<FontInfo> {
        let weight = match &self.weight {
            Some(weight) => weight.parse::<FontWeight>()?,
            None => FontWeight::Regular,
        };
        let font = FontInfo::new(self.size, weight);
        Ok(match &self.name {
            Some(name) => font.with_name(name),
            None => font,
        })
    }
}

impl ControlTokenEntry {
    fn to_value(&self) -> Result<ControlTokenValue> {
        match self {
            ControlTokenEntry::Color(entry) => entry.to_value(),
            ControlTokenEntry::Float(value) => Ok((*value).into()),
            ControlTokenEntry::Font(FontValue::Alias(name)) => TypographyToken::from_name(name)
                .map(ControlTokenValue::alias_typography)
                .ok_or_else(|| ThemeError::UnknownAlias(name.clone())),
            ControlTokenEntry::Font(FontValue::Custom(entry)) => Ok(entry.to_font()?.into()),
            ControlTokenEntry::Shadow(name) => ShadowToken::from_name(name)
                .map(ControlTokenValue::alias_shadow)
                .ok_or_else(|| ThemeError::UnknownAlias(name.clone())),
            ControlTokenEntry::Image(name) => Ok(ImageAsset::named(name.as_str()).into()),
        }
    }
}

impl ThemeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), name = %config.name, "loaded theme file");
        Ok(config)
    }

    pub fn preset(&self) -> Result<ThemePreset> {
        match &self.preset {
            Some(id) => ThemePreset::from_id(id).ok_or_else(|| ThemeError::UnknownPreset(id.clone())),
            None => Ok(ThemePreset::Default),
        }
    }

    /// Theme with the preset's and this file's alias overrides.
    ///
    /// Control overrides are registered separately, per control type, with
    /// [`apply_controls`](Self::apply_controls).
    pub fn build_theme(&self) -> Result<Theme> {
        let mut builder = Theme::builder(self.name.as_str()).colors(self.preset()?.color_overrides());

        for (name, entry) in &self.colors {
            let token =
                ColorToken::from_name(name).ok_or_else(|| ThemeError::UnknownAlias(name.clone()))?;
            builder = builder.color(token, entry.to_dynamic()?);
        }
        for (name, entry) in &self.typography {
            let token = TypographyToken::from_name(name)
                .ok_or_else(|| ThemeError::UnknownAlias(name.clone()))?;
            builder = builder.typography(token, entry.to_font()?);
        }
        Ok(builder.build())
    }

    /// Theme-wide overrides the file declares for control type `K`
    pub fn control_overrides<K: TokenSetKey>(&self) -> Result<Option<TokenOverrides<K>>> {
        let Some(entries) = self.controls.get(K::CONTROL) else {
            return Ok(None);
        };

        let mut overrides = TokenOverrides::<K>::default();
        for (name, entry) in entries {
            let token = K::from_name(name).ok_or_else(|| ThemeError::UnknownToken {
                control: K::CONTROL.to_string(),
                token: name.clone(),
            })?;
            let value = entry.to_value()?;
            if value.kind() != token.kind() {
                return Err(ThemeError::KindMismatch {
                    token: format!("{}.{}", K::CONTROL, name),
                    expected: token.kind(),
                    found: value.kind(),
                });
            }
            overrides.insert(token, value);
        }
        Ok(Some(overrides))
    }

    /// Register the file's overrides for `K` on `theme`, if it declares any
    pub fn apply_controls<K: TokenSetKey>(&self, theme: &Theme) -> Result<()> {
        if let Some(overrides) = self.control_overrides::<K>()? {
            theme.register::<K>(Some(overrides));
        }
        Ok(())
    }

    /// Fail on control sections whose name is not in `known`
    pub fn check_control_names(&self, known: &[&str]) -> Result<()> {
        match self.controls.keys().find(|name| !known.contains(&name.as_str())) {
            Some(name) => Err(ThemeError::UnknownControl(name.clone())),
            None => Ok(()),
        }
    }
}
