//! Themes
//!
//! A [`Theme`] bundles the alias layer (with any per-theme alias overrides,
//! fixed at construction) and the theme-wide control overrides registered
//! per control type. Themes are shared through `Arc` and the registration
//! table sits behind an `RwLock`, so a theme can be read from any thread.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use fluent_core::{Appearance, Color, DynamicColor, FontInfo, ShadowInfo};
use rustc_hash::FxHashMap;

use crate::control::{TokenOverrides, TokenSetKey};
use crate::tokens::{ColorToken, GradientToken, ShadowToken, TypographyToken};

type ErasedOverrides = Arc<dyn Any + Send + Sync>;

pub struct Theme {
    name: String,
    colors: FxHashMap<ColorToken, DynamicColor>,
    typography: FxHashMap<TypographyToken, FontInfo>,
    shadows: FxHashMap<ShadowToken, ShadowInfo>,
    gradients: FxHashMap<GradientToken, Vec<DynamicColor>>,
    /// Theme-wide control overrides keyed by `TokenSetKey::CONTROL`
    controls: RwLock<FxHashMap<&'static str, ErasedOverrides>>,
    revision: AtomicU64,
}

impl Theme {
    /// Theme with no alias overrides
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> ThemeBuilder {
        ThemeBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Counter bumped by every control registration
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Set or clear the theme-wide overrides for control type `K`.
    ///
    /// `None` and an empty map both clear the registration.
    pub fn register<K: TokenSetKey>(&self, tokens: Option<TokenOverrides<K>>) {
        let mut controls = self.controls.write().unwrap();
        match tokens.filter(|tokens| !tokens.is_empty()) {
            Some(tokens) => {
                tracing::debug!(
                    theme = %self.name,
                    control = K::CONTROL,
                    count = tokens.len(),
                    "registered theme-wide control overrides"
                );
                controls.insert(K::CONTROL, Arc::new(tokens));
            }
            None => {
                if controls.remove(K::CONTROL).is_some() {
                    tracing::debug!(
                        theme = %self.name,
                        control = K::CONTROL,
                        "cleared theme-wide control overrides"
                    );
                }
            }
        }
        self.revision.fetch_add(1, Ordering::AcqRel);
    }

    /// Theme-wide overrides registered for control type `K`
    pub fn tokens<K: TokenSetKey>(&self) -> Option<Arc<TokenOverrides<K>>> {
        let erased = self.controls.read().unwrap().get(K::CONTROL).cloned()?;
        match erased.downcast::<TokenOverrides<K>>() {
            Ok(tokens) => Some(tokens),
            Err(_) => {
                tracing::warn!(
                    theme = %self.name,
                    control = K::CONTROL,
                    "registered overrides belong to a different token type with the same control name"
                );
                None
            }
        }
    }

    /// Control names with theme-wide overrides, sorted
    pub fn registered_controls(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.controls.read().unwrap().keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn dynamic_color(&self, token: ColorToken) -> DynamicColor {
        self.colors
            .get(&token)
            .copied()
            .unwrap_or_else(|| token.default_color())
    }

    /// Alias color resolved for `appearance`
    pub fn color(&self, token: ColorToken, appearance: &Appearance) -> Color {
        self.dynamic_color(token).resolve(appearance)
    }

    pub fn typography(&self, token: TypographyToken) -> FontInfo {
        self.typography
            .get(&token)
            .cloned()
            .unwrap_or_else(|| token.default_font())
    }

    pub fn shadow(&self, token: ShadowToken) -> ShadowInfo {
        self.shadows
            .get(&token)
            .copied()
            .unwrap_or_else(|| token.default_shadow())
    }

    pub fn gradient(&self, token: GradientToken) -> Vec<DynamicColor> {
        match self.gradients.get(&token) {
            Some(stops) => stops.clone(),
            None => token.default_stops(|color| self.dynamic_color(color)),
        }
    }

    /// Alias colors this theme overrides
    pub fn color_overrides(&self) -> impl Iterator<Item = (ColorToken, DynamicColor)> + '_ {
        self.colors.iter().map(|(token, color)| (*token, *color))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Default")
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("name", &self.name)
            .field("colors", &self.colors.len())
            .field("typography", &self.typography.len())
            .field("shadows", &self.shadows.len())
            .field("gradients", &self.gradients.len())
            .field("controls", &self.registered_controls())
            .field("revision", &self.revision())
            .finish()
    }
}

/// Collects alias overrides for a new [`Theme`]
#[derive(Clone, Debug, Default)]
pub struct ThemeBuilder {
    name: String,
    colors: FxHashMap<ColorToken, DynamicColor>,
    typography: FxHashMap<TypographyToken, FontInfo>,
    shadows: FxHashMap<ShadowToken, ShadowInfo>,
    gradients: FxHashMap<GradientToken, Vec<DynamicColor>>,
}

impl ThemeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn color(mut self, token: ColorToken, color: DynamicColor) -> Self {
        self.colors.insert(token, color);
        self
    }

    pub fn colors(mut self, colors: impl IntoIterator<Item = (ColorToken, DynamicColor)>) -> Self {
        self.colors.extend(colors);
        self
    }

    pub fn typography(mut self, token: TypographyToken, font: FontInfo) -> Self {
        self.typography.insert(token, font);
        self
    }

    pub fn shadow(mut self, token: ShadowToken, shadow: ShadowInfo) -> Self {
        self.shadows.insert(token, shadow);
        self
    }

    pub fn gradient(mut self, token: GradientToken, stops: Vec<DynamicColor>) -> Self {
        self.gradients.insert(token, stops);
        self
    }

    pub fn build(self) -> Theme {
        Theme {
            name: self.name,
            colors: self.colors,
            typography: self.typography,
            shadows: self.shadows,
            gradients: self.gradients,
            controls: RwLock::new(FxHashMap::default()),
            revision: AtomicU64::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_core::{ColorScheme, FontWeight};
    use pretty_assertions::assert_eq;

    #[test]
    fn alias_defaults_without_overrides() {
        let theme = Theme::default();
        assert_eq!(
            theme.color(ColorToken::Foreground1, &Appearance::LIGHT),
            Color::from_hex(0x242424)
        );
        assert_eq!(
            theme.typography(TypographyToken::Caption1Strong),
            FontInfo::new(13.0, FontWeight::Semibold)
        );
        assert!(theme.shadow(ShadowToken::Clear).is_clear());
    }

    #[test]
    fn alias_overrides_take_precedence() {
        let purple = DynamicColor::light_dark(Color::from_hex(0x822FFF), Color::from_hex(0xA275FF));
        let theme = Theme::builder("Purple")
            .color(ColorToken::BrandBackground1, purple)
            .typography(TypographyToken::Body1, FontInfo::new(18.0, FontWeight::Medium))
            .build();

        let dark = Appearance::new(ColorScheme::Dark);
        assert_eq!(
            theme.color(ColorToken::BrandBackground1, &dark),
            Color::from_hex(0xA275FF)
        );
        assert_eq!(theme.typography(TypographyToken::Body1).size, 18.0);
        // untouched tokens keep their defaults
        assert_eq!(
            theme.dynamic_color(ColorToken::Foreground2),
            ColorToken::Foreground2.default_color()
        );
    }

    #[test]
    fn gradients_follow_overridden_stops() {
        let stop = DynamicColor::new(Color::from_hex(0x00FF00));
        let theme = Theme::builder("Gradient")
            .color(ColorToken::BrandGradient2, stop)
            .build();

        let flair = theme.gradient(GradientToken::Flair);
        assert_eq!(flair.len(), 3);
        assert_eq!(flair[1], stop);
        assert_eq!(theme.gradient(GradientToken::Tint)[0], stop);

        let explicit = Theme::builder("Explicit")
            .gradient(GradientToken::Tint, vec![stop])
            .build();
        assert_eq!(explicit.gradient(GradientToken::Tint), vec![stop]);
    }
}
