//! Control token values
//!
//! A [`ControlTokenValue`] is an unevaluated provider. It is evaluated
//! against a [`TokenContext`] (the theme plus the current appearance) to
//! produce a [`TokenValue`]. Providers run on every lookup, so a value that
//! refers to an alias token follows theme and appearance changes without
//! being re-registered.

use std::fmt;
use std::sync::Arc;

use fluent_core::{Appearance, Color, DynamicColor, FontInfo, ImageAsset, ShadowInfo};

use crate::theme::Theme;
use crate::tokens::{
    ColorToken, GradientToken, ShadowToken, SharedColorSet, SharedColorShade, TypographyToken,
};

/// Everything a provider may consult
#[derive(Clone, Copy)]
pub struct TokenContext<'a> {
    pub theme: &'a Theme,
    pub appearance: Appearance,
}

impl<'a> TokenContext<'a> {
    pub fn new(theme: &'a Theme, appearance: Appearance) -> Self {
        Self { theme, appearance }
    }

    /// Alias color resolved for this context's appearance
    pub fn color(&self, token: ColorToken) -> Color {
        self.theme.color(token, &self.appearance)
    }

    pub fn dynamic_color(&self, token: ColorToken) -> DynamicColor {
        self.theme.dynamic_color(token)
    }

    pub fn typography(&self, token: TypographyToken) -> FontInfo {
        self.theme.typography(token)
    }

    pub fn shadow(&self, token: ShadowToken) -> ShadowInfo {
        self.theme.shadow(token)
    }

    pub fn gradient(&self, token: GradientToken) -> Vec<Color> {
        self.theme
            .gradient(token)
            .iter()
            .map(|stop| stop.resolve(&self.appearance))
            .collect()
    }
}

impl fmt::Debug for TokenContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenContext")
            .field("theme", &self.theme.name())
            .field("appearance", &self.appearance)
            .finish()
    }
}

/// The kind of value a token carries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Color,
    Float,
    Font,
    Shadow,
    Image,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::Float => "float",
            TokenKind::Font => "font",
            TokenKind::Shadow => "shadow",
            TokenKind::Image => "image",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type Provider<T> = Arc<dyn Fn(&TokenContext<'_>) -> T + Send + Sync>;

/// Unevaluated token value: a provider tagged with the kind it yields
#[derive(Clone)]
pub enum ControlTokenValue {
    Color(Provider<Color>),
    Float(Provider<f32>),
    Font(Provider<FontInfo>),
    Shadow(Provider<ShadowInfo>),
    Image(Provider<ImageAsset>),
}

impl ControlTokenValue {
    pub fn color(provider: impl Fn(&TokenContext<'_>) -> Color + Send + Sync + 'static) -> Self {
        ControlTokenValue::Color(Arc::new(provider))
    }

    pub fn float(provider: impl Fn(&TokenContext<'_>) -> f32 + Send + Sync + 'static) -> Self {
        ControlTokenValue::Float(Arc::new(provider))
    }

    pub fn font(provider: impl Fn(&TokenContext<'_>) -> FontInfo + Send + Sync + 'static) -> Self {
        ControlTokenValue::Font(Arc::new(provider))
    }

    pub fn shadow(
        provider: impl Fn(&TokenContext<'_>) -> ShadowInfo + Send + Sync + 'static,
    ) -> Self {
        ControlTokenValue::Shadow(Arc::new(provider))
    }

    pub fn image(
        provider: impl Fn(&TokenContext<'_>) -> ImageAsset + Send + Sync + 'static,
    ) -> Self {
        ControlTokenValue::Image(Arc::new(provider))
    }

    /// Alias color, tracking theme overrides and appearance
    pub fn alias_color(token: ColorToken) -> Self {
        Self::color(move |ctx| ctx.color(token))
    }

    pub fn alias_typography(token: TypographyToken) -> Self {
        Self::font(move |ctx| ctx.typography(token))
    }

    pub fn alias_shadow(token: ShadowToken) -> Self {
        Self::shadow(move |ctx| ctx.shadow(token))
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            ControlTokenValue::Color(_) => TokenKind::Color,
            ControlTokenValue::Float(_) => TokenKind::Float,
            ControlTokenValue::Font(_) => TokenKind::Font,
            ControlTokenValue::Shadow(_) => TokenKind::Shadow,
            ControlTokenValue::Image(_) => TokenKind::Image,
        }
    }

    pub fn evaluate(&self, ctx: &TokenContext<'_>) -> TokenValue {
        match self {
            ControlTokenValue::Color(provider) => TokenValue::Color(provider(ctx)),
            ControlTokenValue::Float(provider) => TokenValue::Float(provider(ctx)),
            ControlTokenValue::Font(provider) => TokenValue::Font(provider(ctx)),
            ControlTokenValue::Shadow(provider) => TokenValue::Shadow(provider(ctx)),
            ControlTokenValue::Image(provider) => TokenValue::Image(provider(ctx)),
        }
    }
}

impl fmt::Debug for ControlTokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControlTokenValue::{:?}(..)", self.kind())
    }
}

impl From<Color> for ControlTokenValue {
    fn from(color: Color) -> Self {
        Self::color(move |_| color)
    }
}

impl From<DynamicColor> for ControlTokenValue {
    fn from(color: DynamicColor) -> Self {
        Self::color(move |ctx| color.resolve(&ctx.appearance))
    }
}

impl From<f32> for ControlTokenValue {
    fn from(value: f32) -> Self {
        Self::float(move |_| value)
    }
}

impl From<FontInfo> for ControlTokenValue {
    fn from(font: FontInfo) -> Self {
        Self::font(move |_| font.clone())
    }
}

impl From<ShadowInfo> for ControlTokenValue {
    fn from(shadow: ShadowInfo) -> Self {
        Self::shadow(move |_| shadow)
    }
}

impl From<ImageAsset> for ControlTokenValue {
    fn from(image: ImageAsset) -> Self {
        Self::image(move |_| image.clone())
    }
}

/// Evaluated token value
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Color(Color),
    Float(f32),
    Font(FontInfo),
    /// Layers still carry dynamic colors; see [`ShadowInfo::resolve`]
    Shadow(ShadowInfo),
    Image(ImageAsset),
}

/// Stands out on screen when a token is read as the wrong kind
fn fallback_color() -> Color {
    SharedColorSet::HotPink.color(SharedColorShade::Primary)
}

fn mismatch(expected: TokenKind, found: TokenKind) {
    debug_assert!(false, "cannot read {found} token as {expected}");
    tracing::error!(%expected, %found, "token kind mismatch, using fallback value");
}

impl TokenValue {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Color(_) => TokenKind::Color,
            TokenValue::Float(_) => TokenKind::Float,
            TokenValue::Font(_) => TokenKind::Font,
            TokenValue::Shadow(_) => TokenKind::Shadow,
            TokenValue::Image(_) => TokenKind::Image,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            TokenValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            TokenValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<&FontInfo> {
        match self {
            TokenValue::Font(font) => Some(font),
            _ => None,
        }
    }

    pub fn as_shadow(&self) -> Option<&ShadowInfo> {
        match self {
            TokenValue::Shadow(shadow) => Some(shadow),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageAsset> {
        match self {
            TokenValue::Image(image) => Some(image),
            _ => None,
        }
    }

    /// Color value; panics in debug builds if this is another kind
    pub fn color(&self) -> Color {
        self.as_color().unwrap_or_else(|| {
            mismatch(TokenKind::Color, self.kind());
            fallback_color()
        })
    }

    /// Float value; panics in debug builds if this is another kind
    pub fn float(&self) -> f32 {
        self.as_float().unwrap_or_else(|| {
            mismatch(TokenKind::Float, self.kind());
            0.0
        })
    }

    pub fn font(&self) -> FontInfo {
        self.as_font().cloned().unwrap_or_else(|| {
            mismatch(TokenKind::Font, self.kind());
            TypographyToken::Body1.default_font()
        })
    }

    pub fn shadow(&self) -> ShadowInfo {
        self.as_shadow().copied().unwrap_or_else(|| {
            mismatch(TokenKind::Shadow, self.kind());
            let color = DynamicColor::new(fallback_color());
            ShadowInfo {
                key_color: color,
                key_blur: 10.0,
                x_key: 10.0,
                y_key: 10.0,
                ambient_color: color,
                ambient_blur: 10.0,
                x_ambient: 10.0,
                y_ambient: 10.0,
            }
        })
    }

    pub fn image(&self) -> ImageAsset {
        self.as_image().cloned().unwrap_or_else(|| {
            mismatch(TokenKind::Image, self.kind());
            ImageAsset::named("")
        })
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Color(color) => write!(f, "{color}"),
            TokenValue::Float(value) => write!(f, "{value}"),
            TokenValue::Font(font) => write!(f, "{font}"),
            TokenValue::Shadow(shadow) => write!(f, "{shadow}"),
            TokenValue::Image(image) => write!(f, "{image}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_core::ColorScheme;
    use pretty_assertions::assert_eq;

    #[test]
    fn constant_values_ignore_context() {
        let theme = Theme::default();
        let ctx = TokenContext::new(&theme, Appearance::DARK);
        let value = ControlTokenValue::from(4.0_f32);
        assert_eq!(value.kind(), TokenKind::Float);
        assert_eq!(value.evaluate(&ctx), TokenValue::Float(4.0));
    }

    #[test]
    fn dynamic_color_value_follows_appearance() {
        let theme = Theme::default();
        let value = ControlTokenValue::from(DynamicColor::light_dark(Color::WHITE, Color::BLACK));
        let light = value.evaluate(&TokenContext::new(&theme, Appearance::LIGHT));
        let dark = value.evaluate(&TokenContext::new(
            &theme,
            Appearance::new(ColorScheme::Dark),
        ));
        assert_eq!(light.color(), Color::WHITE);
        assert_eq!(dark.color(), Color::BLACK);
    }

    #[test]
    fn alias_values_read_through_the_theme() {
        let theme = Theme::builder("Override")
            .color(ColorToken::Foreground1, DynamicColor::new(Color::from_hex(0x123456)))
            .build();
        let ctx = TokenContext::new(&theme, Appearance::LIGHT);
        let value = ControlTokenValue::alias_color(ColorToken::Foreground1);
        assert_eq!(value.evaluate(&ctx).color(), Color::from_hex(0x123456));
    }

    #[test]
    fn typed_accessors() {
        let value = TokenValue::Float(2.0);
        assert_eq!(value.as_float(), Some(2.0));
        assert_eq!(value.as_color(), None);
        assert_eq!(value.to_string(), "2");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot read float token as color")]
    fn wrong_kind_panics_in_debug_builds() {
        TokenValue::Float(1.0).color();
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn wrong_kind_falls_back_in_release_builds() {
        let hot_pink = SharedColorSet::HotPink.color(SharedColorShade::Primary);
        assert_eq!(TokenValue::Float(1.0).color(), hot_pink);
        assert_eq!(TokenValue::Color(Color::WHITE).float(), 0.0);
        assert_eq!(
            TokenValue::Float(1.0).font(),
            TypographyToken::Body1.default_font()
        );
        assert_eq!(
            TokenValue::Float(1.0).shadow().key_color,
            DynamicColor::new(hot_pink)
        );
        assert_eq!(TokenValue::Float(1.0).image(), ImageAsset::named(""));
    }
}
