//! Shimmer (loading placeholder) token set

use std::f32::consts::PI;

use fluent_core::{Color, DynamicColor};
use fluent_theme::{
    token_keys, ColorToken, ControlTokenValue, CornerRadius, NeutralColor, Spacing, TokenSetKey,
};

token_keys! {
    pub enum ShimmerToken {
        /// Alpha at the gradient center (revealing) or of the covered view (concealing)
        ShimmerAlpha => "shimmer_alpha",
        TintColor => "tint_color",
        /// Tint of a view shimmering without a cover
        ViewTint => "view_tint",
        DarkGradient => "dark_gradient",
        ShimmerWidth => "shimmer_width",
        /// Gradient direction in radians, 0 is horizontal
        ShimmerAngle => "shimmer_angle",
        /// Points per second
        ShimmerSpeed => "shimmer_speed",
        /// Seconds between two sweeps
        ShimmerDelay => "shimmer_delay",
        ShimmerDuration => "shimmer_duration",
        CornerRadius => "corner_radius",
        /// Label corner radius, 0 falls back to `corner_radius`
        LabelCornerRadius => "label_corner_radius",
        LabelHeight => "label_height",
        LabelSpacing => "label_spacing",
    }
}

token_keys! {
    #[derive(Default)]
    pub enum ShimmerStyle {
        /// The gradient hides parts of the content as it moves
        Concealing => "concealing",
        /// The gradient uncovers parts of otherwise hidden content
        #[default]
        Revealing => "revealing",
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShimmerProps {
    pub style: ShimmerStyle,
}

impl ShimmerProps {
    pub fn new(style: ShimmerStyle) -> Self {
        Self { style }
    }
}

const GRAY50: u32 = 0xF1F1F1;
const GRAY400: u32 = 0x919191;

/// Revealing tint: fixed greys in light mode, the stencil alias in dark
fn revealing_tint() -> ControlTokenValue {
    ControlTokenValue::color(|ctx| {
        let stencil = ctx.dynamic_color(ColorToken::Stencil2);
        DynamicColor::new(Color::from_hex(GRAY50))
            .with_light_high_contrast(Color::from_hex(GRAY400))
            .with_dark(stencil.dark.unwrap_or(stencil.light))
            .with_dark_high_contrast(Color::from_hex(GRAY400))
            .resolve(&ctx.appearance)
    })
}

impl TokenSetKey for ShimmerToken {
    type Props = ShimmerProps;
    const CONTROL: &'static str = "shimmer";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn name(self) -> &'static str {
        self.as_str()
    }

    fn default_value(self, props: &ShimmerProps) -> ControlTokenValue {
        match self {
            ShimmerToken::ShimmerAlpha => match props.style {
                ShimmerStyle::Concealing => 0.0_f32.into(),
                ShimmerStyle::Revealing => 0.4_f32.into(),
            },
            ShimmerToken::TintColor => match props.style {
                ShimmerStyle::Concealing => DynamicColor::light_dark(
                    NeutralColor::White.color(),
                    NeutralColor::Grey8.color(),
                )
                .into(),
                ShimmerStyle::Revealing => revealing_tint(),
            },
            ShimmerToken::ViewTint => revealing_tint(),
            ShimmerToken::DarkGradient => Color::BLACK.into(),
            ShimmerToken::ShimmerWidth => 180.0_f32.into(),
            ShimmerToken::ShimmerAngle => (-(PI / 45.0)).into(),
            ShimmerToken::ShimmerSpeed => 350.0_f32.into(),
            ShimmerToken::ShimmerDelay => 0.4_f32.into(),
            ShimmerToken::ShimmerDuration => 3.0_f32.into(),
            ShimmerToken::CornerRadius => CornerRadius::Radius40.value().into(),
            ShimmerToken::LabelCornerRadius => CornerRadius::Radius20.value().into(),
            ShimmerToken::LabelHeight => 11.0_f32.into(),
            ShimmerToken::LabelSpacing => Spacing::Size120.value().into(),
        }
    }
}
