//! Brand gradients

use fluent_core::DynamicColor;

use super::color::ColorToken;

crate::token_keys! {
    pub enum GradientToken {
        Flair => "flair",
        Tint => "tint",
    }
}

impl GradientToken {
    /// Gradient stops, drawn from the brand gradient color tokens
    ///
    /// `color` supplies the theme's current value for each stop, so a theme
    /// that overrides `brand_gradient2` also changes both gradients.
    pub fn default_stops(self, color: impl Fn(ColorToken) -> DynamicColor) -> Vec<DynamicColor> {
        match self {
            GradientToken::Flair => vec![
                color(ColorToken::BrandGradient1),
                color(ColorToken::BrandGradient2),
                color(ColorToken::BrandGradient3),
            ],
            GradientToken::Tint => vec![
                color(ColorToken::BrandGradient2),
                color(ColorToken::BrandGradient3),
            ],
        }
    }
}
