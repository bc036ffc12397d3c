//! Badge token set
//!
//! A small pill with a status tint or fill. Every color follows the alias
//! layer, so brand presets and status overrides flow through unchanged.

use fluent_theme::{
    token_keys, ColorToken, ControlTokenValue, CornerRadius, Spacing, TokenSetKey,
    TypographyToken,
};

token_keys! {
    pub enum BadgeToken {
        /// Background of the tinted (default) badge
        BackgroundTintColor => "background_tint_color",
        /// Background of the filled badge
        BackgroundFilledColor => "background_filled_color",
        BackgroundDisabledColor => "background_disabled_color",
        ForegroundTintColor => "foreground_tint_color",
        ForegroundFilledColor => "foreground_filled_color",
        ForegroundDisabledColor => "foreground_disabled_color",
        BorderRadius => "border_radius",
    }
}

token_keys! {
    #[derive(Default)]
    pub enum BadgeStyle {
        #[default]
        Default => "default",
        Danger => "danger",
        SevereWarning => "severe_warning",
        Warning => "warning",
        Success => "success",
        Neutral => "neutral",
    }
}

token_keys! {
    #[derive(Default)]
    pub enum BadgeSize {
        Small => "small",
        #[default]
        Medium => "medium",
    }
}

impl BadgeSize {
    pub fn label_typography(self) -> TypographyToken {
        match self {
            BadgeSize::Small => TypographyToken::Caption1,
            BadgeSize::Medium => TypographyToken::Body2,
        }
    }

    pub fn horizontal_padding(self) -> f32 {
        match self {
            BadgeSize::Small => Spacing::Size40.value(),
            BadgeSize::Medium => Spacing::Size80.value(),
        }
    }
}

/// Layout constants shared by every badge size
pub const BADGE_VERTICAL_PADDING: f32 = 2.0;
pub const BADGE_MIN_WIDTH: f32 = 25.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BadgeProps {
    pub style: BadgeStyle,
    pub size: BadgeSize,
}

impl BadgeProps {
    pub fn new(style: BadgeStyle, size: BadgeSize) -> Self {
        Self { style, size }
    }
}

impl TokenSetKey for BadgeToken {
    type Props = BadgeProps;
    const CONTROL: &'static str = "badge";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn name(self) -> &'static str {
        self.as_str()
    }

    fn default_value(self, props: &BadgeProps) -> ControlTokenValue {
        use BadgeStyle::*;

        let alias = match self {
            BadgeToken::BackgroundTintColor => match props.style {
                Default => ColorToken::BrandBackgroundTint,
                Danger => ColorToken::DangerBackground1,
                SevereWarning => ColorToken::SevereBackground1,
                Warning => ColorToken::WarningBackground1,
                Success => ColorToken::SuccessBackground1,
                Neutral => ColorToken::Background5,
            },
            BadgeToken::BackgroundFilledColor => match props.style {
                Default => ColorToken::BrandBackground1,
                Danger => ColorToken::DangerBackground2,
                SevereWarning => ColorToken::SevereBackground2,
                Warning => ColorToken::WarningBackground2,
                Success => ColorToken::SuccessBackground2,
                Neutral => ColorToken::Background5Selected,
            },
            BadgeToken::BackgroundDisabledColor => match props.style {
                Default => ColorToken::BrandBackground3,
                _ => ColorToken::Background5,
            },
            BadgeToken::ForegroundTintColor => match props.style {
                Default => ColorToken::BrandForegroundTint,
                Danger => ColorToken::DangerForeground1,
                SevereWarning => ColorToken::SevereForeground1,
                Warning => ColorToken::WarningForeground1,
                Success => ColorToken::SuccessForeground1,
                Neutral => ColorToken::Foreground2,
            },
            BadgeToken::ForegroundFilledColor => match props.style {
                Default => ColorToken::ForegroundOnColor,
                Danger | SevereWarning | Success => ColorToken::ForegroundLightStatic,
                Warning => ColorToken::ForegroundDarkStatic,
                Neutral => ColorToken::Foreground1,
            },
            BadgeToken::ForegroundDisabledColor => match props.style {
                Default => ColorToken::BrandForegroundDisabled1,
                _ => ColorToken::ForegroundDisabled1,
            },
            BadgeToken::BorderRadius => {
                let radius = match props.size {
                    BadgeSize::Small => CornerRadius::Radius20,
                    BadgeSize::Medium => CornerRadius::Radius40,
                };
                return radius.value().into();
            }
        };
        ControlTokenValue::alias_color(alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_core::{Appearance, Color};
    use fluent_theme::{ControlTokenSet, Theme, TokenKind};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn status_styles_use_status_aliases() {
        let theme = Arc::new(Theme::default());
        let tokens = ControlTokenSet::<BadgeToken>::new(
            BadgeProps::new(BadgeStyle::Danger, BadgeSize::Medium),
            theme.clone(),
        );
        assert_eq!(
            tokens.color(BadgeToken::BackgroundFilledColor, Appearance::LIGHT),
            theme.color(ColorToken::DangerBackground2, &Appearance::LIGHT)
        );
        assert_eq!(
            tokens.color(BadgeToken::ForegroundFilledColor, Appearance::LIGHT),
            Color::WHITE
        );
    }

    #[test]
    fn radius_depends_on_size() {
        let theme = Arc::new(Theme::default());
        let mut tokens = ControlTokenSet::<BadgeToken>::new(BadgeProps::default(), theme);
        assert_eq!(tokens.float(BadgeToken::BorderRadius, Appearance::LIGHT), 4.0);

        tokens.set_props(BadgeProps::new(BadgeStyle::Default, BadgeSize::Small));
        assert_eq!(tokens.float(BadgeToken::BorderRadius, Appearance::LIGHT), 2.0);
    }

    #[test]
    fn kinds() {
        for &token in BadgeToken::ALL {
            let expected = match token {
                BadgeToken::BorderRadius => TokenKind::Float,
                _ => TokenKind::Color,
            };
            assert_eq!(token.kind(), expected, "{token}");
        }
    }
}
