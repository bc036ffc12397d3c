//! Button token set

use fluent_core::Color;
use fluent_theme::{
    token_keys, ColorToken, ControlTokenValue, CornerRadius, ShadowToken, Spacing, StrokeWidth,
    TokenSetKey, TypographyToken,
};

token_keys! {
    pub enum ButtonToken {
        BackgroundColor => "background_color",
        BackgroundFocusedColor => "background_focused_color",
        BackgroundDisabledColor => "background_disabled_color",
        BackgroundPressedColor => "background_pressed_color",
        BorderColor => "border_color",
        BorderFocusedColor => "border_focused_color",
        BorderDisabledColor => "border_disabled_color",
        BorderPressedColor => "border_pressed_color",
        BorderWidth => "border_width",
        CornerRadius => "corner_radius",
        /// Text and icon color
        ForegroundColor => "foreground_color",
        ForegroundDisabledColor => "foreground_disabled_color",
        ForegroundPressedColor => "foreground_pressed_color",
        TitleFont => "title_font",
        ShadowRest => "shadow_rest",
        /// Shadow when focused, disabled or pressed
        ShadowPressed => "shadow_pressed",
    }
}

token_keys! {
    #[derive(Default)]
    pub enum ButtonStyle {
        /// Brand fill, no border
        #[default]
        Accent => "accent",
        OutlineAccent => "outline_accent",
        OutlineNeutral => "outline_neutral",
        /// Brand foreground only
        Subtle => "subtle",
        TransparentNeutral => "transparent_neutral",
        Danger => "danger",
        DangerOutline => "danger_outline",
        DangerSubtle => "danger_subtle",
        FloatingAccent => "floating_accent",
        FloatingSubtle => "floating_subtle",
    }
}

impl ButtonStyle {
    pub fn is_floating(self) -> bool {
        matches!(self, ButtonStyle::FloatingAccent | ButtonStyle::FloatingSubtle)
    }

    fn is_outline(self) -> bool {
        matches!(
            self,
            ButtonStyle::OutlineAccent | ButtonStyle::OutlineNeutral | ButtonStyle::DangerOutline
        )
    }

    /// No fill in any state
    fn is_unfilled(self) -> bool {
        matches!(
            self,
            ButtonStyle::OutlineAccent
                | ButtonStyle::OutlineNeutral
                | ButtonStyle::Subtle
                | ButtonStyle::TransparentNeutral
                | ButtonStyle::DangerOutline
                | ButtonStyle::DangerSubtle
        )
    }
}

token_keys! {
    #[derive(Default)]
    pub enum ButtonSize {
        Large => "large",
        #[default]
        Medium => "medium",
        Small => "small",
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub style: ButtonStyle,
    pub size: ButtonSize,
}

impl ButtonProps {
    pub fn new(style: ButtonStyle, size: ButtonSize) -> Self {
        Self { style, size }
    }

    pub fn min_container_height(&self) -> f32 {
        match (self.style.is_floating(), self.size) {
            (true, ButtonSize::Large) => 56.0,
            (true, _) => 48.0,
            (false, ButtonSize::Large) => 52.0,
            (false, ButtonSize::Medium) => 40.0,
            (false, ButtonSize::Small) => 28.0,
        }
    }

    /// Space between the content and the frame
    pub fn horizontal_padding(&self) -> f32 {
        let spacing = match (self.style.is_floating(), self.size) {
            (true, ButtonSize::Large) => Spacing::Size160,
            (true, _) => Spacing::Size120,
            (false, ButtonSize::Large) => Spacing::Size200,
            (false, ButtonSize::Medium) => Spacing::Size120,
            (false, ButtonSize::Small) => Spacing::Size80,
        };
        spacing.value()
    }

    /// Trailing padding of a floating button showing both icon and title
    pub fn fab_alternative_padding(&self) -> f32 {
        match self.size {
            ButtonSize::Large => Spacing::Size200.value(),
            ButtonSize::Medium | ButtonSize::Small => Spacing::Size160.value(),
        }
    }

    pub fn title_image_spacing(&self) -> f32 {
        if !self.style.is_floating() && self.size == ButtonSize::Small {
            Spacing::Size40.value()
        } else {
            Spacing::Size80.value()
        }
    }
}

/// Alias color, or fully transparent for `None`
fn alias_or_clear(token: Option<ColorToken>) -> ControlTokenValue {
    match token {
        Some(token) => ControlTokenValue::alias_color(token),
        None => Color::CLEAR.into(),
    }
}

impl TokenSetKey for ButtonToken {
    type Props = ButtonProps;
    const CONTROL: &'static str = "button";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn name(self) -> &'static str {
        self.as_str()
    }

    fn default_value(self, props: &ButtonProps) -> ControlTokenValue {
        let style = props.style;
        let floating = style.is_floating();

        match self {
            ButtonToken::BackgroundColor => alias_or_clear(match style {
                ButtonStyle::Accent | ButtonStyle::FloatingAccent => {
                    Some(ColorToken::BrandBackground1)
                }
                ButtonStyle::Danger => Some(ColorToken::DangerBackground2),
                ButtonStyle::FloatingSubtle => Some(ColorToken::Background1),
                _ => None,
            }),
            ButtonToken::BackgroundFocusedColor => alias_or_clear(match style {
                ButtonStyle::Accent | ButtonStyle::FloatingAccent => {
                    Some(ColorToken::BrandBackground1Selected)
                }
                ButtonStyle::Danger => Some(ColorToken::DangerBackground2),
                ButtonStyle::FloatingSubtle => Some(ColorToken::Background1),
                _ => None,
            }),
            ButtonToken::BackgroundDisabledColor => {
                alias_or_clear((!style.is_unfilled()).then_some(ColorToken::Background5))
            }
            ButtonToken::BackgroundPressedColor => alias_or_clear(match style {
                ButtonStyle::Accent | ButtonStyle::FloatingAccent => {
                    Some(ColorToken::BrandBackground1Pressed)
                }
                ButtonStyle::Danger => Some(ColorToken::DangerBackground2),
                ButtonStyle::FloatingSubtle => Some(ColorToken::Background1Pressed),
                _ => None,
            }),
            ButtonToken::BorderColor => alias_or_clear(match style {
                ButtonStyle::OutlineAccent => Some(ColorToken::BrandStroke1),
                ButtonStyle::OutlineNeutral => Some(ColorToken::Stroke1),
                ButtonStyle::DangerOutline => Some(ColorToken::DangerForeground2),
                _ => None,
            }),
            ButtonToken::BorderFocusedColor => {
                alias_or_clear(style.is_outline().then_some(ColorToken::StrokeFocus2))
            }
            ButtonToken::BorderDisabledColor => {
                alias_or_clear(style.is_outline().then_some(ColorToken::StrokeDisabled))
            }
            ButtonToken::BorderPressedColor => alias_or_clear(match style {
                ButtonStyle::OutlineAccent => Some(ColorToken::BrandStroke1Pressed),
                ButtonStyle::OutlineNeutral => Some(ColorToken::Stroke1Pressed),
                ButtonStyle::DangerOutline => Some(ColorToken::DangerForeground2),
                _ => None,
            }),
            ButtonToken::BorderWidth => {
                let width = if style.is_outline() {
                    StrokeWidth::Width10
                } else {
                    StrokeWidth::WidthNone
                };
                width.value().into()
            }
            ButtonToken::CornerRadius => {
                if floating {
                    return (props.min_container_height() / 2.0).into();
                }
                let radius = match props.size {
                    ButtonSize::Large => CornerRadius::Radius120,
                    ButtonSize::Medium | ButtonSize::Small => CornerRadius::Radius80,
                };
                radius.value().into()
            }
            ButtonToken::ForegroundColor | ButtonToken::ForegroundPressedColor => {
                let brand = if self == ButtonToken::ForegroundPressedColor {
                    ColorToken::BrandForeground1Pressed
                } else {
                    ColorToken::BrandForeground1
                };
                ControlTokenValue::alias_color(match style {
                    ButtonStyle::Accent | ButtonStyle::FloatingAccent => {
                        ColorToken::ForegroundOnColor
                    }
                    ButtonStyle::OutlineAccent | ButtonStyle::Subtle => brand,
                    ButtonStyle::OutlineNeutral | ButtonStyle::TransparentNeutral => {
                        ColorToken::Foreground1
                    }
                    ButtonStyle::Danger => ColorToken::ForegroundLightStatic,
                    ButtonStyle::DangerOutline | ButtonStyle::DangerSubtle => {
                        ColorToken::DangerForeground2
                    }
                    ButtonStyle::FloatingSubtle => ColorToken::Foreground2,
                })
            }
            ButtonToken::ForegroundDisabledColor => {
                ControlTokenValue::alias_color(ColorToken::ForegroundDisabled1)
            }
            ButtonToken::TitleFont => ControlTokenValue::alias_typography(match props.size {
                ButtonSize::Large => TypographyToken::Body1Strong,
                ButtonSize::Medium | ButtonSize::Small if floating => TypographyToken::Body2Strong,
                ButtonSize::Medium | ButtonSize::Small => TypographyToken::Caption1Strong,
            }),
            ButtonToken::ShadowRest => ControlTokenValue::alias_shadow(if floating {
                ShadowToken::Shadow08
            } else {
                ShadowToken::Clear
            }),
            ButtonToken::ShadowPressed => ControlTokenValue::alias_shadow(if floating {
                ShadowToken::Shadow02
            } else {
                ShadowToken::Clear
            }),
        }
    }
}
