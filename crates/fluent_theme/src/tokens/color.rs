//! Alias color tokens
//!
//! Semantic color names consumed by controls. Each resolves to a
//! [`DynamicColor`] built from global tokens unless the theme overrides it.

use fluent_core::DynamicColor;

use super::global::{
    brand_pair, neutral_pair, shared_pair, BrandColor, NeutralColor, SharedColorSet,
    SharedColorShade,
};

crate::token_keys! {
    /// Semantic color token keys
    pub enum ColorToken {
        // Neutral backgrounds
        Background1 => "background1",
        Background1Pressed => "background1_pressed",
        Background1Selected => "background1_selected",
        Background2 => "background2",
        Background2Pressed => "background2_pressed",
        Background2Selected => "background2_selected",
        Background3 => "background3",
        Background3Pressed => "background3_pressed",
        Background3Selected => "background3_selected",
        Background4 => "background4",
        Background4Hover => "background4_hover",
        Background4Pressed => "background4_pressed",
        Background4Selected => "background4_selected",
        Background5 => "background5",
        Background5Pressed => "background5_pressed",
        Background5Selected => "background5_selected",
        Background6 => "background6",
        BackgroundCanvas => "background_canvas",
        BackgroundDarkStatic => "background_dark_static",
        BackgroundLightStatic => "background_light_static",
        BackgroundLightStaticDisabled => "background_light_static_disabled",
        BackgroundInverted => "background_inverted",
        BackgroundDisabled => "background_disabled",
        Stencil1 => "stencil1",
        Stencil2 => "stencil2",

        // Neutral foregrounds
        Foreground1 => "foreground1",
        Foreground2 => "foreground2",
        Foreground3 => "foreground3",
        Foreground4 => "foreground4",
        ForegroundDisabled1 => "foreground_disabled1",
        ForegroundDisabled2 => "foreground_disabled2",
        ForegroundOnColor => "foreground_on_color",
        ForegroundDarkStatic => "foreground_dark_static",
        ForegroundLightStatic => "foreground_light_static",

        // Glass foregrounds
        GlassForeground1 => "glass_foreground1",
        GlassForegroundDisabled1 => "glass_foreground_disabled1",

        // Neutral strokes
        Stroke1 => "stroke1",
        Stroke1Pressed => "stroke1_pressed",
        Stroke2 => "stroke2",
        StrokeAccessible => "stroke_accessible",
        StrokeFocus1 => "stroke_focus1",
        StrokeFocus2 => "stroke_focus2",
        StrokeDisabled => "stroke_disabled",

        // Brand backgrounds
        BrandBackground1 => "brand_background1",
        BrandBackground1Pressed => "brand_background1_pressed",
        BrandBackground1Selected => "brand_background1_selected",
        BrandBackground2 => "brand_background2",
        BrandBackground2Pressed => "brand_background2_pressed",
        BrandBackground2Selected => "brand_background2_selected",
        BrandBackground3 => "brand_background3",
        BrandBackgroundTint => "brand_background_tint",
        BrandBackgroundDisabled => "brand_background_disabled",

        // Brand foregrounds
        BrandForeground1 => "brand_foreground1",
        BrandForeground1Pressed => "brand_foreground1_pressed",
        BrandForeground1Selected => "brand_foreground1_selected",
        BrandForegroundTint => "brand_foreground_tint",
        BrandForegroundDisabled1 => "brand_foreground_disabled1",
        BrandForegroundDisabled2 => "brand_foreground_disabled2",

        // Brand gradient stops
        BrandGradient1 => "brand_gradient1",
        BrandGradient2 => "brand_gradient2",
        BrandGradient3 => "brand_gradient3",

        // Brand strokes
        BrandStroke1 => "brand_stroke1",
        BrandStroke1Pressed => "brand_stroke1_pressed",
        BrandStroke1Selected => "brand_stroke1_selected",

        // Status
        DangerBackground1 => "danger_background1",
        DangerBackground2 => "danger_background2",
        DangerForeground1 => "danger_foreground1",
        DangerForeground2 => "danger_foreground2",
        DangerStroke1 => "danger_stroke1",
        DangerStroke2 => "danger_stroke2",
        SuccessBackground1 => "success_background1",
        SuccessBackground2 => "success_background2",
        SuccessForeground1 => "success_foreground1",
        SuccessForeground2 => "success_foreground2",
        SuccessStroke1 => "success_stroke1",
        WarningBackground1 => "warning_background1",
        WarningBackground2 => "warning_background2",
        WarningForeground1 => "warning_foreground1",
        WarningForeground2 => "warning_foreground2",
        WarningStroke1 => "warning_stroke1",
        SevereBackground1 => "severe_background1",
        SevereBackground2 => "severe_background2",
        SevereForeground1 => "severe_foreground1",
        SevereForeground2 => "severe_foreground2",
        SevereStroke1 => "severe_stroke1",

        // Presence
        PresenceAway => "presence_away",
        PresenceDnd => "presence_dnd",
        PresenceAvailable => "presence_available",
        PresenceOof => "presence_oof",
    }
}

impl ColorToken {
    /// Built-in value before any theme override
    pub fn default_color(self) -> DynamicColor {
        match self {
            ColorToken::Foreground1 => neutral_pair(NeutralColor::Grey14, NeutralColor::White),
            ColorToken::Foreground2 => neutral_pair(NeutralColor::Grey38, NeutralColor::Grey84),
            ColorToken::Foreground3 | ColorToken::Foreground4 => neutral_pair(NeutralColor::Grey50, NeutralColor::Grey68),
            ColorToken::ForegroundDisabled1 => neutral_pair(NeutralColor::Grey74, NeutralColor::Grey36),
            ColorToken::ForegroundDisabled2 => neutral_pair(NeutralColor::White, NeutralColor::Grey18),
            ColorToken::ForegroundOnColor => neutral_pair(NeutralColor::White, NeutralColor::Black),
            ColorToken::BrandForegroundTint => brand_pair(BrandColor::Comm60, BrandColor::Comm130),
            ColorToken::BrandForeground1 => brand_pair(BrandColor::Comm80, BrandColor::Comm100),
            ColorToken::BrandForeground1Pressed => brand_pair(BrandColor::Comm50, BrandColor::Comm140),
            ColorToken::BrandForeground1Selected => brand_pair(BrandColor::Comm60, BrandColor::Comm120),
            ColorToken::BrandForegroundDisabled1 => DynamicColor::new(BrandColor::Comm90.color()),
            ColorToken::BrandForegroundDisabled2 => brand_pair(BrandColor::Comm140, BrandColor::Comm40),
            ColorToken::GlassForeground1 => neutral_pair(NeutralColor::Grey30, NeutralColor::Grey92),
            ColorToken::GlassForegroundDisabled1 => neutral_pair(NeutralColor::Grey60, NeutralColor::Grey50),
            ColorToken::BrandGradient1 => brand_pair(BrandColor::GradientPrimaryLight, BrandColor::GradientPrimaryDark),
            ColorToken::BrandGradient2 => brand_pair(BrandColor::GradientSecondaryLight, BrandColor::GradientSecondaryDark),
            ColorToken::BrandGradient3 => brand_pair(BrandColor::GradientTertiaryLight, BrandColor::GradientTertiaryDark),
            ColorToken::ForegroundDarkStatic => neutral_pair(NeutralColor::Black, NeutralColor::Black),
            ColorToken::ForegroundLightStatic => neutral_pair(NeutralColor::White, NeutralColor::White),
            ColorToken::Background1 => neutral_pair(NeutralColor::White, NeutralColor::Black)
                .with_dark_elevated(NeutralColor::Grey4.color()),
            ColorToken::Background1Pressed => neutral_pair(NeutralColor::Grey88, NeutralColor::Grey18)
                .with_dark_elevated(NeutralColor::Grey18.color()),
            ColorToken::Background1Selected => neutral_pair(NeutralColor::Grey92, NeutralColor::Grey14)
                .with_dark_elevated(NeutralColor::Grey14.color()),
            ColorToken::Background2 => neutral_pair(NeutralColor::White, NeutralColor::Grey12)
                .with_dark_elevated(NeutralColor::Grey16.color()),
            ColorToken::Background2Pressed => neutral_pair(NeutralColor::Grey88, NeutralColor::Grey30)
                .with_dark_elevated(NeutralColor::Grey30.color()),
            ColorToken::Background2Selected => neutral_pair(NeutralColor::Grey92, NeutralColor::Grey26)
                .with_dark_elevated(NeutralColor::Grey26.color()),
            ColorToken::Background3 => neutral_pair(NeutralColor::White, NeutralColor::Grey16)
                .with_dark_elevated(NeutralColor::Grey20.color()),
            ColorToken::Background3Pressed => neutral_pair(NeutralColor::Grey88, NeutralColor::Grey34)
                .with_dark_elevated(NeutralColor::Grey34.color()),
            ColorToken::Background3Selected => neutral_pair(NeutralColor::Grey92, NeutralColor::Grey30)
                .with_dark_elevated(NeutralColor::Grey30.color()),
            ColorToken::Background4 | ColorToken::Background4Hover => neutral_pair(NeutralColor::Grey98, NeutralColor::Grey20)
                .with_dark_elevated(NeutralColor::Grey24.color()),
            ColorToken::Background4Pressed => neutral_pair(NeutralColor::Grey86, NeutralColor::Grey38)
                .with_dark_elevated(NeutralColor::Grey38.color()),
            ColorToken::Background4Selected => neutral_pair(NeutralColor::Grey90, NeutralColor::Grey34)
                .with_dark_elevated(NeutralColor::Grey34.color()),
            ColorToken::Background5 => neutral_pair(NeutralColor::Grey94, NeutralColor::Grey24)
                .with_dark_elevated(NeutralColor::Grey28.color()),
            ColorToken::Background5Pressed => neutral_pair(NeutralColor::Grey82, NeutralColor::Grey42)
                .with_dark_elevated(NeutralColor::Grey42.color()),
            ColorToken::Background5Selected => neutral_pair(NeutralColor::Grey86, NeutralColor::Grey38)
                .with_dark_elevated(NeutralColor::Grey38.color()),
            ColorToken::Background6 => neutral_pair(NeutralColor::Grey82, NeutralColor::Grey36)
                .with_dark_elevated(NeutralColor::Grey40.color()),
            ColorToken::BackgroundDisabled => neutral_pair(NeutralColor::Grey88, NeutralColor::Grey32)
                .with_dark_elevated(NeutralColor::Grey32.color()),
            ColorToken::BrandBackgroundTint => brand_pair(BrandColor::Comm150, BrandColor::Comm40),
            ColorToken::BrandBackground1 => brand_pair(BrandColor::Comm80, BrandColor::Comm100),
            ColorToken::BrandBackground1Pressed => brand_pair(BrandColor::Comm50, BrandColor::Comm140),
            ColorToken::BrandBackground1Selected => brand_pair(BrandColor::Comm60, BrandColor::Comm120),
            ColorToken::BrandBackground2 => DynamicColor::new(BrandColor::Comm70.color()),
            ColorToken::BrandBackground2Pressed => DynamicColor::new(BrandColor::Comm40.color()),
            ColorToken::BrandBackground2Selected => DynamicColor::new(BrandColor::Comm80.color()),
            ColorToken::BrandBackground3 => brand_pair(BrandColor::Comm60, BrandColor::Comm120),
            ColorToken::BrandBackgroundDisabled => brand_pair(BrandColor::Comm140, BrandColor::Comm40),
            ColorToken::Stencil1 => neutral_pair(NeutralColor::Grey90, NeutralColor::Grey34),
            ColorToken::Stencil2 => neutral_pair(NeutralColor::Grey98, NeutralColor::Grey20),
            ColorToken::BackgroundCanvas => neutral_pair(NeutralColor::Grey96, NeutralColor::Grey8)
                .with_dark_elevated(NeutralColor::Grey14.color()),
            ColorToken::BackgroundDarkStatic => neutral_pair(NeutralColor::Grey14, NeutralColor::Grey24)
                .with_dark_elevated(NeutralColor::Grey30.color()),
            ColorToken::BackgroundInverted => neutral_pair(NeutralColor::Grey46, NeutralColor::Grey72)
                .with_dark_elevated(NeutralColor::Grey78.color()),
            ColorToken::BackgroundLightStatic => neutral_pair(NeutralColor::White, NeutralColor::White)
                .with_dark_elevated(NeutralColor::White.color()),
            ColorToken::BackgroundLightStaticDisabled => neutral_pair(NeutralColor::White, NeutralColor::Grey68)
                .with_dark_elevated(NeutralColor::Grey42.color()),
            ColorToken::Stroke1 => neutral_pair(NeutralColor::Grey82, NeutralColor::Grey30)
                .with_dark_elevated(NeutralColor::Grey36.color()),
            ColorToken::Stroke1Pressed => neutral_pair(NeutralColor::Grey70, NeutralColor::Grey48),
            ColorToken::Stroke2 => neutral_pair(NeutralColor::Grey88, NeutralColor::Grey24)
                .with_dark_elevated(NeutralColor::Grey30.color()),
            ColorToken::StrokeAccessible => neutral_pair(NeutralColor::Grey38, NeutralColor::Grey62)
                .with_dark_elevated(NeutralColor::Grey68.color()),
            ColorToken::StrokeFocus1 => neutral_pair(NeutralColor::White, NeutralColor::Black),
            ColorToken::StrokeFocus2 => neutral_pair(NeutralColor::Black, NeutralColor::White),
            ColorToken::StrokeDisabled => neutral_pair(NeutralColor::Grey88, NeutralColor::Grey26)
                .with_dark_elevated(NeutralColor::Grey32.color()),
            ColorToken::BrandStroke1 => brand_pair(BrandColor::Comm80, BrandColor::Comm100),
            ColorToken::BrandStroke1Pressed => brand_pair(BrandColor::Comm50, BrandColor::Comm140),
            ColorToken::BrandStroke1Selected => brand_pair(BrandColor::Comm60, BrandColor::Comm120),
            ColorToken::DangerBackground1 => shared_pair(SharedColorSet::Red, SharedColorShade::Tint60, SharedColorShade::Shade40),
            ColorToken::DangerBackground2 => shared_pair(SharedColorSet::Red, SharedColorShade::Primary, SharedColorShade::Shade10),
            ColorToken::DangerForeground1 => shared_pair(SharedColorSet::Red, SharedColorShade::Shade10, SharedColorShade::Tint30),
            ColorToken::DangerForeground2 => shared_pair(SharedColorSet::Red, SharedColorShade::Primary, SharedColorShade::Tint30),
            ColorToken::DangerStroke1 => shared_pair(SharedColorSet::Red, SharedColorShade::Tint20, SharedColorShade::Tint20),
            ColorToken::DangerStroke2 => shared_pair(SharedColorSet::Red, SharedColorShade::Primary, SharedColorShade::Tint30),
            ColorToken::SuccessBackground1 => shared_pair(SharedColorSet::Green, SharedColorShade::Tint60, SharedColorShade::Shade40),
            ColorToken::SuccessBackground2 => shared_pair(SharedColorSet::Green, SharedColorShade::Primary, SharedColorShade::Shade10),
            ColorToken::SuccessForeground1 => shared_pair(SharedColorSet::Green, SharedColorShade::Shade10, SharedColorShade::Tint30),
            ColorToken::SuccessForeground2 => shared_pair(SharedColorSet::Green, SharedColorShade::Primary, SharedColorShade::Tint30),
            ColorToken::SuccessStroke1 => shared_pair(SharedColorSet::Green, SharedColorShade::Tint20, SharedColorShade::Tint20),
            ColorToken::SevereBackground1 => shared_pair(SharedColorSet::DarkOrange, SharedColorShade::Tint60, SharedColorShade::Shade40),
            ColorToken::SevereBackground2 => shared_pair(SharedColorSet::DarkOrange, SharedColorShade::Primary, SharedColorShade::Shade10),
            ColorToken::SevereForeground1 => shared_pair(SharedColorSet::DarkOrange, SharedColorShade::Shade10, SharedColorShade::Tint30),
            ColorToken::SevereForeground2 => shared_pair(SharedColorSet::DarkOrange, SharedColorShade::Shade20, SharedColorShade::Tint30),
            ColorToken::SevereStroke1 => shared_pair(SharedColorSet::DarkOrange, SharedColorShade::Tint10, SharedColorShade::Tint20),
            ColorToken::WarningBackground1 => shared_pair(SharedColorSet::Yellow, SharedColorShade::Tint60, SharedColorShade::Shade40),
            ColorToken::WarningBackground2 => shared_pair(SharedColorSet::Yellow, SharedColorShade::Primary, SharedColorShade::Shade10),
            ColorToken::WarningForeground1 => shared_pair(SharedColorSet::Yellow, SharedColorShade::Shade30, SharedColorShade::Tint30),
            ColorToken::WarningForeground2 => shared_pair(SharedColorSet::Yellow, SharedColorShade::Shade30, SharedColorShade::Tint30),
            ColorToken::WarningStroke1 => shared_pair(SharedColorSet::Yellow, SharedColorShade::Shade30, SharedColorShade::Shade20),
            ColorToken::PresenceAway => DynamicColor::new(SharedColorSet::Marigold.color(SharedColorShade::Primary)),
            ColorToken::PresenceDnd => shared_pair(SharedColorSet::Red, SharedColorShade::Primary, SharedColorShade::Tint10),
            ColorToken::PresenceAvailable => shared_pair(SharedColorSet::LightGreen, SharedColorShade::Primary, SharedColorShade::Tint20),
            ColorToken::PresenceOof => shared_pair(SharedColorSet::Berry, SharedColorShade::Primary, SharedColorShade::Tint20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_core::{Appearance, Color, ColorScheme};
    use pretty_assertions::assert_eq;

    #[test]
    fn background_elevation() {
        let dark = Appearance::new(ColorScheme::Dark);
        let background = ColorToken::Background1.default_color();
        assert_eq!(background.resolve(&Appearance::LIGHT), Color::WHITE);
        assert_eq!(background.resolve(&dark), Color::BLACK);
        assert_eq!(background.resolve(&dark.elevated()), Color::from_hex(0x0A0A0A));
    }

    #[test]
    fn brand_background_follows_comm_ramp() {
        let brand = ColorToken::BrandBackground1.default_color();
        assert_eq!(brand.resolve(&Appearance::LIGHT), Color::from_hex(0x0F6CBD));
        assert_eq!(brand.resolve(&Appearance::DARK), Color::from_hex(0x479EF5));
    }

    #[test]
    fn light_only_tokens_stay_light_in_dark_mode() {
        let away = ColorToken::PresenceAway.default_color();
        assert_eq!(away.resolve(&Appearance::DARK), Color::from_hex(0xEAA300));
    }

    #[test]
    fn names_are_snake_case() {
        assert_eq!(ColorToken::BrandBackground1Pressed.as_str(), "brand_background1_pressed");
        assert_eq!(
            ColorToken::from_name("danger_background2"),
            Some(ColorToken::DangerBackground2)
        );
    }
}
