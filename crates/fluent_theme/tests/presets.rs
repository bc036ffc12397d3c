use fluent_core::{Appearance, Color, ColorScheme};
use fluent_theme::{ColorToken, GradientToken, ThemePreset};
use pretty_assertions::assert_eq;

#[test]
fn preset_catalog_contains_expected_presets() {
    let ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["default", "green", "purple"]);
    assert_eq!(ThemePreset::from_id("PURPLE"), Some(ThemePreset::Purple));
    assert_eq!(ThemePreset::from_id("teal"), None);
}

#[test]
fn default_preset_keeps_communication_blue() {
    let theme = ThemePreset::Default.theme();
    assert_eq!(theme.color_overrides().count(), 0);
    assert_eq!(
        theme.color(ColorToken::BrandBackground1, &Appearance::LIGHT),
        Color::from_hex(0x0F6CBD)
    );
}

#[test]
fn brand_presets_swap_brand_ramp_only() {
    let dark = Appearance::new(ColorScheme::Dark);
    for (preset, light_brand, dark_brand) in [
        (ThemePreset::Green, 0x107C41, 0x55B17E),
        (ThemePreset::Purple, 0x822FFF, 0xA275FF),
    ] {
        let theme = preset.theme();
        assert_eq!(theme.name(), preset.display_name());
        for token in [
            ColorToken::BrandBackground1,
            ColorToken::BrandForeground1,
            ColorToken::BrandStroke1,
        ] {
            assert_eq!(
                theme.color(token, &Appearance::LIGHT),
                Color::from_hex(light_brand),
                "{preset} {token} light"
            );
            assert_eq!(
                theme.color(token, &dark),
                Color::from_hex(dark_brand),
                "{preset} {token} dark"
            );
        }
        assert_eq!(
            theme.dynamic_color(ColorToken::Foreground1),
            ColorToken::Foreground1.default_color(),
            "{preset} leaves neutrals alone"
        );
    }
}

#[test]
fn green_gradient_uses_overridden_stops() {
    let theme = ThemePreset::Green.theme();
    let stops = theme.gradient(GradientToken::Flair);
    assert_eq!(stops.len(), 3);
    assert_eq!(stops[0].resolve(&Appearance::LIGHT), Color::from_hex(0x107C41));
    assert_eq!(stops[1].resolve(&Appearance::LIGHT), Color::from_hex(0xDCF51D));
    assert_eq!(stops[2].resolve(&Appearance::LIGHT), Color::from_hex(0x42B8B2));
}
