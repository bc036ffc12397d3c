use std::sync::Arc;

use fluent_controls::{
    apply_config, BadgeProps, BadgeSize, BadgeStyle, BadgeToken, ButtonProps, ButtonToken,
    ShimmerToken, CONTROLS,
};
use fluent_core::{Appearance, Color, FontInfo, FontWeight};
use fluent_theme::{
    ColorToken, ControlTokenSet, ControlTokenValue, SharedColorSet, SharedColorShade, SurfaceId,
    Theme, ThemeConfig, ThemeError, ThemePreset, ThemeRegistry, TokenOverrides, TokenSource,
};
use pretty_assertions::assert_eq;

fn purple() -> Color {
    Color::from_hex(0x822FFF)
}

fn orange() -> Color {
    SharedColorSet::DarkOrange.color(SharedColorShade::Primary)
}

fn neutral_badge(theme: &Arc<Theme>) -> ControlTokenSet<BadgeToken> {
    ControlTokenSet::new(
        BadgeProps::new(BadgeStyle::Neutral, BadgeSize::Medium),
        theme.clone(),
    )
}

#[test]
fn badge_override_walkthrough() {
    let theme = Arc::new(Theme::default());
    let mut badge = neutral_badge(&theme);
    let token = BadgeToken::BackgroundTintColor;
    let grey = theme.color(ColorToken::Background5, &Appearance::LIGHT);

    assert_eq!(badge.color(token, Appearance::LIGHT), grey);

    let mut theme_wide = TokenOverrides::<BadgeToken>::default();
    theme_wide.insert(token, ControlTokenValue::from(purple()));
    theme.register::<BadgeToken>(Some(theme_wide));
    assert_eq!(badge.color(token, Appearance::LIGHT), purple());

    badge.set_override(token, orange());
    assert_eq!(badge.color(token, Appearance::LIGHT), orange());

    badge.remove_override(token);
    assert_eq!(badge.color(token, Appearance::LIGHT), purple());

    theme.register::<BadgeToken>(None);
    assert_eq!(badge.color(token, Appearance::LIGHT), grey);
    assert_eq!(badge.source(token), TokenSource::Default);
}

#[test]
fn theme_wide_override_reaches_every_instance_on_the_surface() {
    let registry = ThemeRegistry::default();
    let window = SurfaceId::new(7);
    registry.register(window, Some(Arc::new(Theme::new("Window"))));

    let theme = registry.theme(window);
    let first = neutral_badge(&theme);
    let second = ControlTokenSet::<BadgeToken>::new(BadgeProps::default(), theme.clone());

    let mut theme_wide = TokenOverrides::<BadgeToken>::default();
    theme_wide.insert(BadgeToken::BorderRadius, 10.0_f32.into());
    theme.register::<BadgeToken>(Some(theme_wide));

    assert_eq!(first.float(BadgeToken::BorderRadius, Appearance::LIGHT), 10.0);
    assert_eq!(second.float(BadgeToken::BorderRadius, Appearance::LIGHT), 10.0);

    // another surface's theme is untouched
    let other = registry.theme(SurfaceId::new(8));
    let elsewhere = neutral_badge(&other);
    assert_eq!(elsewhere.float(BadgeToken::BorderRadius, Appearance::LIGHT), 4.0);
}

#[test]
fn surface_bound_badge_follows_registry_changes() {
    let registry = Arc::new(ThemeRegistry::default());
    let window = SurfaceId::new(7);
    let sheet = SurfaceId::new(9);
    registry.set_parent(sheet, Some(window));

    let badge = ControlTokenSet::<BadgeToken>::on_surface(
        BadgeProps::default(),
        registry.clone(),
        sheet,
    );
    assert_eq!(badge.surface(), Some(sheet));
    assert_eq!(badge.float(BadgeToken::BorderRadius, Appearance::LIGHT), 4.0);

    let rounded = Arc::new(Theme::new("Rounded"));
    let mut theme_wide = TokenOverrides::<BadgeToken>::default();
    theme_wide.insert(BadgeToken::BorderRadius, 10.0_f32.into());
    rounded.register::<BadgeToken>(Some(theme_wide));

    // registered on the parent window after the badge was built
    registry.register(window, Some(rounded));
    assert_eq!(badge.theme().name(), "Rounded");
    assert_eq!(badge.float(BadgeToken::BorderRadius, Appearance::LIGHT), 10.0);
    assert_eq!(badge.source(BadgeToken::BorderRadius), TokenSource::Theme);

    registry.register(window, None);
    assert_eq!(badge.theme().name(), "Default");
    assert_eq!(badge.float(BadgeToken::BorderRadius, Appearance::LIGHT), 4.0);
    assert_eq!(badge.source(BadgeToken::BorderRadius), TokenSource::Default);
}

#[test]
fn pinning_a_theme_detaches_from_the_surface() {
    let registry = Arc::new(ThemeRegistry::default());
    let window = SurfaceId::new(3);
    let mut badge = ControlTokenSet::<BadgeToken>::on_surface(
        BadgeProps::default(),
        registry.clone(),
        window,
    );

    assert!(badge.update_theme(Arc::new(ThemePreset::Purple.theme())));
    assert_eq!(badge.surface(), None);
    registry.register(window, Some(Arc::new(Theme::new("Window"))));
    assert_eq!(badge.theme().name(), "Purple");

    badge.bind_surface(registry, window);
    assert_eq!(badge.theme().name(), "Window");
}

#[test]
fn button_font_overrides_like_the_demo_toggles() {
    let theme = Arc::new(Theme::default());
    let mut button = ControlTokenSet::<ButtonToken>::new(ButtonProps::default(), theme.clone());
    let times = FontInfo::new(20.0, FontWeight::Regular).with_name("Times");
    let papyrus = FontInfo::new(10.0, FontWeight::Regular).with_name("Papyrus");

    let mut theme_wide = TokenOverrides::<ButtonToken>::default();
    theme_wide.insert(ButtonToken::TitleFont, times.clone().into());
    theme.register::<ButtonToken>(Some(theme_wide));
    assert_eq!(button.font(ButtonToken::TitleFont, Appearance::LIGHT), times);

    let mut per_control = TokenOverrides::<ButtonToken>::default();
    per_control.insert(ButtonToken::TitleFont, papyrus.clone().into());
    button.replace_all_overrides(Some(per_control));
    assert_eq!(button.font(ButtonToken::TitleFont, Appearance::LIGHT), papyrus);

    button.replace_all_overrides(None);
    assert_eq!(button.font(ButtonToken::TitleFont, Appearance::LIGHT), times);
}

#[test]
fn apply_config_registers_every_declared_control() {
    let config = ThemeConfig::from_toml_str(
        r##"
        [controls.badge.background_tint_color]
        color = { light = "#822FFF", dark = "#A275FF" }

        [controls.button.title_font]
        font = "title3"

        [controls.shimmer.shimmer_speed]
        float = 500
        "##,
    )
    .unwrap();
    let theme = Arc::new(config.build_theme().unwrap());
    apply_config(&theme, &config).unwrap();

    assert_eq!(theme.registered_controls(), vec!["badge", "button", "shimmer"]);
    let shimmer = ControlTokenSet::<ShimmerToken>::new(Default::default(), theme.clone());
    assert_eq!(shimmer.float(ShimmerToken::ShimmerSpeed, Appearance::LIGHT), 500.0);

    let badge = ControlTokenSet::<BadgeToken>::new(BadgeProps::default(), theme);
    assert_eq!(
        badge.color(BadgeToken::BackgroundTintColor, Appearance::DARK),
        Color::from_hex(0xA275FF)
    );
}

#[test]
fn apply_config_is_all_or_nothing() {
    let config = ThemeConfig::from_toml_str(
        r##"
        [controls.badge.border_radius]
        float = 3

        [controls.button.border_width]
        color = "#000000"
        "##,
    )
    .unwrap();
    let theme = Theme::default();

    assert!(matches!(
        apply_config(&theme, &config),
        Err(ThemeError::KindMismatch { .. })
    ));
    assert!(theme.registered_controls().is_empty());
}

#[test]
fn apply_config_rejects_unknown_controls() {
    let config = ThemeConfig::from_toml_str("[controls.slider.thumb]\nfloat = 3").unwrap();
    assert!(matches!(
        apply_config(&Theme::default(), &config),
        Err(ThemeError::UnknownControl(name)) if name == "slider"
    ));
    assert_eq!(CONTROLS, &["badge", "button", "avatar", "shimmer"]);
}
