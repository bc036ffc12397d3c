use std::sync::Arc;

use fluent_core::{Appearance, Color, ColorScheme};
use fluent_theme::{ColorToken, SurfaceId, Theme, ThemePreset, ThemeRegistry};
use pretty_assertions::assert_eq;

const WINDOW: SurfaceId = SurfaceId::new(1);
const PANEL: SurfaceId = SurfaceId::new(2);
const OTHER_WINDOW: SurfaceId = SurfaceId::new(3);

#[test]
fn unregistered_surface_uses_default_theme() {
    let registry = ThemeRegistry::default();
    assert_eq!(registry.theme(WINDOW).name(), "Default");
    assert!(registry.registered_theme(WINDOW).is_none());
}

#[test]
fn register_and_unregister() {
    let registry = ThemeRegistry::default();
    let purple = Arc::new(ThemePreset::Purple.theme());

    registry.register(WINDOW, Some(purple.clone()));
    assert!(Arc::ptr_eq(&registry.theme(WINDOW), &purple));
    assert_eq!(registry.surfaces(), vec![WINDOW]);

    registry.register(WINDOW, None);
    assert_eq!(registry.theme(WINDOW).name(), "Default");
    assert!(registry.surfaces().is_empty());
}

#[test]
fn children_inherit_nearest_ancestor_theme() {
    let registry = ThemeRegistry::default();
    let green = Arc::new(ThemePreset::Green.theme());
    let purple = Arc::new(ThemePreset::Purple.theme());
    let popup = SurfaceId::new(10);

    registry.set_parent(PANEL, Some(WINDOW));
    registry.set_parent(popup, Some(PANEL));
    registry.register(WINDOW, Some(green.clone()));

    assert!(Arc::ptr_eq(&registry.theme(popup), &green));
    assert!(registry.is_applicable_change(WINDOW, popup));
    assert!(!registry.is_applicable_change(popup, WINDOW));

    registry.register(PANEL, Some(purple.clone()));
    assert!(Arc::ptr_eq(&registry.theme(popup), &purple));
    assert!(Arc::ptr_eq(&registry.theme(WINDOW), &green));

    registry.set_parent(popup, None);
    assert_eq!(registry.parent(popup), None);
    assert_eq!(registry.theme(popup).name(), "Default");
}

#[test]
fn surfaces_are_isolated() {
    let registry = ThemeRegistry::default();
    registry.register(WINDOW, Some(Arc::new(ThemePreset::Green.theme())));
    assert_eq!(registry.theme(OTHER_WINDOW).name(), "Default");
    assert!(!registry.is_applicable_change(WINDOW, OTHER_WINDOW));
}

#[test]
fn separate_registries_do_not_interfere() {
    let first = ThemeRegistry::default();
    let second = ThemeRegistry::new(Arc::new(Theme::new("Fallback")));

    first.register(WINDOW, Some(Arc::new(ThemePreset::Purple.theme())));

    assert_eq!(first.theme(WINDOW).name(), "Purple");
    assert_eq!(second.theme(WINDOW).name(), "Fallback");
    assert_eq!(second.revision(), 0);
}

#[test]
fn default_theme_can_be_replaced() {
    let registry = ThemeRegistry::default();
    let before = registry.revision();
    registry.set_default_theme(Arc::new(ThemePreset::Green.theme()));

    assert!(registry.revision() > before);
    let dark = Appearance::new(ColorScheme::Dark);
    assert_eq!(
        registry.theme(PANEL).color(ColorToken::BrandBackground1, &dark),
        Color::from_hex(0x55B17E)
    );
}
