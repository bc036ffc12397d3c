use std::sync::Arc;

use fluent_core::{Appearance, Color, ColorScheme, FontInfo, FontWeight};
use fluent_theme::{
    token_keys, ColorToken, ControlTokenSet, ControlTokenValue, Theme, ThemeError, TokenKind,
    TokenOverrides, TokenSetKey, TokenSource, TokenValue, TypographyToken,
};
use pretty_assertions::assert_eq;

token_keys! {
    pub enum ChipToken {
        Background => "background",
        Label => "label",
        CornerRadius => "corner_radius",
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChipProps {
    pub large: bool,
}

impl TokenSetKey for ChipToken {
    type Props = ChipProps;
    const CONTROL: &'static str = "chip";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn name(self) -> &'static str {
        self.as_str()
    }

    fn default_value(self, props: &ChipProps) -> ControlTokenValue {
        match self {
            ChipToken::Background => ControlTokenValue::alias_color(ColorToken::Background3),
            ChipToken::Label => ControlTokenValue::alias_typography(TypographyToken::Caption1),
            ChipToken::CornerRadius => {
                let radius = if props.large { 8.0_f32 } else { 4.0 };
                radius.into()
            }
        }
    }
}

token_keys! {
    pub enum TagToken {
        Fill => "fill",
        Radius => "radius",
    }
}

impl TokenSetKey for TagToken {
    type Props = ();
    const CONTROL: &'static str = "tag";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn name(self) -> &'static str {
        self.as_str()
    }

    fn default_value(self, _: &()) -> ControlTokenValue {
        match self {
            TagToken::Fill => ControlTokenValue::alias_color(ColorToken::Background1),
            TagToken::Radius => 2.0_f32.into(),
        }
    }
}

const RED: u32 = 0xD13438;
const BLUE: u32 = 0x0F6CBD;

fn chip(theme: &Arc<Theme>) -> ControlTokenSet<ChipToken> {
    ControlTokenSet::new(ChipProps::default(), theme.clone())
}

fn default_value(theme: &Theme, token: ChipToken, appearance: Appearance) -> TokenValue {
    use fluent_theme::TokenContext;
    token
        .default_value(&ChipProps::default())
        .evaluate(&TokenContext::new(theme, appearance))
}

fn theme_overrides(color: u32) -> TokenOverrides<ChipToken> {
    let mut overrides = TokenOverrides::default();
    overrides.insert(ChipToken::Background, Color::from_hex(color).into());
    overrides
}

#[test]
fn no_overrides_yields_defaults() {
    let theme = Arc::new(Theme::default());
    let chip = chip(&theme);
    for appearance in [Appearance::LIGHT, Appearance::DARK, Appearance::DARK.elevated()] {
        for &token in ChipToken::ALL {
            assert_eq!(chip.get(token, appearance), default_value(&theme, token, appearance));
            assert_eq!(chip.source(token), TokenSource::Default);
        }
    }
    assert_eq!(
        chip.font(ChipToken::Label, Appearance::LIGHT),
        FontInfo::new(13.0, FontWeight::Regular)
    );
}

#[test]
fn instance_override_beats_theme_override() {
    let theme = Arc::new(Theme::default());
    theme.register::<ChipToken>(Some(theme_overrides(RED)));

    let mut chip = chip(&theme);
    chip.set_override(ChipToken::Background, Color::from_hex(BLUE));

    assert_eq!(chip.color(ChipToken::Background, Appearance::LIGHT), Color::from_hex(BLUE));
    assert_eq!(chip.source(ChipToken::Background), TokenSource::Instance);
}

#[test]
fn theme_override_applies_without_instance_override() {
    let theme = Arc::new(Theme::default());
    let chip = chip(&theme);
    theme.register::<ChipToken>(Some(theme_overrides(RED)));

    // registration after construction is visible on the next lookup
    assert_eq!(chip.color(ChipToken::Background, Appearance::DARK), Color::from_hex(RED));
    assert_eq!(chip.source(ChipToken::Background), TokenSource::Theme);
    assert_eq!(chip.source(ChipToken::CornerRadius), TokenSource::Default);
}

#[test]
fn remove_override_restores_fallback_and_is_idempotent() {
    let theme = Arc::new(Theme::default());
    theme.register::<ChipToken>(Some(theme_overrides(RED)));
    let mut chip = chip(&theme);

    chip.set_override(ChipToken::Background, Color::from_hex(BLUE));
    chip.remove_override(ChipToken::Background);
    assert_eq!(chip.color(ChipToken::Background, Appearance::LIGHT), Color::from_hex(RED));

    let revision = chip.revision();
    chip.remove_override(ChipToken::Background);
    assert_eq!(chip.revision(), revision);
    assert_eq!(chip.color(ChipToken::Background, Appearance::LIGHT), Color::from_hex(RED));

    chip.set_override(ChipToken::CornerRadius, 12.0_f32);
    chip.remove_override(ChipToken::CornerRadius);
    assert_eq!(chip.float(ChipToken::CornerRadius, Appearance::LIGHT), 4.0);
}

#[test]
fn replace_all_overrides_none_or_empty_clears() {
    let theme = Arc::new(Theme::default());
    let mut chip = chip(&theme);
    chip.set_override(ChipToken::Background, Color::from_hex(BLUE));
    chip.set_override(ChipToken::CornerRadius, 12.0_f32);

    chip.replace_all_overrides(None);
    assert!(chip.instance_overrides().is_empty());
    for &token in ChipToken::ALL {
        assert_eq!(chip.source(token), TokenSource::Default);
    }

    chip.set_override(ChipToken::CornerRadius, 12.0_f32);
    chip.replace_all_overrides(Some(TokenOverrides::default()));
    assert!(chip.instance_overrides().is_empty());
}

#[test]
fn replace_all_overrides_sets_exactly_the_given_tokens() {
    let theme = Arc::new(Theme::default());
    let mut chip = chip(&theme);
    chip.set_override(ChipToken::CornerRadius, 12.0_f32);

    let mut overrides = TokenOverrides::default();
    overrides.insert(ChipToken::Background, ControlTokenValue::from(Color::from_hex(BLUE)));
    chip.replace_all_overrides(Some(overrides));

    assert_eq!(chip.source(ChipToken::Background), TokenSource::Instance);
    assert_eq!(chip.source(ChipToken::CornerRadius), TokenSource::Default);
}

#[test]
fn registering_empty_map_clears_theme_override() {
    let theme = Arc::new(Theme::default());
    let chip = chip(&theme);
    theme.register::<ChipToken>(Some(theme_overrides(RED)));
    assert_eq!(theme.registered_controls(), vec!["chip"]);

    theme.register::<ChipToken>(Some(TokenOverrides::default()));
    assert!(theme.tokens::<ChipToken>().is_none());
    assert_eq!(chip.source(ChipToken::Background), TokenSource::Default);
}

#[test]
fn theme_overrides_are_per_control_type() {
    let theme = Arc::new(Theme::default());
    theme.register::<ChipToken>(Some(theme_overrides(RED)));

    let tag = ControlTokenSet::<TagToken>::new((), theme.clone());
    assert_eq!(tag.source(TagToken::Fill), TokenSource::Default);
    assert!(theme.tokens::<TagToken>().is_none());
}

#[test]
fn providers_track_appearance_and_props() {
    let theme = Arc::new(Theme::default());
    let mut chip = chip(&theme);

    let light = chip.color(ChipToken::Background, Appearance::LIGHT);
    let dark = chip.color(ChipToken::Background, Appearance::new(ColorScheme::Dark));
    assert_eq!(light, Color::from_hex(0xFFFFFF));
    assert_eq!(dark, Color::from_hex(0x292929));

    let revision = chip.revision();
    chip.set_props(ChipProps { large: true });
    assert!(chip.revision() > revision);
    assert_eq!(chip.float(ChipToken::CornerRadius, Appearance::LIGHT), 8.0);
}

#[test]
fn theme_switch_changes_alias_backed_defaults() {
    let default_theme = Arc::new(Theme::default());
    let custom = Arc::new(
        Theme::builder("Custom")
            .color(ColorToken::Background3, Color::from_hex(0x101010).into())
            .build(),
    );
    let mut chip = chip(&default_theme);

    assert!(!chip.update_theme(default_theme.clone()));
    assert!(chip.update_theme(custom));
    assert_eq!(chip.theme().name(), "Custom");
    assert_eq!(
        chip.color(ChipToken::Background, Appearance::LIGHT),
        Color::from_hex(0x101010)
    );
}

#[test]
fn theme_revision_counts_registrations() {
    let theme = Theme::default();
    assert_eq!(theme.revision(), 0);
    theme.register::<ChipToken>(Some(theme_overrides(RED)));
    theme.register::<ChipToken>(None);
    assert_eq!(theme.revision(), 2);
}

#[test]
fn overrides_copied_from_parent_control() {
    let theme = Arc::new(Theme::default());
    let mut parent = chip(&theme);
    parent.set_override(ChipToken::Background, Color::from_hex(BLUE));

    let mut tag = ControlTokenSet::<TagToken>::new((), theme.clone());
    tag.set_override(TagToken::Radius, 9.0_f32);
    tag.set_overrides_from(
        &parent,
        &[
            (TagToken::Fill, ChipToken::Background),
            (TagToken::Radius, ChipToken::CornerRadius),
        ],
    );

    assert_eq!(tag.color(TagToken::Fill, Appearance::LIGHT), Color::from_hex(BLUE));
    assert_eq!(tag.source(TagToken::Fill), TokenSource::Instance);
    // parent has no radius override, so ours is dropped
    assert_eq!(tag.source(TagToken::Radius), TokenSource::Default);
    assert_eq!(tag.float(TagToken::Radius, Appearance::LIGHT), 2.0);
}

#[test]
fn try_accessors_report_kind_mismatch() {
    let theme = Arc::new(Theme::default());
    let mut chip = chip(&theme);
    chip.set_override(ChipToken::CornerRadius, Color::WHITE);

    match chip.try_float(ChipToken::CornerRadius, Appearance::LIGHT) {
        Err(ThemeError::KindMismatch { token, expected, found }) => {
            assert_eq!(token, "chip.corner_radius");
            assert_eq!(expected, TokenKind::Float);
            assert_eq!(found, TokenKind::Color);
        }
        other => panic!("expected a kind mismatch, got {other:?}"),
    }
    assert_eq!(
        chip.try_color(ChipToken::CornerRadius, Appearance::LIGHT).unwrap(),
        Color::WHITE
    );
}

#[test]
fn resolve_all_lists_every_token() {
    let theme = Arc::new(Theme::default());
    let mut chip = chip(&theme);
    chip.set_override(ChipToken::CornerRadius, 6.0_f32);

    let resolved = chip.resolve_all(Appearance::LIGHT);
    assert_eq!(resolved.len(), ChipToken::ALL.len());
    assert_eq!(
        resolved[2],
        (ChipToken::CornerRadius, TokenValue::Float(6.0), TokenSource::Instance)
    );
}

#[test]
fn token_kinds_follow_defaults() {
    assert_eq!(ChipToken::Background.kind(), TokenKind::Color);
    assert_eq!(ChipToken::Label.kind(), TokenKind::Font);
    assert_eq!(ChipToken::from_name("corner_radius"), Some(ChipToken::CornerRadius));
    assert_eq!(<ChipToken as TokenSetKey>::from_name("padding"), None);
}
