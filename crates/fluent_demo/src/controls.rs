//! Demo override sets per control, mirroring the demo app's two toggles.
//!
//! "Theme-wide" installs overrides on the theme so every instance of the
//! control changes; "per-control" installs them on a single token set.

use anyhow::{anyhow, Result};
use fluent_controls::{
    AvatarProps, AvatarSize, AvatarStyle, AvatarToken, BadgeProps, BadgeSize, BadgeStyle,
    BadgeToken, ButtonProps, ButtonSize, ButtonStyle, ButtonToken, ShimmerProps, ShimmerStyle,
    ShimmerToken,
};
use fluent_core::{Color, DynamicColor, FontInfo, FontWeight, ImageAsset};
use fluent_theme::{
    ColorToken, ControlTokenValue, SharedColorSet, SharedColorShade, ShadowToken, TokenOverrides,
    TokenSetKey,
};

/// A control the demo can build and override.
pub trait DemoControl: TokenSetKey {
    /// Build props from optional `--style` / `--size` names.
    fn props(style: Option<&str>, size: Option<&str>) -> Result<Self::Props>;

    fn theme_wide_overrides() -> TokenOverrides<Self>;

    fn per_control_overrides() -> TokenOverrides<Self>;
}

fn parse<T: Copy + Default>(
    kind: &str,
    name: Option<&str>,
    all: &[T],
    lookup: impl Fn(&str) -> Option<T>,
    label: impl Fn(&T) -> &'static str,
) -> Result<T> {
    let Some(name) = name else {
        return Ok(T::default());
    };
    lookup(name).ok_or_else(|| {
        let known: Vec<_> = all.iter().map(label).collect();
        anyhow!("unknown {kind} `{name}` (expected one of: {})", known.join(", "))
    })
}

fn reject(kind: &str, control: &str, name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => Err(anyhow!("{control} has no {kind} option (got `{name}`)")),
        None => Ok(()),
    }
}

fn purple() -> DynamicColor {
    DynamicColor::light_dark(Color::from_hex(0x822FFF), Color::from_hex(0xA275FF))
}

fn orange() -> Color {
    SharedColorSet::DarkOrange.color(SharedColorShade::Primary)
}

fn times() -> FontInfo {
    FontInfo::new(20.0, FontWeight::Regular).with_name("Times")
}

fn papyrus() -> FontInfo {
    FontInfo::new(10.0, FontWeight::Regular).with_name("Papyrus")
}

impl DemoControl for BadgeToken {
    fn props(style: Option<&str>, size: Option<&str>) -> Result<BadgeProps> {
        let style = parse(
            "badge style",
            style,
            BadgeStyle::ALL,
            BadgeStyle::from_name,
            BadgeStyle::as_str,
        )?;
        let size = parse("badge size", size, BadgeSize::ALL, BadgeSize::from_name, BadgeSize::as_str)?;
        Ok(BadgeProps::new(style, size))
    }

    fn theme_wide_overrides() -> TokenOverrides<Self> {
        let mut tokens = TokenOverrides::default();
        tokens.insert(BadgeToken::BackgroundTintColor, purple().into());
        tokens.insert(BadgeToken::BackgroundFilledColor, purple().into());
        tokens.insert(
            BadgeToken::ForegroundTintColor,
            ControlTokenValue::alias_color(ColorToken::ForegroundOnColor),
        );
        tokens
    }

    fn per_control_overrides() -> TokenOverrides<Self> {
        let mut tokens = TokenOverrides::default();
        tokens.insert(BadgeToken::BackgroundTintColor, orange().into());
        tokens.insert(BadgeToken::BackgroundFilledColor, orange().into());
        tokens.insert(BadgeToken::BorderRadius, 0.0_f32.into());
        tokens
    }
}

impl DemoControl for ButtonToken {
    fn props(style: Option<&str>, size: Option<&str>) -> Result<ButtonProps> {
        let style = parse(
            "button style",
            style,
            ButtonStyle::ALL,
            ButtonStyle::from_name,
            ButtonStyle::as_str,
        )?;
        let size = parse(
            "button size",
            size,
            ButtonSize::ALL,
            ButtonSize::from_name,
            ButtonSize::as_str,
        )?;
        Ok(ButtonProps::new(style, size))
    }

    fn theme_wide_overrides() -> TokenOverrides<Self> {
        let mut tokens = TokenOverrides::default();
        tokens.insert(ButtonToken::TitleFont, times().into());
        tokens.insert(ButtonToken::BackgroundColor, purple().into());
        tokens
    }

    fn per_control_overrides() -> TokenOverrides<Self> {
        let mut tokens = TokenOverrides::default();
        tokens.insert(ButtonToken::TitleFont, papyrus().into());
        tokens.insert(
            ButtonToken::ShadowRest,
            ControlTokenValue::alias_shadow(ShadowToken::Shadow28),
        );
        tokens
    }
}

impl DemoControl for AvatarToken {
    fn props(style: Option<&str>, size: Option<&str>) -> Result<AvatarProps> {
        let style = parse(
            "avatar style",
            style,
            AvatarStyle::ALL,
            AvatarStyle::from_name,
            AvatarStyle::as_str,
        )?;
        let size = parse(
            "avatar size",
            size,
            AvatarSize::ALL,
            AvatarSize::from_name,
            AvatarSize::as_str,
        )?;
        Ok(AvatarProps::new(style, size))
    }

    fn theme_wide_overrides() -> TokenOverrides<Self> {
        let mut tokens = TokenOverrides::default();
        tokens.insert(AvatarToken::RingDefaultColor, purple().into());
        tokens.insert(AvatarToken::RingThickness, 4.0_f32.into());
        tokens
    }

    fn per_control_overrides() -> TokenOverrides<Self> {
        let mut tokens = TokenOverrides::default();
        tokens.insert(AvatarToken::BackgroundDefaultColor, orange().into());
        tokens.insert(AvatarToken::TextFont, papyrus().into());
        tokens.insert(
            AvatarToken::FallbackImage,
            ImageAsset::template("excelIcon").into(),
        );
        tokens
    }
}

impl DemoControl for ShimmerToken {
    fn props(style: Option<&str>, size: Option<&str>) -> Result<ShimmerProps> {
        let style = parse(
            "shimmer style",
            style,
            ShimmerStyle::ALL,
            ShimmerStyle::from_name,
            ShimmerStyle::as_str,
        )?;
        reject("size", ShimmerToken::CONTROL, size)?;
        Ok(ShimmerProps::new(style))
    }

    fn theme_wide_overrides() -> TokenOverrides<Self> {
        let mut tokens = TokenOverrides::default();
        tokens.insert(ShimmerToken::TintColor, purple().into());
        tokens.insert(ShimmerToken::ShimmerSpeed, 700.0_f32.into());
        tokens
    }

    fn per_control_overrides() -> TokenOverrides<Self> {
        let mut tokens = TokenOverrides::default();
        tokens.insert(ShimmerToken::TintColor, orange().into());
        tokens.insert(ShimmerToken::ShimmerAngle, 0.0_f32.into());
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_kinds_match<K: DemoControl>() {
        let props = K::Props::default();
        for overrides in [K::theme_wide_overrides(), K::per_control_overrides()] {
            for (token, value) in overrides {
                assert_eq!(
                    value.kind(),
                    token.default_value(&props).kind(),
                    "{}.{}",
                    K::CONTROL,
                    token.name()
                );
            }
        }
    }

    #[test]
    fn demo_overrides_keep_token_kinds() {
        assert_kinds_match::<BadgeToken>();
        assert_kinds_match::<ButtonToken>();
        assert_kinds_match::<AvatarToken>();
        assert_kinds_match::<ShimmerToken>();
    }

    #[test]
    fn props_from_names() {
        let props = BadgeToken::props(Some("danger"), Some("small")).unwrap();
        assert_eq!(props, BadgeProps::new(BadgeStyle::Danger, BadgeSize::Small));

        let props = ButtonToken::props(None, None).unwrap();
        assert_eq!(props, ButtonProps::default());
    }

    #[test]
    fn unknown_style_lists_choices() {
        let err = AvatarToken::props(Some("round"), None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown avatar style `round`"), "{message}");
        assert!(message.contains("outlined_primary"), "{message}");
    }

    #[test]
    fn shimmer_has_no_sizes() {
        assert!(ShimmerToken::props(Some("concealing"), Some("large")).is_err());
    }
}
