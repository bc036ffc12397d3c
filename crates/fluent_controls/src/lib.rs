//! Fluent Control Token Sets
//!
//! The closed token lists, props and default providers of the Fluent
//! controls. Controls themselves live in the host toolkit; this crate only
//! answers "what does this control look like" through a
//! [`ControlTokenSet`](fluent_theme::ControlTokenSet).
//!
//! | control | identifiers | props |
//! |---|---|---|
//! | [`badge`] | [`BadgeToken`] | [`BadgeStyle`], [`BadgeSize`] |
//! | [`button`] | [`ButtonToken`] | [`ButtonStyle`], [`ButtonSize`] |
//! | [`avatar`] | [`AvatarToken`] | [`AvatarStyle`], [`AvatarSize`] |
//! | [`shimmer`] | [`ShimmerToken`] | [`ShimmerStyle`] |
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use fluent_core::{Appearance, Color};
//! use fluent_controls::{BadgeProps, BadgeToken};
//! use fluent_theme::{ControlTokenSet, ThemePreset};
//!
//! let theme = Arc::new(ThemePreset::Purple.theme());
//! let badge = ControlTokenSet::<BadgeToken>::new(BadgeProps::default(), theme);
//! assert_eq!(
//!     badge.color(BadgeToken::BackgroundFilledColor, Appearance::LIGHT),
//!     Color::from_hex(0x822FFF)
//! );
//! ```

pub mod avatar;
pub mod badge;
pub mod button;
pub mod shimmer;

pub use avatar::{AvatarProps, AvatarSize, AvatarStyle, AvatarToken};
pub use badge::{BadgeProps, BadgeSize, BadgeStyle, BadgeToken};
pub use button::{ButtonProps, ButtonSize, ButtonStyle, ButtonToken};
pub use shimmer::{ShimmerProps, ShimmerStyle, ShimmerToken};

use fluent_theme::{Theme, ThemeConfig, TokenSetKey};

/// Control names accepted in theme files, in display order
pub const CONTROLS: &[&str] = &[
    BadgeToken::CONTROL,
    ButtonToken::CONTROL,
    AvatarToken::CONTROL,
    ShimmerToken::CONTROL,
];

/// Validate `config`'s control sections and register them on `theme`.
///
/// Nothing is registered if any section is invalid.
pub fn apply_config(theme: &Theme, config: &ThemeConfig) -> fluent_theme::Result<()> {
    config.check_control_names(CONTROLS)?;

    let badge = config.control_overrides::<BadgeToken>()?;
    let button = config.control_overrides::<ButtonToken>()?;
    let avatar = config.control_overrides::<AvatarToken>()?;
    let shimmer = config.control_overrides::<ShimmerToken>()?;

    register_some(theme, badge);
    register_some(theme, button);
    register_some(theme, avatar);
    register_some(theme, shimmer);

    tracing::debug!(
        theme = theme.name(),
        controls = ?theme.registered_controls(),
        "applied theme file control overrides"
    );
    Ok(())
}

fn register_some<K: TokenSetKey>(theme: &Theme, overrides: Option<fluent_theme::TokenOverrides<K>>) {
    if overrides.is_some() {
        theme.register::<K>(overrides);
    }
}
