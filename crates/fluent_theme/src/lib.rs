//! Fluent Theme System
//!
//! Design tokens for Fluent controls, layered so that any value can be
//! customized at the narrowest useful scope.
//!
//! # Overview
//!
//! - **Global tokens**: the raw palette and numeric scales ([`tokens::global`])
//! - **Alias tokens**: semantic colors, type ramp, shadows and gradients
//!   ([`ColorToken`], [`TypographyToken`], [`ShadowToken`], [`GradientToken`])
//! - **Themes**: alias overrides plus theme-wide control overrides ([`Theme`])
//! - **Control token sets**: one per control instance, resolving each token
//!   through instance override, theme-wide override and default provider
//!   ([`ControlTokenSet`])
//! - **Registry**: which theme a surface draws under ([`ThemeRegistry`])
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use fluent_core::{Appearance, Color};
//! use fluent_theme::{
//!     token_keys, ColorToken, ControlTokenSet, ControlTokenValue, Theme, TokenSetKey,
//! };
//!
//! token_keys! {
//!     pub enum ChipToken {
//!         Background => "background",
//!         CornerRadius => "corner_radius",
//!     }
//! }
//!
//! impl TokenSetKey for ChipToken {
//!     type Props = ();
//!     const CONTROL: &'static str = "chip";
//!
//!     fn all() -> &'static [Self] {
//!         Self::ALL
//!     }
//!
//!     fn name(self) -> &'static str {
//!         self.as_str()
//!     }
//!
//!     fn default_value(self, _: &()) -> ControlTokenValue {
//!         match self {
//!             ChipToken::Background => ControlTokenValue::alias_color(ColorToken::Background3),
//!             ChipToken::CornerRadius => 4.0_f32.into(),
//!         }
//!     }
//! }
//!
//! let theme = Arc::new(Theme::default());
//! let mut chip = ControlTokenSet::<ChipToken>::new((), theme);
//! assert_eq!(chip.float(ChipToken::CornerRadius, Appearance::LIGHT), 4.0);
//!
//! chip.set_override(ChipToken::Background, Color::from_hex(0xFF8C00));
//! assert_eq!(
//!     chip.color(ChipToken::Background, Appearance::DARK),
//!     Color::from_hex(0xFF8C00)
//! );
//! ```
//!
//! # Change tracking
//!
//! Nothing is pushed to observers. [`ControlTokenSet::revision`],
//! [`Theme::revision`] and [`ThemeRegistry::revision`] are bumped on every
//! mutation; a control compares the values it saw last time against the
//! current ones when it lays out.

#[macro_use]
mod macros;

pub mod config;
pub mod control;
pub mod error;
pub mod presets;
pub mod registry;
pub mod theme;
pub mod tokens;
pub mod value;

pub use config::ThemeConfig;
pub use control::{ControlTokenSet, TokenOverrides, TokenSetKey, TokenSource};
pub use error::{Result, ThemeError};
pub use presets::ThemePreset;
pub use registry::{SurfaceId, ThemeRegistry};
pub use theme::{Theme, ThemeBuilder};
pub use tokens::*;
pub use value::{ControlTokenValue, Provider, TokenContext, TokenKind, TokenValue};
