//! Fluent Core Primitives
//!
//! Value types consumed by the token system and by the controls that draw
//! with resolved tokens:
//!
//! - **Colors**: [`Color`] (concrete RGBA) and [`DynamicColor`] (a set of
//!   variants chosen by the current [`Appearance`])
//! - **Appearance**: color scheme, elevation and contrast of the surface a
//!   control is drawn on
//! - **Fonts**: [`FontInfo`] descriptors with [`FontWeight`] and the
//!   [`TextStyle`] they scale with
//! - **Shadows**: two-layer [`ShadowInfo`] (key + ambient)
//! - **Images**: named [`ImageAsset`] references
//!
//! # Example
//!
//! ```rust
//! use fluent_core::{Appearance, Color, ColorScheme, DynamicColor};
//!
//! let background = DynamicColor::new(Color::from_hex(0xFFFFFF))
//!     .with_dark(Color::from_hex(0x000000))
//!     .with_dark_elevated(Color::from_hex(0x0A0A0A));
//!
//! let dark = Appearance::new(ColorScheme::Dark);
//! assert_eq!(background.resolve(&dark), Color::from_hex(0x000000));
//! assert_eq!(
//!     background.resolve(&dark.elevated()),
//!     Color::from_hex(0x0A0A0A)
//! );
//! ```

pub mod appearance;
pub mod color;
pub mod dynamic;
pub mod font;
pub mod image;
pub mod shadow;

pub use appearance::{Appearance, ColorScheme, Contrast, Elevation};
pub use color::{Color, ColorParseError};
pub use dynamic::DynamicColor;
pub use font::{FontInfo, FontWeight, FontWeightParseError, TextStyle};
pub use image::ImageAsset;
pub use shadow::{Shadow, ShadowInfo};
