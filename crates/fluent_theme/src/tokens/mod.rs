//! Design tokens
//!
//! Two layers:
//! - **Global** tokens: raw palette entries and numeric scales
//! - **Alias** tokens: semantic colors, type ramp, shadows and gradients
//!   that controls consume and themes may override

pub mod global;

mod color;
mod gradient;
mod shadow;
mod typography;

pub use color::*;
pub use global::{
    BrandColor, CornerRadius, FontSize, IconSize, NeutralColor, SharedColorSet, SharedColorShade,
    Spacing, StrokeWidth,
};
pub use gradient::*;
pub use shadow::*;
pub use typography::*;
