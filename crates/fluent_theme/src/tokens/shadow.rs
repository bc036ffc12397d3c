//! Shadow tokens for elevation

use fluent_core::{Color, DynamicColor, ShadowInfo};

crate::token_keys! {
    /// Elevation levels, named by key blur radius
    pub enum ShadowToken {
        Clear => "clear",
        Shadow02 => "shadow02",
        Shadow04 => "shadow04",
        Shadow08 => "shadow08",
        Shadow16 => "shadow16",
        Shadow28 => "shadow28",
        Shadow64 => "shadow64",
    }
}

impl ShadowToken {
    pub fn default_shadow(self) -> ShadowInfo {
        match self {
            ShadowToken::Clear => ShadowInfo::CLEAR,
            ShadowToken::Shadow02 => low_elevation(2.0, 1.0),
            ShadowToken::Shadow04 => low_elevation(4.0, 2.0),
            ShadowToken::Shadow08 => low_elevation(8.0, 4.0),
            ShadowToken::Shadow16 => low_elevation(16.0, 8.0),
            ShadowToken::Shadow28 => high_elevation(28.0, 14.0),
            ShadowToken::Shadow64 => high_elevation(64.0, 32.0),
        }
    }
}

fn black(light_alpha: f32, dark_alpha: f32) -> DynamicColor {
    DynamicColor::light_dark(
        Color::BLACK.with_alpha(light_alpha),
        Color::BLACK.with_alpha(dark_alpha),
    )
}

fn low_elevation(key_blur: f32, y_key: f32) -> ShadowInfo {
    ShadowInfo {
        key_color: black(0.14, 0.28),
        key_blur,
        x_key: 0.0,
        y_key,
        ambient_color: black(0.12, 0.20),
        ambient_blur: 2.0,
        x_ambient: 0.0,
        y_ambient: 0.0,
    }
}

fn high_elevation(key_blur: f32, y_key: f32) -> ShadowInfo {
    ShadowInfo {
        key_color: black(0.24, 0.48),
        key_blur,
        x_key: 0.0,
        y_key,
        ambient_color: black(0.20, 0.40),
        ambient_blur: 8.0,
        x_ambient: 0.0,
        y_ambient: 0.0,
    }
}
