//! Two-layer elevation shadows

use std::fmt;

use crate::appearance::Appearance;
use crate::color::Color;
use crate::dynamic::DynamicColor;

/// Shadow definition made of a key (directional) and an ambient layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowInfo {
    pub key_color: DynamicColor,
    pub key_blur: f32,
    pub x_key: f32,
    pub y_key: f32,
    pub ambient_color: DynamicColor,
    pub ambient_blur: f32,
    pub x_ambient: f32,
    pub y_ambient: f32,
}

/// A single shadow layer resolved for one appearance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ShadowInfo {
    /// No shadow at all
    pub const CLEAR: ShadowInfo = ShadowInfo {
        key_color: DynamicColor::new(Color::CLEAR),
        key_blur: 0.0,
        x_key: 0.0,
        y_key: 0.0,
        ambient_color: DynamicColor::new(Color::CLEAR),
        ambient_blur: 0.0,
        x_ambient: 0.0,
        y_ambient: 0.0,
    };

    /// Resolve both layers, key first
    pub fn resolve(&self, appearance: &Appearance) -> [Shadow; 2] {
        [
            Shadow {
                color: self.key_color.resolve(appearance),
                blur: self.key_blur,
                offset_x: self.x_key,
                offset_y: self.y_key,
            },
            Shadow {
                color: self.ambient_color.resolve(appearance),
                blur: self.ambient_blur,
                offset_x: self.x_ambient,
                offset_y: self.y_ambient,
            },
        ]
    }

    pub fn is_clear(&self) -> bool {
        self.key_blur == 0.0
            && self.ambient_blur == 0.0
            && self.key_color.light.is_clear()
            && self.ambient_color.light.is_clear()
    }
}

impl fmt::Display for ShadowInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clear() {
            return f.write_str("none");
        }
        write!(
            f,
            "key(blur {}, y {}) ambient(blur {}, y {})",
            self.key_blur, self.y_key, self.ambient_blur, self.y_ambient
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::ColorScheme;

    #[test]
    fn resolves_layers_per_appearance() {
        let shadow = ShadowInfo {
            key_color: DynamicColor::light_dark(
                Color::BLACK.with_alpha(0.14),
                Color::BLACK.with_alpha(0.28),
            ),
            key_blur: 8.0,
            x_key: 0.0,
            y_key: 4.0,
            ambient_color: DynamicColor::new(Color::BLACK.with_alpha(0.12)),
            ambient_blur: 2.0,
            x_ambient: 0.0,
            y_ambient: 0.0,
        };
        let [key, ambient] = shadow.resolve(&Appearance::new(ColorScheme::Dark));
        assert_eq!(key.color.a, 0.28);
        assert_eq!(key.offset_y, 4.0);
        assert_eq!(ambient.color.a, 0.12);
        assert!(!shadow.is_clear());
        assert!(ShadowInfo::CLEAR.is_clear());
        assert_eq!(ShadowInfo::CLEAR.to_string(), "none");
    }
}
