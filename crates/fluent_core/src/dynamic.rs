//! Appearance-dependent colors
//!
//! A [`DynamicColor`] carries a required light variant and up to seven
//! optional overrides. Resolution picks the most specific variant that is
//! present for the requested [`Appearance`]:
//!
//! 1. Dark appearances try the dark family first, light appearances go
//!    straight to the light family.
//! 2. Within a family, elevated surfaces try the elevated variant (its
//!    high-contrast form first when contrast is increased).
//! 3. Otherwise the family's base variant (again high-contrast first).
//! 4. A dark family with nothing applicable falls back to the light family,
//!    which always resolves because `light` is required.

use crate::appearance::Appearance;
use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicColor {
    pub light: Color,
    pub light_high_contrast: Option<Color>,
    pub light_elevated: Option<Color>,
    pub light_elevated_high_contrast: Option<Color>,
    pub dark: Option<Color>,
    pub dark_high_contrast: Option<Color>,
    pub dark_elevated: Option<Color>,
    pub dark_elevated_high_contrast: Option<Color>,
}

/// One scheme's worth of variants
struct Family {
    base: Option<Color>,
    high_contrast: Option<Color>,
    elevated: Option<Color>,
    elevated_high_contrast: Option<Color>,
}

impl Family {
    fn pick(&self, appearance: &Appearance) -> Option<Color> {
        let for_contrast = |default: Option<Color>, high: Option<Color>| {
            if appearance.is_high_contrast() {
                high.or(default)
            } else {
                default
            }
        };

        if appearance.is_elevated() {
            if let Some(color) = for_contrast(self.elevated, self.elevated_high_contrast) {
                return Some(color);
            }
        }
        for_contrast(self.base, self.high_contrast)
    }
}

impl DynamicColor {
    /// Same color in every appearance
    pub const fn new(light: Color) -> Self {
        Self {
            light,
            light_high_contrast: None,
            light_elevated: None,
            light_elevated_high_contrast: None,
            dark: None,
            dark_high_contrast: None,
            dark_elevated: None,
            dark_elevated_high_contrast: None,
        }
    }

    pub const fn light_dark(light: Color, dark: Color) -> Self {
        Self::new(light).with_dark(dark)
    }

    pub const fn with_light_high_contrast(mut self, color: Color) -> Self {
        self.light_high_contrast = Some(color);
        self
    }

    pub const fn with_light_elevated(mut self, color: Color) -> Self {
        self.light_elevated = Some(color);
        self
    }

    pub const fn with_light_elevated_high_contrast(mut self, color: Color) -> Self {
        self.light_elevated_high_contrast = Some(color);
        self
    }

    pub const fn with_dark(mut self, color: Color) -> Self {
        self.dark = Some(color);
        self
    }

    pub const fn with_dark_high_contrast(mut self, color: Color) -> Self {
        self.dark_high_contrast = Some(color);
        self
    }

    pub const fn with_dark_elevated(mut self, color: Color) -> Self {
        self.dark_elevated = Some(color);
        self
    }

    pub const fn with_dark_elevated_high_contrast(mut self, color: Color) -> Self {
        self.dark_elevated_high_contrast = Some(color);
        self
    }

    /// Pick the concrete color for an appearance
    pub fn resolve(&self, appearance: &Appearance) -> Color {
        if appearance.is_dark() {
            let dark = Family {
                base: self.dark,
                high_contrast: self.dark_high_contrast,
                elevated: self.dark_elevated,
                elevated_high_contrast: self.dark_elevated_high_contrast,
            };
            if let Some(color) = dark.pick(appearance) {
                return color;
            }
        }

        let light = Family {
            base: Some(self.light),
            high_contrast: self.light_high_contrast,
            elevated: self.light_elevated,
            elevated_high_contrast: self.light_elevated_high_contrast,
        };
        light.pick(appearance).unwrap_or(self.light)
    }

    /// Apply an alpha to every variant
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = |c: Option<Color>| c.map(|c| c.with_alpha(alpha));
        Self {
            light: self.light.with_alpha(alpha),
            light_high_contrast: a(self.light_high_contrast),
            light_elevated: a(self.light_elevated),
            light_elevated_high_contrast: a(self.light_elevated_high_contrast),
            dark: a(self.dark),
            dark_high_contrast: a(self.dark_high_contrast),
            dark_elevated: a(self.dark_elevated),
            dark_elevated_high_contrast: a(self.dark_elevated_high_contrast),
        }
    }
}

impl From<Color> for DynamicColor {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}
