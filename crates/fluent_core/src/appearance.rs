//! Appearance of the surface a control is drawn on

use std::fmt;

/// Color scheme (light or dark mode)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Toggle between light and dark
    pub fn toggle(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

/// Accessibility contrast level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Contrast {
    #[default]
    Standard,
    Increased,
}

/// Whether the surface is lifted above the base layer (sheets, popovers)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Elevation {
    #[default]
    Base,
    Elevated,
}

/// Environment a dynamic token is resolved in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Appearance {
    pub scheme: ColorScheme,
    pub elevation: Elevation,
    pub contrast: Contrast,
}

impl Appearance {
    pub const LIGHT: Appearance = Appearance::new(ColorScheme::Light);
    pub const DARK: Appearance = Appearance::new(ColorScheme::Dark);

    /// Base elevation, standard contrast
    pub const fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            elevation: Elevation::Base,
            contrast: Contrast::Standard,
        }
    }

    pub const fn elevated(self) -> Self {
        Self {
            elevation: Elevation::Elevated,
            ..self
        }
    }

    pub const fn high_contrast(self) -> Self {
        Self {
            contrast: Contrast::Increased,
            ..self
        }
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    pub fn is_elevated(&self) -> bool {
        self.elevation == Elevation::Elevated
    }

    pub fn is_high_contrast(&self) -> bool {
        self.contrast == Contrast::Increased
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = if self.is_dark() { "dark" } else { "light" };
        write!(f, "{scheme}")?;
        if self.is_elevated() {
            write!(f, "+elevated")?;
        }
        if self.is_high_contrast() {
            write!(f, "+high-contrast")?;
        }
        Ok(())
    }
}
