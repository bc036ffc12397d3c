//! Built-in theme presets: brand color swaps over the default alias layer.

use std::fmt::{Display, Formatter};

use fluent_core::{Color, DynamicColor};

use crate::theme::Theme;
use crate::tokens::ColorToken;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Communication blue brand.
    #[default]
    Default,
    /// Green brand ramp.
    Green,
    /// Purple brand ramp.
    Purple,
}

impl ThemePreset {
    /// Stable preset id for config/CLI use.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Green => "Green",
            Self::Purple => "Purple",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] =
            [ThemePreset::Default, ThemePreset::Green, ThemePreset::Purple];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(id))
    }

    /// Alias color overrides this preset applies.
    pub fn color_overrides(self) -> Vec<(ColorToken, DynamicColor)> {
        match self {
            Self::Default => Vec::new(),
            Self::Green => green_overrides(),
            Self::Purple => purple_overrides(),
        }
    }

    /// Build a fresh theme for this preset.
    pub fn theme(self) -> Theme {
        Theme::builder(self.display_name())
            .colors(self.color_overrides())
            .build()
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn pair(light: u32, dark: u32) -> DynamicColor {
    DynamicColor::light_dark(Color::from_hex(light), Color::from_hex(dark))
}

fn fixed(hex: u32) -> DynamicColor {
    DynamicColor::new(Color::from_hex(hex))
}

/// Rest, pressed and selected colors shared by a brand's fill, foreground and stroke
fn brand_states(
    rest: DynamicColor,
    pressed: DynamicColor,
    selected: DynamicColor,
) -> [(ColorToken, DynamicColor); 9] {
    [
        (ColorToken::BrandBackground1, rest),
        (ColorToken::BrandBackground1Pressed, pressed),
        (ColorToken::BrandBackground1Selected, selected),
        (ColorToken::BrandForeground1, rest),
        (ColorToken::BrandForeground1Pressed, pressed),
        (ColorToken::BrandForeground1Selected, selected),
        (ColorToken::BrandStroke1, rest),
        (ColorToken::BrandStroke1Pressed, pressed),
        (ColorToken::BrandStroke1Selected, selected),
    ]
}

fn green_overrides() -> Vec<(ColorToken, DynamicColor)> {
    let mut colors = brand_states(
        pair(0x107C41, 0x55B17E),
        pair(0x0A5325, 0xCAEAD8),
        pair(0x0F703B, 0x60BD82),
    )
    .to_vec();
    colors.extend([
        (ColorToken::BrandBackground2, fixed(0x0F703B)),
        (ColorToken::BrandBackground2Pressed, fixed(0x052912)),
        (ColorToken::BrandBackground2Selected, fixed(0x0A5325)),
        (ColorToken::BrandBackground3, fixed(0x0A5325)),
        (ColorToken::BrandBackgroundTint, pair(0xCAEAD8, 0x094624)),
        (ColorToken::BrandBackgroundDisabled, pair(0xA0D8B9, 0x0A5325)),
        (ColorToken::BrandForegroundTint, pair(0x0C5F32, 0x60BD82)),
        (ColorToken::BrandForegroundDisabled1, pair(0x37A660, 0x218D51)),
        (ColorToken::BrandForegroundDisabled2, pair(0xCAEAD8, 0x0F703B)),
        (ColorToken::BrandGradient1, pair(0x107C41, 0x10893C)),
        (ColorToken::BrandGradient2, fixed(0xDCF51D)),
        (ColorToken::BrandGradient3, fixed(0x42B8B2)),
    ]);
    colors
}

fn purple_overrides() -> Vec<(ColorToken, DynamicColor)> {
    let mut colors = brand_states(
        pair(0x822FFF, 0xA275FF),
        pair(0x550FBE, 0xC2AAFD),
        pair(0x6415DB, 0xB695FF),
    )
    .to_vec();
    colors.extend([
        (ColorToken::BrandBackground2, fixed(0x6415DB)),
        (ColorToken::BrandBackground2Pressed, fixed(0x410693)),
        (ColorToken::BrandBackground2Selected, fixed(0x4B09A8)),
        (ColorToken::BrandBackground3, fixed(0x4B09A8)),
        (ColorToken::BrandBackgroundTint, pair(0xEDE8FF, 0x4B09A8)),
        (ColorToken::BrandBackgroundDisabled, pair(0xD0BDFD, 0x4B09A8)),
        (ColorToken::BrandForegroundTint, pair(0x6415DB, 0xC2AAFD)),
        (ColorToken::BrandForegroundDisabled1, pair(0xB695FF, 0x751FF5)),
        (ColorToken::BrandForegroundDisabled2, pair(0xC2AAFD, 0x4B09A8)),
    ]);
    colors
}
