//! Global tokens: the raw palette and scales every alias token draws from
//!
//! Global values are fixed. Themes customise appearance through alias
//! overrides, never by editing this layer.

use fluent_core::{Color, DynamicColor};

crate::token_keys! {
    /// Communication blue brand ramp plus the brand gradient stops
    pub enum BrandColor {
        Comm10 => "comm10",
        Comm20 => "comm20",
        Comm30 => "comm30",
        Comm40 => "comm40",
        Comm50 => "comm50",
        Comm60 => "comm60",
        Comm70 => "comm70",
        Comm80 => "comm80",
        Comm90 => "comm90",
        Comm100 => "comm100",
        Comm110 => "comm110",
        Comm120 => "comm120",
        Comm130 => "comm130",
        Comm140 => "comm140",
        Comm150 => "comm150",
        Comm160 => "comm160",
        GradientPrimaryLight => "gradient_primary_light",
        GradientPrimaryDark => "gradient_primary_dark",
        GradientSecondaryLight => "gradient_secondary_light",
        GradientSecondaryDark => "gradient_secondary_dark",
        GradientTertiaryLight => "gradient_tertiary_light",
        GradientTertiaryDark => "gradient_tertiary_dark",
    }
}

impl BrandColor {
    pub fn color(self) -> Color {
        let hex = match self {
            BrandColor::Comm10 => 0x061724,
            BrandColor::Comm20 => 0x082338,
            BrandColor::Comm30 => 0x0A2E4A,
            BrandColor::Comm40 => 0x0C3B5E,
            BrandColor::Comm50 => 0x0E4775,
            BrandColor::Comm60 => 0x0F548C,
            BrandColor::Comm70 => 0x115EA3,
            BrandColor::Comm80 => 0x0F6CBD,
            BrandColor::Comm90 => 0x2886DE,
            BrandColor::Comm100 => 0x479EF5,
            BrandColor::Comm110 => 0x62ABF5,
            BrandColor::Comm120 => 0x77B7F7,
            BrandColor::Comm130 => 0x96C6FA,
            BrandColor::Comm140 => 0xB4D6FA,
            BrandColor::Comm150 => 0xCFE4FA,
            BrandColor::Comm160 => 0xEBF3FC,
            BrandColor::GradientPrimaryLight => 0x464FEB,
            BrandColor::GradientPrimaryDark => 0x7385FF,
            BrandColor::GradientSecondaryLight => 0x47CFFA,
            BrandColor::GradientSecondaryDark => 0x7ADFFF,
            BrandColor::GradientTertiaryLight => 0xB47CF8,
            BrandColor::GradientTertiaryDark => 0xBF80FF,
        };
        Color::from_hex(hex)
    }
}

crate::token_keys! {
    /// Neutral greys, named by lightness percentage
    pub enum NeutralColor {
        Black => "black",
        Grey2 => "grey2",
        Grey4 => "grey4",
        Grey6 => "grey6",
        Grey8 => "grey8",
        Grey10 => "grey10",
        Grey12 => "grey12",
        Grey14 => "grey14",
        Grey16 => "grey16",
        Grey18 => "grey18",
        Grey20 => "grey20",
        Grey22 => "grey22",
        Grey24 => "grey24",
        Grey26 => "grey26",
        Grey28 => "grey28",
        Grey30 => "grey30",
        Grey32 => "grey32",
        Grey34 => "grey34",
        Grey36 => "grey36",
        Grey38 => "grey38",
        Grey40 => "grey40",
        Grey42 => "grey42",
        Grey44 => "grey44",
        Grey46 => "grey46",
        Grey48 => "grey48",
        Grey50 => "grey50",
        Grey52 => "grey52",
        Grey54 => "grey54",
        Grey56 => "grey56",
        Grey58 => "grey58",
        Grey60 => "grey60",
        Grey62 => "grey62",
        Grey64 => "grey64",
        Grey66 => "grey66",
        Grey68 => "grey68",
        Grey70 => "grey70",
        Grey72 => "grey72",
        Grey74 => "grey74",
        Grey76 => "grey76",
        Grey78 => "grey78",
        Grey80 => "grey80",
        Grey82 => "grey82",
        Grey84 => "grey84",
        Grey86 => "grey86",
        Grey88 => "grey88",
        Grey90 => "grey90",
        Grey92 => "grey92",
        Grey94 => "grey94",
        Grey96 => "grey96",
        Grey98 => "grey98",
        White => "white",
    }
}

/// Channel value of each neutral, indexed in declaration order
const NEUTRAL_LEVELS: [u8; 51] = [
    0x00, 0x05, 0x0A, 0x0F, 0x14, 0x1A, 0x1F, 0x24, 0x29, 0x2E, 0x33, 0x38, 0x3D, 0x42, 0x47, 0x4D,
    0x52, 0x57, 0x5C, 0x61, 0x66, 0x6B, 0x70, 0x75, 0x7A, 0x80, 0x85, 0x8A, 0x8F, 0x94, 0x99, 0x9E,
    0xA3, 0xA8, 0xAD, 0xB2, 0xB8, 0xBD, 0xC2, 0xC7, 0xCC, 0xD1, 0xD6, 0xDB, 0xE0, 0xE5, 0xEB, 0xF0,
    0xF5, 0xFA, 0xFF,
];

impl NeutralColor {
    pub fn color(self) -> Color {
        let level = NEUTRAL_LEVELS[self as usize];
        Color::from_rgba8(level, level, level, 255)
    }
}

crate::token_keys! {
    /// Shared color families used for status and presence colors
    pub enum SharedColorSet {
        Red => "red",
        Green => "green",
        DarkOrange => "dark_orange",
        Yellow => "yellow",
        Marigold => "marigold",
        LightGreen => "light_green",
        Berry => "berry",
        Plum => "plum",
        Forest => "forest",
        Seafoam => "seafoam",
        HotPink => "hot_pink",
    }
}

crate::token_keys! {
    /// Position within a shared color family
    pub enum SharedColorShade {
        Shade50 => "shade50",
        Shade40 => "shade40",
        Shade30 => "shade30",
        Shade20 => "shade20",
        Shade10 => "shade10",
        Primary => "primary",
        Tint10 => "tint10",
        Tint20 => "tint20",
        Tint30 => "tint30",
        Tint40 => "tint40",
        Tint50 => "tint50",
        Tint60 => "tint60",
    }
}

/// Rows follow `SharedColorSet`, columns follow `SharedColorShade`
const SHARED_COLORS: [[u32; 12]; 11] = [
    // red
    [
        0x210809, 0x3F1011, 0x751D1F, 0x9F282B, 0xBC2F32, 0xD13438, 0xD7494C, 0xDC5E62, 0xE37D80,
        0xF1BBBC, 0xF8DADB, 0xFDF6F6,
    ],
    // green
    [
        0x031403, 0x052505, 0x094509, 0x0C5E0C, 0x0E700E, 0x107C10, 0x218C21, 0x359B35, 0x54B054,
        0x9FD89F, 0xC9EAC9, 0xF1FAF1,
    ],
    // dark orange
    [
        0x230900, 0x411200, 0x7A2101, 0xA62D01, 0xC43501, 0xDA3B01, 0xDE501C, 0xE36537, 0xE9835E,
        0xF4BFAB, 0xF9DCD1, 0xFDF6F3,
    ],
    // yellow
    [
        0x282400, 0x4C4400, 0x817400, 0xC0AD00, 0xE4CC00, 0xFDE300, 0xFDE61E, 0xFDEA3D, 0xFEEE66,
        0xFEF7B2, 0xFFFAD6, 0xFFFEF5,
    ],
    // marigold
    [
        0x251A00, 0x463100, 0x835B00, 0xB27C00, 0xD39300, 0xEAA300, 0xEDAD1C, 0xEFB839, 0xF2C661,
        0xF9E2AE, 0xFCEFD3, 0xFEFBF4,
    ],
    // light green
    [
        0x031A02, 0x063004, 0x0B5A08, 0x0E7A0B, 0x11910D, 0x13A10E, 0x27AC22, 0x3DB838, 0x5EC75A,
        0xA7E3A5, 0xCEF0CD, 0xF2FBF2,
    ],
    // berry
    [
        0x1F091D, 0x3A1136, 0x6D2064, 0x932B88, 0xAF33A1, 0xC239B3, 0xC94CBC, 0xD161C4, 0xDA7ED0,
        0xEDBBE7, 0xF5DAF2, 0xFDF5FC,
    ],
    // plum
    [
        0x13000C, 0x240017, 0x43002B, 0x5A003B, 0x6B0045, 0x77004D, 0x87105D, 0x98246F, 0xAD4589,
        0xD696C0, 0xE9C4DC, 0xFAF0F6,
    ],
    // forest
    [
        0x0C1501, 0x162702, 0x294903, 0x376304, 0x427505, 0x498205, 0x599116, 0x6BA02B, 0x85B44C,
        0xBDD99B, 0xDBEBC7, 0xF6FAF0,
    ],
    // seafoam
    [
        0x002111, 0x003D20, 0x00723B, 0x009B51, 0x00B85F, 0x00CC6A, 0x19D279, 0x34D889, 0x5AE0A0,
        0xA8F0CD, 0xCFF7E4, 0xF3FDF8,
    ],
    // hot pink
    [
        0x240016, 0x44002A, 0x7F004E, 0xAD006A, 0xCC007E, 0xE3008C, 0xE61C99, 0xEA38A6, 0xEE5FB7,
        0xF7ADDA, 0xFBD2EB, 0xFEF4FA,
    ],
];

impl SharedColorSet {
    pub fn color(self, shade: SharedColorShade) -> Color {
        Color::from_hex(SHARED_COLORS[self as usize][shade as usize])
    }
}

crate::token_keys! {
    pub enum FontSize {
        Size100 => "size100",
        Size200 => "size200",
        Size300 => "size300",
        Size400 => "size400",
        Size500 => "size500",
        Size600 => "size600",
        Size700 => "size700",
        Size800 => "size800",
        Size900 => "size900",
    }
}

impl FontSize {
    /// Point size on the mobile platform ramp
    pub fn value(self) -> f32 {
        match self {
            FontSize::Size100 => 12.0,
            FontSize::Size200 => 13.0,
            FontSize::Size300 => 15.0,
            FontSize::Size400 => 17.0,
            FontSize::Size500 => 20.0,
            FontSize::Size600 => 22.0,
            FontSize::Size700 => 28.0,
            FontSize::Size800 => 34.0,
            FontSize::Size900 => 60.0,
        }
    }
}

crate::token_keys! {
    pub enum IconSize {
        Size100 => "size100",
        Size120 => "size120",
        Size160 => "size160",
        Size200 => "size200",
        Size240 => "size240",
        Size280 => "size280",
        Size360 => "size360",
        Size400 => "size400",
        Size480 => "size480",
    }
}

impl IconSize {
    pub fn value(self) -> f32 {
        match self {
            IconSize::Size100 => 10.0,
            IconSize::Size120 => 12.0,
            IconSize::Size160 => 16.0,
            IconSize::Size200 => 20.0,
            IconSize::Size240 => 24.0,
            IconSize::Size280 => 28.0,
            IconSize::Size360 => 36.0,
            IconSize::Size400 => 40.0,
            IconSize::Size480 => 48.0,
        }
    }
}

crate::token_keys! {
    pub enum Spacing {
        SizeNone => "size_none",
        Size20 => "size20",
        Size40 => "size40",
        Size60 => "size60",
        Size80 => "size80",
        Size100 => "size100",
        Size120 => "size120",
        Size160 => "size160",
        Size200 => "size200",
        Size240 => "size240",
        Size280 => "size280",
        Size320 => "size320",
        Size360 => "size360",
        Size400 => "size400",
        Size480 => "size480",
        Size520 => "size520",
        Size560 => "size560",
    }
}

impl Spacing {
    pub fn value(self) -> f32 {
        match self {
            Spacing::SizeNone => 0.0,
            Spacing::Size20 => 2.0,
            Spacing::Size40 => 4.0,
            Spacing::Size60 => 6.0,
            Spacing::Size80 => 8.0,
            Spacing::Size100 => 10.0,
            Spacing::Size120 => 12.0,
            Spacing::Size160 => 16.0,
            Spacing::Size200 => 20.0,
            Spacing::Size240 => 24.0,
            Spacing::Size280 => 28.0,
            Spacing::Size320 => 32.0,
            Spacing::Size360 => 36.0,
            Spacing::Size400 => 40.0,
            Spacing::Size480 => 48.0,
            Spacing::Size520 => 52.0,
            Spacing::Size560 => 56.0,
        }
    }
}

crate::token_keys! {
    pub enum CornerRadius {
        RadiusNone => "radius_none",
        Radius20 => "radius20",
        Radius40 => "radius40",
        Radius60 => "radius60",
        Radius80 => "radius80",
        Radius120 => "radius120",
        RadiusCircular => "radius_circular",
    }
}

impl CornerRadius {
    pub fn value(self) -> f32 {
        match self {
            CornerRadius::RadiusNone => 0.0,
            CornerRadius::Radius20 => 2.0,
            CornerRadius::Radius40 => 4.0,
            CornerRadius::Radius60 => 6.0,
            CornerRadius::Radius80 => 8.0,
            CornerRadius::Radius120 => 12.0,
            CornerRadius::RadiusCircular => 9999.0,
        }
    }
}

crate::token_keys! {
    pub enum StrokeWidth {
        WidthNone => "width_none",
        Width05 => "width05",
        Width10 => "width10",
        Width15 => "width15",
        Width20 => "width20",
        Width30 => "width30",
        Width40 => "width40",
        Width60 => "width60",
    }
}

impl StrokeWidth {
    pub fn value(self) -> f32 {
        match self {
            StrokeWidth::WidthNone => 0.0,
            StrokeWidth::Width05 => 0.5,
            StrokeWidth::Width10 => 1.0,
            StrokeWidth::Width15 => 1.5,
            StrokeWidth::Width20 => 2.0,
            StrokeWidth::Width30 => 3.0,
            StrokeWidth::Width40 => 4.0,
            StrokeWidth::Width60 => 6.0,
        }
    }
}

/// Light/dark pair of neutrals
pub(crate) fn neutral_pair(light: NeutralColor, dark: NeutralColor) -> DynamicColor {
    DynamicColor::light_dark(light.color(), dark.color())
}

/// Light/dark pair of brand ramp entries
pub(crate) fn brand_pair(light: BrandColor, dark: BrandColor) -> DynamicColor {
    DynamicColor::light_dark(light.color(), dark.color())
}

/// Light/dark pair from one shared color family
pub(crate) fn shared_pair(
    set: SharedColorSet,
    light: SharedColorShade,
    dark: SharedColorShade,
) -> DynamicColor {
    DynamicColor::light_dark(set.color(light), set.color(dark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn neutral_table_covers_every_variant() {
        assert_eq!(NeutralColor::ALL.len(), NEUTRAL_LEVELS.len());
        assert_eq!(NeutralColor::Grey14.color(), Color::from_hex(0x242424));
        assert_eq!(NeutralColor::Grey70.color(), Color::from_hex(0xB2B2B2));
        assert_eq!(NeutralColor::White.color(), Color::WHITE);
    }

    #[test]
    fn shared_table_covers_every_family() {
        assert_eq!(SharedColorSet::ALL.len(), SHARED_COLORS.len());
        assert_eq!(SharedColorShade::ALL.len(), SHARED_COLORS[0].len());
        assert_eq!(
            SharedColorSet::Red.color(SharedColorShade::Primary),
            Color::from_hex(0xD13438)
        );
        assert_eq!(
            SharedColorSet::HotPink.color(SharedColorShade::Tint60),
            Color::from_hex(0xFEF4FA)
        );
        assert_eq!(
            SharedColorSet::Yellow.color(SharedColorShade::Shade40),
            Color::from_hex(0x4C4400)
        );
    }

    #[test]
    fn scales() {
        assert_eq!(FontSize::Size400.value(), 17.0);
        assert_eq!(IconSize::Size240.value(), 24.0);
        assert_eq!(Spacing::Size160.value(), 16.0);
        assert_eq!(CornerRadius::RadiusCircular.value(), 9999.0);
        assert_eq!(StrokeWidth::Width05.value(), 0.5);
        assert_eq!(Spacing::from_name("size_none"), Some(Spacing::SizeNone));
    }
}
