//! Avatar token set
//!
//! Sizes, ring geometry, presence badge metrics and colors for the avatar
//! control. When an avatar has neither image nor initials it draws the
//! `fallback_image` person glyph, sized to the avatar.

use fluent_core::{Color, DynamicColor, FontInfo, FontWeight, ImageAsset};
use fluent_theme::{
    token_keys, BrandColor, ColorToken, ControlTokenValue, CornerRadius, FontSize, IconSize,
    NeutralColor, StrokeWidth, TokenSetKey, TypographyToken,
};

token_keys! {
    pub enum AvatarToken {
        /// Edge length of the avatar content
        AvatarSize => "avatar_size",
        BorderRadius => "border_radius",
        /// Initials font
        TextFont => "text_font",
        RingDefaultColor => "ring_default_color",
        /// Gap between the ring and the avatar
        RingGapColor => "ring_gap_color",
        RingThickness => "ring_thickness",
        RingInnerGap => "ring_inner_gap",
        RingOuterGap => "ring_outer_gap",
        PresenceIconSize => "presence_icon_size",
        PresenceIconOutlineThickness => "presence_icon_outline_thickness",
        PresenceOutlineColor => "presence_outline_color",
        BackgroundDefaultColor => "background_default_color",
        ForegroundDefaultColor => "foreground_default_color",
        FallbackImage => "fallback_image",
    }
}

token_keys! {
    #[derive(Default)]
    pub enum AvatarStyle {
        #[default]
        Default => "default",
        Accent => "accent",
        Group => "group",
        Outlined => "outlined",
        OutlinedPrimary => "outlined_primary",
        /// "+N" overflow bubble
        Overflow => "overflow",
    }
}

token_keys! {
    #[derive(Default)]
    pub enum AvatarSize {
        XSmall => "xsmall",
        Small => "small",
        Medium => "medium",
        #[default]
        Large => "large",
        XLarge => "xlarge",
        XXLarge => "xxlarge",
    }
}

impl AvatarSize {
    pub fn points(self) -> f32 {
        match self {
            AvatarSize::XSmall => 16.0,
            AvatarSize::Small => 24.0,
            AvatarSize::Medium => 32.0,
            AvatarSize::Large => 40.0,
            AvatarSize::XLarge => 52.0,
            AvatarSize::XXLarge => 72.0,
        }
    }

    /// Edge length of the person glyph asset drawn at this size
    fn person_image_size(self) -> u32 {
        match self {
            AvatarSize::XSmall => 12,
            AvatarSize::Small => 16,
            AvatarSize::Medium => 20,
            AvatarSize::Large => 24,
            AvatarSize::XLarge => 28,
            AvatarSize::XXLarge => 48,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvatarProps {
    pub style: AvatarStyle,
    pub size: AvatarSize,
}

impl AvatarProps {
    pub fn new(style: AvatarStyle, size: AvatarSize) -> Self {
        Self { style, size }
    }
}

fn pair(light: Color, dark: Color) -> DynamicColor {
    DynamicColor::light_dark(light, dark)
}

impl TokenSetKey for AvatarToken {
    type Props = AvatarProps;
    const CONTROL: &'static str = "avatar";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn name(self) -> &'static str {
        self.as_str()
    }

    fn default_value(self, props: &AvatarProps) -> ControlTokenValue {
        use AvatarSize::*;

        let AvatarProps { style, size } = *props;
        match self {
            AvatarToken::AvatarSize => size.points().into(),
            AvatarToken::BorderRadius => {
                let radius = match (style, size) {
                    (AvatarStyle::Group, XSmall) => CornerRadius::Radius20,
                    (AvatarStyle::Group, Small | Medium) => CornerRadius::Radius40,
                    (AvatarStyle::Group, Large | XLarge) => CornerRadius::Radius80,
                    (AvatarStyle::Group, XXLarge) => CornerRadius::Radius120,
                    _ => CornerRadius::RadiusNone,
                };
                radius.value().into()
            }
            AvatarToken::TextFont => match size {
                XSmall => FontInfo::new(9.0, FontWeight::Regular).into(),
                Small => ControlTokenValue::alias_typography(TypographyToken::Caption2),
                Medium => ControlTokenValue::alias_typography(TypographyToken::Caption1),
                Large => ControlTokenValue::alias_typography(TypographyToken::Body2),
                XLarge => FontInfo::new(FontSize::Size500.value(), FontWeight::Regular).into(),
                XXLarge => FontInfo::new(FontSize::Size700.value(), FontWeight::Semibold).into(),
            },
            AvatarToken::RingDefaultColor => match style {
                AvatarStyle::Default | AvatarStyle::Group => {
                    pair(BrandColor::Comm90.color(), BrandColor::Comm100.color()).into()
                }
                AvatarStyle::Accent => DynamicColor::new(BrandColor::Comm70.color()).into(),
                AvatarStyle::Outlined | AvatarStyle::Overflow => {
                    ControlTokenValue::alias_color(ColorToken::BackgroundDisabled)
                }
                AvatarStyle::OutlinedPrimary => {
                    pair(BrandColor::Comm90.color(), NeutralColor::Grey78.color()).into()
                }
            },
            AvatarToken::RingGapColor | AvatarToken::PresenceOutlineColor => {
                ControlTokenValue::alias_color(ColorToken::Background1)
            }
            AvatarToken::RingThickness => {
                let width = match size {
                    XSmall | Small => StrokeWidth::Width10,
                    Medium | Large | XLarge => StrokeWidth::Width20,
                    XXLarge => StrokeWidth::Width40,
                };
                width.value().into()
            }
            AvatarToken::RingInnerGap | AvatarToken::RingOuterGap => {
                let width = match size {
                    XXLarge => StrokeWidth::Width40,
                    _ => StrokeWidth::Width20,
                };
                width.value().into()
            }
            AvatarToken::PresenceIconSize => {
                let points = match size {
                    XSmall => 0.0,
                    Small | Medium => IconSize::Size100.value(),
                    Large | XLarge => IconSize::Size120.value(),
                    XXLarge => IconSize::Size160.value(),
                };
                points.into()
            }
            AvatarToken::PresenceIconOutlineThickness => {
                let width = match size {
                    XSmall => StrokeWidth::WidthNone,
                    _ => StrokeWidth::Width20,
                };
                width.value().into()
            }
            AvatarToken::BackgroundDefaultColor => match style {
                AvatarStyle::Default | AvatarStyle::Group => {
                    pair(NeutralColor::White.color(), BrandColor::Comm100.color()).into()
                }
                AvatarStyle::Accent => ControlTokenValue::alias_color(ColorToken::BrandBackground1),
                AvatarStyle::Outlined => {
                    pair(NeutralColor::Grey94.color(), NeutralColor::Grey26.color()).into()
                }
                AvatarStyle::OutlinedPrimary => {
                    pair(BrandColor::Comm160.color(), NeutralColor::Grey26.color()).into()
                }
                AvatarStyle::Overflow => ControlTokenValue::alias_color(ColorToken::Background4),
            },
            AvatarToken::ForegroundDefaultColor => match style {
                AvatarStyle::Default | AvatarStyle::Group => {
                    pair(BrandColor::Comm80.color(), NeutralColor::Black.color()).into()
                }
                AvatarStyle::Accent => ControlTokenValue::alias_color(ColorToken::ForegroundOnColor),
                AvatarStyle::Outlined => {
                    pair(NeutralColor::Grey42.color(), NeutralColor::Grey78.color()).into()
                }
                AvatarStyle::OutlinedPrimary => {
                    pair(BrandColor::Comm80.color(), NeutralColor::Grey78.color()).into()
                }
                AvatarStyle::Overflow => ControlTokenValue::alias_color(ColorToken::Foreground3),
            },
            AvatarToken::FallbackImage => {
                let variant = match style {
                    AvatarStyle::Outlined | AvatarStyle::OutlinedPrimary => "regular",
                    _ => "filled",
                };
                ImageAsset::template(format!("person_{}_{variant}", size.person_image_size()))
                    .into()
            }
        }
    }
}
