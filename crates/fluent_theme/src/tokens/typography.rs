//! Typography ramp

use fluent_core::{FontInfo, FontWeight};

use super::global::FontSize;

crate::token_keys! {
    /// Semantic type ramp entries
    pub enum TypographyToken {
        Display => "display",
        LargeTitle => "large_title",
        Title1 => "title1",
        Title2 => "title2",
        Title3 => "title3",
        Body1Strong => "body1_strong",
        Body1 => "body1",
        Body2Strong => "body2_strong",
        Body2 => "body2",
        Caption1Strong => "caption1_strong",
        Caption1 => "caption1",
        Caption2 => "caption2",
    }
}

impl TypographyToken {
    pub fn default_font(self) -> FontInfo {
        let (size, weight) = match self {
            TypographyToken::Display => (FontSize::Size900, FontWeight::Bold),
            TypographyToken::LargeTitle => (FontSize::Size800, FontWeight::Bold),
            TypographyToken::Title1 => (FontSize::Size700, FontWeight::Bold),
            TypographyToken::Title2 => (FontSize::Size600, FontWeight::Semibold),
            TypographyToken::Title3 => (FontSize::Size500, FontWeight::Semibold),
            TypographyToken::Body1Strong => (FontSize::Size400, FontWeight::Semibold),
            TypographyToken::Body1 => (FontSize::Size400, FontWeight::Regular),
            TypographyToken::Body2Strong => (FontSize::Size300, FontWeight::Semibold),
            TypographyToken::Body2 => (FontSize::Size300, FontWeight::Regular),
            TypographyToken::Caption1Strong => (FontSize::Size200, FontWeight::Semibold),
            TypographyToken::Caption1 => (FontSize::Size200, FontWeight::Regular),
            TypographyToken::Caption2 => (FontSize::Size100, FontWeight::Regular),
        };
        FontInfo::new(size.value(), weight)
    }
}
