//! Terminal tables for resolved tokens.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color as TableColor, ContentArrangement, Table};
use fluent_core::{Appearance, Color};
use fluent_theme::{ColorToken, ThemePreset, TokenSource, TokenValue};

/// One resolved token, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRow {
    pub token: &'static str,
    pub value: TokenValue,
    pub source: TokenSource,
}

pub fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

pub fn token_table(rows: &[TokenRow]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Token"),
        header_cell("Kind"),
        header_cell("Value"),
        header_cell("Source"),
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.token),
            Cell::new(row.value.kind()),
            value_cell(&row.value),
            source_cell(row.source),
        ]);
    }
    table
}

pub fn preset_table(presets: &[ThemePreset]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Brand (light)"),
        header_cell("Brand (dark)"),
        header_cell("Alias overrides"),
    ]);
    for preset in presets {
        let theme = preset.theme();
        table.add_row(vec![
            Cell::new(preset.id()),
            Cell::new(preset.display_name()),
            swatch_cell(theme.color(ColorToken::BrandBackground1, &Appearance::LIGHT)),
            swatch_cell(theme.color(ColorToken::BrandBackground1, &Appearance::DARK)),
            Cell::new(preset.color_overrides().len()),
        ]);
    }
    table
}

fn value_cell(value: &TokenValue) -> Cell {
    match value {
        TokenValue::Color(color) => swatch_cell(*color),
        other => Cell::new(other),
    }
}

/// Hex literal tinted with the color itself; clear colors stay plain.
pub fn swatch_cell(color: Color) -> Cell {
    let cell = Cell::new(color);
    if color.is_clear() {
        return cell;
    }
    let [r, g, b, _] = color.to_rgba8();
    cell.fg(TableColor::Rgb { r, g, b })
}

pub fn source_cell(source: TokenSource) -> Cell {
    let cell = Cell::new(source);
    match source {
        TokenSource::Instance => cell.fg(TableColor::Yellow).add_attribute(Attribute::Bold),
        TokenSource::Theme => cell.fg(TableColor::Cyan),
        TokenSource::Default => cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_table_lists_every_row() {
        let rows = vec![
            TokenRow {
                token: "border_radius",
                value: TokenValue::Float(4.0),
                source: TokenSource::Default,
            },
            TokenRow {
                token: "background_tint_color",
                value: TokenValue::Color(Color::from_hex(0x822FFF)),
                source: TokenSource::Theme,
            },
        ];
        let rendered = token_table(&rows).to_string();
        assert!(rendered.contains("border_radius"), "{rendered}");
        assert!(rendered.contains("background_tint_color"), "{rendered}");
        assert!(rendered.contains("theme"), "{rendered}");
    }

    #[test]
    fn preset_table_has_a_row_per_preset() {
        let rendered = preset_table(ThemePreset::all()).to_string();
        for preset in ThemePreset::all() {
            assert!(rendered.contains(preset.id()), "{rendered}");
        }
    }
}
