//! Terminal tables for catalog listings, registry contents and verification.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bcss_model::{Registry, RegistryCatalog, RegistryError, RegistryKind};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// One row per registry: name, shape, entry count.
pub fn catalog_table(catalog: &RegistryCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Registry"),
        header_cell("Shape"),
        header_cell("Entries"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for registry in catalog.iter() {
        table.add_row(vec![
            Cell::new(registry.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            kind_cell(registry.kind()),
            Cell::new(registry.len()),
        ]);
    }
    table
}

/// Entries of one registry. Flag tokens show `-` in the identifier column.
pub fn registry_table(registry: &Registry) -> Table {
    let mut table = Table::new();
    let label_header = match registry.kind() {
        RegistryKind::EnumeratedPair => "Symbol",
        RegistryKind::FlagSet => "Token",
        RegistryKind::LabelMap | RegistryKind::Combined => "Label",
    };
    table.set_header(vec![header_cell(label_header), header_cell("Valid value ID")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    match registry {
        Registry::Pair(pairs) => {
            for entry in pairs.entries() {
                table.add_row(vec![Cell::new(&entry.symbol), Cell::new(entry.id)]);
            }
        }
        Registry::Labels(map) => {
            for entry in map.entries() {
                table.add_row(vec![Cell::new(&entry.label), Cell::new(entry.id)]);
            }
        }
        Registry::Flags(set) => {
            for token in set.tokens() {
                table.add_row(vec![Cell::new(token), dim_cell("-")]);
            }
        }
        Registry::Combined(map) => {
            for token in map.flags().tokens() {
                table.add_row(vec![Cell::new(token).fg(Color::Cyan), dim_cell("-")]);
            }
            for entry in map.labels().entries() {
                table.add_row(vec![Cell::new(&entry.label), Cell::new(entry.id)]);
            }
        }
    }
    table
}

pub fn violations_table(violations: &[RegistryError]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Violation")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, violation) in violations.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(violation.to_string()).fg(Color::Red),
        ]);
    }
    table
}

fn kind_cell(kind: RegistryKind) -> Cell {
    let color = match kind {
        RegistryKind::EnumeratedPair => Color::Magenta,
        RegistryKind::LabelMap => Color::Green,
        RegistryKind::FlagSet => Color::Yellow,
        RegistryKind::Combined => Color::Cyan,
    };
    Cell::new(kind.as_str()).fg(color)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
