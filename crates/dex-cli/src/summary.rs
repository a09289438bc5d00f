use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::RunReport;

pub fn print_summary(report: &RunReport) {
    println!("Input: {}", report.input.display());
    match &report.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Terms"),
        header_cell("Comparisons"),
        header_cell("Matches"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(report.rows),
        Cell::new(report.terms),
        Cell::new(report.comparisons),
        match_cell(report.matches),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn match_cell(matches: usize) -> Cell {
    if matches > 0 {
        Cell::new(matches)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(matches).fg(Color::DarkGrey)
    }
}
