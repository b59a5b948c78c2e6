use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use recon_model::{CategoryMap, SourceLabels};

use crate::pipeline::RunResult;

pub fn print_summary(result: &RunResult, labels: &SourceLabels) {
    println!("{}", summary_table(result, labels));
    let summary = &result.summary;
    if summary.has_unmapped() {
        println!();
        println!(
            "Missing {} QSCAT mappings (logged, {} rows skipped): {:?}",
            labels.secondary, summary.secondary_rows_unmapped, summary.unmapped_codes
        );
    }
    println!();
    println!(
        "Output 1 ({} -> {}): {}",
        labels.primary,
        labels.secondary,
        result.primary_output.display()
    );
    println!(
        "Output 2 ({} -> {}): {}",
        labels.secondary,
        labels.primary,
        result.secondary_output.display()
    );
    println!("Log: {}", result.log_file.display());
}

/// Totals per direction: what was processed and what is missing on the other side.
pub fn summary_table(result: &RunResult, labels: &SourceLabels) -> Table {
    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Direction"),
        header_cell("Unit"),
        header_cell("Processed"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        direction_cell(&labels.primary, &labels.secondary),
        Cell::new("rows"),
        Cell::new(summary.primary_rows),
        missing_cell(summary.primary_missing_in_secondary),
    ]);
    table.add_row(vec![
        direction_cell(&labels.secondary, &labels.primary),
        Cell::new("record keys"),
        Cell::new(summary.secondary_keys),
        missing_cell(summary.secondary_missing_in_primary),
    ]);
    table
}

/// Effective category table, sorted by code.
pub fn category_table(map: &CategoryMap) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Full name")]);
    apply_table_style(&mut table);
    for (code, name) in map.iter() {
        table.add_row(vec![
            Cell::new(code).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(name),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn direction_cell(from: &str, to: &str) -> Cell {
    Cell::new(format!("{from} -> {to}"))
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn missing_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
