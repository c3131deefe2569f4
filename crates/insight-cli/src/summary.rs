//! Human-readable summaries printed after a run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use insight_map::SynonymTable;
use insight_model::{ColumnType, Role};

use crate::pipeline::AnalyzeResult;

pub fn print_analysis(result: &AnalyzeResult) {
    if let Some(prompt) = &result.prompt {
        println!("Role-inference prompt:\n\n{prompt}\n");
    }
    if let Some(prompt) = &result.summary_prompt {
        println!("Summary prompt:\n\n{prompt}\n");
    }

    let mut columns = Table::new();
    columns.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Non-missing"),
    ]);
    apply_table_style(&mut columns);
    align_column(&mut columns, 2, CellAlignment::Right);
    for column in result.dataset.columns() {
        columns.add_row(vec![
            Cell::new(&column.name),
            Cell::new(type_label(column.ty)),
            Cell::new(column.non_missing()),
        ]);
    }
    println!("Columns ({} rows):", result.dataset.row_count());
    println!("{columns}");

    let mut roles = Table::new();
    roles.set_header(vec![header_cell("Role"), header_cell("Column")]);
    apply_table_style(&mut roles);
    for (role, column) in result.mapping.iter() {
        roles.add_row(vec![
            Cell::new(role.as_str()),
            match column {
                Some(name) => Cell::new(name),
                None => Cell::new("(unresolved)").add_attribute(Attribute::Dim),
            },
        ]);
    }
    println!("Resolved roles:");
    println!("{roles}");

    if !result.charts.is_empty() {
        let mut charts = Table::new();
        charts.set_header(vec![
            header_cell("Chart"),
            header_cell("Kind"),
            header_cell("Series"),
            header_cell("Points"),
        ]);
        apply_table_style(&mut charts);
        align_column(&mut charts, 2, CellAlignment::Right);
        align_column(&mut charts, 3, CellAlignment::Right);
        for chart in &result.charts {
            let points: usize = chart.groups.iter().map(|g| g.points.len()).sum();
            charts.add_row(vec![
                Cell::new(&chart.title),
                Cell::new(chart.kind.as_str()),
                Cell::new(chart.groups.len()),
                Cell::new(points),
            ]);
        }
        println!("Charts:");
        println!("{charts}");
    }

    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
}

pub fn print_synonyms() {
    let table_data = SynonymTable::builtin();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Header variants")]);
    apply_table_style(&mut table);
    for role in Role::ALL {
        table.add_row(vec![
            Cell::new(role.as_str()),
            Cell::new(table_data.for_role(role).join(", ")),
        ]);
    }
    println!("{table}");
}

fn type_label(ty: ColumnType) -> &'static str {
    match ty {
        ColumnType::Numeric => "numeric",
        ColumnType::Text => "text",
        ColumnType::Temporal => "temporal",
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
