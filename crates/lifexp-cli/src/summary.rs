use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lifexp_cli::pipeline::CleanResult;
use lifexp_model::Region;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {} ({})", result.input.display(), result.format);
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: - (dry run)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Name"),
        header_cell("Candidates"),
        header_cell("Dropped"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    for index in 2..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.region.code())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(result.region.label()),
        Cell::new(result.stats.candidates),
        count_cell(result.stats.dropped, Color::Yellow),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_country_table(codes: &[&str]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Country")]);
    apply_table_style(&mut table);
    for code in codes {
        let label = Region::from_code(code).map_or("-", |region| region.label());
        table.add_row(vec![Cell::new(code).fg(Color::Green), Cell::new(label)]);
    }
    println!("{table}");
}

pub fn print_dataset_regions(regions: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Region"), header_cell("Known")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for value in regions {
        let known = match Region::from_code(value) {
            Some(region) if region.is_aggregate() => Cell::new("aggregate").fg(Color::Cyan),
            Some(_) => Cell::new("✓").fg(Color::Green),
            None => Cell::new("-").add_attribute(Attribute::Dim),
        };
        table.add_row(vec![Cell::new(value), known]);
    }
    println!("{table}");
    println!("{} regions", regions.len());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
