//! Terminal rendering for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use glass_model::{ComponentEntry, ComponentMatch, ConfidenceTier};

pub fn print_component_table(components: &[ComponentEntry]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Component"),
        header_cell("Category"),
        header_cell("Description"),
        header_cell("Aliases"),
    ]);
    apply_table_style(&mut table);
    for entry in components {
        table.add_row(vec![
            name_cell(&entry.name),
            Cell::new(&entry.category),
            description_cell(entry.description.as_deref()),
            alias_cell(&entry.aliases),
        ]);
    }
    println!("{table}");
    println!("{} component(s)", components.len());
}

pub fn print_component_details(entry: &ComponentEntry, matched: &ComponentMatch) {
    println!("Component: {}", entry.name);
    println!("Category: {}", entry.category);
    if let Some(description) = &entry.description {
        println!("Description: {description}");
    }
    if !entry.aliases.is_empty() {
        println!("Aliases: {}", entry.aliases.join(", "));
    }
    println!(
        "Matched: {} (score {:.2}, {} confidence)",
        matched.kind, matched.score, matched.tier
    );
}

pub fn print_suggestions(matches: &[ComponentMatch]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Component"),
        header_cell("Score"),
        header_cell("Kind"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for result in matches {
        table.add_row(vec![
            name_cell(&result.name),
            Cell::new(format!("{:.2}", result.score)),
            Cell::new(result.kind.as_str()),
            tier_cell(result.tier),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
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

fn name_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn description_cell(description: Option<&str>) -> Cell {
    match description {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn alias_cell(aliases: &[String]) -> Cell {
    if aliases.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(aliases.join(", "))
    }
}

fn tier_cell(tier: ConfidenceTier) -> Cell {
    match tier {
        ConfidenceTier::High => Cell::new("high")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        ConfidenceTier::Medium => Cell::new("medium").fg(Color::Yellow),
        ConfidenceTier::Low => dim_cell("low"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
