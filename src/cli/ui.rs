use crate::core::currency::format_usd;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Hero,
    TotalLabel,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Hero => style(text).green().bold(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right-aligned cell for a dollar amount.
pub fn currency_cell(amount: f64) -> Cell {
    Cell::new(format_usd(amount)).set_alignment(CellAlignment::Right)
}

/// Bold green cell for the headline amount of a table.
pub fn total_currency_cell(amount: f64) -> Cell {
    Cell::new(format_usd(amount))
        .add_attribute(Attribute::Bold)
        .fg(Color::Green)
        .set_alignment(CellAlignment::Right)
}

/// Right-aligned cell for a coverage figure in months.
pub fn months_cell(months: u32) -> Cell {
    Cell::new(format!("{months} months")).set_alignment(CellAlignment::Right)
}

/// Creates a cell for a signed month adjustment, colored by direction.
pub fn adjustment_cell(months: i32) -> Cell {
    let color = if months > 0 {
        Color::Green
    } else if months < 0 {
        Color::Red
    } else {
        Color::DarkGrey
    };
    Cell::new(format!("{months:+} months"))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    println!("\n{}", "─".repeat(term_width));
}
