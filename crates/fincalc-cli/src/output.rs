//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints a calculation result: labelled rows for the structured formats,
/// the bare value for minimal output.
pub fn print_result(rows: &[KeyValue], value: f64, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => print_json(rows),
        OutputFormat::Csv => print_csv(rows),
        OutputFormat::Minimal => {
            println!("{}", value);
            Ok(())
        }
    }
}

/// Prints rows as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints rows as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints rows as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats a fractional rate as a percentage string.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Prints a banner header.
pub fn print_header(title: &str) {
    println!("\n{}", "=".repeat(70));
    println!("{}", title.bold());
    println!("{}", "=".repeat(70));
}

/// Prints a subsection divider.
pub fn print_section(title: &str) {
    println!("\n{}", "-".repeat(70));
    println!("{}", title);
    println!("{}", "-".repeat(70));
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
