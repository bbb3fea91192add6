//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// JSON output.
    Json,
}

/// Print a list of items in the selected format.
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(items, "[]"),
    }
}

/// Print a single item in the selected format.
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{:#?}", item),
        OutputFormat::Json => print_json(item, "{}"),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, fallback: &str) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string());
    println!("{}", json);
}

/// Print a section heading.
pub fn print_heading(title: &str) {
    println!("\n{}", title);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair.
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
