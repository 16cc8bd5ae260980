//! Output formatting for CLI

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Tabled, Serialize)]
struct FieldRow<'a> {
    #[tabled(rename = "FIELD")]
    field: &'a str,
    #[tabled(rename = "VALUE")]
    value: &'a str,
}

/// Print a ConfigMap's fields in the requested format
pub fn print_fields(data: &BTreeMap<String, String>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No fields found".yellow());
                return Ok(());
            }
            let rows = data.iter().map(|(field, value)| FieldRow { field, value });
            println!("{}", Table::new(rows));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(data)?),
    }
    Ok(())
}

/// Print a single field value
pub fn print_value(field: &str, value: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => println!("{}", value),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&FieldRow { field, value })?)
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&FieldRow { field, value })?),
    }
    Ok(())
}

/// Print a success message with green checkmark
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}
