//! Output formatting functions.

use clap::ValueEnum;
use ingredients_core::crust::{Crust, StockUpdate};

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Format a value as pretty-printed JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

/// Format a crust for display.
pub fn format_crust(crust: &Crust) -> String {
    format!(
        "{} {}\"\n  ID: {}\n  Price: {:.2}\n  Stock: {}",
        crust.name, crust.size, crust.id, crust.price, crust.stock_count
    )
}

/// Format crusts for display.
pub fn format_crusts(crusts: &[Crust]) -> String {
    if crusts.is_empty() {
        return "No crusts found.".to_string();
    }
    let mut output = format!("CRUSTS ({})\n", crusts.len());
    output.push_str(&"-".repeat(40));
    for crust in crusts {
        output.push_str(&format!("\n{}", format_crust(crust)));
        output.push('\n');
    }
    output
}

/// Format the outcome of a decrement for display.
pub fn format_stock_update(id: &str, update: &StockUpdate) -> String {
    match update {
        StockUpdate::Decremented { remaining } => {
            format!("Decremented {}: {} left", id, remaining)
        }
        StockUpdate::OutOfStock => format!("{} is out of stock", id),
    }
}
