use serde::{Deserialize, Serialize};

/// A crust variant held in inventory.
///
/// Every crust lives under the same partition key; `id` is the row key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crust {
    pub id: String,
    /// Display name ("Thin", "Deep", ...).
    pub name: String,
    /// Diameter in inches.
    pub size: u32,
    pub price: f64,
    pub stock_count: u32,
}

impl Crust {
    /// Creates a new crust record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        size: u32,
        price: f64,
        stock_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size,
            price,
            stock_count,
        }
    }

    /// Sets the stock count (useful for testing).
    pub fn with_stock_count(mut self, stock_count: u32) -> Self {
        self.stock_count = stock_count;
        self
    }
}
