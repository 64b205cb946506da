//! Fixed seed data for a freshly created crust table.
//!
//! Pure functions with no side effects; the storage layer decides when to
//! write them.

use super::types::Crust;

/// Name of the backing table.
pub const TABLE_NAME: &str = "crusts";

/// Partition key shared by every crust row.
pub const PARTITION_KEY: &str = "crust";

/// Stock count every seeded crust starts with.
pub const SEED_STOCK_COUNT: u32 = 1000;

/// Returns the nine crusts written when the table is first created.
pub fn seed_crusts() -> Vec<Crust> {
    [
        ("thin9", "Thin", 9, 5.0),
        ("thin12", "Thin", 12, 7.5),
        ("thin15", "Thin", 15, 10.0),
        ("deep9", "Deep", 9, 6.0),
        ("deep12", "Deep", 12, 9.0),
        ("deep15", "Deep", 15, 12.0),
        ("stuffed12", "Stuffed", 12, 10.0),
        ("stuffed15", "Stuffed", 15, 14.0),
        ("stuffed24", "Stuffed", 24, 28.0),
    ]
    .into_iter()
    .map(|(id, name, size, price)| Crust::new(id, name, size, price, SEED_STOCK_COUNT))
    .collect()
}
