mod operations;
mod seed;
mod types;

pub use operations::{decrement_stock, sort_by_id, StockUpdate};
pub use seed::{seed_crusts, PARTITION_KEY, SEED_STOCK_COUNT, TABLE_NAME};
pub use types::Crust;
