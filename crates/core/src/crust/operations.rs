use serde::Serialize;

use super::types::Crust;

/// Outcome of a stock decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum StockUpdate {
    /// One unit was taken; `remaining` is the new stock count.
    Decremented { remaining: u32 },
    /// Stock was already zero, nothing was written.
    OutOfStock,
}

/// Returns a copy of `crust` with one less unit of stock.
///
/// Returns `None` when the stock count is already zero, so the count can
/// never go below the floor.
pub fn decrement_stock(crust: &Crust) -> Option<Crust> {
    let stock_count = crust.stock_count.checked_sub(1)?;
    Some(Crust {
        stock_count,
        ..crust.clone()
    })
}

/// Sorts crusts by id, the order rows come back from the store.
pub fn sort_by_id(crusts: &mut [Crust]) {
    crusts.sort_by(|a, b| a.id.cmp(&b.id));
}
