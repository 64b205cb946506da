//! DynamoDB key generation functions.
//!
//! Every crust shares one partition, so the sort key alone identifies a row.

use ingredients_core::crust::PARTITION_KEY;

/// Partition key attribute name.
pub const PK: &str = "PK";

/// Sort key attribute name.
pub const SK: &str = "SK";

/// Generate the partition key for a crust.
///
/// Pattern: `crust`
pub fn crust_pk() -> String {
    PARTITION_KEY.to_string()
}

/// Generate the sort key for a crust.
///
/// Pattern: `<crust_id>`
pub fn crust_sk(id: &str) -> String {
    id.to_string()
}
