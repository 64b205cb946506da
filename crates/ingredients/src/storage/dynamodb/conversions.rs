//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! crust rows. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use ingredients_core::crust::Crust;
use ingredients_core::storage::{ETag, RepositoryError, Versioned};

use super::keys;

pub const ENTITY_TYPE_CRUST: &str = "CRUST";

/// Attribute holding the row version used as the ETag.
pub const VERSION_ATTR: &str = "version";

/// Convert a Crust to a DynamoDB item at the given version.
pub fn crust_to_item(
    crust: &Crust,
    version: u64,
    updated_at: DateTime<Utc>,
) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(keys::PK.to_string(), AttributeValue::S(keys::crust_pk()));
    item.insert(
        keys::SK.to_string(),
        AttributeValue::S(keys::crust_sk(&crust.id)),
    );

    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_CRUST.to_string()),
    );

    // Data
    item.insert("id".to_string(), AttributeValue::S(crust.id.clone()));
    item.insert("name".to_string(), AttributeValue::S(crust.name.clone()));
    item.insert("size".to_string(), AttributeValue::N(crust.size.to_string()));
    item.insert(
        "price".to_string(),
        AttributeValue::N(crust.price.to_string()),
    );
    item.insert(
        "stockCount".to_string(),
        AttributeValue::N(crust.stock_count.to_string()),
    );

    // Concurrency metadata
    item.insert(
        VERSION_ATTR.to_string(),
        AttributeValue::N(version.to_string()),
    );
    item.insert(
        "updatedAt".to_string(),
        AttributeValue::S(updated_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a versioned Crust.
pub fn item_to_crust(
    item: &HashMap<String, AttributeValue>,
) -> Result<Versioned<Crust>, RepositoryError> {
    let crust = Crust {
        id: get_string(item, "id")?,
        name: get_string(item, "name")?,
        size: get_number(item, "size")?,
        price: get_number(item, "price")?,
        stock_count: get_number(item, "stockCount")?,
    };
    let version: u64 = get_number(item, VERSION_ATTR)?;

    Ok(Versioned::new(
        crust,
        ETag::new(version.to_string()),
        get_datetime(item, "updatedAt")?,
    ))
}

/// Parse the version number carried by an ETag this backend issued.
pub fn parse_version(etag: &ETag) -> Result<u64, RepositoryError> {
    etag.as_str()
        .parse()
        .map_err(|_| RepositoryError::InvalidData(format!("Invalid version tag: {}", etag)))
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required number attribute.
fn get_number<T: FromStr>(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<T, RepositoryError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;
    raw.parse()
        .map_err(|_| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, raw)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_crust() -> Crust {
        Crust::new("thin12", "Thin", 12, 7.5, 42)
    }

    fn sample_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_crust_round_trip() {
        let item = crust_to_item(&sample_crust(), 7, sample_time());
        let parsed = item_to_crust(&item).unwrap();

        assert_eq!(parsed.value, sample_crust());
        assert_eq!(parsed.etag, ETag::new("7"));
        assert_eq!(parsed.updated_at, sample_time());
    }

    #[test]
    fn test_crust_item_has_correct_keys() {
        let item = crust_to_item(&sample_crust(), 1, sample_time());

        assert_eq!(item.get("PK").unwrap().as_s().unwrap(), "crust");
        assert_eq!(item.get("SK").unwrap().as_s().unwrap(), "thin12");
        assert_eq!(item.get("entityType").unwrap().as_s().unwrap(), "CRUST");
        assert_eq!(item.get("price").unwrap().as_n().unwrap(), "7.5");
        assert_eq!(item.get("version").unwrap().as_n().unwrap(), "1");
    }

    #[test]
    fn test_whole_price_is_stored_without_fraction() {
        let crust = Crust::new("thin9", "Thin", 9, 5.0, 1000);
        let item = crust_to_item(&crust, 1, sample_time());
        assert_eq!(item.get("price").unwrap().as_n().unwrap(), "5");
        assert_eq!(item_to_crust(&item).unwrap().value.price, 5.0);
    }

    #[test]
    fn test_missing_field_is_invalid_data() {
        let mut item = crust_to_item(&sample_crust(), 1, sample_time());
        item.remove("stockCount");

        let err = item_to_crust(&item).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::InvalidData("Missing or invalid field: stockCount".to_string())
        );
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let mut item = crust_to_item(&sample_crust(), 1, sample_time());
        item.insert("stockCount".to_string(), AttributeValue::N("-1".to_string()));

        assert!(matches!(
            item_to_crust(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version(&ETag::new("12")).unwrap(), 12);
        assert!(parse_version(&ETag::new("W/\"abc\"")).is_err());
    }
}
