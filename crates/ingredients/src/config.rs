use std::env;

use ingredients_core::crust::TABLE_NAME;

use crate::data::DEFAULT_MAX_ATTEMPTS;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backing table name (default: "crusts")
    pub table_name: String,
    /// Custom endpoint URL, e.g. a local DynamoDB (default: none)
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Conditional writes tried per stock decrement (default: 100)
    pub max_decrement_attempts: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CRUSTS_TABLE_NAME` - Backing table name (default: "crusts")
    /// - `AWS_ENDPOINT_URL` - Endpoint override for local DynamoDB
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `CRUSTS_MAX_DECREMENT_ATTEMPTS` - Decrement attempts (default: 100)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("CRUSTS_TABLE_NAME").unwrap_or_else(|| TABLE_NAME.to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|url| !url.is_empty()),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            max_decrement_attempts: lookup("CRUSTS_MAX_DECREMENT_ATTEMPTS")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(DEFAULT_MAX_ATTEMPTS),
        }
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.table_name, "crusts");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.max_decrement_attempts, 100);
    }

    #[test]
    fn test_values_from_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("CRUSTS_TABLE_NAME", "crusts-test"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
            ("AWS_REGION", "eu-west-1"),
            ("CRUSTS_MAX_DECREMENT_ATTEMPTS", "5"),
        ]));

        assert_eq!(config.table_name, "crusts-test");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.max_decrement_attempts, 5);
    }

    #[test]
    fn test_invalid_attempts_fall_back_to_default() {
        for value in ["zero", "0", "-3"] {
            let config =
                Config::from_lookup(lookup_from(&[("CRUSTS_MAX_DECREMENT_ATTEMPTS", value)]));
            assert_eq!(config.max_decrement_attempts, 100);
        }
    }

    #[test]
    fn test_target_display() {
        let mut config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.target_display(), "AWS DynamoDB (region: us-east-1)");

        config.endpoint_url = Some("http://localhost:8000".to_string());
        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000)"
        );
    }
}
