//! Externalized SQL catalog: logical query keys mapped to SQL text.
//!
//! The catalog is loaded once at startup and immutable afterwards. Missing
//! keys are reported when the catalog is loaded, not when a query runs.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Catalog bundled into the binary; used unless the config points elsewhere.
const BUNDLED: &str = include_str!("queries.yaml");

/// Keys every catalog must define.
pub const REQUIRED_KEYS: [&str; 12] = [
    "create.user",
    "update.user",
    "delete.user.by.id",
    "get.user.by.id",
    "get.all.user",
    "get.user.by.nick",
    "create.goal",
    "update.goal",
    "delete.goal.by.id",
    "get.goal.by.id",
    "get.all.goal",
    "get.goals.by.user.id",
];

#[derive(Debug)]
pub struct QueryCatalog {
    queries: HashMap<String, String>,
}

impl QueryCatalog {
    /// Load the catalog named by the config, or the bundled one.
    pub fn load(cfg: &Config) -> AppResult<Self> {
        match &cfg.queries {
            Some(path) => Self::from_file(Path::new(path)),
            None => Self::parse(BUNDLED),
        }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read query catalog {}: {e}", path.display()))
        })?;
        Self::parse(&text)
    }

    fn parse(text: &str) -> AppResult<Self> {
        let queries: HashMap<String, String> = serde_yaml::from_str(text)
            .map_err(|e| AppError::Config(format!("cannot parse query catalog: {e}")))?;

        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .filter(|key| !queries.contains_key(**key))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "query catalog is missing keys: {}",
                missing.join(", ")
            )));
        }

        Ok(Self { queries })
    }

    /// SQL text for a logical key.
    pub fn sql(&self, key: &str) -> AppResult<&str> {
        self.queries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| AppError::UnknownQueryKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_defines_every_required_key() {
        let catalog = QueryCatalog::parse(BUNDLED).unwrap();
        for key in REQUIRED_KEYS {
            assert!(catalog.sql(key).is_ok(), "missing {key}");
        }
    }

    #[test]
    fn missing_key_is_a_load_time_error() {
        let err = QueryCatalog::parse("create.user: INSERT INTO users DEFAULT VALUES\n")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing keys"));
        assert!(msg.contains("get.goals.by.user.id"));
    }

    #[test]
    fn unknown_key_at_lookup_time() {
        let catalog = QueryCatalog::parse(BUNDLED).unwrap();
        let err = catalog.sql("get.user.by.shoe.size").unwrap_err();
        assert!(matches!(err, AppError::UnknownQueryKey(_)));
    }

    #[test]
    fn bundled_user_queries_bind_the_documented_order() {
        let catalog = QueryCatalog::parse(BUNDLED).unwrap();
        let create = catalog.sql("create.user").unwrap();
        assert!(create.contains("first_name, last_name, username, password, email, month_salary"));
        let update = catalog.sql("update.user").unwrap();
        assert!(update.contains("WHERE id = ?7"));
    }
}
