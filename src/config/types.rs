//! Model configuration: the table binding and column-visibility policy of one model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Column names treated as timestamps unless a model overrides them.
pub const DEFAULT_TIMESTAMP_COLUMNS: &[&str] = &["created_at", "updated_at", "createdAt", "updatedAt"];

/// Table binding plus column policy. Passed by value to the query builder
/// instead of being declared as class-level metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Backing table. `None` is allowed here and rejected when a query runs.
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
    /// Columns stripped from every result row, even when explicitly selected.
    #[serde(default)]
    pub protected: BTreeSet<String>,
    /// Strip `timestamp_columns` from result rows.
    #[serde(default)]
    pub hide_timestamps: bool,
    #[serde(default = "default_timestamp_columns")]
    pub timestamp_columns: Vec<String>,
}

fn default_primary_key() -> String {
    "id".into()
}

fn default_timestamp_columns() -> Vec<String> {
    DEFAULT_TIMESTAMP_COLUMNS.iter().map(|s| (*s).to_string()).collect()
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            table: None,
            primary_key: default_primary_key(),
            protected: BTreeSet::new(),
            hide_timestamps: false,
            timestamp_columns: default_timestamp_columns(),
        }
    }
}

impl ModelConfig {
    /// Model bound to `name`.
    pub fn table(name: impl Into<String>) -> Self {
        ModelConfig {
            table: Some(name.into()),
            ..Self::default()
        }
    }

    /// Model with no table name; every query against it fails with `MissingTable`.
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = column.into();
        self
    }

    pub fn protect<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn hide_timestamps(mut self, hide: bool) -> Self {
        self.hide_timestamps = hide;
        self
    }

    pub fn timestamp_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timestamp_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether `column` may ever appear in a result row.
    pub fn is_hidden(&self, column: &str) -> bool {
        self.protected.contains(column)
            || (self.hide_timestamps && self.timestamp_columns.iter().any(|c| c == column))
    }

    /// Strip excluded, protected and hidden timestamp columns from a row.
    pub fn visible_row(&self, mut row: Map<String, Value>, excluded: &[String]) -> Map<String, Value> {
        row.retain(|k, _| !self.is_hidden(k) && !excluded.iter().any(|e| e == k));
        row
    }
}

/// On-disk shape of a models file: `{ "models": { "users": { ... } } }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ModelsFile {
    #[serde(default)]
    pub models: BTreeMap<String, ModelConfig>,
}
