//! Chainable query specification and its terminal operations.
//!
//! Builder methods consume the query and return a new one, so two chains
//! started from the same model never share state. Terminal methods borrow the
//! query: running it does not change it, and it can be run again.

use crate::config::ModelConfig;
use crate::error::QueryError;
use crate::query::{Direction, Operator, Predicate};
use crate::sql;
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Query {
    pub(crate) config: Arc<ModelConfig>,
    pub(crate) selected: Vec<String>,
    pub(crate) excluded: Vec<String>,
    pub(crate) predicates: Vec<Predicate>,
    pub(crate) order: Option<(String, Direction)>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
    /// First operator that failed to parse; reported by the terminal call.
    pub(crate) bad_operator: Option<String>,
}

impl Query {
    pub fn new(config: Arc<ModelConfig>) -> Self {
        Query {
            config,
            selected: Vec::new(),
            excluded: Vec::new(),
            predicates: Vec::new(),
            order: None,
            limit: None,
            offset: None,
            bad_operator: None,
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Restrict results to `columns` (added to any earlier selection).
    /// A selected column is no longer excluded; protected columns stay hidden.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for c in columns {
            let c = c.into();
            self.excluded.retain(|e| *e != c);
            if !self.selected.contains(&c) {
                self.selected.push(c);
            }
        }
        self
    }

    pub fn exclude<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for c in columns {
            let c = c.into();
            if !self.excluded.contains(&c) {
                self.excluded.push(c);
            }
        }
        self
    }

    /// `column = value` (`IS NULL` for a null value).
    pub fn where_eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicates.push(Predicate::eq(column, value));
        self
    }

    /// `column <op> value` with `op` as written by the caller, e.g. `"<"` or `">="`.
    /// An unknown operator surfaces as `QueryError::InvalidOperator` when the query runs.
    pub fn where_op(mut self, column: impl Into<String>, op: &str, value: impl Into<Value>) -> Self {
        match op.parse::<Operator>() {
            Ok(op) => self.predicates.push(Predicate::new(column, op, value)),
            Err(_) => {
                if self.bad_operator.is_none() {
                    self.bad_operator = Some(op.to_string());
                }
            }
        }
        self
    }

    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Order by `column`; `None` means ascending. A later call replaces the earlier one.
    pub fn order_by(mut self, column: impl Into<String>, direction: Option<Direction>) -> Self {
        self.order = Some((column.into(), direction.unwrap_or_default()));
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub(crate) fn check(&self) -> Result<(), QueryError> {
        match &self.bad_operator {
            Some(op) => Err(QueryError::InvalidOperator(op.clone())),
            None => Ok(()),
        }
    }

    /// Every matching row, filtered through the model's column policy.
    pub async fn all(&self, pool: &SqlitePool) -> Result<Vec<Value>, QueryError> {
        let q = sql::select(self)?;
        let rows = sql::fetch_all(pool, &q).await?;
        Ok(rows
            .into_iter()
            .map(|r| Value::Object(self.config.visible_row(r, &self.excluded)))
            .collect())
    }

    /// `limit(1)` then the sole row, or `None`.
    pub async fn first(&self, pool: &SqlitePool) -> Result<Option<Value>, QueryError> {
        let rows = self.clone().limit(1).all(pool).await?;
        Ok(rows.into_iter().next())
    }

    /// Number of rows matching the predicates. Selection, ordering and paging are ignored.
    pub async fn count(&self, pool: &SqlitePool) -> Result<u64, QueryError> {
        let q = sql::count(self)?;
        sql::fetch_count(pool, &q).await
    }

    /// Row whose primary key equals `id` (and which matches any predicates), or `None`.
    /// Ordering and paging on the chain do not apply to the lookup.
    pub async fn find(&self, pool: &SqlitePool, id: impl Into<Value>) -> Result<Option<Value>, QueryError> {
        let pk = self.config.primary_key.clone();
        let mut lookup = self.clone();
        lookup.order = None;
        lookup.offset = None;
        lookup.where_eq(pk, id).first(pool).await
    }
}
