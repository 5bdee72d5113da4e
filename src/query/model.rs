//! Model façade: a table binding with shortcuts into [`Query`] plus the writes the demos need.

use crate::config::ModelConfig;
use crate::error::QueryError;
use crate::query::{Direction, Query};
use crate::sql;
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Model {
    config: Arc<ModelConfig>,
}

impl Model {
    pub fn new(config: ModelConfig) -> Self {
        Model {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Fresh query over every row.
    pub fn query(&self) -> Query {
        Query::new(Arc::clone(&self.config))
    }

    pub fn select<I, S>(&self, columns: I) -> Query
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query().select(columns)
    }

    pub fn exclude<I, S>(&self, columns: I) -> Query
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query().exclude(columns)
    }

    pub fn where_eq(&self, column: impl Into<String>, value: impl Into<Value>) -> Query {
        self.query().where_eq(column, value)
    }

    pub fn where_op(&self, column: impl Into<String>, op: &str, value: impl Into<Value>) -> Query {
        self.query().where_op(column, op, value)
    }

    pub fn order_by(&self, column: impl Into<String>, direction: Option<Direction>) -> Query {
        self.query().order_by(column, direction)
    }

    pub fn limit(&self, n: u64) -> Query {
        self.query().limit(n)
    }

    pub fn offset(&self, n: u64) -> Query {
        self.query().offset(n)
    }

    pub async fn all(&self, pool: &SqlitePool) -> Result<Vec<Value>, QueryError> {
        self.query().all(pool).await
    }

    pub async fn first(&self, pool: &SqlitePool) -> Result<Option<Value>, QueryError> {
        self.query().first(pool).await
    }

    pub async fn count(&self, pool: &SqlitePool) -> Result<u64, QueryError> {
        self.query().count(pool).await
    }

    pub async fn find(&self, pool: &SqlitePool, id: impl Into<Value>) -> Result<Option<Value>, QueryError> {
        self.query().find(pool, id).await
    }

    /// Insert one row from `body` and return it as a visible row.
    pub async fn create(&self, pool: &SqlitePool, body: &Map<String, Value>) -> Result<Value, QueryError> {
        let table = self.config.table_name().ok_or(QueryError::MissingTable)?;
        let q = sql::insert(table, body)?;
        let row = sql::fetch_one(pool, &q).await?;
        Ok(Value::Object(self.config.visible_row(row, &[])))
    }

    /// Delete by primary key. Returns whether a row was removed.
    pub async fn destroy(&self, pool: &SqlitePool, id: impl Into<Value>) -> Result<bool, QueryError> {
        let table = self.config.table_name().ok_or(QueryError::MissingTable)?;
        let q = sql::delete_by_id(table, &self.config.primary_key, id.into());
        let affected = sql::execute(pool, &q).await?;
        Ok(affected > 0)
    }
}

impl From<ModelConfig> for Model {
    fn from(config: ModelConfig) -> Self {
        Model::new(config)
    }
}
