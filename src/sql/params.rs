//! Bind serde_json::Value parameters to SQLite and read rows back as JSON.

use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::query::Query;
use sqlx::Sqlite;

/// A value that can be bound to a SQLite statement. Converts from serde_json::Value.
#[derive(Clone, Debug, PartialEq)]
pub enum SqliteBindValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Text(String),
}

impl SqliteBindValue {
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Null => SqliteBindValue::Null,
            Value::Bool(b) => SqliteBindValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqliteBindValue::I64(i)
                } else {
                    SqliteBindValue::F64(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => SqliteBindValue::Text(s.clone()),
            // Arrays and objects are stored as JSON text.
            Value::Array(_) | Value::Object(_) => SqliteBindValue::Text(v.to_string()),
        }
    }
}

/// Bind `params` in order (`?1`, `?2`, ...).
pub fn bind_params<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &[Value],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for p in params {
        query = match SqliteBindValue::from_json(p) {
            SqliteBindValue::Null => query.bind(None::<String>),
            SqliteBindValue::Bool(b) => query.bind(b),
            SqliteBindValue::I64(n) => query.bind(n),
            SqliteBindValue::F64(n) => query.bind(n),
            SqliteBindValue::Text(s) => query.bind(s),
        };
    }
    query
}

/// Row as a JSON object keyed by column name.
pub fn row_to_json(row: &SqliteRow) -> Map<String, Value> {
    use sqlx::{Column, Row, TypeInfo};
    let mut map = Map::new();
    for (idx, col) in row.columns().iter().enumerate() {
        let declared = col.type_info().name();
        map.insert(col.name().to_string(), cell_to_value(row, idx, declared));
    }
    map
}

fn cell_to_value(row: &SqliteRow, idx: usize, declared: &str) -> Value {
    use sqlx::Row;
    if declared.eq_ignore_ascii_case("BOOLEAN") {
        if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(idx) {
            return Value::Bool(b);
        }
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(idx) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(idx) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(idx) {
        return Value::String(s);
    }
    Value::Null
}
