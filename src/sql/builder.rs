//! Renders a [`Query`] (and the façade's writes) into parameterized SQLite statements.

use crate::error::QueryError;
use crate::query::{Direction, Operator, Predicate, Query};
use serde_json::{Map, Value};

/// Quote identifier for SQLite.
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn checked(column: &str) -> Result<String, QueryError> {
    if column.trim().is_empty() {
        return Err(QueryError::EmptyColumn);
    }
    Ok(quoted(column))
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        Self::default()
    }

    fn push_param(&mut self, v: Value) -> u32 {
        self.params.push(v);
        self.params.len() as u32
    }
}

/// ` WHERE a = ?1 AND b < ?2`, or empty when there are no predicates.
fn where_clause(q: &mut QueryBuf, predicates: &[Predicate]) -> Result<String, QueryError> {
    let mut parts = Vec::with_capacity(predicates.len());
    for p in predicates {
        let col = checked(&p.column)?;
        let part = match (p.op, &p.value) {
            (Operator::Eq, Value::Null) => format!("{} IS NULL", col),
            (Operator::Ne, Value::Null) => format!("{} IS NOT NULL", col),
            (op, v) => {
                let n = q.push_param(v.clone());
                format!("{} {} ?{}", col, op.as_sql(), n)
            }
        };
        parts.push(part);
    }
    if parts.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!(" WHERE {}", parts.join(" AND ")))
    }
}

fn clamp(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// SELECT with selection, predicates, ORDER BY (primary key ascending when unset), LIMIT/OFFSET.
pub fn select(query: &Query) -> Result<QueryBuf, QueryError> {
    query.check()?;
    let table = query.config.table_name().ok_or(QueryError::MissingTable)?;
    let mut q = QueryBuf::new();

    let cols = if query.selected.is_empty() {
        "*".to_string()
    } else {
        query
            .selected
            .iter()
            .map(|c| checked(c))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ")
    };
    let where_sql = where_clause(&mut q, &query.predicates)?;
    let (order_col, dir) = match &query.order {
        Some((c, d)) => (c.as_str(), *d),
        None => (query.config.primary_key.as_str(), Direction::Asc),
    };
    let order_sql = format!(" ORDER BY {} {}", checked(order_col)?, dir.as_sql());
    let paging = match (query.limit, query.offset) {
        (Some(l), Some(o)) => format!(" LIMIT {} OFFSET {}", clamp(l), clamp(o)),
        (Some(l), None) => format!(" LIMIT {}", clamp(l)),
        (None, Some(o)) => format!(" LIMIT -1 OFFSET {}", clamp(o)),
        (None, None) => String::new(),
    };

    q.sql = format!("SELECT {} FROM {}{}{}{}", cols, quoted(table), where_sql, order_sql, paging);
    Ok(q)
}

/// SELECT COUNT(*) honouring predicates only.
pub fn count(query: &Query) -> Result<QueryBuf, QueryError> {
    query.check()?;
    let table = query.config.table_name().ok_or(QueryError::MissingTable)?;
    let mut q = QueryBuf::new();
    let where_sql = where_clause(&mut q, &query.predicates)?;
    q.sql = format!("SELECT COUNT(*) AS \"count\" FROM {}{}", quoted(table), where_sql);
    Ok(q)
}

/// INSERT of every key in `body`, returning the stored row.
pub fn insert(table: &str, body: &Map<String, Value>) -> Result<QueryBuf, QueryError> {
    if body.is_empty() {
        return Err(QueryError::EmptyInsert);
    }
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(body.len());
    let mut placeholders = Vec::with_capacity(body.len());
    for (k, v) in body {
        cols.push(checked(k)?);
        let n = q.push_param(v.clone());
        placeholders.push(format!("?{}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        quoted(table),
        cols.join(", "),
        placeholders.join(", ")
    );
    Ok(q)
}

/// DELETE by primary key.
pub fn delete_by_id(table: &str, pk: &str, id: Value) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(id);
    q.sql = format!("DELETE FROM {} WHERE {} = ?1", quoted(table), quoted(pk));
    q
}
