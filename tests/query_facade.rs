mod common;

use quarry_sdk::{Direction, Model, ModelConfig, QueryError};
use serde_json::{json, Value};
use sqlx::SqlitePool;

fn users() -> Model {
    Model::new(ModelConfig::table("users").protect(["password", "secret_key"]))
}

async fn seeded() -> SqlitePool {
    let pool = common::memory_pool().await;
    let raw = Model::new(ModelConfig::table("users"));
    let people = [
        ("Ada", "ada@example.com", 36, true),
        ("Brian", "brian@example.com", 17, true),
        ("Cleo", "cleo@example.com", 52, false),
        ("Dev", "dev@example.com", 25, true),
    ];
    for (name, email, age, active) in people {
        let body = json!({
            "name": name,
            "email": email,
            "age": age,
            "active": active,
            "password": "hunter22",
            "secret_key": format!("key-{}", name),
        });
        raw.create(&pool, body.as_object().unwrap()).await.expect("seed");
    }
    pool
}

fn names(rows: &[Value]) -> Vec<&str> {
    rows.iter().map(|r| r["name"].as_str().unwrap_or_default()).collect()
}

fn assert_no_secrets(row: &Value) {
    let obj = row.as_object().expect("row object");
    assert!(!obj.contains_key("password"), "password leaked: {row}");
    assert!(!obj.contains_key("secret_key"), "secret_key leaked: {row}");
}

#[tokio::test]
async fn protected_columns_never_returned() {
    let pool = seeded().await;
    let m = users();

    let found = m.find(&pool, 1).await.unwrap().expect("user 1");
    assert_no_secrets(&found);
    assert_eq!(found["name"], "Ada");

    for row in m.all(&pool).await.unwrap() {
        assert_no_secrets(&row);
    }

    let selected = m.select(["id", "password", "secret_key"]).all(&pool).await.unwrap();
    assert_eq!(selected.len(), 4);
    for row in &selected {
        assert_no_secrets(row);
        assert!(row.get("id").is_some());
    }

    let first = m.select(["password"]).first(&pool).await.unwrap().expect("a row");
    assert_eq!(first, json!({}));
}

#[tokio::test]
async fn select_and_exclude_shape_rows() {
    let pool = seeded().await;
    let rows = users().select(["id", "name"]).all(&pool).await.unwrap();
    assert_eq!(rows[0], json!({"id": 1, "name": "Ada"}));

    let rows = users().exclude(["email", "created_at", "updated_at"]).all(&pool).await.unwrap();
    let keys: Vec<&String> = rows[0].as_object().unwrap().keys().collect();
    assert!(keys.iter().all(|k| !["email", "created_at", "updated_at"].contains(&k.as_str())));
    assert!(rows[0].get("age").is_some());
}

#[tokio::test]
async fn predicates_conjoin() {
    let pool = seeded().await;
    let rows = users()
        .where_eq("active", true)
        .where_op("age", ">", 20)
        .all(&pool)
        .await
        .unwrap();
    assert_eq!(names(&rows), vec!["Ada", "Dev"]);

    let rows = users().where_op("age", "<", 30).all(&pool).await.unwrap();
    assert_eq!(names(&rows), vec!["Brian", "Dev"]);

    let rows = users().where_op("name", "like", "%e%").all(&pool).await.unwrap();
    assert_eq!(names(&rows), vec!["Cleo", "Dev"]);
}

#[tokio::test]
async fn ordering_and_paging() {
    let pool = seeded().await;
    let rows = users().order_by("age", Some(Direction::Desc)).all(&pool).await.unwrap();
    assert_eq!(names(&rows), vec!["Cleo", "Ada", "Dev", "Brian"]);

    let rows = users().order_by("name", None).limit(2).offset(1).all(&pool).await.unwrap();
    assert_eq!(names(&rows), vec!["Brian", "Cleo"]);

    let rows = users().offset(3).all(&pool).await.unwrap();
    assert_eq!(names(&rows), vec!["Dev"]);
}

#[tokio::test]
async fn first_and_find_signal_absence_without_error() {
    let pool = seeded().await;
    let youngest = users().order_by("age", None).first(&pool).await.unwrap().unwrap();
    assert_eq!(youngest["name"], "Brian");

    assert!(users().where_op("age", ">", 200).first(&pool).await.unwrap().is_none());
    assert!(users().find(&pool, 999).await.unwrap().is_none());
    // find respects predicates already on the chain
    assert!(users().where_eq("active", true).find(&pool, 3).await.unwrap().is_none());
    assert!(users().where_eq("active", false).find(&pool, 3).await.unwrap().is_some());
}

#[tokio::test]
async fn find_ignores_paging_on_the_chain() {
    let pool = seeded().await;
    let paged = users().order_by("age", Some(Direction::Desc)).limit(2).offset(1);
    let ada = paged.find(&pool, 1).await.unwrap().expect("user 1");
    assert_eq!(ada["name"], "Ada");
    assert!(users().offset(1).find(&pool, 1).await.unwrap().is_some());
    // paging still applies to the chain itself
    assert_eq!(names(&paged.all(&pool).await.unwrap()), vec!["Ada", "Dev"]);
}

#[tokio::test]
async fn count_honours_predicates_only() {
    let pool = seeded().await;
    assert_eq!(users().count(&pool).await.unwrap(), 4);
    let q = users().select(["name"]).where_eq("active", true).limit(1).offset(2);
    assert_eq!(q.count(&pool).await.unwrap(), 3);
    assert_eq!(q.all(&pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn chains_are_isolated_and_rerunnable() {
    let pool = seeded().await;
    let base = users().where_eq("active", true);
    let adults = base.clone().where_op("age", ">=", 18);
    assert_eq!(base.count(&pool).await.unwrap(), 3);
    assert_eq!(adults.count(&pool).await.unwrap(), 2);

    let once = adults.all(&pool).await.unwrap();
    let twice = adults.all(&pool).await.unwrap();
    assert_eq!(once, twice);
    assert_eq!(base.count(&pool).await.unwrap(), 3);
}

#[tokio::test]
async fn missing_table_fails_at_query_time() {
    let pool = seeded().await;
    let orphan = Model::new(ModelConfig::unnamed().protect(["password"]));
    let q = orphan.select(["id"]).where_eq("id", 1);
    assert!(matches!(q.all(&pool).await, Err(QueryError::MissingTable)));
    assert!(matches!(orphan.count(&pool).await, Err(QueryError::MissingTable)));
    assert!(matches!(orphan.find(&pool, 1).await, Err(QueryError::MissingTable)));
    let body = json!({"name": "x"});
    assert!(matches!(
        orphan.create(&pool, body.as_object().unwrap()).await,
        Err(QueryError::MissingTable)
    ));
}

#[tokio::test]
async fn unknown_operator_fails_at_query_time() {
    let pool = seeded().await;
    let q = users().where_op("age", "between", 3);
    assert!(matches!(q.all(&pool).await, Err(QueryError::InvalidOperator(_))));
    assert!(matches!(q.count(&pool).await, Err(QueryError::InvalidOperator(_))));
}

#[tokio::test]
async fn timestamps_hidden_when_flagged() {
    let pool = seeded().await;
    let plain = users().find(&pool, 2).await.unwrap().unwrap();
    assert!(plain.get("created_at").is_some());

    let quiet = Model::new(ModelConfig::table("users").protect(["password"]).hide_timestamps(true));
    let row = quiet.find(&pool, 2).await.unwrap().unwrap();
    assert!(row.get("created_at").is_none());
    assert!(row.get("updated_at").is_none());
}

#[tokio::test]
async fn rows_carry_typed_values() {
    let pool = seeded().await;
    let row = users().find(&pool, 3).await.unwrap().unwrap();
    assert_eq!(row["id"], json!(3));
    assert_eq!(row["age"], json!(52));
    assert_eq!(row["active"], json!(false));
    assert_eq!(row["email"], json!("cleo@example.com"));
}

#[tokio::test]
async fn create_returns_visible_row_and_destroy_reports_removal() {
    let pool = seeded().await;
    let m = users();
    let body = json!({"name": "Eve", "email": "eve@example.com", "password": "topsecret"});
    let created = m.create(&pool, body.as_object().unwrap()).await.unwrap();
    assert_no_secrets(&created);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(m.count(&pool).await.unwrap(), 5);

    assert!(m.destroy(&pool, id).await.unwrap());
    assert!(!m.destroy(&pool, id).await.unwrap());
    assert!(m.find(&pool, id).await.unwrap().is_none());
}

#[tokio::test]
async fn null_predicates() {
    let pool = seeded().await;
    let m = users();
    let body = json!({"name": "Nobody", "email": "nobody@example.com"});
    m.create(&pool, body.as_object().unwrap()).await.unwrap();
    let rows = m.where_eq("age", Value::Null).all(&pool).await.unwrap();
    assert_eq!(names(&rows), vec!["Nobody"]);
    assert_eq!(m.where_op("age", "!=", Value::Null).count(&pool).await.unwrap(), 4);
}

#[tokio::test]
async fn file_database_persists_between_pools() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("demo.db").display());
    {
        let pool = quarry_sdk::connect(&url).await.unwrap();
        quarry_sdk::apply_demo_schema(&pool).await.unwrap();
        let body = json!({"name": "Ada", "email": "ada@example.com"});
        users().create(&pool, body.as_object().unwrap()).await.unwrap();
        pool.close().await;
    }
    let pool = quarry_sdk::connect(&url).await.unwrap();
    quarry_sdk::apply_demo_schema(&pool).await.unwrap();
    assert_eq!(users().count(&pool).await.unwrap(), 1);
}
