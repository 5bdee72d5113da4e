mod common;

use axum::http::{Method, StatusCode};
use axum::Router;
use common::{get, memory_pool, send};
use quarry_sdk::{api_routes, demo_models, AppState, Settings};
use serde_json::{json, Value};

async fn app() -> Router {
    let pool = memory_pool().await;
    api_routes(AppState::new(pool, demo_models(), Settings::default()))
}

async fn create_user(app: &Router, name: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/users",
        Some(json!({
            "name": name,
            "email": email,
            "password": "correct horse",
            "secretKey": "abc_123",
            "age": 30,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"].clone()
}

fn assert_no_secrets(row: &Value) {
    for key in ["password", "secret_key", "secretKey"] {
        assert!(row.get(key).is_none(), "{key} leaked: {row}");
    }
}

#[tokio::test]
async fn index_lists_endpoints() {
    let (status, body) = get(&app().await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["endpoints"].as_array().unwrap().len() >= 7);
}

#[tokio::test]
async fn ready_checks_database() {
    let (status, body) = get(&app().await, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["backend"], "sqlite");
    assert_eq!(body["database"]["reachable"], true);
    assert_eq!(body["database"]["connections"], 1);
}

#[tokio::test]
async fn created_user_hides_credentials_everywhere() {
    let app = app().await;
    let created = create_user(&app, "Ada", "ada@example.com").await;
    assert_no_secrets(&created);
    assert_eq!(created["name"], "Ada");
    assert!(created.get("createdAt").is_some());
    let id = created["id"].as_i64().unwrap();

    let (status, body) = get(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_no_secrets(&body["data"]);
    assert_eq!(body["data"]["email"], "ada@example.com");

    let (_, list) = get(&app, "/api/users").await;
    for row in list["data"].as_array().unwrap() {
        assert_no_secrets(row);
    }
    assert_eq!(list["meta"]["total"], 1);
}

#[tokio::test]
async fn missing_user_is_404_and_bad_id_is_400() {
    let app = app().await;
    let (status, body) = get(&app, "/api/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, _) = get(&app, "/api/users/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_validation_and_conflicts() {
    let app = app().await;
    let (status, body) = send(&app, Method::POST, "/api/users", Some(json!({"name": "NoMail"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"name": "Bad", "email": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    create_user(&app, "Ada", "ada@example.com").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"name": "Ada again", "email": "ada@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "conflict");
}

#[tokio::test]
async fn user_list_filters_and_pages() {
    let app = app().await;
    for (name, email, age, active) in [
        ("Ada", "ada@example.com", 36, true),
        ("Brian", "brian@example.com", 17, true),
        ("Cleo", "cleo@example.com", 52, false),
    ] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({"name": name, "email": email, "age": age, "active": active})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = get(&app, "/api/users?active=true").await;
    assert_eq!(body["meta"]["total"], 2);

    let (_, body) = get(&app, "/api/users?minAge=18").await;
    let names: Vec<&str> = body["data"].as_array().unwrap().iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Ada", "Cleo"]);

    let (_, body) = get(&app, "/api/users?limit=1&offset=1").await;
    assert_eq!(body["meta"]["count"], 1);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["data"][0]["name"], "Brian");

    let (status, _) = get(&app, "/api/users?active=sometimes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_user_then_gone() {
    let app = app().await;
    let created = create_user(&app, "Temp", "temp@example.com").await;
    let uri = format!("/api/users/{}", created["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn posts_filter_by_author() {
    let app = app().await;
    let ada = create_user(&app, "Ada", "ada@example.com").await["id"].as_i64().unwrap();
    let bob = create_user(&app, "Bob", "bob@example.com").await["id"].as_i64().unwrap();
    for (author, title, published) in [(ada, "Engines", true), (bob, "Cats", false), (ada, "Notes", false)] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/posts",
            Some(json!({"userId": author, "title": title, "content": "...", "published": published})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["data"]["userId"], author);
    }

    let (_, body) = get(&app, &format!("/api/posts?authorId={}", ada)).await;
    let titles: Vec<&str> = body["data"].as_array().unwrap().iter().map(|r| r["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Notes", "Engines"]);

    let (_, body) = get(&app, &format!("/api/posts?authorId={}&published=true", ada)).await;
    assert_eq!(body["meta"]["total"], 1);

    let (_, body) = get(&app, "/api/posts").await;
    assert_eq!(body["meta"]["total"], 3);

    let (status, _) = get(&app, "/api/posts?authorId=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn posts_order_by_requested_column() {
    let app = app().await;
    let author = create_user(&app, "Ada", "ada@example.com").await["id"].as_i64().unwrap();
    for title in ["Bravo", "Charlie", "Alpha"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/posts",
            Some(json!({"userId": author, "title": title})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let titles = |body: &Value| -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap().to_string())
            .collect()
    };

    let (_, body) = get(&app, "/api/posts?order=title&dir=asc").await;
    assert_eq!(titles(&body), vec!["Alpha", "Bravo", "Charlie"]);
    let (_, body) = get(&app, "/api/posts?order=title").await;
    assert_eq!(titles(&body), vec!["Charlie", "Bravo", "Alpha"]);
    let (_, body) = get(&app, "/api/posts?dir=ASC").await;
    assert_eq!(titles(&body), vec!["Bravo", "Charlie", "Alpha"]);
    let (_, body) = get(&app, "/api/posts?order=userId&dir=descending").await;
    assert_eq!(body["meta"]["count"], 3);

    let (status, body) = get(&app, "/api/posts?dir=sideways").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
    let (status, _) = get(&app, "/api/posts?order=password").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_lookup_and_author_check() {
    let app = app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/posts",
        Some(json!({"userId": 41, "title": "Orphan"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let author = create_user(&app, "Ada", "ada@example.com").await["id"].as_i64().unwrap();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/posts",
        Some(json!({"userId": author, "title": "Hello"})),
    )
    .await;
    let (status, body) = get(&app, &format!("/api/posts/{}", created["data"]["id"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Hello");

    let (status, _) = get(&app, "/api/posts/12345").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unregistered_routes_and_methods() {
    let app = app().await;
    let (status, body) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, _) = send(&app, Method::DELETE, "/api/posts/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let (status, _) = send(&app, Method::PUT, "/api/users", Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
