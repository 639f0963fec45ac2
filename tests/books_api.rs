//! End-to-end behaviour of the books endpoints through the full middleware stack.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    Router,
};
use serde_json::{json, Value};
use shelf_app::modules::books::BooksModule;
use shelf_kernel::{ModuleRegistry, Settings};
use tower::ServiceExt;

fn app_with(settings: &Settings) -> Router {
    let mut registry = ModuleRegistry::new();
    registry.register(Arc::new(BooksModule::in_memory(settings.books.seed)));
    shelf_http::build_router(&registry, settings)
}

fn app() -> Router {
    app_with(&Settings::default())
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn fresh_service_lists_the_seed() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/books", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": "1", "title": "XYZ", "author": "ABC", "quantity": 2},
            {
                "id": "2",
                "title": "The Great Gatsby",
                "author": "F. Scott Fitzgerald",
                "quantity": 5
            },
            {"id": "3", "title": "War and Peace", "author": "Leo Tolstoy", "quantity": 6}
        ])
    );
}

#[tokio::test]
async fn create_delete_scenario() {
    let app = app();
    let posted = json!({"id": "4", "title": "T", "author": "A", "quantity": 1});

    let (status, body) = call(&app, Method::POST, "/books", Some(posted.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, posted);

    let (_, list) = call(&app, Method::GET, "/books", None).await;
    assert_eq!(ids(&list), vec!["1", "2", "3", "4"]);

    let (status, body) = call(&app, Method::DELETE, "/books/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Book deleted successfully"}));

    let (_, list) = call(&app, Method::GET, "/books", None).await;
    assert_eq!(ids(&list), vec!["1", "3", "4"]);

    let (status, body) = call(&app, Method::DELETE, "/books/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Book not found"}));

    let (_, list) = call(&app, Method::GET, "/books", None).await;
    assert_eq!(ids(&list).len(), 3);
}

#[tokio::test]
async fn decode_failure_reports_error_and_keeps_list() {
    let app = app();

    let (status, body) = call(
        &app,
        Method::POST,
        "/books",
        Some(json!({"id": "5", "title": "T", "author": "A", "quantity": "lots"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("quantity"));

    let (_, list) = call(&app, Method::GET, "/books", None).await;
    assert_eq!(ids(&list), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn delete_is_case_sensitive() {
    let app = app();
    call(
        &app,
        Method::POST,
        "/books",
        Some(json!({"id": "abc", "title": "T", "author": "A", "quantity": 1})),
    )
    .await;

    let (status, _) = call(&app, Method::DELETE, "/books/ABC", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::DELETE, "/books/abc", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn route_prefix_moves_the_books_endpoints() {
    let mut settings = Settings::default();
    settings.server.route_prefix = "/api".to_string();
    let app = app_with(&settings);

    let (status, _) = call(&app, Method::GET, "/api/books", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/books")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn openapi_describes_book_routes() {
    let app = app();
    let (status, doc) = call(&app, Method::GET, "/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/books"]["get"].is_object());
    assert!(doc["paths"]["/books"]["post"].is_object());
    assert!(doc["paths"]["/books/{id}"]["delete"].is_object());
    assert!(doc["components"]["schemas"]["Book"].is_object());
}

#[tokio::test]
async fn unseeded_store_starts_empty() {
    let mut settings = Settings::default();
    settings.books.seed = false;
    let app = app_with(&settings);

    let (status, body) = call(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_accepts_bodies_without_json_content_type() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/books")
        .body(Body::from(
            r#"{"id":"4","title":"T","author":"A","quantity":1} xyz"#,
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (_, list) = call(&app, Method::GET, "/books", None).await;
    assert_eq!(ids(&list), vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn partial_book_is_created_with_zero_values() {
    let app = app();
    let (status, body) = call(&app, Method::POST, "/books", Some(json!({"id": "4"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": "4", "title": "", "author": "", "quantity": 0})
    );
}
