//! HTTP transport tests.
//!
//! Starts an axum server on an ephemeral port and drives it with reqwest.

use std::sync::Arc;

use bookstore::microsvc::{self, Service};
use bookstore::InMemoryStore;
use serde_json::{json, Value};

use crate::support::full_service;

/// Bind to port 0 and return the base URL.
async fn start_server(service: Service<InMemoryStore>) -> String {
    let app = microsvc::router(Arc::new(service));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_lists_registered_routes() {
    let base = start_server(full_service().named("all-in-one")).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "all-in-one");
    let routes = body["routes"].as_array().unwrap();
    assert!(routes.iter().any(|r| r == "books.create"));
    assert!(routes.iter().any(|r| r == "years.list"));
}

#[tokio::test]
async fn create_read_update_delete_scenario() {
    let base = start_server(full_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/books"))
        .json(&json!({ "id": "b1", "title": "T", "author": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["book"]["id"], "b1");

    let books: Vec<Value> = client
        .get(format!("{base}/api/books"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], "b1");

    let resp = client
        .put(format!("{base}/api/books/b1"))
        .json(&json!({ "title": "T2", "author": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .delete(format!("{base}/api/books/b1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "deleted_count": 1 }));

    let resp = client
        .delete(format!("{base}/api/books/b1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn errors_map_to_status_codes_with_a_message() {
    let base = start_server(full_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/books"))
        .json(&json!({ "id": "b1", "title": "", "author": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("title"));

    client
        .post(format!("{base}/api/books"))
        .json(&json!({ "id": "b1", "title": "T", "author": "A" }))
        .send()
        .await
        .unwrap();
    let resp = client
        .post(format!("{base}/api/books"))
        .json(&json!({ "id": "b1", "title": "T", "author": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);

    let resp = client
        .put(format!("{base}/api/books/ghost"))
        .json(&json!({ "title": "T", "author": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let base = start_server(full_service()).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/books"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn unregistered_routes_are_not_served() {
    let reader = bookstore::register_handlers!(
        Service::new(InMemoryStore::new()),
        bookstore::handlers::books_list,
    );
    let base = start_server(reader).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/books"))
        .json(&json!({ "id": "b1", "title": "T", "author": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);
}
