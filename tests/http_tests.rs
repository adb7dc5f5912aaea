use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use blogql::config::StoreSettings;
use blogql::graphql::{build_schema, router};
use blogql::storage::{AUTHOR_COLLECTION, DocumentStore, MemoryStore, Repository};
use bson::doc;
use serde_json::{Value, json};
use tower::ServiceExt;

fn setup() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let repo = Repository::new(store.clone(), &StoreSettings::default());
    (store, router(build_schema(repo)))
}

fn graphql_uri(query: &str) -> String {
    let encoded = serde_urlencoded::to_string([("query", query)]).unwrap();
    format!("/graphql?{}", encoded)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, content_type, body)
}

async fn request(app: &Router, method: Method, query: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(graphql_uri(query))
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, body)
}

#[tokio::test]
async fn test_empty_collection_over_get() {
    let (_store, app) = setup();
    let request = Request::builder()
        .uri(graphql_uri("{ authors { id } }"))
        .body(Body::empty())
        .unwrap();

    let (status, content_type, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, json!({ "data": { "authors": [] } }));
}

#[tokio::test]
async fn test_post_with_query_parameter() {
    let (store, app) = setup();
    store
        .insert_one(
            AUTHOR_COLLECTION,
            doc! { "firstname": "Ada", "lastname": "Lovelace" },
        )
        .await
        .unwrap();

    let (status, body) = request(
        &app,
        Method::POST,
        "query { authors { firstname lastname } }",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": { "authors": [{ "firstname": "Ada", "lastname": "Lovelace" }] } })
    );
}

#[tokio::test]
async fn test_create_then_fetch_author() {
    let (_store, app) = setup();

    let (status, body) = request(
        &app,
        Method::POST,
        r#"mutation { createAuthor(firstname: "Grace", lastname: "Hopper") { id firstname lastname } }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created = &body["data"]["createAuthor"];
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["firstname"], "Grace");
    assert_eq!(created["lastname"], "Hopper");

    let (_, body) = request(
        &app,
        Method::GET,
        &format!(r#"{{ author(id: "{}") {{ firstname lastname }} }}"#, id),
    )
    .await;
    assert_eq!(
        body,
        json!({ "data": { "author": { "firstname": "Grace", "lastname": "Hopper" } } })
    );
}

#[tokio::test]
async fn test_missing_argument_still_200() {
    let (_store, app) = setup();
    let (status, body) = request(&app, Method::GET, "{ author { firstname } }").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["errors"].as_array().unwrap().is_empty());
    assert!(body["data"]["author"].is_null());
}

#[tokio::test]
async fn test_unknown_author_still_200() {
    let (_store, app) = setup();
    let (status, body) = request(
        &app,
        Method::GET,
        r#"mutation { createBlog(authorID: "65a1f0a8e4b0a1b2c3d4e5f1", title: "T", body: "B") { id } }"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_query_parameter_reports_error() {
    let (_store, app) = setup();
    let request = Request::builder()
        .uri("/graphql")
        .body(Body::empty())
        .unwrap();

    let (status, content_type, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_json_body_fallback() {
    let (_store, app) = setup();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"query":"{ blogs { id } }"}"#))
        .unwrap();

    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "blogs": [] } }));
}

#[tokio::test]
async fn test_graphiql_page() {
    let (_store, app) = setup();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/graphql"));
}
