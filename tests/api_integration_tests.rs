//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use book_list::{auth::CAPABILITIES_HEADER, create_router, AppState, Catalog, Config};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(Catalog::in_memory()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn create_request(body: &str, capabilities: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/books")
        .header("content-type", "application/json");
    if let Some(capabilities) = capabilities {
        builder = builder.header(CAPABILITIES_HEADER, capabilities);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn add_book(app: &Router, book_name: &str, author_name: &str) -> Value {
    let body = serde_json::json!({ "book_name": book_name, "author_name": author_name });
    let response = app
        .clone()
        .oneshot(create_request(&body.to_string(), Some("publish_posts")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_to_json(response.into_body()).await
}

async fn list(app: &Router, uri: &str) -> Value {
    let response = app.clone().oneshot(get_request(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

fn names(json: &Value) -> Vec<&str> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|b| b["book_name"].as_str().unwrap())
        .collect()
}

// == List Endpoint Tests ==

#[tokio::test]
async fn test_list_empty_catalog() {
    let app = create_test_app();

    let json = list(&app, "/books").await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_defaults_sort_by_name_ascending() {
    let app = create_test_app();
    add_book(&app, "The Hobbit", "J.R.R. Tolkien").await;
    add_book(&app, "Dune", "Frank Herbert").await;
    add_book(&app, "Emma", "Jane Austen").await;

    let json = list(&app, "/books").await;
    assert_eq!(names(&json), vec!["Dune", "Emma", "The Hobbit"]);
}

#[tokio::test]
async fn test_list_paging_and_order() {
    let app = create_test_app();
    for (book, author) in [
        ("Alpha", "Zed"),
        ("Bravo", "Yan"),
        ("Charlie", "Xu"),
        ("Delta", "Wu"),
        ("Echo", "Vo"),
    ] {
        add_book(&app, book, author).await;
    }

    let json = list(&app, "/books?page=2&per_page=2").await;
    assert_eq!(names(&json), vec!["Charlie", "Delta"]);

    let json = list(&app, "/books?orderby=author_name&order=DESC&per_page=2").await;
    assert_eq!(names(&json), vec!["Alpha", "Bravo"]);

    let json = list(&app, "/books?orderby=id&order=DESC&per_page=1").await;
    assert_eq!(names(&json), vec!["Echo"]);

    let json = list(&app, "/books?page=9").await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_search_matches_either_column() {
    let app = create_test_app();
    add_book(&app, "Dune", "Frank Herbert").await;
    add_book(&app, "Emma", "Jane Austen").await;

    let json = list(&app, "/books?search=herb").await;
    assert_eq!(names(&json), vec!["Dune"]);

    let json = list(&app, "/books?search=EMM").await;
    assert_eq!(names(&json), vec!["Emma"]);
}

#[tokio::test]
async fn test_list_rejects_invalid_params() {
    let app = create_test_app();

    for (uri, param) in [
        ("/books?page=0", "page"),
        ("/books?page=abc", "page"),
        ("/books?per_page=101", "per_page"),
        ("/books?order=sideways", "order"),
        ("/books?orderby=price", "orderby"),
    ] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let json = body_to_json(response.into_body()).await;
        assert_eq!(json["code"], "rest_invalid_param");
        assert!(json["data"]["params"].get(param).is_some(), "{}", uri);
    }
}

#[tokio::test]
async fn test_list_duplicate_param_is_json_error() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/books?page=abc&page=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["code"], "rest_invalid_param");
    assert!(json["message"].is_string());
}

// == Create Endpoint Tests ==

#[tokio::test]
async fn test_create_returns_created_book() {
    let app = create_test_app();

    let json = add_book(&app, "Dune", "Frank Herbert").await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["book_name"], "Dune");
    assert_eq!(json["author_name"], "Frank Herbert");
}

#[tokio::test]
async fn test_create_sanitizes_input() {
    let app = create_test_app();

    let json = add_book(&app, "  <b>Dune</b>  ", "Frank\n Herbert").await;
    assert_eq!(json["book_name"], "Dune");
    assert_eq!(json["author_name"], "Frank Herbert");
}

#[tokio::test]
async fn test_create_without_capability_is_forbidden() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(create_request(
            r#"{"book_name":"Dune","author_name":"Frank Herbert"}"#,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["code"], "rest_forbidden");
    assert_eq!(json["data"]["status"], 403);

    assert_eq!(list(&app, "/books").await, serde_json::json!([]));
}

#[tokio::test]
async fn test_create_missing_fields() {
    let app = create_test_app();

    let response = app
        .oneshot(create_request(r#"{"book_name":"Dune"}"#, Some("publish_posts")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["code"], "rest_missing_callback_param");
    assert_eq!(json["data"]["params"], serde_json::json!(["author_name"]));
}

#[tokio::test]
async fn test_create_rejects_bad_lengths() {
    let app = create_test_app();
    let long_name = "x".repeat(51);

    for body in [
        serde_json::json!({ "book_name": "D", "author_name": "Frank Herbert" }),
        serde_json::json!({ "book_name": long_name, "author_name": "Frank Herbert" }),
        serde_json::json!({ "book_name": "Dune", "author_name": "   " }),
    ] {
        let response = app
            .clone()
            .oneshot(create_request(&body.to_string(), Some("publish_posts")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", body);
    }

    assert_eq!(list(&app, "/books").await, serde_json::json!([]));
}

#[tokio::test]
async fn test_create_invalidates_cached_lists() {
    let app = create_test_app();
    add_book(&app, "Dune", "Frank Herbert").await;

    // Prime the cache, then hit it
    list(&app, "/books").await;
    list(&app, "/books").await;

    add_book(&app, "Emma", "Jane Austen").await;

    let json = list(&app, "/books").await;
    assert_eq!(names(&json), vec!["Dune", "Emma"]);

    let stats = list(&app, "/stats").await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 2);
    assert_eq!(stats["flushes"], 2);
    assert_eq!(stats["total_books"], 2);
}

#[tokio::test]
async fn test_create_reports_empty_and_length_reasons() {
    let app = create_test_app();

    for (body, field, reason) in [
        (r#"{"book_name":"","author_name":"Frank Herbert"}"#, "book_name", "empty"),
        (r#"{"book_name":"Dune","author_name":"F"}"#, "author_name", "length"),
    ] {
        let response = app
            .clone()
            .oneshot(create_request(body, Some("publish_posts")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_to_json(response.into_body()).await;
        assert_eq!(json["code"], "rest_invalid_param");
        assert!(json["data"]["params"].get(field).is_some());
        assert_eq!(json["data"]["field"], field);
        assert_eq!(json["data"]["reason"], reason);
    }
}

// == Schema Endpoint Tests ==

#[tokio::test]
async fn test_options_describes_schema() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/books")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    let properties = &json["schema"]["properties"];
    assert_eq!(properties["id"]["readonly"], true);
    assert_eq!(properties["book_name"]["maxLength"], 50);
    assert_eq!(properties["author_name"]["minLength"], 2);
}

// == Widget Tests ==

#[tokio::test]
async fn test_form_widget_round_trip() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/book-form")
                .header(CAPABILITIES_HEADER, "publish_posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_to_string(response.into_body()).await;

    let marker = r#"name="book_nonce" value=""#;
    let start = html.find(marker).unwrap() + marker.len();
    let nonce = &html[start..start + html[start..].find('"').unwrap()];

    let form = format!(
        "submit_book=Submit&book_nonce={}&book_name=Dune&author_name=Frank+Herbert",
        nonce
    );
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/book-form")
                .header("content-type", "application/x-www-form-urlencoded")
                .header(CAPABILITIES_HEADER, "publish_posts")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()["location"],
        "/book-form?book_added=true"
    );

    let json = list(&app, "/books").await;
    assert_eq!(names(&json), vec!["Dune"]);
}

#[tokio::test]
async fn test_form_widget_rejects_unknown_nonce() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/book-form")
                .header("content-type", "application/x-www-form-urlencoded")
                .header(CAPABILITIES_HEADER, "publish_posts")
                .body(Body::from(
                    "submit_book=Submit&book_nonce=forged&book_name=Dune&author_name=Frank",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Invalid nonce."));

    assert_eq!(list(&app, "/books").await, serde_json::json!([]));
}

#[tokio::test]
async fn test_form_widget_without_capability() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/book-form")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_to_string(response.into_body()).await;
    assert_eq!(html, "You do not have permission to add book.");
}

#[tokio::test]
async fn test_list_widget_search_and_placeholder() {
    let app = create_test_app();
    add_book(&app, "Dune", "Frank Herbert").await;
    add_book(&app, "Emma", "Jane Austen").await;

    let response = app
        .clone()
        .oneshot(get_request("/book-list?book_search=austen"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("<td>Emma</td>"));
    assert!(!html.contains("<td>Dune</td>"));

    let response = app
        .oneshot(get_request("/book-list?book_page=3"))
        .await
        .unwrap();
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("No books found."));
}

#[tokio::test]
async fn test_list_widget_escapes_angle_bracket_once() {
    let app = create_test_app();
    add_book(&app, "1 < 2 Stories", "Ann Author").await;

    let response = app.oneshot(get_request("/book-list")).await.unwrap();
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("<td>1 &lt; 2 Stories</td>"));
    assert!(!html.contains("&amp;lt;"));
}

// == Service Endpoint Tests ==

#[tokio::test]
async fn test_distinct_searches_stay_under_cache_cap() {
    let config = Config {
        cache_max_entries: 25,
        ..Config::default()
    };
    let app = create_router(AppState::from_config(&config));

    for i in 0..200 {
        list(&app, &format!("/books?search=unique-{}", i)).await;
    }

    let stats = list(&app, "/stats").await;
    assert_eq!(stats["misses"], 200);
    assert_eq!(stats["cached_queries"], 25);
    assert_eq!(stats["evictions"], 175);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let json = list(&app, "/health").await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_stats_endpoint_initial_state() {
    let app = create_test_app();

    let json = list(&app, "/stats").await;
    assert_eq!(json["hits"], 0);
    assert_eq!(json["misses"], 0);
    assert_eq!(json["cached_queries"], 0);
    assert_eq!(json["total_books"], 0);
}
