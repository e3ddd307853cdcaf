use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use subhub::graphql::{build_schema, router};
use subhub::model::User;
use subhub::storage::{SeedData, Store};
use tower::ServiceExt;
use uuid::Uuid;

fn app() -> (axum::Router, Uuid) {
    let alice = Uuid::new_v4();
    let seed = SeedData {
        users: vec![User {
            id: alice,
            name: "Alice".to_string(),
            balance: 1.0,
        }],
        ..Default::default()
    };
    (router(build_schema(Arc::new(Store::from_seed(seed)))), alice)
}

async fn post_graphql(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_post_root_executes_query() {
    let (app, alice) = app();
    let (status, value) = post_graphql(
        app,
        json!({ "query": format!(r#"{{ user(id: "{alice}") {{ name }} }}"#) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["data"]["user"]["name"], "Alice");
}

#[tokio::test]
async fn test_variables_are_passed_through() {
    let (app, alice) = app();
    let (status, value) = post_graphql(
        app,
        json!({
            "query": "query($id: UUID!) { user(id: $id) { name } }",
            "variables": { "id": alice }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["data"]["user"]["name"], "Alice");
}

#[tokio::test]
async fn test_invalid_document_returns_errors_with_http_200() {
    let (app, _) = app();
    let (status, value) = post_graphql(app, json!({ "query": "{ nonExistentField }" })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!value["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_member_types_end_to_end() {
    let (app, _) = app();
    let (status, value) =
        post_graphql(app, json!({ "query": "{ memberTypes { id discount } }" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value,
        json!({
            "data": {
                "memberTypes": [
                    { "id": "BASIC", "discount": 2.5 },
                    { "id": "BUSINESS", "discount": 7.5 }
                ]
            }
        })
    );
}

#[tokio::test]
async fn test_get_is_not_part_of_the_surface() {
    let (app, _) = app();
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
