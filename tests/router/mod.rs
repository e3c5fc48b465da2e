//! Tests driving the full router, including path matching and body extraction.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use roster::{
    model::member::{MemberDto, MemberState},
    server::{model::app::AppState, router::routes},
};
use roster_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::read_json;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Expect a code to be reusable after deletion and the old record to conflict on restore
#[tokio::test]
async fn member_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());
    let body = serde_json::json!({
        "organization_type": "resident",
        "member_code": "R001",
        "name": "Ada Lovelace",
    });

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/members", body.clone()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: MemberDto = read_json(resp).await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/members", body.clone()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/members/{}", first.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/members", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second: MemberDto = read_json(resp).await;
    assert_ne!(first.id, second.id);

    let resp = app
        .clone()
        .oneshot(empty_request(
            "POST",
            &format!("/api/members/{}/restore", first.id),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = app
        .clone()
        .oneshot(empty_request(
            "GET",
            "/api/members?organization_type=resident&include_deleted=true",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let members: Vec<MemberDto> = read_json(resp).await;
    assert_eq!(members.len(), 2);
    assert_eq!(
        members.iter().filter(|m| m.state == MemberState::Active).count(),
        1
    );

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let resp = app
        .oneshot(empty_request("GET", "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
