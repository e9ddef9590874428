//! HTTP tests for the intake acceptance API
//!
//! Requests go through the full router (auth, audit, handlers) with
//! `tower::ServiceExt::oneshot`; no socket is opened.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use interface_api::auth::{create_token, permissions};
use interface_api::config::ApiConfig;
use interface_api::create_router;
use interface_api::registry::IntakeRegistry;

const SECRET: &str = "api-test-secret";

fn config() -> ApiConfig {
    ApiConfig {
        jwt_secret: SECRET.to_string(),
        ..ApiConfig::default()
    }
}

fn app() -> Router {
    create_router(Arc::new(IntakeRegistry::new()), config())
}

fn app_with(config: ApiConfig) -> Router {
    create_router(Arc::new(IntakeRegistry::new()), config)
}

fn token(user: &str, roles: &[&str]) -> String {
    create_token(
        user,
        roles.iter().map(|r| r.to_string()).collect(),
        SECRET,
        300,
    )
    .expect("token")
}

fn claimant(user: &str) -> String {
    token(user, &[permissions::INTAKE_SUBMIT])
}

/// A complete traffic-accident request with policy details given by number
fn traffic_request() -> Value {
    json!({
        "category": "교통사고",
        "treatment_types": ["교통사고"],
        "hospital_name": "서울대학교병원",
        "insurance_amount": "3,000,000",
        "insurer_category": "손해보험",
        "insurers": ["현대해상"],
        "policy_insurer": "현대해상",
        "policy_number": "123-456-789",
        "policy_documents": [
            { "file_name": "policy.pdf", "content_type": "application/pdf", "size_bytes": 2097152 }
        ],
        "name": "홍길동",
        "contact": "010-1234-5678",
        "consultation_content": "사고 후 치료비 지급이 지연되고 있습니다.",
        "available_time": "평일 오후"
    })
}

/// A complete liability request; no policy block is shown for it
fn liability_request() -> Value {
    json!({
        "category": "배상책임/재물",
        "treatment_types": ["누수"],
        "person_role": "피해자",
        "region": "서울 마포구",
        "insurance_amount_unknown": true,
        "insurer_category": "손해보험",
        "insurers": ["삼성화재"],
        "name": "김영희",
        "contact": "010-9876-5432",
        "consultation_content": "아랫집 누수 피해 배상 문의드립니다."
    })
}

async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn details(body: &Value) -> Vec<String> {
    body["details"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_is_public() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/health/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        None,
        Some(traffic_request()),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let app = app();
    let forged = create_token("kakao:1", vec![permissions::INTAKE_SUBMIT.to_string()], "other", 300)
        .unwrap();
    let (status, _) = send(&app, Method::GET, "/api/v1/intake-requests", Some(&forged), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_submit_requires_role() {
    let app = app();
    let viewer = token("kakao:1", &[]);
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&viewer),
        Some(traffic_request()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");
}

// ============================================================================
// Accepting requests
// ============================================================================

#[tokio::test]
async fn test_complete_request_is_accepted_and_readable() {
    let app = app();
    let user = claimant("kakao:100");

    let (status, receipt) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&user),
        Some(traffic_request()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = receipt["id"].as_str().unwrap().to_string();
    assert!(receipt["request_number"].as_str().unwrap().starts_with("REQ-"));

    let (status, detail) = send(
        &app,
        Method::GET,
        &format!("/api/v1/intake-requests/{id}"),
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["submitted_by"], "kakao:100");
    assert_eq!(detail["request"]["category"], "교통사고");
    assert_eq!(detail["request"]["policy_number"], "123-456-789");
    assert_eq!(detail["request"]["policy_documents"].as_array().unwrap().len(), 1);

    let (status, list) = send(&app, Method::GET, "/api/v1/intake-requests", Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], id.as_str());
    assert_eq!(rows[0]["document_count"], 1);
}

#[tokio::test]
async fn test_request_without_policy_block_is_accepted() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:7")),
        Some(liability_request()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_policy_unknown_replaces_policy_details() {
    let app = app();
    let mut request = traffic_request();
    request["policy_insurer"] = json!("");
    request["policy_number"] = json!("");
    request["policy_documents"] = json!([]);
    request["policy_unknown"] = json!(true);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:8")),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

// ============================================================================
// Rejections
// ============================================================================

#[tokio::test]
async fn test_incomplete_request_names_missing_fields() {
    let app = app();
    let mut request = traffic_request();
    request["policy_insurer"] = json!("");
    request["policy_number"] = json!("");
    request["policy_documents"] = json!([]);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:9")),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    let missing = details(&body);
    assert!(missing.contains(&"policy_documents".to_string()));
    assert!(missing.contains(&"policy_insurer".to_string()));
    assert!(missing.contains(&"policy_number".to_string()));
}

#[tokio::test]
async fn test_amount_required_unless_unknown() {
    let app = app();
    let mut request = liability_request();
    request["insurance_amount_unknown"] = json!(false);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:10")),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(details(&body), vec!["amount".to_string()]);
}

#[tokio::test]
async fn test_tag_from_another_category_is_inconsistent() {
    let app = app();
    let mut request = traffic_request();
    request["treatment_types"] = json!(["교통사고", "백내장"]);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:11")),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().contains("Inconsistent"));
}

#[tokio::test]
async fn test_unhyphenated_policy_number_is_inconsistent() {
    let app = app();
    let mut request = traffic_request();
    request["policy_number"] = json!("123456789");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:12")),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_blank_contact_fails_shape_check() {
    let app = app();
    let mut request = liability_request();
    request["contact"] = json!("");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:13")),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(details(&body), vec!["contact".to_string()]);
}

#[tokio::test]
async fn test_message_over_default_limit_is_rejected() {
    let app = app();
    let mut request = liability_request();
    request["consultation_content"] = json!("가".repeat(501));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:16")),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(details(&body), vec!["consultation_content".to_string()]);
}

#[tokio::test]
async fn test_configured_message_limit_applies() {
    let mut config = config();
    config.intake.message_max_chars = 1000;
    let app = app_with(config);
    let mut request = liability_request();
    request["consultation_content"] = json!("가".repeat(700));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:17")),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_oversized_document_is_rejected() {
    let app = app();
    let mut request = traffic_request();
    request["policy_documents"][0]["size_bytes"] = json!(10 * 1024 * 1024 + 1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:14")),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(details(&body), vec!["policy_documents".to_string()]);
}

#[tokio::test]
async fn test_malformed_amount_is_rejected() {
    let app = app();
    let mut request = traffic_request();
    request["insurance_amount"] = json!("삼백만원");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:15")),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(details(&body), vec!["insurance_amount".to_string()]);
}

// ============================================================================
// Visibility of stored requests
// ============================================================================

#[tokio::test]
async fn test_unknown_request_is_not_found() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/intake-requests/{}", uuid::Uuid::now_v7()),
        Some(&claimant("kakao:20")),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_other_claimants_request_is_hidden() {
    let app = app();
    let (_, receipt) = send(
        &app,
        Method::POST,
        "/api/v1/intake-requests",
        Some(&claimant("kakao:21")),
        Some(traffic_request()),
    )
    .await;
    let uri = format!("/api/v1/intake-requests/{}", receipt["id"].as_str().unwrap());

    let stranger = claimant("kakao:22");
    let (status, _) = send(&app, Method::GET, &uri, Some(&stranger), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, Method::GET, "/api/v1/intake-requests", Some(&stranger), None).await;
    assert!(list.as_array().unwrap().is_empty());

    let adjuster = token("staff:1", &[permissions::INTAKE_READ_ALL]);
    let (status, _) = send(&app, Method::GET, &uri, Some(&adjuster), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_adjuster_lists_every_request_newest_first() {
    let app = app();
    for user in ["kakao:30", "kakao:31"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/intake-requests",
            Some(&claimant(user)),
            Some(liability_request()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let adjuster = token("staff:1", &[permissions::INTAKE_READ_ALL]);
    let (status, list) = send(&app, Method::GET, "/api/v1/intake-requests", Some(&adjuster), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0]["received_at"].as_str() >= rows[1]["received_at"].as_str());
}
