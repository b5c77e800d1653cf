//! End-to-end HTTP tests against the in-process router.
//!
//! Run with: cargo test --package reptor-web --test api

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use reptor_web::{router::build_router, state::AppState};

// Same values are posted for reach and clarity.
const REPUTATION_DATA: [(&str, &[f64]); 3] = [
    ("you", &[0.0, 4.3, 6.0, 10.0, 10.0]),
    ("another", &[0.0, 4.3, 6.0, 10.0, 10.0, 2.0, 2.0, 1.0, 3.0]),
    ("last", &[1.0, 3.0]),
];

fn repute(reputee: &str, feature: &str, value: f64) -> Value {
    json!({
        "reputer": "me",
        "reputee": reputee,
        "repute": {
            "rid": uuid::Uuid::new_v4().to_string(),
            "feature": feature,
            "value": value,
        }
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn seeded_app() -> Router {
    let app = build_router(AppState::default());
    for feature in ["reach", "clarity"] {
        for (name, values) in REPUTATION_DATA {
            for &v in values {
                let (status, _) = send(&app, Method::POST, "/reptor", Some(&repute(name, feature, v))).await;
                assert_eq!(status, StatusCode::ACCEPTED);
            }
        }
    }
    app
}

fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().expect("numeric field");
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

#[tokio::test]
async fn test_post_accepts_valid_reputes() {
    let app = build_router(AppState::default());
    let (status, body) = send(&app, Method::POST, "/reptor", Some(&repute("you", "reach", 4.3))).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "accepted");
}

#[tokio::test]
async fn test_post_rejects_out_of_range_values() {
    let app = build_router(AppState::default());
    for feature in ["reach", "clarity"] {
        for bad in [-1.0, 11.0] {
            let (status, body) = send(&app, Method::POST, "/reptor", Some(&repute("you", feature, bad))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body["error"].is_string());
        }
    }
    let (_, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(health["observations"], 0);
}

#[tokio::test]
async fn test_post_rejects_malformed_payloads() {
    let app = build_router(AppState::default());

    let unknown_feature = repute("you", "clout", 5.0);
    let (status, _) = send(&app, Method::POST, "/reptor", Some(&unknown_feature)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let missing_rid = json!({"reputer": "me", "reputee": "you", "repute": {"feature": "reach", "value": 1}});
    let (status, _) = send(&app, Method::POST, "/reptor", Some(&missing_rid)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let wrong_type = json!({"reputer": "me", "reputee": "you", "repute": {"rid": "x", "feature": "reach", "value": "high"}});
    let (status, _) = send(&app, Method::POST, "/reptor", Some(&wrong_type)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_duplicate_rid_is_unprocessable() {
    let app = build_router(AppState::default());
    let payload = repute("you", "clarity", 6.0);

    let (first, _) = send(&app, Method::POST, "/reptor", Some(&payload)).await;
    let (second, body) = send(&app, Method::POST, "/reptor", Some(&payload)).await;
    assert_eq!(first, StatusCode::ACCEPTED);
    assert_eq!(second, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Rejected due to duplicate identifier");

    let (_, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(health["observations"], 1);
}

#[tokio::test]
async fn test_get_reports_expected_scores() {
    let app = seeded_app().await;

    // (reputee, feature, score, confidence)
    let expected = [
        ("you", "reach", 6.06, 0.875),
        ("you", "clarity", 6.06, 0.125),
        ("you", "clout", 0.606, 0.125),
        ("another", "reach", 4.2555555555555555, 1.0),
        ("another", "clarity", 4.2555555555555555, 1.0),
        ("another", "clout", 0.42555555555555558, 1.0),
        ("last", "reach", 2.0, 0.0),
        ("last", "clarity", 2.0, 0.0),
        ("last", "clout", 0.0, 0.0),
    ];

    for (name, feature, score, confidence) in expected {
        let (status, body) = send(&app, Method::GET, &format!("/reptor?reputee={name}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_close(&body[feature]["score"], score);
        assert_close(&body[feature]["confidence"], confidence);
    }
}

#[tokio::test]
async fn test_get_accepts_json_body() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/reptor", Some(&json!({"reputee": "you"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_close(&body["reach"]["score"], 6.06);
}

#[tokio::test]
async fn test_get_unknown_reputee_is_unprocessable() {
    let app = build_router(AppState::default());
    let (status, body) = send(&app, Method::GET, "/reptor?reputee=nobody", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Reputee not found");
}

#[tokio::test]
async fn test_get_without_reputee_is_bad_request() {
    let app = build_router(AppState::default());
    let (status, _) = send(&app, Method::GET, "/reptor", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsubmitted_feature_scores_zero() {
    let app = build_router(AppState::default());
    send(&app, Method::POST, "/reptor", Some(&repute("fresh", "clarity", 8.0))).await;

    let (status, body) = send(&app, Method::GET, "/reptor?reputee=fresh", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_close(&body["reach"]["score"], 0.0);
    assert_close(&body["reach"]["confidence"], 0.0);
    assert_close(&body["clarity"]["score"], 8.0);
    assert_close(&body["clout"]["score"], 0.0);
}

#[tokio::test]
async fn test_health_counts_store() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["reputees"], 3);
    assert_eq!(body["observations"], 32);
}
