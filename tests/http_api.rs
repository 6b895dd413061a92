//! End-to-end tests against a listening service.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_uppercase_over_http() {
    let svc = common::start_service().await;
    let res = common::client()
        .post(svc.url("/uppercase"))
        .json(&json!({"s": "hello"}))
        .send()
        .await
        .expect("service unreachable");

    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"v": "HELLO"}));

    svc.shutdown.trigger();
}

#[tokio::test]
async fn test_count_over_http() {
    let svc = common::start_service().await;
    let client = common::client();

    let body: Value = client
        .post(svc.url("/count"))
        .json(&json!({"s": "hello"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"v": 5}));

    let body: Value = client
        .post(svc.url("/count"))
        .json(&json!({"s": ""}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"v": -1, "err": "Empty string"}));

    svc.shutdown.trigger();
}

#[tokio::test]
async fn test_empty_uppercase_is_in_band() {
    let svc = common::start_service().await;
    let res = common::client()
        .post(svc.url("/uppercase"))
        .json(&json!({"s": ""}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"v": "", "err": "Empty string"}));

    svc.shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_body_never_reaches_service() {
    let svc = common::start_service().await;
    let res = common::client()
        .post(svc.url("/count"))
        .header("content-type", "application/json")
        .body("{\"s\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let rendered = svc.metrics.render();
    assert!(
        !rendered.contains("request_count{"),
        "no service call should be recorded:\n{rendered}"
    );

    svc.shutdown.trigger();
}

#[tokio::test]
async fn test_metrics_exposed() {
    let svc = common::start_service().await;
    let client = common::client();
    client
        .post(svc.url("/uppercase"))
        .json(&json!({"s": "abc"}))
        .send()
        .await
        .unwrap();

    let text = client
        .get(svc.url("/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(text.contains("my_group_string_service_request_count"));
    assert!(text.contains("method=\"uppercase\""));

    svc.shutdown.trigger();
}

#[tokio::test]
async fn test_health() {
    let svc = common::start_service().await;
    let body: Value = common::client()
        .get(svc.url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");

    svc.shutdown.trigger();
}
