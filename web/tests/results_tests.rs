/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use litmus_core::config::LitmusConfig;
use serde_json::{Value, json};

const BUILD: &str = "2.0.1-118-rel-enterprise";

#[tokio::test]
async fn test_post_requires_fields_in_order() {
    let server = common::create_server().await;

    let response = server
        .post("/litmus/post")
        .form(&[("testcase", "mixed-litmus"), ("env", "terra")])
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "build");

    let response = server
        .post("/litmus/post/")
        .form(&[("build", BUILD), ("testcase", "mixed-litmus"), ("env", "terra")])
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "metric");

    let response = server
        .post("/litmus/post/")
        .form(&[
            ("build", BUILD),
            ("testcase", "mixed-litmus"),
            ("env", "terra"),
            ("metric", "Throughput"),
        ])
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "value");
}

#[tokio::test]
async fn test_post_created_then_updated() {
    let server = common::create_server().await;
    let form = [
        ("build", BUILD),
        ("testcase", "mixed-litmus"),
        ("env", "terra"),
        ("metric", "Throughput"),
        ("value", "8793"),
    ];

    let response = server.post("/litmus/post/").form(&form).await;
    response.assert_status_ok();
    assert_eq!(response.text(), "Created");

    let response = server.post("/litmus/post/").form(&form).await;
    response.assert_status_ok();
    assert_eq!(response.text(), "Updated");

    let table: Vec<Vec<Value>> = server.get("/litmus/get").await.json();
    assert_eq!(table.len(), 2);
    assert_eq!(table[1][4], json!("8793 / 8793-&--&-"));
}

#[tokio::test]
async fn test_post_rejects_non_numeric_value_before_writing() {
    let server = common::create_server().await;

    let response = server
        .post("/litmus/post/")
        .form(&[
            ("build", BUILD),
            ("testcase", "mixed-litmus"),
            ("env", "terra"),
            ("metric", "Throughput"),
            ("value", "8793"),
            ("metric", "Latency"),
            ("value", "fast"),
        ])
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "invalid value: fast");

    let tags: Vec<String> = server.get("/litmus/get/tags").await.json();
    assert!(tags.is_empty());
}

#[tokio::test]
async fn test_post_rejects_non_finite_values() {
    let server = common::create_server().await;

    for value in ["nan", "inf", "-inf"] {
        let response = server
            .post("/litmus/post/")
            .form(&[
                ("build", BUILD),
                ("testcase", "mixed-litmus"),
                ("env", "terra"),
                ("metric", "Throughput"),
                ("value", value),
            ])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), format!("invalid value: {}", value));
    }

    let table: Vec<Vec<Value>> = server.get("/litmus/get").await.json();
    assert_eq!(table.len(), 1);
}

#[tokio::test]
async fn test_post_multiple_metrics_and_report() {
    let server = common::create_server().await;

    server
        .post("/litmus/post/")
        .form(&[
            ("build", " 2.0.0-1723-rel-enterprise "),
            ("testcase", "mixed-litmus"),
            ("env", "terra"),
            ("metric", "Get Delay, ms"),
            ("value", "222"),
            ("metric", "Throughput"),
            ("value", "8793"),
            ("metric", "Unpaired"),
        ])
        .await
        .assert_status_ok();

    server
        .post("/litmus/post/")
        .form(&[
            ("build", BUILD),
            ("testcase", "mixed-litmus"),
            ("env", "terra"),
            ("metric", "Throughput"),
            ("value", "9000.5"),
        ])
        .await
        .assert_status_ok();

    let response = server.get("/litmus/get/").await;
    response.assert_status_ok();
    let table: Vec<Vec<Value>> = response.json();

    assert_eq!(
        table,
        vec![
            vec![
                json!("Testcase"),
                json!("Env"),
                json!("Metric"),
                json!("Timestamp"),
                json!("2.0.1-118-rel-enterprise"),
                json!("2.0.0-1723-rel-enterprise"),
            ],
            vec![
                json!("mixed-litmus"),
                json!("terra"),
                json!("Get Delay, ms"),
                table[1][3].clone(),
                json!(""),
                json!("222-&--&-"),
            ],
            vec![
                json!("mixed-litmus"),
                json!("terra"),
                json!("Throughput"),
                table[2][3].clone(),
                json!("9000.5-&--&-"),
                json!("8793-&--&-"),
            ],
        ]
    );
}

#[tokio::test]
async fn test_report_type_and_filters() {
    let server = common::create_server().await;

    for testcase in ["mixed-litmus", "vperf-lnx", "lucky6"] {
        server
            .post("/litmus/post/")
            .form(&[
                ("build", BUILD),
                ("testcase", testcase),
                ("env", "terra"),
                ("metric", "Throughput"),
                ("value", "1"),
            ])
            .await
            .assert_status_ok();
    }

    let view: Vec<Vec<Value>> = server
        .get("/litmus/get")
        .add_query_param("type", "view")
        .await
        .json();
    assert_eq!(view.len(), 2);
    assert_eq!(view[1][0], json!("vperf-lnx"));

    let exp: Vec<Vec<Value>> = server
        .get("/litmus/get")
        .add_query_param("type", "exp")
        .await
        .json();
    assert_eq!(exp.len(), 2);
    assert_eq!(exp[1][0], json!("lucky6"));

    let filtered: Vec<Vec<Value>> = server
        .get("/litmus/get")
        .add_query_param("type", "all")
        .add_query_param("testcase", "lucky6")
        .await
        .json();
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[1][0], json!("lucky6"));

    let response = server
        .get("/litmus/get")
        .add_query_param("password", "x")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "unknown filter field: password");
}

#[tokio::test]
async fn test_report_averages_when_enabled() {
    let config = LitmusConfig {
        average_results: true,
        ..LitmusConfig::default()
    };
    let server = common::create_server_with(config, common::FakeGraphStore::Missing).await;

    for value in ["1", "2", "6"] {
        server
            .post("/litmus/post/")
            .form(&[
                ("build", BUILD),
                ("testcase", "read-litmus"),
                ("env", "terra"),
                ("metric", "Latency"),
                ("value", value),
            ])
            .await
            .assert_status_ok();
    }

    let table: Vec<Vec<Value>> = server.get("/litmus/get").await.json();
    assert_eq!(table[1][4], json!(3.0));
}

#[tokio::test]
async fn test_health_and_fallback() {
    let server = common::create_server().await;

    let response = server.get("/api/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "200 ALIVE");

    let response = server.get("/litmus/unknown").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Not Found");
}
