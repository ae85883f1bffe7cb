//! End-to-end tests for the analysis pipeline and the HTTP surface.
//!
//! The upstream page is served by a local mock so fetch latency stays well
//! under the scoring thresholds.

use std::sync::Arc;

use seoscope::analyzer::report::format_bytes;
use seoscope::domain::TagStatus;
use seoscope::server::{router, AppState};
use seoscope::service::AnalysisService;
use url::Url;

fn fixture_page() -> String {
    let title = "A".repeat(45);
    let description = "B".repeat(140);
    format!(
        r#"<html><head>
        <title>{title}</title>
        <meta name="description" content="{description}">
        <meta property="og:title" content="T">
        <meta property="og:description" content="D">
        <meta property="og:image" content="http://x/i.png">
        <meta name="twitter:card" content="summary">
        </head><body><p>hello</p></body></html>"#
    )
}

#[tokio::test]
async fn analyzes_mocked_page() {
    let mut server = mockito::Server::new_async().await;
    let html = fixture_page();
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(&html)
        .create_async()
        .await;

    let service = AnalysisService::new().expect("client should build");
    let url = Url::parse(&server.url()).unwrap();
    let report = service.analyze(&url).await.expect("analysis should succeed");

    mock.assert_async().await;

    assert_eq!(report.total_checks, 12);
    assert_eq!(report.found_tags, 8);
    assert_eq!(report.warning_tags, 4);
    assert_eq!(report.missing_tags, 0);
    assert_eq!(report.score, 83);
    assert_eq!(report.page_size, format_bytes(html.len() as u64));
    assert_eq!(report.title.as_deref(), Some("A".repeat(45).as_str()));
    assert_eq!(report.twitter_card.as_deref(), Some("summary"));
    assert!(report.og_site_name.is_none());

    for tag in &report.tags {
        assert_eq!(
            tag.recommendation.is_some(),
            tag.status != TagStatus::Good,
            "{}",
            tag.name
        );
    }
}

#[tokio::test]
async fn upstream_error_surfaces_as_fetch_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/")
        .with_status(404)
        .create_async()
        .await;

    let service = AnalysisService::new().expect("client should build");
    let url = Url::parse(&server.url()).unwrap();
    let err = service.analyze(&url).await.expect_err("404 should fail");

    assert!(err.to_string().contains("Failed to fetch website"));
    assert!(err.to_string().contains("404"));
}

async fn spawn_app() -> String {
    let service = AnalysisService::new().expect("client should build");
    let app = router(AppState {
        service: Arc::new(service),
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn api_round_trip_returns_report_json() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(fixture_page())
        .create_async()
        .await;

    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/analyze", base))
        .json(&serde_json::json!({ "url": upstream.url() }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["totalChecks"], 12);
    assert_eq!(body["score"], 83);
    assert_eq!(body["tags"].as_array().unwrap().len(), 12);
    assert_eq!(body["categoryScores"]["content"], 10.0);
    assert!(body["pageSize"].is_string());
}

#[tokio::test]
async fn api_rejects_invalid_url() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/analyze", base))
        .json(&serde_json::json!({ "url": "not a url" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid URL"));
}

#[tokio::test]
async fn api_reports_upstream_failure_as_bad_request() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("GET", "/")
        .with_status(500)
        .create_async()
        .await;

    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/analyze", base))
        .json(&serde_json::json!({ "url": upstream.url() }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Failed to fetch website"));
}
