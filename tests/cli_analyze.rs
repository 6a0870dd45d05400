use base64::Engine;
use mockito::{Matcher, Server};
use reddit_analyzer::api::config::BASE_URL_ENV;
use reddit_analyzer::cli::commands::ReportFormat;
use reddit_analyzer::cli::handlers::{handle_analyze_command, AnalyzeOptions};
use reddit_analyzer::ApiError;
use serde_json::{json, Value};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn options(base_url: String, subreddit: &str) -> AnalyzeOptions {
    AnalyzeOptions {
        subreddit: subreddit.to_string(),
        top_n: 25,
        temperature: None,
        max_tokens: None,
        base_url: Some(base_url),
        format: ReportFormat::Json,
        output: None,
        chart_out: None,
        verbose: false,
    }
}

#[tokio::test]
async fn test_analyze_writes_response_and_chart() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();

    let png = [0x89u8, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    let body = json!({
        "summary": "Owners love the camera but dislike the battery.",
        "sentiment_graph": base64::engine::general_purpose::STANDARD.encode(png)
    });

    let mock = server
        .mock("POST", "/analyze")
        .match_body(Matcher::Json(json!({
            "subreddit": "Iphone",
            "top_n": 25,
            "temperature": 0.25,
            "max_tokens": 150
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let output = dir.path().join("response.json");
    let chart = dir.path().join("chart.png");
    let mut opts = options(server.url(), "Iphone");
    opts.temperature = Some(0.25);
    opts.output = Some(output.clone());
    opts.chart_out = Some(chart.clone());

    let response = handle_analyze_command(opts).await.unwrap();
    assert_eq!(response.as_value(), &body);

    let saved: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(saved, body);
    assert_eq!(fs::read(&chart).unwrap(), png);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_analyze_without_chart_skips_chart_file() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();

    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"summary": "Nothing to see.", "sentiment_graph": null}).to_string())
        .create_async()
        .await;

    let chart = dir.path().join("chart.png");
    let mut opts = options(server.url(), "emptysub");
    opts.format = ReportFormat::Terminal;
    opts.chart_out = Some(chart.clone());

    let response = handle_analyze_command(opts).await.unwrap();
    assert_eq!(response.summary(), Some("Nothing to see."));
    assert!(!chart.exists());
}

#[tokio::test]
async fn test_analyze_backend_failure_is_reported() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/analyze")
        .with_status(400)
        .with_body(json!({"detail": "Invalid subreddit name or URL"}).to_string())
        .create_async()
        .await;

    let result = handle_analyze_command(options(server.url(), "two words")).await;

    let error = result.unwrap_err();
    assert!(error.to_string().contains("Analysis of r/two words failed"));
}

#[tokio::test]
async fn test_analyze_rejects_invalid_base_url() {
    let result = handle_analyze_command(options("ftp://example.com".to_string(), "python")).await;
    assert!(result.is_err());
}

#[tokio::test]
#[serial]
async fn test_analyze_without_base_url_is_config_error() {
    std::env::remove_var(BASE_URL_ENV);

    let mut opts = options(String::new(), "python");
    opts.base_url = None;

    let error = handle_analyze_command(opts).await.unwrap_err();
    assert!(matches!(error.downcast_ref::<ApiError>(), Some(ApiError::Config(_))));
}
