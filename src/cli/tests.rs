//! Tests for the CLI module

use super::*;
use crate::config::{ApiConfig, Mode, RunParameters};
use crate::error::{Error, ErrorKind};
use crate::http::HttpClient;
use crate::pagination::{Paginator, SilentProgress};
use clap::Parser;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Argument Parsing Tests
// ============================================================================

#[test]
fn test_parse_long_flags() {
    let cli = Cli::try_parse_from([
        "group-export",
        "--accessToken",
        "tok",
        "--groupId",
        "42",
        "--file",
        "members.csv",
    ])
    .unwrap();

    assert_eq!(cli.access_token.as_deref(), Some("tok"));
    assert_eq!(cli.group_id.as_deref(), Some("42"));
    assert_eq!(cli.file, Some(PathBuf::from("members.csv")));
    assert!(!cli.list);
    assert_eq!(cli.base_url, "https://graph.facebook.com");
    assert_eq!(cli.api_version, "v2.8");
}

#[test]
fn test_parse_short_flags() {
    let cli = Cli::try_parse_from(["group-export", "-a", "tok", "-l", "-v"]).unwrap();
    assert_eq!(cli.access_token.as_deref(), Some("tok"));
    assert!(cli.list);
    assert!(cli.verbose);
    assert!(cli.file.is_none());
}

#[test]
fn test_run_parameters_from_cli() {
    let cli = Cli::try_parse_from(["group-export", "-a", "tok", "-g", "42"]).unwrap();
    let params = cli.run_parameters().unwrap();
    assert_eq!(
        params.mode,
        Mode::Export {
            group_id: "42".to_string()
        }
    );

    let cli = Cli::try_parse_from(["group-export", "-a", "tok"]).unwrap();
    assert_eq!(cli.run_parameters().unwrap_err().kind(), ErrorKind::Usage);

    let cli = Cli::try_parse_from(["group-export", "--list"]).unwrap();
    assert_eq!(cli.run_parameters().unwrap_err().kind(), ErrorKind::Usage);
}

#[test]
fn test_api_config_from_cli() {
    let cli = Cli::try_parse_from([
        "group-export",
        "--base-url",
        "http://localhost:1234",
        "--api-version",
        "v19.0",
    ])
    .unwrap();
    let api = cli.api_config();
    assert_eq!(api.base_url, "http://localhost:1234");
    assert_eq!(api.api_version, "v19.0");
}

#[tokio::test]
async fn test_usage_error_before_network() {
    let cli = Cli::try_parse_from(["group-export", "--base-url", "http://127.0.0.1:9"]).unwrap();
    let err = Runner::new(cli).run().await.unwrap_err();
    assert!(matches!(err, Error::Usage { .. }));
    assert_eq!(err.exit_code(), 2);
}

// ============================================================================
// Execute Tests
// ============================================================================

async fn mount_two_page_members(server: &MockServer) {
    let next = format!(
        "{}/v2.8/42/members?access_token=tok&after=PAGE2",
        server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/v2.8/42/members"))
        .and(query_param("after", "PAGE2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "2", "administrator": false}]
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2.8/42/members"))
        .and(query_param(
            "fields",
            "id,first_name,middle_name,last_name,administrator",
        ))
        .and(query_param("access_token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "1", "administrator": true}],
            "paging": {"next": next}
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn export_params(output: Option<PathBuf>) -> RunParameters {
    RunParameters::resolve(Some("tok"), false, Some("42"), output).unwrap()
}

fn paginator() -> Paginator<HttpClient, SilentProgress> {
    Paginator::new(HttpClient::new().unwrap(), SilentProgress)
}

#[tokio::test]
async fn test_execute_export_and_display() {
    let mock_server = MockServer::start().await;
    mount_two_page_members(&mock_server).await;

    let dir = tempdir().unwrap();
    let file = dir.path().join("members.csv");
    let api = ApiConfig::builder().base_url(mock_server.uri()).build();

    let mut out = Vec::new();
    let report = execute(
        &export_params(Some(file.clone())),
        &api,
        &mut paginator(),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(report.pages, 2);
    assert_eq!(report.rows, 2);
    assert_eq!(report.exported.as_ref().unwrap().rows, 2);
    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "id,administrator\n1,True\n2,False\n"
    );

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("All Data written to"));
    assert!(text.contains("True"));
    assert!(text.contains("False"));
}

#[tokio::test]
async fn test_execute_display_only() {
    let mock_server = MockServer::start().await;
    mount_two_page_members(&mock_server).await;

    let api = ApiConfig::builder().base_url(mock_server.uri()).build();
    let mut out = Vec::new();
    let report = execute(&export_params(None), &api, &mut paginator(), &mut out)
        .await
        .unwrap();

    assert!(report.exported.is_none());
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("All Data written to"));
    assert!(text.contains("administrator"));
}

#[tokio::test]
async fn test_execute_export_failure_still_displays() {
    let mock_server = MockServer::start().await;
    mount_two_page_members(&mock_server).await;

    let dir = tempdir().unwrap();
    let file = dir.path().join("missing").join("members.csv");
    let api = ApiConfig::builder().base_url(mock_server.uri()).build();

    let mut out = Vec::new();
    let err = execute(&export_params(Some(file.clone())), &api, &mut paginator(), &mut out)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Persistence);
    assert!(!file.exists());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("True"));
    assert!(!text.contains("All Data written to"));
}

#[tokio::test]
async fn test_execute_transport_failure_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.8/me/groups"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"message": "Error validating access token", "code": 190}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let file = dir.path().join("groups.csv");
    let params = RunParameters::resolve(Some("tok"), true, None, Some(file.clone())).unwrap();
    let api = ApiConfig::builder().base_url(mock_server.uri()).build();

    let mut out = Vec::new();
    let err = execute(&params, &api, &mut paginator(), &mut out)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.to_string(), "Error validating access token");
    assert_eq!(err.exit_code(), 3);
    assert!(!file.exists());
}

// ============================================================================
// Failure Reporting Tests
// ============================================================================

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_execute_terminal_failure_is_output_error() {
    let api = ApiConfig::builder().base_url("http://127.0.0.1:9").build();
    let err = execute(&export_params(None), &api, &mut paginator(), &mut ClosedPipe)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Output);
    assert_ne!(err.exit_code(), 4);
}

#[test]
fn test_report_error_writes_marker_and_message() {
    colored::control::set_override(false);
    let err = Error::api("Error validating access token", Some(190));

    let mut out = Vec::new();
    report_error(&err, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Error: Error validating access token\n"
    );
}
