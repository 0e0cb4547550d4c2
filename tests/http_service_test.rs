//! HTTP Remote Service Tests
//!
//! HttpRemoteService をモックサーバーに対して検証

use pdfsum::adapter::config::Config;
use pdfsum::adapter::http::client::HttpRemoteService;
use pdfsum::domain::entities::history_entry::HistoryEntry;
use pdfsum::domain::entities::selected_file::SelectedFile;
use pdfsum::domain::errors::WorkflowError;
use pdfsum::domain::repositories::remote_service::RemoteService;
use serde_json::json;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> HttpRemoteService {
    HttpRemoteService::new(Config::default().with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn upload_sends_multipart_file_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"report.pdf\""))
        .and(body_string_contains("%PDF-1.4 test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "filename": "report.pdf", "summary": "Short summary" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let file = SelectedFile::from_bytes("report.pdf", b"%PDF-1.4 test".to_vec());
    let summary = service(&server).upload(&file).await.unwrap();

    assert_eq!(summary, "Short summary");
}

#[tokio::test]
async fn upload_reads_file_from_disk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/"))
        .and(body_string_contains("on-disk content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut pdf = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    write!(pdf, "on-disk content").unwrap();

    let file = SelectedFile::from_path(pdf.path());
    assert_eq!(service(&server).upload(&file).await, Ok("ok".to_string()));
}

#[tokio::test]
async fn upload_error_uses_message_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/"))
        .respond_with(ResponseTemplate::new(413).set_body_json(json!({
            "message": "File size (60000000 bytes) exceeds maximum allowed size (52428800 bytes)"
        })))
        .mount(&server)
        .await;

    let file = SelectedFile::from_bytes("big.pdf", vec![0; 16]);
    let result = service(&server).upload(&file).await;

    assert_eq!(
        result,
        Err(WorkflowError::Request(
            "File size (60000000 bytes) exceeds maximum allowed size (52428800 bytes)".to_string()
        ))
    );
}

#[tokio::test]
async fn upload_error_with_non_json_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let file = SelectedFile::from_bytes("a.pdf", vec![]);
    let result = service(&server).upload(&file).await;

    assert!(matches!(result, Err(WorkflowError::Transport(_))));
}

#[tokio::test]
async fn history_returns_entries_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "filename": "b.pdf", "summary": "second" },
            { "filename": "a.pdf", "summary": "first" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let entries = service(&server).history().await.unwrap();

    assert_eq!(
        entries,
        vec![HistoryEntry::new("b.pdf"), HistoryEntry::new("a.pdf")]
    );
}

#[tokio::test]
async fn history_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "db down" })))
        .mount(&server)
        .await;

    let result = service(&server).history().await;

    assert_eq!(
        result,
        Err(WorkflowError::Request("Unable to load history.".to_string()))
    );
}

#[tokio::test]
async fn health_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "service": "PDF Summary AI",
            "version": "1.0.0"
        })))
        .mount(&server)
        .await;

    let status = service(&server).health().await.unwrap();
    assert_eq!(status.status, "healthy");
    assert_eq!(status.service, "PDF Summary AI");
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    // 一度バインドして解放したポートには誰も待ち受けていない
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let service = HttpRemoteService::new(Config::default().with_base_url(uri)).unwrap();
    let result = service.history().await;

    match result {
        Err(WorkflowError::Transport(message)) => assert!(!message.is_empty()),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn request_timeout_from_config_is_applied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "summary": "too late" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = Config {
        request_timeout_secs: Some(1),
        ..Config::default().with_base_url(server.uri())
    };
    let file = SelectedFile::from_bytes("slow.pdf", b"%PDF".to_vec());
    let result = HttpRemoteService::new(config).unwrap().upload(&file).await;

    match result {
        Err(WorkflowError::Transport(message)) => {
            assert!(message.contains("timed out"), "{}", message)
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn upload_connection_failure_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let service = HttpRemoteService::new(Config::default().with_base_url(uri)).unwrap();
    let file = SelectedFile::from_bytes("a.pdf", b"%PDF".to_vec());
    let result = service.upload(&file).await;

    match result {
        Err(WorkflowError::Transport(message)) => {
            assert!(message.starts_with("error sending request"), "{}", message)
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn config_file_drives_service_address() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "base_url": "http://localhost:9999" }}"#).unwrap();

    let config = Config::load(file.path().to_str().unwrap()).unwrap();
    let service = HttpRemoteService::new(config).unwrap();

    assert_eq!(
        service.config().endpoint("/upload/"),
        "http://localhost:9999/upload/"
    );
}
