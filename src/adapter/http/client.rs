//! HTTP Remote Service
//!
//! RemoteServiceのreqwest実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

use super::models::{
    parse_health_response, parse_history_response, parse_upload_response, HEALTH_PATH,
    HISTORY_PATH, UPLOAD_PATH,
};
use crate::adapter::config::Config;
use crate::domain::entities::history_entry::HistoryEntry;
use crate::domain::entities::selected_file::{FileSource, SelectedFile};
use crate::domain::errors::WorkflowError;
use crate::domain::repositories::remote_service::{HealthStatus, RemoteService};

/// Convert an error and its sources into one message
pub fn error_chain_to_string(e: &(dyn std::error::Error + 'static)) -> String {
    let mut messages = vec![e.to_string()];
    let mut source = e.source();
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }
    messages.join(" | ")
}

fn transport_error(e: reqwest::Error) -> WorkflowError {
    WorkflowError::transport(error_chain_to_string(&e))
}

/// Remote service reached over HTTP
pub struct HttpRemoteService {
    client: Client,
    config: Config,
}

impl HttpRemoteService {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn read_file(file: &SelectedFile) -> Result<Vec<u8>, WorkflowError> {
        match file.source() {
            FileSource::Path(path) => tokio::fs::read(path).await.map_err(|e| {
                WorkflowError::transport(format!("Failed to read {}: {}", path.display(), e))
            }),
            FileSource::Memory(bytes) => Ok(bytes.clone()),
        }
    }

    async fn read_body(response: Response) -> Result<(bool, Vec<u8>), WorkflowError> {
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;
        debug!("Response status {} ({} bytes)", status, body.len());
        Ok((status.is_success(), body.to_vec()))
    }

    async fn get(&self, path: &str) -> Result<(bool, Vec<u8>), WorkflowError> {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        Self::read_body(response).await
    }
}

#[async_trait]
impl RemoteService for HttpRemoteService {
    async fn upload(&self, file: &SelectedFile) -> Result<String, WorkflowError> {
        let bytes = Self::read_file(file).await?;
        let part = Part::bytes(bytes)
            .file_name(file.name().to_string())
            .mime_str(file.mime_type())
            .map_err(transport_error)?;
        let form = Form::new().part("file", part);

        let url = self.config.endpoint(UPLOAD_PATH);
        debug!("POST {} ({})", url, file.name());
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let (success, body) = Self::read_body(response).await?;
        parse_upload_response(success, &body)
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, WorkflowError> {
        let (success, body) = self.get(HISTORY_PATH).await?;
        parse_history_response(success, &body)
    }

    async fn health(&self) -> Result<HealthStatus, WorkflowError> {
        let (success, body) = self.get(HEALTH_PATH).await?;
        parse_health_response(success, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let config = Config::default().with_base_url("ftp://example.com");
        assert!(HttpRemoteService::new(config).is_err());
    }

    #[test]
    fn test_error_chain_to_string() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
        let error = anyhow::Error::from(inner).context("error sending request");
        let message = error_chain_to_string(&*error);

        assert!(message.starts_with("error sending request"));
        assert!(message.contains("Connection refused"));
    }

    #[tokio::test]
    async fn test_read_file_from_memory() {
        let file = SelectedFile::from_bytes("a.pdf", b"%PDF".to_vec());
        assert_eq!(HttpRemoteService::read_file(&file).await.unwrap(), b"%PDF");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_transport_error() {
        let file = SelectedFile::from_path("/nonexistent/pdfsum/report.pdf");
        let result = HttpRemoteService::read_file(&file).await;
        match result {
            Err(WorkflowError::Transport(message)) => {
                assert!(message.contains("/nonexistent/pdfsum/report.pdf"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
