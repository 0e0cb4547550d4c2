//! HTTP Response Models
//!
//! レスポンス本文の解釈（ステータス判定とJSON解析）

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::history_entry::HistoryEntry;
use crate::domain::errors::WorkflowError;
use crate::domain::repositories::remote_service::HealthStatus;
use crate::domain::services::error_message::ErrorMessageService;

pub const UPLOAD_PATH: &str = "/upload/";
pub const HISTORY_PATH: &str = "/history/";
pub const HEALTH_PATH: &str = "/health";

/// History endpoint failure message (the body is not inspected)
pub const HISTORY_UNAVAILABLE_MESSAGE: &str = "Unable to load history.";

pub const MISSING_SUMMARY_MESSAGE: &str = "Response did not include a summary.";

/// One element of the `/history/` response
#[derive(Debug, Deserialize)]
pub struct HistoryItemResponse {
    pub filename: String,
}

impl From<HistoryItemResponse> for HistoryEntry {
    fn from(item: HistoryItemResponse) -> Self {
        HistoryEntry::new(item.filename)
    }
}

fn parse_json(body: &[u8]) -> Result<Value, WorkflowError> {
    serde_json::from_slice(body)
        .map_err(|e| WorkflowError::transport(format!("Invalid JSON response: {}", e)))
}

/// Interpret an `/upload/` response.
///
/// The body is parsed before the status is checked, so a non-JSON body is a
/// transport error whatever the status.
pub fn parse_upload_response(success: bool, body: &[u8]) -> Result<String, WorkflowError> {
    let payload = parse_json(body)?;

    if !success {
        return Err(WorkflowError::Request(ErrorMessageService::extract(
            &payload,
        )));
    }

    payload
        .get("summary")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| WorkflowError::transport(MISSING_SUMMARY_MESSAGE))
}

/// Interpret a `/history/` response
pub fn parse_history_response(
    success: bool,
    body: &[u8],
) -> Result<Vec<HistoryEntry>, WorkflowError> {
    if !success {
        return Err(WorkflowError::Request(
            HISTORY_UNAVAILABLE_MESSAGE.to_string(),
        ));
    }

    let items: Vec<HistoryItemResponse> = serde_json::from_slice(body)
        .map_err(|e| WorkflowError::transport(format!("Invalid JSON response: {}", e)))?;

    Ok(items.into_iter().map(HistoryEntry::from).collect())
}

/// Interpret a `/health` response
pub fn parse_health_response(success: bool, body: &[u8]) -> Result<HealthStatus, WorkflowError> {
    let payload = parse_json(body)?;

    if !success {
        return Err(WorkflowError::Request(ErrorMessageService::extract(
            &payload,
        )));
    }

    serde_json::from_value(payload)
        .map_err(|e| WorkflowError::transport(format!("Invalid health response: {}", e)))
}
