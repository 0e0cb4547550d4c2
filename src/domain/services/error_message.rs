//! # Error Message Service
//!
//! 失敗レスポンスの本文から表示用メッセージを導出するドメインサービス

use serde_json::Value;

use crate::domain::errors::UNKNOWN_ERROR_MESSAGE;

/// エラーメッセージ抽出サービス
pub struct ErrorMessageService;

impl ErrorMessageService {
    /// エラーペイロードからメッセージを取り出します。
    ///
    /// 優先順位は `message` → `detail.message` → `detail`（文字列の場合）→ `error`。
    /// 空文字列や文字列以外の値は読み飛ばし、該当がなければ固定メッセージを返します。
    ///
    /// # 例
    ///
    /// ```
    /// use pdfsum::domain::services::error_message::ErrorMessageService;
    /// use serde_json::json;
    ///
    /// let body = json!({ "detail": { "message": "bad file" } });
    /// assert_eq!(ErrorMessageService::extract(&body), "bad file");
    ///
    /// let body = json!({ "unexpected": true });
    /// assert_eq!(ErrorMessageService::extract(&body), "An unknown error has occurred.");
    /// ```
    pub fn extract(payload: &Value) -> String {
        let detail = payload.get("detail");

        let candidates = [
            payload.get("message"),
            detail.and_then(|d| d.get("message")),
            detail,
            payload.get("error"),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .find(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
    }
}
