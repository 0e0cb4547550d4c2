//! # Workflow Errors
//!
//! ワークフローのエラー分類

use thiserror::Error;

/// ファイル未選択時のメッセージ
pub const VALIDATION_MESSAGE: &str = "Please select a file.";

/// メッセージを特定できない場合のフォールバック
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error has occurred.";

/// ワークフローのエラー
///
/// 全てのエラーはワークフロー境界で捕捉され、表示メッセージに変換される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// ファイルが選択されていない（リモートサービスには到達しない）
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    /// 成功範囲外のHTTPステータス
    #[error("{0}")]
    Request(String),

    /// ネットワーク障害、不正なJSONなど
    #[error("{0}")]
    Transport(String),
}

impl WorkflowError {
    /// Transport エラーを作成（空メッセージはフォールバックに置き換え）
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            WorkflowError::Transport(UNKNOWN_ERROR_MESSAGE.to_string())
        } else {
            WorkflowError::Transport(message)
        }
    }

    /// submit の結果領域に表示するテキスト
    ///
    /// バリデーションエラーはそのまま、それ以外は `Error: ` を前置する。
    pub fn submit_display(&self) -> String {
        match self {
            WorkflowError::Validation => VALIDATION_MESSAGE.to_string(),
            other => format!("Error: {}", other),
        }
    }
}
