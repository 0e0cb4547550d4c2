//! # Remote Service Trait
//!
//! 要約サービス（HTTP API）へのアクセスを抽象化

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::history_entry::HistoryEntry;
use crate::domain::entities::selected_file::SelectedFile;
use crate::domain::errors::WorkflowError;

/// サービスのヘルスチェック結果
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

/// リモートサービス
///
/// 各メソッドは1回の呼び出しにつき1回だけリクエストを発行する（リトライなし）。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RemoteService: Send + Sync {
    /// ファイルをアップロードして要約を取得
    ///
    /// # Errors
    ///
    /// - 成功範囲外のステータスの場合は `WorkflowError::Request`
    /// - ネットワーク障害やJSONの解析失敗の場合は `WorkflowError::Transport`
    async fn upload(&self, file: &SelectedFile) -> Result<String, WorkflowError>;

    /// 処理履歴をサーバーの順序のまま取得
    async fn history(&self) -> Result<Vec<HistoryEntry>, WorkflowError>;

    /// サービスの稼働状態を取得
    async fn health(&self) -> Result<HealthStatus, WorkflowError>;
}
