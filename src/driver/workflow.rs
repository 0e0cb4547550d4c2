//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション（依存性注入とコマンドの実行）

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::http::client::HttpRemoteService;
use crate::application::use_cases::refresh_history::RefreshHistoryUseCase;
use crate::application::use_cases::submit_upload::SubmitUploadUseCase;
use crate::domain::entities::fragment::Fragment;
use crate::domain::entities::history_entry::HistoryEntry;
use crate::domain::entities::phase::Phase;
use crate::domain::errors::WorkflowError;
use crate::domain::repositories::remote_service::{HealthStatus, RemoteService};
use crate::domain::repositories::view_surface::{Region, ViewSurface};

use super::cli::Command;

/// コマンドの実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed,
}

impl<T> From<&Result<T, WorkflowError>> for Outcome {
    fn from(result: &Result<T, WorkflowError>) -> Self {
        if result.is_ok() {
            Outcome::Completed
        } else {
            Outcome::Failed
        }
    }
}

/// Upload Workflow
///
/// ファイル選択 → 送信 → 結果表示 → 履歴更新の一連の流れを管理する。
/// エラーは全てビューに描画され、戻り値は終了コードの判定に使う。
pub struct UploadWorkflow<R: RemoteService, V: ViewSurface> {
    remote: Arc<R>,
    view: Arc<V>,
    submit_use_case: SubmitUploadUseCase<R, V>,
    history_use_case: Arc<RefreshHistoryUseCase<R, V>>,
}

impl<V: ViewSurface> UploadWorkflow<HttpRemoteService, V> {
    /// HTTPクライアントを組み立ててワークフローを作成
    pub fn new(config: Config, view: Arc<V>) -> Result<Self> {
        info!("Using summarization service at {}", config.base_url);
        let remote = Arc::new(HttpRemoteService::new(config)?);
        Ok(Self::with_service(remote, view))
    }
}

impl<R: RemoteService, V: ViewSurface> UploadWorkflow<R, V> {
    /// 任意のリモートサービスでワークフローを作成
    pub fn with_service(remote: Arc<R>, view: Arc<V>) -> Self {
        let history_use_case = Arc::new(RefreshHistoryUseCase::new(remote.clone(), view.clone()));
        let submit_use_case =
            SubmitUploadUseCase::new(remote.clone(), view.clone(), history_use_case.clone());

        Self {
            remote,
            view,
            submit_use_case,
            history_use_case,
        }
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    /// 初期化時の履歴読み込み
    pub async fn start(&self) -> Result<Vec<HistoryEntry>, WorkflowError> {
        self.refresh_history().await
    }

    pub async fn submit(&self) -> Result<String, WorkflowError> {
        self.submit_use_case.execute().await
    }

    pub async fn refresh_history(&self) -> Result<Vec<HistoryEntry>, WorkflowError> {
        self.history_use_case.execute().await
    }

    /// サービスの稼働状態を取得して結果領域に表示
    pub async fn check_health(&self) -> Result<HealthStatus, WorkflowError> {
        let result = self.remote.health().await;

        let fragment = match &result {
            Ok(status) => Fragment::Text {
                lines: vec![
                    format!("Service: {}", status.service),
                    format!("Status: {}", status.status),
                    format!("Version: {}", status.version),
                ],
            },
            Err(e) => {
                warn!("Health check failed: {}", e);
                Fragment::Error(e.submit_display())
            }
        };

        self.view.set_content(Region::ResultContent, vec![fragment]);
        self.view.show(Region::ResultContainer);
        result
    }

    pub fn submit_phase(&self) -> Phase {
        self.submit_use_case.phase()
    }

    pub fn history_phase(&self) -> Phase {
        self.history_use_case.phase()
    }

    /// CLIコマンドを実行
    pub async fn execute(&self, command: &Command) -> Outcome {
        match command {
            Command::Upload { .. } => {
                // 初期表示の履歴。失敗しても送信は続ける
                let _ = self.start().await;
                Outcome::from(&self.submit().await)
            }
            Command::History => Outcome::from(&self.refresh_history().await),
            Command::Health => Outcome::from(&self.check_health().await),
        }
    }
}
