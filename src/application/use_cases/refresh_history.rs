//! # Refresh History Use Case
//!
//! 履歴の再取得と表示ユースケース

use log::{info, warn};
use std::sync::Arc;

use crate::domain::entities::fragment::Fragment;
use crate::domain::entities::history_entry::HistoryEntry;
use crate::domain::entities::phase::{Phase, PhaseTracker};
use crate::domain::errors::WorkflowError;
use crate::domain::repositories::remote_service::RemoteService;
use crate::domain::repositories::view_surface::{Region, ViewSurface};

/// 履歴が空の場合の表示
pub const EMPTY_HISTORY_MESSAGE: &str = "The history is currently empty.";

/// 履歴再取得ユースケース
///
/// 毎回サーバーから全件を取得し、履歴リージョンを丸ごと置き換える。
pub struct RefreshHistoryUseCase<R: RemoteService, V: ViewSurface> {
    remote: Arc<R>,
    view: Arc<V>,
    phase: PhaseTracker,
}

impl<R: RemoteService, V: ViewSurface> RefreshHistoryUseCase<R, V> {
    /// 新しいユースケースを作成
    pub fn new(remote: Arc<R>, view: Arc<V>) -> Self {
        Self {
            remote,
            view,
            phase: PhaseTracker::new("history"),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.current()
    }

    /// 履歴を取得して表示
    ///
    /// # Returns
    ///
    /// 取得した履歴エントリ（エラー時も表示は済んでいる）
    pub async fn execute(&self) -> Result<Vec<HistoryEntry>, WorkflowError> {
        self.phase.transition(Phase::InFlight);

        let result = self.remote.history().await;

        match &result {
            Ok(entries) => {
                info!("Loaded {} history entries", entries.len());
                self.view
                    .set_content(Region::HistoryContent, Self::render(entries));
            }
            Err(e) => {
                warn!("Failed to load history: {}", e);
                self.view
                    .set_content(Region::HistoryContent, vec![Fragment::Error(e.to_string())]);
            }
        }

        self.phase.finish(result.is_ok());
        result
    }

    /// 履歴エントリを表示フラグメントに変換（サーバーの順序を維持）
    pub fn render(entries: &[HistoryEntry]) -> Vec<Fragment> {
        if entries.is_empty() {
            return vec![Fragment::Placeholder(EMPTY_HISTORY_MESSAGE.to_string())];
        }

        entries
            .iter()
            .map(|entry| Fragment::Entry(entry.filename.clone()))
            .collect()
    }
}
