//! # Submit Upload Use Case
//!
//! ファイルアップロードと要約表示ユースケース

use log::{info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::refresh_history::RefreshHistoryUseCase;
use crate::domain::entities::fragment::Fragment;
use crate::domain::entities::phase::{Phase, PhaseTracker};
use crate::domain::errors::WorkflowError;
use crate::domain::repositories::remote_service::RemoteService;
use crate::domain::repositories::view_surface::{Region, ViewSurface};

/// アップロードユースケース
///
/// 選択ファイルの検証 → 送信 → 結果表示 → 履歴更新を行う。
/// 同時に呼ばれた場合は先行する submit の完了（履歴更新を含む）を待ってから実行する。
pub struct SubmitUploadUseCase<R: RemoteService, V: ViewSurface> {
    remote: Arc<R>,
    view: Arc<V>,
    history: Arc<RefreshHistoryUseCase<R, V>>,
    phase: PhaseTracker,
    gate: Mutex<()>,
}

impl<R: RemoteService, V: ViewSurface> SubmitUploadUseCase<R, V> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `remote` - リモートサービス
    /// * `view` - ビューサーフェス
    /// * `history` - 成功後に呼び出す履歴再取得ユースケース
    pub fn new(
        remote: Arc<R>,
        view: Arc<V>,
        history: Arc<RefreshHistoryUseCase<R, V>>,
    ) -> Self {
        Self {
            remote,
            view,
            history,
            phase: PhaseTracker::new("submit"),
            gate: Mutex::new(()),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.current()
    }

    /// 選択中のファイルをアップロード
    ///
    /// 結果は常にビューに描画され、処理中インジケーターの非表示と
    /// ファイル選択のクリアはどの経路でも1回ずつ実行される。
    ///
    /// # Returns
    ///
    /// 要約テキスト
    ///
    /// # Errors
    ///
    /// 描画済みのエラーをそのまま返す（呼び出し側は終了コードの判定のみに使う）
    pub async fn execute(&self) -> Result<String, WorkflowError> {
        let _guard = self.gate.lock().await;

        let selection = self.view.selected_file().filter(|file| !file.is_blank());
        let Some(file) = selection else {
            info!("Upload rejected: no file selected");
            self.render_error(&WorkflowError::Validation);
            self.complete();
            return Err(WorkflowError::Validation);
        };

        self.phase.transition(Phase::InFlight);
        self.view.show(Region::BusyIndicator);
        self.view.hide(Region::ResultContainer);
        self.view.set_content(Region::ResultContent, Vec::new());

        info!("Uploading {} for summarization", file.name());
        let result = self.remote.upload(&file).await;

        match &result {
            Ok(summary) => {
                info!("Received summary for {} ({} chars)", file.name(), summary.len());
                self.view
                    .set_content(Region::ResultContent, vec![Fragment::text(summary)]);
                self.view.show(Region::ResultContainer);
            }
            Err(e) => {
                warn!("Upload of {} failed: {}", file.name(), e);
                self.render_error(e);
            }
        }

        self.complete();
        self.phase.finish(result.is_ok());

        if result.is_ok() {
            // 失敗時の表示は履歴ユースケース側で済んでいる
            let _ = self.history.execute().await;
        }

        result
    }

    fn render_error(&self, error: &WorkflowError) {
        self.view.set_content(
            Region::ResultContent,
            vec![Fragment::Error(error.submit_display())],
        );
        self.view.show(Region::ResultContainer);
    }

    fn complete(&self) {
        self.view.hide(Region::BusyIndicator);
        self.view.clear_selection();
    }
}
