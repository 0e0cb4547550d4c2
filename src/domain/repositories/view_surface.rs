//! # View Surface Trait
//!
//! ワークフローが操作する表示領域とファイル選択コントロールを抽象化

use crate::domain::entities::fragment::Fragment;
use crate::domain::entities::selected_file::SelectedFile;

/// 表示リージョン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// 処理中インジケーター
    BusyIndicator,
    /// 結果コンテナ（表示/非表示を切り替える）
    ResultContainer,
    /// 結果の内容
    ResultContent,
    /// 履歴の内容
    HistoryContent,
}

/// ビューサーフェス
///
/// 内容の書き込みは常に全置換で行い、部分更新はしない。
pub trait ViewSurface: Send + Sync {
    fn show(&self, region: Region);

    fn hide(&self, region: Region);

    /// リージョンの内容を置き換える
    fn set_content(&self, region: Region, fragments: Vec<Fragment>);

    /// 現在選択されているファイル（未選択なら `None`）
    fn selected_file(&self) -> Option<SelectedFile>;

    /// ファイル選択をクリア
    fn clear_selection(&self);
}
