//! In-Memory View Surface
//!
//! 描画先を持たないViewSurface実装（リージョンの状態と操作履歴を保持）

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::fragment::Fragment;
use crate::domain::entities::selected_file::SelectedFile;
use crate::domain::repositories::view_surface::{Region, ViewSurface};

#[derive(Debug, Default)]
struct ViewState {
    visible: HashSet<Region>,
    contents: HashMap<Region, Vec<Fragment>>,
    selection: Option<SelectedFile>,
    hide_counts: HashMap<Region, usize>,
    clear_count: usize,
    events: Vec<String>,
}

/// メモリ上のビュー
///
/// 初期状態では全リージョンが非表示・空。
#[derive(Debug, Default)]
pub struct MemoryView {
    state: Mutex<ViewState>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルが選択された状態で作成
    pub fn with_selection(file: SelectedFile) -> Self {
        let view = Self::new();
        view.select(file);
        view
    }

    /// ファイルを選択する
    pub fn select(&self, file: SelectedFile) {
        self.lock().selection = Some(file);
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.lock().visible.contains(&region)
    }

    /// リージョンの現在の内容
    pub fn content(&self, region: Region) -> Vec<Fragment> {
        self.lock().contents.get(&region).cloned().unwrap_or_default()
    }

    /// `hide` が呼ばれた回数
    pub fn hide_count(&self, region: Region) -> usize {
        self.lock().hide_counts.get(&region).copied().unwrap_or(0)
    }

    /// `clear_selection` が呼ばれた回数
    pub fn clear_count(&self) -> usize {
        self.lock().clear_count
    }

    /// 操作の記録（例: `"show BusyIndicator"`）
    pub fn events(&self) -> Vec<String> {
        self.lock().events.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ViewSurface for MemoryView {
    fn show(&self, region: Region) {
        let mut state = self.lock();
        state.visible.insert(region);
        state.events.push(format!("show {:?}", region));
    }

    fn hide(&self, region: Region) {
        let mut state = self.lock();
        state.visible.remove(&region);
        *state.hide_counts.entry(region).or_insert(0) += 1;
        state.events.push(format!("hide {:?}", region));
    }

    fn set_content(&self, region: Region, fragments: Vec<Fragment>) {
        let mut state = self.lock();
        state.contents.insert(region, fragments);
        state.events.push(format!("set {:?}", region));
    }

    fn selected_file(&self) -> Option<SelectedFile> {
        self.lock().selection.clone()
    }

    fn clear_selection(&self) {
        let mut state = self.lock();
        state.selection = None;
        state.clear_count += 1;
        state.events.push("clear selection".to_string());
    }
}
