//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **SelectedFile**: アップロード対象として選択されたファイル
//! - **HistoryEntry**: アップロード履歴の1件
//! - **Fragment**: ビューに書き込む表示単位
//! - **Phase**: 操作の状態遷移

pub mod fragment;
pub mod history_entry;
pub mod phase;
pub mod selected_file;
