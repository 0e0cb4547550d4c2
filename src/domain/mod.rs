//! # Domain Layer
//!
//! このモジュールはワークフローの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - I/Oを持たない
//! - HTTPや描画先について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: エンティティ（SelectedFile, HistoryEntry, Fragmentなど）
//! - **errors**: エラー分類（WorkflowError）
//! - **repositories**: 外部コラボレーターのtrait（RemoteService, ViewSurface）
//! - **services**: Domain Service（エラーメッセージ導出）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
