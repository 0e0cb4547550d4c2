//! # pdfsum
//!
//! PDFを要約サービスにアップロードし、要約と処理履歴を表示するクライアント
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、エラー分類、外部コラボレーターのtrait（I/Oなし）
//! - **Application層**: アップロードと履歴更新のユースケース
//! - **Adapter層**: 外部システムとの統合（HTTP API, 端末表示, 設定ファイル）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
