//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **SubmitUploadUseCase**: ファイルのアップロードと要約表示
//! - **RefreshHistoryUseCase**: 履歴の再取得と表示

pub mod refresh_history;
pub mod submit_upload;
