//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **ErrorMessageService**: 失敗レスポンスからの表示メッセージ導出

pub mod error_message;
