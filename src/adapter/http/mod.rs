//! HTTP Adapter Modules
//!
//! 要約サービスのHTTP APIとの統合

pub mod client;
pub mod models;
