//! Adapter Layer
//!
//! 外部システム（要約サービスのHTTP API、端末）との統合

pub mod config;
pub mod http;
pub mod view;
