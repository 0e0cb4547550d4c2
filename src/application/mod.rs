//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - RemoteService / ViewSurface traitに依存（実装には依存しない）
//! - HTTPや描画の詳細は知らない

pub mod use_cases;
