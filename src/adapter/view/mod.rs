//! View Adapters
//!
//! ViewSurfaceの実装と描画

pub mod memory;
pub mod render;
pub mod terminal;
