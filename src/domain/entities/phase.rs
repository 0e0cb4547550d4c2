//! # Phase
//!
//! 操作ごとの状態遷移（Idle → InFlight → Succeeded/Failed → Idle）

use log::debug;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// 操作の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// リクエスト送信中（submitでは Submitting、履歴では Loading に相当）
    InFlight,
    Succeeded,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::InFlight => "in-flight",
            Phase::Succeeded => "succeeded",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// 状態遷移を記録するトラッカー
#[derive(Debug)]
pub struct PhaseTracker {
    label: &'static str,
    current: Mutex<Phase>,
}

impl PhaseTracker {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            current: Mutex::new(Phase::Idle),
        }
    }

    /// 現在の状態
    pub fn current(&self) -> Phase {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 状態を遷移させる
    pub fn transition(&self, next: Phase) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        debug!("{}: {} -> {}", self.label, *current, next);
        *current = next;
    }

    /// 結果に応じて Succeeded/Failed を経由して Idle に戻す
    pub fn finish(&self, succeeded: bool) {
        self.transition(if succeeded {
            Phase::Succeeded
        } else {
            Phase::Failed
        });
        self.transition(Phase::Idle);
    }
}
