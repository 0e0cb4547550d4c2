//! # HistoryEntry Entity
//!
//! アップロード履歴の1件

use serde::{Deserialize, Serialize};

/// 履歴エントリ
///
/// サーバー側で処理済みのファイル。ファイル名以外の識別子は持たない。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub filename: String,
}

impl HistoryEntry {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let entry: HistoryEntry =
            serde_json::from_str(r#"{"filename":"a.pdf","summary":"text"}"#).unwrap();
        assert_eq!(entry, HistoryEntry::new("a.pdf"));
    }

    #[test]
    fn test_deserialize_requires_filename() {
        let result: Result<HistoryEntry, _> = serde_json::from_str(r#"{"summary":"text"}"#);
        assert!(result.is_err());
    }
}
