//! # Fragment Value Object
//!
//! ビューに書き込む表示単位

/// 表示フラグメント
///
/// 描画先（端末、HTML等）に依存しない表示内容の表現。
/// 各リージョンの内容は常に `Vec<Fragment>` で丸ごと置き換えられる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// 改行で区切られたテキスト（各要素が1行）
    Text { lines: Vec<String> },
    /// エラー表示
    Error(String),
    /// 履歴の1要素
    Entry(String),
    /// 空状態などの固定メッセージ
    Placeholder(String),
}

impl Fragment {
    /// テキストを改行で分割してフラグメントを作成します。
    ///
    /// `\r\n` と `\n` の両方を行区切りとして扱います。
    ///
    /// # 例
    ///
    /// ```
    /// use pdfsum::domain::entities::fragment::Fragment;
    ///
    /// let fragment = Fragment::text("A\nB");
    /// assert_eq!(
    ///     fragment,
    ///     Fragment::Text { lines: vec!["A".to_string(), "B".to_string()] }
    /// );
    /// ```
    pub fn text(content: &str) -> Self {
        Fragment::Text {
            lines: content.split('\n').map(|line| line.trim_end_matches('\r').to_string()).collect(),
        }
    }

    /// フラグメントの表示テキスト（行は `\n` で連結）
    pub fn plain_text(&self) -> String {
        match self {
            Fragment::Text { lines } => lines.join("\n"),
            Fragment::Error(text) | Fragment::Entry(text) | Fragment::Placeholder(text) => {
                text.clone()
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Fragment::Error(_))
    }
}
