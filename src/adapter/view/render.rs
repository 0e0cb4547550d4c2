//! Fragment Renderers
//!
//! フラグメントをプレーンテキスト/HTMLに変換

use crate::domain::entities::fragment::Fragment;

/// Output format for rendered fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl OutputFormat {
    pub fn render(&self, fragments: &[Fragment]) -> String {
        match self {
            OutputFormat::Text => render_text(fragments),
            OutputFormat::Html => render_html(fragments),
        }
    }
}

/// Render fragments for a terminal, one fragment per line block
pub fn render_text(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Text { lines } => lines.join("\n"),
            Fragment::Error(text) => format!("✗ {}", text),
            Fragment::Entry(name) => format!("  - {}", name),
            Fragment::Placeholder(text) => text.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render fragments as HTML markup
pub fn render_html(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Text { lines } => {
                let body = lines
                    .iter()
                    .map(|line| escape_html(line))
                    .collect::<Vec<_>>()
                    .join("<br>");
                format!("<p>{}</p>", body)
            }
            Fragment::Error(text) => format!("<p class=\"error\">{}</p>", escape_html(text)),
            Fragment::Entry(name) => format!(
                "<div class=\"history-item\"><strong>{}</strong></div>",
                escape_html(name)
            ),
            Fragment::Placeholder(text) => format!("<p>{}</p>", escape_html(text)),
        })
        .collect::<String>()
}

/// Escape text for safe inclusion in HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
