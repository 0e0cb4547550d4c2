//! Terminal View Surface
//!
//! 端末向けのViewSurface実装

use log::warn;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use super::memory::MemoryView;
use super::render::OutputFormat;
use crate::domain::entities::fragment::Fragment;
use crate::domain::entities::selected_file::SelectedFile;
use crate::domain::repositories::view_surface::{Region, ViewSurface};

const BUSY_MESSAGE: &str = "Processing document, please wait...";

/// Terminal view
///
/// Region contents are buffered and written once by [`TerminalView::present`],
/// so only the last write to each region is shown. The busy indicator is
/// written immediately when shown.
pub struct TerminalView<W: Write + Send> {
    state: MemoryView,
    out: Mutex<W>,
    format: OutputFormat,
}

impl TerminalView<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            state: MemoryView::new(),
            out: Mutex::new(out),
            format,
        }
    }

    /// Pre-select the file to upload
    pub fn with_selection(self, file: Option<SelectedFile>) -> Self {
        if let Some(file) = file {
            self.state.select(file);
        }
        self
    }

    /// Write the visible regions to the output
    pub fn present(&self) -> io::Result<()> {
        let mut sections = Vec::new();

        if self.state.is_visible(Region::ResultContainer) {
            let content = self.state.content(Region::ResultContent);
            if !content.is_empty() {
                sections.push(("Result", "result", content));
            }
        }

        let history = self.state.content(Region::HistoryContent);
        if !history.is_empty() {
            sections.push(("Recent documents", "history", history));
        }

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        for (title, id, fragments) in sections {
            writeln!(out, "{}", self.section(title, id, &fragments))?;
        }
        out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn section(&self, title: &str, id: &str, fragments: &[Fragment]) -> String {
        let body = self.format.render(fragments);
        match self.format {
            OutputFormat::Text => format!("== {} ==\n{}", title, body),
            OutputFormat::Html => format!("<div id=\"{}\">{}</div>", id, body),
        }
    }
}

impl<W: Write + Send> ViewSurface for TerminalView<W> {
    fn show(&self, region: Region) {
        self.state.show(region);

        if region == Region::BusyIndicator && self.format == OutputFormat::Text {
            let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = writeln!(out, "{}", BUSY_MESSAGE).and_then(|_| out.flush()) {
                warn!("Failed to write busy indicator: {}", e);
            }
        }
    }

    fn hide(&self, region: Region) {
        self.state.hide(region);
    }

    fn set_content(&self, region: Region, fragments: Vec<Fragment>) {
        self.state.set_content(region, fragments);
    }

    fn selected_file(&self) -> Option<SelectedFile> {
        self.state.selected_file()
    }

    fn clear_selection(&self) {
        self.state.clear_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_present_hidden_result_is_skipped() {
        let view = TerminalView::new(Vec::new(), OutputFormat::Text);
        view.set_content(Region::ResultContent, vec![Fragment::text("summary")]);
        view.present().unwrap();
        assert_eq!(output(view), "");
    }

    #[test]
    fn test_present_result_and_history() {
        let view = TerminalView::new(Vec::new(), OutputFormat::Text);
        view.set_content(Region::ResultContent, vec![Fragment::text("A\nB")]);
        view.show(Region::ResultContainer);
        view.set_content(
            Region::HistoryContent,
            vec![Fragment::Entry("a.pdf".to_string())],
        );
        view.present().unwrap();

        assert_eq!(
            output(view),
            "== Result ==\nA\nB\n== Recent documents ==\n  - a.pdf\n"
        );
    }

    #[test]
    fn test_busy_indicator_written_immediately() {
        let view = TerminalView::new(Vec::new(), OutputFormat::Text);
        view.show(Region::BusyIndicator);
        assert_eq!(output(view), format!("{}\n", BUSY_MESSAGE));
    }

    #[test]
    fn test_html_sections() {
        let view = TerminalView::new(Vec::new(), OutputFormat::Html);
        view.show(Region::BusyIndicator);
        view.set_content(
            Region::HistoryContent,
            vec![Fragment::Placeholder("The history is currently empty.".to_string())],
        );
        view.present().unwrap();

        assert_eq!(
            output(view),
            "<div id=\"history\"><p>The history is currently empty.</p></div>\n"
        );
    }

    #[test]
    fn test_selection_is_cleared() {
        let view = TerminalView::new(Vec::new(), OutputFormat::Text)
            .with_selection(Some(SelectedFile::from_bytes("a.pdf", vec![])));
        assert!(view.selected_file().is_some());
        view.clear_selection();
        assert!(view.selected_file().is_none());
    }
}
