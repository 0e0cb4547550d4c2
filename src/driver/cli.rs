//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::adapter::view::render::OutputFormat;
use crate::domain::entities::selected_file::SelectedFile;

/// PDFを要約サービスにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "pdfsum")]
#[command(about = "Upload PDF documents to a summarization service", long_about = None)]
pub struct Args {
    /// Config file path (defaults are used when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the service base URL from the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Upload a PDF and show its summary
    Upload {
        /// PDF file to upload
        file: Option<String>,
    },
    /// Show recently processed documents
    History,
    /// Check that the service is running
    Health,
}

impl Args {
    /// アップロード対象として選択されたファイル（`~` を展開）
    pub fn selected_file(&self) -> Option<SelectedFile> {
        match &self.command {
            Command::Upload { file: Some(path) } if !path.trim().is_empty() => {
                Some(SelectedFile::from_path(&*shellexpand::tilde(path)))
            }
            _ => None,
        }
    }
}
