//! pdfsum - PDF Summary Client
//!
//! PDFをアップロードして要約を表示

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use pdfsum::adapter::config::Config;
use pdfsum::adapter::view::terminal::TerminalView;
use pdfsum::driver::{Args, Outcome, UploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url.clone());
    }

    let view = Arc::new(TerminalView::stdout(args.format).with_selection(args.selected_file()));

    // Create workflow with injected dependencies
    let workflow = UploadWorkflow::new(config, view.clone())?;

    let outcome = workflow.execute(&args.command).await;
    view.present().context("Failed to write output")?;

    if outcome == Outcome::Failed {
        std::process::exit(1);
    }

    Ok(())
}
