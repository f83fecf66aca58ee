//! Arguments and logging setup shared by both binaries.

use std::path::PathBuf;

use clap::Args;
use gamedata_core::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DataLayout;

/// Data layout flags. All optional; the defaults match the repository layout.
#[derive(Debug, Clone, Default, Args)]
pub struct LayoutArgs {
    /// Directory containing the JSON documents [default: data]
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Asset root directory [default: <DATA_DIR>/assets]
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// RON file with a DataLayout; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl LayoutArgs {
    /// Build the effective layout from the config file (if any) and flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn resolve(&self) -> Result<DataLayout> {
        let mut layout = match &self.config {
            Some(path) => DataLayout::load(path)?,
            None => DataLayout::default(),
        };
        if let Some(dir) = &self.data_dir {
            layout.data_dir.clone_from(dir);
        }
        if let Some(dir) = &self.assets {
            layout.asset_dir = Some(dir.clone());
        }
        Ok(layout)
    }
}

/// Install the stderr log subscriber. Stdout is reserved for the report.
pub fn init_tracing(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}
