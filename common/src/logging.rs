//! Common logging initializer
//!
//! The TUI owns the terminal so in that mode everything goes into an append-only log file.
//! Non-interactive commands can also get a hierarchical view on stderr.
//!

use std::path::{Path, PathBuf};

use eyre::{eyre, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

/// Default filter when `RUST_LOG` is not set
const DEF_FILTER: &str = "info";

#[tracing::instrument]
pub fn init_logging(name: &'static str, use_tree: bool, use_file: Option<PathBuf>) -> Result<()> {
    // Load filters from environment
    //
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEF_FILTER));

    // Do we want hierarchical output?
    //
    let tree = if use_tree {
        Some(
            HierarchicalLayer::new(2)
                .with_ansi(true)
                .with_span_retrace(true)
                .with_span_modes(true)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
    } else {
        None
    };

    // Log to file?
    //
    let file = match use_file {
        Some(path) => {
            let (dir, fname) = split_path(&path)?;

            // Basic append-only file for all traces, never rotated.
            //
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(fname.to_string_lossy())
                .build(&dir)
                .map_err(|e| eyre!("can not open log file {path:?}: {e}"))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(file_appender),
            )
        }
        None => None,
    };

    // Combine filters & exporters
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(file)
        .try_init()
        .map_err(|e| eyre!("logging already initialised for {name}: {e}"))?;

    Ok(())
}

/// Split a log file path into its directory and filename, the current directory being the
/// default.
///
fn split_path(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let fname = path
        .file_name()
        .ok_or_else(|| eyre!("invalid log file {path:?}"))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(fname)))
}
