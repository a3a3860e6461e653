// src/lib.rs
//! Command-line front end for `describe_dataset_engine`.

pub mod args;
pub mod config;
pub mod error;
pub mod parsers;
pub mod presentation;
pub mod value_enum;

use crate::config::AppConfig;
use crate::error::Result;
use log::LevelFilter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the stderr logger. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Describe `config.root` and write the report where `config` says.
///
/// # Errors
///
/// Fails if the root is not a readable directory or the report cannot be
/// written. Unreadable files inside the tree never fail the run.
pub fn run(config: &AppConfig) -> Result<()> {
    log::info!("describing {}", config.root.display());
    let tree = describe_dataset_engine::build_tree(&config.root, &config.engine)?;
    let report = presentation::render(&tree, config)?;
    presentation::emit(&report, config.output_path.as_deref())
}
