// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use describe_dataset_engine::{
    Config, ConfigBuilder, OutputFormat, WalkOptions, WalkOptionsBuilder,
};
use std::path::PathBuf;

/// Everything one invocation needs: where to look, how to describe it and
/// where the report goes.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub root: PathBuf,
    pub engine: Config,
    pub format: OutputFormat,
    pub output_path: Option<PathBuf>,
}

impl TryFrom<Args> for AppConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let walk = WalkOptionsBuilder::default()
            .skip_hidden(args.scan.skip_hidden)
            .git_ignore(args.scan.git_ignore)
            .follow_links(args.scan.follow_links)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        // 0 means "no cap"
        let max_content_lines = Some(args.output.max_content_lines).filter(|&n| n > 0);

        let engine = ConfigBuilder::default()
            .walk(walk)
            .display_limit(args.output.limit)
            .max_depth(args.scan.max_depth)
            .max_content_lines(max_content_lines)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            root: args.path,
            engine,
            format: args.output.format.into(),
            output_path: args.output.output,
        })
    }
}
