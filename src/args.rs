// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use describe_dataset_engine::{DISPLAY_LIMIT, MAX_CONTENT_LINES};

use crate::{
    parsers::{parse_depth, parse_positive_usize},
    value_enum::CliOutputFormat,
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "describe_dataset",
    version = crate::VERSION,
    about = "Describe the contents of a dataset directory in plain text"
)]
pub struct Args {
    /// Dataset root directory
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output-related options
#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Report format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Children shown per folder before the listing is clipped
    #[arg(long, default_value_t = DISPLAY_LIMIT, value_parser = parse_positive_usize, help_heading = "Output")]
    pub limit: usize,

    /// Lines of JSON/YAML shown per file (0 shows everything)
    #[arg(long, default_value_t = MAX_CONTENT_LINES, help_heading = "Output")]
    pub max_content_lines: usize,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

/// Traversal options
#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// Do not describe folders nested deeper than this
    #[arg(long, value_parser = parse_depth, help_heading = "Scan")]
    pub max_depth: Option<usize>,

    /// Ignore hidden files and folders
    #[arg(long, help_heading = "Scan")]
    pub skip_hidden: bool,

    /// Honour .gitignore and .ignore files
    #[arg(long, help_heading = "Scan")]
    pub git_ignore: bool,

    /// Follow symbolic links
    #[arg(long, help_heading = "Scan")]
    pub follow_links: bool,
}
