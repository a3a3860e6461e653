// crates/engine/src/lib.rs
//! Summaries of dataset directory trees.
//!
//! Files are described by what can be parsed out of them (JSON/YAML documents,
//! image resolutions), folders by a clipped, name-ordered listing of their
//! children. [`describe_dataset`] combines both into a single text report.

pub mod config;
pub mod dataset;
pub mod description;
pub mod error;
pub mod file;
pub mod filesystem;
pub mod folder;
pub mod options;

pub use config::{
    Config, ConfigBuilder, DISPLAY_LIMIT, MAX_CONTENT_LINES, WalkOptions, WalkOptionsBuilder,
};
pub use dataset::{
    DatasetNode, HEADER, build_tree, describe_dataset, describe_dataset_with, render_json,
    render_text,
};
pub use description::{ChildEntry, FileContent, FileDescription, FolderDescription, ObjectType};
pub use error::{EngineError, Result};
pub use file::{FileKind, describe_file};
pub use folder::{describe_folder, describe_folder_with};
pub use options::OutputFormat;
