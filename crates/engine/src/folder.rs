use crate::config::Config;
use crate::description::{ChildEntry, FolderDescription};
use crate::error::Result;
use crate::filesystem::read_children;
use std::path::Path;

/// Describe a folder with the default [`Config`].
///
/// # Errors
///
/// Fails if `path` is missing, unreadable or not a directory.
pub fn describe_folder(path: impl AsRef<Path>) -> Result<FolderDescription> {
    describe_folder_with(path, &Config::default())
}

/// List a folder's immediate children and keep the first
/// `config.display_limit` of them in name order. `total_items` always holds
/// the full count.
///
/// # Errors
///
/// Fails if `path` is missing, unreadable or not a directory.
pub fn describe_folder_with(path: impl AsRef<Path>, config: &Config) -> Result<FolderDescription> {
    let path = path.as_ref();
    let children = read_children(path, &config.walk)?;
    Ok(clip(path, children, config.display_limit))
}

fn clip(path: &Path, mut children: Vec<ChildEntry>, limit: usize) -> FolderDescription {
    let total_items = children.len();
    children.truncate(limit);
    FolderDescription::new(path, total_items, children)
}
