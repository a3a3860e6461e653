use crate::config::WalkOptions;
use crate::description::{ChildEntry, ObjectType, entry_name};
use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;

/// List the immediate children of `dir`, sorted by file name.
///
/// # Errors
///
/// Returns [`EngineError::NotADirectory`] if `dir` is not a directory and
/// [`EngineError::FileRead`] / [`EngineError::Walk`] if it cannot be read.
/// Children that cannot be inspected (dangling or looping symlinks) are
/// logged and listed as files.
pub fn read_children(dir: &Path, options: &WalkOptions) -> Result<Vec<ChildEntry>> {
    let meta = fs::metadata(dir).map_err(|e| EngineError::FileRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    if !meta.is_dir() {
        return Err(EngineError::NotADirectory(dir.to_path_buf()));
    }

    let mut builder = WalkBuilder::new(dir);

    // Start from no filtering so every child is counted unless asked otherwise.
    builder
        .standard_filters(false)
        .hidden(options.skip_hidden)
        .git_ignore(options.git_ignore)
        .ignore(options.git_ignore)
        .require_git(false)
        .follow_links(options.follow_links)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut children = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            // Failure to read the directory itself
            Err(e) if e.depth() == Some(0) => return Err(e.into()),
            // Dangling or looping links still count as children.
            Err(e) => {
                log::warn!("cannot inspect entry in {}: {e}", dir.display());
                match error_path(&e) {
                    Some(path) => children.push(ChildEntry {
                        name: entry_name(path),
                        path: path.to_path_buf(),
                        object_type: ObjectType::File,
                    }),
                    None => log::warn!("skipping unnamed entry in {}", dir.display()),
                }
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }

        let object_type = if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            ObjectType::Folder
        } else {
            ObjectType::File
        };

        children.push(ChildEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
            object_type,
        });
    }

    children.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(children)
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
