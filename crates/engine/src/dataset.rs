use crate::config::Config;
use crate::description::{
    ChildEntry, FileContent, FileDescription, FolderDescription, ObjectType,
};
use crate::error::Result;
use crate::file::describe_file;
use crate::folder::describe_folder_with;
use serde::Serialize;
use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "Top level of the dataset contains:";

const INDENT: &str = "  ";

/// Recursive description of a dataset tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DatasetNode {
    File(FileDescription),
    Folder {
        #[serde(flatten)]
        description: FolderDescription,
        /// Descriptions of `description.content`; empty past the depth limit.
        children: Vec<DatasetNode>,
    },
}

/// Describe `root` and everything reachable through the clipped listings
/// below it.
///
/// # Errors
///
/// Fails if the configuration is invalid or `root` is not a readable
/// directory. Problems further down the tree never fail the walk.
pub fn build_tree(root: impl AsRef<Path>, config: &Config) -> Result<DatasetNode> {
    config.validate()?;
    let root = root.as_ref();
    let description = describe_folder_with(root, config)?;
    let mut ancestors: Vec<PathBuf> = fs::canonicalize(root).into_iter().collect();
    Ok(folder_node(description, config, 0, &mut ancestors))
}

/// `ancestors` holds the resolved paths of the folders being expanded, so a
/// followed link back into one of them is listed but not descended into.
fn folder_node(
    description: FolderDescription,
    config: &Config,
    depth: usize,
    ancestors: &mut Vec<PathBuf>,
) -> DatasetNode {
    let expand = config.max_depth.is_none_or(|max| depth < max);
    let children = if expand {
        description
            .content
            .iter()
            .map(|child| child_node(child, config, depth, ancestors))
            .collect()
    } else {
        Vec::new()
    };

    DatasetNode::Folder {
        description,
        children,
    }
}

fn child_node(
    child: &ChildEntry,
    config: &Config,
    depth: usize,
    ancestors: &mut Vec<PathBuf>,
) -> DatasetNode {
    if child.object_type == ObjectType::File {
        return DatasetNode::File(describe_file(&child.path));
    }

    let nested = describe_folder_with(&child.path, config).unwrap_or_else(|e| {
        log::warn!("cannot list {}: {e}", child.path.display());
        FolderDescription::new(&child.path, 0, Vec::new())
    });
    match fs::canonicalize(&child.path) {
        Ok(real) if ancestors.contains(&real) => {
            log::warn!(
                "not descending into {}: it leads back to {}",
                child.path.display(),
                real.display()
            );
            DatasetNode::Folder {
                description: nested,
                children: Vec::new(),
            }
        }
        Ok(real) => {
            ancestors.push(real);
            let node = folder_node(nested, config, depth + 1, ancestors);
            ancestors.pop();
            node
        }
        Err(_) => folder_node(nested, config, depth + 1, ancestors),
    }
}

/// Describe the dataset at `root` with the default [`Config`].
///
/// # Errors
///
/// Fails if `root` is not a readable directory.
pub fn describe_dataset(root: impl AsRef<Path>) -> Result<String> {
    describe_dataset_with(root, &Config::default())
}

/// # Errors
///
/// Fails if the configuration is invalid or `root` is not a readable
/// directory.
pub fn describe_dataset_with(root: impl AsRef<Path>, config: &Config) -> Result<String> {
    let tree = build_tree(root, config)?;
    Ok(render_text(&tree, config))
}

/// Render a tree produced by [`build_tree`] as the indented text report.
#[must_use]
pub fn render_text(tree: &DatasetNode, config: &Config) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, tree, config);
    out
}

/// # Errors
///
/// Fails only if serialization itself fails; YAML keys JSON cannot express
/// are written as strings.
pub fn render_json(tree: &DatasetNode) -> Result<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}

fn write_report(out: &mut String, tree: &DatasetNode, config: &Config) -> fmt::Result {
    writeln!(out, "{HEADER}")?;
    match tree {
        DatasetNode::Folder {
            description,
            children,
        } => write_children(out, description, children, 0, config),
        DatasetNode::File(file) => write_file(out, file, 0, config),
    }
}

fn write_node(out: &mut String, node: &DatasetNode, level: usize, config: &Config) -> fmt::Result {
    match node {
        DatasetNode::File(file) => write_file(out, file, level, config),
        DatasetNode::Folder {
            description,
            children,
        } => {
            let pad = INDENT.repeat(level);
            write!(
                out,
                "{pad}folder {} ({}",
                description.name(),
                items(description.total_items)
            )?;
            if description.is_clipped() && !children.is_empty() {
                write!(out, ", showing first {}", description.content.len())?;
            }
            writeln!(out, ")")?;
            if !children.is_empty() {
                write_children(out, description, children, level + 1, config)?;
            }
            Ok(())
        }
    }
}

fn write_children(
    out: &mut String,
    description: &FolderDescription,
    children: &[DatasetNode],
    level: usize,
    config: &Config,
) -> fmt::Result {
    for child in children {
        write_node(out, child, level, config)?;
    }
    if description.is_clipped() {
        writeln!(
            out,
            "{}... {} not shown",
            INDENT.repeat(level),
            more_items(description.hidden_items())
        )?;
    }
    Ok(())
}

fn write_file(out: &mut String, file: &FileDescription, level: usize, config: &Config) -> fmt::Result {
    let pad = INDENT.repeat(level);
    let name = file.name();
    match &file.content {
        FileContent::Empty => writeln!(out, "{pad}file {name}"),
        FileContent::Image { .. } => writeln!(out, "{pad}file {name}: {}", file.content),
        content => {
            writeln!(out, "{pad}file {name}")?;
            write_block(out, &content.to_string(), level + 1, config.max_content_lines)
        }
    }
}

fn write_block(out: &mut String, text: &str, level: usize, max_lines: Option<usize>) -> fmt::Result {
    let pad = INDENT.repeat(level);
    let total = text.lines().count();
    let shown = max_lines.map_or(total, |max| max.min(total));

    for line in text.lines().take(shown) {
        writeln!(out, "{pad}{line}")?;
    }
    if shown < total {
        writeln!(out, "{pad}...")?;
    }
    Ok(())
}

fn items(n: usize) -> String {
    if n == 1 {
        "1 item".to_string()
    } else {
        format!("{n} items")
    }
}

fn more_items(n: usize) -> String {
    if n == 1 {
        "1 more item".to_string()
    } else {
        format!("{n} more items")
    }
}
