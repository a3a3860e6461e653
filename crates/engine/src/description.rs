//! Description objects produced by the describers.
//!
//! All of these are built fresh for every call and never mutated afterwards;
//! they only exist to be rendered into a report.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    File,
    Folder,
}

impl ObjectType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What could be inferred about a single file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FileContent {
    /// No description available: unknown type, missing file or parse failure.
    Empty,
    Json(serde_json::Value),
    #[cfg(feature = "yaml")]
    Yaml(#[serde(serialize_with = "serialize_yaml")] serde_yaml::Value),
    Image { width: usize, height: usize },
}

impl FileContent {
    /// Structured payloads are rendered as a block below the file line,
    /// everything else fits on the same line.
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        match self {
            Self::Json(_) => true,
            #[cfg(feature = "yaml")]
            Self::Yaml(_) => true,
            Self::Empty | Self::Image { .. } => false,
        }
    }
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Json(value) => {
                let text = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
            #[cfg(feature = "yaml")]
            Self::Yaml(value) => {
                let text = serde_yaml::to_string(value).map_err(|_| fmt::Error)?;
                f.write_str(text.trim_end())
            }
            Self::Image { width, height } => {
                write!(f, "image of resolution {width}x{height}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDescription {
    pub path: PathBuf,
    pub object_type: ObjectType,
    pub content: FileContent,
}

impl FileDescription {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: FileContent) -> Self {
        Self {
            path: path.into(),
            object_type: ObjectType::File,
            content,
        }
    }

    /// The "no description available" variant.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::new(path, FileContent::Empty)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.content, FileContent::Empty)
    }

    /// Final path component, or the full path when there is none.
    #[must_use]
    pub fn name(&self) -> String {
        entry_name(&self.path)
    }
}

/// Lightweight reference to a child of a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildEntry {
    pub name: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub object_type: ObjectType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderDescription {
    pub path: PathBuf,
    pub object_type: ObjectType,
    /// True number of immediate children, even when `content` is clipped.
    pub total_items: usize,
    pub content: Vec<ChildEntry>,
}

impl FolderDescription {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, total_items: usize, content: Vec<ChildEntry>) -> Self {
        Self {
            path: path.into(),
            object_type: ObjectType::Folder,
            total_items,
            content,
        }
    }

    #[must_use]
    pub fn is_clipped(&self) -> bool {
        self.content.len() < self.total_items
    }

    /// Children counted in `total_items` but left out of `content`.
    #[must_use]
    pub fn hidden_items(&self) -> usize {
        self.total_items.saturating_sub(self.content.len())
    }

    #[must_use]
    pub fn name(&self) -> String {
        entry_name(&self.path)
    }
}

/// YAML allows mapping keys JSON cannot express; those are emitted as their
/// compact JSON text so every parsed document stays serializable.
#[cfg(feature = "yaml")]
fn serialize_yaml<S>(value: &serde_yaml::Value, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    yaml_to_json(value).serialize(serializer)
}

#[cfg(feature = "yaml")]
fn yaml_to_json(value: &serde_yaml::Value) -> serde_json::Value {
    use serde_json::Value as Json;
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(*b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Json::from(i)
            } else if let Some(u) = n.as_u64() {
                Json::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Json::Null, Json::Number)
            }
        }
        Yaml::String(s) => Json::String(s.clone()),
        Yaml::Sequence(items) => Json::Array(items.iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => Json::Object(
            map.iter()
                .map(|(key, value)| (yaml_key(key), yaml_to_json(value)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

#[cfg(feature = "yaml")]
fn yaml_key(key: &serde_yaml::Value) -> String {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => s.clone(),
        Yaml::Null => "null".to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::Tagged(tagged) => yaml_key(&tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => yaml_to_json(key).to_string(),
    }
}

pub(crate) fn entry_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
