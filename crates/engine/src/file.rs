use crate::description::{FileContent, FileDescription};
use crate::error::{EngineError, Result};
use std::fs;
use std::path::Path;

/// Parser category chosen from a file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Json,
    Yaml,
    Image,
    Unknown,
}

impl FileKind {
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "yaml" | "yml" if cfg!(feature = "yaml") => Self::Yaml,
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" | "tif" | "tiff" | "ico"
                if cfg!(feature = "image") =>
            {
                Self::Image
            }
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|s| s.to_str())
            .map_or(Self::Unknown, Self::from_extension)
    }
}

/// Describe a single file.
///
/// Never fails: a missing file, an unknown extension or content that does not
/// parse all yield [`FileDescription::empty`].
pub fn describe_file(path: impl AsRef<Path>) -> FileDescription {
    let path = path.as_ref();
    let kind = FileKind::from_path(path);
    log::trace!("describing {} as {kind:?}", path.display());

    match read_content(path, kind) {
        Ok(content) => FileDescription::new(path, content),
        Err(e) => {
            log::debug!("no description for {}: {e}", path.display());
            FileDescription::empty(path)
        }
    }
}

fn read_content(path: &Path, kind: FileKind) -> Result<FileContent> {
    match kind {
        FileKind::Json => parse_json(path),
        FileKind::Yaml => parse_yaml(path),
        FileKind::Image => read_image_size(path),
        FileKind::Unknown => Err(EngineError::UnsupportedType(
            path.extension()
                .map_or_else(String::new, |e| e.to_string_lossy().into_owned()),
        )),
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_json(path: &Path) -> Result<FileContent> {
    let text = read_text(path)?;
    let value = serde_json::from_str(&text)?;
    Ok(FileContent::Json(value))
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Path) -> Result<FileContent> {
    let text = read_text(path)?;
    let value = serde_yaml::from_str(&text)?;
    Ok(FileContent::Yaml(value))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Path) -> Result<FileContent> {
    Err(EngineError::UnsupportedType(path.display().to_string()))
}

#[cfg(feature = "image")]
fn read_image_size(path: &Path) -> Result<FileContent> {
    let size = imagesize::size(path).map_err(|e| EngineError::Image {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(FileContent::Image {
        width: size.width,
        height: size.height,
    })
}

#[cfg(not(feature = "image"))]
fn read_image_size(path: &Path) -> Result<FileContent> {
    Err(EngineError::UnsupportedType(path.display().to_string()))
}
