//! Test fixtures shared by the engine integration tests.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

pub const SAMPLE_YAML: &str = r#"name: test-dataset
version: "1.0"
classes:
  - car
  - pedestrian
  - bicycle
"#;

pub const SAMPLE_JSON: &str = r#"{
  "version": "1.0",
  "images": [
    {"id": 1, "file_name": "1.jpg", "width": 1920, "height": 1080},
    {"id": 2, "file_name": "2.jpg", "width": 1920, "height": 1080}
  ],
  "annotations": [
    {"id": 1, "image_id": 1, "category": "car", "bbox": [10, 20, 100, 50]},
    {"id": 2, "image_id": 2, "category": "pedestrian", "bbox": [300, 400, 40, 120]}
  ]
}
"#;

/// Baseline JPEG header with a single SOF0 segment.
pub fn jpeg_header(width: u16, height: u16) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 0x08];
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
    bytes.extend_from_slice(&[0xFF, 0xD9]);
    bytes.resize(64, 0);
    bytes
}

/// Temporary directory tree removed on drop.
pub struct TempWorkspace {
    dir: TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        self.create_binary(rel, contents.as_bytes())
    }

    pub fn create_binary(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// `config.yaml`, `annotations/train.json` and four 1920x1080 JPEGs in
    /// `images/`.
    pub fn with_sample_dataset(self) -> Self {
        self.create_file("config.yaml", SAMPLE_YAML);
        self.create_file("annotations/train.json", SAMPLE_JSON);
        for i in 1..=4 {
            self.create_binary(&format!("images/{i}.jpg"), &jpeg_header(1920, 1080));
        }
        self
    }
}
