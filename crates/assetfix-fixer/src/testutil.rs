//! Temporary registry checkouts for stage tests

use assetfix_asset::{write_json_file, AssetEntity, RegistryLayout};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A registry root in a unique temp directory, removed on drop
pub struct Fixture {
    pub layout: RegistryLayout,
}

impl Fixture {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("assetfix_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&root).unwrap();
        Self {
            layout: RegistryLayout::new(root),
        }
    }

    pub fn write_json(&self, path: &Path, value: &Value) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        write_json_file(path, value).unwrap();
    }

    pub fn write_raw(&self, path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn write_png(&self, path: &Path, width: u32, height: u32) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::RgbaImage::from_pixel(width, height, image::Rgba([30, 90, 200, 255]))
            .save(path)
            .unwrap();
    }

    pub fn entity(&self, path: PathBuf) -> AssetEntity {
        self.layout.classify(&path).unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        fs::remove_dir_all(self.layout.root()).ok();
    }
}
