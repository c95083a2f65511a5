//! Chain and asset `info.json` descriptors
//!
//! A descriptor is held as the raw JSON object so that fields this crate does
//! not know about survive a read-modify-write untouched and in place. Only
//! the handful of fields the normalizers reconcile get typed accessors.

use crate::document::{read_json_file, write_json_file};
use assetfix_core::{AssetfixError, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Status value marking a listed, live asset
pub const ACTIVE_STATUS: &str = "active";

const TYPE_FIELD: &str = "type";
const ID_FIELD: &str = "id";
const EXPLORER_FIELD: &str = "explorer";
const STATUS_FIELD: &str = "status";

/// An order-preserving view over a descriptor's JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Descriptor {
    fields: Map<String, Value>,
}

/// Chain-level `info/info.json`
pub type ChainDescriptor = Descriptor;

/// Asset-level `assets/<id>/info.json`
pub type AssetDescriptor = Descriptor;

impl Descriptor {
    /// Load a descriptor; the document root must be a JSON object
    pub fn load(path: &Path) -> Result<Self> {
        match read_json_file(path)? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(AssetfixError::json(path, "descriptor root is not an object")),
        }
    }

    /// Write the full document back
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_file(path, &self.fields)
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// String value of a field; absent and non-string values read as `None`
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Set a string field, keeping its position if it already exists
    pub fn set_str(&mut self, key: &str, value: &str) {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    pub fn kind(&self) -> Option<&str> {
        self.get_str(TYPE_FIELD)
    }

    pub fn set_kind(&mut self, value: &str) {
        self.set_str(TYPE_FIELD, value);
    }

    pub fn id(&self) -> Option<&str> {
        self.get_str(ID_FIELD)
    }

    pub fn set_id(&mut self, value: &str) {
        self.set_str(ID_FIELD, value);
    }

    pub fn explorer(&self) -> Option<&str> {
        self.get_str(EXPLORER_FIELD)
    }

    pub fn set_explorer(&mut self, value: &str) {
        self.set_str(EXPLORER_FIELD, value);
    }

    /// Listing status; missing reads as the empty string
    pub fn status(&self) -> &str {
        self.get_str(STATUS_FIELD).unwrap_or("")
    }

    pub fn is_active(&self) -> bool {
        self.status() == ACTIVE_STATUS
    }
}
