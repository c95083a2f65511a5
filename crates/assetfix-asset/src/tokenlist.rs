//! Chain token-list manifests

use crate::document::{read_json_file, write_json_file};
use assetfix_core::{AssetfixError, Result};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::path::Path;

const TOKENS_FIELD: &str = "tokens";
const VERSION_FIELD: &str = "version";
const TIMESTAMP_FIELD: &str = "timestamp";

/// The routing fields of one token-list entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenEntry {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl TokenEntry {
    /// Read the routing fields out of a raw entry
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        TokenEntry::deserialize(value)
    }
}

/// A token-list manifest; entries are kept as raw JSON so every field of a
/// retained entry is written back unchanged
#[derive(Debug, Clone, PartialEq)]
pub struct TokenList {
    fields: Map<String, Value>,
}

impl TokenList {
    /// Load a manifest; `tokens` may be missing but must be an array if present
    pub fn load(path: &Path) -> Result<Self> {
        let fields = match read_json_file(path)? {
            Value::Object(fields) => fields,
            _ => return Err(AssetfixError::json(path, "token list root is not an object")),
        };

        match fields.get(TOKENS_FIELD) {
            None | Some(Value::Array(_)) => Ok(Self { fields }),
            Some(_) => Err(AssetfixError::json(path, "`tokens` is not an array")),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_file(path, &self.fields)
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn tokens(&self) -> &[Value] {
        match self.fields.get(TOKENS_FIELD) {
            Some(Value::Array(tokens)) => tokens.as_slice(),
            _ => &[],
        }
    }

    pub fn set_tokens(&mut self, tokens: Vec<Value>) {
        self.fields
            .insert(TOKENS_FIELD.to_string(), Value::Array(tokens));
    }

    pub fn major_version(&self) -> u64 {
        self.fields
            .get(VERSION_FIELD)
            .and_then(|v| v.get("major"))
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }

    /// Increment `version.major`, creating the version object if needed
    pub fn bump_major_version(&mut self) {
        let next = self.major_version() + 1;
        match self.fields.get_mut(VERSION_FIELD) {
            Some(Value::Object(version)) => {
                version.insert("major".to_string(), json!(next));
            }
            _ => {
                self.fields.insert(
                    VERSION_FIELD.to_string(),
                    json!({ "major": next, "minor": 0, "patch": 0 }),
                );
            }
        }
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.fields.get(TIMESTAMP_FIELD).and_then(Value::as_str)
    }

    pub fn set_timestamp(&mut self, timestamp: &str) {
        self.fields
            .insert(TIMESTAMP_FIELD.to_string(), Value::String(timestamp.to_string()));
    }
}
