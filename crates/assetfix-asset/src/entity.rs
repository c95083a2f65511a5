//! Addressable registry entities

use crate::layout::FileKind;
use assetfix_core::{AssetfixError, Result};
use assetfix_registry::Chain;
use std::fmt;
use std::path::{Path, PathBuf};

/// One chain-level or asset-level file (or asset folder) in the registry.
///
/// Entities are immutable. When a normalizer moves the backing directory it
/// hands back a new entity through [`AssetEntity::renamed`], and the caller
/// must continue with that value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntity {
    chain: &'static Chain,
    asset: Option<String>,
    kind: FileKind,
    path: PathBuf,
}

impl AssetEntity {
    pub fn new(chain: &'static Chain, asset: Option<String>, kind: FileKind, path: PathBuf) -> Self {
        Self {
            chain,
            asset,
            kind,
            path,
        }
    }

    pub fn chain(&self) -> &'static Chain {
        self.chain
    }

    /// Asset id (contract address or token id); `None` for chain-level files
    pub fn asset(&self) -> Option<&str> {
        self.asset.as_deref()
    }

    /// Asset id, or an error for chain-level entities
    pub fn require_asset(&self) -> Result<&str> {
        self.asset()
            .ok_or_else(|| AssetfixError::MissingAssetId(self.path.clone()))
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The same entity after its final path segment was renamed to `name`
    pub fn renamed(&self, name: &str) -> AssetEntity {
        AssetEntity {
            chain: self.chain,
            asset: Some(name.to_string()),
            kind: self.kind,
            path: self.path.with_file_name(name),
        }
    }
}

impl fmt::Display for AssetEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.asset {
            Some(asset) => write!(f, "{} {}/{}", self.kind, self.chain.handle, asset),
            None => write!(f, "{} {}", self.kind, self.chain.handle),
        }
    }
}
