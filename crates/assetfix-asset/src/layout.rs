//! Registry directory layout
//!
//! ```text
//! <root>/blockchains/<chain>/info/info.json
//! <root>/blockchains/<chain>/info/logo.png
//! <root>/blockchains/<chain>/assets/<asset>/info.json
//! <root>/blockchains/<chain>/assets/<asset>/logo.png
//! <root>/blockchains/<chain>/tokenlist.json
//! <root>/blockchains/<chain>/tokenlist-extended.json
//! ```

use crate::entity::AssetEntity;
use assetfix_registry::chain_by_handle;
use std::fmt;
use std::path::{Component, Path, PathBuf};

const BLOCKCHAINS_DIR: &str = "blockchains";
const ASSETS_DIR: &str = "assets";
const INFO_DIR: &str = "info";
const INFO_FILE: &str = "info.json";
const LOGO_FILE: &str = "logo.png";
const TOKENLIST_FILE: &str = "tokenlist.json";
const TOKENLIST_EXTENDED_FILE: &str = "tokenlist-extended.json";

/// Kinds of registry files the normalizers know how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    AssetFolder,
    ChainInfoFile,
    ChainLogoFile,
    AssetInfoFile,
    AssetLogoFile,
    TokenListFile,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::AssetFolder => "asset folder",
            FileKind::ChainInfoFile => "chain info",
            FileKind::ChainLogoFile => "chain logo",
            FileKind::AssetInfoFile => "asset info",
            FileKind::AssetLogoFile => "asset logo",
            FileKind::TokenListFile => "token list",
        };
        f.write_str(name)
    }
}

/// Path builder rooted at a registry checkout
#[derive(Debug, Clone)]
pub struct RegistryLayout {
    root: PathBuf,
}

impl RegistryLayout {
    /// Create a layout for the registry checked out at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn blockchains_path(&self) -> PathBuf {
        self.root.join(BLOCKCHAINS_DIR)
    }

    pub fn chain_path(&self, handle: &str) -> PathBuf {
        self.blockchains_path().join(handle)
    }

    pub fn chain_info_path(&self, handle: &str) -> PathBuf {
        self.chain_path(handle).join(INFO_DIR).join(INFO_FILE)
    }

    pub fn chain_logo_path(&self, handle: &str) -> PathBuf {
        self.chain_path(handle).join(INFO_DIR).join(LOGO_FILE)
    }

    pub fn assets_path(&self, handle: &str) -> PathBuf {
        self.chain_path(handle).join(ASSETS_DIR)
    }

    pub fn asset_path(&self, handle: &str, asset: &str) -> PathBuf {
        self.assets_path(handle).join(asset)
    }

    pub fn asset_info_path(&self, handle: &str, asset: &str) -> PathBuf {
        self.asset_path(handle, asset).join(INFO_FILE)
    }

    pub fn asset_logo_path(&self, handle: &str, asset: &str) -> PathBuf {
        self.asset_path(handle, asset).join(LOGO_FILE)
    }

    pub fn tokenlist_path(&self, handle: &str) -> PathBuf {
        self.chain_path(handle).join(TOKENLIST_FILE)
    }

    pub fn tokenlist_extended_path(&self, handle: &str) -> PathBuf {
        self.chain_path(handle).join(TOKENLIST_EXTENDED_FILE)
    }

    /// Classify a path under the root into an entity.
    ///
    /// Returns `None` for paths outside the root, for chains the registry
    /// does not know, and for files no normalizer handles.
    pub fn classify(&self, path: &Path) -> Option<AssetEntity> {
        let rel = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => s.to_str(),
                _ => None,
            })
            .collect();

        let (handle, rest) = match parts.as_slice() {
            [BLOCKCHAINS_DIR, handle, rest @ ..] => (*handle, rest),
            _ => return None,
        };
        let chain = chain_by_handle(handle)?;

        let (kind, asset) = match rest {
            [INFO_DIR, INFO_FILE] => (FileKind::ChainInfoFile, None),
            [INFO_DIR, LOGO_FILE] => (FileKind::ChainLogoFile, None),
            [TOKENLIST_FILE] | [TOKENLIST_EXTENDED_FILE] => (FileKind::TokenListFile, None),
            [ASSETS_DIR, asset] => (FileKind::AssetFolder, Some(*asset)),
            [ASSETS_DIR, asset, INFO_FILE] => (FileKind::AssetInfoFile, Some(*asset)),
            [ASSETS_DIR, asset, LOGO_FILE] => (FileKind::AssetLogoFile, Some(*asset)),
            _ => return None,
        };

        Some(AssetEntity::new(
            chain,
            asset.map(str::to_string),
            kind,
            path.to_path_buf(),
        ))
    }
}
