//! Error types for assetfix

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for assetfix operations
#[derive(Debug, Error)]
pub enum AssetfixError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("No explorer for coin: {chain}")]
    UnsupportedExplorer { chain: String },

    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("No asset id for {}", .0.display())]
    MissingAssetId(PathBuf),

    #[error("Failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error in {}: {message}", path.display())]
    Json { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Image error in {}: {message}", path.display())]
    Image { path: PathBuf, message: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl AssetfixError {
    /// Wrap an I/O failure with the operation and path it happened on
    pub fn io(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        AssetfixError::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap a JSON (de)serialization failure with the file it came from
    pub fn json(path: &Path, err: impl std::fmt::Display) -> Self {
        AssetfixError::Json {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for assetfix operations
pub type Result<T> = std::result::Result<T, AssetfixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_carries_context() {
        let err = AssetfixError::io(
            "rename",
            Path::new("blockchains/ethereum/assets/0xabc"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("rename"));
        assert!(msg.contains("blockchains/ethereum/assets/0xabc"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_explorer_error_message() {
        let err = AssetfixError::UnsupportedExplorer {
            chain: "bitcoin".to_string(),
        };
        assert_eq!(err.to_string(), "No explorer for coin: bitcoin");
    }
}
