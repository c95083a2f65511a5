//! Assetfix Core - Foundational types for the assetfix registry normalizer
//!
//! This crate provides the pieces every other assetfix crate depends on:
//! - `checksum_of` - EIP-55 mixed-case address checksums
//! - `target_dimensions` - Aspect-preserving logo downscale math
//! - Error types and Result alias

mod address;
mod dimension;
mod error;

pub use address::{checksum_of, is_checksummed};
pub use dimension::target_dimensions;
pub use error::{AssetfixError, Result};
