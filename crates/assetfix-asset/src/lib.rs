//! Assetfix Asset - On-disk model of the asset registry
//!
//! This crate maps the `blockchains/` tree onto typed entities and provides
//! the document and image services the normalizers run on:
//! - `RegistryLayout` / `FileKind` - path building and classification
//! - `AssetEntity` - one addressable chain or asset file
//! - `Descriptor` / `TokenList` - order-preserving JSON views
//! - `png_dimensions` / `resize_png` - logo probing and resizing

mod descriptor;
mod document;
mod entity;
mod fs;
mod layout;
mod logo;
mod tokenlist;

pub use descriptor::{AssetDescriptor, ChainDescriptor, Descriptor, ACTIVE_STATUS};
pub use document::{format_json_file, read_json_file, to_pretty_json, write_json_file};
pub use entity::AssetEntity;
pub use fs::write_atomic;
pub use layout::{FileKind, RegistryLayout};
pub use logo::{png_dimensions, resize_png};
pub use tokenlist::{TokenEntry, TokenList};
