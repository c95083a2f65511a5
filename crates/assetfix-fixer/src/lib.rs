//! Assetfix Fixer - Idempotent normalization passes
//!
//! Each stage takes one [`AssetEntity`](assetfix_asset::AssetEntity), compares
//! the on-disk state with the value derived from registry rules, and only
//! touches the filesystem when the two differ. Running any stage twice leaves
//! the files exactly as the first run did.

mod asset_info;
mod chain_info;
mod checksum;
mod json;
mod limits;
mod logo;
mod normalizer;
mod report;
mod tokenlist;

#[cfg(test)]
mod testutil;

pub use asset_info::fix_asset_info;
pub use chain_info::fix_chain_info;
pub use checksum::fix_address_checksum;
pub use json::fix_json;
pub use limits::LogoLimits;
pub use logo::fix_logo;
pub use normalizer::{Normalizer, Stage};
pub use report::{EntityRun, FixAction, FixOutcome, FixReport, Failure};
pub use tokenlist::fix_token_list;
