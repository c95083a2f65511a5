//! EVM asset folder checksum naming

use crate::report::FixOutcome;
use assetfix_asset::AssetEntity;
use assetfix_core::{checksum_of, AssetfixError, Result};
use std::fs;
use tracing::debug;

/// Rename an EVM asset folder to the checksum form of its address.
///
/// Non-EVM chains are left alone. A folder name that is not an address at
/// all is an error, not something to correct. After a rename the caller must
/// continue with the entity carried in [`FixOutcome::Renamed`].
pub fn fix_address_checksum(entity: &AssetEntity) -> Result<FixOutcome> {
    if !entity.chain().is_evm() {
        return Ok(FixOutcome::Unchanged);
    }

    let dir_name = entity
        .path()
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AssetfixError::InvalidAddress(entity.path().display().to_string()))?;

    let checksum = checksum_of(dir_name)?;
    if checksum == dir_name {
        return Ok(FixOutcome::Unchanged);
    }

    let renamed = entity.renamed(&checksum);
    fs::rename(entity.path(), renamed.path())
        .map_err(|e| AssetfixError::io("rename", entity.path(), e))?;

    debug!(from = dir_name, to = %checksum, "Renamed asset");

    Ok(FixOutcome::Renamed(renamed))
}
