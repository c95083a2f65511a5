//! Inactive token removal from token lists

use crate::report::FixOutcome;
use assetfix_asset::{AssetEntity, Descriptor, RegistryLayout, TokenEntry, TokenList};
use assetfix_core::{AssetfixError, Result};
use assetfix_registry::COIN_TYPE;
use chrono::Utc;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Drop token-list entries whose descriptor is not active.
///
/// Every referenced `info.json` is read fresh on each call. Any descriptor
/// that cannot be read aborts the pass before the manifest is touched.
pub fn fix_token_list(entity: &AssetEntity, layout: &RegistryLayout) -> Result<FixOutcome> {
    let path = entity.path();
    let handle = entity.chain().handle;
    let mut list = TokenList::load(path)?;

    let mut retained = Vec::with_capacity(list.tokens().len());
    let mut dropped = 0usize;

    for raw in list.tokens() {
        let entry = TokenEntry::from_value(raw).map_err(|e| AssetfixError::json(path, e))?;

        let info_path = if entry.kind == COIN_TYPE {
            layout.chain_info_path(handle)
        } else {
            let address = entry
                .address
                .as_deref()
                .filter(|a| !a.is_empty())
                .ok_or_else(|| {
                    AssetfixError::json(path, format!("{} entry without address", entry.kind))
                })?;
            layout.asset_info_path(handle, address)
        };

        let info = Descriptor::load(&info_path)?;
        if info.is_active() {
            retained.push(raw.clone());
        } else {
            debug!(
                path = %path.display(),
                asset = entry.address.as_deref().unwrap_or(COIN_TYPE),
                status = info.status(),
                "Dropping inactive token"
            );
            dropped += 1;
        }
    }

    if dropped == 0 {
        return Ok(FixOutcome::Unchanged);
    }

    list.set_tokens(retained);
    list.bump_major_version();
    list.set_timestamp(&Utc::now().format(TIMESTAMP_FORMAT).to_string());
    list.save(path)?;

    debug!(path = %path.display(), dropped, "Removed inactive tokens");

    Ok(FixOutcome::Rewritten)
}
