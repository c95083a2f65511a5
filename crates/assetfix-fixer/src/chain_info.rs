//! Chain `info.json` type correction

use crate::report::FixOutcome;
use assetfix_asset::{AssetEntity, ChainDescriptor};
use assetfix_core::Result;
use assetfix_registry::COIN_TYPE;
use tracing::debug;

/// Force the chain descriptor's `type` to the native-coin tag
pub fn fix_chain_info(entity: &AssetEntity) -> Result<FixOutcome> {
    let mut info = ChainDescriptor::load(entity.path())?;

    if info.kind() == Some(COIN_TYPE) {
        return Ok(FixOutcome::Unchanged);
    }

    debug!(path = %entity.path().display(), from = ?info.kind(), "Fixing chain info type");
    info.set_kind(COIN_TYPE);
    info.save(entity.path())?;

    Ok(FixOutcome::Rewritten)
}
