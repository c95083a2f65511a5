//! Token-type tag resolution

use crate::chain::{all_chains, chain_by_id, Chain};

/// Type tag shared by every native-coin entry (chain `info.json`, token lists)
pub const COIN_TYPE: &str = "coin";

const TRC10: &str = "TRC10";
const TRON_ID: u32 = 195;

/// Resolve the token-type tag the registry expects for an asset.
///
/// Returns `None` when the chain issues no tokens or is unknown. Tron carries
/// two standards: purely numeric asset ids are TRC10, everything else TRC20.
pub fn resolve_token_type(chain_id: u32, asset_id: &str) -> Option<&'static str> {
    let chain = chain_by_id(chain_id)?;

    if chain.id == TRON_ID && !asset_id.is_empty() && asset_id.bytes().all(|b| b.is_ascii_digit())
    {
        return Some(TRC10);
    }

    chain.token_types.first().copied()
}

/// Find the chain a token-type tag belongs to.
///
/// Case-insensitive. Empty or unrecognised tags resolve to `None`.
pub fn resolve_chain_from_type_tag(tag: &str) -> Option<&'static Chain> {
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }

    all_chains()
        .iter()
        .find(|c| c.token_types.iter().any(|t| t.eq_ignore_ascii_case(tag)))
}
