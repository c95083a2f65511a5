//! Block-explorer URL templating

use crate::chain::Chain;
use crate::token::resolve_token_type;
use assetfix_core::{AssetfixError, Result};

const TRONSCAN_TRC10: &str = "https://tronscan.io/#/token/";

/// Build the canonical explorer URL for an asset on a chain
pub fn explorer_url_of(chain: &Chain, asset_id: &str) -> Result<String> {
    let base = chain
        .token_explorer
        .ok_or_else(|| AssetfixError::UnsupportedExplorer {
            chain: chain.handle.to_string(),
        })?;

    if resolve_token_type(chain.id, asset_id) == Some("TRC10") {
        return Ok(format!("{}{}", TRONSCAN_TRC10, asset_id));
    }

    Ok(format!("{}{}", base, asset_id))
}
