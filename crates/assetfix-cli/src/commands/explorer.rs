//! Explorer URL command

use anyhow::Result;
use assetfix_core::AssetfixError;
use assetfix_registry::{chain_by_handle, explorer_url_of};

pub fn run(chain: &str, asset: &str) -> Result<()> {
    let chain = chain_by_handle(chain).ok_or_else(|| AssetfixError::UnknownChain(chain.to_string()))?;
    println!("{}", explorer_url_of(chain, asset)?);
    Ok(())
}
