//! Assetfix Registry - Static metadata for supported chains
//!
//! Every lookup here is pure: chain metadata by handle or id, the token-type
//! tag a chain expects for its assets, the reverse lookup from a tag to its
//! chain, and the canonical block-explorer URL for an asset.

mod chain;
mod explorer;
mod token;

pub use chain::{all_chains, chain_by_handle, chain_by_id, Chain};
pub use explorer::explorer_url_of;
pub use token::{resolve_chain_from_type_tag, resolve_token_type, COIN_TYPE};
