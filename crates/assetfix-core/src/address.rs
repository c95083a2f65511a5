//! EIP-55 address checksums

use crate::error::{AssetfixError, Result};
use sha3::{Digest, Keccak256};

const ADDRESS_HEX_LEN: usize = 40;

/// Compute the EIP-55 mixed-case checksum form of an EVM address.
///
/// Accepts any casing of `0x` + 40 hex digits. Anything else is rejected
/// with [`AssetfixError::InvalidAddress`].
pub fn checksum_of(address: &str) -> Result<String> {
    let hex_part = strip_prefix(address)
        .ok_or_else(|| AssetfixError::InvalidAddress(address.to_string()))?;
    if hex_part.len() != ADDRESS_HEX_LEN || hex::decode(hex_part).is_err() {
        return Err(AssetfixError::InvalidAddress(address.to_string()));
    }

    let lower = hex_part.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + ADDRESS_HEX_LEN);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        // High nibble for even positions, low nibble for odd
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }

    Ok(out)
}

/// Check whether a string is a valid address already in checksum form
pub fn is_checksummed(address: &str) -> bool {
    checksum_of(address).map(|c| c == address).unwrap_or(false)
}

fn strip_prefix(address: &str) -> Option<&str> {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
}
