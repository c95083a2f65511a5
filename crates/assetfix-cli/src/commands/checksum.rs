//! Address checksum command

use anyhow::Result;
use assetfix_core::{checksum_of, is_checksummed};

pub fn run(address: &str) -> Result<()> {
    let checksum = checksum_of(address)?;
    if is_checksummed(address) {
        println!("{} (already checksummed)", checksum);
    } else {
        println!("{}", checksum);
    }
    Ok(())
}
