//! CLI command implementations

pub mod checksum;
pub mod dimensions;
pub mod explorer;
pub mod fix;
