//! Logo target dimension command

use anyhow::Result;
use assetfix_core::target_dimensions;
use assetfix_fixer::LogoLimits;

pub fn run(width: u32, height: u32, max_edge: Option<u32>) -> Result<()> {
    let max_edge = max_edge.unwrap_or_else(|| LogoLimits::default().max_edge);

    if width <= max_edge && height <= max_edge {
        println!("{}x{} (within {})", width, height, max_edge);
        return Ok(());
    }

    let (w, h) = target_dimensions(width, height, max_edge);
    println!("{}x{} -> {}x{}", width, height, w, h);
    Ok(())
}
