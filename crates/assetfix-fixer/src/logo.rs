//! Oversized logo correction

use crate::limits::LogoLimits;
use crate::report::FixOutcome;
use assetfix_asset::{png_dimensions, resize_png, AssetEntity};
use assetfix_core::{target_dimensions, Result};
use std::fs;
use tracing::{debug, warn};

/// Downscale a logo whose width or height exceeds `limits.max_edge`.
///
/// A logo that is still over `limits.max_bytes` afterwards is reported with a
/// warning only; the stage still succeeds.
pub fn fix_logo(entity: &AssetEntity, limits: &LogoLimits) -> Result<FixOutcome> {
    let path = entity.path();
    let (width, height) = png_dimensions(path)?;

    let mut outcome = FixOutcome::Unchanged;
    if width > limits.max_edge || height > limits.max_edge {
        let (target_w, target_h) = target_dimensions(width, height, limits.max_edge);
        debug!(
            path = %path.display(),
            width,
            height,
            target_w,
            target_h,
            "Fixing too large image"
        );

        resize_png(path, target_w, target_h)?;
        outcome = FixOutcome::Rewritten;
    }

    // TODO: recompress logos that stay over the byte limit once a lossless PNG optimizer is wired in
    match fs::metadata(path) {
        Ok(meta) if meta.len() > limits.max_bytes => {
            warn!(
                path = %path.display(),
                size = meta.len(),
                max = limits.max_bytes,
                "Logo exceeds size limit"
            );
        }
        Ok(_) => {}
        Err(e) => warn!(path = %path.display(), error = %e, "Could not check logo size"),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::Fixture;
    use assetfix_core::AssetfixError;

    const ADDR: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_resizes_oversized_logo() {
        let fx = Fixture::new();
        let path = fx.layout.asset_logo_path("ethereum", ADDR);
        fx.write_png(&path, 4000, 2000);

        let entity = fx.entity(path.clone());
        assert_eq!(
            fix_logo(&entity, &LogoLimits::default()).unwrap(),
            FixOutcome::Rewritten
        );
        assert_eq!(png_dimensions(&path).unwrap(), (512, 256));
    }

    #[test]
    fn test_second_run_is_noop() {
        let fx = Fixture::new();
        let path = fx.layout.chain_logo_path("smartchain");
        fx.write_png(&path, 300, 900);

        let entity = fx.entity(path.clone());
        fix_logo(&entity, &LogoLimits::default()).unwrap();
        let first = fs::read(&path).unwrap();
        assert_eq!(png_dimensions(&path).unwrap(), (170, 512));

        assert_eq!(
            fix_logo(&entity, &LogoLimits::default()).unwrap(),
            FixOutcome::Unchanged
        );
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_thin_banner_keeps_one_pixel_height() {
        let fx = Fixture::new();
        let path = fx.layout.asset_logo_path("ethereum", ADDR);
        fx.write_png(&path, 4000, 2);

        let entity = fx.entity(path.clone());
        assert_eq!(
            fix_logo(&entity, &LogoLimits::default()).unwrap(),
            FixOutcome::Rewritten
        );
        assert_eq!(png_dimensions(&path).unwrap(), (512, 1));
    }

    #[test]
    fn test_within_bounds_is_untouched() {
        let fx = Fixture::new();
        let path = fx.layout.asset_logo_path("ethereum", ADDR);
        fx.write_png(&path, 512, 512);
        let before = fs::read(&path).unwrap();

        let entity = fx.entity(path.clone());
        assert_eq!(
            fix_logo(&entity, &LogoLimits::default()).unwrap(),
            FixOutcome::Unchanged
        );
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_oversized_bytes_is_not_an_error() {
        let fx = Fixture::new();
        let path = fx.layout.asset_logo_path("ethereum", ADDR);
        fx.write_png(&path, 64, 64);

        let limits = LogoLimits {
            max_edge: 512,
            max_bytes: 1,
        };
        let entity = fx.entity(path);
        assert_eq!(fix_logo(&entity, &limits).unwrap(), FixOutcome::Unchanged);
    }

    #[test]
    fn test_unreadable_logo_is_error() {
        let fx = Fixture::new();
        let path = fx.layout.asset_logo_path("ethereum", ADDR);
        fx.write_raw(&path, "definitely not png");

        let entity = fx.entity(path);
        assert!(matches!(
            fix_logo(&entity, &LogoLimits::default()),
            Err(AssetfixError::Image { .. })
        ));
    }
}
