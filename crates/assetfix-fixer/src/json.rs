//! General JSON formatting

use crate::report::FixOutcome;
use assetfix_asset::{format_json_file, AssetEntity};
use assetfix_core::Result;

/// Rewrite a JSON file in the registry's canonical pretty form
pub fn fix_json(entity: &AssetEntity) -> Result<FixOutcome> {
    if format_json_file(entity.path())? {
        Ok(FixOutcome::Rewritten)
    } else {
        Ok(FixOutcome::Unchanged)
    }
}
