//! Asset `info.json` reconciliation

use crate::report::FixOutcome;
use assetfix_asset::{AssetDescriptor, AssetEntity};
use assetfix_core::Result;
use assetfix_registry::{explorer_url_of, resolve_chain_from_type_tag, resolve_token_type};
use tracing::debug;

/// Reconcile an asset descriptor's `type`, `id` and `explorer` fields.
///
/// All three are checked before anything is written, and the document is
/// written at most once. An explorer URL that cannot be derived fails the
/// whole stage even when the other fields were already correct.
pub fn fix_asset_info(entity: &AssetEntity) -> Result<FixOutcome> {
    let chain = entity.chain();
    let asset_id = entity.require_asset()?;
    let mut info = AssetDescriptor::load(entity.path())?;
    let mut modified = false;

    // Type tag. An unknown or empty declared type resolves to no chain and
    // gets replaced.
    let declared = info.kind().unwrap_or("").to_string();
    let declared_chain = resolve_chain_from_type_tag(&declared);
    let expected_type = expected_type_tag(chain.id, asset_id, &declared);

    if declared_chain.map(|c| c.id) != Some(chain.id)
        || !declared.eq_ignore_ascii_case(&expected_type)
    {
        debug!(
            path = %entity.path().display(),
            from = %declared,
            to = %expected_type,
            "Fixing asset type"
        );
        info.set_kind(&expected_type);
        modified = true;
    }

    if info.id() != Some(asset_id) {
        debug!(
            path = %entity.path().display(),
            from = ?info.id(),
            to = asset_id,
            "Fixing asset id"
        );
        info.set_id(asset_id);
        modified = true;
    }

    let expected_explorer = explorer_url_of(chain, asset_id)?;
    let explorer_ok = info
        .explorer()
        .map(|url| url.eq_ignore_ascii_case(&expected_explorer))
        .unwrap_or(false);
    if !explorer_ok {
        debug!(
            path = %entity.path().display(),
            to = %expected_explorer,
            "Fixing asset explorer"
        );
        info.set_explorer(&expected_explorer);
        modified = true;
    }

    if !modified {
        return Ok(FixOutcome::Unchanged);
    }

    info.save(entity.path())?;
    Ok(FixOutcome::Rewritten)
}

/// The type tag an asset should carry.
///
/// Chains without a registry tag fall back to the uppercased declared value.
/// Every chain in the table that has such a gap also lacks a token explorer,
/// so through [`fix_asset_info`] the fallback is always followed by an
/// explorer failure.
fn expected_type_tag(chain_id: u32, asset_id: &str, declared: &str) -> String {
    match resolve_token_type(chain_id, asset_id) {
        Some(tag) => tag.to_string(),
        None => declared.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::Fixture;
    use assetfix_core::AssetfixError;
    use serde_json::json;
    use std::fs;

    const ADDR: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn load(path: &std::path::Path) -> AssetDescriptor {
        AssetDescriptor::load(path).unwrap()
    }

    #[test]
    fn test_fixes_all_three_fields() {
        let fx = Fixture::new();
        let path = fx.layout.asset_info_path("ethereum", ADDR);
        fx.write_json(
            &path,
            &json!({
                "name": "Token",
                "type": "BEP20",
                "id": ADDR.to_ascii_lowercase(),
                "status": "active",
                "note": "x"
            }),
        );

        let entity = fx.entity(path.clone());
        assert_eq!(fix_asset_info(&entity).unwrap(), FixOutcome::Rewritten);

        let info = load(&path);
        assert_eq!(info.kind(), Some("ERC20"));
        assert_eq!(info.id(), Some(ADDR));
        assert_eq!(
            info.explorer(),
            Some(format!("https://etherscan.io/token/{}", ADDR).as_str())
        );
        assert_eq!(info.get_str("note"), Some("x"));
        assert_eq!(info.status(), "active");

        let keys: Vec<_> = info.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "type", "id", "status", "note", "explorer"]);
    }

    #[test]
    fn test_unknown_fields_survive_byte_for_byte() {
        let fx = Fixture::new();
        let path = fx.layout.asset_info_path("ethereum", ADDR);
        fx.write_json(
            &path,
            &json!({
                "name": "Token",
                "links": [{ "name": "github", "url": "https://github.com/x" }],
                "type": "erc20",
                "note": "x"
            }),
        );

        let entity = fx.entity(path.clone());
        fix_asset_info(&entity).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains(
            "    \"links\": [\n        {\n            \"name\": \"github\",\n            \"url\": \"https://github.com/x\"\n        }\n    ],\n"
        ));
        assert!(text.contains("    \"note\": \"x\""));
        // Case-insensitive match keeps the declared casing
        assert_eq!(load(&path).kind(), Some("erc20"));
    }

    #[test]
    fn test_numeric_fields_keep_exact_text() {
        let fx = Fixture::new();
        let path = fx.layout.asset_info_path("ethereum", ADDR);
        fx.write_raw(
            &path,
            r#"{"type":"wrong","supply":123456789012345678901234567890,"rate":1.10,"decimals":18}"#,
        );

        let entity = fx.entity(path.clone());
        assert_eq!(fix_asset_info(&entity).unwrap(), FixOutcome::Rewritten);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("    \"supply\": 123456789012345678901234567890,\n"));
        assert!(text.contains("    \"rate\": 1.10,\n"));
        assert!(text.contains("    \"decimals\": 18,\n"));
    }

    #[test]
    fn test_correct_descriptor_is_not_written() {
        let fx = Fixture::new();
        let path = fx.layout.asset_info_path("ethereum", ADDR);
        let raw = format!(
            r#"{{"type":"ERC20","id":"{0}","explorer":"https://ETHERSCAN.io/token/{0}"}}"#,
            ADDR
        );
        fx.write_raw(&path, &raw);

        let entity = fx.entity(path.clone());
        assert_eq!(fix_asset_info(&entity).unwrap(), FixOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), raw);
    }

    #[test]
    fn test_second_run_is_noop() {
        let fx = Fixture::new();
        let path = fx.layout.asset_info_path("tron", "1002000");
        fx.write_json(&path, &json!({ "name": "BitTorrent", "type": "trc20" }));

        let entity = fx.entity(path.clone());
        assert_eq!(fix_asset_info(&entity).unwrap(), FixOutcome::Rewritten);
        let first = fs::read(&path).unwrap();

        let info = load(&path);
        assert_eq!(info.kind(), Some("TRC10"));
        assert_eq!(info.explorer(), Some("https://tronscan.io/#/token/1002000"));

        assert_eq!(fix_asset_info(&entity).unwrap(), FixOutcome::Unchanged);
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_missing_type_gets_registry_tag() {
        let fx = Fixture::new();
        let path = fx.layout.asset_info_path("smartchain", ADDR);
        fx.write_json(&path, &json!({ "name": "Token" }));

        let entity = fx.entity(path.clone());
        fix_asset_info(&entity).unwrap();
        assert_eq!(load(&path).kind(), Some("BEP20"));
    }

    #[test]
    fn test_expected_type_tag_prefers_registry_tag() {
        assert_eq!(expected_type_tag(60, ADDR, "bep20"), "ERC20");
        assert_eq!(expected_type_tag(195, "1002000", ""), "TRC10");
    }

    #[test]
    fn test_expected_type_tag_falls_back_to_uppercase() {
        let bitcoin = assetfix_registry::chain_by_handle("bitcoin").unwrap();
        assert_eq!(expected_type_tag(bitcoin.id, "sat", "brc20"), "BRC20");
        assert_eq!(expected_type_tag(bitcoin.id, "sat", "ordinal-ß"), "ORDINAL-SS");
        assert_eq!(expected_type_tag(bitcoin.id, "sat", ""), "");
    }

    #[test]
    fn test_unsupported_explorer_aborts_without_write() {
        let fx = Fixture::new();
        let path = fx.layout.asset_info_path("bitcoin", "sat");
        fx.write_raw(&path, r#"{"type":"brc20"}"#);

        let entity = fx.entity(path.clone());
        assert!(matches!(
            fix_asset_info(&entity),
            Err(AssetfixError::UnsupportedExplorer { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"type":"brc20"}"#);
    }
}
