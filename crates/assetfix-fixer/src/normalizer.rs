//! Stage dispatch per file kind

use crate::asset_info::fix_asset_info;
use crate::chain_info::fix_chain_info;
use crate::checksum::fix_address_checksum;
use crate::json::fix_json;
use crate::limits::LogoLimits;
use crate::logo::fix_logo;
use crate::report::{EntityRun, FixAction, FixOutcome};
use crate::tokenlist::fix_token_list;
use assetfix_asset::{AssetEntity, FileKind, RegistryLayout};
use assetfix_core::Result;
use std::fmt;

/// One normalization pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    FormatJson,
    AddressChecksum,
    Logo,
    ChainInfo,
    AssetInfo,
    TokenList,
}

impl Stage {
    pub fn description(&self) -> &'static str {
        match self {
            Stage::FormatJson => "Format JSON in canonical form",
            Stage::AddressChecksum => "Rename EVM asset folders to checksum addresses",
            Stage::Logo => "Resize logos over the dimension limit",
            Stage::ChainInfo => "Fix chain info type",
            Stage::AssetInfo => "Fix asset info type, id and explorer",
            Stage::TokenList => "Remove inactive tokens from token lists",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::FormatJson => "format_json",
            Stage::AddressChecksum => "address_checksum",
            Stage::Logo => "logo",
            Stage::ChainInfo => "chain_info",
            Stage::AssetInfo => "asset_info",
            Stage::TokenList => "token_list",
        };
        write!(f, "{}", name)
    }
}

/// Applies the stages that belong to an entity's kind
pub struct Normalizer {
    layout: RegistryLayout,
    limits: LogoLimits,
}

impl Normalizer {
    pub fn new(layout: RegistryLayout, limits: LogoLimits) -> Self {
        Self { layout, limits }
    }

    pub fn layout(&self) -> &RegistryLayout {
        &self.layout
    }

    pub fn limits(&self) -> &LogoLimits {
        &self.limits
    }

    /// Stages for a file kind, in the order they run
    pub fn stages_for(kind: FileKind) -> &'static [Stage] {
        match kind {
            FileKind::AssetFolder => &[Stage::AddressChecksum],
            FileKind::ChainInfoFile => &[Stage::FormatJson, Stage::ChainInfo],
            FileKind::AssetInfoFile => &[Stage::FormatJson, Stage::AssetInfo],
            FileKind::ChainLogoFile | FileKind::AssetLogoFile => &[Stage::Logo],
            FileKind::TokenListFile => &[Stage::TokenList],
        }
    }

    /// Run a single stage against an entity
    pub fn apply(&self, stage: Stage, entity: &AssetEntity) -> Result<FixOutcome> {
        match stage {
            Stage::FormatJson => fix_json(entity),
            Stage::AddressChecksum => fix_address_checksum(entity),
            Stage::Logo => fix_logo(entity, &self.limits),
            Stage::ChainInfo => fix_chain_info(entity),
            Stage::AssetInfo => fix_asset_info(entity),
            Stage::TokenList => fix_token_list(entity, &self.layout),
        }
    }

    /// Run every stage for the entity's kind.
    ///
    /// A rename rebinds the entity so later stages see the new path. The
    /// first failing stage aborts the run; earlier stages keep their writes.
    pub fn run(&self, entity: AssetEntity) -> Result<EntityRun> {
        let mut current = entity;
        let mut actions = Vec::new();

        for &stage in Self::stages_for(current.kind()) {
            let outcome = self.apply(stage, &current)?;
            if let FixOutcome::Renamed(next) = &outcome {
                current = next.clone();
            }
            actions.push(FixAction { stage, outcome });
        }

        Ok(EntityRun {
            entity: current,
            actions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::Fixture;
    use assetfix_asset::AssetDescriptor;
    use assetfix_core::AssetfixError;
    use serde_json::json;
    use std::fs;

    const CHECKSUM: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn normalizer(fx: &Fixture) -> Normalizer {
        Normalizer::new(fx.layout.clone(), LogoLimits::default())
    }

    #[test]
    fn test_stages_for_each_kind() {
        assert_eq!(
            Normalizer::stages_for(FileKind::AssetFolder),
            &[Stage::AddressChecksum]
        );
        assert_eq!(
            Normalizer::stages_for(FileKind::ChainInfoFile),
            &[Stage::FormatJson, Stage::ChainInfo]
        );
        assert_eq!(
            Normalizer::stages_for(FileKind::AssetInfoFile),
            &[Stage::FormatJson, Stage::AssetInfo]
        );
        assert_eq!(Normalizer::stages_for(FileKind::ChainLogoFile), &[Stage::Logo]);
        assert_eq!(Normalizer::stages_for(FileKind::AssetLogoFile), &[Stage::Logo]);
        assert_eq!(
            Normalizer::stages_for(FileKind::TokenListFile),
            &[Stage::TokenList]
        );
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::AddressChecksum.to_string(), "address_checksum");
        assert_eq!(Stage::TokenList.to_string(), "token_list");
        assert!(!Stage::Logo.description().is_empty());
    }

    #[test]
    fn test_folder_run_rebinds_after_rename() {
        let fx = Fixture::new();
        let lower = CHECKSUM.to_ascii_lowercase();
        fx.write_json(
            &fx.layout.asset_info_path("ethereum", &lower),
            &json!({ "name": "Token" }),
        );

        let entity = fx.entity(fx.layout.asset_path("ethereum", &lower));
        let run = normalizer(&fx).run(entity).unwrap();

        assert!(run.renamed());
        assert_eq!(run.entity.asset(), Some(CHECKSUM));
        assert_eq!(run.entity.path(), fx.layout.asset_path("ethereum", CHECKSUM));
        assert!(fx.layout.asset_info_path("ethereum", CHECKSUM).exists());
    }

    #[test]
    fn test_asset_info_run_formats_then_fixes() {
        let fx = Fixture::new();
        let path = fx.layout.asset_info_path("ethereum", CHECKSUM);
        fx.write_raw(&path, r#"{"name":"Token","type":"ERC20"}"#);

        let run = normalizer(&fx).run(fx.entity(path.clone())).unwrap();
        let stages: Vec<_> = run.actions.iter().map(|a| a.stage).collect();
        assert_eq!(stages, vec![Stage::FormatJson, Stage::AssetInfo]);
        assert!(run.actions.iter().all(|a| a.outcome == FixOutcome::Rewritten));

        let info = AssetDescriptor::load(&path).unwrap();
        assert_eq!(info.id(), Some(CHECKSUM));
        assert!(fs::read_to_string(&path).unwrap().ends_with("}\n"));

        let again = normalizer(&fx).run(fx.entity(path)).unwrap();
        assert!(!again.changed());
    }

    #[test]
    fn test_logo_run_uses_limits() {
        let fx = Fixture::new();
        let path = fx.layout.chain_logo_path("ethereum");
        fx.write_png(&path, 80, 40);

        let limits = LogoLimits {
            max_edge: 64,
            ..LogoLimits::default()
        };
        let run = Normalizer::new(fx.layout.clone(), limits)
            .run(fx.entity(path.clone()))
            .unwrap();

        assert!(run.changed());
        assert_eq!(image::image_dimensions(&path).unwrap(), (64, 32));
    }

    #[test]
    fn test_failure_stops_later_stages() {
        let fx = Fixture::new();
        let path = fx.layout.asset_info_path("bitcoin", "sat");
        fx.write_raw(&path, r#"{"type":"coin"}"#);

        let result = normalizer(&fx).run(fx.entity(path.clone()));
        assert!(matches!(
            result,
            Err(AssetfixError::UnsupportedExplorer { .. })
        ));
        // The formatting stage already ran
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n    \"type\": \"coin\"\n}\n"
        );
    }
}
