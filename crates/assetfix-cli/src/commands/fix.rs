//! Registry tree normalization command

use crate::config::FixerConfig;
use anyhow::{bail, Result};
use assetfix_asset::{AssetEntity, RegistryLayout};
use assetfix_core::AssetfixError;
use assetfix_fixer::{FixReport, Normalizer};
use assetfix_registry::chain_by_handle;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub struct FixArgs {
    pub root: PathBuf,
    pub chains: Vec<String>,
    pub max_edge: Option<u32>,
    pub max_bytes: Option<u64>,
}

pub fn run(args: FixArgs) -> Result<()> {
    let mut config = FixerConfig::load(&args.root)?;
    if let Some(max_edge) = args.max_edge {
        config.logo.max_edge = max_edge;
    }
    if let Some(max_bytes) = args.max_bytes {
        config.logo.max_bytes = max_bytes;
    }

    let layout = RegistryLayout::new(&args.root);
    if !layout.blockchains_path().is_dir() {
        bail!(
            "No blockchains directory under {}",
            layout.root().display()
        );
    }

    let normalizer = Normalizer::new(layout, config.logo);
    info!(
        root = %normalizer.layout().root().display(),
        max_edge = normalizer.limits().max_edge,
        max_bytes = normalizer.limits().max_bytes,
        "Fixing registry"
    );

    let report = fix_tree(&normalizer, &args.chains)?;

    println!("{}", report.summary());
    for failure in &report.failures {
        println!("  [failed] {}: {}", failure.entity, failure.error);
    }

    if !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

/// Walk the registry and run every normalizer, continuing past failures
pub fn fix_tree(normalizer: &Normalizer, chains: &[String]) -> Result<FixReport> {
    for handle in chains {
        if chain_by_handle(handle).is_none() {
            return Err(AssetfixError::UnknownChain(handle.clone()).into());
        }
    }

    let layout = normalizer.layout();
    let mut report = FixReport::new();

    for handle in chain_handles(layout, chains)? {
        visit(normalizer, &mut report, layout.chain_info_path(&handle));
        visit(normalizer, &mut report, layout.chain_logo_path(&handle));

        for asset_dir in sub_dirs(&layout.assets_path(&handle))? {
            let folder = visit(normalizer, &mut report, asset_dir.clone());
            let asset_dir = folder
                .as_ref()
                .map(|entity| entity.path().to_path_buf())
                .unwrap_or(asset_dir);

            visit(normalizer, &mut report, asset_dir.join("info.json"));
            visit(normalizer, &mut report, asset_dir.join("logo.png"));
        }

        visit(normalizer, &mut report, layout.tokenlist_path(&handle));
        visit(normalizer, &mut report, layout.tokenlist_extended_path(&handle));
    }

    info!("{}", report.summary());
    Ok(report)
}

/// Run the normalizer on one path and record the result.
///
/// Returns the entity as it stands afterwards, or `None` when the path is
/// missing, unclassifiable, or its run failed.
fn visit(normalizer: &Normalizer, report: &mut FixReport, path: PathBuf) -> Option<AssetEntity> {
    if !path.exists() {
        return None;
    }

    let Some(entity) = normalizer.layout().classify(&path) else {
        debug!(path = %path.display(), "Skipping unrecognized path");
        return None;
    };

    match normalizer.run(entity.clone()) {
        Ok(run) => {
            for action in run.actions.iter().filter(|a| a.outcome.is_change()) {
                debug!(
                    entity = %run.entity,
                    stage = %action.stage,
                    "{}",
                    action.stage.description()
                );
            }
            report.record(&run);
            Some(run.entity)
        }
        Err(e) => {
            error!(entity = %entity, error = %e, "Fix failed");
            report.record_failure(&entity, &e);
            None
        }
    }
}

/// Known chain directories under `blockchains/`, sorted, optionally filtered
fn chain_handles(layout: &RegistryLayout, only: &[String]) -> Result<Vec<String>> {
    let mut handles = Vec::new();

    for dir in sub_dirs(&layout.blockchains_path())? {
        let Some(handle) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if chain_by_handle(handle).is_none() {
            debug!(handle, "Skipping unknown chain directory");
            continue;
        }
        if !only.is_empty() && !only.iter().any(|h| h == handle) {
            continue;
        }
        handles.push(handle.to_string());
    }

    Ok(handles)
}

fn sub_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| AssetfixError::io("read", dir, e))? {
        let path = entry.map_err(|e| AssetfixError::io("read", dir, e))?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
