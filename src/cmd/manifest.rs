// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest command implementation for appbuild.

use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

use crate::cli::manifest::ManifestArgs;
use crate::config::Config;
use crate::error::{AppBuildResult, Result};
use crate::manifest::io::{read_seed, read_stats, to_pretty_json, write_manifest};
use crate::manifest::{Manifest, ManifestShaper, ShapedManifest};

/// Reads the seed and stats named by `args` and shapes them.
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed, or if the
/// configured source-map pattern is invalid.
pub fn build_manifest(args: &ManifestArgs, config: &Config) -> AppBuildResult<ShapedManifest> {
    let shaper = ManifestShaper::from_config(&config.manifest)?;

    let seed = match &args.seed {
        Some(path) => read_seed(path)?,
        None => Manifest::new(),
    };
    let stats = read_stats(&args.stats)?;

    Ok(shaper.shape_stats(seed, &stats))
}

/// Where the manifest is written when not printing.
#[must_use]
pub fn output_path(args: &ManifestArgs, config: &Config) -> PathBuf {
    args.output.clone().unwrap_or_else(|| config.manifest_path())
}

/// Main handler for manifest command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be built or written.
pub fn run_manifest_command(args: &ManifestArgs, config: &Config) -> Result<()> {
    let manifest = build_manifest(args, config)?;

    if args.stdout {
        let json = to_pretty_json(&manifest).context("failed to serialize manifest")?;
        print!("{json}");
        return Ok(());
    }

    let path = output_path(args, config);
    write_manifest(&path, &manifest)?;
    info!(
        path = %path.display(),
        files = manifest.files.len(),
        entrypoints = manifest.entrypoints.len(),
        "manifest written"
    );
    Ok(())
}
