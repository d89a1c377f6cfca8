// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest command arguments.
//!
//! ```text
//! --stats FILE    bundler file list + entry points (required)
//! --seed FILE     initial {name: path} object
//! --output FILE   overrides output.path/manifest.file_name
//! --stdout        print instead of writing
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `manifest` command.
#[derive(Debug, Clone, Args)]
pub struct ManifestArgs {
    /// Bundler stats JSON with `files` and `entrypoints`.
    #[arg(long = "stats", value_name = "FILE")]
    pub stats: PathBuf,

    /// Seed manifest JSON the files are merged over.
    #[arg(long = "seed", value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Writes the manifest here instead of the configured location.
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Prints the manifest to stdout instead of writing it.
    #[arg(long)]
    pub stdout: bool,
}
