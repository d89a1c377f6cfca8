// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Reads this `.env` file instead of `env.env_file`.
    #[arg(long = "env-file", value_name = "PATH", conflicts_with = "no_env_file")]
    pub env_file: Option<PathBuf>,

    /// Does not read any `.env` file.
    #[arg(long = "no-env-file")]
    pub no_env_file: bool,

    /// Prints the define map `{"process.env": "<json>"}` instead of the record.
    #[arg(long)]
    pub define: bool,

    /// Pretty-prints the JSON output.
    #[arg(long)]
    pub pretty: bool,
}
