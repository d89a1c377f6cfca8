// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command implementation for appbuild.

use anyhow::Context;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::env::EnvArgs;
use crate::config::Config;
use crate::env::dotenv::load_env_file;
use crate::env::{ClientEnv, EnvProjector, current_env};
use crate::error::{AppBuildResult, Result, bail_out};

/// Which `.env` file to read, if any.
fn env_file_path(args: &EnvArgs, config: &Config) -> Option<PathBuf> {
    if args.no_env_file {
        return None;
    }
    match &args.env_file {
        Some(path) => Some(path.clone()),
        None if config.env.load_env_file => Some(config.env.env_file.clone()),
        None => None,
    }
}

/// Merges the selected `.env` file into `ambient`.
///
/// # Errors
///
/// Returns `AppBuildError::Bailed` if an explicit `--env-file` does not
/// exist, or `AppBuildError::EnvFile` if the file cannot be read or parsed.
pub fn merge_env_file(
    args: &EnvArgs,
    config: &Config,
    ambient: &mut BTreeMap<String, String>,
) -> AppBuildResult<()> {
    let Some(path) = env_file_path(args, config) else {
        debug!("env file loading disabled");
        return Ok(());
    };

    if args.env_file.is_some() && !path.exists() {
        return Err(bail_out(format!("env file not found: {}", path.display())));
    }

    load_env_file(&path, ambient)?;
    Ok(())
}

/// Projects `ambient` with the configured prefix and mode.
#[must_use]
pub fn project_env(config: &Config, ambient: &BTreeMap<String, String>) -> ClientEnv {
    EnvProjector::new(config.env.prefix.clone()).project(ambient, config.env.mode)
}

/// Renders the command output for an already-collected ambient set.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_env(
    args: &EnvArgs,
    config: &Config,
    ambient: &BTreeMap<String, String>,
) -> Result<String> {
    let client_env = project_env(config, ambient);
    info!(
        mode = %config.env.mode,
        prefix = %config.env.prefix,
        variables = client_env.len() - 1,
        "projected client environment"
    );

    let output = match (args.define, args.pretty) {
        (true, true) => serde_json::to_string_pretty(&client_env.to_define()?),
        (true, false) => serde_json::to_string(&client_env.to_define()?),
        (false, true) => serde_json::to_string_pretty(&client_env),
        (false, false) => client_env.to_json(),
    }
    .context("failed to serialize client environment")?;

    Ok(output)
}

/// Main handler for env command.
///
/// # Errors
///
/// Returns an error if the env file cannot be read or the record cannot be
/// serialized.
pub fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    let mut ambient = current_env();
    merge_env_file(args, config, &mut ambient)?;
    println!("{}", render_env(args, config, &ambient)?);
    Ok(())
}
