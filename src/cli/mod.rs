// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for appbuild using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! appbuild [global options] <command>
//! version
//! options
//! inis
//! profile
//! env [--env-file PATH] [--no-env-file] [--define]
//! manifest --stats FILE [--seed FILE] [--output FILE | --stdout]
//! ```

pub mod env;
pub mod global;
pub mod manifest;


use crate::cli::env::EnvArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::manifest::ManifestArgs;
use clap::{Parser, Subcommand};

/// Client environment and asset manifest tool for front-end builds.
#[derive(Debug, Parser)]
#[command(
    name = "appbuild",
    author,
    version,
    about = "Front-end build metadata tool",
    long_about = "appbuild Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Projects REACT_APP_* variables into the client environment\n\
                  record and shapes bundler stats into an asset manifest.",
    after_help = "CONFIG FILES:\n\n\
                  appbuild reads `appbuild.toml` from the current directory if\n\
                  present, then every file given with --config, in order. Later\n\
                  files override earlier ones. APPBUILD_<SECTION>__<KEY>\n\
                  environment variables and --set options override files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files used.
    Inis,

    /// Shows the build profile for the mode.
    Profile,

    /// Prints the client environment record.
    Env(EnvArgs),

    /// Writes the asset manifest from bundler stats.
    Manifest(ManifestArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
