// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for appbuild.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, EnvConfig, ManifestConfig, OutputConfig
//! profiles: mode name -> ProfileOverride
//! ```
//!
//! # Build Modes
//!
//! ```text
//! BuildMode: development (default) | production | test
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Build profile identifier, injected into client code as `NODE_ENV`.
///
/// Parsed the same way everywhere (CLI, TOML, env, `--set`): surrounding
/// whitespace and case are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
    Test,
}

impl BuildMode {
    /// All recognized modes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Development, Self::Production, Self::Test];

    /// The identifier used in configuration files and injected code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }

    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BuildMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl std::str::FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            _ => Err(ConfigError::InvalidValue {
                section: "env".to_string(),
                key: "mode".to_string(),
                message: format!("expected 'development', 'production', or 'test', got '{s}'"),
            }),
        }
    }
}

/// Lint report formatter for the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintFormatter {
    Codeframe,
    #[default]
    Stylish,
}

impl std::fmt::Display for LintFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Codeframe => write!(f, "codeframe"),
            Self::Stylish => write!(f, "stylish"),
        }
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Emit console logs as JSON lines.
    pub log_json: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_json: false,
        }
    }
}

/// Client environment settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Build mode, injected as `NODE_ENV`.
    pub mode: BuildMode,
    /// Variable name prefix exposed to client code (matched case-insensitively).
    pub prefix: String,
    /// `.env` file merged into the ambient variables before projection.
    pub env_file: PathBuf,
    /// Whether to read `env_file` at all.
    pub load_env_file: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            prefix: "REACT_APP".to_string(),
            env_file: PathBuf::from(".env"),
            load_env_file: true,
        }
    }
}

/// Manifest generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// File name of the manifest, relative to `output.path`.
    pub file_name: String,
    /// Entry point whose files are listed under `entrypoints`.
    pub entrypoint: String,
    /// Regex; matching entry files are dropped from `entrypoints`.
    pub source_map_pattern: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            file_name: "manifest.json".to_string(),
            entrypoint: "main".to_string(),
            source_map_pattern: r"\.map".to_string(),
        }
    }
}

/// Build output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory of the build.
    pub path: PathBuf,
    /// URL prefix the emitted assets are served from.
    pub public_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("build"),
            public_path: "/".to_string(),
        }
    }
}

/// Resolved per-mode build profile.
///
/// Plain data describing how the bundler is set up for a mode; see
/// [`crate::config::Config::profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildProfile {
    /// Mode this profile was resolved for.
    pub mode: BuildMode,
    /// Output file name template for scripts.
    pub filename: String,
    /// Skip type checking while transpiling.
    pub transpile_only: bool,
    /// Lint report formatter.
    pub lint_formatter: LintFormatter,
    /// Output directory for media assets, relative to the output path.
    pub media_output_path: String,
    /// File name template for media assets.
    pub asset_name: String,
    /// Images below this size (bytes) are inlined as data URLs.
    pub inline_limit: u64,
    /// Module resolution extensions, in lookup order.
    pub extensions: Vec<String>,
}

impl BuildProfile {
    /// Built-in defaults for a mode.
    #[must_use]
    pub fn for_mode(mode: BuildMode) -> Self {
        let filename = if mode.is_production() {
            "static/js/[name].[contenthash:8].js"
        } else {
            "static/js/bundle.js"
        };
        let lint_formatter = if mode.is_development() {
            LintFormatter::Codeframe
        } else {
            LintFormatter::Stylish
        };

        Self {
            mode,
            filename: filename.to_string(),
            transpile_only: mode.is_development(),
            lint_formatter,
            media_output_path: "static/media".to_string(),
            asset_name: "[name].[hash:8].[ext]".to_string(),
            inline_limit: 10_000,
            extensions: [".tsx", ".ts", ".js"].map(String::from).to_vec(),
        }
    }

    /// `key = value` lines for display.
    #[must_use]
    pub fn format_lines(&self) -> Vec<String> {
        vec![
            format!("mode              = {}", self.mode),
            format!("filename          = {}", self.filename),
            format!("transpile_only    = {}", self.transpile_only),
            format!("lint_formatter    = {}", self.lint_formatter),
            format!("media_output_path = {}", self.media_output_path),
            format!("asset_name        = {}", self.asset_name),
            format!("inline_limit      = {}", self.inline_limit),
            format!("extensions        = {}", self.extensions.join(", ")),
        ]
    }
}
