// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for appbuild.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. appbuild.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. APPBUILD_* env vars
//! 5. --set section.key=value
//! 6. CLI flags (--mode, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! APPBUILD_ENV__MODE=production     → env.mode = "production"
//! APPBUILD_ENV__PREFIX=VITE         → env.prefix = "VITE"
//! APPBUILD_OUTPUT__PATH=dist        → output.path = "dist"
//! ```
//!
//! # Per-Mode Profile Overrides
//!
//! ```toml
//! [profiles.production]
//! filename = "assets/[name].[contenthash:12].js"
//! inline_limit = 4096
//! ```

pub mod loader;
pub mod merge;
pub mod types;


use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use merge::ProfileOverride;
use types::{BuildMode, BuildProfile, EnvConfig, GlobalConfig, ManifestConfig, OutputConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Client environment options.
    pub env: EnvConfig,
    /// Manifest options.
    pub manifest: ManifestConfig,
    /// Build output options.
    pub output: OutputConfig,
    /// Per-mode profile overrides, keyed by mode name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub profiles: BTreeMap<String, ProfileOverride>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use appbuild::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("appbuild.toml")
    ///     .with_env_prefix("APPBUILD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve the build profile for a mode.
    ///
    /// Starts from [`BuildProfile::for_mode`] and applies `[profiles.<mode>]`
    /// if present.
    #[must_use]
    pub fn profile(&self, mode: BuildMode) -> BuildProfile {
        let base = BuildProfile::for_mode(mode);
        match self.profiles.get(mode.as_str()) {
            Some(override_config) => merge::merge_profile(base, override_config),
            None => base,
        }
    }

    /// Path the manifest is written to: `output.path/manifest.file_name`.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.output.path.join(&self.manifest.file_name)
    }

    /// Validate values that deserialization alone cannot check.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty or padded env prefix, an
    /// invalid source-map pattern, or a profile keyed by an unknown mode.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let prefix = &self.env.prefix;
        if prefix.is_empty() || prefix.trim() != prefix {
            return Err(ConfigError::InvalidValue {
                section: "env".to_string(),
                key: "prefix".to_string(),
                message: format!(
                    "prefix must be non-empty without surrounding whitespace, got '{prefix}'"
                ),
            });
        }

        if let Err(e) = Regex::new(&self.manifest.source_map_pattern) {
            return Err(ConfigError::InvalidValue {
                section: "manifest".to_string(),
                key: "source_map_pattern".to_string(),
                message: e.to_string(),
            });
        }

        for name in self.profiles.keys() {
            let known = BuildMode::ALL.iter().any(|mode| mode.as_str() == name);
            if !known {
                return Err(ConfigError::InvalidValue {
                    section: format!("profiles.{name}"),
                    key: "<mode>".to_string(),
                    message: format!("unknown build mode '{name}'"),
                });
            }
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_env_options(&mut options);
        self.format_manifest_options(&mut options);
        self.format_output_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.log_json".into(), self.global.log_json.to_string());
    }

    fn format_env_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("env.mode".into(), self.env.mode.to_string());
        options.insert("env.prefix".into(), self.env.prefix.clone());
        options.insert(
            "env.env_file".into(),
            self.env.env_file.display().to_string(),
        );
        options.insert(
            "env.load_env_file".into(),
            self.env.load_env_file.to_string(),
        );
    }

    fn format_manifest_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "manifest.file_name".into(),
            self.manifest.file_name.clone(),
        );
        options.insert(
            "manifest.entrypoint".into(),
            self.manifest.entrypoint.clone(),
        );
        options.insert(
            "manifest.source_map_pattern".into(),
            self.manifest.source_map_pattern.clone(),
        );
    }

    fn format_output_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "output.path".into(),
            self.output.path.display().to_string(),
        );
        options.insert(
            "output.public_path".into(),
            self.output.public_path.clone(),
        );
    }
}
