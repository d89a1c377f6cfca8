// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Asset manifest shaping.
//!
//! # Data Flow
//!
//! ```text
//! seed ─────────────┐
//!                   v
//! files [(name, path)...] ──fold, later wins──> files: {name: path}
//!
//! entrypoints["main"] ──drop names matching \.map──> entrypoints: [...]
//!                   |
//!                   v
//!           ShapedManifest { files, entrypoints }
//! ```
//!
//! Shaping is pure: the same inputs always give the same manifest.
//! `files` keeps the slot of a name's first insertion when a later entry
//! overwrites it; `entrypoints` keeps upstream order and duplicates.

pub mod io;

#[cfg(test)]
mod tests;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::types::ManifestConfig;
use crate::error::ConfigError;

/// Default entry point whose files end up in `entrypoints`.
pub const DEFAULT_ENTRYPOINT: &str = "main";

/// Marker identifying source-map files in the default filter.
const SOURCE_MAP_MARKER: &str = ".map";

/// Mapping from logical asset name to output path.
pub type Manifest = IndexMap<String, String>;

/// One emitted file reported by the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Logical asset name, e.g. `main.js`.
    pub name: String,
    /// Output path, e.g. `/static/js/main.1a2b3c4d.js`.
    pub path: String,
}

impl ManifestEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl<N: Into<String>, P: Into<String>> From<(N, P)> for ManifestEntry {
    fn from((name, path): (N, P)) -> Self {
        Self::new(name, path)
    }
}

/// The manifest as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapedManifest {
    pub files: Manifest,
    pub entrypoints: Vec<String>,
}

/// Shapes bundler output into a [`ShapedManifest`].
#[derive(Debug, Clone)]
pub struct ManifestShaper {
    entrypoint: String,
    /// `None` uses the plain `.map` substring check.
    source_map: Option<Regex>,
}

impl Default for ManifestShaper {
    fn default() -> Self {
        Self {
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            source_map: None,
        }
    }
}

impl ManifestShaper {
    /// Creates a shaper for `entrypoint` that drops entry files matching
    /// the `source_map_pattern` regex (unanchored, so it matches anywhere).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the pattern is not a valid regex.
    pub fn new(
        entrypoint: impl Into<String>,
        source_map_pattern: &str,
    ) -> Result<Self, ConfigError> {
        let source_map = Regex::new(source_map_pattern).map_err(|e| ConfigError::InvalidValue {
            section: "manifest".to_string(),
            key: "source_map_pattern".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            entrypoint: entrypoint.into(),
            source_map: Some(source_map),
        })
    }

    /// Creates a shaper from the `[manifest]` section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the pattern is not a valid regex.
    pub fn from_config(config: &ManifestConfig) -> Result<Self, ConfigError> {
        Self::new(config.entrypoint.clone(), &config.source_map_pattern)
    }

    /// Name of the entry point this shaper lists.
    #[must_use]
    pub fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    /// Whether `file_name` is a source map and should be left out of
    /// `entrypoints`.
    #[must_use]
    pub fn is_source_map(&self, file_name: &str) -> bool {
        match &self.source_map {
            Some(pattern) => pattern.is_match(file_name),
            None => file_name.contains(SOURCE_MAP_MARKER),
        }
    }

    /// Shapes the manifest.
    ///
    /// `files` are applied over `seed` in order, each overwriting any
    /// earlier path for the same name. `entry_files` keep their order,
    /// minus source maps.
    pub fn shape<F, E, S>(&self, seed: Manifest, files: F, entry_files: E) -> ShapedManifest
    where
        F: IntoIterator<Item = ManifestEntry>,
        E: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let files = files.into_iter().fold(seed, |mut manifest, entry| {
            manifest.insert(entry.name, entry.path);
            manifest
        });

        let entrypoints: Vec<String> = entry_files
            .into_iter()
            .filter(|name| !self.is_source_map(name.as_ref()))
            .map(|name| name.as_ref().to_string())
            .collect();

        tracing::trace!(
            files = files.len(),
            entrypoints = entrypoints.len(),
            "shaped manifest"
        );

        ShapedManifest { files, entrypoints }
    }

    /// Shapes bundler stats, listing the files of this shaper's entry point.
    ///
    /// A stats file without that entry point yields an empty `entrypoints`.
    #[must_use]
    pub fn shape_stats(&self, seed: Manifest, stats: &io::BuildStats) -> ShapedManifest {
        let entry_files: &[String] = match stats.entrypoints.get(&self.entrypoint) {
            Some(files) => files.as_slice(),
            None => {
                tracing::warn!(
                    entrypoint = %self.entrypoint,
                    available = ?stats.entrypoints.keys().collect::<Vec<_>>(),
                    "entry point not found in stats"
                );
                &[]
            }
        };
        self.shape(seed, stats.files.iter().cloned(), entry_files)
    }
}

/// Shapes with the default `main` entry point and `.map` filter.
///
/// # Example
///
/// ```
/// use appbuild::manifest::{Manifest, ManifestEntry, shape};
///
/// let shaped = shape(
///     Manifest::new(),
///     [ManifestEntry::new("main.js", "/static/js/main.1a2b.js")],
///     ["static/js/main.1a2b.js", "static/js/main.1a2b.js.map"],
/// );
/// assert_eq!(shaped.files["main.js"], "/static/js/main.1a2b.js");
/// assert_eq!(shaped.entrypoints, ["static/js/main.1a2b.js"]);
/// ```
pub fn shape<F, E, S>(seed: Manifest, files: F, entry_files: E) -> ShapedManifest
where
    F: IntoIterator<Item = ManifestEntry>,
    E: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ManifestShaper::default().shape(seed, files, entry_files)
}
