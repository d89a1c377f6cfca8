// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reading bundler stats and writing the manifest.
//!
//! ```text
//! stats.json                          manifest.json
//! {                                   {
//!   "files": [                          "files": {
//!     {"name": .., "path": ..}            "main.js": "/static/js/main.js"
//!   ],                                  },
//!   "entrypoints": {                    "entrypoints": [
//!     "main": ["..js", "..js.map"]        "static/js/main.js"
//!   }                                   ]
//! }                                   }
//! ```
//!
//! The manifest is written to a temporary file next to the target and
//! renamed into place.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use super::{Manifest, ManifestEntry, ShapedManifest};
use crate::error::ManifestError;

/// Intermediate file list and entry points reported by the bundler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildStats {
    /// Emitted files, in emission order.
    pub files: Vec<ManifestEntry>,
    /// Entry point name to its output file names.
    pub entrypoints: IndexMap<String, Vec<String>>,
}

/// Reads a JSON file into `T`.
///
/// # Errors
///
/// Returns `ManifestError::Read` or `ManifestError::Parse`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Reads bundler stats.
///
/// # Errors
///
/// Returns `ManifestError::Read` if the file cannot be read and
/// `ManifestError::Parse` if it is not valid stats JSON.
pub fn read_stats(path: &Path) -> Result<BuildStats, ManifestError> {
    let stats: BuildStats = read_json(path)?;
    debug!(
        path = %path.display(),
        files = stats.files.len(),
        entrypoints = stats.entrypoints.len(),
        "read build stats"
    );
    Ok(stats)
}

/// Reads a seed manifest: a JSON object of asset name to path.
///
/// # Errors
///
/// Returns `ManifestError::Read` if the file cannot be read and
/// `ManifestError::Parse` if it is not a string-to-string JSON object.
pub fn read_seed(path: &Path) -> Result<Manifest, ManifestError> {
    let seed: Manifest = read_json(path)?;
    debug!(path = %path.display(), entries = seed.len(), "read manifest seed");
    Ok(seed)
}

/// Renders the manifest as pretty JSON with a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_pretty_json(manifest: &ShapedManifest) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    Ok(json)
}

/// File mode of a written manifest on unix.
#[cfg(unix)]
pub const MANIFEST_MODE: u32 = 0o644;

/// Writes the manifest to `path`, creating parent directories.
///
/// # Errors
///
/// Returns `ManifestError::Write` if the directory, temporary file, or
/// final rename fails.
pub fn write_manifest(path: &Path, manifest: &ShapedManifest) -> Result<(), ManifestError> {
    let write_error = |message: String| ManifestError::Write {
        path: path.display().to_string(),
        message,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .map_err(|e| write_error(format!("failed to create {}: {e}", parent.display())))?;

    let json = to_pretty_json(manifest).map_err(|e| write_error(e.to_string()))?;

    let mut file = NamedTempFile::new_in(parent).map_err(|e| write_error(e.to_string()))?;
    file.write_all(json.as_bytes())
        .map_err(|e| write_error(e.to_string()))?;
    // Temp files are created 0600; the manifest is served to other users.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(MANIFEST_MODE))
            .map_err(|e| write_error(e.to_string()))?;
    }
    file.persist(path)
        .map_err(|e| write_error(e.error.to_string()))?;

    debug!(
        path = %path.display(),
        files = manifest.files.len(),
        entrypoints = manifest.entrypoints.len(),
        "wrote manifest"
    );
    Ok(())
}
