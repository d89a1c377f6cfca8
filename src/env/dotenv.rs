// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env` file loading.
//!
//! Parsing is done by `dotenvy` without touching the process environment;
//! the pairs are merged into the ambient set passed in. Variables already
//! present there are never overwritten.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use tracing::debug;

use crate::error::EnvFileError;

/// Parses `.env` content into key/value pairs.
///
/// A key repeated later in the file replaces the earlier value.
///
/// # Errors
///
/// Returns the first line that is not valid `.env` syntax.
pub fn parse_env_file(content: &str) -> Result<BTreeMap<String, String>, dotenvy::Error> {
    dotenvy::from_read_iter(content.as_bytes()).collect()
}

/// Merges a `.env` file into `ambient` without overriding existing keys.
///
/// Returns the number of variables added. A missing file adds nothing.
///
/// # Errors
///
/// Returns `EnvFileError::Read` if the file exists but cannot be read, or
/// `EnvFileError::Parse` if it contains an invalid line.
pub fn load_env_file(
    path: &Path,
    ambient: &mut BTreeMap<String, String>,
) -> Result<usize, EnvFileError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no env file");
            return Ok(0);
        }
        Err(source) => {
            return Err(EnvFileError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let vars = parse_env_file(&content).map_err(|e| EnvFileError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut added = 0;
    for (key, value) in vars {
        if let Entry::Vacant(slot) = ambient.entry(key) {
            slot.insert(value);
            added += 1;
        }
    }

    debug!(path = %path.display(), added, "loaded env file");
    Ok(added)
}
