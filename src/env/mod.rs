// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client environment projection.
//!
//! # Architecture
//!
//! ```text
//! current_env() + .env file          (binary boundary only)
//!        |
//!        v
//! ambient: BTreeMap<String, String>
//!        |
//!        v
//! EnvProjector::project(ambient, mode)
//!   seed {NODE_ENV: mode}
//!   + every key starting with prefix (case-insensitive)
//!        |
//!        v
//! ClientEnv --> to_json() / to_define()
//! ```
//!
//! - **Pure**: the ambient set is always passed in, never read here
//! - **Strings only**: values are copied verbatim, no coercion
//! - **Later wins**: a matching key named `NODE_ENV` replaces the seed

pub mod dotenv;


use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::types::BuildMode;

/// Prefix of variables exposed to client code by default.
pub const DEFAULT_PREFIX: &str = "REACT_APP";

/// Key that always carries the build mode.
pub const NODE_ENV: &str = "NODE_ENV";

/// Define-map key the serialized record is injected under.
pub const DEFINE_KEY: &str = "process.env";

/// Variables injected into client code for one build.
///
/// Always contains [`NODE_ENV`]; every other key matched the projector's
/// prefix. Ordered by key so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClientEnv(BTreeMap<String, String>);

impl ClientEnv {
    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The injected build mode.
    #[must_use]
    pub fn node_env(&self) -> &str {
        self.get(NODE_ENV).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a projected record; `NODE_ENV` is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    /// Serializes the record as a JSON object literal.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    /// Builds the define map consumed by the code-injection step:
    /// `{"process.env": "<json object literal>"}`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_define(&self) -> serde_json::Result<BTreeMap<String, String>> {
        Ok(BTreeMap::from([(DEFINE_KEY.to_string(), self.to_json()?)]))
    }
}

/// Selects client-visible variables by name prefix.
///
/// The prefix is anchored at the start of the name and compared ASCII
/// case-insensitively, so `react_app_api` matches `REACT_APP`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvProjector {
    prefix: String,
}

impl Default for EnvProjector {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvProjector {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether `key` starts with the prefix, ignoring ASCII case.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        key.as_bytes()
            .get(..self.prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(self.prefix.as_bytes()))
    }

    /// Projects the ambient variables into a [`ClientEnv`] for `mode`.
    ///
    /// Matching keys are applied in iteration order over a record seeded
    /// with `NODE_ENV = mode`; a repeated name keeps the last value.
    pub fn project<I, K, V>(&self, ambient: I, mode: BuildMode) -> ClientEnv
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = BTreeMap::from([(NODE_ENV.to_string(), mode.as_str().to_string())]);
        for (key, value) in ambient {
            let key = key.as_ref();
            if self.matches(key) {
                record.insert(key.to_string(), value.as_ref().to_string());
            }
        }
        tracing::trace!(prefix = %self.prefix, mode = %mode, count = record.len(), "projected client env");
        ClientEnv(record)
    }
}

/// Projects `ambient` with the default `REACT_APP` prefix.
///
/// # Example
///
/// ```
/// use appbuild::config::types::BuildMode;
/// use appbuild::env::project;
/// use std::collections::BTreeMap;
///
/// let ambient = BTreeMap::from([
///     ("REACT_APP_API".to_string(), "https://api.example.com".to_string()),
///     ("HOME".to_string(), "/home/me".to_string()),
/// ]);
/// let env = project(&ambient, BuildMode::Production);
/// assert_eq!(env.node_env(), "production");
/// assert_eq!(env.get("REACT_APP_API"), Some("https://api.example.com"));
/// assert_eq!(env.get("HOME"), None);
/// ```
pub fn project<I, K, V>(ambient: I, mode: BuildMode) -> ClientEnv
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    EnvProjector::default().project(ambient, mode)
}

/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn current_env() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
