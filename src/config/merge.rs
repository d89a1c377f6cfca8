// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build profile merging.
//!
//! ```text
//! BuildProfile::for_mode(mode) + [profiles.<mode>] --> field-by-field merge
//! ```
//!
//! Only explicitly set fields (`Some`) in override replace base values.

use serde::{Deserialize, Serialize};

use super::types::{BuildProfile, LintFormatter};

/// Build profile with optional fields for field-level merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transpile_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lint_formatter: Option<LintFormatter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

/// Merge a profile override over the built-in profile.
///
/// None values are ignored, allowing the base profile to be used.
pub(super) fn merge_profile(base: BuildProfile, override_config: &ProfileOverride) -> BuildProfile {
    BuildProfile {
        mode: base.mode,
        filename: override_config.filename.clone().unwrap_or(base.filename),
        transpile_only: override_config
            .transpile_only
            .unwrap_or(base.transpile_only),
        lint_formatter: override_config
            .lint_formatter
            .unwrap_or(base.lint_formatter),
        media_output_path: override_config
            .media_output_path
            .clone()
            .unwrap_or(base.media_output_path),
        asset_name: override_config.asset_name.clone().unwrap_or(base.asset_name),
        inline_limit: override_config.inline_limit.unwrap_or(base.inline_limit),
        extensions: override_config
            .extensions
            .clone()
            .unwrap_or(base.extensions),
    }
}
