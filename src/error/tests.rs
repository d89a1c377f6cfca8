// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{AppBuildError, AppBuildResult, ConfigError, ManifestError, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "env".to_string(),
        key: "mode".to_string(),
        message: "unknown build mode 'staging'".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'mode' in section '[env]': unknown build mode 'staging'"
    );
}

#[test]
fn test_manifest_error_wraps_into_top_level() {
    let err: AppBuildError = ManifestError::Write {
        path: "build/manifest.json".to_string(),
        message: "disk full".to_string(),
    }
    .into();
    assert_eq!(
        err.to_string(),
        "manifest error: failed to write manifest 'build/manifest.json': disk full"
    );
}

#[test]
fn test_bail_out_message() {
    assert_eq!(bail_out("stop").to_string(), "fatal error: stop");
}

#[test]
fn test_app_build_error_size() {
    // Bailed holds a fat pointer; with the discriminant that is 24 bytes.
    let size = std::mem::size_of::<AppBuildError>();
    assert!(size <= 24, "AppBuildError is {size} bytes, expected <= 24");
}

#[test]
fn test_app_build_result_size() {
    let size = std::mem::size_of::<AppBuildResult<()>>();
    assert!(size <= 24, "AppBuildResult<()> is {size} bytes, expected <= 24");
}
