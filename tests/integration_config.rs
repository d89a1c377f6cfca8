// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use appbuild::config::Config;
use appbuild::config::types::{BuildMode, LintFormatter};

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    insta::assert_json_snapshot!(config, @r#"
    {
      "global": {
        "output_log_level": 3,
        "file_log_level": 5,
        "log_json": false
      },
      "env": {
        "mode": "development",
        "prefix": "REACT_APP",
        "env_file": ".env",
        "load_env_file": true
      },
      "manifest": {
        "file_name": "manifest.json",
        "entrypoint": "main",
        "source_map_pattern": "\\.map"
      },
      "output": {
        "path": "build",
        "public_path": "/"
      }
    }
    "#);
}

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
output_log_level = 4
log_json = true

[env]
mode = "production"
prefix = "VITE_"
load_env_file = false

[manifest]
file_name = "asset-manifest.json"
entrypoint = "app"
source_map_pattern = '\.map$'

[output]
path = "dist"
public_path = "/static/"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level.as_u8(), 4);
    assert!(config.global.log_json);
    assert_eq!(config.env.mode, BuildMode::Production);
    assert_eq!(config.env.prefix, "VITE_");
    assert!(!config.env.load_env_file);
    assert_eq!(config.manifest.entrypoint, "app");
    assert_eq!(config.output.public_path, "/static/");
    assert_eq!(
        config.manifest_path(),
        std::path::Path::new("dist").join("asset-manifest.json")
    );
}

#[test]
fn config_parse_invalid_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn config_parse_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

// =============================================================================
// Profiles
// =============================================================================

#[test]
fn config_profile_overrides_apply_to_their_mode_only() {
    let toml = r#"
[profiles.production]
inline_limit = 4096
lint_formatter = "codeframe"

[profiles.test]
extensions = [".js"]
"#;
    let config = Config::parse(toml).unwrap();

    let production = config.profile(BuildMode::Production);
    assert_eq!(production.inline_limit, 4096);
    assert_eq!(production.lint_formatter, LintFormatter::Codeframe);
    assert_eq!(production.filename, "static/js/[name].[contenthash:8].js");

    let test = config.profile(BuildMode::Test);
    assert_eq!(test.extensions, [".js"]);
    assert_eq!(test.inline_limit, 10_000);

    assert_eq!(
        config.profile(BuildMode::Development),
        Config::default().profile(BuildMode::Development)
    );
}

#[test]
fn config_profile_development_lines() {
    let config = Config::default();
    insta::assert_debug_snapshot!(config.profile(BuildMode::Development).format_lines(), @r#"
    [
        "mode              = development",
        "filename          = static/js/bundle.js",
        "transpile_only    = true",
        "lint_formatter    = codeframe",
        "media_output_path = static/media",
        "asset_name        = [name].[hash:8].[ext]",
        "inline_limit      = 10000",
        "extensions        = .tsx, .ts, .js",
    ]
    "#);
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appbuild.toml");
    std::fs::write(&path, "[env]\nmode = \"test\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.env.mode, BuildMode::Test);
}

#[test]
fn config_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn config_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let local = dir.path().join("local.toml");
    std::fs::write(&base, "[env]\nmode = \"production\"\nprefix = \"APP_\"\n").unwrap();
    std::fs::write(&local, "[env]\nmode = \"development\"\n").unwrap();

    let loader = Config::builder()
        .add_toml_file(&base)
        .add_toml_file_optional(dir.path().join("absent.toml"))
        .add_toml_file(&local);
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.env.mode, BuildMode::Development);
    assert_eq!(config.env.prefix, "APP_");
}
