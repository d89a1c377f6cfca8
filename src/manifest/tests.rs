// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for manifest shaping and manifest files.

use super::io::{BuildStats, read_seed, read_stats, to_pretty_json, write_manifest};
use super::{Manifest, ManifestEntry, ManifestShaper, ShapedManifest, shape};
use crate::config::types::ManifestConfig;
use crate::error::ManifestError;

fn entries(pairs: &[(&str, &str)]) -> Vec<ManifestEntry> {
    pairs.iter().map(|&(name, path)| ManifestEntry::new(name, path)).collect()
}

fn seed(pairs: &[(&str, &str)]) -> Manifest {
    pairs
        .iter()
        .map(|&(name, path)| (name.to_string(), path.to_string()))
        .collect()
}

#[test]
fn test_empty_inputs_return_seed() {
    let initial = seed(&[("favicon.ico", "/favicon.ico")]);
    let shaped = shape(initial.clone(), Vec::new(), Vec::<String>::new());
    assert_eq!(shaped.files, initial);
    assert!(shaped.entrypoints.is_empty());
}

#[test]
fn test_files_applied_over_seed_in_order() {
    let shaped = shape(
        seed(&[("index.html", "/index.html"), ("main.js", "/old/main.js")]),
        entries(&[
            ("main.js", "/static/js/main.aaaa.js"),
            ("logo.svg", "/static/media/logo.1234.svg"),
            ("main.js", "/static/js/main.bbbb.js"),
        ]),
        Vec::<String>::new(),
    );

    insta::assert_json_snapshot!(shaped.files, @r#"
    {
      "index.html": "/index.html",
      "main.js": "/static/js/main.bbbb.js",
      "logo.svg": "/static/media/logo.1234.svg"
    }
    "#);
}

#[test]
fn test_collision_order_decides_winner() {
    let forward = shape(
        Manifest::new(),
        entries(&[("a.js", "/1"), ("a.js", "/2")]),
        Vec::<String>::new(),
    );
    let reversed = shape(
        Manifest::new(),
        entries(&[("a.js", "/2"), ("a.js", "/1")]),
        Vec::<String>::new(),
    );
    assert_eq!(forward.files["a.js"], "/2");
    assert_eq!(reversed.files["a.js"], "/1");
}

#[test]
fn test_entrypoints_drop_source_maps() {
    let shaped = shape(
        Manifest::new(),
        Vec::new(),
        ["bundle.js", "bundle.js.map", "vendor.js"],
    );
    assert_eq!(shaped.entrypoints, ["bundle.js", "vendor.js"]);
}

#[test]
fn test_source_map_marker_matches_anywhere() {
    let shaped = shape(
        Manifest::new(),
        Vec::new(),
        ["main.js", "foo.map.js", "styles.css.map", "sitemap.xml", "mapper.js"],
    );
    // `.map` anywhere excludes; "sitemap" has no dot before "map"
    assert_eq!(shaped.entrypoints, ["main.js", "sitemap.xml", "mapper.js"]);
}

#[test]
fn test_entrypoints_keep_order_and_duplicates() {
    let files = ["runtime.js", "vendor.js", "main.js", "vendor.js"];
    let shaped = shape(Manifest::new(), Vec::new(), files);
    assert_eq!(shaped.entrypoints, files);

    let mut reordered = files;
    reordered.reverse();
    let shaped = shape(Manifest::new(), Vec::new(), reordered);
    assert_eq!(shaped.entrypoints, ["vendor.js", "main.js", "vendor.js", "runtime.js"]);
}

#[test]
fn test_shape_is_idempotent() {
    let run = || {
        shape(
            seed(&[("seed.txt", "/seed.txt")]),
            entries(&[("main.js", "/static/js/main.js")]),
            ["static/js/main.js", "static/js/main.js.map"],
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn test_custom_source_map_pattern_is_regex() {
    let shaper = ManifestShaper::new("main", r"\.map$").unwrap();
    let shaped = shaper.shape(Manifest::new(), Vec::new(), ["a.js", "a.js.map", "foo.map.js"]);
    assert_eq!(shaped.entrypoints, ["a.js", "foo.map.js"]);
}

#[test]
fn test_invalid_source_map_pattern() {
    let err = ManifestShaper::new("main", "(").unwrap_err();
    assert!(err.to_string().contains("source_map_pattern"), "{err}");
}

#[test]
fn test_shaper_from_default_config_matches_default() {
    let shaper = ManifestShaper::from_config(&ManifestConfig::default()).unwrap();
    assert_eq!(shaper.entrypoint(), "main");
    for name in ["a.js", "a.js.map", "b.map.css", "map.js"] {
        assert_eq!(
            shaper.is_source_map(name),
            ManifestShaper::default().is_source_map(name),
            "{name}"
        );
    }
}

#[test]
fn test_shape_stats_selects_configured_entrypoint() {
    let stats: BuildStats = serde_json::from_str(
        r#"{
            "files": [
                {"name": "main.js", "path": "/static/js/main.1a2b.js"},
                {"name": "admin.js", "path": "/static/js/admin.3c4d.js"}
            ],
            "entrypoints": {
                "main": ["static/js/main.1a2b.js", "static/js/main.1a2b.js.map"],
                "admin": ["static/js/admin.3c4d.js"]
            }
        }"#,
    )
    .unwrap();

    let main = ManifestShaper::default().shape_stats(Manifest::new(), &stats);
    assert_eq!(main.entrypoints, ["static/js/main.1a2b.js"]);
    assert_eq!(main.files.len(), 2);

    let admin = ManifestShaper::new("admin", r"\.map").unwrap();
    let admin = admin.shape_stats(Manifest::new(), &stats);
    assert_eq!(admin.entrypoints, ["static/js/admin.3c4d.js"]);
}

#[test]
fn test_shape_stats_missing_entrypoint_is_empty() {
    let stats = BuildStats {
        files: entries(&[("main.js", "/main.js")]),
        ..BuildStats::default()
    };
    let shaped = ManifestShaper::default().shape_stats(Manifest::new(), &stats);
    assert!(shaped.entrypoints.is_empty());
    assert_eq!(shaped.files["main.js"], "/main.js");
}

#[test]
fn test_manifest_entry_from_tuple() {
    let entry: ManifestEntry = ("main.js", String::from("/main.js")).into();
    assert_eq!(entry, ManifestEntry::new("main.js", "/main.js"));
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn test_pretty_json_shape() {
    let shaped = shape(
        Manifest::new(),
        entries(&[("main.js", "/static/js/main.js")]),
        ["static/js/main.js", "static/js/main.js.map"],
    );
    insta::assert_snapshot!(to_pretty_json(&shaped).unwrap().trim_end(), @r#"
    {
      "files": {
        "main.js": "/static/js/main.js"
      },
      "entrypoints": [
        "static/js/main.js"
      ]
    }
    "#);
}

#[test]
fn test_write_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/build/manifest.json");
    let shaped = ShapedManifest {
        files: seed(&[("main.js", "/main.js")]),
        entrypoints: vec!["main.js".to_string()],
    };

    write_manifest(&path, &shaped).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let back: ShapedManifest = serde_json::from_str(&written).unwrap();
    assert_eq!(back, shaped);
    assert!(written.ends_with('\n'));
}

#[cfg(unix)]
#[test]
fn test_written_manifest_is_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    write_manifest(&path, &ShapedManifest::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, super::io::MANIFEST_MODE);
    assert_eq!(mode & 0o044, 0o044);
}

#[test]
fn test_write_overwrites_existing_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    std::fs::write(&path, "stale").unwrap();

    write_manifest(&path, &ShapedManifest::default()).unwrap();

    let back: ShapedManifest =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, ShapedManifest::default());
}

#[test]
fn test_read_seed_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("seed.json");
    let stats_path = dir.path().join("stats.json");
    std::fs::write(&seed_path, r#"{"z.txt": "/z.txt", "a.txt": "/a.txt"}"#).unwrap();
    std::fs::write(&stats_path, r#"{"entrypoints": {"main": ["main.js"]}}"#).unwrap();

    let seed = read_seed(&seed_path).unwrap();
    assert_eq!(seed.keys().collect::<Vec<_>>(), ["z.txt", "a.txt"]);

    let stats = read_stats(&stats_path).unwrap();
    assert!(stats.files.is_empty());
    assert_eq!(stats.entrypoints["main"], ["main.js"]);
}

#[test]
fn test_read_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    let missing = read_stats(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, ManifestError::Read { .. }));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"files": "nope"}"#).unwrap();
    assert!(matches!(read_stats(&bad).unwrap_err(), ManifestError::Parse { .. }));

    std::fs::write(&bad, r#"{"a": 1}"#).unwrap();
    assert!(matches!(read_seed(&bad).unwrap_err(), ManifestError::Parse { .. }));
}
