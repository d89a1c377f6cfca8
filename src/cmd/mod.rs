// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, inis, profile), env, manifest
//! ```
//!
//! The process environment is read here and nowhere else.

pub mod config;
pub mod env;
pub mod manifest;
