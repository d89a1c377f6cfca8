// appbuild: Front-end Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        AppBuildError (<= 24 bytes)
//!                  |
//!   +--------+-----+-----+--------+
//!   |        |           |        |
//!   v        v           v        v
//! Bailed   Config    Manifest  EnvFile
//! Box<str>  Box        Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Config    ParseError, InvalidValue
//!   Manifest  Read, Parse, Write
//!   EnvFile   Read, Parse
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Typed result of the command building blocks.
pub type AppBuildResult<T> = std::result::Result<T, AppBuildError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum AppBuildError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Manifest input or output error.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// `.env` file error.
    #[error("env file error: {0}")]
    EnvFile(#[from] Box<EnvFileError>),
}

/// Create a fatal [`AppBuildError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> AppBuildError {
    AppBuildError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AppBuildError {
                fn from(err: $error) -> Self {
                    AppBuildError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ManifestError => Manifest,
    EnvFileError => EnvFile,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration source.
    #[error("failed to parse config '{source_name}': {message}")]
    ParseError {
        source_name: String,
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Manifest Errors ---

/// Errors reading bundler stats or writing the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to read an input file.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid JSON of the expected shape.
    #[error("failed to parse '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the manifest.
    #[error("failed to write manifest '{path}': {message}")]
    Write { path: String, message: String },
}

// --- Env File Errors ---

/// `.env` file errors.
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// The file exists but could not be read.
    #[error("failed to read env file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line is not valid `.env` syntax.
    #[error("failed to parse env file '{path}': {message}")]
    Parse { path: String, message: String },
}

#[cfg(test)]
mod tests;
