// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use collage_document::ParseColorError;

/// Result alias for fallible editor operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors from the editor's I/O surfaces.
///
/// Editing itself never fails; only reading configuration and loading or
/// saving documents can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A config or document file could not be read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Config text is not valid TOML for [`EditorConfig`](crate::EditorConfig).
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// Config could not be written as TOML.
    #[error("failed to write config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    /// Config parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A document could not be serialized or deserialized.
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A background color string could not be parsed.
    #[error("invalid color: {0}")]
    Color(#[from] ParseColorError),
}
