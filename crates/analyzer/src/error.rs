// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the analysis pipeline.

/// Errors that can occur while analysing snapshot files.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The snapshot file could not be read, parsed or validated.
    #[error("cannot load '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: snapshot_format::FormatError,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A batch worker task failed to complete.
    #[error("analysis task failed: {0}")]
    Task(String),
}
