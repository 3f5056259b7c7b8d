// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for snapshot parsing and loading.

use snapshot_model::ValidationError;

/// Malformed text input. Every variant carries the 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input ended before a required line.
    #[error("line {line}: missing {expected}")]
    MissingLine { line: usize, expected: String },

    /// A header line is not of the form `<key>: <value>` with the expected key.
    #[error("line {line}: expected '{expected}: <count>', found '{found}'")]
    MalformedHeader {
        line: usize,
        expected: &'static str,
        found: String,
    },

    /// A token is not an integer.
    #[error("line {line}: invalid integer '{token}' in {field}")]
    InvalidInteger {
        line: usize,
        field: String,
        token: String,
    },

    /// A row has the wrong number of tokens.
    #[error("line {line}: {field} has {found} values, expected {expected}")]
    TokenCount {
        line: usize,
        field: String,
        expected: usize,
        found: usize,
    },

    /// Content follows the last request row.
    #[error("line {line}: unexpected content after the request matrix")]
    TrailingContent { line: usize },
}

impl ParseError {
    /// The 1-based line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingLine { line, .. }
            | Self::MalformedHeader { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::TokenCount { line, .. }
            | Self::TrailingContent { line } => *line,
        }
    }
}

/// Errors that can occur when loading a snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The text format is malformed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The JSON format is malformed.
    #[error("invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// The input parsed but violates snapshot invariants.
    #[error("invalid snapshot: {0}")]
    Validation(#[from] ValidationError),
}
