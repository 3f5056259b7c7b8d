// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Snapshot file loading.
//!
//! The loader reads a file, picks a parser from the requested
//! [`SnapshotFormat`] (or the file extension), and validates the result.

use crate::{json, text, FormatError};
use snapshot_model::{RawSnapshot, Snapshot};
use std::fmt;
use std::path::Path;

/// On-disk snapshot encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// The line-oriented reference format.
    Text,
    /// A serialised `RawSnapshot`.
    Json,
}

impl SnapshotFormat {
    /// Picks a format from the file extension: `.json` is JSON, anything
    /// else is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }

    /// Parses a format name (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Parses `src` in this format without validating it.
    pub fn parse(&self, src: &str) -> Result<RawSnapshot, FormatError> {
        match self {
            Self::Text => Ok(text::parse(src)?),
            Self::Json => Ok(json::from_json(src)?),
        }
    }

    /// Renders a snapshot in this format.
    pub fn render(&self, raw: &RawSnapshot) -> Result<String, FormatError> {
        match self {
            Self::Text => Ok(text::to_text(raw)),
            Self::Json => Ok(json::to_json(raw)?),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loads and validates snapshots from files or strings.
///
/// # Example
/// ```no_run
/// use snapshot_format::SnapshotLoader;
/// use std::path::Path;
///
/// let snap = SnapshotLoader::load(Path::new("./state.txt")).unwrap();
/// println!("{}", snap.summary());
/// ```
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Loads a snapshot, choosing the format from the file extension.
    pub fn load(path: &Path) -> Result<Snapshot, FormatError> {
        Self::load_as(path, SnapshotFormat::from_path(path))
    }

    /// Loads a snapshot in an explicit format.
    pub fn load_as(path: &Path, format: SnapshotFormat) -> Result<Snapshot, FormatError> {
        let raw = Self::load_raw(path, format)?;
        let snapshot = raw.validate()?;
        tracing::debug!("loaded {}: {}", path.display(), snapshot.summary());
        Ok(snapshot)
    }

    /// Reads and parses a file without validating it.
    pub fn load_raw(path: &Path, format: SnapshotFormat) -> Result<RawSnapshot, FormatError> {
        let content = std::fs::read_to_string(path).map_err(|source| FormatError::Io {
            path: path.display().to_string(),
            source,
        })?;
        format.parse(&content)
    }

    /// Parses and validates an in-memory snapshot.
    pub fn parse_str(src: &str, format: SnapshotFormat) -> Result<Snapshot, FormatError> {
        Ok(format.parse(src)?.validate()?)
    }
}
