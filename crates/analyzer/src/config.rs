// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Analyzer configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! format = "auto"          # auto | text | json
//! output = "text"          # text | json
//! max_concurrency = 4
//! show_finish_order = true
//! show_shortfalls = true
//! ```

use crate::AnalyzerError;
use snapshot_format::SnapshotFormat;
use std::path::Path;

/// How analysis results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalyzerConfig {
    /// Input format: `"auto"` (by extension), `"text"` or `"json"`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Output format: `"text"` or `"json"`.
    #[serde(default = "default_output")]
    pub output: String,
    /// Maximum snapshots analysed at once in a batch (defaults to online cores).
    pub max_concurrency: Option<usize>,
    /// Whether reports include the finish order.
    #[serde(default = "default_true")]
    pub show_finish_order: bool,
    /// Whether reports include per-process shortfalls.
    #[serde(default = "default_true")]
    pub show_shortfalls: bool,
}

fn default_format() -> String {
    "auto".to_string()
}

fn default_output() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl AnalyzerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, AnalyzerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalyzerError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, AnalyzerError> {
        toml::from_str(toml_str)
            .map_err(|e| AnalyzerError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, AnalyzerError> {
        toml::to_string_pretty(self)
            .map_err(|e| AnalyzerError::Config(format!("TOML serialise error: {e}")))
    }

    /// Resolves the input format for `path`.
    pub fn resolve_format(&self, path: &Path) -> Result<SnapshotFormat, AnalyzerError> {
        if self.format.eq_ignore_ascii_case("auto") {
            return Ok(SnapshotFormat::from_path(path));
        }
        SnapshotFormat::from_str_loose(&self.format).ok_or_else(|| {
            AnalyzerError::Config(format!(
                "unknown input format '{}'; expected 'auto', 'text', or 'json'",
                self.format
            ))
        })
    }

    /// Resolves the output format.
    pub fn output_format(&self) -> Result<OutputFormat, AnalyzerError> {
        match self.output.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AnalyzerError::Config(format!(
                "unknown output format '{other}'; expected 'text' or 'json'"
            ))),
        }
    }

    /// Resolves the batch concurrency limit (never zero).
    pub fn resolve_concurrency(&self) -> usize {
        self.max_concurrency
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4)
            })
            .max(1)
    }

    /// Checks every string option up front.
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        self.resolve_format(Path::new(""))?;
        self.output_format()?;
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            output: default_output(),
            max_concurrency: None,
            show_finish_order: true,
            show_shortfalls: true,
        }
    }
}
