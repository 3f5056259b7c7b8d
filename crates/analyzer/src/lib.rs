// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # analyzer
//!
//! Glues the snapshot loader and the detection engine into one pipeline:
//!
//! ```text
//! file ──SnapshotLoader──▶ Snapshot ──detect──▶ DetectionResult ──▶ Analysis
//! ```
//!
//! Load and validation failures stop the pipeline before detection; a
//! snapshot that does not validate is never analysed.
//!
//! # Batch Analysis
//! Independent snapshots share no state, so [`Analyzer::analyse_batch`]
//! runs each one as a blocking task on the `tokio` runtime, bounded by the
//! configured concurrency, and returns results in input order.

mod config;
mod error;
mod metrics;
mod pipeline;
mod report;

pub use config::{AnalyzerConfig, OutputFormat};
pub use error::AnalyzerError;
pub use metrics::{AnalysisMetrics, BatchSummary};
pub use pipeline::{Analysis, Analyzer};
pub use report::AnalysisReport;
