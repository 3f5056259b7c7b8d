// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Analysis timing and batch counters.

use std::time::Duration;

/// Timing for a single snapshot analysis.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct AnalysisMetrics {
    /// Time spent reading, parsing and validating the snapshot.
    pub load_duration: Duration,
    /// Time spent in the detection engine.
    pub detect_duration: Duration,
    /// Reduction passes the engine needed.
    pub passes: usize,
}

impl AnalysisMetrics {
    /// Total wall-clock time.
    pub fn total_duration(&self) -> Duration {
        self.load_duration + self.detect_duration
    }

    /// Returns a one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "load {:.3} ms, detect {:.3} ms, {} passes",
            self.load_duration.as_secs_f64() * 1000.0,
            self.detect_duration.as_secs_f64() * 1000.0,
            self.passes,
        )
    }
}

/// Outcome counts over a batch of snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct BatchSummary {
    /// Snapshots submitted.
    pub total: usize,
    /// Snapshots found deadlocked.
    pub deadlocked: usize,
    /// Snapshots with no deadlock.
    pub clean: usize,
    /// Snapshots that failed to load.
    pub failed: usize,
}

impl BatchSummary {
    /// Records one analysed snapshot.
    pub fn record(&mut self, deadlocked: bool) {
        self.total += 1;
        if deadlocked {
            self.deadlocked += 1;
        } else {
            self.clean += 1;
        }
    }

    /// Records one snapshot that could not be analysed.
    pub fn record_failure(&mut self) {
        self.total += 1;
        self.failed += 1;
    }

    /// `true` if every snapshot was analysed.
    pub fn all_loaded(&self) -> bool {
        self.failed == 0
    }

    /// Returns a one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} snapshots: {} deadlocked, {} clean, {} failed",
            self.total, self.deadlocked, self.clean, self.failed,
        )
    }
}
