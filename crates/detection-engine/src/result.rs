// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Detection verdicts and diagnostics.

use snapshot_model::Snapshot;
use std::collections::BTreeSet;
use std::fmt;

/// The overall outcome of a detection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Verdict {
    #[serde(rename = "deadlock present")]
    Deadlock,
    #[serde(rename = "no deadlock")]
    NoDeadlock,
}

impl Verdict {
    /// The canonical verdict string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deadlock => "deadlock present",
            Self::NoDeadlock => "no deadlock",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resource type a blocked process is still short of at the fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Shortfall {
    /// Blocked process index.
    pub process: usize,
    /// Resource type index.
    pub resource: usize,
    /// Units the process requests.
    pub requested: u64,
    /// Units left in the work vector once no one else can finish.
    pub available: u64,
}

impl Shortfall {
    /// How many more units would be needed.
    pub fn missing(&self) -> u64 {
        self.requested.saturating_sub(self.available)
    }
}

/// Result of running [`detect`](crate::detect) on one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DetectionResult {
    /// `true` iff at least one process can never finish.
    pub deadlocked: bool,
    /// Processes that can never finish.
    pub blocked_processes: BTreeSet<usize>,
    /// Order in which the other processes finished during reduction.
    pub finish_order: Vec<usize>,
    /// Number of full passes the reduction took.
    pub passes: usize,
    /// Work vector at the fixed point.
    pub final_work: Vec<u64>,
}

impl DetectionResult {
    pub fn verdict(&self) -> Verdict {
        if self.deadlocked {
            Verdict::Deadlock
        } else {
            Verdict::NoDeadlock
        }
    }

    /// Total number of processes analysed.
    pub fn process_count(&self) -> usize {
        self.finish_order.len() + self.blocked_processes.len()
    }

    /// Returns `true` if process `i` finished during reduction.
    pub fn is_finished(&self, i: usize) -> bool {
        i < self.process_count() && !self.blocked_processes.contains(&i)
    }

    /// Explains each blocked process: the resource types whose request
    /// exceeds the final work vector.
    ///
    /// `snapshot` must be the one this result was computed from. Every
    /// blocked process contributes at least one entry.
    pub fn shortfalls(&self, snapshot: &Snapshot) -> Vec<Shortfall> {
        let mut out = Vec::new();
        for &process in &self.blocked_processes {
            let Some(request) = snapshot.request_row(process) else {
                continue;
            };
            for (resource, (&requested, &available)) in
                request.iter().zip(&self.final_work).enumerate()
            {
                if requested > available {
                    out.push(Shortfall {
                        process,
                        resource,
                        requested,
                        available,
                    });
                }
            }
        }
        out
    }

    /// Returns a one-line summary suitable for logging.
    pub fn summary(&self) -> String {
        if self.deadlocked {
            let blocked: Vec<String> =
                self.blocked_processes.iter().map(|i| format!("P{i}")).collect();
            format!(
                "Detection: {} ({} of {} processes blocked: {}; {} passes)",
                self.verdict(),
                self.blocked_processes.len(),
                self.process_count(),
                blocked.join(", "),
                self.passes,
            )
        } else {
            let order: Vec<String> = self.finish_order.iter().map(|i| format!("P{i}")).collect();
            format!(
                "Detection: {} (finish order {}; {} passes)",
                self.verdict(),
                order.join(" → "),
                self.passes,
            )
        }
    }
}
