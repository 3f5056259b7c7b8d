// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Serialisable per-snapshot reports.

use crate::{Analysis, AnalyzerConfig};
use detection_engine::{Shortfall, Verdict};
use std::collections::BTreeSet;

/// A machine-readable view of one [`Analysis`], filtered by the config's
/// `show_*` options.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnalysisReport {
    /// Input file, if the snapshot came from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub verdict: Verdict,
    pub deadlocked: bool,
    pub processes: usize,
    pub resources: usize,
    pub blocked_processes: BTreeSet<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_order: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortfalls: Option<Vec<Shortfall>>,
    pub passes: usize,
    pub load_ms: f64,
    pub detect_ms: f64,
}

impl AnalysisReport {
    pub fn new(analysis: &Analysis, config: &AnalyzerConfig) -> Self {
        let result = &analysis.result;
        Self {
            source: analysis.source.as_ref().map(|p| p.display().to_string()),
            verdict: result.verdict(),
            deadlocked: result.deadlocked,
            processes: analysis.snapshot.process_count(),
            resources: analysis.snapshot.resource_count(),
            blocked_processes: result.blocked_processes.clone(),
            finish_order: config
                .show_finish_order
                .then(|| result.finish_order.clone()),
            shortfalls: config.show_shortfalls.then(|| analysis.shortfalls()),
            passes: result.passes,
            load_ms: analysis.metrics.load_duration.as_secs_f64() * 1000.0,
            detect_ms: analysis.metrics.detect_duration.as_secs_f64() * 1000.0,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Analyzer;
    use snapshot_model::Snapshot;

    fn deadlocked() -> Snapshot {
        Snapshot::new(2, 1, vec![0], vec![vec![1], vec![1]], vec![vec![1], vec![1]]).unwrap()
    }

    #[test]
    fn test_report_fields() {
        let config = AnalyzerConfig::default();
        let analysis = Analyzer::new(config.clone()).analyse_snapshot(deadlocked());
        let report = AnalysisReport::new(&analysis, &config);
        assert_eq!(report.verdict, Verdict::Deadlock);
        assert_eq!(report.processes, 2);
        assert_eq!(report.blocked_processes.len(), 2);
        assert_eq!(report.finish_order, Some(vec![]));
        assert_eq!(report.shortfalls.as_ref().map(Vec::len), Some(2));
        assert!(report.source.is_none());
    }

    #[test]
    fn test_report_respects_show_flags() {
        let config = AnalyzerConfig {
            show_finish_order: false,
            show_shortfalls: false,
            ..Default::default()
        };
        let analysis = Analyzer::new(config.clone()).analyse_snapshot(deadlocked());
        let json = AnalysisReport::new(&analysis, &config).to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["verdict"], "deadlock present");
        assert_eq!(v["resources"], 1);
        assert!(v.get("finish_order").is_none());
        assert!(v.get("shortfalls").is_none());
        assert!(v.get("source").is_none());
    }
}
