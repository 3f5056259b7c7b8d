// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The analysis pipeline: load → validate → detect.

use crate::{AnalysisMetrics, AnalyzerConfig, AnalyzerError};
use detection_engine::{DetectionResult, Shortfall};
use snapshot_format::SnapshotLoader;
use snapshot_model::Snapshot;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// One analysed snapshot together with its verdict and timing.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// File the snapshot was loaded from, if any.
    pub source: Option<PathBuf>,
    pub snapshot: Snapshot,
    pub result: DetectionResult,
    pub metrics: AnalysisMetrics,
}

impl Analysis {
    /// Resource shortfalls of each blocked process.
    pub fn shortfalls(&self) -> Vec<Shortfall> {
        self.result.shortfalls(&self.snapshot)
    }
}

/// Runs snapshots through the loader and detection engine.
///
/// # Example
/// ```no_run
/// use analyzer::{Analyzer, AnalyzerConfig};
/// use std::path::Path;
///
/// let analyzer = Analyzer::new(AnalyzerConfig::default());
/// let analysis = analyzer.analyse_path(Path::new("./state.txt")).unwrap();
/// println!("{}", analysis.result.verdict());
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Loads, validates and analyses one snapshot file.
    pub fn analyse_path(&self, path: &Path) -> Result<Analysis, AnalyzerError> {
        let start = Instant::now();
        let format = self.config.resolve_format(path)?;
        let snapshot =
            SnapshotLoader::load_as(path, format).map_err(|source| AnalyzerError::Load {
                path: path.display().to_string(),
                source,
            })?;
        let load_duration = start.elapsed();

        let mut analysis = self.run(snapshot, load_duration);
        analysis.source = Some(path.to_path_buf());
        tracing::info!(
            "{}: {} ({})",
            path.display(),
            analysis.result.verdict(),
            analysis.metrics.summary(),
        );
        Ok(analysis)
    }

    /// Analyses an already validated snapshot.
    pub fn analyse_snapshot(&self, snapshot: Snapshot) -> Analysis {
        self.run(snapshot, Duration::ZERO)
    }

    /// Analyses many files concurrently.
    ///
    /// Each file becomes a blocking task; at most
    /// [`AnalyzerConfig::resolve_concurrency`] run at once. Results come back
    /// in the order of `paths`, and one file failing does not affect the
    /// others.
    pub async fn analyse_batch(
        &self,
        paths: Vec<PathBuf>,
    ) -> Vec<(PathBuf, Result<Analysis, AnalyzerError>)> {
        let limit = self.config.resolve_concurrency();
        tracing::debug!("analysing {} snapshots, concurrency {limit}", paths.len());
        let semaphore = Arc::new(Semaphore::new(limit));

        let mut handles = Vec::with_capacity(paths.len());
        for path in paths {
            let analyzer = self.clone();
            let semaphore = Arc::clone(&semaphore);
            let task_path = path.clone();
            let handle = tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| AnalyzerError::Task(e.to_string()))?;
                tokio::task::spawn_blocking(move || analyzer.analyse_path(&task_path))
                    .await
                    .map_err(|e| AnalyzerError::Task(e.to_string()))?
            });
            handles.push((path, handle));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (path, handle) in handles {
            let result = match handle.await {
                Ok(r) => r,
                Err(e) => Err(AnalyzerError::Task(e.to_string())),
            };
            if let Err(e) = &result {
                tracing::warn!("{e}");
            }
            results.push((path, result));
        }
        results
    }

    fn run(&self, snapshot: Snapshot, load_duration: Duration) -> Analysis {
        let start = Instant::now();
        let result = detection_engine::detect(&snapshot);
        let detect_duration = start.elapsed();

        let metrics = AnalysisMetrics {
            load_duration,
            detect_duration,
            passes: result.passes,
        };
        Analysis {
            source: None,
            snapshot,
            result,
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detection_engine::Verdict;

    #[test]
    fn test_analyse_snapshot() {
        let snap =
            Snapshot::new(2, 1, vec![0], vec![vec![1], vec![0]], vec![vec![0], vec![1]]).unwrap();
        let a = Analyzer::new(AnalyzerConfig::default()).analyse_snapshot(snap);
        assert_eq!(a.result.verdict(), Verdict::NoDeadlock);
        assert_eq!(a.metrics.passes, a.result.passes);
        assert_eq!(a.metrics.load_duration, Duration::ZERO);
        assert!(a.shortfalls().is_empty());
    }

    #[test]
    fn test_analyse_path_rejects_unknown_format() {
        let analyzer = Analyzer::new(AnalyzerConfig {
            format: "xml".into(),
            ..Default::default()
        });
        let err = analyzer.analyse_path(Path::new("state.txt")).unwrap_err();
        assert!(matches!(err, AnalyzerError::Config(_)));
    }
}
