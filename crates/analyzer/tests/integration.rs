// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: snapshot file → loader → validation → detection.
//!
//! These exercise all four library crates together on the files in
//! `tests/data/`, including inputs that must be rejected before detection.

use analyzer::{AnalysisReport, Analyzer, AnalyzerConfig, AnalyzerError, BatchSummary};
use detection_engine::{detect, Verdict};
use snapshot_format::{FormatError, ParseError, SnapshotFormat, SnapshotLoader};
use snapshot_model::ValidationError;
use std::collections::BTreeSet;
use std::path::PathBuf;

// ── Helpers ────────────────────────────────────────────────────

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn analyzer() -> Analyzer {
    Analyzer::new(AnalyzerConfig {
        max_concurrency: Some(2),
        ..Default::default()
    })
}

fn set(items: &[usize]) -> BTreeSet<usize> {
    items.iter().copied().collect()
}

// ── Single-file pipeline ───────────────────────────────────────

#[test]
fn test_reference_no_deadlock() {
    let a = analyzer().analyse_path(&data("no_deadlock.txt")).unwrap();
    assert_eq!(a.result.verdict(), Verdict::NoDeadlock);
    assert_eq!(a.result.finish_order, vec![0, 1]);
    assert_eq!(a.source, Some(data("no_deadlock.txt")));
}

#[test]
fn test_reference_deadlock() {
    let a = analyzer().analyse_path(&data("deadlock.txt")).unwrap();
    assert!(a.result.deadlocked);
    assert_eq!(a.result.blocked_processes, set(&[0, 1]));
    assert_eq!(a.shortfalls().len(), 2);
}

#[test]
fn test_textbook_with_comments() {
    let a = analyzer().analyse_path(&data("textbook.txt")).unwrap();
    assert_eq!(a.snapshot.process_count(), 5);
    assert_eq!(a.snapshot.total_units(), vec![7, 2, 6]);
    assert!(a.result.deadlocked);
    assert_eq!(a.result.blocked_processes, set(&[1, 2, 3, 4]));
}

#[test]
fn test_json_partial_deadlock() {
    let a = analyzer().analyse_path(&data("partial.json")).unwrap();
    assert!(a.result.deadlocked);
    assert_eq!(a.result.blocked_processes, set(&[0, 1]));
    assert_eq!(a.result.finish_order, vec![2]);
}

#[test]
fn test_malformed_row_never_reaches_detection() {
    let err = analyzer().analyse_path(&data("malformed.txt")).unwrap_err();
    match err {
        AnalyzerError::Load {
            source: FormatError::Parse(ParseError::TokenCount { line, expected, found, .. }),
            ..
        } => {
            assert_eq!(line, 7);
            assert_eq!(expected, 1);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_negative_value_is_validation_error() {
    let err = analyzer().analyse_path(&data("negative.txt")).unwrap_err();
    assert!(matches!(
        err,
        AnalyzerError::Load {
            source: FormatError::Validation(ValidationError::NegativeValue { .. }),
            ..
        }
    ));
}

#[test]
fn test_forced_format_overrides_extension() {
    let analyzer = Analyzer::new(AnalyzerConfig {
        format: "text".into(),
        ..Default::default()
    });
    let err = analyzer.analyse_path(&data("partial.json")).unwrap_err();
    assert!(matches!(
        err,
        AnalyzerError::Load {
            source: FormatError::Parse(ParseError::MalformedHeader { .. }),
            ..
        }
    ));
}

// ── Cross-format consistency ───────────────────────────────────

#[test]
fn test_text_and_json_agree() {
    let text = SnapshotLoader::load(&data("textbook.txt")).unwrap();
    let json = SnapshotFormat::Json.render(&text.to_raw()).unwrap();
    let reparsed = SnapshotLoader::parse_str(&json, SnapshotFormat::Json).unwrap();
    assert_eq!(reparsed, text);
    assert_eq!(detect(&reparsed), detect(&text));
}

#[test]
fn test_report_json() {
    let config = AnalyzerConfig::default();
    let a = Analyzer::new(config.clone())
        .analyse_path(&data("deadlock.txt"))
        .unwrap();
    let json = AnalysisReport::new(&a, &config).to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["verdict"], "deadlock present");
    assert_eq!(v["blocked_processes"], serde_json::json!([0, 1]));
    assert!(v["source"].as_str().unwrap().ends_with("deadlock.txt"));
}

// ── Batch analysis ─────────────────────────────────────────────

#[tokio::test]
async fn test_batch_preserves_order_and_isolates_failures() {
    let paths = vec![
        data("deadlock.txt"),
        data("malformed.txt"),
        data("no_deadlock.txt"),
        data("partial.json"),
        data("missing.txt"),
    ];
    let results = analyzer().analyse_batch(paths.clone()).await;

    assert_eq!(results.len(), paths.len());
    for ((got, _), want) in results.iter().zip(&paths) {
        assert_eq!(got, want);
    }

    let mut summary = BatchSummary::default();
    for (_, r) in &results {
        match r {
            Ok(a) => summary.record(a.result.deadlocked),
            Err(_) => summary.record_failure(),
        }
    }
    assert_eq!(summary.total, 5);
    assert_eq!(summary.deadlocked, 2);
    assert_eq!(summary.clean, 1);
    assert_eq!(summary.failed, 2);
}

#[tokio::test]
async fn test_batch_matches_sequential() {
    let names = ["deadlock.txt", "no_deadlock.txt", "textbook.txt", "partial.json"];
    let paths: Vec<PathBuf> = names.iter().map(|n| data(n)).collect();
    let batch = analyzer().analyse_batch(paths.clone()).await;

    for ((_, r), path) in batch.iter().zip(&paths) {
        let sequential = analyzer().analyse_path(path).unwrap();
        assert_eq!(r.as_ref().unwrap().result, sequential.result);
    }
}

#[tokio::test]
async fn test_batch_empty() {
    assert!(analyzer().analyse_batch(Vec::new()).await.is_empty());
}
