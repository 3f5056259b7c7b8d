// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `deadlock analyse` command: run detection on one or more snapshots.
//!
//! Files are analysed concurrently. A file that fails to load is reported
//! and counted, but does not stop the others.

use super::{banner, process_list};
use analyzer::{Analysis, AnalysisReport, Analyzer, AnalyzerConfig, BatchSummary, OutputFormat};
use std::path::PathBuf;

pub async fn execute(config: AnalyzerConfig, files: Vec<PathBuf>) -> anyhow::Result<()> {
    config.validate()?;
    let output = config.output_format()?;
    let analyzer = Analyzer::new(config.clone());

    let results = analyzer.analyse_batch(files).await;

    let mut summary = BatchSummary::default();
    let mut reports = Vec::new();
    let mut errors = Vec::new();

    if output == OutputFormat::Text {
        banner("Deadlock Analysis");
    }

    for (path, result) in &results {
        match result {
            Ok(analysis) => {
                summary.record(analysis.result.deadlocked);
                match output {
                    OutputFormat::Text => print_analysis(analysis, &config),
                    OutputFormat::Json => reports.push(AnalysisReport::new(analysis, &config)),
                }
            }
            Err(e) => {
                summary.record_failure();
                if output == OutputFormat::Text {
                    println!("  {}", path.display());
                    println!("   Error:        {e}");
                    println!();
                }
                errors.push(serde_json::json!({
                    "source": path.display().to_string(),
                    "error": e.to_string(),
                }));
            }
        }
    }

    match output {
        OutputFormat::Text => println!("  {}", summary.summary()),
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "reports": reports,
                "errors": errors,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    if !summary.all_loaded() {
        anyhow::bail!("{} of {} snapshots could not be analysed", summary.failed, summary.total);
    }
    Ok(())
}

fn print_analysis(analysis: &Analysis, config: &AnalyzerConfig) {
    let result = &analysis.result;
    let name = analysis
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<snapshot>".to_string());

    println!("  {name}");
    println!(
        "   Size:         {} processes × {} resource types",
        analysis.snapshot.process_count(),
        analysis.snapshot.resource_count(),
    );
    println!("   Verdict:      {}", result.verdict());
    if result.deadlocked {
        println!(
            "   Blocked:      {}",
            process_list(result.blocked_processes.iter().copied(), ", ")
        );
    }
    if config.show_finish_order {
        println!(
            "   Finish order: {}",
            process_list(result.finish_order.iter().copied(), " → ")
        );
    }
    if config.show_shortfalls && result.deadlocked {
        println!("   Shortfalls:");
        for s in analysis.shortfalls() {
            println!(
                "     P{} requests {} of R{}, only {} free (short {})",
                s.process,
                s.requested,
                s.resource,
                s.available,
                s.missing(),
            );
        }
    }
    println!("   Timing:       {}", analysis.metrics.summary());
    println!();
}
