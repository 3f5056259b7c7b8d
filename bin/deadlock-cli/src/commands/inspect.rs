// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `deadlock inspect` command: display a snapshot's matrices.

use super::{banner, load_snapshot};
use analyzer::AnalyzerConfig;
use std::path::PathBuf;

pub fn execute(config: &AnalyzerConfig, file: PathBuf) -> anyhow::Result<()> {
    let snapshot = load_snapshot(config, &file)?;

    banner("Snapshot Inspector");

    println!("  File:           {}", file.display());
    println!("  Processes:      {}", snapshot.process_count());
    println!("  Resource types: {}", snapshot.resource_count());
    println!();

    let r = snapshot.resource_count();
    let headers: Vec<String> = (0..r).map(|j| format!("R{j}")).collect();
    let width = 6 * r;

    println!(
        "  {:<6} {:<width$}  {:<width$}",
        "",
        "Allocation",
        "Request",
    );
    println!("  {:<6} {}  {}", "", cells(&headers), cells(&headers));
    println!("  {}", "-".repeat(8 + 2 * width));

    for (i, (alloc, req)) in snapshot
        .allocation()
        .iter_rows()
        .zip(snapshot.request().iter_rows())
        .enumerate()
    {
        println!("  {:<6} {}  {}", format!("P{i}"), numbers(alloc), numbers(req));
    }
    println!();

    println!("  {:<10} {}", "Available", numbers(snapshot.available()));
    println!("  {:<10} {}", "Total", numbers(&snapshot.total_units()));
    println!();
    println!("{}", snapshot.summary());

    Ok(())
}

fn cells(items: &[String]) -> String {
    items.iter().map(|s| format!("{s:>5} ")).collect()
}

fn numbers(values: &[u64]) -> String {
    values.iter().map(|v| format!("{v:>5} ")).collect()
}
