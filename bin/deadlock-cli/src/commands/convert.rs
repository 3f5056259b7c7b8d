// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `deadlock convert` command: re-encode a snapshot.
//!
//! The input is validated first, so only analysable snapshots are written.

use super::load_snapshot;
use analyzer::AnalyzerConfig;
use snapshot_format::SnapshotFormat;
use std::path::PathBuf;

pub fn execute(
    config: &AnalyzerConfig,
    file: PathBuf,
    to: String,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let target = SnapshotFormat::from_str_loose(&to)
        .ok_or_else(|| anyhow::anyhow!("unknown target format '{to}'; expected 'text' or 'json'"))?;

    let snapshot = load_snapshot(config, &file)?;
    let rendered = target.render(&snapshot.to_raw())?;

    match out {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .map_err(|e| anyhow::anyhow!("cannot write '{}': {e}", path.display()))?;
            tracing::info!("wrote {} snapshot to {}", target, path.display());
        }
        None if rendered.ends_with('\n') => print!("{rendered}"),
        None => println!("{rendered}"),
    }
    Ok(())
}
