// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `deadlock validate` command: parse and validate without detection.

use super::load_snapshot;
use analyzer::AnalyzerConfig;
use std::path::PathBuf;

pub fn execute(config: &AnalyzerConfig, file: PathBuf) -> anyhow::Result<()> {
    let snapshot = load_snapshot(config, &file)?;
    println!(
        "{}: valid ({} processes, {} resource types)",
        file.display(),
        snapshot.process_count(),
        snapshot.resource_count(),
    );
    Ok(())
}
