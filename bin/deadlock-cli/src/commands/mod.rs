// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI setup.

pub mod analyse;
pub mod convert;
pub mod inspect;
pub mod validate;

use analyzer::AnalyzerConfig;
use snapshot_model::Snapshot;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialises the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count:
/// warn, info, debug, trace.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the TOML config if one was given, otherwise the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AnalyzerConfig> {
    let config = match path {
        Some(p) => AnalyzerConfig::from_file(p)?,
        None => AnalyzerConfig::default(),
    };
    tracing::debug!("config: {config:?}");
    Ok(config)
}

/// Loads and validates a single snapshot using the configured format.
pub fn load_snapshot(config: &AnalyzerConfig, file: &Path) -> anyhow::Result<Snapshot> {
    let format = config.resolve_format(file)?;
    snapshot_format::SnapshotLoader::load_as(file, format)
        .map_err(|e| anyhow::anyhow!("failed to load '{}': {e}", file.display()))
}

/// Prints the banner used by every command.
pub fn banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║{:^54}║", format!("deadlock · {title}"));
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}

/// Formats process indices as `P0, P3`.
pub fn process_list(indices: impl IntoIterator<Item = usize>, sep: &str) -> String {
    let names: Vec<String> = indices.into_iter().map(|i| format!("P{i}")).collect();
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(sep)
    }
}
