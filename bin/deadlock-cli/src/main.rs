// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # deadlock
//!
//! Command-line interface for resource-allocation deadlock detection.
//!
//! ## Usage
//! ```bash
//! # Analyse one or more snapshots
//! deadlock analyse state.txt other.json --output json
//!
//! # Show the matrices of a snapshot
//! deadlock inspect state.txt
//!
//! # Check a snapshot parses and validates
//! deadlock validate state.txt
//!
//! # Re-encode a snapshot
//! deadlock convert state.txt --to json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "deadlock",
    about = "Detect deadlock in process/resource allocation snapshots",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Input format: auto, text, json (overrides the config file).
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse snapshots for deadlock.
    Analyse {
        /// Snapshot files to analyse.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: text or json.
        #[arg(short, long)]
        output: Option<String>,

        /// Maximum number of snapshots analysed at once.
        #[arg(short = 'j', long)]
        max_concurrency: Option<usize>,

        /// Omit the finish order from reports.
        #[arg(long)]
        no_finish_order: bool,

        /// Omit per-process shortfalls from reports.
        #[arg(long)]
        no_shortfalls: bool,
    },

    /// Print the matrices and per-resource totals of a snapshot.
    Inspect {
        /// Snapshot file.
        file: PathBuf,
    },

    /// Parse and validate a snapshot without analysing it.
    Validate {
        /// Snapshot file.
        file: PathBuf,
    },

    /// Re-encode a snapshot in another format.
    Convert {
        /// Snapshot file.
        file: PathBuf,

        /// Target format: text or json.
        #[arg(short, long)]
        to: String,

        /// Output file (defaults to stdout).
        #[arg(short = 'O', long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let mut config = commands::load_config(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::Analyse {
            files,
            output,
            max_concurrency,
            no_finish_order,
            no_shortfalls,
        } => {
            if let Some(output) = output {
                config.output = output;
            }
            if max_concurrency.is_some() {
                config.max_concurrency = max_concurrency;
            }
            config.show_finish_order &= !no_finish_order;
            config.show_shortfalls &= !no_shortfalls;
            commands::analyse::execute(config, files).await
        }
        Commands::Inspect { file } => commands::inspect::execute(&config, file),
        Commands::Validate { file } => commands::validate::execute(&config, file),
        Commands::Convert { file, to, out } => commands::convert::execute(&config, file, to, out),
    }
}
