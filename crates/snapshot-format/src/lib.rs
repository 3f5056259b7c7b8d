// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # snapshot-format
//!
//! Turns snapshot files into [`Snapshot`](snapshot_model::Snapshot)s and back.
//!
//! Two on-disk formats are supported:
//!
//! - **Text** — the line-oriented reference format:
//!   ```text
//!   Processes: 2
//!   Resources: 1
//!   0
//!   1
//!   0
//!   0
//!   1
//!   ```
//!   (available vector, then P allocation rows, then P request rows).
//! - **JSON** — a serialised [`RawSnapshot`](snapshot_model::RawSnapshot):
//!   `{"processes":2,"resources":1,"available":[0],"allocation":[[1],[0]],"request":[[0],[1]]}`.
//!
//! Parsing produces a raw snapshot; the loader then validates it. A file
//! that fails either step never yields a `Snapshot`, so it can never reach
//! the detection engine.
//!
//! # Example
//! ```
//! use snapshot_format::{SnapshotFormat, SnapshotLoader};
//!
//! let src = "Processes: 1\nResources: 1\n1\n0\n1\n";
//! let snap = SnapshotLoader::parse_str(src, SnapshotFormat::Text).unwrap();
//! assert_eq!(snap.available(), &[1]);
//! ```

mod error;
pub mod json;
mod loader;
pub mod text;

pub use error::{FormatError, ParseError};
pub use loader::{SnapshotFormat, SnapshotLoader};
