// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # snapshot-model
//!
//! The in-memory representation of one system state for deadlock analysis:
//! how many processes and resource types exist, how many units of each type
//! are free, what every process holds and what it still needs.
//!
//! # Validation Pipeline
//!
//! ```text
//! RawSnapshot        — as parsed: signed values, declared dimensions.
//!       │  .validate()
//!       ▼
//! Snapshot           — dimensions checked, values non-negative, immutable.
//! ```
//!
//! A [`Snapshot`] can only be obtained through validation, so the detection
//! engine never sees mis-sized or negative input. Once built, it exposes
//! read-only accessors and no mutators.
//!
//! # Example
//! ```
//! use snapshot_model::Snapshot;
//!
//! let snap = Snapshot::new(
//!     2,
//!     1,
//!     vec![0],
//!     vec![vec![1], vec![0]],
//!     vec![vec![0], vec![1]],
//! )
//! .unwrap();
//! assert_eq!(snap.process_count(), 2);
//! assert_eq!(snap.request().row(1), Some(&[1u64][..]));
//! ```

mod error;
mod matrix;
mod snapshot;

pub use error::{MatrixKind, ValidationError};
pub use matrix::Matrix;
pub use snapshot::{RawSnapshot, Snapshot};
