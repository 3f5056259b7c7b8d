// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # detection-engine
//!
//! Decides whether a [`Snapshot`](snapshot_model::Snapshot) is deadlocked
//! using the resource-reduction algorithm (the detection variant of the
//! Banker's safety check).
//!
//! The engine repeatedly looks for an unfinished process whose outstanding
//! request fits in the current work vector, lets it finish, and returns its
//! allocation to the pool. When a full pass finishes nobody, whatever is
//! left is deadlocked.
//!
//! # Properties
//! - Pure: no I/O, no shared state, no mutation of the snapshot.
//! - Total: every valid snapshot yields a [`DetectionResult`]; there is no
//!   error path.
//! - Bounded: at most P + 1 passes of P × R comparisons each.
//!
//! # Example
//! ```
//! use detection_engine::{detect, Verdict};
//! use snapshot_model::Snapshot;
//!
//! let snap = Snapshot::new(2, 1, vec![0], vec![vec![1], vec![1]], vec![vec![1], vec![1]]).unwrap();
//! let result = detect(&snap);
//! assert_eq!(result.verdict(), Verdict::Deadlock);
//! assert_eq!(result.verdict().to_string(), "deadlock present");
//! ```

mod detector;
mod result;

pub use detector::detect;
pub use result::{DetectionResult, Shortfall, Verdict};
