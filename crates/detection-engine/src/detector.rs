// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The resource-reduction pass loop.

use crate::DetectionResult;
use snapshot_model::Snapshot;
use std::collections::BTreeSet;

/// Runs deadlock detection on a snapshot.
///
/// Algorithm:
/// 1. `work` starts as a copy of `available`; no process is finished.
/// 2. Scan unfinished processes in ascending index order. A process whose
///    request fits in `work` for every resource type finishes: it is
///    appended to the finish order and its allocation is added to `work`.
/// 3. If the pass finished anyone, scan again from index 0, since released
///    units may unblock processes earlier in the order.
/// 4. Stop at the first pass that finishes nobody. Unfinished processes are
///    blocked; the snapshot is deadlocked iff any are blocked.
///
/// The blocked set does not depend on scan order. The finish order does, and
/// is one valid completion order among possibly several.
pub fn detect(snapshot: &Snapshot) -> DetectionResult {
    let process_count = snapshot.process_count();
    let mut work = snapshot.available().to_vec();
    let mut finished = vec![false; process_count];
    let mut finish_order = Vec::with_capacity(process_count);
    let mut passes = 0;

    loop {
        passes += 1;
        let mut progressed = false;

        let rows = snapshot
            .request()
            .iter_rows()
            .zip(snapshot.allocation().iter_rows())
            .enumerate();
        for (i, (request, allocation)) in rows {
            if finished[i] || !fits(request, &work) {
                continue;
            }
            release(&mut work, allocation);
            finished[i] = true;
            finish_order.push(i);
            progressed = true;
            tracing::trace!(process = i, pass = passes, "process can finish");
        }

        if !progressed {
            break;
        }
    }

    let blocked_processes: BTreeSet<usize> = finished
        .iter()
        .enumerate()
        .filter(|(_, done)| !**done)
        .map(|(i, _)| i)
        .collect();

    let result = DetectionResult {
        deadlocked: !blocked_processes.is_empty(),
        blocked_processes,
        finish_order,
        passes,
        final_work: work,
    };
    tracing::debug!("{}", result.summary());
    result
}

/// `true` if every requested count is covered by `work`.
fn fits(request: &[u64], work: &[u64]) -> bool {
    request.iter().zip(work).all(|(need, free)| need <= free)
}

/// Returns a finished process's holdings to the work vector.
fn release(work: &mut [u64], allocation: &[u64]) {
    for (free, held) in work.iter_mut().zip(allocation) {
        *free = free.saturating_add(*held);
    }
}
