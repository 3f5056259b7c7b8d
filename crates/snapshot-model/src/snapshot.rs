// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Raw and validated snapshots.
//!
//! [`RawSnapshot`] is what a parser produces: declared counts plus signed
//! values, exactly as written in the input. [`RawSnapshot::validate`] checks
//! every invariant once and yields a [`Snapshot`], which is immutable and
//! stores unsigned counts.

use crate::{Matrix, MatrixKind, ValidationError};

/// An unvalidated snapshot, as read from an input file.
///
/// Values are signed so that negative counts in the input can be
/// represented and rejected by validation rather than by the parser.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSnapshot {
    /// Declared number of processes (P).
    pub processes: i64,
    /// Declared number of resource types (R).
    pub resources: i64,
    /// Free units per resource type.
    pub available: Vec<i64>,
    /// Units held, one row per process.
    pub allocation: Vec<Vec<i64>>,
    /// Units still needed, one row per process.
    pub request: Vec<Vec<i64>>,
}

impl RawSnapshot {
    /// Validates the snapshot and converts it into a [`Snapshot`].
    ///
    /// # Checks (in order, first failure wins)
    /// 1. P and R are positive.
    /// 2. `available` has R entries.
    /// 3. `allocation` and `request` each have P rows.
    /// 4. Every row has R entries.
    /// 5. No value is negative.
    pub fn validate(self) -> Result<Snapshot, ValidationError> {
        let p = positive("process", self.processes)?;
        let r = positive("resource", self.resources)?;

        if self.available.len() != r {
            return Err(ValidationError::VectorLength {
                expected: r,
                found: self.available.len(),
            });
        }

        check_row_count(MatrixKind::Allocation, &self.allocation, p)?;
        check_row_count(MatrixKind::Request, &self.request, p)?;
        check_row_lengths(MatrixKind::Allocation, &self.allocation, r)?;
        check_row_lengths(MatrixKind::Request, &self.request, r)?;

        let available = self
            .available
            .iter()
            .enumerate()
            .map(|(j, &v)| non_negative(v, || format!("available[{j}]")))
            .collect::<Result<Vec<_>, _>>()?;
        let allocation = convert_matrix(MatrixKind::Allocation, self.allocation)?;
        let request = convert_matrix(MatrixKind::Request, self.request)?;

        Ok(Snapshot {
            process_count: p,
            resource_count: r,
            available,
            allocation: Matrix::from_rows(allocation, r),
            request: Matrix::from_rows(request, r),
        })
    }
}

fn positive(dimension: &'static str, value: i64) -> Result<usize, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NonPositiveDimension { dimension, value });
    }
    usize::try_from(value).map_err(|_| ValidationError::NonPositiveDimension { dimension, value })
}

fn non_negative(value: i64, field: impl FnOnce() -> String) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::NegativeValue {
        field: field(),
        value,
    })
}

fn check_row_count(
    matrix: MatrixKind,
    rows: &[Vec<i64>],
    expected: usize,
) -> Result<(), ValidationError> {
    if rows.len() != expected {
        return Err(ValidationError::RowCount {
            matrix,
            expected,
            found: rows.len(),
        });
    }
    Ok(())
}

fn check_row_lengths(
    matrix: MatrixKind,
    rows: &[Vec<i64>],
    expected: usize,
) -> Result<(), ValidationError> {
    for (row, values) in rows.iter().enumerate() {
        if values.len() != expected {
            return Err(ValidationError::RowLength {
                matrix,
                row,
                expected,
                found: values.len(),
            });
        }
    }
    Ok(())
}

fn convert_matrix(
    matrix: MatrixKind,
    rows: Vec<Vec<i64>>,
) -> Result<Vec<Vec<u64>>, ValidationError> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.into_iter()
                .enumerate()
                .map(|(j, v)| non_negative(v, || format!("{matrix}[{i}][{j}]")))
                .collect()
        })
        .collect()
}

/// A validated, immutable view of one system state.
///
/// Construct with [`Snapshot::new`] or [`RawSnapshot::validate`]. All
/// accessors are read-only; analysis code that needs scratch state must
/// copy what it uses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    process_count: usize,
    resource_count: usize,
    available: Vec<u64>,
    allocation: Matrix,
    request: Matrix,
}

impl Snapshot {
    /// Builds and validates a snapshot in one step.
    ///
    /// Fails with [`ValidationError`] when P or R is non-positive, any
    /// length disagrees with P or R, or any value is negative.
    pub fn new(
        process_count: i64,
        resource_count: i64,
        available: Vec<i64>,
        allocation: Vec<Vec<i64>>,
        request: Vec<Vec<i64>>,
    ) -> Result<Self, ValidationError> {
        RawSnapshot {
            processes: process_count,
            resources: resource_count,
            available,
            allocation,
            request,
        }
        .validate()
    }

    /// Number of processes (P).
    pub fn process_count(&self) -> usize {
        self.process_count
    }

    /// Number of resource types (R).
    pub fn resource_count(&self) -> usize {
        self.resource_count
    }

    /// Free units per resource type.
    pub fn available(&self) -> &[u64] {
        &self.available
    }

    /// Units currently held by each process.
    pub fn allocation(&self) -> &Matrix {
        &self.allocation
    }

    /// Units each process still needs to complete.
    pub fn request(&self) -> &Matrix {
        &self.request
    }

    /// Allocation row of process `i`.
    pub fn allocation_row(&self, i: usize) -> Option<&[u64]> {
        self.allocation.row(i)
    }

    /// Request row of process `i`.
    pub fn request_row(&self, i: usize) -> Option<&[u64]> {
        self.request.row(i)
    }

    /// Total units per resource type: free plus everything allocated.
    pub fn total_units(&self) -> Vec<u64> {
        self.available
            .iter()
            .enumerate()
            .map(|(j, &free)| free.saturating_add(self.allocation.column_sum(j)))
            .collect()
    }

    /// Converts back to the raw form, e.g. for re-serialisation.
    pub fn to_raw(&self) -> RawSnapshot {
        let signed = |v: &u64| i64::try_from(*v).unwrap_or(i64::MAX);
        let rows = |m: &Matrix| -> Vec<Vec<i64>> {
            m.iter_rows().map(|r| r.iter().map(signed).collect()).collect()
        };
        RawSnapshot {
            processes: self.process_count as i64,
            resources: self.resource_count as i64,
            available: self.available.iter().map(signed).collect(),
            allocation: rows(&self.allocation),
            request: rows(&self.request),
        }
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        let available: Vec<String> = self.available.iter().map(u64::to_string).collect();
        format!(
            "Snapshot: {} processes, {} resource types, available [{}]",
            self.process_count,
            self.resource_count,
            available.join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawSnapshot {
        RawSnapshot {
            processes: 2,
            resources: 2,
            available: vec![1, 0],
            allocation: vec![vec![1, 0], vec![0, 2]],
            request: vec![vec![0, 1], vec![1, 0]],
        }
    }

    #[test]
    fn test_validate_ok() {
        let snap = raw().validate().unwrap();
        assert_eq!(snap.process_count(), 2);
        assert_eq!(snap.resource_count(), 2);
        assert_eq!(snap.available(), &[1, 0]);
        assert_eq!(snap.allocation_row(1), Some(&[0u64, 2][..]));
        assert_eq!(snap.request_row(0), Some(&[0u64, 1][..]));
        assert_eq!(snap.request_row(2), None);
    }

    #[test]
    fn test_zero_processes() {
        let r = RawSnapshot {
            processes: 0,
            ..raw()
        };
        assert_eq!(
            r.validate(),
            Err(ValidationError::NonPositiveDimension {
                dimension: "process",
                value: 0
            })
        );
    }

    #[test]
    fn test_negative_resources() {
        let r = RawSnapshot {
            resources: -3,
            ..raw()
        };
        assert!(matches!(
            r.validate(),
            Err(ValidationError::NonPositiveDimension {
                dimension: "resource",
                ..
            })
        ));
    }

    #[test]
    fn test_available_length_mismatch() {
        let r = RawSnapshot {
            available: vec![1, 0, 0],
            ..raw()
        };
        assert_eq!(
            r.validate(),
            Err(ValidationError::VectorLength {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_missing_request_row() {
        let r = RawSnapshot {
            request: vec![vec![0, 1]],
            ..raw()
        };
        assert_eq!(
            r.validate(),
            Err(ValidationError::RowCount {
                matrix: MatrixKind::Request,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_request_row_too_long() {
        let r = RawSnapshot {
            request: vec![vec![0, 1], vec![1, 0, 0]],
            ..raw()
        };
        assert_eq!(
            r.validate(),
            Err(ValidationError::RowLength {
                matrix: MatrixKind::Request,
                row: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_negative_allocation() {
        let r = RawSnapshot {
            allocation: vec![vec![1, 0], vec![0, -2]],
            ..raw()
        };
        assert_eq!(
            r.validate(),
            Err(ValidationError::NegativeValue {
                field: "allocation[1][1]".into(),
                value: -2
            })
        );
    }

    #[test]
    fn test_negative_available() {
        let r = RawSnapshot {
            available: vec![-1, 0],
            ..raw()
        };
        let err = r.validate().unwrap_err();
        assert_eq!(err.to_string(), "negative value -1 at available[0]");
    }

    #[test]
    fn test_dimension_error_precedes_negative() {
        let r = RawSnapshot {
            available: vec![-1],
            ..raw()
        };
        assert!(matches!(
            r.validate(),
            Err(ValidationError::VectorLength { .. })
        ));
    }

    #[test]
    fn test_new_matches_validate() {
        let a = Snapshot::new(
            2,
            2,
            vec![1, 0],
            vec![vec![1, 0], vec![0, 2]],
            vec![vec![0, 1], vec![1, 0]],
        )
        .unwrap();
        assert_eq!(a, raw().validate().unwrap());
    }

    #[test]
    fn test_total_units() {
        let snap = raw().validate().unwrap();
        assert_eq!(snap.total_units(), vec![2, 2]);
    }

    #[test]
    fn test_to_raw_preserves_contents() {
        let original = raw();
        let snap = original.clone().validate().unwrap();
        assert_eq!(snap.to_raw(), original);
    }

    #[test]
    fn test_summary() {
        let summary = raw().validate().unwrap().summary();
        assert!(summary.contains("2 processes"));
        assert!(summary.contains("[1, 0]"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let json = r#"{"processes":1,"resources":1,"available":[0],
            "allocation":[[0]],"request":[[0]],"max":[[1]]}"#;
        assert!(serde_json::from_str::<RawSnapshot>(json).is_err());
    }

    #[test]
    fn test_deserialize_then_validate() {
        let json = r#"{"processes":1,"resources":2,"available":[3,4],
            "allocation":[[1,1]],"request":[[2,0]]}"#;
        let snap = serde_json::from_str::<RawSnapshot>(json)
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(snap.total_units(), vec![4, 5]);
    }
}
