// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for snapshot construction.

use std::fmt;

/// Which of the two P×R matrices a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixKind {
    Allocation,
    Request,
}

impl MatrixKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allocation => "allocation",
            Self::Request => "request",
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when snapshot invariants are violated.
///
/// Every variant means "this input cannot be analysed". None of them is a
/// system fault, and a snapshot that fails validation never reaches the
/// detection engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The process or resource-type count is zero or negative.
    #[error("{dimension} count must be positive, got {value}")]
    NonPositiveDimension { dimension: &'static str, value: i64 },

    /// The available vector does not have one entry per resource type.
    #[error("available vector has {found} entries, expected {expected}")]
    VectorLength { expected: usize, found: usize },

    /// A matrix does not have one row per process.
    #[error("{matrix} matrix has {found} rows, expected {expected}")]
    RowCount {
        matrix: MatrixKind,
        expected: usize,
        found: usize,
    },

    /// A matrix row does not have one entry per resource type.
    #[error("{matrix} row {row} has {found} entries, expected {expected}")]
    RowLength {
        matrix: MatrixKind,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A unit count is negative.
    #[error("negative value {value} at {field}")]
    NegativeValue { field: String, value: i64 },
}
