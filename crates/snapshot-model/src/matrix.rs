// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Row-major P×R matrix storage.

use std::fmt;

/// A read-only matrix of unit counts, one row per process and one column
/// per resource type.
///
/// Rows are stored contiguously, so [`Matrix::row`] is a slice borrow with
/// no copying.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<u64>,
}

impl Matrix {
    /// Builds a matrix from rows that have already been checked to all be
    /// `cols` long.
    pub(crate) fn from_rows(rows: Vec<Vec<u64>>, cols: usize) -> Self {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * cols);
        for row in rows {
            debug_assert_eq!(row.len(), cols);
            data.extend(row);
        }
        Self {
            rows: n,
            cols,
            data,
        }
    }

    /// Number of rows (processes).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (resource types).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns row `i`, or `None` if out of bounds.
    pub fn row(&self, i: usize) -> Option<&[u64]> {
        if i < self.rows {
            Some(&self.data[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    /// Returns the element at `(i, j)`, or `None` if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<u64> {
        if j < self.cols {
            self.row(i).map(|r| r[j])
        } else {
            None
        }
    }

    /// Iterates over rows in index order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[u64]> + '_ {
        // chunks_exact panics on a zero chunk size.
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Sum of column `j` across all rows (saturating).
    pub fn column_sum(&self, j: usize) -> u64 {
        self.iter_rows()
            .filter_map(|r| r.get(j))
            .fold(0u64, |acc, &v| acc.saturating_add(v))
    }

    /// Copies the matrix back out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.iter_rows().map(<[u64]>::to_vec).collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(u64::to_string).collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
