// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Line-oriented text snapshot format.
//!
//! # Format
//! ```text
//! Processes: <P>
//! Resources: <R>
//! <R integers: available>
//! <P lines of R integers: allocation>
//! <P lines of R integers: request>
//! ```
//!
//! - Header keys are matched case-insensitively; whitespace around the key
//!   and value is ignored.
//! - Values are whitespace separated.
//! - Blank lines and lines starting with `#` are skipped.
//! - Nothing but blank or comment lines may follow the last request row.
//!
//! The parser is strict about shape (token counts, integers, missing lines)
//! and permissive about values: negative numbers and non-positive header
//! counts are passed through so that validation can reject them with a
//! [`ValidationError`](snapshot_model::ValidationError).

use crate::ParseError;
use snapshot_model::RawSnapshot;

/// Parses the text format into a raw snapshot.
///
/// If either header count is non-positive, row parsing is skipped and the
/// returned snapshot has empty vectors; validation then reports the bad
/// count.
pub fn parse(src: &str) -> Result<RawSnapshot, ParseError> {
    let mut lines = ContentLines::new(src);

    let processes = parse_header(&mut lines, "Processes")?;
    let resources = parse_header(&mut lines, "Resources")?;

    if processes <= 0 || resources <= 0 {
        return Ok(RawSnapshot {
            processes,
            resources,
            available: Vec::new(),
            allocation: Vec::new(),
            request: Vec::new(),
        });
    }

    // Positive here; try_from can only fail on narrow targets.
    let r = usize::try_from(resources).unwrap_or(usize::MAX);

    let available = parse_row(&mut lines, "available vector".into(), r)?;

    let mut allocation = Vec::new();
    for i in 0..processes {
        allocation.push(parse_row(&mut lines, format!("allocation row {i}"), r)?);
    }

    let mut request = Vec::new();
    for i in 0..processes {
        request.push(parse_row(&mut lines, format!("request row {i}"), r)?);
    }

    if let Some((line, _)) = lines.next() {
        return Err(ParseError::TrailingContent { line });
    }

    Ok(RawSnapshot {
        processes,
        resources,
        available,
        allocation,
        request,
    })
}

/// Renders a raw snapshot in the text format.
pub fn to_text(raw: &RawSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("Processes: {}\n", raw.processes));
    out.push_str(&format!("Resources: {}\n", raw.resources));
    write_row(&mut out, &raw.available);
    for row in raw.allocation.iter().chain(&raw.request) {
        write_row(&mut out, row);
    }
    out
}

fn write_row(out: &mut String, row: &[i64]) {
    let cells: Vec<String> = row.iter().map(i64::to_string).collect();
    out.push_str(&cells.join(" "));
    out.push('\n');
}

/// Iterator over non-blank, non-comment lines with 1-based line numbers.
struct ContentLines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    /// Line number of the last physical line consumed.
    consumed: usize,
}

impl<'a> ContentLines<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            inner: src.lines().enumerate(),
            consumed: 0,
        }
    }

    /// Next content line, or `MissingLine` naming what was expected.
    fn require(&mut self, expected: impl FnOnce() -> String) -> Result<(usize, &'a str), ParseError> {
        self.next().ok_or_else(|| ParseError::MissingLine {
            line: self.consumed + 1,
            expected: expected(),
        })
    }
}

impl<'a> Iterator for ContentLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, raw) in self.inner.by_ref() {
            self.consumed = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some((idx + 1, trimmed));
        }
        None
    }
}

fn parse_header(lines: &mut ContentLines<'_>, key: &'static str) -> Result<i64, ParseError> {
    let (line, text) = lines.require(|| format!("'{key}:' header"))?;
    let malformed = || ParseError::MalformedHeader {
        line,
        expected: key,
        found: text.to_string(),
    };

    let (found_key, value) = text.split_once(':').ok_or_else(malformed)?;
    if !found_key.trim().eq_ignore_ascii_case(key) {
        return Err(malformed());
    }

    let value = value.trim();
    value.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
        line,
        field: format!("'{key}' header"),
        token: value.to_string(),
    })
}

fn parse_row(
    lines: &mut ContentLines<'_>,
    field: String,
    expected: usize,
) -> Result<Vec<i64>, ParseError> {
    let (line, text) = lines.require(|| field.clone())?;
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(ParseError::TokenCount {
            line,
            field,
            expected,
            found: tokens.len(),
        });
    }

    tokens
        .iter()
        .map(|token| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
                line,
                field: field.clone(),
                token: (*token).to_string(),
            })
        })
        .collect()
}
