// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON snapshot format.

use snapshot_model::RawSnapshot;

/// Parses a JSON snapshot. Unknown fields are rejected.
pub fn from_json(json: &str) -> Result<RawSnapshot, serde_json::Error> {
    serde_json::from_str(json)
}

/// Renders a snapshot as pretty-printed JSON.
pub fn to_json(raw: &RawSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let raw = from_json(
            r#"{"processes":2,"resources":1,"available":[0],"allocation":[[1],[0]],"request":[[0],[1]]}"#,
        )
        .unwrap();
        assert_eq!(raw.processes, 2);
        assert_eq!(raw.allocation, vec![vec![1], vec![0]]);
    }

    #[test]
    fn test_from_json_keeps_negative_for_validation() {
        let raw = from_json(
            r#"{"processes":1,"resources":1,"available":[-1],"allocation":[[0]],"request":[[0]]}"#,
        )
        .unwrap();
        assert_eq!(raw.available, vec![-1]);
        assert!(raw.validate().is_err());
    }

    #[test]
    fn test_from_json_missing_field() {
        assert!(from_json(r#"{"processes":1,"resources":1,"available":[0]}"#).is_err());
    }

    #[test]
    fn test_from_json_non_integer() {
        assert!(from_json(
            r#"{"processes":1,"resources":1,"available":[0.5],"allocation":[[0]],"request":[[0]]}"#
        )
        .is_err());
    }

    #[test]
    fn test_to_json_reparses() {
        let raw = from_json(
            r#"{"processes":1,"resources":2,"available":[1,2],"allocation":[[0,1]],"request":[[1,0]]}"#,
        )
        .unwrap();
        let back = from_json(&to_json(&raw).unwrap()).unwrap();
        assert_eq!(back, raw);
    }
}
