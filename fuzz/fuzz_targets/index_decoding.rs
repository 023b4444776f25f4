// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the index wire format.
//!
//! Arbitrary bytes must decode to entries or a decode error, never a panic.
//! Anything that decodes must survive re-encoding unchanged.

#![no_main]

use docql_search::{decode_index, IndexFetchError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    match decode_index(json) {
        Ok(entries) => {
            for entry in &entries {
                // Member entries always carry both halves of the parent
                assert_eq!(entry.parent_name().is_some(), entry.parent_kind().is_some());
            }
            let encoded = serde_json::to_string(&entries).unwrap();
            assert_eq!(decode_index(&encoded).unwrap(), entries);
        }
        Err(err) => assert!(matches!(err, IndexFetchError::Decode(_))),
    }
});
