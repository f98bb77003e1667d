// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot verification under adversarial key/value pairs.
//!
//! The setup gate runs before anything else in every worker; if it can be
//! made to panic, a hostile environment kills the campaign at startup with
//! a diagnostic that blames the wrong component.

#![no_main]

use imago::{ConfigSnapshot, REQUIRED_KEYS};
use libfuzzer_sys::fuzz_target;

/// Verification must be total and must agree with a direct check.
fuzz_target!(|pairs: Vec<(String, String)>| {
    let snapshot = ConfigSnapshot::from_pairs(pairs);

    // Property 1: verify_required never panics. It returns Ok or Err
    // for any map whatsoever.
    let verdict = snapshot.verify_required();

    // Property 2: the verdict agrees with a direct membership check.
    let satisfied = REQUIRED_KEYS
        .iter()
        .all(|key| snapshot.get(key).is_some_and(|value| !value.is_empty()));
    assert_eq!(verdict.is_ok(), satisfied);

    // Property 3: every reported key is actually a required key, and the
    // diagnostic renders.
    if let Err(error) = verdict {
        for key in error.missing_keys() {
            assert!(REQUIRED_KEYS.contains(key), "reported non-required key {key}");
        }
        assert!(!error.to_string().is_empty());
    }
});
