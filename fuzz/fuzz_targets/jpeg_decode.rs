// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The production fuzzing entry: gated worker initialization, then one
//! decode per delivered input.
//!
//! This is the target a driver launches with the `IMAGO_*` variables
//! forwarded. It doubles as the propagation self-test: if the worker exits
//! with the reserved code 3, the driver's forwarding is broken and nothing
//! that follows can be trusted. Fix the driver, not the corpus.

#![no_main]

use imago::{Harness, JpegTarget};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static HARNESS: OnceLock<Harness<JpegTarget>> = OnceLock::new();

/// Benign outcomes (clean decode, recognized rejection) return silently.
/// Anything else panics, and libFuzzer records the triggering input.
fuzz_target!(|data: &[u8]| {
    // One-time initialization: a propagation failure terminates the worker
    // before the first decode.
    let harness = HARNESS.get_or_init(|| Harness::from_env_or_exit(JpegTarget));
    harness.execute(data);
});
