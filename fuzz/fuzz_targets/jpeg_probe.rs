// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Probe fuzzer: the raw decoder boundary, without the worker gate.
//!
//! For local exploratory runs against the adapter itself; no `IMAGO_*`
//! environment required. Decode errors are ignored, while panics, aborts
//! and hangs in the decoder still surface.

#![no_main]

use imago::{JpegTarget, Target};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = JpegTarget.decode(data);
});
