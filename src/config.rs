// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Worker configuration: snapshot, required keys, propagation check.
//!
//! The driver process launches each worker with a set of `IMAGO_*`
//! environment variables. Whether those variables actually arrive is a
//! property of the *driver's* spawning code, and when it silently breaks,
//! every finding from the campaign becomes suspect (the worker ran with the
//! wrong memory limit, the wrong timeout, the wrong feature flags). So the
//! very first thing a worker does is verify the propagation path and die
//! loudly if it is broken.
//!
//! # Invariants
//!
//! - The environment is read **once**, at [`ConfigSnapshot::capture`].
//!   Nothing in this crate re-reads it later; a mid-run re-read would make
//!   the startup check meaningless.
//! - [`PROPAGATION_EXIT_CODE`] is reserved. No other exit path in this
//!   repository may use it: findings leave the process as panics (libFuzzer
//!   abort / Rust panic exit), driver-side errors in the repro binary use
//!   exit 1, clap usage errors use exit 2.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Namespace of worker configuration variables. Only variables with this
/// prefix are captured: the snapshot is printable (`imago check --json`)
/// and must not carry unrelated process environment.
pub(crate) const ENV_PREFIX: &str = "IMAGO_";

/// Keys that must be present (and non-empty) for the worker to start.
///
/// Values are opaque strings: the driver and the external supervisor own
/// their interpretation, the harness only proves they arrived.
pub const REQUIRED_KEYS: [&str; 2] = ["IMAGO_RSS_LIMIT_MB", "IMAGO_TIMEOUT_SECS"];

/// Reserved exit code for "configuration did not propagate".
///
/// Disjoint from every code that can signal a fuzzing finding, so the driver
/// never files a setup failure into the crash corpus.
pub const PROPAGATION_EXIT_CODE: i32 = 3;

/// Immutable view of the worker's configuration, taken once at startup.
///
/// Keys map to opaque string values. The snapshot is a plain value, so
/// tests build synthetic ones with [`ConfigSnapshot::from_pairs`] instead
/// of mutating the process environment.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ConfigSnapshot {
    values: BTreeMap<String, String>,
}

impl ConfigSnapshot {
    /// Capture the `IMAGO_*` slice of the live process environment.
    ///
    /// Call this exactly once, before the first input is processed.
    pub fn capture() -> Self {
        Self::from_pairs(std::env::vars().filter(|(key, _)| key.starts_with(ENV_PREFIX)))
    }

    /// Build a snapshot from explicit key/value pairs.
    ///
    /// Later duplicates win, matching environment semantics.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            values: pairs.into_iter().collect(),
        }
    }

    /// Look up a configuration value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of captured keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot captured nothing at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Verify that every required key is present and non-empty.
    ///
    /// Reports **all** missing keys, not just the first, so one restart
    /// fixes the whole propagation path. An empty value counts as missing:
    /// a key that arrives without its value is still a broken path.
    pub fn verify_required(&self) -> Result<(), PropagationError> {
        let missing: Vec<&'static str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| self.get(key).is_none_or(str::is_empty))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PropagationError { missing })
        }
    }
}

/// Required configuration did not reach the worker process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationError {
    missing: Vec<&'static str>,
}

impl PropagationError {
    /// The required keys that were absent or empty, in declaration order.
    pub fn missing_keys(&self) -> &[&'static str] {
        &self.missing
    }
}

impl fmt::Display for PropagationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "required configuration did not reach the worker process (missing: {}); \
             fix the driver's propagation path and restart",
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for PropagationError {}
