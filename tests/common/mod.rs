//! Shared test fixtures.

#![allow(dead_code)]

use imago::{ConfigSnapshot, REQUIRED_KEYS};

// Re-export canonical test utilities from imago::testing
pub use imago::testing::{
    snapshot_with_required_keys, truncated_jpeg, well_formed_jpeg, ScriptedResponse,
    ScriptedTarget,
};

/// Snapshot with one required key removed.
pub fn snapshot_without(absent: &str) -> ConfigSnapshot {
    ConfigSnapshot::from_pairs(
        REQUIRED_KEYS
            .iter()
            .filter(|key| **key != absent)
            .map(|key| (key.to_string(), "2048".to_string())),
    )
}

/// Bytes that are not JPEG under any reading.
pub fn garbage_input() -> Vec<u8> {
    b"GIF89a definitely not a jpeg \x00\x01\x02".to_vec()
}
