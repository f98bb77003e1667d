//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical scripted targets and input fixtures so the
//! classification policy can be exercised without depending on what a real
//! decoder happens to do on a given byte sequence.

#![doc(hidden)]

use crate::config::{ConfigSnapshot, REQUIRED_KEYS};
use crate::outcome::RejectionKind;
use crate::target::{Classification, Target};
use std::fmt;

/// What a [`ScriptedTarget`] does with every input it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedResponse {
    /// Decode "succeeds".
    Accept,
    /// Decode fails with an error inside the recognized set.
    Reject(RejectionKind),
    /// Decode fails with an error outside the recognized set.
    Fail(&'static str),
    /// Decode panics, simulating an unchecked failure in the decoder.
    Panic,
}

/// Error type produced by [`ScriptedTarget`].
#[derive(Debug)]
pub enum ScriptedError {
    Recognized(RejectionKind),
    Novel(&'static str),
}

impl fmt::Display for ScriptedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptedError::Recognized(kind) => write!(f, "scripted {kind} rejection"),
            ScriptedError::Novel(detail) => write!(f, "{detail}"),
        }
    }
}

/// A stand-in decoder whose behavior is chosen by the test.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedTarget {
    response: ScriptedResponse,
}

impl ScriptedTarget {
    pub fn new(response: ScriptedResponse) -> Self {
        Self { response }
    }
}

impl Target for ScriptedTarget {
    type Error = ScriptedError;

    fn name(&self) -> &'static str {
        "scripted"
    }

    fn decode(&self, _input: &[u8]) -> Result<(), ScriptedError> {
        match self.response {
            ScriptedResponse::Accept => Ok(()),
            ScriptedResponse::Reject(kind) => Err(ScriptedError::Recognized(kind)),
            ScriptedResponse::Fail(detail) => Err(ScriptedError::Novel(detail)),
            ScriptedResponse::Panic => panic!("scripted decoder panic"),
        }
    }

    fn classify(&self, error: &ScriptedError) -> Classification {
        match error {
            ScriptedError::Recognized(kind) => Classification::Recognized(*kind),
            ScriptedError::Novel(_) => Classification::Unclassified,
        }
    }
}

/// Snapshot with every required key present and a plausible value.
pub fn snapshot_with_required_keys() -> ConfigSnapshot {
    ConfigSnapshot::from_pairs(
        REQUIRED_KEYS
            .iter()
            .map(|key| (key.to_string(), "2048".to_string())),
    )
}

/// A minimal well-formed JPEG, produced by the encoder behind the same
/// `image` feature the decoder uses. Solid-color 4x4, quality 90.
pub fn well_formed_jpeg() -> Vec<u8> {
    let image = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        4,
        4,
        image::Rgb([12, 64, 200]),
    ));
    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .expect("encoding a solid 4x4 image never fails");
    bytes
}

/// [`well_formed_jpeg`] cut off halfway: valid SOI marker, then silence.
pub fn truncated_jpeg() -> Vec<u8> {
    let mut bytes = well_formed_jpeg();
    bytes.truncate(bytes.len() / 2);
    bytes
}
