// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JPEG decoding via the `image` crate.
//!
//! The adapter pins the format to JPEG (no content sniffing: the campaign
//! targets the JPEG code path, and sniffing would route most mutated inputs
//! to "unknown format" instead of into the parser) and disables the
//! reader's decode limits, because the point is to exercise the decoder's
//! most permissive path. If adversarial dimensions make it try a huge
//! allocation, that is a real finding, not something to pre-filter.
//!
//! # Recognized-error set
//!
//! Derived from `image` 0.25's `ImageError`:
//!
//! | `ImageError` variant | Classification          |
//! |----------------------|-------------------------|
//! | `Decoding(_)`        | `Malformed` (benign)    |
//! | `IoError(_)`         | `Io` (benign)           |
//! | anything else        | unclassified → finding  |
//!
//! `Limits`, `Unsupported`, `Parameter` and `Encoding` are deliberately not
//! recognized: with limits disabled, the format pinned and no encode call in
//! sight, none of them can be produced by well-behaved rejection of bad
//! input, so seeing one means either this adapter's assumptions or the
//! decoder itself broke. Review this table whenever the `image` dependency
//! is bumped.

use crate::outcome::RejectionKind;
use crate::target::{Classification, Target};
use image::{ImageError, ImageFormat, ImageReader};
use std::io::Cursor;

/// JPEG decoder under fuzz.
#[derive(Debug, Default, Clone, Copy)]
pub struct JpegTarget;

impl Target for JpegTarget {
    type Error = ImageError;

    fn name(&self) -> &'static str {
        "jpeg"
    }

    fn decode(&self, input: &[u8]) -> Result<(), ImageError> {
        let mut reader = ImageReader::with_format(Cursor::new(input), ImageFormat::Jpeg);
        reader.no_limits();
        reader.decode().map(|_| ())
    }

    fn classify(&self, error: &ImageError) -> Classification {
        match error {
            ImageError::Decoding(_) => Classification::Recognized(RejectionKind::Malformed),
            ImageError::IoError(_) => Classification::Recognized(RejectionKind::Io),
            // Fail closed: variants not listed above, including ones a
            // future `image` release introduces, are findings.
            _ => Classification::Unclassified,
        }
    }
}
