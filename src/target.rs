//! The seam between the harness and the decoder under test.
//!
//! A [`Target`] is the external collaborator: some decoder library whose
//! crate API we call but whose internals we do not own. The harness needs
//! two things from it: run a decode, and say which of its errors mean
//! "malformed input, correctly refused". Everything else about the decoder
//! (options, instrumentation, parallelism) stays on the other side of this
//! trait.

use crate::outcome::RejectionKind;
use std::fmt;

/// Where a target error falls relative to the target's recognized-error set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A declared, expected rejection of bad input.
    Recognized(RejectionKind),
    /// Anything else. Unclassified errors become findings.
    Unclassified,
}

/// A decoder under fuzz.
///
/// # Contract
///
/// - `decode` is invoked exactly once per input sample, with the sample
///   borrowed for the duration of the call. No retries, no options: the
///   adapter must drive the decoder's default, most permissive code path so
///   fuzzing coverage is not artificially narrowed.
/// - `classify` must **fail closed**: any error the adapter does not
///   explicitly list in its recognized set, including variants the decoder
///   library grows later, classifies as [`Classification::Unclassified`].
///   Concretely, the implementing `match` carries a wildcard arm mapping to
///   `Unclassified`, never the other way around.
/// - Panics inside `decode` are part of the contract too: the harness does
///   not catch them, so they surface as findings.
pub trait Target {
    /// The decoder's error type.
    type Error: fmt::Display;

    /// Short stable name, used in diagnostics and finding reports.
    fn name(&self) -> &'static str;

    /// Decode one input sample, discarding the decoded value.
    fn decode(&self, input: &[u8]) -> Result<(), Self::Error>;

    /// Place an error relative to this target's recognized-error set.
    fn classify(&self, error: &Self::Error) -> Classification;
}
