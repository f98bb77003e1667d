//! The worker harness: gated initialization, then one invocation per input.
//!
//! Construction *is* the initialization check. [`Harness::new`] refuses to
//! produce a value unless the configuration snapshot passes verification,
//! which makes "invoke before initialization" unrepresentable rather than
//! merely forbidden. After that the harness is stateless: each call to
//! [`Harness::run_one`] owns its input for the duration of one invocation
//! and retains nothing, so outcomes cannot bleed between inputs.

use crate::config::{ConfigSnapshot, PropagationError, PROPAGATION_EXIT_CODE};
use crate::outcome::{Outcome, UnclassifiedFailure};
use crate::target::{Classification, Target};

/// A worker that passed the initialization check, bound to one target.
#[derive(Debug)]
pub struct Harness<T> {
    target: T,
}

impl<T: Target> Harness<T> {
    /// Run the initialization check against `snapshot` and, if it passes,
    /// produce a ready harness.
    ///
    /// This is the `Uninitialized → Ready` transition. The snapshot is only
    /// read here; the harness keeps no handle to it, so configuration cannot
    /// be consulted (or silently re-read) mid-run.
    pub fn new(target: T, snapshot: &ConfigSnapshot) -> Result<Self, PropagationError> {
        snapshot.verify_required()?;
        Ok(Self { target })
    }

    /// Worker-process entry: capture the live environment, verify it, and
    /// terminate the process on failure.
    ///
    /// On a broken propagation path this writes one diagnostic line to
    /// stderr and exits with the reserved [`PROPAGATION_EXIT_CODE`], before
    /// any input is processed. Fuzz targets call this from their one-time
    /// initialization hook.
    pub fn from_env_or_exit(target: T) -> Self {
        let snapshot = ConfigSnapshot::capture();
        match Self::new(target, &snapshot) {
            Ok(harness) => harness,
            Err(error) => {
                eprintln!("ERROR: {error}");
                std::process::exit(PROPAGATION_EXIT_CODE);
            }
        }
    }

    /// The decoder this harness drives.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Invoke the target on one input sample and classify what happened.
    ///
    /// Exactly one decode attempt; retrying would corrupt the engine's
    /// mapping of inputs to outcomes. Errors inside the recognized set
    /// become [`Outcome::Rejected`]; everything else becomes
    /// [`Outcome::Failed`]. Panics from the target are not caught here or
    /// anywhere else in the crate.
    pub fn run_one(&self, input: &[u8]) -> Outcome {
        match self.target.decode(input) {
            Ok(()) => Outcome::Success,
            Err(error) => match self.target.classify(&error) {
                Classification::Recognized(kind) => {
                    log::debug!(
                        "{}: rejected {}-byte input ({kind}): {error}",
                        self.target.name(),
                        input.len()
                    );
                    Outcome::Rejected(kind)
                }
                Classification::Unclassified => {
                    Outcome::Failed(UnclassifiedFailure::new(self.target.name(), error.to_string()))
                }
            },
        }
    }

    /// The per-input hook handed to the fuzzing engine.
    ///
    /// Benign outcomes return silently: a clean rejection of malformed
    /// input is the parser working, not a finding. An unclassified failure
    /// panics, which is how a libFuzzer worker reports a finding together
    /// with the triggering input. The match is exhaustive on purpose: adding
    /// an `Outcome` variant forces a decision here.
    pub fn execute(&self, input: &[u8]) {
        match self.run_one(input) {
            Outcome::Success | Outcome::Rejected(_) => {}
            Outcome::Failed(failure) => panic!("{failure}"),
        }
    }
}
