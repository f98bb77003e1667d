//! Fuzzing front end for image decoders.
//!
//! This crate is the thin, trustworthy layer between a coverage-guided
//! fuzzing engine and an image decoder. It does exactly two jobs, both easy
//! to get subtly wrong:
//!
//! 1. **Configuration-propagation verification.** Before the first input is
//!    processed, the worker confirms that the driver forwarded its tuning
//!    parameters (`IMAGO_*` environment variables). A broken propagation
//!    path terminates the process with a reserved exit code so the driver
//!    can tell "my setup is broken" from "the target crashed".
//! 2. **Outcome classification at the decoder boundary.** Malformed input
//!    being rejected cleanly is the *correct* behavior of a robust parser
//!    and must never pollute the crash corpus; everything else (panics,
//!    aborts, resource exhaustion, hangs) must reach the engine untouched.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  config.rs   │────▶│  harness.rs  │────▶│  outcome.rs  │
//! │(ConfigSnap-  │     │ (Harness:    │     │ (Success /   │
//! │ shot, check) │     │  run_one,    │     │  Rejected /  │
//! └──────────────┘     │  execute)    │     │  Failed)     │
//!                      └──────┬───────┘     └──────────────┘
//!                             │ Target trait (target.rs)
//!                             ▼
//!                      ┌──────────────┐
//!                      │ targets/jpeg │  ← the decoder under test
//!                      └──────────────┘
//! ```
//!
//! # Worker state machine
//!
//! ```text
//! Uninitialized ──(check passes)──▶ Ready ──(invocation)──▶ Ready ──▶ …
//!       │
//!       └─(check fails)──▶ Terminated(exit code 3)
//! ```
//!
//! The `Uninitialized → Ready` transition is owned by the type system: the
//! only way to obtain a [`Harness`] is through a snapshot that passed
//! verification, so an unchecked worker cannot express an invocation.
//!
//! # Usage
//!
//! ```ignore
//! use imago::{Harness, JpegTarget};
//!
//! // In a fuzz target: init once, then one call per input.
//! let harness = Harness::from_env_or_exit(JpegTarget);
//! harness.execute(data); // benign outcomes return, findings panic
//! ```

// Module declarations
mod config;
mod harness;
mod outcome;
mod target;
mod targets;
pub mod testing;

// Re-exports for public API
pub use config::{ConfigSnapshot, PropagationError, PROPAGATION_EXIT_CODE, REQUIRED_KEYS};
pub use harness::Harness;
pub use outcome::{Outcome, RejectionKind, UnclassifiedFailure};
pub use target::{Classification, Target};
pub use targets::JpegTarget;
