//! Concrete target adapters.
//!
//! One module per decoder under test. Each adapter owns its recognized-error
//! set; nothing here is shared because the set is inherently target-specific.

mod jpeg;

pub use jpeg::JpegTarget;
