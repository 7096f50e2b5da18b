//! Shared test infrastructure and lifecycle-property tests.
//!
//! `mocks` holds scripted cases and a recording sink; `lifecycle`
//! exercises the ordering and failure-isolation guarantees of the
//! runner end to end.


pub use mocks::{RecordingReport, ScriptedCase};
