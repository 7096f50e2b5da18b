// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # trialrun-core
//!
//! Core lifecycle primitives for the trialrun test-execution harness.
//!
//! This crate provides cleanup-sequenced test execution:
//!
//! - [`Case`] trait for implementing a test case's lifecycle
//! - [`CaseContext`] for cleanup registration and unique-value generation
//! - [`Report`] trait for receiving ordered lifecycle notifications
//! - [`run_case`] for orchestrating one run
//!
//! ## Guarantees
//!
//! - Cleanups execute in strict reverse registration order.
//! - Every registered cleanup is attempted exactly once per run, even
//!   when earlier cleanups fail.
//! - Each failing cleanup surfaces as its own independent error report.
//! - A fatal interrupt is never caught anywhere in the pipeline.
//!
//! ## Example
//!
//! ```rust,ignore
//! use trialrun_core::{Case, CaseContext, CaseId, RunTally, StepResult, run_case};
//!
//! struct Smoke {
//!     id: CaseId,
//! }
//!
//! impl Case for Smoke {
//!     fn id(&self) -> CaseId { self.id }
//!     fn name(&self) -> &str { "smoke" }
//!     fn body(&mut self, _ctx: &mut CaseContext) -> StepResult { Ok(()) }
//! }
//!
//! let mut tally = RunTally::new();
//! run_case(&mut Smoke { id: CaseId::new() }, &mut tally)?;
//! assert!(tally.is_clean());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod case;
pub mod error;
pub mod report;
pub mod runner;
#[cfg(test)]
pub mod tests;
pub mod types;

pub use case::{Case, CaseContext, Cleanup};
pub use error::{Fault, Interrupted, StepResult};
pub use report::{Report, RunSummary, RunTally, TraceReport};
pub use runner::run_case;
pub use types::{CaseId, CaseMeta, RunState};
