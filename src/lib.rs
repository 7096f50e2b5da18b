//! Trialrun: unit-test execution harness with guaranteed cleanup
//! sequencing.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trialrun::prelude::*;
//!
//! // Re-exports from sub-crates for convenience
//! ```

pub use trialrun_core as core;

/// Prelude module for common imports.
pub mod prelude {
    pub use trialrun_core::{
        Case, CaseContext, CaseId, CaseMeta, Fault, Interrupted, Report, RunState, RunSummary,
        RunTally, StepResult, TraceReport, run_case,
    };
}
