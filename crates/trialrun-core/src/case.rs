//! Case contract and per-run context.
//!
//! A [`Case`] is the object under execution; a [`CaseContext`] is
//! created by the runner for each run and owns everything the run
//! accumulates: the pending cleanup stack and the unique-value counter.

use crate::error::StepResult;
use crate::types::CaseId;

/// A runnable test case.
///
/// The runner drives the lifecycle `set_up` → `body` → `tear_down`,
/// then drains registered cleanups in reverse registration order.
/// `tear_down` runs only when `set_up` succeeded; cleanups run
/// regardless.
///
/// # Example
///
/// ```rust,ignore
/// use trialrun_core::{Case, CaseContext, CaseId, Fault, StepResult};
///
/// struct PortProbe {
///     id: CaseId,
/// }
///
/// impl Case for PortProbe {
///     fn id(&self) -> CaseId { self.id }
///     fn name(&self) -> &str { "port_probe" }
///
///     fn set_up(&mut self, ctx: &mut CaseContext) -> StepResult {
///         let port = ctx.unique_integer();
///         ctx.add_cleanup(move || {
///             // release the port
///             Ok(())
///         });
///         Ok(())
///     }
///
///     fn body(&mut self, _ctx: &mut CaseContext) -> StepResult {
///         Err(Fault::failure("probe returned nothing"))
///     }
/// }
/// ```
pub trait Case {
    /// Returns the unique identifier for this case instance.
    fn id(&self) -> CaseId;

    /// Returns the human-readable name of this case.
    fn name(&self) -> &str;

    /// Prepares fixtures before the body runs.
    ///
    /// A skip fault here skips the body and `tear_down`; any other
    /// fault is reported as an error and likewise skips both. Cleanups
    /// registered before the fault still run.
    fn set_up(&mut self, _ctx: &mut CaseContext) -> StepResult {
        Ok(())
    }

    /// The test body.
    fn body(&mut self, ctx: &mut CaseContext) -> StepResult;

    /// Releases fixtures after the body.
    ///
    /// Only invoked when `set_up` succeeded. Runs before the cleanup
    /// stack is drained.
    fn tear_down(&mut self, _ctx: &mut CaseContext) -> StepResult {
        Ok(())
    }
}

/// A deferred cleanup action.
///
/// Arguments are captured by the closure at registration time; the
/// runner invokes it with no further input.
pub type Cleanup = Box<dyn FnOnce() -> StepResult>;

/// Per-run context handed to every lifecycle step.
///
/// Owns the pending cleanup stack and the unique-value counter. Both
/// start empty at construction; the stack is drained by the runner once
/// lifecycle execution completes, whatever the outcome. The context is
/// exclusively owned by one run and is not shared across case
/// instances.
pub struct CaseContext {
    /// Pending cleanups, in registration order. Drained back-to-front.
    cleanups: Vec<Cleanup>,

    /// Per-run counter backing `unique_integer` and `unique_string`.
    unique_counter: u64,

    /// Name of the case this run belongs to.
    case_name: String,
}

impl CaseContext {
    /// Creates a fresh context for one run of the named case.
    #[must_use]
    pub fn new(case_name: impl Into<String>) -> Self {
        Self {
            cleanups: Vec::new(),
            unique_counter: 0,
            case_name: case_name.into(),
        }
    }

    /// Registers a cleanup action.
    ///
    /// Cleanups execute in reverse registration order after the body
    /// and `tear_down` (or directly after a failed `set_up`). Nothing
    /// executes at registration time.
    pub fn add_cleanup<F>(&mut self, action: F)
    where
        F: FnOnce() -> StepResult + 'static,
    {
        self.cleanups.push(Box::new(action));
    }

    /// Pops the most recently registered cleanup, if any.
    pub(crate) fn pop_cleanup(&mut self) -> Option<Cleanup> {
        self.cleanups.pop()
    }

    /// Returns the number of cleanups not yet run.
    #[must_use]
    pub fn pending_cleanups(&self) -> usize {
        self.cleanups.len()
    }

    /// Returns an integer unique within this run.
    ///
    /// The first call returns 1, the second 2, and so on. The counter
    /// is owned by this context, not shared across runs.
    pub fn unique_integer(&mut self) -> u64 {
        self.unique_counter += 1;
        self.unique_counter
    }

    /// Returns a string unique within this run.
    ///
    /// Formatted as the case name followed by the unique integer, e.g.
    /// `"port_probe-1"`. Shares the counter with `unique_integer`.
    pub fn unique_string(&mut self) -> String {
        let n = self.unique_integer();
        format!("{}-{}", self.case_name, n)
    }

    /// Returns the name of the case this run belongs to.
    #[must_use]
    pub fn case_name(&self) -> &str {
        &self.case_name
    }
}

impl std::fmt::Debug for CaseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseContext")
            .field("case_name", &self.case_name)
            .field("pending_cleanups", &self.cleanups.len())
            .field("unique_counter", &self.unique_counter)
            .finish()
    }
}
