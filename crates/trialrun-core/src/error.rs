//! Fault taxonomy for lifecycle steps and cleanups.
//!
//! Every lifecycle step returns an explicit tagged fault instead of
//! relying on panic unwinding, so the runner can match outcomes
//! exhaustively.

/// Result of one lifecycle step (`set_up`, body, `tear_down`) or cleanup.
pub type StepResult = std::result::Result<(), Fault>;

/// Tagged outcome of a step that did not complete normally.
///
/// Every variant except [`Fault::Interrupt`] is caught at its point of
/// origin, translated into exactly one result-sink report, and execution
/// continues. An interrupt is never reported; it unwinds the whole run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    /// An assertion-style failure: the code under test misbehaved.
    #[error("failure: {0}")]
    Failure(String),

    /// An unexpected error: the step itself broke.
    #[error("error: {0}")]
    Error(String),

    /// Skip signal: the case does not apply in this environment.
    #[error("skipped: {0}")]
    Skip(String),

    /// Fatal interrupt (user-requested abort). Never caught by the
    /// runner; remaining cleanups do not execute.
    #[error("interrupted: {0}")]
    Interrupt(String),
}

impl Fault {
    /// Creates an assertion-style failure.
    #[must_use]
    pub fn failure(msg: impl Into<String>) -> Self {
        Self::Failure(msg.into())
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Creates a skip signal.
    #[must_use]
    pub fn skip(msg: impl Into<String>) -> Self {
        Self::Skip(msg.into())
    }

    /// Creates a fatal interrupt.
    #[must_use]
    pub fn interrupt(msg: impl Into<String>) -> Self {
        Self::Interrupt(msg.into())
    }

    /// Returns true if this fault is an assertion-style failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns true if this fault is an unexpected error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns true if this fault is a skip signal.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }

    /// Returns true if this fault must abort the run.
    #[must_use]
    pub const fn is_interrupt(&self) -> bool {
        matches!(self, Self::Interrupt(_))
    }

    /// Returns the fault message without its kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Failure(msg) | Self::Error(msg) | Self::Skip(msg) | Self::Interrupt(msg) => msg,
        }
    }
}

/// Abort error returned by `run_case` when a fatal interrupt fires.
///
/// Carries the interrupt reason; any cleanups still pending when the
/// interrupt fired were dropped unexecuted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("run interrupted: {reason}")]
pub struct Interrupted {
    /// Reason supplied by the interrupting step.
    pub reason: String,
}

impl Interrupted {
    /// Creates a new interrupt abort.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
