//! Core types for case identity and run-lifecycle state.
//!
//! UUIDs for stable case identity, an explicit state machine for the
//! run lifecycle, no implicit transitions.

use serde::{Deserialize, Serialize};

/// Unique identifier for a test-case instance.
///
/// UUIDs instead of indices so identity survives cloning and re-running
/// a case under a new name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(uuid::Uuid);

impl CaseId {
    /// Creates a new random case ID.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a case ID from a UUID.
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity snapshot of a case, handed to result sinks.
///
/// Sinks receive this instead of the case itself so the runner keeps
/// exclusive mutable access to the case while reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseMeta {
    /// Case ID.
    pub id: CaseId,
    /// Human-readable case name.
    pub name: String,
}

impl CaseMeta {
    /// Creates a new identity snapshot.
    #[must_use]
    pub fn new(id: CaseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Run lifecycle state.
///
/// State transitions follow a strict state machine:
/// ```text
/// NotStarted → SettingUp → {Skipped | Erred | RunningBody}
///            → {TearingDown | (tear_down skipped)} → DrainingCleanups → Stopped
/// ```
/// `Skipped` and `Erred` record a set-up that did not complete; both
/// still proceed to `DrainingCleanups`. The terminal state is always
/// `Stopped` unless a fatal interrupt aborts the run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Run has been created but nothing has executed.
    NotStarted,
    /// `set_up` is executing.
    SettingUp,
    /// `set_up` signalled a skip; body and teardown will not run.
    Skipped,
    /// `set_up` faulted; body and teardown will not run.
    Erred,
    /// The test body is executing.
    RunningBody,
    /// `tear_down` is executing.
    TearingDown,
    /// Registered cleanups are being popped and executed.
    DrainingCleanups,
    /// Run has completed and `stop_test` has been reported.
    Stopped,
}

impl RunState {
    /// Returns true if the run has reached its terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Returns true if user-supplied code is executing in this state.
    #[must_use]
    pub const fn is_executing(&self) -> bool {
        matches!(
            self,
            Self::SettingUp | Self::RunningBody | Self::TearingDown | Self::DrainingCleanups
        )
    }

    /// Returns true if the body may still run from this state.
    #[must_use]
    pub const fn body_reachable(&self) -> bool {
        matches!(self, Self::NotStarted | Self::SettingUp)
    }
}
