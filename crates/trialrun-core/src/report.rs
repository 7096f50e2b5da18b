//! Result-sink contract and stock sinks.
//!
//! The runner talks to the outside world only through [`Report`]: an
//! explicit five-method interface replacing any duck-typed result
//! object. Sinks receive ordered notifications and own whatever state
//! they accumulate; the runner retains nothing.

use serde::{Deserialize, Serialize};

use crate::error::Fault;
use crate::types::CaseMeta;

/// Observer for test-run lifecycle notifications.
///
/// For one run the call order is: `start_test`, zero or more of
/// `add_error` / `add_failure` / `add_skip`, then `stop_test`. A run
/// aborted by a fatal interrupt ends without `stop_test`.
pub trait Report {
    /// A case run has started.
    fn start_test(&mut self, case: &CaseMeta);

    /// A step or cleanup produced an unexpected error. A single run may
    /// deliver many of these; each failing cleanup produces its own.
    fn add_error(&mut self, case: &CaseMeta, fault: &Fault);

    /// The body produced an assertion-style failure.
    fn add_failure(&mut self, case: &CaseMeta, fault: &Fault);

    /// The case was skipped.
    fn add_skip(&mut self, case: &CaseMeta, reason: &str);

    /// The run reached its terminal state.
    fn stop_test(&mut self, case: &CaseMeta);
}

/// Counting sink that collects every reported outcome.
#[derive(Debug, Default)]
pub struct RunTally {
    started: u32,
    stopped: u32,
    errors: Vec<(CaseMeta, String)>,
    failures: Vec<(CaseMeta, String)>,
    skips: Vec<(CaseMeta, String)>,
}

impl RunTally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of runs started.
    #[must_use]
    pub fn started(&self) -> u32 {
        self.started
    }

    /// Number of runs that reached `stop_test`.
    #[must_use]
    pub fn stopped(&self) -> u32 {
        self.stopped
    }

    /// Collected error reports, in delivery order.
    #[must_use]
    pub fn errors(&self) -> &[(CaseMeta, String)] {
        &self.errors
    }

    /// Collected failure reports, in delivery order.
    #[must_use]
    pub fn failures(&self) -> &[(CaseMeta, String)] {
        &self.failures
    }

    /// Collected skip reports, in delivery order.
    #[must_use]
    pub fn skips(&self) -> &[(CaseMeta, String)] {
        &self.skips
    }

    /// Returns true if no errors and no failures were reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.failures.is_empty()
    }

    /// Snapshot of the counts, suitable for serialization.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            started: self.started,
            stopped: self.stopped,
            errors: self.errors.len() as u32,
            failures: self.failures.len() as u32,
            skips: self.skips.len() as u32,
        }
    }
}

impl Report for RunTally {
    fn start_test(&mut self, _case: &CaseMeta) {
        self.started += 1;
    }

    fn add_error(&mut self, case: &CaseMeta, fault: &Fault) {
        self.errors.push((case.clone(), fault.to_string()));
    }

    fn add_failure(&mut self, case: &CaseMeta, fault: &Fault) {
        self.failures.push((case.clone(), fault.to_string()));
    }

    fn add_skip(&mut self, case: &CaseMeta, reason: &str) {
        self.skips.push((case.clone(), reason.to_string()));
    }

    fn stop_test(&mut self, _case: &CaseMeta) {
        self.stopped += 1;
    }
}

/// Count snapshot of a [`RunTally`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Runs started.
    pub started: u32,
    /// Runs that reached `stop_test`.
    pub stopped: u32,
    /// Error reports delivered.
    pub errors: u32,
    /// Failure reports delivered.
    pub failures: u32,
    /// Skip reports delivered.
    pub skips: u32,
}

/// Sink that forwards every notification as a tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceReport;

impl TraceReport {
    /// Creates a tracing sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Report for TraceReport {
    fn start_test(&mut self, case: &CaseMeta) {
        tracing::info!(id = %case.id, name = %case.name, "case started");
    }

    fn add_error(&mut self, case: &CaseMeta, fault: &Fault) {
        tracing::warn!(id = %case.id, name = %case.name, fault = %fault, "case error");
    }

    fn add_failure(&mut self, case: &CaseMeta, fault: &Fault) {
        tracing::warn!(id = %case.id, name = %case.name, fault = %fault, "case failure");
    }

    fn add_skip(&mut self, case: &CaseMeta, reason: &str) {
        tracing::info!(id = %case.id, name = %case.name, reason = reason, "case skipped");
    }

    fn stop_test(&mut self, case: &CaseMeta) {
        tracing::info!(id = %case.id, name = %case.name, "case stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CaseId;

    fn meta(name: &str) -> CaseMeta {
        CaseMeta::new(CaseId::new(), name)
    }

    #[test]
    fn test_tally_starts_clean() {
        let tally = RunTally::new();
        assert_eq!(tally.started(), 0);
        assert_eq!(tally.stopped(), 0);
        assert!(tally.is_clean());
    }

    #[test]
    fn test_tally_counts_lifecycle() {
        let mut tally = RunTally::new();
        let case = meta("test_counts");

        tally.start_test(&case);
        tally.stop_test(&case);

        assert_eq!(tally.started(), 1);
        assert_eq!(tally.stopped(), 1);
        assert!(tally.is_clean());
    }

    #[test]
    fn test_tally_collects_each_error_independently() {
        let mut tally = RunTally::new();
        let case = meta("test_errors");

        tally.add_error(&case, &Fault::error("first"));
        tally.add_error(&case, &Fault::error("second"));

        assert_eq!(tally.errors().len(), 2);
        assert_eq!(tally.errors()[0].1, "error: first");
        assert_eq!(tally.errors()[1].1, "error: second");
        assert!(!tally.is_clean());
    }

    #[test]
    fn test_tally_separates_failures_from_errors() {
        let mut tally = RunTally::new();
        let case = meta("test_kinds");

        tally.add_failure(&case, &Fault::failure("assert"));
        tally.add_error(&case, &Fault::error("broke"));
        tally.add_skip(&case, "no fixture");

        assert_eq!(tally.failures().len(), 1);
        assert_eq!(tally.errors().len(), 1);
        assert_eq!(tally.skips().len(), 1);
        assert_eq!(tally.skips()[0].1, "no fixture");
    }

    #[test]
    fn test_summary_snapshot() {
        let mut tally = RunTally::new();
        let case = meta("test_summary");

        tally.start_test(&case);
        tally.add_error(&case, &Fault::error("e"));
        tally.add_failure(&case, &Fault::failure("f"));
        tally.stop_test(&case);

        let summary = tally.summary();
        assert_eq!(
            summary,
            RunSummary {
                started: 1,
                stopped: 1,
                errors: 1,
                failures: 1,
                skips: 0,
            }
        );
    }

    #[test]
    fn test_summary_serialize_roundtrip() {
        let summary = RunSummary {
            started: 3,
            stopped: 2,
            errors: 4,
            failures: 1,
            skips: 0,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }

    #[test]
    fn test_trace_report_accepts_all_notifications() {
        // Smoke test: the tracing sink must not panic without a
        // subscriber installed.
        let mut report = TraceReport::new();
        let case = meta("test_trace");

        report.start_test(&case);
        report.add_error(&case, &Fault::error("e"));
        report.add_failure(&case, &Fault::failure("f"));
        report.add_skip(&case, "s");
        report.stop_test(&case);
    }
}
