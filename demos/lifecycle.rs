// Examples are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Trialrun Lifecycle Example
//!
//! Demonstrates cleanup-sequenced test execution: a case that allocates
//! two dependent fixtures in `set_up`, releases them via LIFO cleanups,
//! and fails its body so both the failure and the cleanup order show up
//! in the trace output.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example lifecycle
//! ```

use trialrun::prelude::*;

/// Case that builds one fixture on top of another.
struct DependentFixtures {
    id: CaseId,
}

impl Case for DependentFixtures {
    fn id(&self) -> CaseId {
        self.id
    }

    fn name(&self) -> &str {
        "dependent_fixtures"
    }

    fn set_up(&mut self, ctx: &mut CaseContext) -> StepResult {
        let base = ctx.unique_string();
        tracing::info!(fixture = %base, "allocated base fixture");
        let base_name = base.clone();
        ctx.add_cleanup(move || {
            tracing::info!(fixture = %base_name, "released base fixture");
            Ok(())
        });

        let derived = ctx.unique_string();
        tracing::info!(fixture = %derived, base = %base, "allocated derived fixture");
        ctx.add_cleanup(move || {
            // Runs before the base cleanup: last registered, first run.
            tracing::info!(fixture = %derived, "released derived fixture");
            Ok(())
        });

        Ok(())
    }

    fn body(&mut self, _ctx: &mut CaseContext) -> StepResult {
        Err(Fault::failure("derived fixture returned stale data"))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut case = DependentFixtures { id: CaseId::new() };
    let mut tally = RunTally::new();

    // TraceReport mirrors every notification to the log; the tally
    // collects them for the summary below.
    let mut trace = TraceReport::new();
    run_case(&mut case, &mut trace).expect("run was not interrupted");

    let mut case = DependentFixtures { id: CaseId::new() };
    run_case(&mut case, &mut tally).expect("run was not interrupted");

    let summary = tally.summary();
    tracing::info!(
        started = summary.started,
        stopped = summary.stopped,
        failures = summary.failures,
        errors = summary.errors,
        "run complete"
    );
    assert!(!tally.is_clean());
}
