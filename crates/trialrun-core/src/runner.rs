//! Run orchestration: lifecycle sequencing and cleanup draining.
//!
//! One entry point, [`run_case`], walks a case through the state
//! machine in `RunState`, reporting every outcome to the sink and
//! guaranteeing that every registered cleanup is attempted exactly once
//! per run, in reverse registration order, unless a fatal interrupt
//! fires first.

use crate::case::{Case, CaseContext};
use crate::error::{Fault, Interrupted};
use crate::report::Report;
use crate::types::{CaseMeta, RunState};

/// Executes one full run of `case`, reporting to `report`.
///
/// Sequencing:
///
/// 1. `start_test`.
/// 2. `set_up`. A skip is reported via `add_skip`; any other fault via
///    `add_error`. Either way the body and `tear_down` are skipped but
///    cleanups still drain.
/// 3. On successful set-up: the body (failure, error and skip are
///    classified and reported), then `tear_down` (a fault there is one
///    more error report).
/// 4. The cleanup stack drains in LIFO order. Each failing cleanup is
///    one independent error report and does not stop the drain.
/// 5. `stop_test`.
///
/// A [`Fault::Interrupt`] raised anywhere is never reported: it aborts
/// the run immediately, leaves remaining cleanups unexecuted, skips
/// `stop_test`, and surfaces as `Err(Interrupted)`.
///
/// # Errors
/// Returns [`Interrupted`] if any step or cleanup raised a fatal
/// interrupt.
pub fn run_case(case: &mut dyn Case, report: &mut dyn Report) -> Result<RunState, Interrupted> {
    let meta = CaseMeta::new(case.id(), case.name());
    let mut ctx = CaseContext::new(case.name());
    let mut state = RunState::NotStarted;

    report.start_test(&meta);

    advance(&mut state, RunState::SettingUp, &meta);
    let set_up_ok = match case.set_up(&mut ctx) {
        Ok(()) => true,
        Err(Fault::Interrupt(reason)) => return Err(Interrupted::new(reason)),
        Err(Fault::Skip(reason)) => {
            advance(&mut state, RunState::Skipped, &meta);
            report.add_skip(&meta, &reason);
            false
        }
        Err(fault) => {
            advance(&mut state, RunState::Erred, &meta);
            report.add_error(&meta, &fault);
            false
        }
    };

    if set_up_ok {
        advance(&mut state, RunState::RunningBody, &meta);
        match case.body(&mut ctx) {
            Ok(()) => {}
            Err(Fault::Interrupt(reason)) => return Err(Interrupted::new(reason)),
            Err(Fault::Skip(reason)) => report.add_skip(&meta, &reason),
            Err(fault @ Fault::Failure(_)) => report.add_failure(&meta, &fault),
            Err(fault @ Fault::Error(_)) => report.add_error(&meta, &fault),
        }

        // tear_down is tied to set_up having succeeded, not to the
        // body outcome.
        advance(&mut state, RunState::TearingDown, &meta);
        match case.tear_down(&mut ctx) {
            Ok(()) => {}
            Err(Fault::Interrupt(reason)) => return Err(Interrupted::new(reason)),
            Err(fault) => report.add_error(&meta, &fault),
        }
    }

    advance(&mut state, RunState::DrainingCleanups, &meta);
    while let Some(cleanup) = ctx.pop_cleanup() {
        match cleanup() {
            Ok(()) => {}
            // Dropping ctx here discards the cleanups still pending.
            Err(Fault::Interrupt(reason)) => return Err(Interrupted::new(reason)),
            Err(fault) => {
                tracing::warn!(case = %meta.name, fault = %fault, "cleanup failed");
                report.add_error(&meta, &fault);
            }
        }
    }

    advance(&mut state, RunState::Stopped, &meta);
    report.stop_test(&meta);

    Ok(state)
}

/// Moves the run to its next state, logging the transition.
fn advance(state: &mut RunState, next: RunState, meta: &CaseMeta) {
    tracing::debug!(case = %meta.name, from = ?*state, to = ?next, "state transition");
    *state = next;
}
