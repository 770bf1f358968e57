//! Worker-thread execution of a solve.
//!
//! A [`SolverSession`] owns the completion signal for one solve: the
//! worker resolves a one-shot channel exactly once when the search ends
//! (done or cancelled), and the caller observes it by polling
//! [`try_report`](SolverSession::try_report) from an event loop or by
//! blocking on [`wait`](SolverSession::wait). No solver state is shared
//! while the search runs; the report crosses the channel whole.

use crate::solver::{CancelToken, SolveReport, Solver};
use crate::CompiledPuzzle;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

/// A solve running on its own worker thread.
pub struct SolverSession {
    cancel: CancelToken,
    receiver: Receiver<SolveReport>,
    handle: Option<JoinHandle<()>>,
    report: Option<SolveReport>,
}

impl SolverSession {
    /// Start solving `puzzle` on a new worker thread.
    ///
    /// The puzzle must already have passed the structural gates and
    /// compiled without contradictions; the session does not re-check.
    pub fn spawn(solver: Solver, puzzle: CompiledPuzzle) -> Self {
        let cancel = CancelToken::new();
        let token = cancel.clone();
        let (sender, receiver) = mpsc::sync_channel(1);
        let handle = thread::spawn(move || {
            let report = solver.solve_with(&puzzle, &token);
            // the session may already have been dropped; nothing to do then
            let _ = sender.send(report);
        });
        Self {
            cancel,
            receiver,
            handle: Some(handle),
            report: None,
        }
    }

    /// Ask the worker to stop at its next search step. The session still
    /// delivers a report, with status `Cancelled` and no solutions.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Non-blocking poll. `Some` once the worker has delivered its report;
    /// repeated calls keep returning the same report.
    pub fn try_report(&mut self) -> Option<&SolveReport> {
        if self.report.is_none() {
            match self.receiver.try_recv() {
                Ok(report) => {
                    self.report = Some(report);
                    self.join_worker();
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
            }
        }
        self.report.as_ref()
    }

    /// Block until the worker finishes and take its report.
    pub fn wait(mut self) -> SolveReport {
        let report = match self.report.take() {
            Some(report) => report,
            None => self
                .receiver
                .recv()
                .expect("solver worker exited without reporting"),
        };
        self.join_worker();
        report
    }

    fn join_worker(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SolverSession {
    /// Dropping a session abandons the solve: the worker is told to stop
    /// and detaches, delivering its report to nobody.
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
