//! Drives a test run, one vector per timer tick.
//!
//! ```text
//! WaitingForTick -> Dispatching -> Verifying -> Accumulating -+-> WaitingForTick
//!                                                             +-> Draining
//! ```
//!
//! [`Scheduler::step`] performs a single transition and never blocks, so
//! the main loop stays free to do other work between ticks. A new vector
//! is only dispatched once the diagnostic line of the previous one has
//! been transmitted.

use crate::bitcast::bits_to_float;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::report::{Reporter, Transmit};
use crate::routine::MaxRoutine;
use crate::signal::{Channel, Flag};
use crate::tally::Tally;
use crate::vectors::{TestTable, TestVector};
use crate::verifier::{Diagnostic, Outcome, Verifier};


// - types --------------------------------------------------------------------

/// Everything known about the iteration being verified.
#[derive(Clone, Copy, Debug)]
pub struct Iteration {
    pub index: usize,
    pub vector: TestVector,
    pub bits: (u32, u32),
    /// As returned by the routine, possibly null.
    pub result: *const f32,
}

#[derive(Clone, Copy, Debug)]
pub enum State {
    WaitingForTick,
    Dispatching,
    Verifying(Iteration),
    Accumulating(Outcome),
    Draining,
}

/// Final results of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub tally: Tally,
    /// `None` when no test was run.
    pub score: Option<u32>,
}


// - Scheduler ----------------------------------------------------------------

pub struct Scheduler<'a, R, T> {
    suite_name: &'static str,
    table: TestTable,
    next: usize,
    state: State,
    tally: Tally,
    verifier: Verifier,
    routine: R,
    reporter: Reporter<'a, T>,
    tick: &'a Flag,
    diagnostic: Diagnostic,
}

impl<'a, R, T> Scheduler<'a, R, T>
where
    R: MaxRoutine,
    T: Transmit,
{
    /// `tick` is raised by the periodic timer, `channel` is released by
    /// `tx` when a transfer completes.
    pub fn new(
        config: &Config,
        table: TestTable,
        routine: R,
        tx: T,
        tick: &'a Flag,
        channel: &'a Channel,
    ) -> Self {
        Self {
            suite_name: config.suite_name,
            table,
            next: 0,
            state: State::WaitingForTick,
            tally: Tally::new(),
            verifier: Verifier::new(config.zero_sign, config.nan),
            routine,
            reporter: Reporter::new(tx, channel),
            tick,
            diagnostic: Diagnostic::new(),
        }
    }

    /// Replaces the default verifier, e.g. to check the result location.
    pub fn with_verifier(mut self, verifier: Verifier) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn is_drained(&self) -> bool {
        matches!(self.state, State::Draining)
    }

    /// Performs one state transition and returns the new state.
    pub fn step(&mut self) -> &State {
        let state = self.state;
        self.state = match state {
            State::WaitingForTick => {
                if self.reporter.is_idle() && self.tick.take() {
                    State::Dispatching
                } else {
                    State::WaitingForTick
                }
            }
            State::Dispatching => match self.dispatch() {
                Some(iteration) => State::Verifying(iteration),
                None => State::Draining,
            },
            State::Verifying(iteration) => {
                // SAFETY: the routine guarantees `result` is null or valid
                // until its next call, which happens after this state.
                let candidate = unsafe { iteration.result.as_ref() };
                self.diagnostic.clear();
                State::Accumulating(self.verifier.verify(
                    iteration.index,
                    iteration.vector.a,
                    iteration.vector.b,
                    candidate,
                    &mut self.diagnostic,
                ))
            }
            State::Accumulating(outcome) => {
                self.tally.accumulate(outcome);
                if let Err(err) = self.reporter.post(self.diagnostic.as_bytes()) {
                    log::warn!("test {}: diagnostic not sent: {}", self.next, err);
                }
                self.next += 1;
                if self.next >= self.table.len() {
                    log::info!("all {} tests dispatched", self.table.len());
                    State::Draining
                } else {
                    State::WaitingForTick
                }
            }
            State::Draining => State::Draining,
        };
        &self.state
    }

    fn dispatch(&mut self) -> Option<Iteration> {
        let index = self.next;
        let vector = self.table.get(index)?;
        let bits = vector.bits();
        log::trace!(
            "test {}: max({:?}, {:?})",
            index,
            bits_to_float(bits.0),
            bits_to_float(bits.1)
        );
        let result = self.routine.call(bits.0, bits.1);

        Some(Iteration {
            index,
            vector,
            bits,
            result,
        })
    }

    /// Transmits the summary once the run is drained.
    pub fn finish(mut self) -> Result<Summary> {
        if !self.is_drained() {
            return Err(Error::NotDrained);
        }
        self.reporter.report(self.suite_name, &self.tally)?;

        Ok(Summary {
            tally: self.tally,
            score: self.tally.score().ok(),
        })
    }

    /// Steps until every vector has been graded, then reports.
    pub fn run(mut self) -> Result<Summary> {
        while !self.is_drained() {
            self.step();
        }
        self.finish()
    }
}
