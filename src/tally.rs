use crate::error::{Error, Result};
use crate::verifier::Outcome;


// - constants ----------------------------------------------------------------

/// Points awarded for a run where every test passes.
pub const MAX_SCORE: u32 = 20;


// - Tally --------------------------------------------------------------------

/// Running pass/fail counts of a test run.
///
/// Counts only ever grow and `total_pass + total_fail == total_tests`
/// holds after every call to [`Tally::accumulate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pass: u32,
    fail: u32,
    total_pass: u32,
    total_fail: u32,
    total_tests: u32,
}

impl Tally {
    pub const fn new() -> Self {
        Self {
            pass: 0,
            fail: 0,
            total_pass: 0,
            total_fail: 0,
            total_tests: 0,
        }
    }

    pub fn accumulate(&mut self, outcome: Outcome) {
        let (pass, fail) = if outcome.is_pass() { (1, 0) } else { (0, 1) };

        self.pass = pass;
        self.fail = fail;
        self.total_pass += pass;
        self.total_fail += fail;
        self.total_tests += pass + fail;
    }

    /// Passes counted by the most recent iteration.
    pub fn pass(&self) -> u32 {
        self.pass
    }

    /// Failures counted by the most recent iteration.
    pub fn fail(&self) -> u32 {
        self.fail
    }

    pub fn total_pass(&self) -> u32 {
        self.total_pass
    }

    pub fn total_fail(&self) -> u32 {
        self.total_fail
    }

    pub fn total_tests(&self) -> u32 {
        self.total_tests
    }

    /// `floor(MAX_SCORE * total_pass / total_tests)`
    pub fn score(&self) -> Result<u32> {
        if self.total_tests == 0 {
            return Err(Error::EmptyTestSet);
        }
        let score = u64::from(MAX_SCORE) * u64::from(self.total_pass) / u64::from(self.total_tests);
        Ok(score as u32)
    }
}


// - tests --------------------------------------------------------------------
