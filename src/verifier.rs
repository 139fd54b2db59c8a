//! Grades one result of the routine under test.
//!
//! The comparison is done on bit patterns rather than with `==` so that
//! signed zeros and NaNs are graded exactly:
//!
//! * both operands NaN: any NaN passes, whatever its sign or payload
//! * one operand NaN: the other operand passes, and with
//!   [`NanPolicy::Relaxed`] so does any NaN
//! * otherwise the candidate must carry the expected bit pattern, except
//!   that [`ZeroSignPolicy::Relaxed`] also accepts a zero of the other
//!   sign

use core::fmt;
use core::fmt::Write;

use crate::bitcast::float_to_bits;
use crate::reference::reference_max;


// - constants ----------------------------------------------------------------

pub const DIAGNOSTIC_CAPACITY: usize = 192;

/// Bounded buffer holding the diagnostic line of one iteration
pub type Diagnostic = heapless::String<DIAGNOSTIC_CAPACITY>;


// - types --------------------------------------------------------------------

/// How a zero of the wrong sign is graded when the expected result is a
/// zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroSignPolicy {
    /// Only the expected sign passes: `max(+0.0, -0.0)` must be `+0.0`.
    Strict,
    /// `+0.0` and `-0.0` are interchangeable.
    Relaxed,
}

impl Default for ZeroSignPolicy {
    #[cfg(not(feature = "strict-zero-sign"))]
    fn default() -> Self {
        ZeroSignPolicy::Relaxed
    }

    #[cfg(feature = "strict-zero-sign")]
    fn default() -> Self {
        ZeroSignPolicy::Strict
    }
}

/// How a NaN result is graded when exactly one operand is NaN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NanPolicy {
    /// The number must win, as with IEEE 754-2008 `maxNum`.
    Strict,
    /// A propagated NaN, as with IEEE 754-2019 `maximum`, passes too.
    Relaxed,
}

impl Default for NanPolicy {
    #[cfg(not(feature = "strict-nan"))]
    fn default() -> Self {
        NanPolicy::Relaxed
    }

    #[cfg(feature = "strict-nan")]
    fn default() -> Self {
        NanPolicy::Strict
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    /// The routine returned a null pointer.
    NullResult,
    /// The returned value differs from the reference result.
    Mismatch,
    /// The value is correct but was not stored in the designated result
    /// location.
    Misplaced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(Failure),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        *self == Outcome::Pass
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Pass => f.write_str("PASS"),
            Outcome::Fail(Failure::NullResult) => f.write_str("FAIL (null result)"),
            Outcome::Fail(Failure::Mismatch) => f.write_str("FAIL (mismatch)"),
            Outcome::Fail(Failure::Misplaced) => f.write_str("FAIL (wrong result location)"),
        }
    }
}


// - Verifier -----------------------------------------------------------------

pub struct Verifier {
    zero_sign: ZeroSignPolicy,
    nan: NanPolicy,
    result_slot: Option<*const f32>,
}

impl Verifier {
    pub fn new(zero_sign: ZeroSignPolicy, nan: NanPolicy) -> Self {
        Self {
            zero_sign,
            nan,
            result_slot: None,
        }
    }

    /// Also require the routine to return a pointer to `slot`.
    pub fn with_result_slot(mut self, slot: *const f32) -> Self {
        self.result_slot = Some(slot);
        self
    }

    pub fn zero_sign(&self) -> ZeroSignPolicy {
        self.zero_sign
    }

    pub fn nan(&self) -> NanPolicy {
        self.nan
    }

    /// Grades `candidate` as the result of `max(a, b)` and appends a
    /// diagnostic line for iteration `index` to `out`.
    ///
    /// A full `out` truncates the line but never changes the verdict.
    pub fn verify<W>(&self, index: usize, a: f32, b: f32, candidate: Option<&f32>, out: &mut W) -> Outcome
    where
        W: Write,
    {
        let expected = reference_max(a, b);

        let outcome = match candidate {
            None => Outcome::Fail(Failure::NullResult),
            Some(&value) if !self.accepts(a, b, value) => Outcome::Fail(Failure::Mismatch),
            Some(location) if !self.is_result_slot(location) => Outcome::Fail(Failure::Misplaced),
            Some(_) => Outcome::Pass,
        };

        log::debug!("test {}: {}", index, outcome);
        if describe(index, a, b, candidate.copied(), expected, outcome, out).is_err() {
            log::warn!("test {}: diagnostic line truncated", index);
        }

        outcome
    }

    /// True when `candidate` is an acceptable result of `max(a, b)`.
    pub fn accepts(&self, a: f32, b: f32, candidate: f32) -> bool {
        let expected = reference_max(a, b);
        if expected.is_nan() {
            return candidate.is_nan();
        }
        if candidate.is_nan() {
            return self.nan == NanPolicy::Relaxed && (a.is_nan() || b.is_nan());
        }
        if float_to_bits(candidate) == float_to_bits(expected) {
            return true;
        }
        match self.zero_sign {
            ZeroSignPolicy::Strict => false,
            // neither side is NaN here, so only ±0.0 can be equal with different bits
            ZeroSignPolicy::Relaxed => candidate == expected,
        }
    }

    fn is_result_slot(&self, location: &f32) -> bool {
        match self.result_slot {
            Some(slot) => core::ptr::eq(location, slot),
            None => true,
        }
    }
}


// - diagnostics --------------------------------------------------------------

fn describe<W: Write>(
    index: usize,
    a: f32,
    b: f32,
    candidate: Option<f32>,
    expected: f32,
    outcome: Outcome,
    out: &mut W,
) -> fmt::Result {
    write!(
        out,
        "test {}: max({:?}, {:?}) [{:#010x}, {:#010x}] -> ",
        index,
        a,
        b,
        float_to_bits(a),
        float_to_bits(b)
    )?;
    match candidate {
        Some(value) => write!(out, "{:?} [{:#010x}]", value, float_to_bits(value))?,
        None => out.write_str("null")?,
    }
    write!(
        out,
        " expected {:?} [{:#010x}]: {}\r\n",
        expected,
        float_to_bits(expected),
        outcome
    )
}


// - tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const NAN_PATTERNS: [u32; 4] = [0x7fc0_0000, 0xffc0_0000, 0x7f80_0001, 0xffff_ffff];

    fn check(verifier: &Verifier, a: f32, b: f32, candidate: Option<f32>) -> Outcome {
        let mut line = Diagnostic::new();
        verifier.verify(0, a, b, candidate.as_ref(), &mut line)
    }

    fn relaxed() -> Verifier {
        Verifier::new(ZeroSignPolicy::Relaxed, NanPolicy::Relaxed)
    }

    fn strict() -> Verifier {
        Verifier::new(ZeroSignPolicy::Strict, NanPolicy::Strict)
    }

    #[test]
    fn larger_finite_operand_passes() {
        let pairs = [(2.0, 1.0), (-1.2, -3.1), (785.066_65, 1.144_374_2e-28), (1.4e-42, -3.2e-43)];
        for &(a, b) in pairs.iter() {
            assert_eq!(check(&relaxed(), a, b, Some(a)), Outcome::Pass);
            assert_eq!(check(&relaxed(), b, a, Some(a)), Outcome::Pass);
            assert_eq!(check(&relaxed(), a, b, Some(b)), Outcome::Fail(Failure::Mismatch));
        }
    }

    #[test]
    fn number_beside_nan_passes() {
        for &a in [1.0f32, -1.0, 0.0, f32::INFINITY, f32::NEG_INFINITY, 2.4e-42].iter() {
            for verifier in [relaxed(), strict()].iter() {
                assert_eq!(check(verifier, a, f32::NAN, Some(a)), Outcome::Pass);
                assert_eq!(check(verifier, f32::NAN, a, Some(a)), Outcome::Pass);
            }
        }
    }

    #[test]
    fn propagated_nan_depends_on_policy() {
        for &bits in NAN_PATTERNS.iter() {
            let nan = f32::from_bits(bits);
            assert_eq!(check(&relaxed(), -1.0, f32::NAN, Some(nan)), Outcome::Pass);
            assert_eq!(check(&relaxed(), f32::NAN, 1.0, Some(nan)), Outcome::Pass);
            assert_eq!(check(&strict(), -1.0, f32::NAN, Some(nan)), Outcome::Fail(Failure::Mismatch));
            assert_eq!(check(&strict(), f32::NAN, 1.0, Some(nan)), Outcome::Fail(Failure::Mismatch));
        }
        // without a NaN operand a NaN result is always wrong
        assert_eq!(check(&relaxed(), 1.0, 2.0, Some(f32::NAN)), Outcome::Fail(Failure::Mismatch));
    }

    #[test]
    fn wrong_number_beside_nan_fails() {
        assert_eq!(check(&relaxed(), f32::NAN, 1.0, Some(2.0)), Outcome::Fail(Failure::Mismatch));
        assert_eq!(check(&relaxed(), -1.0, f32::NAN, Some(-0.0)), Outcome::Fail(Failure::Mismatch));
    }

    #[test]
    fn both_nan_accepts_any_nan() {
        for &bits in NAN_PATTERNS.iter() {
            let candidate = f32::from_bits(bits);
            assert_eq!(check(&strict(), f32::NAN, f32::NAN, Some(candidate)), Outcome::Pass);
        }
        assert_eq!(check(&strict(), f32::NAN, f32::NAN, Some(0.0)), Outcome::Fail(Failure::Mismatch));
        assert_eq!(check(&strict(), f32::NAN, f32::NAN, Some(f32::INFINITY)), Outcome::Fail(Failure::Mismatch));
    }

    #[test]
    fn infinities() {
        for &x in [0.0f32, -6.24, f32::MAX, f32::MIN, 1.4e-45].iter() {
            assert_eq!(check(&strict(), f32::INFINITY, x, Some(f32::INFINITY)), Outcome::Pass);
            assert_eq!(check(&strict(), f32::NEG_INFINITY, x, Some(x)), Outcome::Pass);
        }
        assert_eq!(
            check(&strict(), f32::INFINITY, f32::NEG_INFINITY, Some(f32::INFINITY)),
            Outcome::Pass
        );
        assert_eq!(
            check(&strict(), f32::INFINITY, f32::NEG_INFINITY, Some(f32::NEG_INFINITY)),
            Outcome::Fail(Failure::Mismatch)
        );
    }

    #[test]
    fn relaxed_policy_accepts_either_zero() {
        assert_eq!(check(&relaxed(), 0.0, -0.0, Some(0.0)), Outcome::Pass);
        assert_eq!(check(&relaxed(), 0.0, -0.0, Some(-0.0)), Outcome::Pass);
        assert_eq!(check(&relaxed(), -0.0, 0.0, Some(-0.0)), Outcome::Pass);
        assert_eq!(check(&relaxed(), 0.0, -0.0, Some(1.4e-45)), Outcome::Fail(Failure::Mismatch));
    }

    #[test]
    fn strict_policy_requires_positive_zero() {
        assert_eq!(check(&strict(), 0.0, -0.0, Some(0.0)), Outcome::Pass);
        assert_eq!(check(&strict(), 0.0, -0.0, Some(-0.0)), Outcome::Fail(Failure::Mismatch));
        assert_eq!(check(&strict(), -0.0, -0.0, Some(-0.0)), Outcome::Pass);
        assert_eq!(check(&strict(), -4000.1, 0.0, Some(-0.0)), Outcome::Fail(Failure::Mismatch));
    }

    #[test]
    fn null_result_fails() {
        assert_eq!(check(&relaxed(), -4000.1, 0.0, None), Outcome::Fail(Failure::NullResult));
        assert_eq!(check(&relaxed(), f32::NAN, f32::NAN, None), Outcome::Fail(Failure::NullResult));
    }

    #[test]
    fn result_slot_is_checked() {
        let slot = 2.0f32;
        let elsewhere = 2.0f32;
        let verifier = relaxed().with_result_slot(&slot);
        let mut line = Diagnostic::new();

        assert_eq!(verifier.verify(0, 1.0, 2.0, Some(&slot), &mut line), Outcome::Pass);
        assert_eq!(
            verifier.verify(0, 1.0, 2.0, Some(&elsewhere), &mut line),
            Outcome::Fail(Failure::Misplaced)
        );
    }

    #[test]
    fn diagnostic_line_names_everything() {
        let mut line = Diagnostic::new();
        let outcome = relaxed().verify(7, 1.0, 2.0, Some(&2.0), &mut line);

        assert_eq!(outcome, Outcome::Pass);
        assert_eq!(
            line.as_str(),
            "test 7: max(1.0, 2.0) [0x3f800000, 0x40000000] -> 2.0 [0x40000000] \
             expected 2.0 [0x40000000]: PASS\r\n"
        );

        line.clear();
        relaxed().verify(8, -4000.1, 0.0, None, &mut line);
        assert!(line.starts_with("test 8: "));
        assert!(line.contains("-> null expected 0.0 [0x00000000]: FAIL (null result)"));
    }

    #[test]
    fn truncated_diagnostic_keeps_verdict() {
        let mut line: heapless::String<16> = heapless::String::new();
        let outcome = relaxed().verify(0, f32::NAN, 1.0, Some(&1.0), &mut line);
        assert_eq!(outcome, Outcome::Pass);
        assert!(line.len() <= 16);
    }
}
