//! Reference semantics for the maximum of two `f32` values.
//!
//! IEEE-754 leaves `max` underspecified around NaN and signed zero.
//! The harness grades against the following rules:
//!
//! * a NaN operand is never selected when the other operand is a
//!   number
//! * when both operands are NaN the result is NaN, and any NaN payload
//!   is accepted by the verifier
//! * `+0.0` is greater than `-0.0`; whether `-0.0` is also accepted is
//!   decided by [`ZeroSignPolicy`](crate::verifier::ZeroSignPolicy)
//! * subnormals compare by value, infinities bound every finite value

/// Returns the larger of `a` and `b` under the rules above.
pub fn reference_max(a: f32, b: f32) -> f32 {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => a,
        (true, false) => b,
        (false, true) => a,
        (false, false) => {
            if a > b {
                a
            } else if b > a {
                b
            } else if a.is_sign_negative() {
                // equal in value, only +0.0 and -0.0 can still differ
                b
            } else {
                a
            }
        }
    }
}


// - tests --------------------------------------------------------------------
