//! The call boundary to the routine under test.
//!
//! The routine takes both operands as raw binary32 encodings in integer
//! registers and returns a pointer to its result, or null to signal an
//! internal error.

use crate::bitcast::{bits_to_float, is_nan_bits, SIGN_MASK};


// - MaxRoutine ---------------------------------------------------------------

/// A `max` implementation that can be graded.
///
/// # Safety
///
/// The pointer returned by `call` must either be null or point to an
/// initialized `f32` that stays valid for reads until the next call on
/// the same routine.
pub unsafe trait MaxRoutine {
    fn call(&mut self, a_bits: u32, b_bits: u32) -> *const f32;
}

unsafe impl<R: MaxRoutine + ?Sized> MaxRoutine for &mut R {
    fn call(&mut self, a_bits: u32, b_bits: u32) -> *const f32 {
        (**self).call(a_bits, b_bits)
    }
}


// - Extern -------------------------------------------------------------------

/// Signature of a routine linked in from outside the crate, usually
/// written in assembly:
///
/// ```text
/// extern float *fmax_uut(uint32_t a, uint32_t b);
/// ```
pub type MaxFn = unsafe extern "C" fn(u32, u32) -> *const f32;

/// Adapts a linked routine.
pub struct Extern {
    routine: MaxFn,
}

impl Extern {
    /// # Safety
    ///
    /// `routine` must follow the AAPCS calling convention and honour the
    /// pointer contract of [`MaxRoutine`].
    pub unsafe fn new(routine: MaxFn) -> Self {
        Self { routine }
    }
}

unsafe impl MaxRoutine for Extern {
    fn call(&mut self, a_bits: u32, b_bits: u32) -> *const f32 {
        unsafe { (self.routine)(a_bits, b_bits) }
    }
}


// - SoftMax ------------------------------------------------------------------

/// Integer-only implementation of the graded contract.
///
/// Useful to bring up a board before a real routine is available, and
/// as a known-good subject for the harness itself.
#[derive(Debug, Default)]
pub struct SoftMax {
    result: f32,
}

impl SoftMax {
    pub const fn new() -> Self {
        Self { result: 0.0 }
    }
}

unsafe impl MaxRoutine for SoftMax {
    fn call(&mut self, a_bits: u32, b_bits: u32) -> *const f32 {
        self.result = bits_to_float(soft_max_bits(a_bits, b_bits));
        &self.result
    }
}

/// Maximum of two binary32 encodings without touching the FPU.
pub fn soft_max_bits(a: u32, b: u32) -> u32 {
    if is_nan_bits(a) {
        return b;
    }
    if is_nan_bits(b) {
        return a;
    }
    if order_key(b) > order_key(a) {
        b
    } else {
        a
    }
}

/// Maps a non-NaN encoding to an unsigned key with the same ordering as
/// the value it encodes, placing `-0.0` just below `+0.0`.
fn order_key(bits: u32) -> u32 {
    if bits & SIGN_MASK != 0 {
        !bits
    } else {
        bits | SIGN_MASK
    }
}


// - tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitcast::float_to_bits;
    use crate::reference::reference_max;

    unsafe extern "C" fn always_null(_a: u32, _b: u32) -> *const f32 {
        core::ptr::null()
    }

    #[test]
    fn soft_max_agrees_with_reference() {
        let values = [
            0.0f32, -0.0, 1.0, -1.0, 2.0, 0.1, 0.99, -4000.1, 1.4e-45, -1.4e-45, 1.4e-42,
            -3.2e-43, f32::MIN_POSITIVE, f32::MAX, f32::MIN, f32::INFINITY, f32::NEG_INFINITY,
        ];
        for &a in values.iter() {
            for &b in values.iter() {
                let got = soft_max_bits(float_to_bits(a), float_to_bits(b));
                assert_eq!(got, float_to_bits(reference_max(a, b)), "max({:?}, {:?})", a, b);
            }
        }
    }

    #[test]
    fn soft_max_skips_nan() {
        let nan = 0x7fc0_0000;
        assert_eq!(soft_max_bits(nan, float_to_bits(1.0)), float_to_bits(1.0));
        assert_eq!(soft_max_bits(float_to_bits(-1.0), 0xffc0_0001), float_to_bits(-1.0));
        assert!(is_nan_bits(soft_max_bits(nan, 0xffc0_0001)));
    }

    #[test]
    fn soft_max_returns_its_own_slot() {
        let mut routine = SoftMax::new();
        let result = routine.call(float_to_bits(1.0), float_to_bits(2.0));
        assert!(core::ptr::eq(result, &routine.result));
        assert_eq!(routine.result, 2.0);
    }

    fn call_through<R: MaxRoutine>(mut routine: R) -> *const f32 {
        routine.call(1, 2)
    }

    #[test]
    fn extern_routine_is_called() {
        let mut routine = unsafe { Extern::new(always_null) };
        assert!(routine.call(0, 0).is_null());
        assert!(call_through(&mut routine).is_null());
    }
}
