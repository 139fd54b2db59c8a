//! Exact reinterpretation between `f32` and its IEEE-754 binary32
//! encoding.
//!
//! The routine under test receives its operands in integer registers,
//! so every vector crosses the call boundary as raw bits. Both
//! conversions are total and inverse to each other: NaN payloads,
//! signed zeros, subnormals and infinities pass through untouched.


// - constants ----------------------------------------------------------------

pub const SIGN_MASK: u32 = 0x8000_0000;
pub const EXPONENT_MASK: u32 = 0x7f80_0000;
pub const MANTISSA_MASK: u32 = 0x007f_ffff;

pub const POSITIVE_INFINITY: u32 = 0x7f80_0000;
pub const NEGATIVE_INFINITY: u32 = 0xff80_0000;


// - conversions --------------------------------------------------------------

/// Returns the binary32 encoding of `f`.
#[inline]
pub fn float_to_bits(f: f32) -> u32 {
    f.to_bits()
}

/// Returns the `f32` encoded by `u`.
#[inline]
pub fn bits_to_float(u: u32) -> f32 {
    f32::from_bits(u)
}

/// True when `u` encodes a NaN, quiet or signalling, with any payload.
#[inline]
pub fn is_nan_bits(u: u32) -> bool {
    (u & !SIGN_MASK) > POSITIVE_INFINITY
}

/// True when `u` encodes a subnormal value.
#[inline]
pub fn is_subnormal_bits(u: u32) -> bool {
    u & EXPONENT_MASK == 0 && u & MANTISSA_MASK != 0
}


// - tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EDGES: [u32; 14] = [
        0x0000_0000, // +0
        0x8000_0000, // -0
        0x0000_0001, // smallest subnormal
        0x807f_ffff, // largest negative subnormal
        0x0080_0000, // smallest normal
        0x7f7f_ffff, // f32::MAX
        0xff7f_ffff, // f32::MIN
        0x7f80_0000, // +inf
        0xff80_0000, // -inf
        0x7fc0_0000, // canonical quiet NaN
        0xffc0_0001, // negative quiet NaN with payload
        0x7f80_0001, // signalling NaN
        0x7fbf_ffff, // signalling NaN, full payload
        0xffff_ffff,
    ];

    #[test]
    fn edge_patterns_round_trip() {
        for &u in EDGES.iter() {
            assert_eq!(float_to_bits(bits_to_float(u)), u, "{:#010x}", u);
        }
    }

    #[test]
    fn sampled_patterns_round_trip() {
        // 65521 is prime, so the stride walks every exponent and both signs
        for u in (0..=u32::MAX).step_by(65_521) {
            assert_eq!(float_to_bits(bits_to_float(u)), u, "{:#010x}", u);
        }
        for exponent in 0..=0xffu32 {
            for &low in [0u32, 1, 0x0040_0000, MANTISSA_MASK].iter() {
                let u = (exponent << 23) | low;
                assert_eq!(float_to_bits(bits_to_float(u)), u);
                assert_eq!(float_to_bits(bits_to_float(u | SIGN_MASK)), u | SIGN_MASK);
            }
        }
    }

    #[test]
    fn float_to_bits_is_exact() {
        assert_eq!(float_to_bits(1.0), 0x3f80_0000);
        assert_eq!(float_to_bits(-0.0), 0x8000_0000);
        assert_eq!(float_to_bits(f32::INFINITY), POSITIVE_INFINITY);
        assert_eq!(float_to_bits(f32::NEG_INFINITY), NEGATIVE_INFINITY);
        assert_eq!(float_to_bits(1.4e-45), 0x0000_0001);
    }

    #[test]
    fn classifies_raw_patterns() {
        assert!(is_nan_bits(0x7fc0_0000));
        assert!(is_nan_bits(0xff80_0001));
        assert!(!is_nan_bits(POSITIVE_INFINITY));
        assert!(!is_nan_bits(NEGATIVE_INFINITY));

        assert!(is_subnormal_bits(float_to_bits(1.4e-42)));
        assert!(is_subnormal_bits(float_to_bits(-3.2e-43)));
        assert!(!is_subnormal_bits(0x8000_0000));
        assert!(!is_subnormal_bits(float_to_bits(f32::MIN_POSITIVE)));
    }
}
