use crate::bitcast::float_to_bits;
use crate::error::{Error, Result};


// - TestVector ---------------------------------------------------------------

/// One pair of operands for the routine under test
#[derive(Clone, Copy, Debug)]
pub struct TestVector {
    pub a: f32,
    pub b: f32,
}

impl TestVector {
    pub const fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }

    /// Operands as they are passed across the call boundary.
    pub fn bits(&self) -> (u32, u32) {
        (float_to_bits(self.a), float_to_bits(self.b))
    }
}


// - tables -------------------------------------------------------------------

/// The table every routine is graded against. Do not modify.
pub static GRADING_VECTORS: [TestVector; 16] = [
    TestVector::new(   1.175503179e-38, 1.10203478208e-38),
    TestVector::new(  -0.2,             -0.1),
    TestVector::new(   1.0,              2.0),
    TestVector::new(  -3.1,             -1.2),
    TestVector::new(   f32::NAN,         1.0),
    TestVector::new(  -1.0,              f32::NAN),
    TestVector::new(   0.1,              0.99),
    TestVector::new(   1.14437421182e-28, 785.066650391),
    TestVector::new(-4000.1,             0.0),
    TestVector::new(  -1.9e-5,          -1.9e-5),
    TestVector::new(   1.347e10,         2.867e-10),
    // subnormals
    TestVector::new(   1.4e-42,         -3.2e-43),
    TestVector::new(  -2.4e-42,          2.313e29),
    TestVector::new(   f32::INFINITY,    f32::NEG_INFINITY),
    TestVector::new(   f32::NEG_INFINITY, -6.24),
    TestVector::new(   1.0,              0.0),
];

/// Scratch table for debugging a routine, selected with the
/// `debug-vectors` feature. Edit freely.
#[cfg(feature = "debug-vectors")]
pub static DEBUG_VECTORS: [TestVector; 18] = [
    TestVector::new(   1.175503179e-38, 1.10203478208e-38),
    TestVector::new(  -0.2,             -0.1),
    TestVector::new(   1.0,              2.0),
    TestVector::new(  -3.1,             -1.2),
    TestVector::new(   f32::NAN,         1.0),
    TestVector::new(  -1.0,              f32::NAN),
    TestVector::new(   0.1,              0.99),
    TestVector::new(   1.14437421182e-28, 785.066650391),
    TestVector::new(-4000.1,             0.0),
    TestVector::new(  -1.9e-5,          -1.9e-5),
    TestVector::new(   1.347e10,         2.867e-10),
    TestVector::new(   1.4e-42,         -3.2e-43),
    TestVector::new(  -2.4e-42,          2.313e29),
    TestVector::new(   f32::INFINITY,    f32::NEG_INFINITY),
    TestVector::new(   f32::NEG_INFINITY, -6.24),
    TestVector::new(   1.0,              0.0),
    TestVector::new(   0.0,             -0.0),
    TestVector::new(   f32::NAN,         f32::NAN),
];


// - TestTable ----------------------------------------------------------------

/// A non-empty, read-only sequence of test vectors.
#[derive(Clone, Copy, Debug)]
pub struct TestTable {
    vectors: &'static [TestVector],
}

impl TestTable {
    pub fn new(vectors: &'static [TestVector]) -> Result<Self> {
        if vectors.is_empty() {
            return Err(Error::EmptyTestSet);
        }
        Ok(Self { vectors })
    }

    /// The table selected at build time.
    pub fn active() -> Self {
        #[cfg(not(feature = "debug-vectors"))]
        let vectors = &GRADING_VECTORS[..];
        #[cfg(feature = "debug-vectors")]
        let vectors = &DEBUG_VECTORS[..];

        Self { vectors }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn get(&self, index: usize) -> Option<TestVector> {
        self.vectors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestVector> {
        self.vectors.iter()
    }
}


// - tests --------------------------------------------------------------------
