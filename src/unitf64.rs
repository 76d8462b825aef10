// Decay channel selection expects a random number between 0.0 and 1.0, inclusive, supplied by
// the caller's own generator. This wrapper documents that contract, but it is not a runtime
// check. It is up to the caller to ensure the value is in the range [0.0, 1.0].
//
// During debug builds, a panic will occur if the value is outside of the range [0.0, 1.0].
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnitF64(pub f64);

impl UnitF64 {
    #[inline(always)]
    pub fn new_unchecked(val: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&val),
            "UnitF64 must be in [0.0, 1.0], got {}",
            val
        );
        UnitF64(val)
    }

    #[inline(always)]
    pub fn value(self) -> f64 {
        self.0
    }
}
