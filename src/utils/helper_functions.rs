use crate::units::hbar_Planck;

//====================================================================
// Assorted helper functions.
//====================================================================

// Mean lifetime (ns) of a resonance with the given width (MeV),
// tau = hbar / Gamma. A non-positive width has no finite lifetime.
#[inline]
pub fn lifetime_from_width(width: f64) -> Option<f64> {
    (width > 0.0).then(|| hbar_Planck / width)
}

// Anti-particle PDG code when none is given explicitly. Self-conjugate
// particles must pass their own code.
#[inline]
pub fn derive_anti_encoding(encoding: i32) -> i32 {
    -encoding
}
