#![allow(non_upper_case_globals)]

use std::f64::consts::TAU;

use crate::units::system_of_units::{joule, s};

//=====================================================================
// Physical constants expressed in the internal unit system
// (MeV, ns). Values follow CODATA 2006.
//=====================================================================

// Planck constant
pub const h_Planck: f64 = 6.62606896e-34 * joule * s;
// Reduced Planck constant, ~6.582e-13 MeV*ns
pub const hbar_Planck: f64 = h_Planck / TAU;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{eV, MeV, ns};

    use approx::assert_relative_eq;

    #[test]
    fn test_hbar_in_internal_units() {
        assert_relative_eq!(hbar_Planck / (MeV * ns), 6.58211899e-13, max_relative = 1e-8);
    }

    #[test]
    fn test_hbar_in_ev_seconds() {
        assert_relative_eq!(hbar_Planck / (eV * s), 6.58211899e-16, max_relative = 1e-8);
    }
}
