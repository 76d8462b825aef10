#![allow(non_upper_case_globals)]

//=====================================================================
// Unit multipliers. Internal units are MeV for energy and ns for time,
// so a quantity is written as `1.192642 * GeV` and read back in any
// unit by dividing, e.g. `width / keV`.
//=====================================================================

// Energy
pub const megaelectronvolt: f64 = 1.0;
pub const electronvolt: f64 = 1.0e-6 * megaelectronvolt;
pub const kiloelectronvolt: f64 = 1.0e-3 * megaelectronvolt;
pub const gigaelectronvolt: f64 = 1.0e3 * megaelectronvolt;
pub const teraelectronvolt: f64 = 1.0e6 * megaelectronvolt;

pub const eV: f64 = electronvolt;
pub const keV: f64 = kiloelectronvolt;
pub const MeV: f64 = megaelectronvolt;
pub const GeV: f64 = gigaelectronvolt;
pub const TeV: f64 = teraelectronvolt;

// Time
pub const nanosecond: f64 = 1.0;
pub const second: f64 = 1.0e9 * nanosecond;
pub const millisecond: f64 = 1.0e-3 * second;
pub const microsecond: f64 = 1.0e-6 * second;
pub const picosecond: f64 = 1.0e-12 * second;

pub const ns: f64 = nanosecond;
pub const s: f64 = second;
pub const ms: f64 = millisecond;
pub const us: f64 = microsecond;
pub const ps: f64 = picosecond;

// Electric charge, in units of the positron charge
pub const eplus: f64 = 1.0;
// Positron charge in coulomb
pub const e_SI: f64 = 1.602176487e-19;

// Derived energy unit
pub const joule: f64 = electronvolt / e_SI;
