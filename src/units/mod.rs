mod physical_constants;
mod system_of_units;

pub use physical_constants::*;
pub use system_of_units::*;
