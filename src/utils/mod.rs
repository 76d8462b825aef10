mod helper_functions;

#[cfg(test)]
pub mod testing;

pub use helper_functions::{derive_anti_encoding, lifetime_from_width};
