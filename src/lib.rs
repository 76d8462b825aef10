//! Particle definitions, decay tables and a process-wide particle table.
//!
//! ```
//! use ptable_rs::SigmaZero;
//!
//! let sigma0 = SigmaZero::definition();
//! assert_eq!(sigma0.pdg_encoding(), 3212);
//! ```

pub mod baryons;
pub mod decay;
pub mod errors;
pub mod particle;
pub mod table;
pub mod units;

mod unitf64;
mod utils;

pub use baryons::SigmaZero;
pub use decay::{DecayChannel, DecayKind, DecayTable};
pub use errors::ParticleError;
pub use particle::{Parity, ParticleDefinition, ParticleProperties};
pub use table::ParticleTable;
pub use unitf64::UnitF64;
