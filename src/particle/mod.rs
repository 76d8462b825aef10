mod parity;
mod particle_definition;

pub use parity::Parity;
pub use particle_definition::{ParticleDefinition, ParticleProperties};
