use thiserror::Error;

//=====================================================================
// Errors raised while building decay channels or registering
// particles.
//=====================================================================
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParticleError {
    #[error("Branching ratio of {parent} must be finite and within [0, 1], got {ratio}")]
    InvalidBranchingRatio { parent: String, ratio: f64 },
    #[error("Decay of {parent} needs between 1 and {max} daughters, got {count}")]
    InvalidDaughterCount { parent: String, count: usize, max: usize },
    #[error("Channel for {found} cannot join the decay table of {expected}")]
    ParentMismatch { expected: String, found: String },
    #[error("Particle names must not be empty")]
    EmptyName,
    #[error("Particle {0} is already registered")]
    AlreadyRegistered(String),
    #[error("PDG encoding {encoding} requested by {name} is already used by {existing}")]
    EncodingInUse { encoding: i32, name: String, existing: String },
    #[error("Expected a definition named {expected}, builder produced {found}")]
    NameMismatch { expected: String, found: String },
}
