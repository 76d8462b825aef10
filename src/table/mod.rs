mod particle_table;

pub use particle_table::ParticleTable;
