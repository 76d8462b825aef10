use std::sync::Arc;

use lazy_static::lazy_static;

use crate::decay::{DecayChannel, DecayTable};
use crate::errors::ParticleError;
use crate::particle::{Parity, ParticleDefinition, ParticleProperties};
use crate::table::ParticleTable;
use crate::units::{GeV, MeV, ns};

lazy_static! {
    // Filled on first access from the global particle table
    static ref INSTANCE: Arc<ParticleDefinition> = SigmaZero::definition_in(ParticleTable::global())
        .expect("sigma0 constants are valid");
}

//=====================================================================
// Accessor for the neutral sigma baryon (uds, PDG 3212).
//
// The definition is registered in the global particle table on first
// use and the same `Arc` is returned by every later call. A sigma0
// already registered by someone else is adopted instead of rebuilt.
//=====================================================================
pub struct SigmaZero;

impl SigmaZero {
    pub const NAME: &'static str = "sigma0";

    pub fn definition() -> Arc<ParticleDefinition> {
        Arc::clone(&INSTANCE)
    }

    pub fn sigma_zero_definition() -> Arc<ParticleDefinition> {
        Self::definition()
    }

    pub fn sigma_zero() -> Arc<ParticleDefinition> {
        Self::definition()
    }

    // Find or create sigma0 in an explicit table. Not cached.
    pub fn definition_in(table: &ParticleTable) -> Result<Arc<ParticleDefinition>, ParticleError> {
        table.find_or_insert_with(Self::NAME, Self::build)
    }

    fn build() -> Result<ParticleDefinition, ParticleError> {
        let mut table = DecayTable::new();
        // sigma0 -> lambda + gamma
        table.insert(DecayChannel::phase_space(Self::NAME, 1.000, &["lambda", "gamma"])?)?;

        let definition = ParticleDefinition::new(ParticleProperties {
            name: Self::NAME.to_string(),
            mass: 1.192642 * GeV,
            width: 8.9e-3 * MeV,
            charge: 0.0,
            twice_spin: 1,
            parity: Parity::Even,
            c_conjugation: Parity::Undefined,
            twice_isospin: 2,
            twice_isospin3: 0,
            g_parity: Parity::Undefined,
            particle_type: String::from("baryon"),
            lepton_number: 0,
            baryon_number: 1,
            pdg_encoding: 3212,
            stable: false,
            lifetime: 7.4e-11 * ns,
            decay_table: None,
            short_lived: false,
            particle_sub_type: String::from("sigma"),
            anti_pdg_encoding: 0,
        });

        Ok(definition.with_lifetime_from_width().with_decay_table(table))
    }
}
