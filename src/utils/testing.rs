//=====================================================================
// Utility functions shared by the unit tests
//=====================================================================

use lazy_static::lazy_static;

use crate::particle::{Parity, ParticleDefinition, ParticleProperties};
use crate::table::ParticleTable;
use crate::units::{GeV, MeV, ns};

lazy_static! {
    // env_logger may only be installed once per test binary
    static ref LOGGER: () = {
        let _ = env_logger::builder().is_test(true).try_init();
    };
}

pub fn init_logging() {
    lazy_static::initialize(&LOGGER);
}

// A fresh table holding the decay products of sigma0
pub fn populated_table() -> ParticleTable {
    init_logging();
    let table = ParticleTable::with_verbose_level(1);

    table
        .insert(ParticleDefinition::new(ParticleProperties {
            name: String::from("gamma"),
            twice_spin: 2,
            parity: Parity::Odd,
            c_conjugation: Parity::Odd,
            particle_type: String::from("gamma"),
            pdg_encoding: 22,
            stable: true,
            anti_pdg_encoding: 22,
            particle_sub_type: String::from("photon"),
            ..Default::default()
        }))
        .unwrap();

    table
        .insert(
            ParticleDefinition::new(ParticleProperties {
                name: String::from("lambda"),
                mass: 1.115683 * GeV,
                width: 2.501e-12 * MeV,
                twice_spin: 1,
                parity: Parity::Even,
                particle_type: String::from("baryon"),
                baryon_number: 1,
                pdg_encoding: 3122,
                lifetime: 0.2631 * ns,
                particle_sub_type: String::from("lambda"),
                ..Default::default()
            })
            .with_lifetime_from_width(),
        )
        .unwrap();

    table
}
