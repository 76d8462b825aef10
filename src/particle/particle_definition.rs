use std::fmt;

use crate::decay::DecayTable;
use crate::particle::Parity;
use crate::utils;

//=====================================================================
// Constructor arguments for a particle definition, laid out in the
// order physics tables usually list them. Quantum numbers that are
// half-integral are stored doubled (2*spin, 2*isospin, 2*isospin3).
//=====================================================================
#[derive(Clone, Debug, Default)]
pub struct ParticleProperties {
    pub name: String,
    pub mass: f64,
    pub width: f64,
    pub charge: f64,
    pub twice_spin: i32,
    pub parity: Parity,
    pub c_conjugation: Parity,
    pub twice_isospin: i32,
    pub twice_isospin3: i32,
    pub g_parity: Parity,
    pub particle_type: String,
    pub lepton_number: i32,
    pub baryon_number: i32,
    pub pdg_encoding: i32,
    pub stable: bool,
    pub lifetime: f64,
    pub decay_table: Option<DecayTable>,
    pub short_lived: bool,
    pub particle_sub_type: String,
    // 0 derives the code from `pdg_encoding`
    pub anti_pdg_encoding: i32,
}

//=====================================================================
// Immutable bundle of the physical properties of one particle
// species. Shared through `Arc` once registered in a `ParticleTable`.
//=====================================================================
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleDefinition {
    name: String,
    mass: f64,
    width: f64,
    charge: f64,
    twice_spin: i32,
    parity: Parity,
    c_conjugation: Parity,
    twice_isospin: i32,
    twice_isospin3: i32,
    g_parity: Parity,
    particle_type: String,
    particle_sub_type: String,
    lepton_number: i32,
    baryon_number: i32,
    pdg_encoding: i32,
    anti_pdg_encoding: i32,
    stable: bool,
    short_lived: bool,
    lifetime: f64,
    decay_table: Option<DecayTable>,
}

impl ParticleDefinition {
    pub fn new(properties: ParticleProperties) -> Self {
        let anti_pdg_encoding = match properties.anti_pdg_encoding {
            0 => utils::derive_anti_encoding(properties.pdg_encoding),
            code => code,
        };

        Self {
            name: properties.name,
            mass: properties.mass,
            width: properties.width,
            charge: properties.charge,
            twice_spin: properties.twice_spin,
            parity: properties.parity,
            c_conjugation: properties.c_conjugation,
            twice_isospin: properties.twice_isospin,
            twice_isospin3: properties.twice_isospin3,
            g_parity: properties.g_parity,
            particle_type: properties.particle_type,
            particle_sub_type: properties.particle_sub_type,
            lepton_number: properties.lepton_number,
            baryon_number: properties.baryon_number,
            pdg_encoding: properties.pdg_encoding,
            anti_pdg_encoding,
            stable: properties.stable,
            short_lived: properties.short_lived,
            lifetime: properties.lifetime,
            decay_table: properties.decay_table,
        }
    }

    // Replace the nominal lifetime by hbar / width. Leaves the lifetime
    // untouched for particles without a width.
    pub fn with_lifetime_from_width(mut self) -> Self {
        if let Some(lifetime) = utils::lifetime_from_width(self.width) {
            self.lifetime = lifetime;
        }
        self
    }

    pub fn with_decay_table(mut self, table: DecayTable) -> Self {
        self.decay_table = Some(table);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn twice_spin(&self) -> i32 {
        self.twice_spin
    }

    pub fn spin(&self) -> f64 {
        f64::from(self.twice_spin) / 2.0
    }

    pub fn parity(&self) -> Parity {
        self.parity
    }

    pub fn c_conjugation(&self) -> Parity {
        self.c_conjugation
    }

    pub fn twice_isospin(&self) -> i32 {
        self.twice_isospin
    }

    pub fn isospin(&self) -> f64 {
        f64::from(self.twice_isospin) / 2.0
    }

    pub fn twice_isospin3(&self) -> i32 {
        self.twice_isospin3
    }

    pub fn isospin3(&self) -> f64 {
        f64::from(self.twice_isospin3) / 2.0
    }

    pub fn g_parity(&self) -> Parity {
        self.g_parity
    }

    pub fn particle_type(&self) -> &str {
        &self.particle_type
    }

    pub fn particle_sub_type(&self) -> &str {
        &self.particle_sub_type
    }

    pub fn lepton_number(&self) -> i32 {
        self.lepton_number
    }

    pub fn baryon_number(&self) -> i32 {
        self.baryon_number
    }

    pub fn pdg_encoding(&self) -> i32 {
        self.pdg_encoding
    }

    pub fn anti_pdg_encoding(&self) -> i32 {
        self.anti_pdg_encoding
    }

    pub fn is_stable(&self) -> bool {
        self.stable
    }

    pub fn is_short_lived(&self) -> bool {
        self.short_lived
    }

    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }

    pub fn decay_table(&self) -> Option<&DecayTable> {
        self.decay_table.as_ref()
    }
}

impl fmt::Display for ParticleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::units::{MeV, ns};

        writeln!(f, "--- {} ---", self.name)?;
        writeln!(f, "  PDG code: {}  (anti: {})", self.pdg_encoding, self.anti_pdg_encoding)?;
        writeln!(f, "  Type: {} / {}", self.particle_type, self.particle_sub_type)?;
        writeln!(f, "  Mass [MeV]: {}  Width [MeV]: {}", self.mass / MeV, self.width / MeV)?;
        writeln!(f, "  Charge [e+]: {}", self.charge)?;
        writeln!(
            f,
            "  2*Spin: {}  Parity: {}  C-conjugation: {}",
            self.twice_spin, self.parity, self.c_conjugation
        )?;
        writeln!(
            f,
            "  2*Isospin: {}  2*Isospin3: {}  G-parity: {}",
            self.twice_isospin, self.twice_isospin3, self.g_parity
        )?;
        writeln!(f, "  Lepton number: {}  Baryon number: {}", self.lepton_number, self.baryon_number)?;
        if self.stable {
            writeln!(f, "  Stable")?;
        } else {
            writeln!(f, "  Lifetime [ns]: {:e}", self.lifetime / ns)?;
        }
        match &self.decay_table {
            Some(table) => write!(f, "{}", table),
            None => writeln!(f, "  Decay table not defined"),
        }
    }
}
