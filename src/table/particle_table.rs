use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::sync::atomic::{AtomicU8, Ordering};

use anyhow::{Context, Result};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use lazy_static::lazy_static;
use log::{debug, trace, warn};

use crate::errors::ParticleError;
use crate::particle::ParticleDefinition;

lazy_static! {
    // Process-wide registry shared by every accessor in the crate
    static ref GLOBAL_TABLE: ParticleTable = ParticleTable::new();
}

//=====================================================================
// Registry of particle definitions keyed by name, with a secondary
// index on PDG code. At most one definition exists per name; entries
// are never removed, so handed-out `Arc`s stay canonical.
//
// Verbose levels: 0 silent, 1 logs registrations, 2 also logs lookups.
//=====================================================================
#[derive(Debug, Default)]
pub struct ParticleTable {
    particles: DashMap<String, Arc<ParticleDefinition>>,
    encodings: DashMap<i32, String>,
    // Serialises builders per name in `find_or_insert_with`
    pending: DashMap<String, Arc<Mutex<()>>>,
    verbose_level: AtomicU8,
}

impl ParticleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose_level(level: u8) -> Self {
        let table = Self::new();
        table.set_verbose_level(level);
        table
    }

    pub fn global() -> &'static ParticleTable {
        &GLOBAL_TABLE
    }

    pub fn verbose_level(&self) -> u8 {
        self.verbose_level.load(Ordering::Relaxed)
    }

    pub fn set_verbose_level(&self, level: u8) {
        self.verbose_level.store(level, Ordering::Relaxed);
    }

    pub fn find_particle(&self, name: &str) -> Option<Arc<ParticleDefinition>> {
        let found = self.particles.get(name).map(|entry| Arc::clone(entry.value()));
        if self.verbose_level() > 1 {
            trace!("Lookup of {}: {}", name, if found.is_some() { "found" } else { "missing" });
        }
        found
    }

    pub fn find_particle_by_encoding(&self, encoding: i32) -> Option<Arc<ParticleDefinition>> {
        if encoding == 0 {
            return None;
        }
        let name = self.encodings.get(&encoding).map(|entry| entry.value().clone())?;
        self.find_particle(&name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.particles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.particles.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    pub fn insert(&self, definition: ParticleDefinition) -> Result<Arc<ParticleDefinition>, ParticleError> {
        if definition.name().is_empty() {
            return Err(ParticleError::EmptyName);
        }

        match self.particles.entry(definition.name().to_string()) {
            Entry::Occupied(_) => {
                warn!("Refusing to register {} twice", definition.name());
                Err(ParticleError::AlreadyRegistered(definition.name().to_string()))
            }
            Entry::Vacant(slot) => {
                let definition = Arc::new(definition);
                self.claim_encoding(&definition)?;
                slot.insert(Arc::clone(&definition));
                self.log_registration(&definition);
                Ok(definition)
            }
        }
    }

    // Lookup-or-create. `build` runs at most once per name: concurrent
    // callers for the same name queue on a per-name gate and adopt the
    // first result. No map lock is held while `build` runs, so it may
    // look up or create other particles in this table. A failing `build`
    // leaves the name unregistered. A PDG code already owned by another
    // name stays with that name; the new particle is still registered.
    pub fn find_or_insert_with<F>(&self, name: &str, build: F) -> Result<Arc<ParticleDefinition>, ParticleError>
    where
        F: FnOnce() -> Result<ParticleDefinition, ParticleError>,
    {
        if name.is_empty() {
            return Err(ParticleError::EmptyName);
        }
        if let Some(existing) = self.adopt(name) {
            return Ok(existing);
        }

        let gate = Arc::clone(self.pending.entry(name.to_string()).or_default().value());
        let _guard = gate.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = self.adopt(name) {
            return Ok(existing);
        }

        let definition = build()?;
        if definition.name() != name {
            return Err(ParticleError::NameMismatch {
                expected: name.to_string(),
                found: definition.name().to_string(),
            });
        }

        let registered = match self.particles.entry(name.to_string()) {
            // Registered through `insert` while we were building
            Entry::Occupied(existing) => Arc::clone(existing.get()),
            Entry::Vacant(slot) => {
                let definition = Arc::new(definition);
                self.index_encoding(&definition);
                slot.insert(Arc::clone(&definition));
                self.log_registration(&definition);
                definition
            }
        };
        self.pending.remove(name);
        Ok(registered)
    }

    // Write every registered particle, sorted by name
    pub fn dump_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        for name in self.names() {
            if let Some(definition) = self.find_particle(&name) {
                write!(writer, "{}", definition).with_context(|| format!("Failed to write {}", name))?;
            }
        }
        writer.flush().context("Failed to flush particle table dump")?;
        Ok(())
    }

    fn claim_encoding(&self, definition: &ParticleDefinition) -> Result<(), ParticleError> {
        let encoding = definition.pdg_encoding();
        if encoding == 0 {
            return Ok(());
        }

        match self.encodings.entry(encoding) {
            Entry::Occupied(existing) => {
                warn!("PDG code {} of {} is already used by {}", encoding, definition.name(), existing.get());
                Err(ParticleError::EncodingInUse {
                    encoding,
                    name: definition.name().to_string(),
                    existing: existing.get().clone(),
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(definition.name().to_string());
                Ok(())
            }
        }
    }

    fn adopt(&self, name: &str) -> Option<Arc<ParticleDefinition>> {
        let existing = self.particles.get(name).map(|entry| Arc::clone(entry.value()))?;
        if self.verbose_level() > 1 {
            trace!("Adopting registered definition of {}", name);
        }
        Some(existing)
    }

    // Keeps the first owner of a PDG code
    fn index_encoding(&self, definition: &ParticleDefinition) {
        let encoding = definition.pdg_encoding();
        if encoding == 0 {
            return;
        }

        let owner = self.encodings.entry(encoding).or_insert_with(|| definition.name().to_string());
        if owner.value() != definition.name() {
            warn!(
                "PDG code {} of {} stays with {}, {} is reachable by name only",
                encoding,
                definition.name(),
                owner.value(),
                definition.name()
            );
        }
    }

    fn log_registration(&self, definition: &ParticleDefinition) {
        if self.verbose_level() > 0 {
            debug!("Registered {} (PDG {})", definition.name(), definition.pdg_encoding());
        }
    }
}
