use std::fmt;

use crate::decay::DecayChannel;
use crate::errors::ParticleError;
use crate::unitf64::UnitF64;

//=====================================================================
// Ordered set of decay channels belonging to one parent particle.
//
// Channels are kept sorted by descending branching ratio, channels
// with equal ratios stay in insertion order.
//=====================================================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecayTable {
    channels: Vec<DecayChannel>,
}

impl DecayTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, channel: DecayChannel) -> Result<(), ParticleError> {
        if let Some(parent) = self.parent() {
            if parent != channel.parent() {
                return Err(ParticleError::ParentMismatch {
                    expected: parent.to_string(),
                    found: channel.parent().to_string(),
                });
            }
        }

        let position = self
            .channels
            .iter()
            .position(|existing| existing.branching_ratio() < channel.branching_ratio())
            .unwrap_or(self.channels.len());
        self.channels.insert(position, channel);
        Ok(())
    }

    // Name of the parent particle, taken from the first channel
    pub fn parent(&self) -> Option<&str> {
        self.channels.first().map(DecayChannel::parent)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn channel(&self, index: usize) -> Option<&DecayChannel> {
        self.channels.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecayChannel> {
        self.channels.iter()
    }

    pub fn total_branching_ratio(&self) -> f64 {
        self.channels.iter().map(DecayChannel::branching_ratio).sum()
    }

    // Pick a channel by walking the cumulative branching ratios, normalised
    // by their total so tables that do not sum to one are still usable.
    pub fn select_channel(&self, u: UnitF64) -> Option<&DecayChannel> {
        let total = self.total_branching_ratio();
        if total <= 0.0 {
            return None;
        }

        let target = u.value() * total;
        let mut cumulative = 0.0;
        for channel in &self.channels {
            cumulative += channel.branching_ratio();
            if target < cumulative {
                return Some(channel);
            }
        }
        // u == 1.0 lands on the upper edge of the last populated bucket
        self.channels.iter().rev().find(|channel| channel.branching_ratio() > 0.0)
    }
}

impl<'a> IntoIterator for &'a DecayTable {
    type Item = &'a DecayChannel;
    type IntoIter = std::slice::Iter<'a, DecayChannel>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}

impl fmt::Display for DecayTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DecayTable: {}", self.parent().unwrap_or("(empty)"))?;
        for (index, channel) in self.channels.iter().enumerate() {
            writeln!(f, "  {}: {}", index, channel)?;
        }
        Ok(())
    }
}
