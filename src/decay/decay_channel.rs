use std::fmt;

use strum_macros::{Display, EnumIter};

use crate::errors::ParticleError;

// Phase space decays are generated for up to four bodies
pub const MAX_DAUGHTERS: usize = 4;

//=====================================================================
// Kinematics model attached to a decay channel. Only the name is
// carried here, daughter momenta are never generated by this crate.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum DecayKind {
    #[strum(serialize = "Phase Space")]
    PhaseSpace,
}

//=====================================================================
// A single decay mode: parent -> daughters with a branching ratio.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct DecayChannel {
    kind: DecayKind,
    parent: String,
    branching_ratio: f64,
    daughters: Vec<String>,
}

impl DecayChannel {
    pub fn phase_space<S: Into<String>>(
        parent: S,
        branching_ratio: f64,
        daughters: &[&str],
    ) -> Result<Self, ParticleError> {
        Self::new(
            DecayKind::PhaseSpace,
            parent.into(),
            branching_ratio,
            daughters.iter().map(|d| d.to_string()).collect(),
        )
    }

    pub fn new(
        kind: DecayKind,
        parent: String,
        branching_ratio: f64,
        daughters: Vec<String>,
    ) -> Result<Self, ParticleError> {
        if parent.is_empty() || daughters.iter().any(|d| d.is_empty()) {
            return Err(ParticleError::EmptyName);
        }
        if !branching_ratio.is_finite() || !(0.0..=1.0).contains(&branching_ratio) {
            return Err(ParticleError::InvalidBranchingRatio { parent, ratio: branching_ratio });
        }
        if daughters.is_empty() || daughters.len() > MAX_DAUGHTERS {
            return Err(ParticleError::InvalidDaughterCount {
                parent,
                count: daughters.len(),
                max: MAX_DAUGHTERS,
            });
        }

        Ok(Self { kind, parent, branching_ratio, daughters })
    }

    pub fn kind(&self) -> DecayKind {
        self.kind
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn branching_ratio(&self) -> f64 {
        self.branching_ratio
    }

    pub fn daughters(&self) -> &[String] {
        &self.daughters
    }

    pub fn num_daughters(&self) -> usize {
        self.daughters.len()
    }

    pub fn daughter(&self, index: usize) -> Option<&str> {
        self.daughters.get(index).map(String::as_str)
    }
}

impl fmt::Display for DecayChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (BR = {:.3}, {})",
            self.parent,
            self.daughters.join(" + "),
            self.branching_ratio,
            self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_phase_space_channel() {
        let channel = DecayChannel::phase_space("sigma0", 1.0, &["lambda", "gamma"]).unwrap();
        assert_eq!(channel.kind(), DecayKind::PhaseSpace);
        assert_eq!(channel.parent(), "sigma0");
        assert_abs_diff_eq!(channel.branching_ratio(), 1.0);
        assert_eq!(channel.num_daughters(), 2);
        assert_eq!(channel.daughter(0), Some("lambda"));
        assert_eq!(channel.daughter(1), Some("gamma"));
        assert_eq!(channel.daughter(2), None);
    }

    #[test]
    fn test_display() {
        let channel = DecayChannel::phase_space("sigma0", 1.0, &["lambda", "gamma"]).unwrap();
        assert_eq!(format!("{}", channel), "sigma0 -> lambda + gamma (BR = 1.000, Phase Space)");
        assert_eq!(format!("{}", DecayKind::PhaseSpace), "Phase Space");
        assert_eq!(DecayKind::iter().count(), 1);
    }

    #[test]
    fn test_rejects_bad_branching_ratio() {
        for ratio in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let result = DecayChannel::phase_space("sigma0", ratio, &["lambda", "gamma"]);
            assert!(matches!(result, Err(ParticleError::InvalidBranchingRatio { .. })));
        }
    }

    #[test]
    fn test_rejects_bad_daughter_count() {
        let none = DecayChannel::phase_space("sigma0", 1.0, &[]);
        assert_eq!(
            none,
            Err(ParticleError::InvalidDaughterCount { parent: String::from("sigma0"), count: 0, max: 4 })
        );

        let too_many = DecayChannel::phase_space("sigma0", 1.0, &["a", "b", "c", "d", "e"]);
        assert!(matches!(too_many, Err(ParticleError::InvalidDaughterCount { count: 5, .. })));
    }

    #[test]
    fn test_rejects_empty_names() {
        assert_eq!(DecayChannel::phase_space("", 1.0, &["gamma"]), Err(ParticleError::EmptyName));
        assert_eq!(DecayChannel::phase_space("sigma0", 1.0, &["lambda", ""]), Err(ParticleError::EmptyName));
    }
}
