//! Seeded synthetic event generator.
//!
//! Stands in for a full showering engine when no event file is available:
//! useful for throughput measurements and for observing the seed policy end
//! to end (system-entropy runs diverge, fixed-seed runs repeat exactly).
//! This generates kinematically plausible records, nothing more; it models no
//! physics.

use rand::Rng;
use serde::{Deserialize, Serialize};

use ptx_core::errors::PtxError;
use ptx_core::rng::{derive_substream_seed, RngHandle};
use ptx_core::{CollisionEvent, EventSource, ParticleRecord};

/// Parameters for the synthetic generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Number of events to generate before end of stream.
    pub events: u64,
    /// Maximum particle multiplicity per event (at least 1).
    #[serde(default = "default_multiplicity")]
    pub max_multiplicity: usize,
    /// Species menu sampled uniformly; the sign is drawn separately.
    #[serde(default = "default_species_menu")]
    pub species_menu: Vec<i32>,
    /// Upper bound on the magnitude of each momentum component (GeV).
    #[serde(default = "default_max_component")]
    pub max_component: f64,
}

fn default_multiplicity() -> usize {
    8
}

fn default_species_menu() -> Vec<i32> {
    vec![11, 13, 15, 22, 211]
}

fn default_max_component() -> f64 {
    50.0
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            events: 16,
            max_multiplicity: default_multiplicity(),
            species_menu: default_species_menu(),
            max_component: default_max_component(),
        }
    }
}

/// Event source generating random events from a seeded master stream.
///
/// Each event draws from its own substream, derived from the master seed and
/// the event ordinal, so the content of event `n` depends only on the pair
/// `(master_seed, n)` and not on how many events were drawn before it.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    config: SyntheticConfig,
    master_seed: u64,
    ordinal: u64,
}

impl SyntheticSource {
    /// Creates a generator from its parameters and a resolved master seed.
    pub fn new(config: SyntheticConfig, seed: u64) -> Self {
        Self {
            config,
            master_seed: seed,
            ordinal: 0,
        }
    }

    fn generate_particle(config: &SyntheticConfig, rng: &mut RngHandle) -> ParticleRecord {
        let rng = rng.inner_mut();
        let menu = &config.species_menu;
        let magnitude = if menu.is_empty() {
            15
        } else {
            menu[rng.gen_range(0..menu.len())]
        };
        let id = if rng.gen_bool(0.5) { magnitude } else { -magnitude };
        let bound = config.max_component.max(f64::MIN_POSITIVE);
        let px = rng.gen_range(-bound..bound);
        let py = rng.gen_range(-bound..bound);
        let pz = rng.gen_range(-bound..bound);
        // Massless dispersion keeps the record kinematically consistent.
        let e = (px * px + py * py + pz * pz).sqrt();
        ParticleRecord { id, px, py, pz, e }
    }
}

impl EventSource for SyntheticSource {
    fn next_event(&mut self) -> Result<Option<CollisionEvent>, PtxError> {
        if self.ordinal >= self.config.events {
            return Ok(None);
        }
        self.ordinal += 1;
        let mut rng = RngHandle::from_seed(derive_substream_seed(self.master_seed, self.ordinal));
        let cap = self.config.max_multiplicity.max(1);
        let multiplicity = rng.inner_mut().gen_range(1..=cap);
        let particles = (0..multiplicity)
            .map(|_| Self::generate_particle(&self.config, &mut rng))
            .collect();
        Ok(Some(CollisionEvent::new(self.ordinal, particles)))
    }
}
