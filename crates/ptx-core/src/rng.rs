//! Seed policy, deterministic RNG wrapper, and substream derivation.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Policy controlling how the master seed for a run is chosen.
///
/// `SystemEntropy` is the production default: every invocation draws a fresh
/// seed from the operating system, so repeated showering runs over the same
/// input diverge stochastically. `Fixed` pins the seed for reproducible runs
/// and is what every test uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SeedPolicy {
    /// Draw the master seed from operating-system entropy at configuration.
    SystemEntropy,
    /// Use the given master seed verbatim.
    Fixed {
        /// Master seed for the run.
        seed: u64,
    },
}

impl Default for SeedPolicy {
    fn default() -> Self {
        SeedPolicy::SystemEntropy
    }
}

impl SeedPolicy {
    /// Resolves the policy to a concrete master seed.
    ///
    /// Resolution happens exactly once per run, at configuration time, and
    /// the resolved value is recorded in provenance so even entropy-seeded
    /// runs can be replayed afterwards.
    pub fn resolve(&self) -> u64 {
        match self {
            SeedPolicy::SystemEntropy => OsRng.next_u64(),
            SeedPolicy::Fixed { seed } => *seed,
        }
    }
}

/// Deterministic RNG handle exposed to ptx consumers.
///
/// A thin wrapper around `StdRng` documenting the seeding rule used across
/// the workspace: a master `seed: u64` is supplied by the caller, and
/// substreams are derived by hashing `(master_seed, substream_id)` with
/// SipHash-1-3 under fixed zero keys. The rule is stable across platforms.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a mutable reference to the underlying RNG for advanced usage.
    pub fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
