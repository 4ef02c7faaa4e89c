//! Species filter applied to each particle record.

use ptx_core::{ParticleRecord, TargetSpecies};

/// Returns true iff the record's species magnitude equals the target.
///
/// Matching ignores the sign of the PDG code, so a species and its
/// antiparticle are both selected.
pub fn matches_species(record: &ParticleRecord, target: TargetSpecies) -> bool {
    target.matches_id(record.id)
}
