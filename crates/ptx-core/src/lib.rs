#![deny(missing_docs)]
#![doc = "Core traits and data types for the ptx extraction pipeline: event and particle records, the event-source contract, structured errors, seeding, and run provenance."]

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, PtxError};
pub use provenance::RunProvenance;
pub use rng::{derive_substream_seed, RngHandle, SeedPolicy};

/// One particle produced by a simulated collision.
///
/// The identifier follows the PDG numbering scheme: the sign distinguishes a
/// particle from its antiparticle, the magnitude identifies the species.
/// Records are immutable once produced by an event source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    /// Signed PDG species code.
    pub id: i32,
    /// Momentum component along the x axis (GeV).
    pub px: f64,
    /// Momentum component along the y axis (GeV).
    pub py: f64,
    /// Momentum component along the beam axis (GeV).
    pub pz: f64,
    /// Energy component (GeV).
    pub e: f64,
}

impl ParticleRecord {
    /// Creates a record from a species code and the transverse momentum
    /// components, leaving the longitudinal and energy components at zero.
    ///
    /// Convenient for scripted sources and tests where only the transverse
    /// plane matters.
    pub fn transverse(id: i32, px: f64, py: f64) -> Self {
        Self {
            id,
            px,
            py,
            pz: 0.0,
            e: 0.0,
        }
    }
}

/// One simulated collision outcome: the ordered particle records produced by
/// a single step of the event source.
///
/// Events are transient. An event source owns the event only until the next
/// one is requested, and consumers must not retain it across `next_event`
/// calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// 1-based position of this event in the stream.
    pub ordinal: u64,
    /// Particle records in production order.
    pub particles: Vec<ParticleRecord>,
}

impl CollisionEvent {
    /// Creates an event from its stream ordinal and particle records.
    pub fn new(ordinal: u64, particles: Vec<ParticleRecord>) -> Self {
        Self { ordinal, particles }
    }

    /// Returns the number of particle records in the event.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns true when the event carries no particle records.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Species selector matching on PDG code magnitude.
///
/// Matching is symmetric under sign: a species and its antiparticle both
/// match the same target. This preserves the observed contract of the
/// extraction pipeline; a future species policy that distinguishes the two
/// must change this type, not its callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetSpecies(u32);

impl TargetSpecies {
    /// Creates a selector from a signed PDG code; the sign is discarded.
    pub fn from_code(code: i32) -> Self {
        Self(code.unsigned_abs())
    }

    /// Creates a selector directly from a species magnitude.
    pub fn from_magnitude(magnitude: u32) -> Self {
        Self(magnitude)
    }

    /// Returns the species magnitude this selector matches.
    pub fn magnitude(&self) -> u32 {
        self.0
    }

    /// Returns true when the signed code identifies this species or its
    /// antiparticle.
    pub fn matches_id(&self, id: i32) -> bool {
        id.unsigned_abs() == self.0
    }
}

/// Pull-based contract for the simulation driver adapter.
///
/// A source yields events one at a time: `Ok(Some(event))` advances the
/// stream, `Ok(None)` signals a clean end of stream, and `Err` reports an
/// engine fault that terminates the stream early. The two terminal outcomes
/// are deliberately distinct so callers can return partial results on fault.
///
/// Sources are stateful and single-use. Engine state (random stream, internal
/// buffers) is not safely shareable, so at most one pipeline may drive a
/// given source; concurrent extraction requires one source instance per
/// pipeline with independent seeding.
pub trait EventSource {
    /// Produces the next event, end-of-stream, or an engine fault.
    fn next_event(&mut self) -> Result<Option<CollisionEvent>, PtxError>;
}
