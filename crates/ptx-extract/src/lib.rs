//! Event-filtered kinematic extraction pipeline.
//!
//! Drives an [`ptx_core::EventSource`] to end of stream, filters each event's
//! particle records by species, derives the transverse momentum of every
//! match, and writes the scalars into a caller-owned bounded buffer. The
//! terminal count and status are reported through [`ExtractionOutcome`].

pub mod aggregator;
pub mod filter;
pub mod kinematics;
pub mod pipeline;

pub use aggregator::BoundedAggregator;
pub use filter::matches_species;
pub use kinematics::transverse_momentum;
pub use pipeline::{
    extract_transverse_momenta, ExtractionOutcome, ExtractionStatus, Pipeline, PipelineState,
};
