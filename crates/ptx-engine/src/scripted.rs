//! Fixed in-memory event source for tests and determinism checks.

use std::collections::VecDeque;

use ptx_core::errors::{ErrorInfo, PtxError};
use ptx_core::{CollisionEvent, EventSource, ParticleRecord};

/// Event source that replays a fixed in-memory sequence of events.
///
/// Bypasses seeding entirely, so repeated runs over the same script are
/// byte-identical. Optionally faults after the script is exhausted, to
/// exercise the early-termination path of the pipeline.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    events: VecDeque<Vec<ParticleRecord>>,
    ordinal: u64,
    fault_at_end: Option<ErrorInfo>,
}

impl ScriptedSource {
    /// Creates a source replaying the given events in order.
    pub fn new(events: Vec<Vec<ParticleRecord>>) -> Self {
        Self {
            events: events.into(),
            ordinal: 0,
            fault_at_end: None,
        }
    }

    /// Creates a source that replays the given events and then reports a
    /// simulation fault instead of a clean end of stream.
    pub fn faulting(events: Vec<Vec<ParticleRecord>>, info: ErrorInfo) -> Self {
        Self {
            events: events.into(),
            ordinal: 0,
            fault_at_end: Some(info),
        }
    }
}

impl EventSource for ScriptedSource {
    fn next_event(&mut self) -> Result<Option<CollisionEvent>, PtxError> {
        match self.events.pop_front() {
            Some(particles) => {
                self.ordinal += 1;
                Ok(Some(CollisionEvent::new(self.ordinal, particles)))
            }
            None => match self.fault_at_end.take() {
                Some(info) => Err(PtxError::Simulation(info)),
                None => Ok(None),
            },
        }
    }
}
