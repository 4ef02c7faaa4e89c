//! Pipeline state machine and result reporting.

use serde::{Deserialize, Serialize};

use ptx_core::errors::{ErrorInfo, PtxError};
use ptx_core::{EventSource, TargetSpecies};

use crate::aggregator::BoundedAggregator;
use crate::filter::matches_species;
use crate::kinematics::transverse_momentum;

/// Terminal status of one extraction invocation, with a stable integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionStatus {
    /// Stream consumed to the end; every match is in the buffer.
    Success,
    /// Configuration fault; nothing was processed.
    Config,
    /// Engine fault mid-stream; the partial count is still meaningful.
    Simulation,
    /// Buffer capacity reached; the written prefix is still meaningful.
    Overflow,
}

impl ExtractionStatus {
    /// Stable integer code for callers that compare statuses numerically.
    pub fn code(&self) -> i32 {
        match self {
            ExtractionStatus::Success => 0,
            ExtractionStatus::Config => 1,
            ExtractionStatus::Simulation => 2,
            ExtractionStatus::Overflow => 3,
        }
    }

    /// Returns true for the success status.
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionStatus::Success)
    }

    fn from_error(err: &PtxError) -> Self {
        match err {
            PtxError::Config(_) => ExtractionStatus::Config,
            PtxError::Simulation(_) => ExtractionStatus::Simulation,
            PtxError::Overflow(_) => ExtractionStatus::Overflow,
            // Artifact IO never happens mid-stream; surfaced as configuration.
            PtxError::Serde(_) => ExtractionStatus::Config,
        }
    }
}

/// Tally reported to the caller once the pipeline reaches a terminal state.
///
/// `count` is the number of buffer slots written; on a fault it is the last
/// consistent value, taken at the moment the fault occurred. The triggering
/// error payload rides along so nothing is silently swallowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    /// Number of extracted values written to the buffer prefix.
    pub count: usize,
    /// Terminal status.
    pub status: ExtractionStatus,
    /// Payload of the triggering error, when the status is not success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl ExtractionOutcome {
    /// Returns true when the stream completed without a fault.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Lifecycle of a pipeline instance.
///
/// `Configured -> Streaming -> {Completed, Faulted}`. The uninitialized
/// phase before `Configured` is the absence of a pipeline value: binding a
/// source, target, and buffer at construction is the configuring transition,
/// so an unconfigured pipeline is unrepresentable. No transition leaves the
/// terminal states; a pipeline is single-use and retries require a fresh
/// source and buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Source, target species, and buffer are bound; ready to stream.
    Configured,
    /// Consuming events from the source.
    Streaming,
    /// Stream ended cleanly; the outcome has been reported.
    Completed,
    /// A component fault ended the run; the outcome has been reported.
    Faulted,
}

/// Single-use extraction pipeline bound to one source and one output buffer.
#[derive(Debug)]
pub struct Pipeline<'buf, S> {
    source: S,
    target: TargetSpecies,
    aggregator: BoundedAggregator<'buf>,
    state: PipelineState,
}

impl<'buf, S: EventSource> Pipeline<'buf, S> {
    /// Binds a source, target species, and caller-owned buffer.
    ///
    /// The buffer stays exclusively borrowed until the pipeline is dropped;
    /// the caller reads the written prefix only after [`Pipeline::run`]
    /// reports the outcome.
    pub fn configure(source: S, target: TargetSpecies, buffer: &'buf mut [f64]) -> Self {
        Self {
            source,
            target,
            aggregator: BoundedAggregator::new(buffer),
            state: PipelineState::Configured,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Runs the stream to completion or first fault and reports the tally.
    ///
    /// A second invocation on the same instance does not restart the stream;
    /// it reports a configuration fault with the count left as is.
    pub fn run(&mut self) -> ExtractionOutcome {
        if self.state != PipelineState::Configured {
            return ExtractionOutcome {
                count: self.aggregator.count(),
                status: ExtractionStatus::Config,
                error: Some(
                    ErrorInfo::new("pipeline-reused", "extraction pipeline is single-use")
                        .with_hint("configure a fresh source and buffer to retry"),
                ),
            };
        }
        self.state = PipelineState::Streaming;
        match self.stream() {
            Ok(()) => {
                self.state = PipelineState::Completed;
                ExtractionOutcome {
                    count: self.aggregator.count(),
                    status: ExtractionStatus::Success,
                    error: None,
                }
            }
            Err(err) => {
                self.state = PipelineState::Faulted;
                ExtractionOutcome {
                    count: self.aggregator.count(),
                    status: ExtractionStatus::from_error(&err),
                    error: Some(err.info().clone()),
                }
            }
        }
    }

    fn stream(&mut self) -> Result<(), PtxError> {
        while let Some(event) = self.source.next_event()? {
            for particle in &event.particles {
                if matches_species(particle, self.target) {
                    let pt = transverse_momentum(particle.px, particle.py);
                    self.aggregator.push(pt)?;
                }
            }
        }
        Ok(())
    }
}

/// One-shot wrapper: configure a pipeline, run it, report the outcome.
///
/// The buffer prefix `[0, outcome.count)` holds one transverse momentum per
/// matching particle, in event order and then particle order within each
/// event.
pub fn extract_transverse_momenta<S: EventSource>(
    source: S,
    target: TargetSpecies,
    buffer: &mut [f64],
) -> ExtractionOutcome {
    Pipeline::configure(source, target, buffer).run()
}
