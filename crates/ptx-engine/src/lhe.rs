//! Les Houches Event file reader.
//!
//! Streams `<event>` blocks from an LHE file one at a time. The header and
//! `<init>` section are skipped; each event block contributes one
//! [`CollisionEvent`] with the particle records listed in block order. The
//! reader is lazy and non-restartable: a fresh source must be opened to
//! stream a file again.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};

use ptx_core::errors::{ErrorInfo, PtxError};
use ptx_core::{CollisionEvent, EventSource, ParticleRecord};

use crate::config::EngineConfig;

/// Event source backed by a Les Houches Event file.
#[derive(Debug)]
pub struct LheSource {
    lines: Lines<BufReader<File>>,
    spec: String,
    ordinal: u64,
    finished: bool,
}

impl LheSource {
    /// Opens the event file named by the configuration.
    ///
    /// Fails with a configuration error when the path does not exist, is not
    /// a regular file, or cannot be opened.
    pub fn open(config: &EngineConfig) -> Result<Self, PtxError> {
        config.validate()?;
        let spec = config.source.display().to_string();
        let file = File::open(&config.source).map_err(|err| {
            PtxError::Config(
                ErrorInfo::new("source-open", err.to_string()).with_context("path", spec.clone()),
            )
        })?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            spec,
            ordinal: 0,
            finished: false,
        })
    }

    /// Returns the event-source specification this reader was opened with.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    fn read_line(&mut self) -> Result<Option<String>, PtxError> {
        match self.lines.next() {
            None => Ok(None),
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(err)) => {
                self.finished = true;
                Err(self.fault("lhe-io", &err.to_string()))
            }
        }
    }

    fn fault(&self, code: &str, message: &str) -> PtxError {
        PtxError::Simulation(
            ErrorInfo::new(code, message)
                .with_context("path", self.spec.clone())
                .with_context("event", self.ordinal.to_string()),
        )
    }

    /// Parses one event block, positioned just after its `<event>` tag.
    fn parse_block(&mut self) -> Result<CollisionEvent, PtxError> {
        let expected = self.parse_header()?;
        let mut particles = Vec::with_capacity(expected);
        while particles.len() < expected {
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    self.finished = true;
                    return Err(self.fault("lhe-truncated", "event block ends mid-particle-list"));
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('<') {
                self.finished = true;
                return Err(self.fault("lhe-truncated", "particle list shorter than its count"));
            }
            particles.push(self.parse_particle(trimmed)?);
        }
        self.skip_to_close()?;
        Ok(CollisionEvent::new(self.ordinal, particles))
    }

    fn parse_header(&mut self) -> Result<usize, PtxError> {
        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    self.finished = true;
                    return Err(self.fault("lhe-truncated", "event block has no header line"));
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let first = trimmed.split_whitespace().next().unwrap_or_default();
            return first.parse::<usize>().map_err(|_| {
                self.finished = true;
                self.fault("lhe-bad-header", &format!("invalid particle count `{first}`"))
            });
        }
    }

    /// Parses one particle line: IDUP ISTUP MOTHUP(2) ICOLUP(2) PUP(5) ...
    fn parse_particle(&mut self, line: &str) -> Result<ParticleRecord, PtxError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 10 {
            self.finished = true;
            return Err(self.fault(
                "lhe-bad-particle",
                &format!("expected at least 10 fields, found {}", tokens.len()),
            ));
        }
        let id = tokens[0].parse::<i32>().map_err(|_| {
            self.fault("lhe-bad-particle", &format!("invalid particle id `{}`", tokens[0]))
        })?;
        let mut momentum = [0.0f64; 4];
        for (slot, token) in momentum.iter_mut().zip(&tokens[6..10]) {
            *slot = token.parse::<f64>().map_err(|_| {
                self.fault(
                    "lhe-bad-particle",
                    &format!("invalid momentum component `{token}`"),
                )
            })?;
        }
        Ok(ParticleRecord {
            id,
            px: momentum[0],
            py: momentum[1],
            pz: momentum[2],
            e: momentum[3],
        })
    }

    /// Consumes trailing content (weights, auxiliary tags) up to `</event>`.
    fn skip_to_close(&mut self) -> Result<(), PtxError> {
        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    self.finished = true;
                    return Err(self.fault("lhe-truncated", "event block is never closed"));
                }
            };
            if line.trim().starts_with("</event") {
                return Ok(());
            }
        }
    }
}

impl EventSource for LheSource {
    fn next_event(&mut self) -> Result<Option<CollisionEvent>, PtxError> {
        if self.finished {
            return Ok(None);
        }
        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    self.finished = true;
                    return Ok(None);
                }
            };
            let trimmed = line.trim();
            if trimmed.starts_with("</LesHouchesEvents") {
                self.finished = true;
                return Ok(None);
            }
            if trimmed.starts_with("<event") {
                self.ordinal += 1;
                let event = self.parse_block()?;
                return Ok(Some(event));
            }
        }
    }
}
