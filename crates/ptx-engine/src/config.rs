//! Engine configuration passed to driver adapters at construction.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ptx_core::errors::{ErrorInfo, PtxError};
use ptx_core::rng::SeedPolicy;

/// Frame-type selection forwarded to the simulation engine.
///
/// Only from-source framing is supported: beam and event information is read
/// in full from the event source rather than being configured separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameType {
    /// Read full beam and event information from the event source.
    FromSource,
}

impl Default for FrameType {
    fn default() -> Self {
        FrameType::FromSource
    }
}

/// Configuration for one driver-adapter instance.
///
/// Expressed as an explicit value handed to the adapter at construction, not
/// as ambient state, so multiple independently seeded pipelines can coexist
/// in one process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Event-source specification: path to the input event file.
    pub source: PathBuf,
    /// Suppress engine-native diagnostic output.
    #[serde(default = "default_quiet")]
    pub quiet: bool,
    /// Frame-type selection.
    #[serde(default)]
    pub frame_type: FrameType,
    /// Master-seed policy for the run.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_quiet() -> bool {
    true
}

impl EngineConfig {
    /// Creates a configuration for the given event source with defaults
    /// (quiet output, from-source framing, system-entropy seeding).
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            quiet: default_quiet(),
            frame_type: FrameType::default(),
            seed_policy: SeedPolicy::default(),
        }
    }

    /// Pins the seed policy to a fixed master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed_policy = SeedPolicy::Fixed { seed };
        self
    }

    /// Checks that the event-source path exists and is a regular file.
    pub fn validate(&self) -> Result<(), PtxError> {
        let meta = fs::metadata(&self.source).map_err(|err| {
            PtxError::Config(
                ErrorInfo::new("source-missing", err.to_string())
                    .with_context("path", self.source.display().to_string())
                    .with_hint("check the event-source specification"),
            )
        })?;
        if !meta.is_file() {
            return Err(PtxError::Config(
                ErrorInfo::new("source-not-file", "event source is not a regular file")
                    .with_context("path", self.source.display().to_string()),
            ));
        }
        Ok(())
    }

    /// Resolves the seed policy to the master seed for this run.
    pub fn resolve_seed(&self) -> u64 {
        self.seed_policy.resolve()
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PtxError> {
        let text = fs::read_to_string(path).map_err(|err| {
            PtxError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&text).map_err(|err| {
            PtxError::Config(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Writes the configuration to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), PtxError> {
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            PtxError::Serde(ErrorInfo::new("config-serialize", err.to_string()))
        })?;
        fs::write(path, json).map_err(|err| {
            PtxError::Serde(
                ErrorInfo::new("config-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
