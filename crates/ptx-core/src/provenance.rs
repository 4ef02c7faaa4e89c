//! Run provenance attached to extraction artifacts.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::{ErrorInfo, PtxError};

/// Provenance record tying an extraction artifact to its inputs.
///
/// The resolved seed is always recorded, including for entropy-seeded runs,
/// so a run can be replayed with a `Fixed` policy afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Event-source specification the run consumed (path or label).
    pub input_spec: String,
    /// SHA-256 hash of the input file, hex encoded; empty for in-memory sources.
    pub input_hash: String,
    /// Master seed resolved from the seed policy.
    pub seed: u64,
    /// Species magnitude the extraction targeted.
    pub species: u32,
    /// Version of the tool that produced the artifact.
    pub tool_version: String,
}

/// Computes the hex-encoded SHA-256 digest of a byte payload.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Computes the hex-encoded SHA-256 digest of a file's contents.
pub fn hash_file(path: &Path) -> Result<String, PtxError> {
    let bytes = fs::read(path).map_err(|err| {
        PtxError::Serde(
            ErrorInfo::new("provenance-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    Ok(sha256_hex(&bytes))
}
