use std::error::Error;

use clap::Args;
use serde::Serialize;

use ptx_core::errors::ErrorInfo;
use ptx_core::rng::SeedPolicy;
use ptx_core::TargetSpecies;
use ptx_engine::{SyntheticConfig, SyntheticSource};
use ptx_extract::{extract_transverse_momenta, ExtractionStatus};

#[derive(Args, Debug)]
pub struct SynthArgs {
    /// Number of synthetic events to generate.
    #[arg(long, default_value_t = 1_000)]
    pub events: u64,
    /// PDG code of the target species (sign ignored).
    #[arg(long, default_value_t = 15)]
    pub species: i32,
    /// Capacity of the output buffer.
    #[arg(long, default_value_t = 16_384)]
    pub capacity: usize,
    /// Pin the master seed instead of drawing system entropy.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct SynthReport {
    seed: u64,
    events: u64,
    count: usize,
    status: ExtractionStatus,
    status_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

pub fn run(args: &SynthArgs) -> Result<(), Box<dyn Error>> {
    let policy = match args.seed {
        Some(seed) => SeedPolicy::Fixed { seed },
        None => SeedPolicy::SystemEntropy,
    };
    let seed = policy.resolve();

    let config = SyntheticConfig {
        events: args.events,
        ..SyntheticConfig::default()
    };
    let source = SyntheticSource::new(config, seed);
    let mut buffer = vec![0.0f64; args.capacity];
    let outcome =
        extract_transverse_momenta(source, TargetSpecies::from_code(args.species), &mut buffer);

    let report = SynthReport {
        seed,
        events: args.events,
        count: outcome.count,
        status: outcome.status,
        status_code: outcome.status.code(),
        error: outcome.error,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.status.is_success() {
        return Err(format!("synthetic run ended with status {}", report.status_code).into());
    }
    Ok(())
}
