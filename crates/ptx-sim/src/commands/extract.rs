use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use ptx_core::errors::ErrorInfo;
use ptx_core::provenance::{hash_file, RunProvenance};
use ptx_core::TargetSpecies;
use ptx_engine::{EngineConfig, LheSource};
use ptx_extract::{extract_transverse_momenta, ExtractionStatus};

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to the Les Houches Event file.
    #[arg(long)]
    pub input: PathBuf,
    /// PDG code of the target species; the sign is ignored, so a species and
    /// its antiparticle are both extracted.
    #[arg(long, default_value_t = 15)]
    pub species: i32,
    /// Capacity of the output buffer.
    #[arg(long, default_value_t = 100_000)]
    pub capacity: usize,
    /// Output directory for pt.csv and manifest.json.
    #[arg(long)]
    pub out: PathBuf,
    /// Suppress the final-count diagnostic line.
    #[arg(long)]
    pub quiet: bool,
    /// Pin the master seed instead of drawing system entropy.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct ExtractManifest {
    count: usize,
    status: ExtractionStatus,
    status_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
    provenance: RunProvenance,
}

pub fn run(args: &ExtractArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;

    let mut config = EngineConfig::new(&args.input);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let seed = config.resolve_seed();
    let target = TargetSpecies::from_code(args.species);

    let source = LheSource::open(&config).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    let input_spec = source.spec().to_string();
    let mut buffer = vec![0.0f64; args.capacity];
    let outcome = extract_transverse_momenta(source, target, &mut buffer);

    if !args.quiet {
        println!("matched particles: {}", outcome.count);
    }

    write_values(&args.out.join("pt.csv"), &buffer[..outcome.count])?;

    let provenance = RunProvenance {
        input_spec,
        input_hash: hash_file(&args.input).map_err(|err| Box::new(err) as Box<dyn Error>)?,
        seed,
        species: target.magnitude(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let manifest = ExtractManifest {
        count: outcome.count,
        status: outcome.status,
        status_code: outcome.status.code(),
        error: outcome.error.clone(),
        provenance,
    };
    fs::write(
        args.out.join("manifest.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    if !outcome.is_success() {
        let detail = outcome
            .error
            .map(|info| info.to_string())
            .unwrap_or_default();
        return Err(format!(
            "extraction ended with status {}: {detail}",
            outcome.status.code()
        )
        .into());
    }
    Ok(())
}

fn write_values(path: &Path, values: &[f64]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["index", "pt"])?;
    for (idx, value) in values.iter().enumerate() {
        writer.write_record([idx.to_string(), format!("{value:.6}")])?;
    }
    writer.flush()?;
    Ok(())
}
