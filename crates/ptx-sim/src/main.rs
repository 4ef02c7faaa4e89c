use std::error::Error;

use clap::{Parser, Subcommand};

use commands::{
    card::{self, CardArgs},
    extract::{self, ExtractArgs},
    synth::{self, SynthArgs},
    version::{self, VersionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "ptx", about = "Transverse-momentum extraction over simulated event streams")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transverse momenta for one species from an LHE event file.
    Extract(ExtractArgs),
    /// Run the pipeline over a seeded synthetic event stream.
    Synth(SynthArgs),
    /// Inspect or edit an SLHA-style parameter card.
    Card(CardArgs),
    /// Report the tool version.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Extract(args) => extract::run(&args),
        Command::Synth(args) => synth::run(&args),
        Command::Card(args) => card::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
