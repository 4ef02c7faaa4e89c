use std::error::Error;

use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit the version as a JSON object instead of a bare string.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.json {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    println!("{}", serde_json::to_string(&info)?);
    Ok(())
}
