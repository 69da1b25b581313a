//! Prints the JSON schema of `config.toml`, for editors that validate TOML
//! against a schema.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dump_config_schema", about = "Print the indexcard config JSON schema")]
struct Args {
    /// Write the schema to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let rendered = serde_json::to_string_pretty(&indexcard::Config::json_schema())?;

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            eprintln!("Wrote config schema to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
