//! randfill CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use randfill::schema;
use std::io::Write;
use std::path::PathBuf;

/// randfill - Distribution-driven test fixture generator
#[derive(Parser, Debug)]
#[command(name = "randfill")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Schema file declaring fields and their distributions (TOML)
    #[arg(value_name = "SCHEMA")]
    schema: PathBuf,

    /// Number of records to generate
    #[arg(short = 'n', long, default_value = "10")]
    count: u64,

    /// Seed for the random source (takes precedence over the schema's seed)
    #[arg(long, env = "RANDFILL_SEED")]
    seed: Option<u64>,

    /// Write records to a file instead of stdout (JSON lines)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Validate the schema and build the generator without emitting records
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let schema = schema::load_schema(&cli.schema)?;
    let schema_seed = schema.seed;

    let mut generator = schema
        .into_generator()
        .context("Schema validation failed")?;

    if cli.dry_run {
        println!("Schema validated: {} field(s)", generator.field_count());
        for field in generator.fields() {
            println!("  {} <- {}", field.name(), field.declaration());
        }
        return Ok(());
    }

    // CLI seed takes precedence over the schema's seed
    let mut rng = match cli.seed.or(schema_seed) {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    for _ in 0..cli.count {
        let record = generator.generate(&mut rng)?;
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
    }
    out.flush()?;

    if let Some(path) = &cli.output {
        println!("Wrote {} record(s) to {}", cli.count, path.display());
    }

    Ok(())
}
