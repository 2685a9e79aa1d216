use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use follows_gen::{DEFAULT_PERSONS, GeneratorConfig};

#[derive(Parser)]
#[command(
    name = "follows-gen",
    about = "Generate random persons and follows relationships as CSV",
    long_about = "Generate random persons and follows relationships as CSV.\n\n\
        Writes personen.csv, following_id.csv and following_nicknamen.csv to the \
        current directory, ready for MySQL LOAD DATA or Neo4j LOAD CSV.",
    version
)]
struct Cli {
    /// Number of persons to generate
    #[arg(default_value_t = DEFAULT_PERSONS as u64, value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the summary.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig {
        persons: usize::try_from(cli.count)
            .with_context(|| format!("person count {} is too large", cli.count))?,
        ..GeneratorConfig::default()
    };

    let pools = follows_gen::names::builtin();
    let mut rng = StdRng::from_entropy();
    let summary = follows_gen::run(&config, &pools, &mut rng).with_context(|| {
        format!(
            "failed to generate {} persons with {} follows each",
            config.persons, config.follows_per_person
        )
    })?;

    println!("{summary}");
    Ok(())
}
