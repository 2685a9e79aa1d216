/// The generator pipeline: pools → persons → follows → CSV files.
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::error::{GenError, Result};
use crate::follows::{DEFAULT_FOLLOWS_PER_PERSON, Follows, check_out_degree};
use crate::names::NamePools;
use crate::output::OutputFiles;
use crate::person::sample_persons;

pub const DEFAULT_PERSONS: usize = 1000;

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of persons to generate.
    pub persons: usize,
    /// Outgoing follows per person.
    pub follows_per_person: usize,
    /// Directory the three CSV files are written to.
    pub out_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            persons: DEFAULT_PERSONS,
            follows_per_person: DEFAULT_FOLLOWS_PER_PERSON,
            out_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    /// Check both sampling preconditions against `pools`.
    pub fn validate(&self, pools: &NamePools<'_>) -> Result<()> {
        let available = pools.capacity().unwrap_or(usize::MAX);
        if self.persons > available {
            return Err(GenError::NotEnoughNames {
                requested: self.persons,
                available,
            });
        }
        check_out_degree(self.persons, self.follows_per_person)
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub persons: usize,
    pub follows: u64,
    pub elapsed: Duration,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated:")?;
        writeln!(f, "\t{} persons", self.persons)?;
        writeln!(f, "\t{} relationships", self.follows)?;
        write!(f, "\tin {} ms", self.elapsed.as_millis())
    }
}

/// Run the whole pipeline. Either all three files are written or none of
/// them is touched.
pub fn run<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    pools: &NamePools<'_>,
    rng: &mut R,
) -> Result<Summary> {
    let start = Instant::now();
    config.validate(pools)?;

    let persons = sample_persons(pools, config.persons, rng)?;
    let follows = Follows::new(rng, persons.len(), config.follows_per_person)?;

    let mut files = OutputFiles::create(&config.out_dir)?;
    files.write_persons(&persons)?;
    let mut written: u64 = 0;
    for follow in follows {
        files.write_follow(&persons, follow)?;
        written += 1;
    }
    files.commit()?;

    let summary = Summary {
        persons: persons.len(),
        follows: written,
        elapsed: start.elapsed(),
    };
    info!(
        persons = summary.persons,
        follows = summary.follows,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        out_dir = %config.out_dir.display(),
        "generation finished"
    );
    Ok(summary)
}
