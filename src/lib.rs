pub mod error;
pub mod follows;
pub mod generate;
pub mod names;
pub mod output;
pub mod person;

pub use error::{GenError, Result};
pub use follows::{DEFAULT_FOLLOWS_PER_PERSON, Follow, Follows, sample_follows};
pub use generate::{DEFAULT_PERSONS, GeneratorConfig, Summary, run};
pub use names::NamePools;
pub use person::{Person, sample_persons};
