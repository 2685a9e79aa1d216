use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Error)]
pub enum GenError {
    /// More persons requested than there are distinct (first, last) pairs.
    #[error("cannot generate {requested} unique persons: only {available} distinct name pairs exist")]
    NotEnoughNames { requested: usize, available: usize },

    /// Out-degree too large for the number of persons.
    #[error(
        "cannot give each of {persons} persons {per_person} distinct follow targets (at most {} possible)",
        .persons.saturating_sub(1)
    )]
    NotEnoughTargets { per_person: usize, persons: usize },

    #[error("{requested} persons do not fit into 32-bit ids")]
    TooManyPersons { requested: usize },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}
