use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Why a calculation could not produce a value.
#[derive(Debug, Error)]
pub enum Error {
    /// The input path does not exist or could not be opened.
    #[error("File '{}' not found", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file opened but its contents could not be read as text.
    #[error("File '{}' could not be read", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A line did not hold exactly two integers, or there were no lines at all
    /// (`line` is 0 in that case).
    #[error("File contains invalid number format (line {line}: {reason})")]
    InvalidFormat { line: usize, reason: FormatError },
    /// The total does not fit in a 128-bit accumulator.
    #[error("Total {metric} is too large to represent")]
    Overflow { metric: &'static str },
}

/// What was wrong with a malformed line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected 2 numbers, found {found}")]
    TokenCount { found: usize },
    #[error("`{token}` is not an integer")]
    Integer {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("no records")]
    Empty,
}
