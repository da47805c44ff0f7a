use std::{fs::File, io::Read, path::Path, str::FromStr};

use tracing::{debug, trace};

use crate::error::{Error, FormatError};

/// Path read when no argument is given.
pub const DEFAULT_INPUT: &str = "input.txt";

/// The two columns of the input, index-aligned.
///
/// Values are only ever pushed in pairs, so `left` and `right` always have
/// the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl Lists {
    pub fn left(&self) -> &[i64] {
        &self.left
    }

    pub fn right(&self) -> &[i64] {
        &self.right
    }

    /// Number of records (lines) that were parsed.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

impl Extend<(i64, i64)> for Lists {
    fn extend<T: IntoIterator<Item = (i64, i64)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let (len, _) = iter.size_hint();
        self.left.reserve(len);
        self.right.reserve(len);
        for (left, right) in iter {
            self.left.push(left);
            self.right.push(right);
        }
    }
}

impl FromIterator<(i64, i64)> for Lists {
    fn from_iter<T: IntoIterator<Item = (i64, i64)>>(iter: T) -> Self {
        let mut lists = Lists::default();
        lists.extend(iter);
        lists
    }
}

impl FromStr for Lists {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_input(s)
    }
}

fn parse_num(token: &str) -> Result<i64, FormatError> {
    token.parse::<i64>().map_err(|source| FormatError::Integer {
        token: token.to_owned(),
        source,
    })
}

fn parse_line(line: &str) -> Result<(i64, i64), FormatError> {
    let mut nums_on_line = line.split_ascii_whitespace();
    match (nums_on_line.next(), nums_on_line.next(), nums_on_line.next()) {
        (Some(left), Some(right), None) => Ok((parse_num(left)?, parse_num(right)?)),
        _ => Err(FormatError::TokenCount {
            found: line.split_ascii_whitespace().count(),
        }),
    }
}

/// Parses whitespace-separated pairs, one per line.
///
/// Blank lines are skipped and a trailing `\r` is tolerated. The first
/// malformed line fails the whole parse.
pub fn parse_input(puzzle: &str) -> Result<Lists, Error> {
    let lists = puzzle
        .split('\n')
        .enumerate()
        .filter(|(idx, line)| {
            let blank = line.trim().is_empty();
            if blank {
                trace!(line = idx + 1, "skipping blank line");
            }
            !blank
        })
        .map(|(idx, line)| {
            parse_line(line).map_err(|reason| Error::InvalidFormat {
                line: idx + 1,
                reason,
            })
        })
        .collect::<Result<Lists, Error>>()?;
    if lists.is_empty() {
        return Err(Error::InvalidFormat {
            line: 0,
            reason: FormatError::Empty,
        });
    }
    debug!(records = lists.len(), "parsed input");
    Ok(lists)
}

/// Reads and parses the file at `path`.
///
/// The file handle is dropped before parsing starts, whatever the outcome.
pub fn read_input(path: impl AsRef<Path>) -> Result<Lists, Error> {
    let path = path.as_ref();
    let contents = {
        let mut file = File::open(path).map_err(|source| Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
        contents
    };
    debug!(path = %path.display(), bytes = contents.len(), "read input");
    parse_input(&contents)
}
