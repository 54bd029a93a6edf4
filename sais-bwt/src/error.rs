// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error,
    fmt::{self, Display, Formatter},
};

/// An error indicating that a suffix array or Burrows-Wheeler transform could not be computed.
///
/// All of these errors describe permanent problems with the input. Retrying with the same input
/// always fails in the same way.
///
/// # Examples
///
/// ```
/// use sais_bwt::Error;
///
/// let result = sais_bwt::suffix_array::<u8>(&[]);
///
/// assert!(matches!(result, Err(Error::EmptyInput)));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input sequence is empty
    EmptyInput,
    /// The declared sentinel symbol occurs somewhere other than the last position of the input
    InvalidSentinel {
        /// The first offset at which the sentinel was found
        position: usize,
    },
    /// A last column and sentinel row do not describe a valid transform
    InconsistentBwt(BwtInconsistency),
}

/// The reason a last column was rejected by an inverse transform.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BwtInconsistency {
    /// The sentinel row does not index into the last column
    RowOutOfRange {
        /// The row that was given
        row: usize,
        /// The length of the last column
        len: usize,
    },
    /// The symbol at the sentinel row occurs more than once in the last column
    SentinelCount(usize),
    /// Following the LF-mapping from the sentinel row returned to it before every row was visited
    BrokenCycle {
        /// The number of rows visited before the walk closed
        visited: usize,
        /// The length of the last column
        len: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "input sequence is empty"),
            Error::InvalidSentinel { position } => {
                write!(f, "sentinel symbol found at non-terminal position {position}")
            }
            Error::InconsistentBwt(reason) => write!(f, "inconsistent last column: {reason}"),
        }
    }
}

impl Display for BwtInconsistency {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BwtInconsistency::RowOutOfRange { row, len } => {
                write!(f, "sentinel row {row} is out of range for length {len}")
            }
            BwtInconsistency::SentinelCount(count) => {
                write!(f, "sentinel symbol occurs {count} times, expected exactly once")
            }
            BwtInconsistency::BrokenCycle { visited, len } => {
                write!(f, "LF-mapping cycle closed after {visited} of {len} rows")
            }
        }
    }
}

impl error::Error for Error {}

impl From<BwtInconsistency> for Error {
    fn from(value: BwtInconsistency) -> Self {
        Error::InconsistentBwt(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_row() {
        let error = Error::from(BwtInconsistency::RowOutOfRange { row: 9, len: 7 });

        assert_eq!(
            error.to_string(),
            "inconsistent last column: sentinel row 9 is out of range for length 7",
        );
    }
}
