// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{BwtInconsistency, Error};

/// The Burrows-Wheeler transform of a text.
///
/// The transform consists of the last column of the sorted rotation matrix and the row of that
/// matrix which holds the text itself. For a sentinel-terminated text this is the row whose
/// last symbol is the sentinel, hence the name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Bwt<T> {
    last_column: Vec<T>,
    sentinel_row: usize,
}

impl<T> Bwt<T> {
    /// Creates a transform from its parts without validating them.
    ///
    /// Inconsistent parts are detected by [`Bwt::invert()`].
    #[must_use]
    pub fn from_parts(last_column: Vec<T>, sentinel_row: usize) -> Self {
        Self {
            last_column,
            sentinel_row,
        }
    }

    /// Returns the last column.
    #[must_use]
    pub fn last_column(&self) -> &[T] {
        &self.last_column
    }

    /// Returns the row holding the original text.
    #[must_use]
    pub fn sentinel_row(&self) -> usize {
        self.sentinel_row
    }

    /// Consumes the transform, returning the last column and the sentinel row.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, usize) {
        (self.last_column, self.sentinel_row)
    }

    /// Returns the length of the last column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.last_column.len()
    }

    /// Returns `true` if the last column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_column.is_empty()
    }

    /// Returns the number of maximal runs of equal symbols in the last column.
    ///
    /// # Examples
    ///
    /// ```
    /// use sais_bwt::Bwt;
    ///
    /// let bwt = Bwt::from_parts(b"annb$aa".to_vec(), 4);
    ///
    /// assert_eq!(bwt.runs(), 5);
    /// ```
    #[must_use]
    pub fn runs(&self) -> usize
    where
        T: PartialEq,
    {
        if self.last_column.is_empty() {
            0
        } else {
            1 + self
                .last_column
                .windows(2)
                .filter(|pair| pair[0] != pair[1])
                .count()
        }
    }

    /// Reconstructs the sentinel-terminated text. See [`inverse_bwt()`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentBwt`] if the transform is malformed.
    pub fn invert(&self) -> Result<Vec<T>, Error>
    where
        T: Ord + Clone,
    {
        inverse_bwt(&self.last_column, self.sentinel_row)
    }
}

/// Builds a transform from a suffix array.
///
/// `preceding(p)` must return the symbol cyclically preceding suffix `p`.
pub(crate) fn from_suffix_array<T, F>(suffix_array: &[u32], mut preceding: F) -> Bwt<T>
where
    F: FnMut(usize) -> T,
{
    let mut sentinel_row = None;
    let last_column = suffix_array
        .iter()
        .enumerate()
        .map(|(row, &p)| {
            if p == 0 {
                sentinel_row = Some(row);
            }
            preceding(p as usize)
        })
        .collect();

    let Some(sentinel_row) = sentinel_row else {
        panic!("suffix array does not contain suffix 0");
    };

    Bwt {
        last_column,
        sentinel_row,
    }
}

/// Computes the Burrows-Wheeler transform of `text` from its suffix array.
///
/// `text` must already end with its sentinel, and `suffix_array` must be the suffix array of that
/// text, e.g., as returned by [`suffix_array_with_sentinel()`](crate::suffix_array_with_sentinel)
/// for a sentinel-terminated input. Row `i` of the last column is the symbol preceding suffix
/// `suffix_array[i]`, or the sentinel for suffix 0.
///
/// This operation is *O*(*n*).
///
/// # Panics
///
/// Panics if `suffix_array.len() != text.len()` or if `suffix_array` does not contain 0.
///
/// # Examples
///
/// ```
/// let text = b"banana$";
/// let suffix_array = sais_bwt::suffix_array_with_sentinel(text, &b'$')?;
/// let bwt = sais_bwt::bwt(text, &suffix_array);
///
/// assert_eq!(bwt.last_column(), b"annb$aa");
/// assert_eq!(bwt.sentinel_row(), 4);
/// # Ok::<(), sais_bwt::Error>(())
/// ```
#[must_use]
pub fn bwt<T>(text: &[T], suffix_array: &[u32]) -> Bwt<T>
where
    T: Clone,
{
    assert_eq!(
        text.len(),
        suffix_array.len(),
        "suffix array length must match the sentinel-terminated text",
    );

    from_suffix_array(suffix_array, |p| {
        if p == 0 {
            text[text.len() - 1].clone()
        } else {
            text[p - 1].clone()
        }
    })
}

/// Reconstructs a sentinel-terminated text from its Burrows-Wheeler transform.
///
/// The symbol found at `sentinel_row` is taken to be the sentinel. It sorts before every other
/// symbol regardless of its [`Ord`] implementation, matching how suffix arrays are built. The
/// returned text ends with the sentinel; callers that need the original text must strip it.
///
/// This operation is *O*(*n* log *n*).
///
/// # Errors
///
/// Returns [`Error::InconsistentBwt`] if `sentinel_row` is out of range, if the sentinel occurs
/// more than once in `last_column`, or if `last_column` is not the transform of any
/// sentinel-terminated text.
///
/// # Examples
///
/// ```
/// let text = sais_bwt::inverse_bwt(b"annb$aa", 4)?;
///
/// assert_eq!(text, b"banana$");
/// # Ok::<(), sais_bwt::Error>(())
/// ```
pub fn inverse_bwt<T>(last_column: &[T], sentinel_row: usize) -> Result<Vec<T>, Error>
where
    T: Ord + Clone,
{
    check_row(last_column, sentinel_row)?;

    let sentinel = &last_column[sentinel_row];
    let count = last_column
        .iter()
        .filter(|&symbol| symbol == sentinel)
        .count();
    if count != 1 {
        return Err(BwtInconsistency::SentinelCount(count).into());
    }

    let lf = LfMapping::new(last_column, |row| (row != sentinel_row, &last_column[row]));

    lf.walk(last_column, sentinel_row, true)
}

pub(crate) fn check_row<T>(last_column: &[T], row: usize) -> Result<(), Error> {
    if row < last_column.len() {
        Ok(())
    } else {
        Err(BwtInconsistency::RowOutOfRange {
            row,
            len: last_column.len(),
        }
        .into())
    }
}

/// The bijection between rows of the last column and rows of the first column
pub(crate) struct LfMapping {
    /// The last-column row of each first-column row
    first_to_last: Vec<usize>,
    /// The first-column row of each last-column row
    last_to_first: Vec<usize>,
}

impl LfMapping {
    /// Derives the mapping by stably sorting the rows of `last_column` by `key`.
    ///
    /// A stable sort gives the `k`th occurrence of a symbol in the last column the `k`th slot of
    /// that symbol in the first column.
    pub(crate) fn new<T, K, F>(last_column: &[T], mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(usize) -> K,
    {
        let mut first_to_last: Vec<usize> = (0..last_column.len()).collect();
        first_to_last.sort_by_key(|&row| key(row));

        let mut last_to_first = vec![0; last_column.len()];
        for (first, &last) in first_to_last.iter().enumerate() {
            last_to_first[last] = first;
        }

        Self {
            first_to_last,
            last_to_first,
        }
    }

    /// Walks the mapping backwards through the text, starting from the row holding the text.
    ///
    /// If `single_cycle` is set, fails when the walk returns to `start` early.
    pub(crate) fn walk<T>(
        &self,
        last_column: &[T],
        start: usize,
        single_cycle: bool,
    ) -> Result<Vec<T>, Error>
    where
        T: Clone,
    {
        let len = last_column.len();
        let mut text = Vec::with_capacity(len);

        let mut row = self.last_to_first[start];
        for step in 1..=len {
            if single_cycle && row == start && step < len {
                return Err(BwtInconsistency::BrokenCycle { visited: step, len }.into());
            }

            // The first column symbol of this row
            text.push(last_column[self.first_to_last[row]].clone());
            row = self.last_to_first[row];
        }

        // The walk emits the text back to front
        text.reverse();

        Ok(text)
    }
}
