// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Quadratic reference constructions.
//!
//! These sort whole suffixes or rotations by direct comparison. They are far slower than the
//! induced-sorting construction but obviously correct, which makes them useful for cross-checking
//! and for experimenting with small inputs.

use crate::{
    Error,
    bwt::{Bwt, LfMapping, check_row},
};

/// Computes the suffix array of `body` followed by a virtual sentinel by sorting every suffix.
///
/// The result has `body.len() + 1` entries, the first of which is always `body.len()`, the
/// sentinel's own suffix.
///
/// This operation is *O*(*n*² log *n*).
///
/// # Examples
///
/// ```
/// use sais_bwt::naive;
///
/// assert_eq!(naive::suffix_array(b"banana"), &[6, 5, 3, 1, 0, 4, 2]);
/// ```
#[must_use]
pub fn suffix_array<T>(body: &[T]) -> Vec<u32>
where
    T: Ord,
{
    // A suffix that is a proper prefix of another compares less, just like a sentinel would
    let mut suffix_array: Vec<u32> = (0..=body.len() as u32).collect();
    suffix_array.sort_by(|&a, &b| body[a as usize..].cmp(&body[b as usize..]));
    suffix_array
}

/// Computes the Burrows-Wheeler transform of `text` by sorting its cyclic rotations.
///
/// No sentinel is involved. The returned row is the row of the sorted rotation matrix holding
/// `text` itself. Invert the result with [`inverse_rotation_bwt()`], not
/// [`inverse_bwt()`](crate::inverse_bwt).
///
/// This operation is *O*(*n*² log *n*).
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `text` is empty.
///
/// # Examples
///
/// ```
/// use sais_bwt::naive;
///
/// let bwt = naive::rotation_bwt(b"banana")?;
///
/// assert_eq!(bwt.last_column(), b"nnbaaa");
/// assert_eq!(bwt.sentinel_row(), 3);
/// # Ok::<(), sais_bwt::Error>(())
/// ```
pub fn rotation_bwt<T>(text: &[T]) -> Result<Bwt<T>, Error>
where
    T: Ord + Clone,
{
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let len = text.len();
    let rotation = |start: usize| text[start..].iter().chain(&text[..start]);

    let mut rows: Vec<usize> = (0..len).collect();
    rows.sort_by(|&a, &b| rotation(a).cmp(rotation(b)));

    let mut sentinel_row = 0;
    let last_column = rows
        .iter()
        .enumerate()
        .map(|(row, &start)| {
            if start == 0 {
                sentinel_row = row;
            }
            text[(start + len - 1) % len].clone()
        })
        .collect();

    Ok(Bwt::from_parts(last_column, sentinel_row))
}

/// Reconstructs a text from a transform computed by [`rotation_bwt()`].
///
/// Periodic texts have several identical rotations, so their LF-mapping splits into several
/// cycles. The walk still reconstructs the text because identical rows carry identical symbols.
///
/// # Errors
///
/// Returns [`Error::InconsistentBwt`] if `row` is out of range.
///
/// # Examples
///
/// ```
/// use sais_bwt::naive;
///
/// assert_eq!(naive::inverse_rotation_bwt(b"nnbaaa", 3)?, b"banana");
/// # Ok::<(), sais_bwt::Error>(())
/// ```
pub fn inverse_rotation_bwt<T>(last_column: &[T], row: usize) -> Result<Vec<T>, Error>
where
    T: Ord + Clone,
{
    check_row(last_column, row)?;

    let lf = LfMapping::new(last_column, |i| &last_column[i]);

    lf.walk(last_column, row, false)
}
