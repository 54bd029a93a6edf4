// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{
    Error, MappedText,
    alphabet::reject_sentinel,
    bwt::{self, Bwt},
};

/// A suffix array for a sequence of symbols.
///
/// The sequence is always terminated by a sentinel that compares less than every other symbol,
/// so a suffix array for a sequence of `n` symbols holds `n + 1` entries, and its first entry is
/// `n`, the sentinel's own suffix.
pub struct SuffixArray<'a, T> {
    body: &'a [T],
    inner: Vec<u32>,
}

impl<'a, T> SuffixArray<'a, T>
where
    T: Ord,
{
    /// Creates a new `SuffixArray` for `text`, appending a virtual sentinel.
    ///
    /// This operation is *O*(*n* log *σ*), where σ is the number of distinct symbols, for mapping
    /// `text` onto a dense alphabet, followed by *O*(*n*) suffix sorting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `text` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `text.len() >= u32::MAX - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sais_bwt::SuffixArray;
    ///
    /// let sa = SuffixArray::new(b"banana")?;
    ///
    /// assert_eq!(sa.as_slice(), &[6, 5, 3, 1, 0, 4, 2]);
    /// # Ok::<(), sais_bwt::Error>(())
    /// ```
    pub fn new(text: &'a [T]) -> Result<Self, Error> {
        let mapped = MappedText::new(text)?;

        Ok(Self {
            body: text,
            inner: mapped.suffix_array(),
        })
    }

    /// Creates a new `SuffixArray` for `text`, which may already end with `sentinel`.
    ///
    /// If `text` ends with `sentinel`, that element is the sentinel and the suffix array has
    /// `text.len()` entries. Otherwise a sentinel is appended. Either way `sentinel` sorts before
    /// every other symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `text` is empty and [`Error::InvalidSentinel`] if
    /// `sentinel` occurs anywhere except the last position of `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text.len() >= u32::MAX - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sais_bwt::SuffixArray;
    ///
    /// let sa = SuffixArray::with_sentinel(b"banana$", &b'$')?;
    ///
    /// assert_eq!(sa.as_slice(), &[6, 5, 3, 1, 0, 4, 2]);
    /// # Ok::<(), sais_bwt::Error>(())
    /// ```
    pub fn with_sentinel(text: &'a [T], sentinel: &T) -> Result<Self, Error> {
        let mapped = MappedText::with_sentinel(text, sentinel)?;

        Ok(Self {
            body: &text[..mapped.len() - 1],
            inner: mapped.suffix_array(),
        })
    }

    /// Returns `true` if and only if `pattern` is contained in the associated text.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sais_bwt::SuffixArray;
    ///
    /// let sa = SuffixArray::new(b"Hello, world!")?;
    ///
    /// assert!(sa.contains(b"world"));
    /// # Ok::<(), sais_bwt::Error>(())
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &[T]) -> bool {
        self.inner
            .binary_search_by(|&suffix| {
                self.body[suffix as usize..]
                    .iter()
                    .take(pattern.len())
                    .cmp(pattern.iter())
            })
            .is_ok()
    }

    /// Computes the Burrows-Wheeler transform of the text terminated by `sentinel`.
    ///
    /// This operation is *O*(*n*).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSentinel`] if `sentinel` occurs in the text.
    ///
    /// # Examples
    ///
    /// ```
    /// use sais_bwt::SuffixArray;
    ///
    /// let bwt = SuffixArray::new(b"banana")?.bwt(b'$')?;
    ///
    /// assert_eq!(bwt.last_column(), b"annb$aa");
    /// assert_eq!(bwt.sentinel_row(), 4);
    /// # Ok::<(), sais_bwt::Error>(())
    /// ```
    pub fn bwt(&self, sentinel: T) -> Result<Bwt<T>, Error>
    where
        T: Clone,
    {
        reject_sentinel(self.body, &sentinel)?;

        Ok(bwt::from_suffix_array(&self.inner, |p| {
            if p == 0 {
                sentinel.clone()
            } else {
                self.body[p - 1].clone()
            }
        }))
    }
}

impl<T> SuffixArray<'_, T> {
    /// Returns the text the suffix array was built for, without its sentinel.
    #[must_use]
    pub fn text(&self) -> &[T] {
        self.body
    }

    /// Returns the suffix array as a slice of suffix offsets.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.inner
    }

    /// Returns the suffix array as raw bytes in native byte order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sais_bwt::SuffixArray;
    ///
    /// let sa = SuffixArray::new(b"ab")?;
    ///
    /// assert_eq!(sa.as_bytes().len(), 3 * 4);
    /// # Ok::<(), sais_bwt::Error>(())
    /// ```
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.inner.as_slice())
    }

    /// Consumes the suffix array, returning the suffix offsets.
    #[must_use]
    pub fn into_vec(self) -> Vec<u32> {
        self.inner
    }

    /// Returns the number of suffixes, including the sentinel's.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Always returns `false`, since the sentinel's suffix is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T> AsRef<[u32]> for SuffixArray<'_, T> {
    fn as_ref(&self) -> &[u32] {
        &self.inner
    }
}

/// Computes the suffix array of `sequence` followed by a virtual sentinel.
///
/// The result is a permutation of `0..=sequence.len()`. Its first entry is always
/// `sequence.len()`, the suffix consisting of the sentinel alone.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `sequence` is empty.
///
/// # Panics
///
/// Panics if `sequence.len() >= u32::MAX - 1`.
///
/// # Examples
///
/// ```
/// let suffix_array = sais_bwt::suffix_array(b"banana")?;
///
/// assert_eq!(suffix_array, &[6, 5, 3, 1, 0, 4, 2]);
/// # Ok::<(), sais_bwt::Error>(())
/// ```
pub fn suffix_array<T>(sequence: &[T]) -> Result<Vec<u32>, Error>
where
    T: Ord,
{
    SuffixArray::new(sequence).map(SuffixArray::into_vec)
}

/// Computes the suffix array of `sequence`, which may already end with `sentinel`.
///
/// See [`SuffixArray::with_sentinel()`].
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `sequence` is empty and [`Error::InvalidSentinel`] if
/// `sentinel` occurs anywhere except the last position of `sequence`.
///
/// # Panics
///
/// Panics if `sequence.len() >= u32::MAX - 1`.
pub fn suffix_array_with_sentinel<T>(sequence: &[T], sentinel: &T) -> Result<Vec<u32>, Error>
where
    T: Ord,
{
    SuffixArray::with_sentinel(sequence, sentinel).map(SuffixArray::into_vec)
}
