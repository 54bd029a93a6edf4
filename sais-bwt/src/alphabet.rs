// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{Error, sais};

/// The value of the sentinel in a mapped sequence
pub(crate) const SENTINEL: u32 = 0;

/// A sequence over a dense integer alphabet, terminated by a unique sentinel.
///
/// Every symbol of the original sequence is replaced by its rank among the distinct symbols of
/// that sequence, starting at 1. The rank 0 is reserved for the sentinel, which is always the last
/// element and occurs nowhere else. Comparing two mapped suffixes therefore gives the same result
/// as comparing the original suffixes.
///
/// # Examples
///
/// ```
/// use sais_bwt::MappedText;
///
/// let mapped = MappedText::new(b"banana")?;
///
/// assert_eq!(mapped.symbols(), &[2, 1, 3, 1, 3, 1, 0]);
/// assert_eq!(mapped.alphabet_size(), 4);
/// # Ok::<(), sais_bwt::Error>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MappedText {
    symbols: Vec<u32>,
    alphabet_size: usize,
}

impl MappedText {
    /// Maps `text` onto a dense alphabet and appends a sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `text` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `text.len() >= u32::MAX - 1`.
    pub fn new<T>(text: &[T]) -> Result<Self, Error>
    where
        T: Ord,
    {
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(Self::map_body(text))
    }

    /// Maps `text` onto a dense alphabet, treating `sentinel` as the terminator.
    ///
    /// If `text` already ends with `sentinel`, that element becomes the mapped sentinel.
    /// Otherwise a sentinel is appended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `text` is empty and [`Error::InvalidSentinel`] if
    /// `sentinel` occurs anywhere except the last position of `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text.len() >= u32::MAX - 1`.
    pub fn with_sentinel<T>(text: &[T], sentinel: &T) -> Result<Self, Error>
    where
        T: Ord,
    {
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let body = strip_sentinel(text, sentinel)?;

        Ok(Self::map_body(body))
    }

    fn map_body<T>(body: &[T]) -> Self
    where
        T: Ord,
    {
        // One extra slot is needed for the sentinel and u32::MAX is reserved as the empty marker
        assert!(
            body.len() < u32::MAX as usize - 1,
            "input of {} symbols is too long to index with u32",
            body.len(),
        );

        let mut alphabet: Vec<&T> = body.iter().collect();
        alphabet.sort_unstable();
        alphabet.dedup();

        let mut symbols = Vec::with_capacity(body.len() + 1);
        symbols.extend(body.iter().map(|symbol| {
            let (Ok(rank) | Err(rank)) = alphabet.binary_search(&symbol);
            rank as u32 + 1
        }));
        symbols.push(SENTINEL);

        Self {
            symbols,
            alphabet_size: alphabet.len() + 1,
        }
    }

    /// Returns the mapped symbols, including the trailing sentinel.
    #[must_use]
    pub fn symbols(&self) -> &[u32] {
        &self.symbols
    }

    /// Returns the number of distinct symbols, including the sentinel.
    #[must_use]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Returns the length of the mapped sequence, including the sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always returns `false`, since a mapped sequence contains at least the sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Computes the suffix array of the mapped sequence by induced sorting.
    ///
    /// This operation is *O*(*n*).
    #[must_use]
    pub fn suffix_array(&self) -> Vec<u32> {
        sais::sais(&self.symbols, self.alphabet_size)
    }
}

/// Returns `text` without its trailing `sentinel`, if present.
fn strip_sentinel<'a, T>(text: &'a [T], sentinel: &T) -> Result<&'a [T], Error>
where
    T: Ord,
{
    let body = match text.split_last() {
        Some((last, body)) if last == sentinel => body,
        _ => text,
    };

    reject_sentinel(body, sentinel)?;

    Ok(body)
}

/// Fails if `sentinel` occurs anywhere in `body`.
pub(crate) fn reject_sentinel<T>(body: &[T], sentinel: &T) -> Result<(), Error>
where
    T: PartialEq,
{
    match body.iter().position(|symbol| symbol == sentinel) {
        None => Ok(()),
        Some(position) => Err(Error::InvalidSentinel { position }),
    }
}
