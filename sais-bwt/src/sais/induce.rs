// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use super::{bucket::Buckets, types::TypeMap};

/// The representation of an empty suffix array slot
pub(crate) const EMPTY: u32 = u32::MAX;

/// How LMS suffixes are placed before induction begins
pub(crate) enum Seed<'a> {
    /// LMS positions in ascending offset order.
    ///
    /// Induction from this seed sorts LMS substrings but not necessarily LMS suffixes.
    Unsorted(&'a [u32]),
    /// LMS positions in their correct suffix order, given as the suffix array of the reduced
    /// problem together with the offsets it refers to.
    ///
    /// Induction from this seed produces the final suffix array.
    Sorted {
        lms: &'a [u32],
        reduced_suffix_array: &'a [u32],
    },
}

impl Seed<'_> {
    fn put(&self, text: &[u32], buckets: &Buckets, suffix_array: &mut [u32]) {
        match *self {
            // The sentinel is the last LMS position and is placed separately
            Seed::Unsorted(lms) => {
                put_lms(
                    lms[..lms.len().saturating_sub(1)].iter().copied(),
                    text,
                    buckets,
                    suffix_array,
                );
            }
            // The reduced suffix array starts with the reduced sentinel, which maps to ours
            Seed::Sorted {
                lms,
                reduced_suffix_array,
            } => {
                debug_assert_eq!(
                    reduced_suffix_array.first().map(|&r| lms[r as usize]),
                    Some(text.len() as u32 - 1),
                    "reduced suffix array must start with the sentinel",
                );

                put_lms(
                    reduced_suffix_array
                        .iter()
                        .skip(1)
                        .map(|&r| lms[r as usize]),
                    text,
                    buckets,
                    suffix_array,
                );
            }
        }

        // Set the single sentinel suffix
        suffix_array[0] = text.len() as u32 - 1;
    }
}

/// Completes `suffix_array` from the LMS suffixes described by `seed`.
///
/// Every slot of `suffix_array` is overwritten.
pub(crate) fn induce(
    text: &[u32],
    types: &TypeMap,
    buckets: &Buckets,
    seed: Seed,
    suffix_array: &mut [u32],
) {
    suffix_array.fill(EMPTY);

    seed.put(text, buckets, suffix_array);
    log::trace!("seeded {} slots", suffix_array.iter().filter(|&&p| p != EMPTY).count());

    induce_l(text, types, buckets, suffix_array);
    induce_s(text, types, buckets, suffix_array);
}

/// Places `positions` at the tails of their buckets.
///
/// `positions` is walked in reverse so that the first position ends up leftmost in its bucket.
fn put_lms<I>(positions: I, text: &[u32], buckets: &Buckets, suffix_array: &mut [u32])
where
    I: DoubleEndedIterator<Item = u32>,
{
    let mut tails = buckets.tails();

    for position in positions.rev() {
        let c = text[position as usize] as usize;
        suffix_array[tails[c]] = position;
        tails[c] -= 1;
    }
}

fn induce_l(text: &[u32], types: &TypeMap, buckets: &Buckets, suffix_array: &mut [u32]) {
    let mut heads = buckets.heads();

    for i in 0..suffix_array.len() {
        let p = suffix_array[i];
        // Suffix 0 has nothing to its left
        if p == EMPTY || p == 0 {
            continue;
        }

        let j = p as usize - 1;
        if types.is_l(j) {
            let c = text[j] as usize;
            suffix_array[heads[c]] = j as u32;
            heads[c] += 1;
        }
    }
}

fn induce_s(text: &[u32], types: &TypeMap, buckets: &Buckets, suffix_array: &mut [u32]) {
    let mut tails = buckets.tails();

    for i in (0..suffix_array.len()).rev() {
        let p = suffix_array[i];
        if p == EMPTY || p == 0 {
            continue;
        }

        let j = p as usize - 1;
        if types.is_s(j) {
            // Never the sentinel bucket, so the tail stays above the previous bucket's head
            let c = text[j] as usize;
            suffix_array[tails[c]] = j as u32;
            tails[c] -= 1;
        }
    }
}
