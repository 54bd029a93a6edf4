// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Suffix array construction by induced sorting.
//!
//! The algorithm is implemented as described in the article Linear Suffix Array Construction by
//! Almost Pure Induced-Sorting by Ge Nong, Sen Zhang and Wai Hong Chan. It runs in *O*(*n*) time
//! and uses *O*(*n*) auxiliary space per recursion level.

mod bucket;
mod induce;
mod lms;
mod reduce;
mod types;

use bucket::Buckets;
use induce::{EMPTY, Seed, induce};
use lms::lms_positions;
use reduce::Reduced;
use types::TypeMap;

use crate::alphabet::SENTINEL;

/// Computes the suffix array of `text` over an alphabet of `alphabet_size` symbols.
///
/// `text` must end with the sentinel 0, which must occur nowhere else, and every symbol must be
/// less than `alphabet_size`.
pub(crate) fn sais(text: &[u32], alphabet_size: usize) -> Vec<u32> {
    sais_level(text, alphabet_size, 0)
}

fn sais_level(text: &[u32], alphabet_size: usize, depth: usize) -> Vec<u32> {
    debug_assert_eq!(text.last(), Some(&SENTINEL), "text must end with the sentinel");

    if text.len() == 1 {
        return vec![0];
    }

    let types = TypeMap::classify(text);
    let buckets = Buckets::new(text, alphabet_size);
    let lms = lms_positions(&types);
    let mut suffix_array = vec![EMPTY; text.len()];

    // Stage 1: Reduce the problem by at least 1/2
    induce(
        text,
        &types,
        &buckets,
        Seed::Unsorted(&lms),
        &mut suffix_array,
    );

    // At this point, all the LMS-substrings are sorted, so equal ones are adjacent
    let reduced = Reduced::new(text, &types, &suffix_array, &lms);

    log::debug!(
        "level {depth}: length {}, alphabet {alphabet_size}, {} LMS substrings, {} names, {}",
        text.len(),
        lms.len(),
        reduced.alphabet_size(),
        if reduced.is_unique() { "solving directly" } else { "recursing" },
    );

    // Stage 2: Solve the reduced problem
    let reduced_suffix_array = if reduced.is_unique() {
        // Get the suffix array of the reduced problem directly
        reduced.direct_suffix_array()
    } else {
        // Recurse if the names are not yet unique
        sais_level(reduced.names(), reduced.alphabet_size(), depth + 1)
    };

    // Stage 3: Induce the suffix array from the suffix array of the reduced problem
    induce(
        text,
        &types,
        &buckets,
        Seed::Sorted {
            lms: &lms,
            reduced_suffix_array: &reduced_suffix_array,
        },
        &mut suffix_array,
    );

    suffix_array
}
