// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use super::{induce::EMPTY, types::TypeMap};

/// The reduced problem: one name per LMS substring, in offset order.
///
/// Reduced index `i` refers to the `i`th LMS position of the original sequence. The last name is
/// always 0, the unique name of the sentinel's LMS substring, so the reduced sequence is itself
/// sentinel-terminated.
pub(crate) struct Reduced {
    names: Vec<u32>,
    alphabet_size: usize,
}

impl Reduced {
    /// Names the LMS substrings of `text` in the order they appear in `suffix_array`.
    ///
    /// `suffix_array` must be the result of inducing from the unsorted LMS seed, so that equal LMS
    /// substrings are adjacent.
    pub(crate) fn new(text: &[u32], types: &TypeMap, suffix_array: &[u32], lms: &[u32]) -> Self {
        // LMS positions are at least two apart, so halving them keeps them distinct
        let mut name_at = vec![EMPTY; text.len() / 2 + 1];

        let mut name: u32 = 0;
        let mut previous: Option<usize> = None;
        for &p in suffix_array {
            if p == EMPTY || !types.is_lms(p as usize) {
                continue;
            }
            let p = p as usize;

            if let Some(previous) = previous
                && !lms_substrings_equal(text, types, previous, p)
            {
                // A new name
                name += 1;
            }

            previous = Some(p);
            name_at[p / 2] = name;
        }

        let names = lms.iter().map(|&p| name_at[p as usize / 2]).collect();

        Self {
            names,
            alphabet_size: name as usize + 1,
        }
    }

    pub(crate) fn names(&self) -> &[u32] {
        &self.names
    }

    pub(crate) fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Returns `true` if no two LMS substrings share a name.
    pub(crate) fn is_unique(&self) -> bool {
        self.alphabet_size == self.names.len()
    }

    /// Returns the suffix array of a reduced sequence whose names are all distinct.
    ///
    /// With unique names, the order of the reduced suffixes is the order of their first symbols.
    pub(crate) fn direct_suffix_array(&self) -> Vec<u32> {
        debug_assert!(self.is_unique(), "names must be unique");

        let mut suffix_array = vec![0; self.names.len()];
        for (i, &name) in self.names.iter().enumerate() {
            suffix_array[name as usize] = i as u32;
        }

        suffix_array
    }
}

/// Compares the LMS substrings starting at `a` and `b`.
///
/// Each substring runs up to and including the next LMS position. The substrings are equal when
/// every symbol and type matches and both reach an LMS boundary at the same offset.
fn lms_substrings_equal(text: &[u32], types: &TypeMap, a: usize, b: usize) -> bool {
    // The unique sentinel terminates both walks before either runs off the end
    let mut i = 0;
    loop {
        let (x, y) = (a + i, b + i);
        if text[x] != text[y] || types.get(x) != types.get(y) {
            return false;
        }

        if i > 0 {
            match (types.is_lms(x), types.is_lms(y)) {
                (true, true) => return true,
                (false, false) => {}
                _ => return false,
            }
        }

        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            bucket::Buckets,
            induce::{Seed, induce},
            lms::lms_positions,
        },
        *,
    };
    use crate::MappedText;

    fn reduce(text: &[u8]) -> (Reduced, Vec<u32>) {
        let mapped = MappedText::new(text).unwrap();
        let types = TypeMap::classify(mapped.symbols());
        let buckets = Buckets::new(mapped.symbols(), mapped.alphabet_size());
        let lms = lms_positions(&types);

        let mut suffix_array = vec![0; mapped.len()];
        induce(
            mapped.symbols(),
            &types,
            &buckets,
            Seed::Unsorted(&lms),
            &mut suffix_array,
        );

        (
            Reduced::new(mapped.symbols(), &types, &suffix_array, &lms),
            lms,
        )
    }

    #[test]
    fn equal_substrings_share_a_name() {
        let (reduced, lms) = reduce(b"mississippi");

        // "issi" starts at both 1 and 4
        assert_eq!(lms, &[1, 4, 7, 11]);
        assert_eq!(reduced.names(), &[2, 2, 1, 0]);
        assert_eq!(reduced.alphabet_size(), 3);
        assert!(!reduced.is_unique());
    }

    #[test]
    fn substrings_ending_at_sentinel_are_distinct() {
        let (reduced, lms) = reduce(b"abcabcabc");

        // "abca" at 3 and "abc$" at 6
        assert_eq!(lms, &[3, 6, 9]);
        assert_eq!(reduced.names(), &[2, 1, 0]);
        assert!(reduced.is_unique());
    }

    #[test]
    fn distinct_substrings_are_solved_directly() {
        let (reduced, _) = reduce(b"cabdab");

        assert!(reduced.is_unique());
        assert_eq!(reduced.direct_suffix_array(), &[2, 1, 0]);
    }

    #[test]
    fn last_name_is_sentinel() {
        let (reduced, _) = reduce(b"amanaplanacanalpanama");

        assert_eq!(reduced.names(), &[4, 5, 4, 1, 4, 2, 4, 3, 0]);
        assert_eq!(reduced.alphabet_size(), 6);
    }
}
