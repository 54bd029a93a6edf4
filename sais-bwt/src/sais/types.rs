// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use core::cmp::Ordering;

/// The type of a suffix relative to the suffix one position to its right
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SuffixType {
    /// Lexicographically larger than its right neighbor
    L,
    /// Lexicographically smaller than its right neighbor, or the sentinel
    S,
}

/// The suffix type of every position in a sentinel-terminated sequence
pub(crate) struct TypeMap {
    types: Vec<SuffixType>,
}

impl TypeMap {
    /// Classifies every position of `text` in a single right-to-left pass.
    pub(crate) fn classify(text: &[u32]) -> Self {
        // The sentinel is S-type by definition
        let mut types = vec![SuffixType::S; text.len()];

        for i in (0..text.len().saturating_sub(1)).rev() {
            types[i] = match text[i].cmp(&text[i + 1]) {
                Ordering::Greater => SuffixType::L,
                Ordering::Less => SuffixType::S,
                Ordering::Equal => types[i + 1],
            };
        }

        Self { types }
    }

    pub(crate) fn get(&self, i: usize) -> SuffixType {
        self.types[i]
    }

    pub(crate) fn is_l(&self, i: usize) -> bool {
        self.types[i] == SuffixType::L
    }

    pub(crate) fn is_s(&self, i: usize) -> bool {
        self.types[i] == SuffixType::S
    }

    /// Returns `true` if position `i` is S-type and immediately preceded by an L-type position.
    pub(crate) fn is_lms(&self, i: usize) -> bool {
        i > 0 && self.is_s(i) && self.is_l(i - 1)
    }

    pub(crate) fn len(&self) -> usize {
        self.types.len()
    }
}
