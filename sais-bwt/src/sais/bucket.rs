// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Slot ranges of the suffix array reserved for each symbol of the alphabet.
///
/// Only the cumulative symbol counts are stored. Every induction pass takes a fresh copy of the
/// heads or tails it consumes.
pub(crate) struct Buckets {
    /// `ends[c]` is the number of symbols less than or equal to `c`
    ends: Vec<usize>,
}

impl Buckets {
    pub(crate) fn new(text: &[u32], alphabet_size: usize) -> Self {
        // Compute the size of each bucket
        let mut ends = vec![0; alphabet_size];
        for &c in text {
            ends[c as usize] += 1;
        }

        // Turn the sizes into cumulative counts
        let mut sum = 0;
        for end in ends.iter_mut() {
            sum += *end;
            *end = sum;
        }

        Self { ends }
    }

    /// Returns the first slot of every bucket.
    pub(crate) fn heads(&self) -> Vec<usize> {
        let mut heads = Vec::with_capacity(self.ends.len());
        heads.push(0);
        heads.extend_from_slice(&self.ends[..self.ends.len() - 1]);
        heads
    }

    /// Returns the last slot of every bucket.
    ///
    /// The sentinel always occupies bucket 0, so every cumulative count is at least 1.
    pub(crate) fn tails(&self) -> Vec<usize> {
        self.ends.iter().map(|&end| end - 1).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MappedText;

    #[test]
    fn banana() {
        // a: 3, b: 1, n: 2
        let mapped = MappedText::new(b"banana").unwrap();
        let buckets = Buckets::new(mapped.symbols(), mapped.alphabet_size());

        assert_eq!(buckets.heads(), &[0, 1, 4, 5]);
        assert_eq!(buckets.tails(), &[0, 3, 4, 6]);
    }

    #[test]
    fn sentinel_only() {
        let buckets = Buckets::new(&[0], 1);

        assert_eq!(buckets.heads(), &[0]);
        assert_eq!(buckets.tails(), &[0]);
    }
}
