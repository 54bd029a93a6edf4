// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use proptest::prelude::*;
use sais_bwt::{SuffixArray, naive};

/// Calls `f` with every sequence of length `len` over `0..alphabet_size`
fn for_each_sequence<F>(len: usize, alphabet_size: u8, mut f: F)
where
    F: FnMut(&[u8]),
{
    let mut sequence = vec![0; len];
    loop {
        f(&sequence);

        // Advance like an odometer
        let mut i = 0;
        while i < len && sequence[i] == alphabet_size - 1 {
            sequence[i] = 0;
            i += 1;
        }
        if i == len {
            break;
        }
        sequence[i] += 1;
    }
}

fn assert_sorted(text: &[u8], suffix_array: &[u32]) {
    assert_eq!(suffix_array.len(), text.len() + 1, "one suffix per position");
    assert_eq!(suffix_array[0] as usize, text.len(), "sentinel suffix first");

    let mut seen = vec![false; suffix_array.len()];
    for &p in suffix_array {
        assert!(!seen[p as usize], "suffix {p} appears twice");
        seen[p as usize] = true;
    }

    for pair in suffix_array.windows(2) {
        assert!(
            text[pair[0] as usize..] < text[pair[1] as usize..],
            "suffixes {} and {} out of order",
            pair[0],
            pair[1],
        );
    }
}

#[test]
fn exhaustive_binary() {
    for len in 1..=12 {
        for_each_sequence(len, 2, |text| {
            let suffix_array = sais_bwt::suffix_array(text).unwrap();
            assert_eq!(suffix_array, naive::suffix_array(text), "text {text:?}");
        });
    }
}

#[test]
fn exhaustive_ternary() {
    for len in 1..=8 {
        for_each_sequence(len, 3, |text| {
            let suffix_array = sais_bwt::suffix_array(text).unwrap();
            assert_eq!(suffix_array, naive::suffix_array(text), "text {text:?}");
        });
    }
}

#[test]
fn exhaustive_round_trip() {
    for len in 1..=8 {
        for_each_sequence(len, 3, |body| {
            let sa = SuffixArray::new(body).unwrap();
            let bwt = sa.bwt(u8::MAX).unwrap();

            let mut text = body.to_vec();
            text.push(u8::MAX);
            assert_eq!(bwt.invert().unwrap(), text, "text {body:?}");
        });
    }
}

#[test]
fn long_periodic_text() {
    let text = b"abcab".repeat(400);
    let suffix_array = sais_bwt::suffix_array(&text).unwrap();

    assert_sorted(&text, &suffix_array);
}

proptest! {
    #[test]
    fn matches_brute_force(text in proptest::collection::vec(0..4u8, 1..2000)) {
        let suffix_array = sais_bwt::suffix_array(&text).unwrap();

        prop_assert_eq!(suffix_array, naive::suffix_array(&text));
    }

    #[test]
    fn suffixes_are_sorted(text in proptest::collection::vec(any::<u8>(), 1..500)) {
        let suffix_array = sais_bwt::suffix_array(&text).unwrap();

        assert_sorted(&text, &suffix_array);
    }

    #[test]
    fn wide_alphabets(text in proptest::collection::vec(0..100_000u32, 1..300)) {
        let suffix_array = sais_bwt::suffix_array(&text).unwrap();

        prop_assert_eq!(suffix_array, naive::suffix_array(&text));
    }

    #[test]
    fn inverse_restores_text(body in proptest::collection::vec(b'a'..=b'd', 1..1000)) {
        let mut text = body.clone();
        text.push(b'$');

        let suffix_array = sais_bwt::suffix_array_with_sentinel(&text, &b'$').unwrap();
        let bwt = sais_bwt::bwt(&text, &suffix_array);

        prop_assert_eq!(sais_bwt::inverse_bwt(bwt.last_column(), bwt.sentinel_row()).unwrap(), text);
    }

    #[test]
    fn contains_agrees_with_scan(
        text in proptest::collection::vec(b'a'..=b'c', 1..200),
        pattern in proptest::collection::vec(b'a'..=b'c', 0..6),
    ) {
        let sa = SuffixArray::new(&text).unwrap();
        let expected = pattern.is_empty() || text.windows(pattern.len()).any(|w| w == pattern.as_slice());

        prop_assert_eq!(sa.contains(&pattern), expected);
    }

    #[test]
    fn rotation_transform_inverts(text in proptest::collection::vec(b'a'..=b'b', 1..64)) {
        let bwt = naive::rotation_bwt(&text).unwrap();

        prop_assert_eq!(naive::inverse_rotation_bwt(bwt.last_column(), bwt.sentinel_row()).unwrap(), text);
    }
}
