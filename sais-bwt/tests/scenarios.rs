// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use sais_bwt::{BwtInconsistency, Error, SuffixArray, naive};

/// Returns the `k`th Fibonacci word over `{a, b}`
fn fibonacci_word(k: usize) -> Vec<u8> {
    let (mut previous, mut current) = (b"b".to_vec(), b"a".to_vec());
    for _ in 0..k {
        let next = [current.as_slice(), previous.as_slice()].concat();
        previous = current;
        current = next;
    }
    current
}

#[test]
fn banana() {
    let sa = SuffixArray::new(b"banana").unwrap();
    assert_eq!(sa.as_slice(), &[6, 5, 3, 1, 0, 4, 2]);

    let bwt = sa.bwt(b'$').unwrap();
    assert_eq!(bwt.last_column(), b"annb$aa");
    assert_eq!(bwt.sentinel_row(), 4);
    assert_eq!(sa.as_slice()[bwt.sentinel_row()], 0);
}

#[test]
fn empty_input() {
    assert_eq!(sais_bwt::suffix_array::<u8>(&[]), Err(Error::EmptyInput));
    assert_eq!(
        sais_bwt::suffix_array_with_sentinel(&[], &b'$'),
        Err(Error::EmptyInput),
    );
}

#[test]
fn single_symbol_run() {
    let text = b"aaaa$";
    let suffix_array = sais_bwt::suffix_array_with_sentinel(text, &b'$').unwrap();
    assert_eq!(suffix_array, &[4, 3, 2, 1, 0]);

    let bwt = sais_bwt::bwt(text, &suffix_array);
    assert_eq!(bwt.last_column(), b"aaaa$");
}

#[test]
fn inconsistent_last_column() {
    // Two '$' symbols, but the claimed sentinel row holds one of them
    let result = sais_bwt::inverse_bwt(b"an$b$aa", 2);

    assert_eq!(
        result,
        Err(Error::InconsistentBwt(BwtInconsistency::SentinelCount(2))),
    );
}

#[test]
fn colliding_names_force_recursion() {
    // The LMS substring "aaba" occurs twice, so the first pass cannot name it uniquely
    let text = b"baabaabac";

    assert_eq!(
        sais_bwt::suffix_array(text).unwrap(),
        &[9, 1, 4, 2, 5, 7, 0, 3, 6, 8],
    );
    assert_eq!(
        sais_bwt::suffix_array(text).unwrap(),
        naive::suffix_array(text),
    );
}

#[test]
fn deep_recursion_on_fibonacci_words() {
    // Fibonacci words reduce to Fibonacci words, recursing at almost every level
    let text = fibonacci_word(16);

    assert_eq!(
        sais_bwt::suffix_array(&text).unwrap(),
        naive::suffix_array(&text),
    );
}

#[test]
fn fibonacci_rotation_transforms_have_two_runs() {
    for k in 2..14 {
        let text = fibonacci_word(k);
        let bwt = naive::rotation_bwt(&text).unwrap();

        assert_eq!(bwt.runs(), 2, "fibonacci word {k}");
        assert_eq!(
            naive::inverse_rotation_bwt(bwt.last_column(), bwt.sentinel_row()).unwrap(),
            text,
        );
    }
}

#[test]
fn sentinel_transform_inverts_fibonacci_words() {
    for k in 2..14 {
        let text = fibonacci_word(k);
        let bwt = SuffixArray::new(&text).unwrap().bwt(b'$').unwrap();

        let mut expected = text.clone();
        expected.push(b'$');
        assert_eq!(bwt.invert().unwrap(), expected);
    }
}

#[test]
fn generic_symbols() {
    let text = [3u16, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    let sa = SuffixArray::new(&text).unwrap();

    assert_eq!(sa.as_slice(), naive::suffix_array(&text));

    let bwt = sa.bwt(0).unwrap();
    let mut expected = text.to_vec();
    expected.push(0);
    assert_eq!(bwt.invert().unwrap(), expected);
}
