// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use super::types::TypeMap;

/// Returns every LMS position in ascending order.
///
/// The sentinel is always the last entry when the sequence has more than one element.
pub(crate) fn lms_positions(types: &TypeMap) -> Vec<u32> {
    (1..types.len())
        .filter(|&i| types.is_lms(i))
        .map(|i| i as u32)
        .collect()
}
