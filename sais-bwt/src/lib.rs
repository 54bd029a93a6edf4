// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Linear-time suffix arrays and the Burrows-Wheeler transform.
//!
//! Suffix arrays are built by induced sorting (SA-IS) over any totally ordered symbol type.
//! Every text is terminated by a sentinel that sorts before all other symbols, either appended
//! virtually or supplied by the caller. The Burrows-Wheeler transform is derived from the suffix
//! array and inverted through the LF-mapping.
//!
//! # Examples
//!
//! Building a suffix array and searching it:
//!
//! ```
//! use sais_bwt::SuffixArray;
//!
//! # fn main() -> Result<(), sais_bwt::Error> {
//! let sa = SuffixArray::new(b"mississippi")?;
//!
//! assert_eq!(sa.as_slice(), &[11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
//! assert!(sa.contains(b"ssip"));
//! # Ok(())
//! # }
//! ```
//!
//! Transforming a sentinel-terminated text and inverting the result:
//!
//! ```
//! # fn main() -> Result<(), sais_bwt::Error> {
//! let text = b"banana$";
//! let suffix_array = sais_bwt::suffix_array_with_sentinel(text, &b'$')?;
//! let bwt = sais_bwt::bwt(text, &suffix_array);
//!
//! assert_eq!(bwt.last_column(), b"annb$aa");
//! assert_eq!(sais_bwt::inverse_bwt(bwt.last_column(), bwt.sentinel_row())?, text);
//! # Ok(())
//! # }
//! ```

mod alphabet;
mod bwt;
mod error;
pub mod naive;
mod sais;
mod suffix_array;

pub use alphabet::MappedText;
pub use bwt::{Bwt, bwt, inverse_bwt};
pub use error::{BwtInconsistency, Error};
pub use suffix_array::{SuffixArray, suffix_array, suffix_array_with_sentinel};
