// File:    crypto.rs
// Author:  apezoo
// Date:    2026-10-14
//
// Description: The three character-wise cipher transformations: Caesar, simple substitution and one-time pad.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the cipher algorithms.
//!
//! These functions do not validate their inputs; use
//! [`try_cipher`](crate::engine::try_cipher) for user-supplied strings.

use crate::alphabet::{self, REFERENCE};
use crate::codepoint;

/// Shifts every character of `message` by `key` code points.
///
/// Decryption shifts in the opposite direction. Arithmetic wraps around the
/// Unicode scalar range (see [`codepoint`]).
#[must_use]
pub fn caesar(message: &str, key: u64, decrypt: bool) -> String {
    let offset = codepoint::reduce(key);
    message
        .chars()
        .map(|c| codepoint::combine(c, offset, decrypt))
        .collect()
}

/// Substitutes every alphabet character of `message` using the mapping derived from `key`.
///
/// Characters outside the reference alphabet are copied unchanged.
#[must_use]
pub fn simple_substitution(message: &str, key: &str, decrypt: bool) -> String {
    let mapping = alphabet::derive_mapping(key);
    let (from, to) = if decrypt {
        (mapping.as_slice(), &REFERENCE[..])
    } else {
        (&REFERENCE[..], mapping.as_slice())
    };
    message
        .chars()
        .map(|c| alphabet::translate(c, from, to))
        .collect()
}

/// Adds (or, when decrypting, subtracts) the code point of each key character
/// to the character of `message` at the same position.
///
/// # Panics
///
/// Panics if `message` and `key` do not have the same number of characters.
#[must_use]
pub fn one_time_pad(message: &str, key: &str, decrypt: bool) -> String {
    assert_eq!(
        message.chars().count(),
        key.chars().count(),
        "Message and key must have the same length for the one-time pad."
    );
    message
        .chars()
        .zip(key.chars())
        .map(|(m, k)| codepoint::combine(m, codepoint::index_of(k), decrypt))
        .collect()
}
