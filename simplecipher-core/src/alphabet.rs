// File:    alphabet.rs
// Author:  apezoo
// Date:    2026-10-14
//
// Description: The reference alphabet and the keyword-driven substitution mapping built on top of it.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The fixed Latin reference alphabet and the operations used to derive
//! substitution mappings from a keyword.

use std::collections::HashSet;

/// Number of symbols in the reference alphabet.
pub const ALPHABET_LEN: usize = 52;

/// The reference alphabet: `A`..=`Z` followed by `a`..=`z`.
pub const REFERENCE: [char; ALPHABET_LEN] = build_reference();

const fn build_reference() -> [char; ALPHABET_LEN] {
    let mut out = ['\0'; ALPHABET_LEN];
    let mut i: u8 = 0;
    while i < 26 {
        out[i as usize] = (b'A' + i) as char;
        out[i as usize + 26] = (b'a' + i) as char;
        i += 1;
    }
    out
}

/// Returns `true` if `c` belongs to the reference alphabet.
#[must_use]
pub const fn contains(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Removes duplicate characters, keeping the first occurrence of each one.
///
/// Relative order is preserved, so `deduplicate("banana".chars())` yields
/// `['b', 'a', 'n']`.
#[must_use]
pub fn deduplicate<I>(chars: I) -> Vec<char>
where
    I: IntoIterator<Item = char>,
{
    let mut seen = HashSet::new();
    chars.into_iter().filter(|c| seen.insert(*c)).collect()
}

/// Derives the substitution mapping for `keyword`.
///
/// The keyword is stripped of whitespace and of every other character outside
/// the reference alphabet, deduplicated, and followed by the reference
/// alphabet; a second deduplication leaves a permutation of [`REFERENCE`].
///
/// # Examples
///
/// ```
/// use simplecipher_core::alphabet::{derive_mapping, REFERENCE};
///
/// let mapping = derive_mapping("KEY");
/// assert_eq!(&mapping[..4], &['K', 'E', 'Y', 'A']);
/// assert_eq!(mapping.len(), REFERENCE.len());
///
/// assert_eq!(derive_mapping("  "), REFERENCE.to_vec());
/// ```
#[must_use]
pub fn derive_mapping(keyword: &str) -> Vec<char> {
    let stripped = keyword.chars().filter(|c| contains(*c));
    let mapping = deduplicate(deduplicate(stripped).into_iter().chain(REFERENCE));
    debug_assert_eq!(mapping.len(), ALPHABET_LEN);
    mapping
}

/// Looks `c` up in `from` and returns the character at the same position in `to`.
///
/// Characters missing from `from` are returned unchanged. `from` and `to` are
/// expected to be permutations of the same alphabet; a position that `to`
/// cannot satisfy also falls back to `c`.
#[must_use]
pub fn translate(c: char, from: &[char], to: &[char]) -> char {
    debug_assert_eq!(from.len(), to.len(), "translation tables differ in length");
    from.iter()
        .position(|&x| x == c)
        .and_then(|index| to.get(index).copied())
        .unwrap_or(c)
}
