// File:    codepoint.rs
// Author:  apezoo
// Date:    2026-10-14
//
// Description: Wrap-around code point arithmetic shared by the Caesar and one-time-pad ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Modular arithmetic over Unicode scalar values.
//!
//! Characters are numbered densely: code points below the surrogate block keep
//! their value, code points above it are shifted down by the size of the
//! block. Sums and differences are reduced modulo [`CODE_SPACE`], so every
//! result maps back to a valid `char` and adding then subtracting the same
//! offset always restores the original character.

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;

/// Number of Unicode scalar values, i.e. the modulus of all character arithmetic.
pub const CODE_SPACE: u32 = 0x11_0000 - SURROGATE_LEN;

/// Returns the dense index of `c` in `0..CODE_SPACE`.
#[must_use]
pub const fn index_of(c: char) -> u32 {
    let value = c as u32;
    if value < SURROGATE_START {
        value
    } else {
        value - SURROGATE_LEN
    }
}

/// Returns the character at dense index `index`, reduced modulo [`CODE_SPACE`].
#[must_use]
pub fn char_at(index: u32) -> char {
    let index = index % CODE_SPACE;
    let value = if index < SURROGATE_START {
        index
    } else {
        index + SURROGATE_LEN
    };
    // Every reduced index lands outside the surrogate block.
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Adds (or, with `subtract`, removes) `offset` to `c`, wrapping around the code space.
#[must_use]
pub fn combine(c: char, offset: u32, subtract: bool) -> char {
    let space = u64::from(CODE_SPACE);
    let offset = u64::from(offset) % space;
    let index = u64::from(index_of(c));
    let result = if subtract {
        (index + space - offset) % space
    } else {
        (index + offset) % space
    };
    u32::try_from(result).map_or(char::REPLACEMENT_CHARACTER, char_at)
}

/// Reduces an arbitrary non-negative key to an offset in `0..CODE_SPACE`.
#[must_use]
pub fn reduce(key: u64) -> u32 {
    u32::try_from(key % u64::from(CODE_SPACE)).unwrap_or(0)
}

/// First code point (the digit zero) of every run of ten decimal digits
/// (general category `Nd`, Unicode 15), in ascending order.
const DIGIT_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Returns the value of `c` if it is a decimal digit in any script.
#[must_use]
pub fn digit_value(c: char) -> Option<u32> {
    let value = u32::from(c);
    let run = DIGIT_ZEROS.partition_point(|&zero| zero <= value);
    let zero = DIGIT_ZEROS[run.checked_sub(1)?];
    let digit = value - zero;
    (digit < 10).then_some(digit)
}

/// Parses a string of decimal digits into an offset in `0..CODE_SPACE`.
///
/// Digits from any script are accepted (`"42"`, `"٤٢"` and `"४२"` are the same
/// key). The value is reduced while it is parsed, so digit strings of any
/// length are accepted. Returns `None` for an empty string or any non-digit
/// character.
#[must_use]
pub fn parse_offset(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    let space = u64::from(CODE_SPACE);
    let value = digits.chars().try_fold(0u64, |acc, c| {
        digit_value(c).map(|d| (acc * 10 + u64::from(d)) % space)
    })?;
    Some(reduce(value))
}
