// File:    pad_generator.rs
// Author:  apezoo
// Date:    2026-10-14
//
// Description: Provides functionality for generating random one-time-pad keys for a message.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::REFERENCE;
use rand::Rng;
use thiserror::Error;

/// Longest one-time-pad key that can be generated in one call.
pub const MAX_PAD_LENGTH: usize = 4096;

/// Returned when a requested key is longer than [`MAX_PAD_LENGTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pad length {requested} must not exceed {MAX_PAD_LENGTH} characters")]
pub struct PadTooLong {
    /// The length that was asked for.
    pub requested: usize,
}

/// Generates a random one-time-pad key of `length` characters.
///
/// Every character is drawn uniformly from the reference alphabet, so the key
/// can be typed and shared as plain text.
///
/// # Arguments
///
/// * `length` - The number of characters in the key.
///
/// # Errors
///
/// Returns [`PadTooLong`] if `length` is greater than [`MAX_PAD_LENGTH`].
pub fn generate_pad_key(length: usize) -> Result<String, PadTooLong> {
    if length > MAX_PAD_LENGTH {
        return Err(PadTooLong { requested: length });
    }
    let mut rng = rand::rng();
    Ok((0..length)
        .map(|_| REFERENCE[rng.random_range(0..REFERENCE.len())])
        .collect())
}

/// Generates a random one-time-pad key with as many characters as `message`.
///
/// # Errors
///
/// Returns [`PadTooLong`] if `message` has more than [`MAX_PAD_LENGTH`] characters.
pub fn generate_pad_key_for(message: &str) -> Result<String, PadTooLong> {
    generate_pad_key(message.chars().count())
}
