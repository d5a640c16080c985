// File:    error.rs
// Author:  apezoo
// Date:    2026-10-14
//
// Description: Error codes and the field-aware validation failure returned by the cipher engine.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types for the cipher engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An abstract, non-localized error code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, thiserror::Error,
)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    /// The message is empty or only whitespace.
    #[error("the message is empty")]
    MessageEmpty,
    /// The key is empty or only whitespace.
    #[error("the key is empty")]
    KeyEmpty,
    /// The Caesar key is not made of decimal digits only.
    #[error("the key must be a natural number")]
    KeyNotNaturalNumber,
    /// The one-time-pad key and the message have a different number of characters.
    #[error("the key and the message must have the same length")]
    KeyMessageLengthMismatch,
    /// The method identifier passed to the dispatcher is not known.
    #[error("unknown cipher method")]
    UnknownMethod,
    /// The display label passed to method selection is not known.
    #[error("unknown cipher method selection")]
    UnknownMethodSelection,
}

/// A validation failure, with each code attached to the input it concerns.
///
/// `message` holds message-related codes, `key` holds key-related codes and
/// `other` holds codes that concern the combination (length mismatch) or the
/// method itself. Failures returned by the engine occupy at least one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error attached to the message input.
    pub message: Option<ErrorCode>,
    /// Error attached to the key input.
    pub key: Option<ErrorCode>,
    /// Error not tied to a single input.
    pub other: Option<ErrorCode>,
}

impl ValidationError {
    /// Builds a failure holding a single code, placed in the slot it belongs to.
    #[must_use]
    pub fn single(code: ErrorCode) -> Self {
        let mut error = Self::default();
        error.push(code);
        error
    }

    pub(crate) fn push(&mut self, code: ErrorCode) {
        let slot = match code {
            ErrorCode::MessageEmpty => &mut self.message,
            ErrorCode::KeyEmpty | ErrorCode::KeyNotNaturalNumber => &mut self.key,
            ErrorCode::KeyMessageLengthMismatch
            | ErrorCode::UnknownMethod
            | ErrorCode::UnknownMethodSelection => &mut self.other,
        };
        *slot = Some(code);
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.message.is_none() && self.key.is_none() && self.other.is_none()
    }

    /// Iterates over every reported code.
    pub fn codes(&self) -> impl Iterator<Item = ErrorCode> + '_ {
        [self.message, self.key, self.other].into_iter().flatten()
    }

    /// Returns `true` if `code` was reported.
    #[must_use]
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.codes().any(|c| c == code)
    }
}

impl From<ErrorCode> for ValidationError {
    fn from(code: ErrorCode) -> Self {
        Self::single(code)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for code in self.codes() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{code}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
