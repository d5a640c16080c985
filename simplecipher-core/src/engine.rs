// File:    engine.rs
// Author:  apezoo
// Date:    2026-10-14
//
// Description: Validates cipher requests and dispatches them to the selected algorithm.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Request validation and dispatch.
//!
//! The engine itself is stateless. Callers that want a "currently selected
//! method" keep a [`Session`].

use crate::codepoint;
use crate::crypto;
use crate::error::{ErrorCode, ValidationError};
use crate::method::{Method, MethodTable};
use log::debug;
use serde::{Deserialize, Serialize};

/// Whether a request encrypts or decrypts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Transform plaintext into ciphertext.
    #[default]
    Encrypt,
    /// Transform ciphertext back into plaintext.
    Decrypt,
}

impl Direction {
    /// Returns `true` for [`Direction::Decrypt`].
    #[must_use]
    pub const fn is_decrypt(self) -> bool {
        matches!(self, Self::Decrypt)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }
}

impl From<bool> for Direction {
    fn from(decrypt: bool) -> Self {
        if decrypt { Self::Decrypt } else { Self::Encrypt }
    }
}

/// A single cipher operation, in owned form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRequest {
    /// The text to transform.
    pub message: String,
    /// The key, interpreted according to `method`.
    pub key: String,
    /// The algorithm to apply.
    #[serde(default)]
    pub method: Method,
    /// Encrypt or decrypt.
    #[serde(default)]
    pub direction: Direction,
}

impl CipherRequest {
    /// Validates and runs the request.
    ///
    /// # Errors
    ///
    /// See [`try_cipher`].
    pub fn execute(&self) -> Result<String, ValidationError> {
        try_cipher(
            &self.message,
            &self.key,
            self.method,
            self.direction.is_decrypt(),
        )
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Checks the inputs every method shares: a non-blank message and a non-blank key.
///
/// Both checks always run, so an empty message and an empty key are reported together.
fn check_common(message: &str, key: &str) -> Result<(), ValidationError> {
    let mut error = ValidationError::default();
    if is_blank(message) {
        error.push(ErrorCode::MessageEmpty);
    }
    if is_blank(key) {
        error.push(ErrorCode::KeyEmpty);
    }
    if error.is_empty() { Ok(()) } else { Err(error) }
}

/// Validates `message` and `key` for `method` and applies the cipher.
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying:
/// - [`ErrorCode::MessageEmpty`] and/or [`ErrorCode::KeyEmpty`] for blank inputs,
///   in which case no method-specific check runs;
/// - [`ErrorCode::KeyNotNaturalNumber`] for a Caesar key that is not all decimal digits;
/// - [`ErrorCode::KeyMessageLengthMismatch`] for a one-time-pad key whose length
///   differs from the message.
///
/// # Examples
///
/// ```
/// use simplecipher_core::engine::try_cipher;
/// use simplecipher_core::error::ErrorCode;
/// use simplecipher_core::method::Method;
///
/// assert_eq!(try_cipher("ABC", "1", Method::Caesar, false).unwrap(), "BCD");
///
/// let error = try_cipher("hi", "abc", Method::Caesar, false).unwrap_err();
/// assert_eq!(error.key, Some(ErrorCode::KeyNotNaturalNumber));
/// ```
pub fn try_cipher(
    message: &str,
    key: &str,
    method: Method,
    decrypt: bool,
) -> Result<String, ValidationError> {
    check_common(message, key)?;
    debug!(
        "Running {method} ({}) on {} characters",
        Direction::from(decrypt).label(),
        message.chars().count()
    );
    match method {
        Method::Caesar => {
            let offset = codepoint::parse_offset(key).ok_or(ErrorCode::KeyNotNaturalNumber)?;
            Ok(crypto::caesar(message, u64::from(offset), decrypt))
        }
        Method::SimpleSubstitution => Ok(crypto::simple_substitution(message, key, decrypt)),
        Method::OneTimePad => {
            if message.chars().count() != key.chars().count() {
                return Err(ErrorCode::KeyMessageLengthMismatch.into());
            }
            Ok(crypto::one_time_pad(message, key, decrypt))
        }
    }
}

/// Like [`try_cipher`], but takes the method as a machine identifier (`"caesar"`, ...).
///
/// # Errors
///
/// Everything [`try_cipher`] reports, plus [`ErrorCode::UnknownMethod`] when
/// `method` does not name a known method. The blank-input checks run first.
pub fn try_cipher_named(
    message: &str,
    key: &str,
    method: &str,
    decrypt: bool,
) -> Result<String, ValidationError> {
    check_common(message, key)?;
    let method = method.parse::<Method>()?;
    try_cipher(message, key, method, decrypt)
}

/// Caller-held state: the selected method and the outcome of the last cipher call.
#[derive(Debug, Clone, Default)]
pub struct Session {
    method: Method,
    last_result: Option<Result<String, ValidationError>>,
}

impl Session {
    /// Starts a session with the default method selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Selects a method directly.
    pub const fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Selects the method whose display label is `label` in `table`.
    ///
    /// On failure the previous selection is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::UnknownMethodSelection`] for a label the table does not know.
    pub fn select_method(&mut self, table: &MethodTable, label: &str) -> Result<Method, ErrorCode> {
        let method = table.select_method(label)?;
        self.method = method;
        Ok(method)
    }

    /// Runs [`try_cipher`] with the selected method and records the outcome.
    ///
    /// # Errors
    ///
    /// See [`try_cipher`].
    pub fn try_cipher(
        &mut self,
        message: &str,
        key: &str,
        decrypt: bool,
    ) -> Result<String, ValidationError> {
        let result = try_cipher(message, key, self.method, decrypt);
        self.last_result = Some(result.clone());
        result
    }

    /// The validation failure of the last call, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_result.as_ref().and_then(|r| r.as_ref().err())
    }

    /// The outcome of the last call, if any call was made.
    #[must_use]
    pub const fn last_result(&self) -> Option<&Result<String, ValidationError>> {
        self.last_result.as_ref()
    }
}
