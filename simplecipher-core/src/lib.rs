// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-14
//
// Description: The main library crate for simplecipher-core, exposing the classical ciphers and their validation layer.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Simplecipher Core Library
//!
//! This library provides three classical text ciphers (Caesar, keyword
//! substitution and one-time pad), the reference alphabet they share, and the
//! validation layer that turns user-supplied strings into either ciphertext or
//! a structured error. None of these ciphers offer real security.
//!
//! ```
//! use simplecipher_core::{Method, try_cipher};
//!
//! let secret = try_cipher("Attack at dawn", "LEMON", Method::SimpleSubstitution, false).unwrap();
//! let plain = try_cipher(&secret, "LEMON", Method::SimpleSubstitution, true).unwrap();
//! assert_eq!(plain, "Attack at dawn");
//! ```

/// The reference alphabet and substitution mappings.
pub mod alphabet;
/// Wrap-around code point arithmetic.
pub mod codepoint;
/// The cipher algorithms.
pub mod crypto;
/// Request validation, dispatch and caller sessions.
pub mod engine;
/// Error codes and validation failures.
pub mod error;
/// Cipher method identifiers and display label lookup.
pub mod method;
/// Utilities for generating one-time-pad keys.
pub mod pad_generator;

pub use crypto::{caesar, one_time_pad, simple_substitution};
pub use engine::{CipherRequest, Direction, Session, try_cipher, try_cipher_named};
pub use error::{ErrorCode, ValidationError};
pub use method::{Method, MethodTable};
