// File:    method.rs
// Author:  apezoo
// Date:    2026-10-14
//
// Description: Cipher method identifiers and the caller-owned table mapping display labels to methods.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Cipher method selection.

use crate::error::ErrorCode;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The cipher algorithms offered by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Fixed code point shift by a numeric key.
    Caesar,
    /// Keyword-derived substitution alphabet.
    #[default]
    SimpleSubstitution,
    /// Position-wise code point addition with an equal-length key.
    OneTimePad,
}

impl Method {
    /// Every method, in menu order.
    pub const ALL: [Self; 3] = [Self::Caesar, Self::SimpleSubstitution, Self::OneTimePad];

    /// The stable machine identifier of the method.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::SimpleSubstitution => "simple-substitution",
            Self::OneTimePad => "one-time-pad",
        }
    }

    /// The English display label used by [`MethodTable::default`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Caesar => "Caesar",
            Self::SimpleSubstitution => "Simple Substitution",
            Self::OneTimePad => "One-Time Pad",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Method {
    type Err = ErrorCode;

    /// Parses a machine identifier; underscores are accepted in place of dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|m| m.id() == normalized)
            .ok_or(ErrorCode::UnknownMethod)
    }
}

/// Maps display labels to methods.
///
/// The table belongs to the caller (a UI, a CLI) and keeps the engine free of
/// any presentation strings. Lookups are exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodTable {
    entries: Vec<(String, Method)>,
}

impl MethodTable {
    /// Builds a table from `(label, method)` pairs.
    ///
    /// A label listed twice resolves to its first entry.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Method)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, method)| (label.into(), method))
                .collect(),
        }
    }

    /// Resolves a display label to its method.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::UnknownMethodSelection`] if no entry carries `label`.
    pub fn select_method(&self, label: &str) -> Result<Method, ErrorCode> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, method)| *method)
            .ok_or_else(|| {
                warn!("Unknown cipher method '{label}'");
                ErrorCode::UnknownMethodSelection
            })
    }

    /// The labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(label, _)| label.as_str())
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::new(Method::ALL.map(|m| (m.label(), m)))
    }
}
