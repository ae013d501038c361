//! The JSON share document.
//!
//! A document holds a `keys` header with the total share count `n` and
//! the threshold `k`, plus one object per share keyed by its decimal
//! x-coordinate:
//!
//! ```json
//! {
//!     "keys": {"n": 4, "k": 3},
//!     "1": {"base": "10", "value": "4"},
//!     "2": {"base": "2", "value": "111"}
//! }
//! ```
//!
//! Bases arrive as strings and are validated here, so the decoder only
//! ever sees a base in `[2, 36]`.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while parsing or validating a share document.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document is not valid JSON or misses required fields.
    #[error("malformed share document: {0}")]
    Json(#[from] serde_json::Error),

    /// A top-level key other than `keys` did not parse as an integer
    /// x-coordinate.
    #[error("share key {key:?} is not an integer x-coordinate")]
    BadShareKey {
        /// The offending key.
        key: String,
    },

    /// A share's base is not an integer in `[2, 36]`.
    #[error("share {x}: base {base:?} is not an integer in [2, 36]")]
    BadBase {
        /// The share's x-coordinate.
        x: i64,
        /// The base string as it appeared in the document.
        base: String,
    },

    /// The threshold asks for more points than the document provides.
    #[error("k = {k} points requested but only {available} shares are present")]
    NotEnoughShares {
        /// The requested threshold.
        k: usize,
        /// The number of shares in the document.
        available: usize,
    },

    /// The threshold is zero; at least one point is required.
    #[error("k must be at least 1")]
    ZeroPoints,
}

/// One share, parsed and validated but not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// The x-coordinate.
    pub x: i64,
    /// The base of `value`, in `[2, 36]`.
    pub base: u32,
    /// The y-value as a digit string in `base`.
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Keys {
    n: usize,
    k: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct RawShare {
    base: String,
    value: String,
}

/// A parsed share document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    keys: Keys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

impl Document {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Json`] if the text is not valid JSON or
    /// the `keys` header is missing or malformed.
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The total number of shares the document claims to hold.
    #[must_use]
    pub fn n(&self) -> usize {
        self.keys.n
    }

    /// The number of points needed to reconstruct the polynomial.
    #[must_use]
    pub fn k(&self) -> usize {
        self.keys.k
    }

    /// Validates and returns all shares, in document key order.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::BadShareKey`] for a non-integer share key
    /// and [`InputError::BadBase`] for a base outside `[2, 36]`.
    pub fn shares(&self) -> Result<Vec<Share>, InputError> {
        self.shares
            .iter()
            .map(|(key, raw)| {
                let x: i64 = key.parse().map_err(|_| InputError::BadShareKey {
                    key: key.clone(),
                })?;
                let base: u32 = raw
                    .base
                    .parse()
                    .ok()
                    .filter(|b| (2..=36).contains(b))
                    .ok_or_else(|| InputError::BadBase {
                        x,
                        base: raw.base.clone(),
                    })?;
                Ok(Share {
                    x,
                    base,
                    value: raw.value.clone(),
                })
            })
            .collect()
    }
}
