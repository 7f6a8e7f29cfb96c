// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Karotz library.
//!
//! Only transport failures ever reach the caller of a [`Karotz`](crate::Karotz)
//! operation. Replies the device rejects are ordinary outcomes (`Ok(false)` or
//! the previous value), and replies that cannot be parsed are handled inside
//! the client. [`ParseError`] is therefore only returned by the lower-level
//! [`response`](crate::response) parsers.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the device.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl Error {
    /// Returns `true` if the device could not be reached in time.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::Timeout(_)))
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i32,
        /// Maximum allowed value.
        max: i32,
        /// The actual value that was provided.
        actual: i32,
    },

    /// A string is not a valid hex RGB color.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),

    /// A string is not a known sound control command.
    #[error("invalid sound control command: {0}")]
    InvalidSoundControl(String),
}

/// Errors related to HTTP communication with the device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing the device's JSON replies.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body is valid JSON but not an object.
    #[error("reply is not a JSON object")]
    NotAnObject,

    /// Expected field is missing from the reply.
    #[error("missing field in reply: {0}")]
    MissingField(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
