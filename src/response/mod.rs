// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reply parsing for OpenKarotz JSON answers.
//!
//! Every CGI script answers with a flat JSON object whose values are
//! (almost always) strings. Action scripts add a `return` field: `"0"` means
//! the action was performed, anything else means it was refused, usually
//! with a human-readable `msg`:
//!
//! ```text
//! {"return":"0"}
//! {"return":"1","msg":"Unable to perform action, rabbit is sleeping."}
//! ```
//!
//! [`CgiReply`] reads such an object, and [`Reply::classify`] applies the
//! `return` convention shared by every action.

mod ears;
mod led;
mod status;

use std::collections::HashMap;

pub use ears::{EarsModeResponse, EarsResponse};
pub use led::LedResponse;
pub use status::StatusResponse;

use serde_json::Value;

use crate::error::ParseError;

/// Name of the field carrying the outcome of an action.
pub const RETURN_FIELD: &str = "return";

/// Name of the field carrying the reason of a refusal.
pub const MESSAGE_FIELD: &str = "msg";

/// Return code of an accepted action.
pub const RETURN_OK: &str = "0";

/// A flat JSON object reply, with every scalar value kept as a string.
///
/// Numbers and booleans are stored in their JSON text form so that
/// `{"return":0}` and `{"return":"0"}` read the same. Nested values and
/// `null` are ignored.
///
/// # Examples
///
/// ```
/// use karotz_lib::response::CgiReply;
///
/// let reply = CgiReply::parse(r#"{"return":"0","silent":1}"#).unwrap();
/// assert_eq!(reply.get("return"), Some("0"));
/// assert_eq!(reply.get("silent"), Some("1"));
/// assert!(reply.get("msg").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CgiReply {
    fields: HashMap<String, String>,
}

impl CgiReply {
    /// Parses a reply body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not JSON, or
    /// `ParseError::NotAnObject` if it is not a JSON object.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let Value::Object(map) = serde_json::from_str::<Value>(body.trim())? else {
            return Err(ParseError::NotAnObject);
        };

        let fields = map
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => return None,
                };
                Some((key, text))
            })
            .collect();

        Ok(Self { fields })
    }

    /// Returns a field value, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns a field value.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the field is absent.
    pub fn require(&self, key: &str) -> Result<&str, ParseError> {
        self.get(key)
            .ok_or_else(|| ParseError::MissingField(key.to_string()))
    }

    /// Returns `true` if the field is present and equal to `"1"`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("1")
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the reply has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Outcome of an action, classified from its `return` field.
#[derive(Debug)]
pub enum Reply {
    /// `return` was `"0"`; the reply is kept for the fields it echoes.
    Accepted(CgiReply),
    /// `return` was anything else.
    Rejected {
        /// The `return` value.
        code: String,
        /// The `msg` value, if any.
        message: Option<String>,
    },
    /// The body was not a JSON object or had no `return` field.
    Malformed(ParseError),
}

impl Reply {
    /// Classifies an action reply body.
    ///
    /// # Examples
    ///
    /// ```
    /// use karotz_lib::response::Reply;
    ///
    /// assert!(Reply::classify(r#"{"return":"0"}"#).is_accepted());
    ///
    /// let refused = Reply::classify(r#"{"return":"1","msg":"rabbit is sleeping"}"#);
    /// assert_eq!(refused.message(), Some("rabbit is sleeping"));
    ///
    /// assert!(matches!(Reply::classify("<html>"), Reply::Malformed(_)));
    /// ```
    #[must_use]
    pub fn classify(body: &str) -> Self {
        let reply = match CgiReply::parse(body) {
            Ok(reply) => reply,
            Err(e) => return Self::Malformed(e),
        };

        let code = match reply.require(RETURN_FIELD) {
            Ok(code) => code.to_string(),
            Err(e) => return Self::Malformed(e),
        };

        if code == RETURN_OK {
            Self::Accepted(reply)
        } else {
            Self::Rejected {
                code,
                message: reply.get(MESSAGE_FIELD).map(str::to_string),
            }
        }
    }

    /// Returns `true` for [`Accepted`](Self::Accepted).
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Returns the refusal message of a [`Rejected`](Self::Rejected) reply.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
