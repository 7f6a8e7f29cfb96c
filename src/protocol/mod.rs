// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for talking to a Karotz.
//!
//! [`Karotz`](crate::Karotz) is generic over the [`Protocol`] trait so that
//! the HTTP transport can be swapped for a scripted one in tests.
//!
//! # Protocols
//!
//! - [`HttpClient`]: async HTTP `GET`s against the OpenKarotz CGI
//!   scripts, configured through [`HttpConfig`]

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use crate::command::Command;
use crate::error::ProtocolError;

/// Raw reply to a Karotz command.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    /// The raw response body.
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Trait for transports that can send commands to a Karotz.
///
/// Implementations only move bytes: a reply the device rejects, or one that
/// is not even JSON, is still an `Ok` response. Errors are reserved for
/// failures to reach the device or read its answer.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a command to the device and returns the response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command fails to send or receive.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        self.send_raw(&command.to_path()).await
    }

    /// Sends a `GET` for a raw path and query, e.g. `/cgi-bin/status`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails.
    async fn send_raw(&self, path: &str) -> Result<CommandResponse, ProtocolError>;
}
