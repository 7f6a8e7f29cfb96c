// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ear response parsing.

use crate::error::ParseError;
use crate::response::CgiReply;
use crate::types::{EarMode, EarPosition};

/// Mode echoed by an accepted `ears_mode` action.
///
/// ```text
/// {"return":"0","disabled":"1"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarsModeResponse {
    /// Resulting ear mode.
    pub mode: EarMode,
}

impl TryFrom<&CgiReply> for EarsModeResponse {
    type Error = ParseError;

    fn try_from(reply: &CgiReply) -> Result<Self, Self::Error> {
        Ok(Self {
            mode: EarMode::from_disabled_flag(reply.require("disabled")?),
        })
    }
}

/// Positions echoed by an accepted `ears` or `ears_random` action.
///
/// ```text
/// {"left":"7","right":"12","return":"0"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarsResponse {
    /// Left ear position.
    pub left: EarPosition,
    /// Right ear position.
    pub right: EarPosition,
}

impl EarsResponse {
    /// Returns the positions as `[left, right]`.
    #[must_use]
    pub const fn positions(&self) -> [EarPosition; 2] {
        [self.left, self.right]
    }
}

impl TryFrom<&CgiReply> for EarsResponse {
    type Error = ParseError;

    fn try_from(reply: &CgiReply) -> Result<Self, Self::Error> {
        Ok(Self {
            left: position(reply, "left")?,
            right: position(reply, "right")?,
        })
    }
}

fn position(reply: &CgiReply, field: &str) -> Result<EarPosition, ParseError> {
    let raw = reply.require(field)?;
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(|n| EarPosition::new(n).ok())
        .ok_or_else(|| ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("{raw} is not an ear position"),
        })
}
