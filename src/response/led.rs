// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED response parsing.

use crate::error::ParseError;
use crate::response::CgiReply;
use crate::types::LedColor;

/// Color and pulse echoed by an accepted `leds` action.
///
/// ```text
/// {"color":"0000FF","secondary_color":"000000","pulse":"0","no_memory":"0","speed":"700","return":"0"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedResponse {
    /// Color the LED now shows.
    pub color: LedColor,
    /// Whether the LED now pulses.
    pub pulse: bool,
}

impl TryFrom<&CgiReply> for LedResponse {
    type Error = ParseError;

    fn try_from(reply: &CgiReply) -> Result<Self, Self::Error> {
        let color =
            LedColor::from_hex(reply.require("color")?).map_err(|e| ParseError::InvalidValue {
                field: "color".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            color,
            pulse: reply.require("pulse")? == "1",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_echo() {
        let reply = CgiReply::parse(
            r#"{"color":"0000FF","secondary_color":"000000","pulse":"0","no_memory":"0","speed":"700","return":"0"}"#,
        )
        .unwrap();
        let led = LedResponse::try_from(&reply).unwrap();
        assert_eq!(led.color, LedColor::BLUE);
        assert!(!led.pulse);
    }

    #[test]
    fn missing_pulse() {
        let reply = CgiReply::parse(r#"{"color":"0000FF","return":"0"}"#).unwrap();
        assert!(matches!(
            LedResponse::try_from(&reply),
            Err(ParseError::MissingField(_))
        ));
    }
}
