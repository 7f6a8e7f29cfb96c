// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response parsing.

use crate::error::ParseError;
use crate::response::CgiReply;
use crate::state::SystemInfo;
use crate::types::{EarMode, KarotzStatus, LedColor};

/// Reply of the `status` script.
///
/// Unlike action replies, the status reply has no `return` field. The five
/// fields describing the rabbit (`version`, `sleep`, `led_color`,
/// `led_pulse`, `ears_disabled`) are required; the informational ones are
/// collected into [`SystemInfo`].
///
/// # Examples
///
/// ```
/// use karotz_lib::response::StatusResponse;
/// use karotz_lib::types::{EarMode, KarotzStatus, LedColor};
///
/// let json = r#"{"version":"200","ears_disabled":"0","sleep":"0",
///                "led_color":"0000FF","led_pulse":"1"}"#;
/// let status = StatusResponse::parse(json).unwrap();
/// assert_eq!(status.status(), KarotzStatus::Awake);
/// assert_eq!(status.led_color, LedColor::BLUE);
/// assert!(status.led_pulse);
/// assert_eq!(status.ear_mode, EarMode::Enabled);
/// assert_eq!(status.version, "200");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    /// Firmware version.
    pub version: String,
    /// Whether the rabbit is asleep.
    pub sleeping: bool,
    /// Current LED color.
    pub led_color: LedColor,
    /// Whether the LED is pulsing.
    pub led_pulse: bool,
    /// Current ear mode.
    pub ear_mode: EarMode,
    /// Informational fields.
    pub system: SystemInfo,
}

impl StatusResponse {
    /// Parses a status reply body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is not a JSON object, a required
    /// field is missing, or `led_color` is not a hex color.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        Self::try_from(&CgiReply::parse(body)?)
    }

    /// Returns the lifecycle status described by the `sleep` flag.
    #[must_use]
    pub fn status(&self) -> KarotzStatus {
        if self.sleeping {
            KarotzStatus::Sleeping
        } else {
            KarotzStatus::Awake
        }
    }
}

impl TryFrom<&CgiReply> for StatusResponse {
    type Error = ParseError;

    fn try_from(reply: &CgiReply) -> Result<Self, Self::Error> {
        let color = reply.require("led_color")?;
        let led_color = LedColor::from_hex(color).map_err(|e| ParseError::InvalidValue {
            field: "led_color".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            version: reply.require("version")?.to_string(),
            sleeping: reply.require("sleep")? == "1",
            led_color,
            led_pulse: reply.require("led_pulse")? == "1",
            ear_mode: EarMode::from_disabled_flag(reply.require("ears_disabled")?),
            system: SystemInfo::from_reply(reply),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_STATUS: &str = r#"{"version":"200","ears_disabled":"0","sleep":"0","sleep_time":"0","led_color":"0000FF","led_pulse":"1","tts_cache_size":"4","usb_free_space":"-1","karotz_free_space":"148.4M","eth_mac":"00:00:00:00:00:00","wlan_mac":"01:23:45:67:89:AB","nb_tags":"4","nb_moods":"305","nb_sounds":"14","nb_stories":"0","karotz_percent_used_space":"37","usb_percent_used_space":""}"#;

    #[test]
    fn parse_full_status() {
        let status = StatusResponse::parse(FULL_STATUS).unwrap();
        assert_eq!(status.version, "200");
        assert_eq!(status.status(), KarotzStatus::Awake);
        assert_eq!(status.led_color, LedColor::BLUE);
        assert!(status.led_pulse);
        assert_eq!(status.ear_mode, EarMode::Enabled);
        assert_eq!(status.system.wlan_mac.as_deref(), Some("01:23:45:67:89:AB"));
        assert_eq!(status.system.nb_moods, Some(305));
        assert_eq!(status.system.usb_percent_used_space, None);
    }

    #[test]
    fn parse_sleeping_disabled() {
        let status = StatusResponse::parse(
            r#"{"version":"201","ears_disabled":"1","sleep":"1","led_color":"ff0000","led_pulse":"0"}"#,
        )
        .unwrap();
        assert_eq!(status.status(), KarotzStatus::Sleeping);
        assert_eq!(status.ear_mode, EarMode::Disabled);
        assert_eq!(status.led_color, LedColor::RED);
        assert!(!status.led_pulse);
        assert_eq!(status.system, SystemInfo::default());
    }

    #[test]
    fn parse_missing_field() {
        let result = StatusResponse::parse(
            r#"{"version":"200","sleep":"0","led_color":"0000FF","led_pulse":"1"}"#,
        );
        assert!(matches!(
            result,
            Err(ParseError::MissingField(field)) if field == "ears_disabled"
        ));
    }

    #[test]
    fn parse_bad_color() {
        let result = StatusResponse::parse(
            r#"{"version":"200","ears_disabled":"0","sleep":"0","led_color":"blue","led_pulse":"1"}"#,
        );
        assert!(matches!(
            result,
            Err(ParseError::InvalidValue { field, .. }) if field == "led_color"
        ));
    }

    #[test]
    fn parse_not_json() {
        assert!(StatusResponse::parse("<html>504</html>").is_err());
    }
}
