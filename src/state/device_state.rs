// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use crate::response::{CgiReply, StatusResponse};
use crate::types::{EarMode, EarPosition, KarotzStatus, LedColor};

/// Last known state of a Karotz.
///
/// A fresh state describes a rabbit that has not answered yet: status
/// [`Unknown`](KarotzStatus::Unknown), a green pulsing LED, ears enabled,
/// and no version.
///
/// # Examples
///
/// ```
/// use karotz_lib::response::StatusResponse;
/// use karotz_lib::state::DeviceState;
/// use karotz_lib::types::KarotzStatus;
///
/// let status = StatusResponse::parse(
///     r#"{"version":"200","ears_disabled":"0","sleep":"1","led_color":"000000","led_pulse":"0"}"#,
/// ).unwrap();
/// let state = DeviceState::from(&status);
/// assert_eq!(state.status(), KarotzStatus::Sleeping);
/// assert_eq!(state.version(), Some("200"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceState {
    status: KarotzStatus,
    led_color: LedColor,
    pulsing: bool,
    ear_mode: EarMode,
    version: Option<String>,
    /// Not reported by `status`; learned from ear actions.
    ear_positions: Option<[EarPosition; 2]>,
    system: SystemInfo,
}

impl DeviceState {
    /// Creates the state of a rabbit that has not answered yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Status ==========

    /// Gets the lifecycle status.
    #[must_use]
    pub fn status(&self) -> KarotzStatus {
        self.status
    }

    /// Sets the lifecycle status.
    pub fn set_status(&mut self, status: KarotzStatus) {
        self.status = status;
    }

    /// Returns `true` if the rabbit did not answer or its status is unknown.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.status.is_offline()
    }

    // ========== LED ==========

    /// Gets the LED color.
    #[must_use]
    pub fn led_color(&self) -> LedColor {
        self.led_color
    }

    /// Returns `true` if the LED pulses.
    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    /// Sets LED color and pulse.
    pub fn set_led(&mut self, color: LedColor, pulsing: bool) {
        self.led_color = color;
        self.pulsing = pulsing;
    }

    /// Returns `true` if the LED already shows `color` with the given pulse.
    #[must_use]
    pub fn led_matches(&self, color: LedColor, pulsing: bool) -> bool {
        self.led_color == color && self.pulsing == pulsing
    }

    // ========== Ears ==========

    /// Gets the ear mode.
    #[must_use]
    pub fn ear_mode(&self) -> EarMode {
        self.ear_mode
    }

    /// Sets the ear mode.
    pub fn set_ear_mode(&mut self, mode: EarMode) {
        self.ear_mode = mode;
    }

    /// Gets the last known `[left, right]` ear positions.
    #[must_use]
    pub fn ear_positions(&self) -> Option<[EarPosition; 2]> {
        self.ear_positions
    }

    /// Sets the ear positions.
    pub fn set_ear_positions(&mut self, positions: [EarPosition; 2]) {
        self.ear_positions = Some(positions);
    }

    /// Forgets the ear positions.
    pub fn clear_ear_positions(&mut self) {
        self.ear_positions = None;
    }

    // ========== Firmware ==========

    /// Gets the firmware version.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Gets the informational status fields.
    #[must_use]
    pub fn system(&self) -> &SystemInfo {
        &self.system
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            status: KarotzStatus::Unknown,
            led_color: LedColor::GREEN,
            pulsing: true,
            ear_mode: EarMode::Enabled,
            version: None,
            ear_positions: None,
            system: SystemInfo::default(),
        }
    }
}

impl From<&StatusResponse> for DeviceState {
    fn from(status: &StatusResponse) -> Self {
        Self {
            status: status.status(),
            led_color: status.led_color,
            pulsing: status.led_pulse,
            ear_mode: status.ear_mode,
            version: Some(status.version.clone()),
            ear_positions: None,
            system: status.system.clone(),
        }
    }
}

/// Informational fields of the status reply.
///
/// All fields are optional; empty strings are read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SystemInfo {
    /// Scheduled sleep time.
    pub sleep_time: Option<String>,
    /// Ethernet MAC address.
    pub eth_mac: Option<String>,
    /// Wi-Fi MAC address.
    pub wlan_mac: Option<String>,
    /// Free space on the internal storage, e.g. `"148.4M"`.
    pub karotz_free_space: Option<String>,
    /// Used space on the internal storage, in percent.
    pub karotz_percent_used_space: Option<String>,
    /// Free space on the USB key (`"-1"` when none is plugged).
    pub usb_free_space: Option<String>,
    /// Used space on the USB key, in percent.
    pub usb_percent_used_space: Option<String>,
    /// Number of cached text-to-speech files.
    pub tts_cache_size: Option<u32>,
    /// Number of known RFID tags.
    pub nb_tags: Option<u32>,
    /// Number of installed moods.
    pub nb_moods: Option<u32>,
    /// Number of installed sounds.
    pub nb_sounds: Option<u32>,
    /// Number of installed stories.
    pub nb_stories: Option<u32>,
}

impl SystemInfo {
    pub(crate) fn from_reply(reply: &CgiReply) -> Self {
        let text = |key: &str| {
            reply
                .get(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let count =
            |key: &str| -> Option<u32> { reply.get(key).and_then(|v| v.trim().parse().ok()) };

        Self {
            sleep_time: text("sleep_time"),
            eth_mac: text("eth_mac"),
            wlan_mac: text("wlan_mac"),
            karotz_free_space: text("karotz_free_space"),
            karotz_percent_used_space: text("karotz_percent_used_space"),
            usb_free_space: text("usb_free_space"),
            usb_percent_used_space: text("usb_percent_used_space"),
            tts_cache_size: count("tts_cache_size"),
            nb_tags: count("nb_tags"),
            nb_moods: count("nb_moods"),
            nb_sounds: count("nb_sounds"),
            nb_stories: count("nb_stories"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_unknown_with_defaults() {
        let state = DeviceState::new();
        assert_eq!(state.status(), KarotzStatus::Unknown);
        assert!(state.is_offline());
        assert_eq!(state.led_color(), LedColor::GREEN);
        assert!(state.is_pulsing());
        assert_eq!(state.ear_mode(), EarMode::Enabled);
        assert!(state.version().is_none());
        assert!(state.ear_positions().is_none());
    }

    #[test]
    fn from_status_sample() {
        let status = StatusResponse::parse(
            r#"{"version":"200","ears_disabled":"0","sleep":"0","led_color":"0000FF","led_pulse":"1"}"#,
        )
        .unwrap();
        let state = DeviceState::from(&status);
        assert_eq!(state.status(), KarotzStatus::Awake);
        assert_eq!(state.led_color().value(), 0x0000FF);
        assert!(state.is_pulsing());
        assert_eq!(state.ear_mode(), EarMode::Enabled);
        assert_eq!(state.version(), Some("200"));
    }

    #[test]
    fn led_matches_compares_both() {
        let mut state = DeviceState::new();
        state.set_led(LedColor::RED, false);
        assert!(state.led_matches(LedColor::RED, false));
        assert!(!state.led_matches(LedColor::RED, true));
        assert!(!state.led_matches(LedColor::BLUE, false));
    }

    #[test]
    fn ear_positions_roundtrip() {
        let mut state = DeviceState::new();
        let positions = [EarPosition::from_int_value(4), EarPosition::from_int_value(9)];
        state.set_ear_positions(positions);
        assert_eq!(state.ear_positions(), Some(positions));
        state.clear_ear_positions();
        assert!(state.ear_positions().is_none());
    }

    #[test]
    fn system_info_skips_empty_and_bad_counts() {
        let reply =
            CgiReply::parse(r#"{"usb_percent_used_space":"","nb_tags":"x","nb_sounds":"14"}"#)
                .unwrap();
        let info = SystemInfo::from_reply(&reply);
        assert!(info.usb_percent_used_space.is_none());
        assert!(info.nb_tags.is_none());
        assert_eq!(info.nb_sounds, Some(14));
    }
}
