// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ear-related types.
//!
//! A Karotz ear can rest in one of 16 positions, each covering a 22.5° sector
//! of a full turn. Positions can be addressed by index or by angle.

use std::fmt;

use crate::error::ValueError;

/// Whether the ears respond to position commands.
///
/// # Examples
///
/// ```
/// use karotz_lib::types::EarMode;
///
/// assert!(EarMode::Enabled.is_enabled());
/// assert_eq!(EarMode::from_disabled_flag("1"), EarMode::Disabled);
/// assert_eq!(EarMode::Disabled.disable_flag(), "1");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EarMode {
    /// Ears move.
    #[default]
    Enabled,
    /// Ears are locked.
    Disabled,
}

impl EarMode {
    /// Returns `true` if ear movement is enabled.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// Returns `true` if ear movement is disabled.
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Decodes the device's `disabled` / `ears_disabled` flag.
    ///
    /// Only `"1"` means disabled; anything else is read as enabled.
    #[must_use]
    pub fn from_disabled_flag(flag: &str) -> Self {
        if flag == "1" {
            Self::Disabled
        } else {
            Self::Enabled
        }
    }

    /// Returns the value of the `disable` query parameter for this mode.
    #[must_use]
    pub const fn disable_flag(self) -> &'static str {
        match self {
            Self::Enabled => "0",
            Self::Disabled => "1",
        }
    }
}

impl fmt::Display for EarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => f.write_str("enabled"),
            Self::Disabled => f.write_str("disabled"),
        }
    }
}

/// One of the 16 discrete ear positions, numbered 1 to 16.
///
/// Use [`from_int_value`](Self::from_int_value) or
/// [`from_angle`](Self::from_angle) for lenient conversions that fall back to
/// position 1, or [`new`](Self::new) for a checked constructor.
///
/// The angle conversions round to the nearest sector, so they are not exact
/// inverses of each other at sector boundaries.
///
/// # Examples
///
/// ```
/// use karotz_lib::types::EarPosition;
///
/// let pos = EarPosition::from_angle(90);
/// assert_eq!(pos.value(), 5);
/// assert_eq!(pos.to_angle(), 113);
///
/// // Out of range values fall back to position 1
/// assert_eq!(EarPosition::from_int_value(42), EarPosition::FIRST);
/// assert!(EarPosition::new(42).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EarPosition(u8);

impl EarPosition {
    /// Number of discrete positions.
    pub const COUNT: u8 = 16;

    /// Position 1, also the fallback for out of range values.
    pub const FIRST: Self = Self(1);

    /// Creates an ear position from its index.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `position` is not in `1..=16`.
    pub fn new(position: u8) -> Result<Self, ValueError> {
        if (1..=Self::COUNT).contains(&position) {
            Ok(Self(position))
        } else {
            Err(ValueError::OutOfRange {
                min: 1,
                max: i32::from(Self::COUNT),
                actual: i32::from(position),
            })
        }
    }

    /// Returns the position matching `position`, or position 1 when it is
    /// outside `1..=16`.
    #[must_use]
    pub fn from_int_value(position: i32) -> Self {
        u8::try_from(position)
            .ok()
            .and_then(|p| Self::new(p).ok())
            .unwrap_or(Self::FIRST)
    }

    /// Returns the position closest to `angle`, in degrees.
    ///
    /// The angle is first brought into `[0, 360)`, so negative angles and
    /// angles past a full turn are accepted.
    #[must_use]
    pub fn from_angle(angle: i32) -> Self {
        let normalized = angle.rem_euclid(360);
        // round(normalized / 360 * 16), half up
        let sector = (normalized * i32::from(Self::COUNT) + 180) / 360;
        Self::from_int_value(sector + 1)
    }

    /// Returns the angle of this position, in degrees, rounded half up.
    #[must_use]
    pub fn to_angle(self) -> i32 {
        let count = i32::from(Self::COUNT);
        (i32::from(self.0) * 360 + count / 2) / count
    }

    /// Returns the position index (1-16).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for EarPosition {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for EarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for EarPosition {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EarPosition> for u8 {
    fn from(position: EarPosition) -> Self {
        position.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: u8) -> EarPosition {
        EarPosition::new(n).unwrap()
    }

    #[test]
    fn from_int_value_maps_valid_range() {
        for n in 1..=16 {
            assert_eq!(EarPosition::from_int_value(n).value(), u8::try_from(n).unwrap());
        }
    }

    #[test]
    fn from_int_value_defaults_to_first() {
        for n in [i32::MIN, -1, 0, 17, 255, 256, i32::MAX] {
            assert_eq!(EarPosition::from_int_value(n), EarPosition::FIRST, "{n}");
        }
    }

    #[test]
    fn from_angle_boundaries() {
        assert_eq!(EarPosition::from_angle(0), pos(1));
        assert_eq!(EarPosition::from_angle(10), pos(1));
        assert_eq!(EarPosition::from_angle(20), pos(2));
        assert_eq!(EarPosition::from_angle(30), pos(2));
        assert_eq!(EarPosition::from_angle(40), pos(3));
        assert_eq!(EarPosition::from_angle(50), pos(3));
        assert_eq!(EarPosition::from_angle(60), pos(4));
        assert_eq!(EarPosition::from_angle(70), pos(4));
        assert_eq!(EarPosition::from_angle(80), pos(5));
        assert_eq!(EarPosition::from_angle(90), pos(5));
        assert_eq!(EarPosition::from_angle(100), pos(5));
        assert_eq!(EarPosition::from_angle(110), pos(6));
        assert_eq!(EarPosition::from_angle(120), pos(6));
        assert_eq!(EarPosition::from_angle(130), pos(7));
        assert_eq!(EarPosition::from_angle(140), pos(7));
        assert_eq!(EarPosition::from_angle(150), pos(8));
        assert_eq!(EarPosition::from_angle(160), pos(8));
        assert_eq!(EarPosition::from_angle(170), pos(9));
        assert_eq!(EarPosition::from_angle(180), pos(9));
        assert_eq!(EarPosition::from_angle(190), pos(9));
        assert_eq!(EarPosition::from_angle(200), pos(10));
        assert_eq!(EarPosition::from_angle(210), pos(10));
        assert_eq!(EarPosition::from_angle(220), pos(11));
        assert_eq!(EarPosition::from_angle(230), pos(11));
        assert_eq!(EarPosition::from_angle(240), pos(12));
        assert_eq!(EarPosition::from_angle(250), pos(12));
        assert_eq!(EarPosition::from_angle(260), pos(13));
        assert_eq!(EarPosition::from_angle(270), pos(13));
        assert_eq!(EarPosition::from_angle(280), pos(13));
        assert_eq!(EarPosition::from_angle(290), pos(14));
        assert_eq!(EarPosition::from_angle(300), pos(14));
        assert_eq!(EarPosition::from_angle(310), pos(15));
        assert_eq!(EarPosition::from_angle(320), pos(15));
        assert_eq!(EarPosition::from_angle(330), pos(16));
        assert_eq!(EarPosition::from_angle(340), pos(16));
        assert_eq!(EarPosition::from_angle(350), pos(1));
        assert_eq!(EarPosition::from_angle(360), pos(1));
        assert_eq!(EarPosition::from_angle(359), pos(1));
    }

    #[test]
    fn from_angle_past_full_turn() {
        assert_eq!(EarPosition::from_angle(390), pos(2));
        assert_eq!(EarPosition::from_angle(425), pos(4));
        assert_eq!(EarPosition::from_angle(500), pos(7));
    }

    #[test]
    fn from_angle_is_periodic() {
        for angle in -720..=720 {
            assert_eq!(
                EarPosition::from_angle(angle),
                EarPosition::from_angle(angle + 360),
                "{angle}"
            );
        }
    }

    #[test]
    fn to_angle_rounds_half_up() {
        assert_eq!(pos(1).to_angle(), 23);
        assert_eq!(pos(2).to_angle(), 45);
        assert_eq!(pos(4).to_angle(), 90);
        assert_eq!(pos(8).to_angle(), 180);
        assert_eq!(pos(15).to_angle(), 338);
        assert_eq!(pos(16).to_angle(), 360);
    }

    #[test]
    fn angle_conversions_are_not_inverse() {
        // 23° rounds to the second sector
        assert_eq!(EarPosition::from_angle(pos(1).to_angle()), pos(2));
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(matches!(
            EarPosition::new(0),
            Err(ValueError::OutOfRange { actual: 0, .. })
        ));
        assert!(EarPosition::new(17).is_err());
        assert!(EarPosition::new(16).is_ok());
    }

    #[test]
    fn serde_uses_index() {
        assert_eq!(serde_json::to_string(&pos(7)).unwrap(), "7");
        let parsed: EarPosition = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, pos(12));
        assert!(serde_json::from_str::<EarPosition>("0").is_err());
    }

    #[test]
    fn ear_mode_flags() {
        assert_eq!(EarMode::from_disabled_flag("1"), EarMode::Disabled);
        assert_eq!(EarMode::from_disabled_flag("0"), EarMode::Enabled);
        assert_eq!(EarMode::from_disabled_flag(""), EarMode::Enabled);
        assert_eq!(EarMode::Enabled.disable_flag(), "0");
        assert_eq!(EarMode::Disabled.disable_flag(), "1");
    }
}
