// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED color type with hex parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// 24-bit RGB color of the Karotz belly LED.
///
/// Any bits above the low 24 are dropped on construction, so an ARGB value
/// can be passed as-is.
///
/// # Examples
///
/// ```
/// use karotz_lib::types::LedColor;
///
/// let blue = LedColor::new(0xFF00_00FF);
/// assert_eq!(blue.value(), 0x0000FF);
/// assert_eq!(blue.to_hex(), "0000ff");
///
/// let parsed = LedColor::from_hex("#00FF00").unwrap();
/// assert_eq!(parsed, LedColor::GREEN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct LedColor(u32);

impl LedColor {
    /// Mask applied to every color value.
    pub const MASK: u32 = 0x00FF_FFFF;

    /// LED off.
    pub const BLACK: Self = Self(0x00_0000);
    /// Pure red.
    pub const RED: Self = Self(0xFF_0000);
    /// Pure green, the color assumed before the device reports one.
    pub const GREEN: Self = Self(0x00_FF00);
    /// Pure blue.
    pub const BLUE: Self = Self(0x00_00FF);
    /// White.
    pub const WHITE: Self = Self(0xFF_FFFF);

    /// Creates a color from an RGB value, keeping the low 24 bits.
    #[must_use]
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & Self::MASK)
    }

    /// Creates a color from its channels.
    #[must_use]
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(u32::from_be_bytes([0, red, green, blue]))
    }

    /// Parses a color from a hex string.
    ///
    /// Accepts `RRGGBB` or `AARRGGBB`, with or without a leading `#`, in any
    /// letter case. The alpha byte is dropped.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is not 6 or 8 hex
    /// digits.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::new)
            .map_err(|_| ValueError::InvalidHexColor(hex.to_string()))
    }

    /// Returns the 24-bit RGB value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Returns the six lowercase hex digits sent to the device.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:06x}", self.0)
    }
}

impl Default for LedColor {
    fn default() -> Self {
        Self::GREEN
    }
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for LedColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u32> for LedColor {
    fn from(rgb: u32) -> Self {
        Self::new(rgb)
    }
}

impl From<LedColor> for u32 {
    fn from(color: LedColor) -> Self {
        color.0
    }
}

impl From<(u8, u8, u8)> for LedColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_rgb(red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_masks_to_24_bits() {
        assert_eq!(LedColor::new(0xFFFF_FFFF).value(), 0x00FF_FFFF);
        assert_eq!(LedColor::new(0x1200_00FF), LedColor::BLUE);
    }

    #[test]
    fn channels() {
        let color = LedColor::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(color.value(), 0x12_3456);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
    }

    #[test]
    fn to_hex_is_zero_padded() {
        assert_eq!(LedColor::BLUE.to_hex(), "0000ff");
        assert_eq!(LedColor::BLACK.to_hex(), "000000");
        assert_eq!(LedColor::new(0xAB_CDEF).to_hex(), "abcdef");
    }

    #[test]
    fn from_hex_accepts_common_forms() {
        assert_eq!(LedColor::from_hex("0000FF").unwrap(), LedColor::BLUE);
        assert_eq!(LedColor::from_hex("#0000ff").unwrap(), LedColor::BLUE);
        assert_eq!(LedColor::from_hex("FF00FF00").unwrap(), LedColor::GREEN);
    }

    #[test]
    fn from_hex_rejects_garbage() {
        for bad in ["", "#", "FFF", "12345", "GGGGGG", "+12345", "0000FF0"] {
            assert!(
                matches!(LedColor::from_hex(bad), Err(ValueError::InvalidHexColor(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn display_uses_hash_prefix() {
        assert_eq!(LedColor::RED.to_string(), "#FF0000");
    }

    #[test]
    fn default_is_green() {
        assert_eq!(LedColor::default(), LedColor::GREEN);
    }
}
