// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED command.

use crate::command::Command;
use crate::types::LedColor;

/// Command to set the LED color, optionally pulsing.
///
/// # Examples
///
/// ```
/// use karotz_lib::command::{Command, LedCommand};
/// use karotz_lib::types::LedColor;
///
/// let solid = LedCommand::new(LedColor::RED, false);
/// assert_eq!(solid.to_path(), "/cgi-bin/leds?color=ff0000");
///
/// let pulsing = LedCommand::new(LedColor::RED, true);
/// assert_eq!(pulsing.to_path(), "/cgi-bin/leds?color=ff0000&pulse=1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedCommand {
    color: LedColor,
    pulse: bool,
}

impl LedCommand {
    /// Creates a new LED command.
    #[must_use]
    pub const fn new(color: LedColor, pulse: bool) -> Self {
        Self { color, pulse }
    }

    /// Returns the requested color.
    #[must_use]
    pub const fn color(&self) -> LedColor {
        self.color
    }

    /// Returns whether pulsing is requested.
    #[must_use]
    pub const fn pulse(&self) -> bool {
        self.pulse
    }
}

impl Command for LedCommand {
    fn endpoint(&self) -> &'static str {
        "leds"
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("color", self.color.to_hex())];
        if self.pulse {
            params.push(("pulse", "1".to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_six_hex_digits() {
        let cmd = LedCommand::new(LedColor::new(0xFF), false);
        assert_eq!(cmd.params(), vec![("color", "0000ff".to_string())]);
    }

    #[test]
    fn pulse_flag_only_when_pulsing() {
        let cmd = LedCommand::new(LedColor::GREEN, true);
        assert_eq!(cmd.to_path(), "/cgi-bin/leds?color=00ff00&pulse=1");
        assert!(cmd.pulse());
        assert_eq!(cmd.color(), LedColor::GREEN);
    }
}
