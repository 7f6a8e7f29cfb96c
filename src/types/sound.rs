// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sound player control.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Signal sent to whatever sound the Karotz is currently playing.
///
/// # Examples
///
/// ```
/// use karotz_lib::types::SoundControl;
///
/// assert_eq!(SoundControl::Stop.as_str(), "quit");
/// assert_eq!("pause".parse::<SoundControl>().unwrap(), SoundControl::Pause);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundControl {
    /// Stop playback.
    Stop,
    /// Pause playback.
    Pause,
}

impl SoundControl {
    /// Returns the `cmd` token understood by the device.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "quit",
            Self::Pause => "pause",
        }
    }
}

impl fmt::Display for SoundControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoundControl {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quit" | "stop" => Ok(Self::Stop),
            "pause" => Ok(Self::Pause),
            _ => Err(ValueError::InvalidSoundControl(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tokens() {
        assert_eq!(SoundControl::Stop.to_string(), "quit");
        assert_eq!(SoundControl::Pause.to_string(), "pause");
    }

    #[test]
    fn from_str_accepts_token_and_name() {
        assert_eq!("quit".parse::<SoundControl>().unwrap(), SoundControl::Stop);
        assert_eq!("STOP".parse::<SoundControl>().unwrap(), SoundControl::Stop);
        assert_eq!("Pause".parse::<SoundControl>().unwrap(), SoundControl::Pause);
    }

    #[test]
    fn from_str_invalid() {
        assert!(matches!(
            "play".parse::<SoundControl>(),
            Err(ValueError::InvalidSoundControl(_))
        ));
    }
}
