// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sound commands.

use crate::command::Command;
use crate::types::SoundControl;

/// Command to play a sound from a URL or control the current one.
///
/// # Examples
///
/// ```
/// use karotz_lib::command::{Command, SoundCommand};
/// use karotz_lib::types::SoundControl;
///
/// let play = SoundCommand::play("http://radio.example/stream");
/// assert_eq!(
///     play.to_path(),
///     "/cgi-bin/sound?url=http%3A%2F%2Fradio.example%2Fstream"
/// );
///
/// let stop = SoundCommand::Control(SoundControl::Stop);
/// assert_eq!(stop.to_path(), "/cgi-bin/sound_control?cmd=quit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundCommand {
    /// Play the sound at `url`.
    Play {
        /// Location of the sound, fetched by the device itself.
        url: String,
    },
    /// Stop or pause the current sound.
    Control(SoundControl),
}

impl SoundCommand {
    /// Creates a play command.
    #[must_use]
    pub fn play(url: impl Into<String>) -> Self {
        Self::Play { url: url.into() }
    }
}

impl Command for SoundCommand {
    fn endpoint(&self) -> &'static str {
        match self {
            Self::Play { .. } => "sound",
            Self::Control(_) => "sound_control",
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Play { url } => vec![("url", url.clone())],
            Self::Control(cmd) => vec![("cmd", cmd.as_str().to_string())],
        }
    }
}
