// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sleep and wake-up commands.

use crate::command::Command;

/// Command to put the rabbit to sleep or wake it up.
///
/// # Examples
///
/// ```
/// use karotz_lib::command::{Command, PowerCommand};
///
/// assert_eq!(PowerCommand::Sleep.to_path(), "/cgi-bin/sleep");
/// assert_eq!(PowerCommand::wakeup(false).to_path(), "/cgi-bin/wakeup");
/// assert_eq!(PowerCommand::wakeup(true).to_path(), "/cgi-bin/wakeup?silent=1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommand {
    /// Go to sleep.
    Sleep,
    /// Wake up.
    Wakeup {
        /// Skip the wake-up sound.
        silent: bool,
    },
}

impl PowerCommand {
    /// Creates a wake-up command.
    #[must_use]
    pub const fn wakeup(silent: bool) -> Self {
        Self::Wakeup { silent }
    }
}

impl Command for PowerCommand {
    fn endpoint(&self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Wakeup { .. } => "wakeup",
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Wakeup { silent: true } => vec![("silent", "1".to_string())],
            _ => Vec::new(),
        }
    }
}
