// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ear commands.

use crate::command::Command;
use crate::types::{EarMode, EarPosition};

/// Command to move, lock, or reset the ears.
///
/// # Examples
///
/// ```
/// use karotz_lib::command::{Command, EarsCommand};
/// use karotz_lib::types::{EarMode, EarPosition};
///
/// let mv = EarsCommand::Move {
///     left: EarPosition::from_int_value(3),
///     right: EarPosition::from_int_value(12),
/// };
/// assert_eq!(mv.to_path(), "/cgi-bin/ears?left=3&right=12&noreset=1");
///
/// let lock = EarsCommand::Mode(EarMode::Disabled);
/// assert_eq!(lock.to_path(), "/cgi-bin/ears_mode?disable=1");
///
/// assert_eq!(EarsCommand::Random.to_path(), "/cgi-bin/ears_random");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarsCommand {
    /// Move both ears to the given positions without resetting them first.
    Move {
        /// Left ear position.
        left: EarPosition,
        /// Right ear position.
        right: EarPosition,
    },
    /// Enable or disable ear movement.
    Mode(EarMode),
    /// Move both ears to random positions.
    Random,
    /// Move both ears back to their reference position.
    Reset,
}

impl Command for EarsCommand {
    fn endpoint(&self) -> &'static str {
        match self {
            Self::Move { .. } => "ears",
            Self::Mode(_) => "ears_mode",
            Self::Random => "ears_random",
            Self::Reset => "ears_reset",
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Move { left, right } => vec![
                ("left", left.to_string()),
                ("right", right.to_string()),
                ("noreset", "1".to_string()),
            ],
            Self::Mode(mode) => vec![("disable", mode.disable_flag().to_string())],
            Self::Random | Self::Reset => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_enable_flag() {
        let cmd = EarsCommand::Mode(EarMode::Enabled);
        assert_eq!(cmd.to_path(), "/cgi-bin/ears_mode?disable=0");
    }

    #[test]
    fn reset_has_no_params() {
        assert_eq!(EarsCommand::Reset.to_path(), "/cgi-bin/ears_reset");
    }
}
