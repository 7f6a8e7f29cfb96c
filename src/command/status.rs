// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status query command.

use crate::command::Command;

/// Command to query the full device status.
///
/// The reply carries the firmware version, sleep flag, LED color and pulse,
/// and ear mode. See [`StatusResponse`](crate::response::StatusResponse).
///
/// # Examples
///
/// ```
/// use karotz_lib::command::{Command, StatusCommand};
///
/// assert_eq!(StatusCommand.to_path(), "/cgi-bin/status");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCommand;

impl Command for StatusCommand {
    fn endpoint(&self) -> &'static str {
        "status"
    }
}
