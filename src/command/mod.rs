// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Karotz command definitions.
//!
//! Every OpenKarotz action is a `GET` on a fixed CGI script under
//! `/cgi-bin`, with its arguments in the query string.
//!
//! # Available Commands
//!
//! | Command Type | Endpoint | Example |
//! |-------------|---------|---------|
//! | [`StatusCommand`] | `status` | Query status |
//! | [`LedCommand`] | `leds` | Pulse blue |
//! | [`PowerCommand`] | `sleep`, `wakeup` | Wake up silently |
//! | [`SoundCommand`] | `sound`, `sound_control` | Play a URL, stop |
//! | [`EarsCommand`] | `ears`, `ears_mode`, `ears_random`, `ears_reset` | Move ears |
//!
//! # Examples
//!
//! ```
//! use karotz_lib::command::{Command, LedCommand};
//! use karotz_lib::types::LedColor;
//!
//! let cmd = LedCommand::new(LedColor::BLUE, true);
//! assert_eq!(cmd.endpoint(), "leds");
//! assert_eq!(cmd.to_path(), "/cgi-bin/leds?color=0000ff&pulse=1");
//! ```

mod ears;
mod led;
mod power;
mod sound;
mod status;

pub use ears::EarsCommand;
pub use led::LedCommand;
pub use power::PowerCommand;
pub use sound::SoundCommand;
pub use status::StatusCommand;

/// Path prefix of every OpenKarotz script.
pub const CGI_BIN: &str = "/cgi-bin";

/// A command that can be sent to a Karotz.
pub trait Command {
    /// Returns the CGI script name, without the `/cgi-bin/` prefix.
    fn endpoint(&self) -> &'static str;

    /// Returns the query parameters, in order, with unencoded values.
    fn params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Returns the request path with its percent-encoded query string.
    fn to_path(&self) -> String {
        let mut path = format!("{CGI_BIN}/{}", self.endpoint());
        let query = self
            .params()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe(Vec<(&'static str, String)>);

    impl Command for Probe {
        fn endpoint(&self) -> &'static str {
            "probe"
        }

        fn params(&self) -> Vec<(&'static str, String)> {
            self.0.clone()
        }
    }

    #[test]
    fn path_without_params() {
        assert_eq!(Probe(Vec::new()).to_path(), "/cgi-bin/probe");
    }

    #[test]
    fn path_keeps_param_order() {
        let cmd = Probe(vec![("b", "2".to_string()), ("a", "1".to_string())]);
        assert_eq!(cmd.to_path(), "/cgi-bin/probe?b=2&a=1");
    }

    #[test]
    fn path_encodes_values() {
        let cmd = Probe(vec![("url", "http://x/a b.mp3?q=1&r=2".to_string())]);
        assert_eq!(
            cmd.to_path(),
            "/cgi-bin/probe?url=http%3A%2F%2Fx%2Fa%20b.mp3%3Fq%3D1%26r%3D2"
        );
    }
}
