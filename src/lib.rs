// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `karotz_lib` - A Rust library to control OpenKarotz rabbits.
//!
//! This library provides an async client for the small CGI API served by
//! rabbits running the OpenKarotz firmware.
//!
//! # Supported Features
//!
//! - **Lifecycle**: Status, sleep, wake up (optionally silent)
//! - **LED**: Color and pulse
//! - **Sound**: Play a URL, stop, pause
//! - **Ears**: Enable/disable, move to positions, random, reset
//! - **Status queries**: Firmware version, MAC addresses, storage usage
//!
//! The client caches what it learns from the rabbit. Reads are answered from
//! the cache while the rabbit is known to be online, and writes that would
//! not change anything are not sent.
//!
//! # Quick Start
//!
//! ```no_run
//! use karotz_lib::Karotz;
//! use karotz_lib::types::{EarPosition, LedColor, SoundControl};
//!
//! #[tokio::main]
//! async fn main() -> karotz_lib::Result<()> {
//!     let karotz = Karotz::http("192.168.1.20").build()?;
//!
//!     println!("Karotz is {}", karotz.status().await?);
//!
//!     karotz.wakeup(true).await?;
//!     karotz.set_led(LedColor::from_hex("#FF8800")?, true).await?;
//!     karotz
//!         .set_ears(EarPosition::from_angle(90), EarPosition::from_angle(270))
//!         .await?;
//!
//!     karotz.play_sound("http://radio.example/stream.mp3").await?;
//!     karotz.sound_control(SoundControl::Stop).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Outcomes
//!
//! Only transport failures (unreachable host, timeout, HTTP error status)
//! surface as [`Error`]. When the rabbit refuses an action, or answers with
//! something that is not JSON, the operation returns its documented failure
//! value instead, such as `Ok(false)`.

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use command::Command;
#[cfg(feature = "http")]
pub use device::HttpKarotzBuilder;
pub use device::Karotz;
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::HttpConfig;
pub use state::DeviceState;
pub use types::{EarMode, EarPosition, KarotzStatus, LedColor, SoundControl};
