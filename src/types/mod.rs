// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Karotz control.
//!
//! # Types
//!
//! - [`KarotzStatus`] - Unknown/Offline/Sleeping/Awake lifecycle status
//! - [`EarMode`] - Whether the ears respond to position commands
//! - [`EarPosition`] - One of 16 discrete ear positions (22.5° sectors)
//! - [`LedColor`] - 24-bit RGB color of the belly LED
//! - [`SoundControl`] - Stop/Pause signal for the sound player

mod ear;
mod led_color;
mod sound;
mod status;

pub use ear::{EarMode, EarPosition};
pub use led_color::LedColor;
pub use sound::SoundControl;
pub use status::KarotzStatus;
