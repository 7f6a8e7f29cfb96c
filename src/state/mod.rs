// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached Karotz state.
//!
//! The [`DeviceState`] struct holds what the client last learned about the
//! rabbit, so that reads can be served without a round trip and redundant
//! actions can be skipped.
//!
//! # Examples
//!
//! ```
//! use karotz_lib::state::DeviceState;
//! use karotz_lib::types::{KarotzStatus, LedColor};
//!
//! let mut state = DeviceState::new();
//! assert_eq!(state.status(), KarotzStatus::Unknown);
//!
//! state.set_led(LedColor::BLUE, false);
//! assert!(state.led_matches(LedColor::new(0xFF00_00FF), false));
//! ```

mod device_state;

pub use device_state::{DeviceState, SystemInfo};
