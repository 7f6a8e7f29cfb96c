// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for an OpenKarotz rabbit.
//!
//! [`Karotz`] wraps a [`Protocol`] and keeps the last state it learned from
//! the device. Read operations are served from that cache and only go to the
//! network while the rabbit is unknown or offline. Write operations skip the
//! round trip when the cache shows the requested state already holds.
//!
//! # Failure model
//!
//! Every operation returns `Err` only when the device could not be reached
//! or its answer could not be read. A reply the device rejects, or one that
//! is not valid JSON, is an `Ok` carrying the failure outcome the operation
//! documents (`false`, the previous mode, the previous positions, ...).
//!
//! ```no_run
//! use karotz_lib::Karotz;
//! use karotz_lib::types::LedColor;
//!
//! # async fn example() -> karotz_lib::Result<()> {
//! let karotz = Karotz::http("192.168.1.20").build()?;
//!
//! if karotz.status().await?.is_sleeping() {
//!     karotz.wakeup(true).await?;
//! }
//! karotz.set_led(LedColor::BLUE, false).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod http_builder;

#[cfg(feature = "http")]
pub use http_builder::HttpKarotzBuilder;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::command::{Command, EarsCommand, LedCommand, PowerCommand, SoundCommand, StatusCommand};
use crate::error::Error;
use crate::protocol::{CommandResponse, Protocol};
use crate::response::{EarsModeResponse, EarsResponse, LedResponse, Reply, StatusResponse};
use crate::state::DeviceState;
use crate::types::{EarMode, EarPosition, KarotzStatus, LedColor, SoundControl};

/// A Karotz reachable through a [`Protocol`].
///
/// Operations on one client run one at a time: each holds an internal lock
/// from its cache check until its cache update, so two concurrent calls can
/// never interleave their round trips.
///
/// # Creating a client
///
/// ```no_run
/// use karotz_lib::Karotz;
/// use karotz_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// # fn example() -> karotz_lib::Result<()> {
/// let karotz = Karotz::http("karotz.local").build()?;
///
/// let karotz = Karotz::http_config(
///     HttpConfig::new("192.168.1.20").with_read_timeout(Duration::from_secs(3)),
/// )
/// .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Karotz<P: Protocol> {
    hostname: String,
    protocol: Arc<P>,
    /// `None` until the first status query.
    state: Arc<RwLock<Option<DeviceState>>>,
    op_lock: Mutex<()>,
}

impl<P: Protocol> Karotz<P> {
    /// Creates a client that talks to `hostname` through `protocol`.
    ///
    /// Nothing is sent until the first operation.
    pub fn with_protocol(hostname: impl Into<String>, protocol: P) -> Self {
        Self {
            hostname: hostname.into(),
            protocol: Arc::new(protocol),
            state: Arc::new(RwLock::new(None)),
            op_lock: Mutex::new(()),
        }
    }

    /// Returns the hostname this client was created for.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns a snapshot of the cached state, or `None` if the rabbit was
    /// never queried.
    #[must_use]
    pub fn state(&self) -> Option<DeviceState> {
        self.state.read().clone()
    }

    // ========== Status ==========

    /// Returns the rabbit's lifecycle status.
    ///
    /// Queries the device first when the cached status is unknown or
    /// offline. An unreadable status reply yields
    /// [`Unknown`](KarotzStatus::Unknown).
    ///
    /// # Errors
    ///
    /// Returns error if the status query fails to reach the device.
    pub async fn status(&self) -> Result<KarotzStatus, Error> {
        let _guard = self.op_lock.lock().await;
        self.refresh_if_offline().await?;
        Ok(self.read_state(DeviceState::status))
    }

    /// Queries the device status unconditionally.
    ///
    /// # Errors
    ///
    /// Returns error if the status query fails to reach the device.
    pub async fn refresh(&self) -> Result<KarotzStatus, Error> {
        let _guard = self.op_lock.lock().await;
        self.query_status().await
    }

    /// Returns the OpenKarotz firmware version.
    ///
    /// # Errors
    ///
    /// Returns error if the status query fails to reach the device.
    pub async fn version(&self) -> Result<Option<String>, Error> {
        let _guard = self.op_lock.lock().await;
        self.refresh_if_offline().await?;
        Ok(self.read_state(|state| state.version().map(str::to_string)))
    }

    /// Returns the LED color.
    ///
    /// Only queries the device when nothing is cached yet.
    ///
    /// # Errors
    ///
    /// Returns error if the status query fails to reach the device.
    pub async fn color(&self) -> Result<LedColor, Error> {
        let _guard = self.op_lock.lock().await;
        if self.state.read().is_none() {
            self.query_status().await?;
        }
        Ok(self.read_state(DeviceState::led_color))
    }

    /// Returns `true` if the LED pulses.
    ///
    /// # Errors
    ///
    /// Returns error if the status query fails to reach the device.
    pub async fn is_pulsing(&self) -> Result<bool, Error> {
        let _guard = self.op_lock.lock().await;
        self.refresh_if_offline().await?;
        Ok(self.read_state(DeviceState::is_pulsing))
    }

    /// Returns the ear mode.
    ///
    /// # Errors
    ///
    /// Returns error if the status query fails to reach the device.
    pub async fn ear_mode(&self) -> Result<EarMode, Error> {
        let _guard = self.op_lock.lock().await;
        self.refresh_if_offline().await?;
        Ok(self.read_state(DeviceState::ear_mode))
    }

    // ========== LED ==========

    /// Sets the LED color and pulse.
    ///
    /// The color is masked to 24 bits. When the cache already shows this
    /// color and pulse, nothing is sent and `true` is returned.
    ///
    /// On an accepted reply the cache takes the color and pulse the device
    /// echoes back. On any other reply the cache takes the requested values
    /// anyway and `false` is returned, so the next identical request is
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns error if the device cannot be reached. The cache is left
    /// untouched in that case.
    pub async fn set_led(&self, color: impl Into<LedColor>, pulse: bool) -> Result<bool, Error> {
        let color = color.into();
        let _guard = self.op_lock.lock().await;

        let unchanged = self
            .state
            .read()
            .as_ref()
            .is_some_and(|state| state.led_matches(color, pulse));
        if unchanged {
            tracing::debug!(host = %self.hostname, %color, pulse, "LED unchanged");
            return Ok(true);
        }

        let response = self.send(&LedCommand::new(color, pulse)).await?;
        let echoed = match Reply::classify(response.body()) {
            Reply::Accepted(reply) => LedResponse::try_from(&reply)
                .inspect_err(|e| {
                    tracing::warn!(host = %self.hostname, error = %e, "Bad LED reply");
                })
                .ok(),
            rejected => {
                log_refusal(&self.hostname, "leds", &rejected);
                None
            }
        };

        let accepted = echoed.is_some();
        let (color, pulse) = echoed.map_or((color, pulse), |led| (led.color, led.pulse));
        self.update_state(|state| state.set_led(color, pulse));
        Ok(accepted)
    }

    // ========== Power ==========

    /// Puts the rabbit to sleep.
    ///
    /// Returns `true` whenever the device gave a readable answer: the status
    /// becomes [`Sleeping`](KarotzStatus::Sleeping) if the action was
    /// accepted and [`Awake`](KarotzStatus::Awake) if it was refused. The
    /// result says the call went through, not that the rabbit sleeps.
    /// An unreadable answer sets the status to
    /// [`Unknown`](KarotzStatus::Unknown) and returns `false`.
    ///
    /// Nothing is sent if the rabbit is already known to sleep.
    ///
    /// # Errors
    ///
    /// Returns error if the device cannot be reached.
    pub async fn sleep(&self) -> Result<bool, Error> {
        let _guard = self.op_lock.lock().await;
        if self.read_state(DeviceState::status).is_sleeping() {
            tracing::debug!(host = %self.hostname, "Already sleeping");
            return Ok(true);
        }

        let response = self.send(&PowerCommand::Sleep).await?;
        let (status, ok) = match Reply::classify(response.body()) {
            Reply::Accepted(_) => (KarotzStatus::Sleeping, true),
            rejected @ Reply::Rejected { .. } => {
                log_refusal(&self.hostname, "sleep", &rejected);
                (KarotzStatus::Awake, true)
            }
            malformed @ Reply::Malformed(_) => {
                log_refusal(&self.hostname, "sleep", &malformed);
                (KarotzStatus::Unknown, false)
            }
        };
        self.update_state(|state| state.set_status(status));
        Ok(ok)
    }

    /// Wakes the rabbit up, silently if asked.
    ///
    /// Returns whether the rabbit is awake afterwards. A refused or
    /// unreadable answer sets the status to [`Unknown`](KarotzStatus::Unknown).
    /// Nothing is sent if the rabbit is already known to be awake.
    ///
    /// # Errors
    ///
    /// Returns error if the device cannot be reached.
    pub async fn wakeup(&self, silent: bool) -> Result<bool, Error> {
        let _guard = self.op_lock.lock().await;
        if self.read_state(DeviceState::status).is_awake() {
            tracing::debug!(host = %self.hostname, "Already awake");
            return Ok(true);
        }

        let response = self.send(&PowerCommand::wakeup(silent)).await?;
        let status = match Reply::classify(response.body()) {
            Reply::Accepted(_) => KarotzStatus::Awake,
            other => {
                log_refusal(&self.hostname, "wakeup", &other);
                KarotzStatus::Unknown
            }
        };
        self.update_state(|state| state.set_status(status));
        Ok(status.is_awake())
    }

    // ========== Sound ==========

    /// Plays the sound at `url`.
    ///
    /// An empty URL plays nothing and returns `true` without a round trip.
    ///
    /// # Errors
    ///
    /// Returns error if the device cannot be reached.
    pub async fn play_sound(&self, url: &str) -> Result<bool, Error> {
        if url.is_empty() {
            return Ok(true);
        }
        let _guard = self.op_lock.lock().await;
        let played = self.send_action("sound", &SoundCommand::play(url)).await?;
        if played {
            tracing::info!(host = %self.hostname, url, "Playing sound");
        }
        Ok(played)
    }

    /// Stops or pauses the sound being played.
    ///
    /// # Errors
    ///
    /// Returns error if the device cannot be reached.
    pub async fn sound_control(&self, control: SoundControl) -> Result<bool, Error> {
        let _guard = self.op_lock.lock().await;
        self.send_action("sound_control", &SoundCommand::Control(control)).await
    }

    // ========== Ears ==========

    /// Enables or disables the ears.
    ///
    /// Returns the mode the device reports on acceptance, which is also
    /// cached. On refusal the previous mode is returned and the cache is
    /// left untouched. Nothing is sent when `mode` is already cached.
    ///
    /// # Errors
    ///
    /// Returns error if the device cannot be reached.
    pub async fn set_ear_mode(&self, mode: EarMode) -> Result<EarMode, Error> {
        let _guard = self.op_lock.lock().await;
        let cached = self.state.read().as_ref().map(DeviceState::ear_mode);
        if cached == Some(mode) {
            return Ok(mode);
        }
        let previous = cached.unwrap_or_default();

        let response = self.send(&EarsCommand::Mode(mode)).await?;
        let reported = match Reply::classify(response.body()) {
            Reply::Accepted(reply) => EarsModeResponse::try_from(&reply)
                .inspect_err(|e| {
                    tracing::warn!(host = %self.hostname, error = %e, "Bad ears_mode reply");
                })
                .ok(),
            other => {
                log_refusal(&self.hostname, "ears_mode", &other);
                None
            }
        };

        match reported {
            Some(EarsModeResponse { mode }) => {
                self.update_state(|state| state.set_ear_mode(mode));
                Ok(mode)
            }
            None => Ok(previous),
        }
    }

    /// Moves the ears to random positions.
    ///
    /// Refusals are logged and otherwise ignored. Positions echoed by the
    /// device are cached.
    ///
    /// # Errors
    ///
    /// Returns error if the device cannot be reached.
    pub async fn ears_random(&self) -> Result<(), Error> {
        let _guard = self.op_lock.lock().await;
        let response = self.send(&EarsCommand::Random).await?;
        match Reply::classify(response.body()) {
            Reply::Accepted(reply) => {
                if let Ok(ears) = EarsResponse::try_from(&reply) {
                    self.update_state(|state| state.set_ear_positions(ears.positions()));
                }
            }
            other => log_refusal(&self.hostname, "ears_random", &other),
        }
        Ok(())
    }

    /// Moves the ears back to their rest position.
    ///
    /// Refusals are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the device cannot be reached.
    pub async fn ears_reset(&self) -> Result<(), Error> {
        let _guard = self.op_lock.lock().await;
        let response = self.send(&EarsCommand::Reset).await?;
        match Reply::classify(response.body()) {
            Reply::Accepted(_) => self.update_state(DeviceState::clear_ear_positions),
            other => log_refusal(&self.hostname, "ears_reset", &other),
        }
        Ok(())
    }

    /// Moves the ears to the given positions.
    ///
    /// On acceptance, returns and caches the positions the device echoes, or
    /// the requested ones if it echoes none. On refusal, returns the
    /// previously known positions.
    ///
    /// # Errors
    ///
    /// Returns error if the device cannot be reached.
    pub async fn set_ears(
        &self,
        left: EarPosition,
        right: EarPosition,
    ) -> Result<[EarPosition; 2], Error> {
        let _guard = self.op_lock.lock().await;
        let response = self.send(&EarsCommand::Move { left, right }).await?;
        match Reply::classify(response.body()) {
            Reply::Accepted(reply) => {
                let positions = EarsResponse::try_from(&reply)
                    .map_or([left, right], |ears| ears.positions());
                self.update_state(|state| state.set_ear_positions(positions));
                Ok(positions)
            }
            other => {
                log_refusal(&self.hostname, "ears", &other);
                Ok(self.ear_positions())
            }
        }
    }

    /// Returns the last known `[left, right]` ear positions.
    ///
    /// Never touches the network. Both ears read as
    /// [`EarPosition::FIRST`] until an ear action reports positions.
    #[must_use]
    pub fn ear_positions(&self) -> [EarPosition; 2] {
        self.state
            .read()
            .as_ref()
            .and_then(DeviceState::ear_positions)
            .unwrap_or([EarPosition::FIRST; 2])
    }

    // ========== Internals ==========

    /// Sends a command and maps transport failures.
    async fn send<C: Command + Sync>(&self, command: &C) -> Result<CommandResponse, Error> {
        self.protocol.send_command(command).await.map_err(|e| {
            tracing::warn!(
                host = %self.hostname,
                endpoint = command.endpoint(),
                error = %e,
                "Karotz unreachable"
            );
            Error::Protocol(e)
        })
    }

    /// Sends an action whose only outcome is its return code.
    async fn send_action<C: Command + Sync>(
        &self,
        name: &str,
        command: &C,
    ) -> Result<bool, Error> {
        let response = self.send(command).await?;
        let reply = Reply::classify(response.body());
        if !reply.is_accepted() {
            log_refusal(&self.hostname, name, &reply);
        }
        Ok(reply.is_accepted())
    }

    /// Replaces the cache with a fresh status.
    ///
    /// Cached ear positions are kept since the status does not carry them.
    async fn query_status(&self) -> Result<KarotzStatus, Error> {
        let response = match self.protocol.send_command(&StatusCommand).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(host = %self.hostname, error = %e, "Status query failed");
                if let Some(state) = self.state.write().as_mut() {
                    state.set_status(KarotzStatus::Unknown);
                }
                return Err(Error::Protocol(e));
            }
        };

        let mut fresh = match StatusResponse::parse(response.body()) {
            Ok(status) => DeviceState::from(&status),
            Err(e) => {
                tracing::warn!(host = %self.hostname, error = %e, "Unreadable status");
                DeviceState::new()
            }
        };

        let mut state = self.state.write();
        if let Some(positions) = state.as_ref().and_then(DeviceState::ear_positions) {
            fresh.set_ear_positions(positions);
        }
        let status = fresh.status();
        tracing::debug!(host = %self.hostname, %status, "Status refreshed");
        *state = Some(fresh);
        Ok(status)
    }

    async fn refresh_if_offline(&self) -> Result<(), Error> {
        let offline = self
            .state
            .read()
            .as_ref()
            .is_none_or(DeviceState::is_offline);
        if offline {
            self.query_status().await?;
        }
        Ok(())
    }

    /// Reads the cache, falling back to defaults when nothing is cached.
    fn read_state<T>(&self, f: impl FnOnce(&DeviceState) -> T) -> T {
        let state = self.state.read();
        match state.as_ref() {
            Some(state) => f(state),
            None => f(&DeviceState::default()),
        }
    }

    fn update_state(&self, f: impl FnOnce(&mut DeviceState)) {
        f(self.state.write().get_or_insert_with(DeviceState::new));
    }
}

fn log_refusal(host: &str, action: &str, reply: &Reply) {
    match reply {
        Reply::Accepted(_) => {}
        Reply::Rejected { code, message } => tracing::warn!(
            host,
            action,
            code = %code,
            message = message.as_deref().unwrap_or_default(),
            "Karotz refused action"
        ),
        Reply::Malformed(e) => {
            tracing::warn!(host, action, error = %e, "Unreadable Karotz reply");
        }
    }
}

// ========== HTTP Entry Point ==========

#[cfg(feature = "http")]
impl Karotz<crate::protocol::HttpClient> {
    /// Creates a builder for a Karotz reached over HTTP.
    ///
    /// Equivalent to `Karotz::http_config(HttpConfig::new(host))`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use karotz_lib::Karotz;
    ///
    /// # fn example() -> karotz_lib::Result<()> {
    /// let karotz = Karotz::http("192.168.1.20").build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpKarotzBuilder {
        HttpKarotzBuilder::new(crate::protocol::HttpConfig::new(host))
    }

    /// Creates a builder from a full `HttpConfig`.
    #[must_use]
    pub fn http_config(config: crate::protocol::HttpConfig) -> HttpKarotzBuilder {
        HttpKarotzBuilder::new(config)
    }
}
