// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client builder.

use std::time::Duration;

use crate::device::Karotz;
use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};

/// Builder for a [`Karotz`] reached over HTTP.
///
/// Created with `Karotz::http("host")` or
/// `Karotz::http_config(HttpConfig::new("host").with_port(8080))`.
///
/// # Examples
///
/// ```no_run
/// use karotz_lib::Karotz;
/// use std::time::Duration;
///
/// # fn example() -> karotz_lib::Result<()> {
/// let karotz = Karotz::http("192.168.1.20")
///     .with_connect_timeout(Duration::from_secs(2))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpKarotzBuilder {
    config: HttpConfig,
}

impl HttpKarotzBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets the HTTP port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_connect_timeout(timeout);
        self
    }

    /// Sets the read timeout.
    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_read_timeout(timeout);
        self
    }

    /// Returns the configuration the client will be built from.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the client.
    ///
    /// No request is sent; the rabbit is first contacted by the first
    /// operation.
    ///
    /// # Errors
    ///
    /// Returns error if the host is invalid or the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<Karotz<HttpClient>, Error> {
        let hostname = self.config.host().to_string();
        let client = self.config.into_client()?;

        tracing::debug!(host = %hostname, base_url = client.base_url(), "Created Karotz client");

        Ok(Karotz::with_protocol(hostname, client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_from_host() {
        let builder = Karotz::http("192.168.1.20")
            .with_port(8080)
            .with_read_timeout(Duration::from_secs(1));

        assert_eq!(builder.config().host(), "192.168.1.20");
        assert_eq!(builder.config().port(), 8080);
        assert_eq!(builder.config().read_timeout(), Duration::from_secs(1));
        assert_eq!(
            builder.config().connect_timeout(),
            HttpConfig::DEFAULT_CONNECT_TIMEOUT
        );
    }

    #[test]
    fn builder_from_config() {
        let config = HttpConfig::new("karotz").with_connect_timeout(Duration::from_millis(500));
        let builder = Karotz::http_config(config);
        assert_eq!(
            builder.config().connect_timeout(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn build_keeps_hostname_and_has_no_state() {
        let karotz = Karotz::http("karotz.local").build().unwrap();
        assert_eq!(karotz.hostname(), "karotz.local");
        assert!(karotz.state().is_none());
    }

    #[test]
    fn build_rejects_empty_host() {
        let err = Karotz::http("").build().unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(crate::error::ProtocolError::InvalidAddress(_))
        ));
    }
}
