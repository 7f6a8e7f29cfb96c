// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for OpenKarotz.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for reaching a Karotz over HTTP.
///
/// OpenKarotz serves plain HTTP on port 80 without authentication, so the
/// only knobs are the host, the port, and the two timeouts.
///
/// # Examples
///
/// ```
/// use karotz_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("karotz.local");
/// assert_eq!(config.base_url(), "http://karotz.local:80");
///
/// let config = HttpConfig::new("192.168.1.20")
///     .with_port(8080)
///     .with_connect_timeout(Duration::from_secs(2))
///     .with_read_timeout(Duration::from_secs(4));
/// assert_eq!(config.base_url(), "http://192.168.1.20:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default connect timeout.
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(6000);
    /// Default read timeout.
    pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(8000);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the Karotz
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            read_timeout: Self::DEFAULT_READ_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the read timeout.
    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the connect timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the read timeout.
    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host does not form a
    /// valid URL, or `ProtocolError::Http` if the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let host = self.host.trim();
        if host.is_empty() || host.chars().any(|c| c.is_whitespace() || "/?#@".contains(c)) {
            return Err(ProtocolError::InvalidAddress(self.host.clone()));
        }

        let base_url = self.base_url();
        Url::parse(&base_url)
            .map_err(|e| ProtocolError::InvalidAddress(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .connect_timeout(self.connect_timeout)
            .read_timeout(self.read_timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
        })
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for the OpenKarotz CGI scripts.
///
/// The base URL is built once from [`HttpConfig`]; each command is an
/// independent `GET` relative to it.
///
/// # Examples
///
/// ```no_run
/// use karotz_lib::command::StatusCommand;
/// use karotz_lib::protocol::{HttpConfig, Protocol};
///
/// # async fn example() -> karotz_lib::Result<()> {
/// let client = HttpConfig::new("192.168.1.20").into_client()?;
/// let response = client.send_command(&StatusCommand).await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the host is invalid or the client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a path.
    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn map_error(&self, error: reqwest::Error) -> ProtocolError {
        if error.is_timeout() {
            let timeout = if error.is_connect() {
                self.connect_timeout
            } else {
                self.read_timeout
            };
            ProtocolError::Timeout(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX))
        } else if error.is_connect() {
            ProtocolError::ConnectionFailed(error.to_string())
        } else {
            ProtocolError::Http(error)
        }
    }
}

impl Protocol for HttpClient {
    async fn send_raw(&self, path: &str) -> Result<CommandResponse, ProtocolError> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, "Sending HTTP command");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(|e| self.map_error(e))?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(CommandResponse::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_appends_path() {
        let client = HttpClient::new("192.168.1.100").unwrap();
        assert_eq!(
            client.build_url("/cgi-bin/leds?color=0000ff"),
            "http://192.168.1.100:80/cgi-bin/leds?color=0000ff"
        );
    }

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("karotz");
        assert_eq!(config.host(), "karotz");
        assert_eq!(config.port(), 80);
        assert_eq!(config.connect_timeout(), Duration::from_millis(6000));
        assert_eq!(config.read_timeout(), Duration::from_millis(8000));
    }

    #[test]
    fn http_config_builder_chain() {
        let config = HttpConfig::new("karotz")
            .with_port(8080)
            .with_connect_timeout(Duration::from_secs(1))
            .with_read_timeout(Duration::from_secs(2));

        assert_eq!(config.port(), 8080);
        assert_eq!(config.connect_timeout(), Duration::from_secs(1));
        assert_eq!(config.read_timeout(), Duration::from_secs(2));
        assert_eq!(config.base_url(), "http://karotz:8080");
    }

    #[test]
    fn base_url_always_carries_port() {
        assert_eq!(HttpConfig::new("10.0.0.5").base_url(), "http://10.0.0.5:80");
    }

    #[test]
    fn into_client_rejects_bad_hosts() {
        for host in [
            "",
            "   ",
            "http://karotz",
            "kar otz",
            "kar\totz",
            "kar\notz",
            "karotz/cgi-bin",
        ] {
            assert!(
                matches!(
                    HttpConfig::new(host).into_client(),
                    Err(ProtocolError::InvalidAddress(_))
                ),
                "{host:?}"
            );
        }
    }

    #[test]
    fn into_client_keeps_base_url() {
        let client = HttpConfig::new("karotz.local").into_client().unwrap();
        assert_eq!(client.base_url(), "http://karotz.local:80");
    }
}
