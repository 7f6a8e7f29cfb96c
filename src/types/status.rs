// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lifecycle status of a Karotz.

use std::fmt;

/// Lifecycle status of a Karotz.
///
/// `Sleeping` and `Awake` both mean the rabbit answered; `Unknown` and
/// `Offline` both mean it did not (or its answer made no sense).
///
/// # Examples
///
/// ```
/// use karotz_lib::types::KarotzStatus;
///
/// assert!(KarotzStatus::Sleeping.is_online());
/// assert!(KarotzStatus::Unknown.is_offline());
/// assert!(!KarotzStatus::Awake.is_sleeping());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum KarotzStatus {
    /// Status could not be determined.
    #[default]
    Unknown,
    /// The rabbit cannot be reached.
    Offline,
    /// The rabbit is not active, but some actions can still be done.
    Sleeping,
    /// The rabbit is active.
    Awake,
}

impl KarotzStatus {
    /// Returns `true` for [`Awake`](Self::Awake).
    #[must_use]
    pub const fn is_awake(self) -> bool {
        matches!(self, Self::Awake)
    }

    /// Returns `true` for [`Sleeping`](Self::Sleeping).
    #[must_use]
    pub const fn is_sleeping(self) -> bool {
        matches!(self, Self::Sleeping)
    }

    /// Returns `true` if the rabbit answered (sleeping or awake).
    #[must_use]
    pub const fn is_online(self) -> bool {
        matches!(self, Self::Sleeping | Self::Awake)
    }

    /// Returns `true` if the rabbit did not answer (unknown or offline).
    #[must_use]
    pub const fn is_offline(self) -> bool {
        !self.is_online()
    }

    /// Returns the lowercase name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Offline => "offline",
            Self::Sleeping => "sleeping",
            Self::Awake => "awake",
        }
    }
}

impl fmt::Display for KarotzStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_and_offline_partition_statuses() {
        for status in [
            KarotzStatus::Unknown,
            KarotzStatus::Offline,
            KarotzStatus::Sleeping,
            KarotzStatus::Awake,
        ] {
            assert_ne!(status.is_online(), status.is_offline(), "{status}");
        }
        assert!(KarotzStatus::Unknown.is_offline());
        assert!(KarotzStatus::Offline.is_offline());
        assert!(KarotzStatus::Sleeping.is_online());
        assert!(KarotzStatus::Awake.is_online());
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(KarotzStatus::default(), KarotzStatus::Unknown);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&KarotzStatus::Sleeping).unwrap();
        assert_eq!(json, "\"sleeping\"");
    }
}
