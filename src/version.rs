//! The normalized version value published by the fact.

use serde::Serialize;
use std::fmt;

/// A `MAJOR.MINOR.PATCH` token extracted from `filebeat version` output.
///
/// Values are only produced by the probe from a `\d+\.\d+\.\d+` match, so
/// the wrapped string always has that shape. It serializes as a plain
/// string, which is what the fact publishes.
///
/// # Example
///
/// ```rust,no_run
/// use filebeat_facts::filebeat_version_blocking;
///
/// if let Ok(Some(version)) = filebeat_version_blocking() {
///     let value: String = version.into();
///     println!("filebeat_version => {}", value);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedVersion(String);

impl NormalizedVersion {
    pub(crate) fn new(token: &str) -> Self {
        Self(token.to_string())
    }

    /// The version token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the token as a semantic version for comparisons.
    ///
    /// Returns `None` for tokens semver rejects, such as components with
    /// leading zeros (`07.1.0`).
    pub fn to_semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.0).ok()
    }
}

impl fmt::Display for NormalizedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NormalizedVersion> for String {
    fn from(version: NormalizedVersion) -> Self {
        version.0
    }
}
