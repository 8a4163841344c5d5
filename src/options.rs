//! Probe options configuration.
//!
//! This module provides the [`ProbeOptions`] struct for configuring which
//! command the probe runs and how long it may take.

use std::time::Duration;

/// Configuration options for the version probe.
///
/// The defaults reproduce the fact exactly: run `filebeat version` and wait
/// for it to finish, however long that takes.
///
/// # Example
///
/// ```rust
/// use filebeat_facts::ProbeOptions;
/// use std::time::Duration;
///
/// // `filebeat version`, no timeout
/// let opts = ProbeOptions::default();
///
/// // A filebeat outside PATH, bounded to 3 seconds
/// let opts = ProbeOptions {
///     executable: "/usr/share/filebeat/bin/filebeat".to_string(),
///     timeout: Some(Duration::from_secs(3)),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Executable name or path.
    ///
    /// A bare name is searched on `PATH` and then in `/sbin` and
    /// `/usr/sbin`. A value containing a path separator is used as is.
    ///
    /// Default: `"filebeat"`
    pub executable: String,

    /// Arguments passed to the executable.
    ///
    /// Default: `["version"]`
    pub args: Vec<String>,

    /// Upper bound on command execution.
    ///
    /// `None` waits for the command to exit. When set and exceeded, the
    /// child is killed and the probe reports no value.
    ///
    /// Default: `None`
    pub timeout: Option<Duration>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            executable: "filebeat".to_string(),
            args: vec!["version".to_string()],
            timeout: None,
        }
    }
}
