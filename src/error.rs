//! Error types for the version probe.

use thiserror::Error;

/// Hard failures raised while resolving the Filebeat version.
///
/// A missing binary or an empty command output is *not* an error: the
/// probe reports those as `Ok(None)`. Only output that exists but carries
/// no `MAJOR.MINOR.PATCH` token ends up here.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error types
/// in future versions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProbeError {
    /// The command printed something, but no version token was found in it.
    #[error("no version pattern in filebeat output: {output:?}")]
    PatternMismatch {
        /// The trimmed output that failed to match.
        output: String,
    },

    /// The blocking entry point could not start its runtime.
    #[error("failed to start probe runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ProbeError {
    /// Human-readable description of the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use filebeat_facts::ProbeError;
    ///
    /// let error = ProbeError::PatternMismatch { output: "filebeat version unknown".into() };
    /// assert_eq!(error.description(), "Version pattern not found in output");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::PatternMismatch { .. } => "Version pattern not found in output",
            Self::Runtime(_) => "Failed to start probe runtime",
        }
    }
}
