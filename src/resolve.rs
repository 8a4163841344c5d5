//! Filebeat version resolution.

use crate::probe::{find_executable, normalize_version, run_version_command};
use crate::{NormalizedVersion, ProbeError, ProbeOptions};

/// Resolve the installed Filebeat version.
///
/// Runs `filebeat version` and extracts the `MAJOR.MINOR.PATCH` token from
/// its output.
///
/// # Resolution Process
///
/// 1. Search for `filebeat` in PATH, then `/sbin` and `/usr/sbin`
/// 2. Run `filebeat version` and capture stdout
/// 3. Extract the first `\d+\.\d+\.\d+` match
///
/// # Returns
///
/// - `Ok(Some(version))` - version token found
/// - `Ok(None)` - binary missing, failed to start, or printed nothing
/// - `Err(ProbeError::PatternMismatch)` - output present but no version token
///
/// # Example
///
/// ```rust,no_run
/// use filebeat_facts::filebeat_version;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     match filebeat_version().await {
///         Ok(Some(version)) => println!("filebeat {}", version),
///         Ok(None) => println!("filebeat not installed"),
///         Err(e) => eprintln!("{}", e),
///     }
/// }
/// ```
pub async fn filebeat_version() -> Result<Option<NormalizedVersion>, ProbeError> {
    filebeat_version_with_options(ProbeOptions::default()).await
}

/// Resolve the Filebeat version with custom options.
///
/// Same as [`filebeat_version`], but with a configurable executable,
/// arguments and timeout. See [`ProbeOptions`].
///
/// # Example
///
/// ```rust,no_run
/// use filebeat_facts::{filebeat_version_with_options, ProbeOptions};
/// use std::time::Duration;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let options = ProbeOptions {
///         timeout: Some(Duration::from_secs(3)),
///         ..Default::default()
///     };
///     let version = filebeat_version_with_options(options).await;
///     println!("{:?}", version);
/// }
/// ```
pub async fn filebeat_version_with_options(
    options: ProbeOptions,
) -> Result<Option<NormalizedVersion>, ProbeError> {
    let path = match find_executable(&options.executable) {
        Some(p) => p,
        None => {
            tracing::debug!(executable = %options.executable, "executable not found");
            return Ok(None);
        }
    };

    let raw = match run_version_command(&path, &options.args, options.timeout).await {
        Some(raw) => raw,
        None => return Ok(None),
    };

    normalize_version(&raw)
}

/// Resolve the Filebeat version, blocking the calling thread.
///
/// Drives [`filebeat_version`] to completion on a fresh current-thread
/// runtime. Must not be called from inside an async context.
///
/// # Errors
///
/// Besides [`ProbeError::PatternMismatch`], returns [`ProbeError::Runtime`]
/// if the runtime cannot be created.
pub fn filebeat_version_blocking() -> Result<Option<NormalizedVersion>, ProbeError> {
    filebeat_version_blocking_with_options(ProbeOptions::default())
}

/// Blocking variant of [`filebeat_version_with_options`].
pub fn filebeat_version_blocking_with_options(
    options: ProbeOptions,
) -> Result<Option<NormalizedVersion>, ProbeError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(filebeat_version_with_options(options))
}
