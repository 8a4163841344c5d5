//! Fact descriptor with kernel confinement.
//!
//! The embedding framework owns registration, caching and publication. This
//! module only carries what it needs to register the probe: a stable name
//! and the kernel the fact is confined to.

use crate::resolve::filebeat_version_with_options;
use crate::{Kernel, NormalizedVersion, ProbeError, ProbeOptions};

/// A named fact confined to one kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    /// Name the value is published under.
    pub name: &'static str,
    /// The only kernel the fact is evaluated on.
    pub confine: Kernel,
}

/// The `filebeat_version` fact, confined to Linux.
///
/// # Example
///
/// ```rust
/// use filebeat_facts::{Kernel, FILEBEAT_VERSION};
///
/// assert_eq!(FILEBEAT_VERSION.name, "filebeat_version");
/// assert!(FILEBEAT_VERSION.is_suitable(Some(Kernel::Linux)));
/// assert!(!FILEBEAT_VERSION.is_suitable(Some(Kernel::Darwin)));
/// ```
pub const FILEBEAT_VERSION: Fact = Fact {
    name: "filebeat_version",
    confine: Kernel::Linux,
};

impl Fact {
    /// Whether the fact may be evaluated on `kernel`.
    ///
    /// An unidentified kernel (`None`) never satisfies the confinement.
    pub fn is_suitable(&self, kernel: Option<Kernel>) -> bool {
        kernel == Some(self.confine)
    }

    /// Resolve the fact for the current host with default options.
    pub async fn resolve(&self) -> Result<Option<NormalizedVersion>, ProbeError> {
        self.resolve_on(Kernel::current(), ProbeOptions::default())
            .await
    }

    /// Resolve the fact as if running on `kernel`.
    ///
    /// When the confinement does not hold, returns `Ok(None)` without
    /// running any command.
    pub async fn resolve_on(
        &self,
        kernel: Option<Kernel>,
        options: ProbeOptions,
    ) -> Result<Option<NormalizedVersion>, ProbeError> {
        if !self.is_suitable(kernel) {
            tracing::debug!(fact = self.name, ?kernel, "fact not suitable for kernel");
            return Ok(None);
        }
        filebeat_version_with_options(options).await
    }
}
