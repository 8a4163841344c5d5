//! Kernel names used for fact confinement.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Host kernel as reported by the fact framework's `kernel` fact.
///
/// Names parse case-insensitively, so `linux`, `Linux` and `LINUX` are the
/// same kernel, matching how confinement values are compared.
///
/// # Example
///
/// ```rust
/// use filebeat_facts::Kernel;
///
/// let kernel: Kernel = "linux".parse().unwrap();
/// assert_eq!(kernel, Kernel::Linux);
/// assert_eq!(kernel.to_string(), "Linux");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[non_exhaustive]
pub enum Kernel {
    #[strum(serialize = "Linux")]
    #[serde(rename = "Linux")]
    Linux,
    #[strum(serialize = "Darwin")]
    #[serde(rename = "Darwin")]
    Darwin,
    #[strum(serialize = "windows")]
    #[serde(rename = "windows")]
    Windows,
    #[strum(serialize = "FreeBSD")]
    #[serde(rename = "FreeBSD")]
    FreeBsd,
    #[strum(serialize = "OpenBSD")]
    #[serde(rename = "OpenBSD")]
    OpenBsd,
    #[strum(serialize = "NetBSD")]
    #[serde(rename = "NetBSD")]
    NetBsd,
    #[strum(serialize = "DragonFly")]
    #[serde(rename = "DragonFly")]
    DragonFly,
    #[strum(serialize = "SunOS")]
    #[serde(rename = "SunOS")]
    SunOs,
    #[strum(serialize = "AIX")]
    #[serde(rename = "AIX")]
    Aix,
}

impl Kernel {
    /// The kernel this binary was compiled for.
    ///
    /// Returns `None` for targets with no kernel fact counterpart.
    pub fn current() -> Option<Self> {
        Self::from_target_os(std::env::consts::OS)
    }

    /// Map a Rust `target_os` value to a kernel.
    pub fn from_target_os(os: &str) -> Option<Self> {
        match os {
            "linux" | "android" => Some(Self::Linux),
            "macos" | "ios" => Some(Self::Darwin),
            "windows" => Some(Self::Windows),
            "freebsd" => Some(Self::FreeBsd),
            "openbsd" => Some(Self::OpenBsd),
            "netbsd" => Some(Self::NetBsd),
            "dragonfly" => Some(Self::DragonFly),
            "solaris" | "illumos" => Some(Self::SunOs),
            "aix" => Some(Self::Aix),
            _ => None,
        }
    }

    /// The kernel name as the fact framework reports it.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Iterator over all known kernels.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
