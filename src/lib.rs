//! # filebeat-facts
//!
//! Host fact reporting the installed Filebeat version (`filebeat_version`).
//!
//! The probe runs `filebeat version`, extracts the `MAJOR.MINOR.PATCH` token
//! from its output and hands it back to the embedding fact framework, which
//! stays in charge of registration, caching and publication.
//!
//! ## Outcomes
//!
//! - `Ok(Some(version))`: a version token was found
//! - `Ok(None)`: Filebeat is missing or printed nothing
//! - `Err(ProbeError::PatternMismatch)`: Filebeat printed something without
//!   a version token
//!
//! ## Example
//!
//! ```rust,no_run
//! use filebeat_facts::{filebeat_version_blocking, FILEBEAT_VERSION};
//!
//! match filebeat_version_blocking() {
//!     Ok(Some(version)) => println!("{} => {}", FILEBEAT_VERSION.name, version),
//!     Ok(None) => println!("{} => (no value)", FILEBEAT_VERSION.name),
//!     Err(e) => eprintln!("{}: {}", FILEBEAT_VERSION.name, e),
//! }
//! ```

mod error;
mod fact;
mod kernel;
mod options;
mod probe;
mod resolve;
mod version;

pub use error::ProbeError;
pub use fact::{Fact, FILEBEAT_VERSION};
pub use kernel::Kernel;
pub use options::ProbeOptions;
pub use resolve::{
    filebeat_version, filebeat_version_blocking, filebeat_version_blocking_with_options,
    filebeat_version_with_options,
};
pub use version::NormalizedVersion;
