//! PATH-based executable lookup with fallback locations.

use std::path::{Path, PathBuf};

/// Administration directories searched after PATH.
const FALLBACK_PATHS: &[&str] = &["/sbin", "/usr/sbin"];

/// Find an executable by name.
///
/// A name containing a path separator is taken as a path and returned if it
/// exists. Otherwise the name is looked up on the system PATH via the
/// `which` crate, then in `/sbin` and `/usr/sbin`, which are not always on
/// PATH for service accounts.
///
/// # Returns
///
/// `Some(PathBuf)` if the executable is found, `None` otherwise.
pub(crate) fn find_executable(name: &str) -> Option<PathBuf> {
    if name.contains(std::path::MAIN_SEPARATOR) {
        let path = Path::new(name);
        return path.exists().then(|| path.to_path_buf());
    }

    if let Ok(path) = which::which(name) {
        return Some(path);
    }

    FALLBACK_PATHS
        .iter()
        .map(|dir| Path::new(dir).join(name))
        .find(|path| path.is_file())
}
