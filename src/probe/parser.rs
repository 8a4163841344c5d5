//! Version output parsing with regex extraction.

use crate::{NormalizedVersion, ProbeError};
use regex::Regex;

/// Extract the `MAJOR.MINOR.PATCH` token from `filebeat version` output.
///
/// The first `\d+\.\d+\.\d+` match anywhere in the text wins:
///
/// - `filebeat version 7.14.2 (amd64), libbeat 7.14.2` -> 7.14.2
/// - `7.14.2` -> 7.14.2
/// - `filebeat version 1.2.3.4 (arm64)` -> 1.2.3
///
/// # Returns
///
/// - `Ok(None)` if the output is empty or whitespace only
/// - `Ok(Some(version))` if a version token is found
/// - `Err(ProbeError::PatternMismatch)` if there is output but no token
pub(crate) fn normalize_version(raw: &str) -> Result<Option<NormalizedVersion>, ProbeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let re = Regex::new(r"\d+\.\d+\.\d+").expect("Invalid regex pattern");

    match re.find(trimmed) {
        Some(m) => Ok(Some(NormalizedVersion::new(m.as_str()))),
        None => Err(ProbeError::PatternMismatch {
            output: trimmed.to_string(),
        }),
    }
}
