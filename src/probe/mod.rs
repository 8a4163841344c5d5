//! Probe implementation submodule.
//!
//! This module contains the internal steps of the Filebeat version probe:
//!
//! - `find_executable`: PATH-based executable lookup with sbin fallbacks
//! - `run_version_command`: runs the version subcommand and captures stdout
//! - `normalize_version`: regex extraction of the `MAJOR.MINOR.PATCH` token

mod command;
mod parser;
mod path_finder;

pub(crate) use command::run_version_command;
pub(crate) use parser::normalize_version;
pub(crate) use path_finder::find_executable;
