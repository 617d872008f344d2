//! Runtime configuration for the `tasklog` command line tool.
//!
//! Each setting is taken from its command line flag, then its environment
//! variable, then the built-in default.

use crate::task::domain::UserCode;
use camino::Utf8PathBuf;
use clap::Args;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "TASKLOG_DATA_DIR";
/// Environment variable naming the acting user code.
pub const USER_ENV: &str = "TASKLOG_USER";
/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "TASKLOG_LOG";

/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = ".";
/// Log filter used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Global options shared by every command.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the task document
    #[arg(short, long, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR, global = true)]
    pub data_dir: Utf8PathBuf,

    /// Code of the user performing the command
    #[arg(short, long, env = USER_ENV, global = true)]
    pub user: Option<u32>,

    /// Log filter such as `info` or `tasklog=debug`
    #[arg(long, env = LOG_ENV, default_value = DEFAULT_LOG_LEVEL, global = true)]
    pub log_level: String,
}

impl AppConfig {
    /// Returns the acting user, if one was configured.
    #[must_use]
    pub fn user_code(&self) -> Option<UserCode> {
        self.user.map(UserCode::new)
    }
}
