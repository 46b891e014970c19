use log::{error, warn};

use crate::error::LauncherError;

/// A condition the caller decides how to surface. Catalog scans collect
/// these instead of notifying the host directly.
#[derive(Debug)]
pub enum Problem {
    Fatal(LauncherError),
    Warn(String),
}

impl Problem {
    pub fn fatal(e: LauncherError) -> Problem {
        Problem::Fatal(e)
    }

    pub fn warn<S: Into<String>>(msg: S) -> Problem {
        Problem::Warn(msg.into())
    }

    pub fn log(&self) {
        match self {
            Problem::Fatal(e) => error!("{}", e),
            Problem::Warn(msg) => warn!("{}", msg),
        }
    }
}
