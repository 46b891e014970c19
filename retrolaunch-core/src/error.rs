use std::error::Error;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LauncherError {
    /// Retroarch config file does not exist
    ConfigNotFound(String),
    /// Info folder named by the config does not exist
    InfoFolderNotFound(String),
    /// Core descriptor file could not be read
    DescriptorNotFound(String),
    /// Required setting or property is absent
    MissingKey(String),
    /// No launch form for the running platform
    UnsupportedPlatform,
}

impl Display for LauncherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            LauncherError::ConfigNotFound(path) => {
                write!(f, "Retroarch config file not found: {}", path)
            }
            LauncherError::InfoFolderNotFound(path) => {
                write!(f, "Retroarch info folder not found: {}", path)
            }
            LauncherError::DescriptorNotFound(path) => {
                write!(f, "core descriptor not readable: {}", path)
            }
            LauncherError::MissingKey(key) => write!(f, "missing key '{}'", key),
            LauncherError::UnsupportedPlatform => write!(f, "unsupported platform"),
        }
    }
}

impl Error for LauncherError {}
