use std::fmt::Display;
use std::str::FromStr;

/// Binary name appended to the application root when launching on Windows.
/// On Linux the configured application path is the executable itself.
pub const WINDOWS_BINARY: &str = "retroarch.exe";

/// Marker relating an Android core binary to its descriptor
/// (`foo.info` describes `foo_android.so`).
pub const ANDROID_MARKER: &str = "_android";

/// Activity manager binary used to fire launch intents on Android.
pub const ANDROID_ACTIVITY_MANAGER: &str = "/system/bin/am";

/// Well-known Retroarch install locations on Android.
pub const ANDROID_RETROARCH_FOLDERS: [&str; 4] = [
    "/storage/emulated/0/Android/data/com.retroarch/",
    "/data/data/com.retroarch/",
    "/storage/sdcard0/Android/data/com.retroarch/",
    "/data/user/0/com.retroarch/",
];

/// Folders searched for Retroarch configs on Android, in priority order.
pub const ANDROID_CONFIG_FOLDERS: [&str; 5] = [
    "/storage/emulated/0/Android/data/com.retroarch/",
    "/data/data/com.retroarch/",
    "/storage/sdcard0/Android/data/com.retroarch/",
    "/data/user/0/com.retroarch/",
    "/storage/emulated/0/Retroarch/",
];

/// Platform capability object. Injected into the catalogs and the launch
/// builder so platform behaviour is decided in one place and substitutable
/// in tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Android,
    /// Known-incomplete coverage, launching reports an explicit error.
    Other,
}

impl Platform {
    pub fn detect() -> Platform {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }

    pub fn is_android(&self) -> bool {
        matches!(self, Platform::Android)
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    pub fn is_linux(&self) -> bool {
        matches!(self, Platform::Linux)
    }

    /// File extension of core binaries, without the dot.
    pub fn core_extension(&self) -> &'static str {
        match self {
            Platform::Windows => "dll",
            _ => "so",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
            Platform::Android => write!(f, "android"),
            Platform::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "android" => Ok(Platform::Android),
            "other" => Ok(Platform::Other),
            _ => Err(format!("unknown platform '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Platform;
    use std::str::FromStr;

    #[test]
    fn core_extension_per_platform() {
        assert_eq!(Platform::Windows.core_extension(), "dll");
        assert_eq!(Platform::Linux.core_extension(), "so");
        assert_eq!(Platform::Android.core_extension(), "so");
        assert_eq!(Platform::Other.core_extension(), "so");
    }

    #[test]
    fn parse_known_platforms() {
        assert_eq!(Platform::from_str("android"), Ok(Platform::Android));
        assert_eq!(Platform::from_str("Windows"), Ok(Platform::Windows));
        assert_eq!(Platform::from_str("LINUX"), Ok(Platform::Linux));
    }

    #[test]
    fn parse_unknown_platform() {
        assert!(Platform::from_str("beos").is_err());
    }

    #[test]
    fn predicates() {
        assert!(Platform::Android.is_android());
        assert!(!Platform::Android.is_linux());
        assert!(Platform::Windows.is_windows());
        assert!(Platform::Linux.is_linux());
    }
}
