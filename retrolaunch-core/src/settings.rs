use crate::error::LauncherError;
use crate::{APPLICATION_KEY, RETRO_CONFIG_KEY, RETRO_CORE_KEY};

/// Persisted launcher configuration, owned by the host and filled in
/// field by field by the catalog selection operations. Updates consume
/// the record and return a new one.
///
/// `retro_core` and `retro_core_info` are either both unset or both set
/// and related under the active naming convention; `apply_core_selection`
/// maintains that pairing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LauncherSettings {
    /// Root install path of Retroarch.
    pub application: Option<String>,
    /// Resolved core binary path.
    pub retro_core: Option<String>,
    /// Resolved core descriptor path.
    pub retro_core_info: Option<String>,
    /// Retroarch config file path.
    pub retro_config: Option<String>,
    /// Free-form extra arguments, appended verbatim on launch.
    pub args: Option<String>,

    // Metadata filled from the selected core's descriptor.
    pub romext: Option<String>,
    pub platform: Option<String>,
    pub developer: Option<String>,
    pub name: Option<String>,
}

impl LauncherSettings {
    pub fn new() -> LauncherSettings {
        LauncherSettings::default()
    }

    pub fn application(&self) -> Result<&str, LauncherError> {
        self.application
            .as_deref()
            .ok_or_else(|| LauncherError::MissingKey(String::from(APPLICATION_KEY)))
    }

    pub fn retro_core(&self) -> Result<&str, LauncherError> {
        self.retro_core
            .as_deref()
            .ok_or_else(|| LauncherError::MissingKey(String::from(RETRO_CORE_KEY)))
    }

    pub fn retro_config(&self) -> Result<&str, LauncherError> {
        self.retro_config
            .as_deref()
            .ok_or_else(|| LauncherError::MissingKey(String::from(RETRO_CONFIG_KEY)))
    }

    /// Extra arguments, skipping empty strings left by the host wizard.
    pub fn extra_args(&self) -> Option<&str> {
        match self.args.as_deref() {
            Some("") => None,
            other => other,
        }
    }

    pub fn with_application<S: Into<String>>(mut self, path: S) -> LauncherSettings {
        self.application = Some(path.into());
        self
    }

    pub fn with_config<S: Into<String>>(mut self, path: S) -> LauncherSettings {
        self.retro_config = Some(path.into());
        self
    }

    pub fn with_args<S: Into<String>>(mut self, args: S) -> LauncherSettings {
        self.args = Some(args.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::LauncherSettings;
    use crate::error::LauncherError;

    #[test]
    fn missing_fields_are_reported_by_name() {
        let settings = LauncherSettings::new();
        assert_eq!(
            settings.application(),
            Err(LauncherError::MissingKey(String::from("application")))
        );
        assert_eq!(
            settings.retro_core(),
            Err(LauncherError::MissingKey(String::from("retro_core")))
        );
        assert_eq!(
            settings.retro_config(),
            Err(LauncherError::MissingKey(String::from("retro_config")))
        );
    }

    #[test]
    fn updates_return_new_record() {
        let settings = LauncherSettings::new()
            .with_application("/opt/retroarch")
            .with_config("/opt/retroarch/retroarch.cfg")
            .with_args("--verbose");

        assert_eq!(settings.application(), Ok("/opt/retroarch"));
        assert_eq!(settings.retro_config(), Ok("/opt/retroarch/retroarch.cfg"));
        assert_eq!(settings.extra_args(), Some("--verbose"));
    }

    #[test]
    fn empty_args_are_dropped() {
        let settings = LauncherSettings::new().with_args("");
        assert_eq!(settings.extra_args(), None);
    }
}
