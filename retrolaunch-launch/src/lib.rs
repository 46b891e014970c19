use log::debug;
use std::path::{Path, PathBuf};

use retrolaunch_core::error::LauncherError;
use retrolaunch_core::platform::{Platform, ANDROID_ACTIVITY_MANAGER, WINDOWS_BINARY};
use retrolaunch_core::{LauncherSettings, APPLICATION_KEY};

/// Activity started inside the Retroarch package.
pub const RETRO_ACTIVITY: &str = "com.retroarch.browser.retroactivity.RetroActivityFuture";
pub const INTENT_ACTION: &str = "android.intent.action.MAIN";
pub const INTENT_CATEGORY: &str = "android.intent.category.LAUNCHER";
/// FLAG_ACTIVITY_NEW_TASK | FLAG_ACTIVITY_RESET_TASK_IF_NEEDED
pub const INTENT_FLAGS: &str = "270532608";

/// Refresh rate hint passed to RetroActivity.
const REFRESH_RATE: &str = "60";

/// Platform-correct process invocation for one ROM. Produced fresh per
/// launch and handed to the host's executor, never spawned here.
#[derive(Debug, PartialEq, Eq)]
pub enum LaunchCommand {
    Desktop {
        executable: PathBuf,
        args: Vec<String>,
    },
    Android(AndroidIntent),
}

/// Intent fields for starting RetroActivity through the activity manager.
#[derive(Debug, PartialEq, Eq)]
pub struct AndroidIntent {
    pub executable: PathBuf,
    pub package: String,
    pub component: String,
    pub action: String,
    pub category: String,
    pub flags: String,
    /// Ordered key/value extras.
    pub extras: Vec<(String, String)>,
    /// Free-form extras text appended after the structured ones.
    pub raw_extras: Option<String>,
}

impl AndroidIntent {
    /// Argument vector for `am`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            String::from("start"),
            String::from("--user"),
            String::from("0"),
            String::from("-a"),
            self.action.clone(),
            String::from("-c"),
            self.category.clone(),
            String::from("-f"),
            self.flags.clone(),
            String::from("-n"),
            self.component.clone(),
        ];
        for (key, value) in &self.extras {
            args.push(String::from("-e"));
            args.push(key.clone());
            args.push(value.clone());
        }
        if let Some(raw) = &self.raw_extras {
            args.push(raw.clone());
        }
        args
    }
}

impl LaunchCommand {
    pub fn executable(&self) -> &Path {
        match self {
            LaunchCommand::Desktop { executable, .. } => executable,
            LaunchCommand::Android(intent) => &intent.executable,
        }
    }

    pub fn args(&self) -> Vec<String> {
        match self {
            LaunchCommand::Desktop { args, .. } => args.clone(),
            LaunchCommand::Android(intent) => intent.to_args(),
        }
    }
}

/// Build the launch invocation for a ROM from fully resolved settings.
/// Pure transform over strings, no filesystem or network access.
pub fn build(
    settings: &LauncherSettings,
    rom: &str,
    platform: Platform,
) -> Result<LaunchCommand, LauncherError> {
    match platform {
        Platform::Windows => desktop(settings, rom, Some(WINDOWS_BINARY)),
        Platform::Linux => desktop(settings, rom, None),
        Platform::Android => android(settings, rom),
        Platform::Other => Err(LauncherError::UnsupportedPlatform),
    }
}

fn desktop(
    settings: &LauncherSettings,
    rom: &str,
    binary: Option<&str>,
) -> Result<LaunchCommand, LauncherError> {
    let application = settings.application()?;
    let core = settings.retro_core()?;
    let config = settings.retro_config()?;

    // On Windows the application root holds retroarch.exe; on Linux the
    // configured path is the executable itself.
    let executable = match binary {
        Some(binary) => Path::new(application).join(binary),
        None => PathBuf::from(application),
    };
    debug!("launching '{}'", executable.display());

    let mut args = vec![
        String::from("-L"),
        String::from(core),
        String::from("-c"),
        String::from(config),
        String::from(rom),
    ];
    if let Some(extra) = settings.extra_args() {
        // Appended verbatim, not tokenized.
        args.push(String::from(extra));
    }

    Ok(LaunchCommand::Desktop { executable, args })
}

fn android(settings: &LauncherSettings, rom: &str) -> Result<LaunchCommand, LauncherError> {
    let application = settings.application()?;
    let core = settings.retro_core()?;
    let config = settings.retro_config()?;

    // The installed package identifier is the last non-empty segment of
    // the configured application root.
    let package = application
        .split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .ok_or_else(|| LauncherError::MissingKey(String::from(APPLICATION_KEY)))?;
    let component = format!("{}/{}", package, RETRO_ACTIVITY);
    debug!("launching intent '{}'", component);

    let extras = vec![
        (String::from("ROM"), String::from(rom)),
        (String::from("LIBRETRO"), String::from(core)),
        (String::from("CONFIGFILE"), String::from(config)),
        (String::from("REFRESH"), String::from(REFRESH_RATE)),
    ];

    Ok(LaunchCommand::Android(AndroidIntent {
        executable: PathBuf::from(ANDROID_ACTIVITY_MANAGER),
        package: String::from(package),
        component,
        action: String::from(INTENT_ACTION),
        category: String::from(INTENT_CATEGORY),
        flags: String::from(INTENT_FLAGS),
        extras,
        raw_extras: settings.extra_args().map(String::from),
    }))
}

#[cfg(test)]
mod tests {
    use super::{build, LaunchCommand};
    use retrolaunch_core::error::LauncherError;
    use retrolaunch_core::platform::Platform;
    use retrolaunch_core::LauncherSettings;
    use std::path::PathBuf;

    fn desktop_settings() -> LauncherSettings {
        let mut settings = LauncherSettings::new()
            .with_application("/opt/retroarch")
            .with_config("/opt/retroarch/retroarch.cfg");
        settings.retro_core = Some(String::from("/opt/retroarch/cores/mame_libretro.so"));
        settings
    }

    #[test]
    fn linux_argument_order() {
        let command = build(&desktop_settings(), "game.zip", Platform::Linux).unwrap();
        match command {
            LaunchCommand::Desktop { executable, args } => {
                assert_eq!(executable, PathBuf::from("/opt/retroarch"));
                assert_eq!(
                    args,
                    vec![
                        "-L",
                        "/opt/retroarch/cores/mame_libretro.so",
                        "-c",
                        "/opt/retroarch/retroarch.cfg",
                        "game.zip"
                    ]
                );
            }
            LaunchCommand::Android(_) => panic!("expected desktop command"),
        }
    }

    #[test]
    fn windows_appends_binary_name() {
        let mut settings = desktop_settings();
        settings.retro_core = Some(String::from("C:/RetroArch/cores/mame_libretro.dll"));
        settings.application = Some(String::from("C:/RetroArch"));

        let command = build(&settings, "game.zip", Platform::Windows).unwrap();
        assert_eq!(
            command.executable(),
            PathBuf::from("C:/RetroArch").join("retroarch.exe")
        );
    }

    #[test]
    fn extra_args_appended_verbatim() {
        let settings = desktop_settings().with_args("--fullscreen --set-shader off");
        let command = build(&settings, "game.zip", Platform::Linux).unwrap();
        assert_eq!(
            command.args().last().map(String::from),
            Some(String::from("--fullscreen --set-shader off"))
        );
    }

    #[test]
    fn android_intent_fields_and_extras_order() {
        let mut settings = LauncherSettings::new()
            .with_application("/data/data/com.retroarch/")
            .with_config("/storage/emulated/0/Android/data/com.retroarch/files/retroarch.cfg");
        settings.retro_core = Some(String::from(
            "/data/data/com.retroarch/cores/mame_libretro_android.so",
        ));

        let command = build(&settings, "superrom.zip", Platform::Android).unwrap();
        match command {
            LaunchCommand::Android(intent) => {
                assert_eq!(intent.executable, PathBuf::from("/system/bin/am"));
                assert_eq!(intent.package, "com.retroarch");
                assert_eq!(
                    intent.component,
                    "com.retroarch/com.retroarch.browser.retroactivity.RetroActivityFuture"
                );
                assert_eq!(intent.action, "android.intent.action.MAIN");
                assert_eq!(intent.category, "android.intent.category.LAUNCHER");
                assert_eq!(intent.flags, "270532608");
                let keys: Vec<&str> = intent.extras.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["ROM", "LIBRETRO", "CONFIGFILE", "REFRESH"]);
                assert_eq!(intent.extras[0].1, "superrom.zip");
                assert_eq!(
                    intent.extras[1].1,
                    "/data/data/com.retroarch/cores/mame_libretro_android.so"
                );
                assert_eq!(intent.extras[3].1, "60");
            }
            LaunchCommand::Desktop { .. } => panic!("expected android command"),
        }
    }

    #[test]
    fn android_activity_manager_argument_vector() {
        let mut settings = LauncherSettings::new()
            .with_application("/storage/emulated/0/Android/data/com.retroarch/")
            .with_config("/storage/emulated/0/Android/data/com.retroarch/files/retroarch.cfg");
        settings.retro_core = Some(String::from(
            "/data/data/com.retroarch/cores/mame_libretro_android.so",
        ));

        let command = build(&settings, "superrom.zip", Platform::Android).unwrap();
        let args = command.args();
        assert_eq!(args[0], "start");
        assert_eq!(&args[1..3], ["--user", "0"]);
        assert_eq!(&args[3..5], ["-a", "android.intent.action.MAIN"]);
        assert_eq!(&args[5..7], ["-c", "android.intent.category.LAUNCHER"]);
        assert_eq!(
            &args[9..11],
            [
                "-n",
                "com.retroarch/com.retroarch.browser.retroactivity.RetroActivityFuture"
            ]
        );
        assert!(args.windows(3).any(|w| w[0] == "-e"
            && w[1] == "LIBRETRO"
            && w[2] == "/data/data/com.retroarch/cores/mame_libretro_android.so"));
    }

    #[test]
    fn unsupported_platform_is_explicit() {
        let err = build(&desktop_settings(), "game.zip", Platform::Other).unwrap_err();
        assert_eq!(err, LauncherError::UnsupportedPlatform);
    }

    #[test]
    fn missing_core_is_missing_key() {
        let mut settings = desktop_settings();
        settings.retro_core = None;
        let err = build(&settings, "game.zip", Platform::Linux).unwrap_err();
        assert_eq!(err, LauncherError::MissingKey(String::from("retro_core")));
    }
}
