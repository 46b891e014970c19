use clap::Parser;
use log::{debug, warn};
use std::error::Error;
use std::path::{Path, PathBuf};

use retrolaunch_catalog::{configs, cores, CatalogEntry};
use retrolaunch_core::platform::Platform;
use retrolaunch_core::LauncherSettings;
use retrolaunch_launch::LaunchCommand;

#[derive(clap::Parser)]
#[clap(name = "retrolaunch")]
#[clap(version = "0.1")]
#[clap(about = "Retroarch launcher configuration tool")]
#[clap(
    long_about = "Discovers Retroarch configs and cores for a launcher \
                  settings file and prints the platform-correct launch \
                  invocation for a ROM."
)]
struct Context {
    /// Verbosity
    #[clap(short, long)]
    verbose: bool,
    /// Trace level verbosity
    #[clap(short, long)]
    trace: bool,
    /// Override platform detection (windows, linux, android)
    #[clap(short, long)]
    platform: Option<Platform>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// List the selectable cores for the configured Retroarch config
    Cores {
        /// Launcher settings file (TOML)
        settings: PathBuf,
    },
    /// List the Retroarch config files found on this system
    Configs {
        /// Launcher settings file (TOML)
        settings: PathBuf,
    },
    /// List candidate Retroarch application folders
    Folders {
        /// Launcher settings file (TOML)
        settings: PathBuf,
    },
    /// Apply a core choice and print the updated settings
    SelectCore {
        /// Launcher settings file (TOML)
        settings: PathBuf,
        /// Core descriptor path, or a core binary path
        choice: String,
    },
    /// Print the process invocation for a ROM
    Launch {
        /// Launcher settings file (TOML)
        settings: PathBuf,
        /// ROM path handed to Retroarch
        rom: String,
    },
}

// Settings persistence stays host-side; the tool only reads the record.
fn load_settings(path: &Path) -> Result<LauncherSettings, Box<dyn Error>> {
    let contents = std::fs::read_to_string(path)?;
    let value = contents.parse::<toml::Value>()?;

    let get = |key: &str| {
        value
            .get(key)
            .and_then(toml::Value::as_str)
            .map(String::from)
    };

    Ok(LauncherSettings {
        application: get("application"),
        retro_core: get("retro_core"),
        retro_core_info: get("retro_core_info"),
        retro_config: get("retro_config"),
        args: get("args"),
        romext: get("romext"),
        platform: get("platform"),
        developer: get("developer"),
        name: get("name"),
    })
}

fn print_entries(entries: &[CatalogEntry]) {
    for (index, entry) in entries.iter().enumerate() {
        println!("{:3}  {}  [{}]", index, entry.label, entry.key);
    }
}

fn list_cores(settings: &LauncherSettings, platform: Platform) {
    let config = match settings.retro_config() {
        Ok(config) => PathBuf::from(config),
        Err(e) => {
            warn!("{}. Change path first.", e);
            return;
        }
    };
    match cores::list_available_cores(&config, platform) {
        Ok(scan) => {
            for problem in &scan.warnings {
                problem.log();
            }
            print_entries(&scan.entries);
        }
        // Recoverable: surface the warning and show an empty catalog.
        Err(e) => {
            warn!("{}. Change path first.", e);
            print_entries(&[]);
        }
    }
}

fn list_configs(settings: &LauncherSettings, platform: Platform) {
    let candidates = configs::candidate_config_dirs(settings.application.as_deref(), platform);
    let entries = configs::list_available_configs(&candidates);
    print_entries(&entries);
}

fn list_folders(settings: &LauncherSettings, platform: Platform) {
    let entries = configs::application_folders(settings.application.as_deref(), platform);
    print_entries(&entries);
}

fn select_core(settings: LauncherSettings, choice: &str, platform: Platform) {
    match cores::apply_core_selection(settings, choice, platform) {
        Ok(updated) => println!("{:#?}", updated),
        Err(e) => warn!("{}", e),
    }
}

fn launch(settings: &LauncherSettings, rom: &str, platform: Platform) {
    match retrolaunch_launch::build(settings, rom, platform) {
        Ok(command) => {
            println!("{}", command.executable().display());
            for arg in command.args() {
                println!("  {}", arg);
            }
            if let LaunchCommand::Android(intent) = &command {
                debug!("intent component: {}", intent.component);
            }
        }
        // Recoverable: a no-op launch, the user fixes the settings and
        // triggers again.
        Err(e) => warn!("{}", e),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Context::parse();
    let level = if args.verbose || args.trace {
        if args.trace {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Debug
        }
    } else {
        log::LevelFilter::Info
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
        .unwrap();

    let platform = args.platform.unwrap_or_else(Platform::detect);
    debug!("platform: {}", platform);

    match args.command {
        Command::Cores { settings } => {
            let settings = load_settings(&settings)?;
            list_cores(&settings, platform);
        }
        Command::Configs { settings } => {
            let settings = load_settings(&settings)?;
            list_configs(&settings, platform);
        }
        Command::Folders { settings } => {
            let settings = load_settings(&settings)?;
            list_folders(&settings, platform);
        }
        Command::SelectCore { settings, choice } => {
            let settings = load_settings(&settings)?;
            select_core(settings, &choice, platform);
        }
        Command::Launch { settings, rom } => {
            let settings = load_settings(&settings)?;
            launch(&settings, &rom, platform);
        }
    }

    Ok(())
}
