pub mod error;
pub mod platform;
pub mod problem;

mod settings;

pub use settings::*;

/// Extension of the per-core descriptor files shipped with Retroarch.
pub const INFO_EXT: &str = "info";
/// Extension of Retroarch configuration files.
pub const CONFIG_EXT: &str = "cfg";

/// Template descriptor shipped alongside the real ones, never a usable core.
pub const EXAMPLE_INFO: &str = "00_example_libretro";

// Retroarch config keys naming the two parallel core directory trees.
pub const LIBRETRO_DIRECTORY_KEY: &str = "libretro_directory";
pub const LIBRETRO_INFO_PATH_KEY: &str = "libretro_info_path";

// Settings field names, used in missing-key reporting.
pub const APPLICATION_KEY: &str = "application";
pub const RETRO_CORE_KEY: &str = "retro_core";
pub const RETRO_CONFIG_KEY: &str = "retro_config";
