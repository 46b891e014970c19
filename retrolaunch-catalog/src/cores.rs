use log::{debug, trace, warn};
use std::path::{Path, PathBuf};

use retrolaunch_core::error::LauncherError;
use retrolaunch_core::platform::Platform;
use retrolaunch_core::problem::Problem;
use retrolaunch_core::{
    LauncherSettings, EXAMPLE_INFO, INFO_EXT, LIBRETRO_DIRECTORY_KEY, LIBRETRO_INFO_PATH_KEY,
};
use retrolaunch_props::PropertyFile;

use crate::paths;
use crate::CatalogEntry;

const BROWSE_CORE_LABEL: &str = "Manual enter path to core";

/// Parsed view of one `.info` descriptor. Read fresh on every scan,
/// never cached.
pub struct CoreDescriptor {
    pub display_name: Option<String>,
    pub supported_extensions: Option<String>,
    pub systemname: Option<String>,
    pub manufacturer: Option<String>,
}

impl CoreDescriptor {
    pub fn read(path: &Path) -> std::io::Result<CoreDescriptor> {
        let props = PropertyFile::load(path)?;
        Ok(CoreDescriptor {
            display_name: props.try_get("display_name").map(String::from),
            supported_extensions: props.try_get("supported_extensions").map(String::from),
            systemname: props.try_get("systemname").map(String::from),
            manufacturer: props.try_get("manufacturer").map(String::from),
        })
    }
}

/// Result of a core scan: the selection list plus the conditions the
/// caller may want to surface.
#[derive(Debug)]
pub struct CoreScan {
    pub entries: Vec<CatalogEntry>,
    pub warnings: Vec<Problem>,
}

// The two core directories named by a Retroarch config, resolved against
// the config's own directory.
struct CoreDirs {
    info_dir: PathBuf,
    core_dir: PathBuf,
}

fn configured_dirs(config_path: &Path) -> Result<CoreDirs, LauncherError> {
    if !config_path.is_file() {
        return Err(LauncherError::ConfigNotFound(
            config_path.display().to_string(),
        ));
    }
    let config = PropertyFile::load(config_path)
        .map_err(|_| LauncherError::ConfigNotFound(config_path.display().to_string()))?;
    let parent = config_path.parent().unwrap_or_else(|| Path::new("."));

    Ok(CoreDirs {
        info_dir: paths::resolve_configured_path(config.get(LIBRETRO_INFO_PATH_KEY)?, parent),
        core_dir: paths::resolve_configured_path(config.get(LIBRETRO_DIRECTORY_KEY)?, parent),
    })
}

/// Scan the descriptor folder named by a Retroarch config and return the
/// selectable cores, sorted by display label with the browse sentinel
/// pinned first.
///
/// The scan is descriptor-driven: Retroarch on Android keeps its core
/// binaries inside the app sandbox where they cannot be read, so on
/// Android a descriptor is accepted without checking for its binary. On
/// every other platform a descriptor without a matching binary is skipped
/// with a warning.
pub fn list_available_cores(
    config_path: &Path,
    platform: Platform,
) -> Result<CoreScan, LauncherError> {
    let dirs = configured_dirs(config_path)?;
    if !dirs.info_dir.is_dir() {
        return Err(LauncherError::InfoFolderNotFound(
            dirs.info_dir.display().to_string(),
        ));
    }

    debug!("scanning path '{}'", dirs.info_dir.display());
    let extension = platform.core_extension();
    let mut warnings = Vec::new();
    let mut found: Vec<(String, String)> = Vec::new();

    let entries = std::fs::read_dir(&dirs.info_dir)
        .map_err(|_| LauncherError::InfoFolderNotFound(dirs.info_dir.display().to_string()))?;
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("error getting path: {}", e);
                continue;
            }
        };
        if !has_extension(&path, INFO_EXT) {
            continue;
        }
        let stem = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };
        if stem == EXAMPLE_INFO {
            continue;
        }
        trace!("adding core using info '{}'", path.display());

        if !platform.is_android() {
            let core = paths::descriptor_to_core(&path, &dirs.core_dir, extension, platform);
            if !core.is_file() {
                warnings.push(Problem::warn(format!(
                    "Cannot find '{}'. Skipping info '{}'",
                    core.display(),
                    path.display()
                )));
                continue;
            }
            debug!("using core '{}'", core.display());
        }

        let label = match CoreDescriptor::read(&path) {
            Ok(descriptor) => match descriptor.display_name {
                Some(name) => name,
                None => {
                    warnings.push(Problem::warn(format!(
                        "Cannot read display name for core {}",
                        stem
                    )));
                    stem
                }
            },
            Err(e) => {
                warnings.push(Problem::warn(format!(
                    "Cannot read descriptor {}: {}",
                    path.display(),
                    e
                )));
                stem
            }
        };
        found.push((path.display().to_string(), label));
    }

    Ok(CoreScan {
        entries: sorted_entries(found),
        warnings,
    })
}

// Stable sort by label, scan order breaks ties; the browse sentinel is
// pinned first.
fn sorted_entries(mut found: Vec<(String, String)>) -> Vec<CatalogEntry> {
    found.sort_by(|a, b| a.1.cmp(&b.1));

    let mut entries = Vec::with_capacity(found.len() + 1);
    entries.push(CatalogEntry::browse(BROWSE_CORE_LABEL));
    entries.extend(
        found
            .into_iter()
            .map(|(path, label)| CatalogEntry::path(path, label)),
    );
    entries
}

/// Apply a core choice to the settings record and return the updated
/// record. A choice that is already a core binary path only sets
/// `retro_core`; a descriptor path additionally resolves the binary via
/// the naming convention and fills the metadata fields from the
/// descriptor.
pub fn apply_core_selection(
    settings: LauncherSettings,
    choice: &str,
    platform: Platform,
) -> Result<LauncherSettings, LauncherError> {
    let extension = platform.core_extension();
    if choice.ends_with(&format!(".{}", extension)) {
        debug!("choice '{}' is a core binary", choice);
        // A typed binary path lands in both fields so the pair stays
        // consistent, replacing any previously selected descriptor.
        let mut settings = settings;
        settings.retro_core = Some(String::from(choice));
        settings.retro_core_info = Some(String::from(choice));
        return Ok(settings);
    }

    let dirs = configured_dirs(Path::new(settings.retro_config()?))?;
    let info_path = Path::new(choice);
    let core = paths::descriptor_to_core(info_path, &dirs.core_dir, extension, platform);
    let descriptor = CoreDescriptor::read(info_path)
        .map_err(|_| LauncherError::DescriptorNotFound(String::from(choice)))?;
    debug!("selected core '{}'", core.display());

    let mut settings = settings;
    settings.retro_core_info = Some(String::from(choice));
    settings.retro_core = Some(core.display().to_string());
    settings.platform = descriptor.systemname.clone();
    settings.name = descriptor.systemname;
    settings.developer = descriptor.manufacturer;
    settings.romext = descriptor.supported_extensions;
    Ok(settings)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    match path.extension() {
        Some(ext) => ext.to_string_lossy() == wanted,
        None => false,
    }
}
