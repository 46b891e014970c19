use glob::glob;
use log::{debug, warn};
use std::path::{Path, PathBuf};

use retrolaunch_core::platform::{Platform, ANDROID_CONFIG_FOLDERS, ANDROID_RETROARCH_FOLDERS};
use retrolaunch_core::CONFIG_EXT;

use crate::CatalogEntry;

const BROWSE_CONFIG_LABEL: &str = "Browse for configuration";
const TYPE_CONFIG_LABEL: &str = "Enter configuration path manually";

const BROWSE_APP_LABEL: &str = "Browse for Retroarch path";
const TYPE_APP_LABEL: &str = "Enter Retroarch path manually";

/// Directories searched for Retroarch configs, in priority order: the
/// configured application folder first, then the Android well-known
/// install locations when on Android.
pub fn candidate_config_dirs(application: Option<&str>, platform: Platform) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(app) = application {
        dirs.push(PathBuf::from(app));
    }
    if platform.is_android() {
        for folder in ANDROID_CONFIG_FOLDERS {
            dirs.push(PathBuf::from(folder));
        }
    }
    dirs
}

/// Selection list of Retroarch config files. The first candidate
/// directory with any recursive `.cfg` match wins; later candidates are
/// not merged in. Entries keep filesystem scan order.
pub fn list_available_configs(candidates: &[PathBuf]) -> Vec<CatalogEntry> {
    let mut entries = vec![
        CatalogEntry::browse(BROWSE_CONFIG_LABEL),
        CatalogEntry::manual(TYPE_CONFIG_LABEL),
    ];

    for dir in candidates {
        debug!("scanning path '{}'", dir.display());
        let found = scan_config_files(dir);
        if found.is_empty() {
            continue;
        }
        for path in found {
            debug!("adding config file '{}'", path.display());
            let label = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().into_owned(),
                None => continue,
            };
            entries.push(CatalogEntry::path(path.display().to_string(), label));
        }
        return entries;
    }

    entries
}

/// Retroarch application folder candidates offered to the host wizard:
/// the host-configured directory when it exists, plus the Android
/// well-known install folders present on disk.
pub fn application_folders(preset: Option<&str>, platform: Platform) -> Vec<CatalogEntry> {
    let mut entries = vec![
        CatalogEntry::browse(BROWSE_APP_LABEL),
        CatalogEntry::manual(TYPE_APP_LABEL),
    ];

    if let Some(dir) = preset {
        if !dir.is_empty() && Path::new(dir).is_dir() {
            debug!("preset Retroarch directory: {}", dir);
            entries.push(CatalogEntry::path(String::from(dir), String::from(dir)));
        }
    }

    if platform.is_android() {
        for folder in ANDROID_RETROARCH_FOLDERS {
            if Path::new(folder).is_dir() {
                debug!("preset Retroarch directory: {}", folder);
                entries.push(CatalogEntry::path(String::from(folder), String::from(folder)));
            }
        }
    }

    entries
}

fn scan_config_files(dir: &Path) -> Vec<PathBuf> {
    let pattern = dir.join("**").join(format!("*.{}", CONFIG_EXT));
    let mut found = Vec::new();

    match pattern.to_str() {
        Some(pattern) => match glob(pattern) {
            Ok(matches) => {
                for m in matches {
                    match m {
                        Ok(path) => found.push(path),
                        Err(e) => warn!("error getting path: {}", e),
                    }
                }
            }
            Err(e) => warn!("bad scan pattern: {}", e),
        },
        None => warn!("path is not valid UTF-8: {}", dir.display()),
    }

    found
}
