use std::path::{Path, PathBuf};

use retrolaunch_core::platform::{Platform, ANDROID_MARKER};
use retrolaunch_core::INFO_EXT;

// Pure path-string transforms relating the two parallel directory trees
// (core binaries and core descriptors). No filesystem access here.

/// Core binary path matching a descriptor. Android inserts the `_android`
/// marker before the extension, every other platform is a plain rename
/// into `core_dir`.
pub fn descriptor_to_core(
    descriptor: &Path,
    core_dir: &Path,
    extension: &str,
    platform: Platform,
) -> PathBuf {
    let stem = file_stem(descriptor);
    let name = if platform.is_android() {
        format!("{}{}.{}", stem, ANDROID_MARKER, extension)
    } else {
        format!("{}.{}", stem, extension)
    };
    core_dir.join(name)
}

/// Inverse of [`descriptor_to_core`]: descriptor path matching a core
/// binary, extension forced to `.info`.
pub fn core_to_descriptor(core: &Path, info_dir: &Path, platform: Platform) -> PathBuf {
    let stem = file_stem(core);
    let stem = if platform.is_android() {
        stem.strip_suffix(ANDROID_MARKER).unwrap_or(stem.as_str())
    } else {
        stem.as_str()
    };
    info_dir.join(format!("{}.{}", stem, INFO_EXT))
}

/// Interpret a directory value from a Retroarch config. A value starting
/// with the two-character marker `:\` is relative to the config's own
/// directory, anything else is already absolute.
pub fn resolve_configured_path(raw: &str, parent: &Path) -> PathBuf {
    match raw.strip_prefix(":\\") {
        Some(relative) => parent.join(relative),
        None => PathBuf::from(raw),
    }
}

fn file_stem(path: &Path) -> String {
    match path.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => String::new(),
    }
}
