use log::trace;
use std::collections::HashMap;
use std::path::Path;

use retrolaunch_core::error::LauncherError;

/// Flat `key = value` file as used by the Retroarch main config and the
/// per-core `.info` descriptors. Values stay text, any numeric or boolean
/// interpretation is up to the caller.
pub struct PropertyFile {
    values: HashMap<String, String>,
}

impl PropertyFile {
    /// Parse file contents. Lines without a separator and comment lines
    /// are skipped, these files are commonly hand-edited.
    pub fn parse(contents: &str) -> PropertyFile {
        let mut values = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('=') {
                Some((key, value)) => {
                    let key = key.trim();
                    if key.is_empty() {
                        continue;
                    }
                    values.insert(String::from(key), String::from(unquote(value.trim())));
                }
                None => trace!("skipping line without separator: '{}'", line),
            }
        }

        PropertyFile { values }
    }

    pub fn load(path: &Path) -> std::io::Result<PropertyFile> {
        let contents = std::fs::read_to_string(path)?;
        Ok(PropertyFile::parse(&contents))
    }

    /// Look up a key, a missing key is an explicit error so callers decide
    /// fallback behaviour themselves.
    pub fn get(&self, key: &str) -> Result<&str, LauncherError> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| LauncherError::MissingKey(String::from(key)))
    }

    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// Retroarch writes quoted values, hand-edited files may not. Strip one
// surrounding pair only.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyFile;
    use retrolaunch_core::error::LauncherError;

    #[test]
    fn parse_key_value_pairs() {
        let props = PropertyFile::parse("display_name = Nintendo (NES)\nauthors=Someone\n");
        assert_eq!(props.get("display_name"), Ok("Nintendo (NES)"));
        assert_eq!(props.get("authors"), Ok("Someone"));
    }

    #[test]
    fn values_are_trimmed_and_unquoted() {
        let props = PropertyFile::parse("libretro_directory = \":\\cores\"  \n");
        assert_eq!(props.get("libretro_directory"), Ok(":\\cores"));
    }

    #[test]
    fn unquoted_values_pass_through() {
        let props = PropertyFile::parse("libretro_directory = :\\cores\n");
        assert_eq!(props.get("libretro_directory"), Ok(":\\cores"));
    }

    #[test]
    fn value_may_contain_separator() {
        let props = PropertyFile::parse("args = -v --config=extra.cfg\n");
        assert_eq!(props.get("args"), Ok("-v --config=extra.cfg"));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let props = PropertyFile::parse("not a pair\n# comment = 1\n\nkey = value\n");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("key"), Ok("value"));
    }

    #[test]
    fn missing_key_is_an_error() {
        let props = PropertyFile::parse("key = value\n");
        assert_eq!(
            props.get("absent"),
            Err(LauncherError::MissingKey(String::from("absent")))
        );
        assert_eq!(props.try_get("absent"), None);
    }

    #[test]
    fn empty_value_is_kept() {
        let props = PropertyFile::parse("key =\n");
        assert_eq!(props.get("key"), Ok(""));
    }
}
