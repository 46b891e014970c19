use std::fmt::Display;

/// Selectable key behind one catalog row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKey {
    /// Open a file browser.
    Browse,
    /// Type the path manually.
    Type,
    /// Concrete path on disk.
    Path(String),
}

impl Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            EntryKey::Browse => write!(f, "<browse>"),
            EntryKey::Type => write!(f, "<type>"),
            EntryKey::Path(path) => write!(f, "{}", path),
        }
    }
}

/// One row of a selection catalog presented by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: EntryKey,
    pub label: String,
}

impl CatalogEntry {
    pub fn browse(label: &str) -> CatalogEntry {
        CatalogEntry {
            key: EntryKey::Browse,
            label: String::from(label),
        }
    }

    pub fn manual(label: &str) -> CatalogEntry {
        CatalogEntry {
            key: EntryKey::Type,
            label: String::from(label),
        }
    }

    pub fn path(path: String, label: String) -> CatalogEntry {
        CatalogEntry {
            key: EntryKey::Path(path),
            label,
        }
    }
}
