//! File-backed key-value store

use crate::domain::{format_entry, parse_line, ParsedLine, ASSIGNER};
use crate::error::{FlatconfError, Result};
use std::collections::{btree_map, BTreeMap};
use std::fs;
use std::path::{Path, PathBuf};

/// In-memory key-value store tied to the flat configuration file it was
/// read from. Entries are kept sorted by key, so iteration and the written
/// file are always in ascending key order.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Create an empty store with no backing file
    pub fn new() -> Self {
        ConfigStore::default()
    }

    /// Create a store populated from the file at the given path
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut store = ConfigStore::new();
        store.load(path)?;
        Ok(store)
    }

    /// Path of the file this store was last read from or written to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drop all entries and forget the backing file
    pub fn clear(&mut self) {
        self.path = PathBuf::new();
        self.entries.clear();
    }

    /// Replace the store contents with the entries parsed from the file at
    /// the given path.
    ///
    /// The store is cleared before the file is opened, so a failed read
    /// always leaves it empty with no backing file. Lines that carry no
    /// assigner are skipped with a warning on stderr and do not fail the
    /// load.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.clear();

        let contents = fs::read_to_string(path).map_err(|source| FlatconfError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        self.path = path.to_path_buf();

        // Split on '\n' only: values read from CRLF files keep their
        // trailing '\r' and are written back with it intact.
        for line in contents.split('\n') {
            self.process_line(line);
        }

        Ok(())
    }

    fn process_line(&mut self, line: &str) {
        match parse_line(line) {
            ParsedLine::Ignored => {}
            ParsedLine::MissingAssigner => {
                eprintln!(
                    "flatconf: Can't find the assigner({}) in line: \"{}\" at \"{}\"",
                    ASSIGNER,
                    line,
                    self.path.display()
                );
            }
            ParsedLine::Entry { key, value } => {
                self.entries.insert(key.to_string(), value.to_string());
            }
        }
    }

    /// Write all entries to the file at the given path, replacing whatever
    /// it held. On success the store is re-bound to that path.
    pub fn write_file(&mut self, path: &Path) -> Result<()> {
        let mut rendered = String::new();
        for (key, value) in &self.entries {
            rendered.push_str(&format_entry(key, value));
        }

        fs::write(path, rendered).map_err(|source| FlatconfError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;

        self.path = path.to_path_buf();
        Ok(())
    }

    /// Write all entries back to the file the store is bound to.
    ///
    /// A store that was never loaded or written has an empty path, and the
    /// write fails like any other unwritable path.
    pub fn save_file(&mut self) -> Result<()> {
        let path = self.path.clone();
        self.write_file(&path)
    }

    /// Value stored under the given key, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Store a value under the given key, replacing any previous value
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Mutable access to the value under the given key, inserting an empty
    /// value first if the key is not present
    pub fn entry(&mut self, key: &str) -> &mut String {
        self.entries.entry(key.to_string()).or_default()
    }

    /// Iterate over all entries in ascending key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConfigStore {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
