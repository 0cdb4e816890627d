use std::fs;
use std::path::Path;

use super::{ConfigError, InvalidKeyError, InvalidLineError, OpenError, UnsortedKeysError};

/// What to do when a line can't be stored into the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnInvalid {
    /// Stop parsing and return the error.
    Fail,
    /// Log a warning and carry on with the next line.
    #[default]
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: Option<String>,
}

/// A sorted table of the keys a configuration file may set, along with any values read so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTable {
    entries: Vec<ConfigEntry>,
}

impl ConfigTable {
    /// Creates a table for the provided keys, which must be in strictly increasing (byte-wise)
    /// order.
    pub fn new<I, K>(keys: I) -> Result<ConfigTable, UnsortedKeysError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut entries: Vec<ConfigEntry> = Vec::new();
        for key in keys {
            let key = key.into();
            if entries.last().is_some_and(|last| last.key.as_bytes() >= key.as_bytes()) {
                return Err(UnsortedKeysError { key });
            }
            entries.push(ConfigEntry { key, value: None });
        }
        Ok(ConfigTable { entries })
    }

    /// Returns the value most recently stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.find(key)
            .and_then(|index| self.entries[index].value.as_deref())
    }

    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// Reads the file at `path` and stores every assignment it contains.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P, on_invalid: OnInvalid) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let source = fs::read_to_string(path).map_err(|source| OpenError {
            path: origin.clone(),
            source,
        })?;

        self.parse_str(&origin, &source, on_invalid)
    }

    /// Stores every assignment in `source`. `origin` names the source in errors and warnings.
    ///
    /// Later assignments to the same key replace earlier ones.
    pub fn parse_str(&mut self, origin: &str, source: &str, on_invalid: OnInvalid) -> Result<(), ConfigError> {
        for (index, line) in source.lines().enumerate() {
            match self.parse_line(origin, index + 1, line) {
                Ok(()) => {},
                Err(error) if on_invalid == OnInvalid::Skip => log::warn!("{error}"),
                Err(error) => return Err(error),
            }
        }
        Ok(())
    }

    fn parse_line(&mut self, origin: &str, number: usize, line: &str) -> Result<(), ConfigError> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(InvalidLineError {
                origin: origin.to_owned(),
                number,
                line: line.to_owned(),
            }.into());
        };
        let key = key.trim_end();

        let Some(index) = self.find(key) else {
            return Err(InvalidKeyError {
                origin: origin.to_owned(),
                number,
                key: key.to_owned(),
            }.into());
        };

        log::debug!("{origin}:{number}: {key} set");
        self.entries[index].value = Some(value.trim().to_owned());
        Ok(())
    }

    fn find(&self, key: &str) -> Option<usize> {
        self.entries
            .binary_search_by(|entry| entry.key.as_bytes().cmp(key.as_bytes()))
            .ok()
    }
}
