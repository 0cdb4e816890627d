use std::io;

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error)]
#[display("could not open configuration file '{path}': {source}")]
pub struct OpenError {
    pub path: String,
    pub source: io::Error,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("invalid line {number} in configuration file '{origin}': '{line}'")]
pub struct InvalidLineError {
    pub origin: String,
    pub number: usize,
    pub line: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("invalid key on line {number} in configuration file '{origin}': '{key}'")]
pub struct InvalidKeyError {
    pub origin: String,
    pub number: usize,
    pub key: String,
}

/// The keys given to a [`ConfigTable`](super::ConfigTable) weren't strictly increasing.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("configuration keys must be sorted and unique, found '{key}' out of place")]
pub struct UnsortedKeysError {
    pub key: String,
}

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum ConfigError {
    Open(OpenError),
    InvalidLine(InvalidLineError),
    InvalidKey(InvalidKeyError),
}
