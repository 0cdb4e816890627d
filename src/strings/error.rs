use derive_more::{Display, Error};

/// The offsets given to [`substr`](super::substr) don't describe a valid substring.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("invalid substring {start}..{end} of string with length {len}")]
pub struct SubstrError {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}
