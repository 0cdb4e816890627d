use derive_more::{Display, Error};

/// An index was outside of the bounds of a collection.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

/// The allocator refused to provide enough memory for an operation.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("out of memory")]
pub struct OutOfMemory;

impl From<std::collections::TryReserveError> for OutOfMemory {
    fn from(_: std::collections::TryReserveError) -> Self {
        OutOfMemory
    }
}
