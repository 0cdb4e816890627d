use derive_more::{Display, Error, From, IsVariant};
use libc::{EACCES, ELOOP, EMFILE, ENAMETOOLONG, ENFILE, ENOENT, ENOMEM, ENOTDIR, EOVERFLOW};

use crate::collections::linked::str_list::CompileError;
pub use crate::util::error::OutOfMemory;
pub use crate::util::fs::NulPathError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("search or read permission denied")]
pub struct PermissionError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("file metadata would overflow capacity")]
pub struct MetadataOverflowError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub i32);

/// Errors from opening or reading a directory.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, From, IsVariant)]
pub enum DirError {
    Permission(PermissionError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    FileCount(FileCountError),
    OOM(OutOfMemory),
    NulPath(NulPathError),
    Unexpected(UnexpectedError),
}

impl DirError {
    pub(crate) fn from_errno(errno: i32) -> DirError {
        match errno {
            EACCES =>          PermissionError.into(),
            ENOENT =>          MissingComponentError.into(),
            ENOTDIR =>         NonDirComponentError.into(),
            EMFILE | ENFILE => FileCountError.into(),
            ENOMEM =>          OutOfMemory.into(),
            e =>               UnexpectedError(e).into(),
        }
    }
}

/// Errors from reading the metadata of a path.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, From, IsVariant)]
pub enum StatError {
    Permission(PermissionError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    ExcessiveLinks(ExcessiveLinksError),
    PathLength(PathLengthError),
    MetadataOverflow(MetadataOverflowError),
    OOM(OutOfMemory),
    NulPath(NulPathError),
    Unexpected(UnexpectedError),
}

impl StatError {
    pub(crate) fn from_errno(errno: i32) -> StatError {
        match errno {
            EACCES =>       PermissionError.into(),
            ENOENT =>       MissingComponentError.into(),
            ENOTDIR =>      NonDirComponentError.into(),
            ELOOP =>        ExcessiveLinksError.into(),
            ENAMETOOLONG => PathLengthError.into(),
            EOVERFLOW =>    MetadataOverflowError.into(),
            ENOMEM =>       OutOfMemory.into(),
            e =>            UnexpectedError(e).into(),
        }
    }
}

/// Errors from the listing functions which filter by pattern or by metadata.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, From, IsVariant)]
pub enum ListError {
    Dir(DirError),
    Stat(StatError),
    Pattern(CompileError),
}
