use derive_more::{Display, Error, From, IsVariant};

/// A pattern couldn't be compiled into a matcher.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("invalid pattern: {message}")]
pub struct CompileError {
    pub message: String,
}

/// A matcher failed while testing some text. This is distinct from the text not matching.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("pattern matcher failed: {message}")]
pub struct MatchError {
    pub message: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq, From, IsVariant)]
pub enum PatternError {
    Compile(CompileError),
    Match(MatchError),
}
