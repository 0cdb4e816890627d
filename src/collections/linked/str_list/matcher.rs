use regex::Regex;

use super::{CompileError, MatchError};

/// A compiled pattern which can decide whether some text matches it.
///
/// Matching returns a [`Result`] so that implementations backed by fallible engines can report
/// failures separately from a plain mismatch.
pub trait Matcher {
    fn is_match(&self, text: &str) -> Result<bool, MatchError>;
}

impl Matcher for Regex {
    fn is_match(&self, text: &str) -> Result<bool, MatchError> {
        Ok(Regex::is_match(self, text))
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn is_match(&self, text: &str) -> Result<bool, MatchError> {
        M::is_match(self, text)
    }
}

/// Compiles `pattern` into a [`Regex`], keeping the engine's message on failure.
pub fn compile(pattern: &str) -> Result<Regex, CompileError> {
    Regex::new(pattern).map_err(|error| CompileError {
        message: error.to_string(),
    })
}
