use std::io::{self, Write};

use super::{Matcher, PatternError, compile};
use crate::collections::linked::{LinkedList, Node};
use crate::util::error::OutOfMemory;
use crate::util::result::ResultExtension;

/// A LinkedList of owned strings, as produced by the directory listing functions.
pub type StrList = LinkedList<String>;

impl<S: AsRef<str>> LinkedList<S> {
    /// Writes every payload on a single line, separated by `sep`, followed by a newline. Nothing is
    /// written for a list without payloads.
    pub fn write_joined<W: Write + ?Sized>(&self, out: &mut W, sep: &str) -> io::Result<()> {
        let mut values = self.iter();
        let Some(first) = values.next() else {
            return Ok(());
        };

        out.write_all(first.as_ref().as_bytes())?;
        for value in values {
            out.write_all(sep.as_bytes())?;
            out.write_all(value.as_ref().as_bytes())?;
        }
        out.write_all(b"\n")
    }

    /// Prints every payload to stdout on a single line, separated by `sep`.
    pub fn print(&self, sep: &str) -> io::Result<()> {
        self.write_joined(&mut io::stdout().lock(), sep)
    }

    /// Writes every payload on its own line, each preceded by `prefix` if one is provided.
    pub fn write_lines<W: Write + ?Sized>(&self, out: &mut W, prefix: Option<&str>) -> io::Result<()> {
        let prefix = prefix.unwrap_or_default();
        for value in self.iter() {
            writeln!(out, "{prefix}{}", value.as_ref())?;
        }
        Ok(())
    }

    /// Prints every payload to stdout on its own line, each preceded by `prefix`.
    pub fn print_lines(&self, prefix: Option<&str>) -> io::Result<()> {
        self.write_lines(&mut io::stdout().lock(), prefix)
    }

    /// Returns the first node whose payload is exactly `needle`.
    pub fn search(&self, needle: &str) -> Option<&Node<S>> {
        self.nodes()
            .find(|node| node.value().is_some_and(|value| value.as_ref() == needle))
    }

    /// Concatenates every payload with `delim` between each pair, or returns [`None`] for a list
    /// without payloads.
    ///
    /// # Panics
    /// Panics if the joined string can't be allocated.
    pub fn join(&self, delim: &str) -> Option<String> {
        self.try_join(delim).throw()
    }

    /// Concatenates every payload with `delim` between each pair, returning an [`Err`] if the
    /// allocation fails rather than panicking.
    ///
    /// Exactly enough space is reserved for the result up front.
    pub fn try_join(&self, delim: &str) -> Result<Option<String>, OutOfMemory> {
        let (count, total) = self
            .iter()
            .fold((0_usize, 0_usize), |(count, total), value| {
                (count + 1, total + value.as_ref().len())
            });

        if count == 0 {
            return Ok(None);
        }
        let len = total + delim.len() * (count - 1);

        let mut joined = String::new();
        joined.try_reserve_exact(len)?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                joined.push_str(delim);
            }
            joined.push_str(value.as_ref());
        }
        debug_assert_eq!(joined.len(), len);

        Ok(Some(joined))
    }

    /// Retains only the payloads that `matcher` accepts, dropping the rest along with their nodes.
    /// Returns the number of nodes retained.
    ///
    /// If the matcher fails, filtering stops there. Nodes already rejected stay dropped, and the
    /// remainder of the list is left as it was.
    pub fn filter_matching<M: Matcher + ?Sized>(&mut self, matcher: &M) -> Result<usize, PatternError> {
        Ok(self.try_filter(|value| matcher.is_match(value.as_ref()))?)
    }

    /// Compiles `pattern` as a regular expression and retains only the payloads it matches. See
    /// [`filter_matching`](LinkedList::filter_matching).
    ///
    /// The list isn't touched if the pattern fails to compile.
    pub fn filter_regex(&mut self, pattern: &str) -> Result<usize, PatternError> {
        let regex = compile(pattern)?;
        self.filter_matching(&regex)
    }
}
