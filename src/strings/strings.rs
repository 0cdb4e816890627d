use super::SubstrError;

/// Concatenates all of `parts` into a new string, allocating exactly once.
pub fn concat(parts: &[&str]) -> String {
    concat_after("", parts)
}

/// Concatenates `first` followed by all of `parts` into a new string, allocating exactly once.
pub fn concat_after<S: AsRef<str>>(first: &str, parts: &[S]) -> String {
    let len = first.len() + parts.iter().map(|part| part.as_ref().len()).sum::<usize>();

    let mut joined = String::with_capacity(len);
    joined.push_str(first);
    for part in parts {
        joined.push_str(part.as_ref());
    }
    joined
}

/// Joins all of `parts` with `delim` between each pair, allocating exactly once. An empty `delim`
/// is the same as [`concat`].
pub fn join<S: AsRef<str>>(parts: &[S], delim: &str) -> String {
    if delim.is_empty() {
        return concat_after("", parts);
    }

    let len = parts.iter().map(|part| part.as_ref().len()).sum::<usize>()
        + delim.len() * parts.len().saturating_sub(1);

    let mut joined = String::with_capacity(len);
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            joined.push_str(delim);
        }
        joined.push_str(part.as_ref());
    }
    joined
}

/// Returns the part of `input` from `start` up to (not including) `end`.
///
/// `start` must be before `end`, which must be before the end of `input`, and both must fall on
/// character boundaries.
pub fn substr(input: &str, start: usize, end: usize) -> Result<&str, SubstrError> {
    if start < end && end < input.len() {
        if let Some(sub) = input.get(start..end) {
            return Ok(sub);
        }
    }
    Err(SubstrError { start, end, len: input.len() })
}

/// Returns true if `child` is a prefix of `parent`. The empty string is a prefix of everything.
pub fn is_prefix(child: &str, parent: &str) -> bool {
    parent.as_bytes().starts_with(child.as_bytes())
}

/// Sorts `array` by byte value, which is the same order as the C locale.
pub fn sort<S: AsRef<str>>(array: &mut [S]) {
    array.sort_unstable_by(|a, b| a.as_ref().as_bytes().cmp(b.as_ref().as_bytes()));
}
