//! Singly linked collection types. Primarily revolves around [`LinkedList`] and the [`Node`]s it
//! owns, with string-specific helpers layered on top in [`str_list`].

pub mod list;
pub mod str_list;

#[doc(inline)]
pub use list::{LinkedList, Node, Popped};
#[doc(inline)]
pub use str_list::{Matcher, PatternError, StrList};
