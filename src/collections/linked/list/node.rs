use std::mem;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

// NOTE: Each node owns the next one through a Box, so the whole chain has exactly one owner: the
// LinkedList holding the head. Detached nodes are handed out as Box<Node<T>> and carry whatever
// sub-chain they still point to.

/// A single cell of a [`LinkedList`](super::LinkedList), owning one (optional) payload and the
/// rest of the chain after it.
///
/// A node without a payload is *vacant*. Vacant nodes count towards the length of a list, but are
/// invisible to iteration, [`to_array`](super::LinkedList::to_array) and the string helpers.
pub struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a node holding `value`, with nothing after it.
    pub const fn new(value: T) -> Node<T> {
        Node {
            value: Some(value),
            next: None,
        }
    }

    /// Creates a vacant node, with no payload and nothing after it.
    pub const fn vacant() -> Node<T> {
        Node {
            value: None,
            next: None,
        }
    }

    /// Returns true if this node carries no payload.
    pub const fn is_vacant(&self) -> bool {
        self.value.is_none()
    }

    /// Returns a reference to the payload, if there is one.
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns a mutable reference to the payload, if there is one.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Takes ownership of the payload, leaving the node vacant.
    pub fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Stores `value` in this node, returning the previous payload if there was one.
    pub fn replace_value(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Consumes the node and returns its payload. Any nodes still chained after this one are
    /// dropped along with it.
    pub fn into_value(mut self) -> Option<T> {
        self.value.take()
    }

    /// Returns the node following this one, if any.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Returns the node following this one mutably, if any.
    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    pub(crate) fn take_next(&mut self) -> Link<T> {
        mem::take(&mut self.next)
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Unlink iteratively, otherwise dropping a long chain recurses once per node.
        let mut curr = self.take_next();
        while let Some(mut node) = curr {
            curr = node.take_next();
        }
    }
}
