use std::fmt::{self, Debug, Display, Formatter};

use derive_more::IsVariant;

use super::{Iter, IterMut, Link, Node, Nodes};
#[doc(inline)]
pub use crate::util::error::OutOfMemory;
use crate::util::result::ResultExtension;

/// A singly linked list, owning a chain of [`Node`]s through its head.
///
/// The list is nothing more than the owner of its first node: every operation works on `&mut self`
/// and repoints the head in place. Nodes can be detached with [`remove`](LinkedList::remove) and
/// spliced back in with [`insert`](LinkedList::insert), carrying their sub-chain with them.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes in the LinkedList.
/// - `k`: The number of nodes in a chain being inserted.
///
/// | Method | Complexity |
/// |-|-|
/// | `is_empty` | `O(1)` |
/// | `len` | `O(n)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(k)` |
/// | `remove` | `O(1)` |
/// | `filter` | `O(n)` |
/// | `to_array` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// The length isn't cached, because nodes can be detached and reattached by callers at any time.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
}

/// The result of [`LinkedList::pop`], separating an empty list from a vacant node.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Popped<T> {
    /// The list had no nodes.
    Empty,
    /// The head node was removed, but it didn't carry a payload.
    Vacant,
    /// The head node was removed and its payload is now owned by the caller.
    Value(T),
}

impl<T> Popped<T> {
    /// Converts into the popped payload, if there was one.
    pub fn value(self) -> Option<T> {
        match self {
            Popped::Value(value) => Some(value),
            Popped::Empty | Popped::Vacant => None,
        }
    }
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no nodes.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
        }
    }

    /// Returns true if the LinkedList contains no nodes.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes in the LinkedList, vacant ones included. This traverses the
    /// whole list.
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Returns a reference to the first node, if it exists.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns a mutable reference to the first node, if it exists.
    pub fn head_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }

    /// Returns a reference to the payload of the first node, if it has one.
    pub fn front(&self) -> Option<&T> {
        self.head().and_then(Node::value)
    }

    /// Returns a mutable reference to the payload of the first node, if it has one.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head_mut().and_then(Node::value_mut)
    }

    /// Add the provided value to the front of the LinkedList, taking ownership of it.
    pub fn push(&mut self, value: T) {
        self.push_node(Node::new(value));
    }

    /// Add a vacant node to the front of the LinkedList.
    pub fn push_vacant(&mut self) {
        self.push_node(Node::vacant());
    }

    fn push_node(&mut self, mut node: Node<T>) {
        node.next = self.head.take();
        self.head = Some(Box::new(node));
    }

    /// Removes the first node and hands its payload back to the caller. The node itself is
    /// released.
    pub fn pop(&mut self) -> Popped<T> {
        match self.remove() {
            None => Popped::Empty,
            Some(mut node) => match node.take_value() {
                Some(value) => Popped::Value(value),
                None => Popped::Vacant,
            },
        }
    }

    /// Splices `chain` in directly after the current head, so that it becomes the second element
    /// of the list onwards. The nodes that previously followed the head are reattached after the
    /// last node of `chain`.
    ///
    /// If this list is empty, `chain` becomes the whole list. Inserting an empty chain does
    /// nothing.
    ///
    /// ```
    /// # use cassava::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = ["a", "b", "c"].into_iter().collect();
    /// list.insert(["x", "y"].into_iter().collect());
    /// assert_eq!(list.to_array(), [&"a", &"x", &"y", &"b", &"c"]);
    /// ```
    pub fn insert(&mut self, mut chain: LinkedList<T>) {
        let Some(inserted) = chain.head.take() else {
            return;
        };

        match &mut self.head {
            None => self.head = Some(inserted),
            Some(head) => {
                let tail = head.take_next();

                let mut end = &mut head.next;
                *end = Some(inserted);
                while let Some(node) = end {
                    end = &mut node.next;
                }
                *end = tail;
            },
        }
    }

    /// Detaches the first node and returns it with its payload still attached. The returned node
    /// is unlinked from the rest of the list.
    pub fn remove(&mut self) -> Option<Box<Node<T>>> {
        let mut node = self.head.take()?;
        self.head = node.take_next();
        Some(node)
    }

    /// Retains only the nodes whose payload satisfies `predicate`, keeping their original order.
    /// Rejected nodes are dropped together with their payloads. Vacant nodes are always rejected.
    ///
    /// Returns the number of nodes retained.
    pub fn filter<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        match self.try_filter(|value| Ok::<_, std::convert::Infallible>(predicate(value))) {
            Ok(retained) => retained,
            Err(never) => match never {},
        }
    }

    /// A fallible version of [`filter`](LinkedList::filter).
    ///
    /// If `predicate` returns an [`Err`], filtering stops and the error is returned. Nodes rejected
    /// before that point have already been dropped and are not restored; the node being tested
    /// and every node after it are kept as they were.
    pub fn try_filter<E, F>(&mut self, mut predicate: F) -> Result<usize, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        let mut remaining = self.head.take();
        let mut retained = 0;
        let mut end = &mut self.head;

        while let Some(mut node) = remaining {
            remaining = node.take_next();

            let verdict = match &node.value {
                Some(value) => predicate(value),
                None => Ok(false),
            };

            match verdict {
                Ok(true) => {
                    end = &mut end.insert(node).next;
                    retained += 1;
                },
                Ok(false) => drop(node),
                Err(error) => {
                    node.next = remaining;
                    *end = Some(node);
                    return Err(error);
                },
            }
        }

        Ok(retained)
    }

    /// Releases every node, handing back any payloads that haven't already been taken, in list
    /// order. The list is empty afterwards.
    pub fn free_nodes(&mut self) -> Vec<T> {
        let mut values = Vec::new();
        while let Some(mut node) = self.remove() {
            values.extend(node.take_value());
        }
        values
    }

    /// Drops every node along with its payload. Calling this on an empty list does nothing.
    pub fn clear(&mut self) {
        // Node's drop unlinks the chain iteratively.
        self.head = None;
    }

    /// Collects references to every payload into a new array, in list order. Vacant nodes are
    /// skipped. The payloads stay owned by the list, which is borrowed for as long as the array
    /// is in use.
    ///
    /// # Panics
    /// Panics if the array can't be allocated.
    pub fn to_array(&self) -> Vec<&T> {
        self.try_to_array().throw()
    }

    /// Collects references to every payload into a new array, returning an [`Err`] if the
    /// allocation fails rather than panicking.
    pub fn try_to_array(&self) -> Result<Vec<&T>, OutOfMemory> {
        let count = self.iter().count();
        let mut array = Vec::new();
        array.try_reserve_exact(count)?;
        array.extend(self.iter());
        Ok(array)
    }

    /// Reverses the order of the nodes in place.
    pub fn reverse(&mut self) {
        let mut remaining = self.head.take();
        while let Some(mut node) = remaining {
            remaining = node.take_next();
            node.next = self.head.take();
            self.head = Some(node);
        }
    }

    /// Returns an iterator over the payloads of the list, skipping vacant nodes.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the payloads, skipping vacant nodes.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over every node, vacant ones included.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            next: self.head(),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if any node holds a payload equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> From<Node<T>> for LinkedList<T> {
    fn from(node: Node<T>) -> Self {
        Box::new(node).into()
    }
}

impl<T> From<Box<Node<T>>> for LinkedList<T> {
    fn from(node: Box<Node<T>>) -> Self {
        LinkedList {
            head: Some(node),
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    /// Builds a list in iteration order, so the first item becomes the head.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends every item to the end of the list, in iteration order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut end = &mut self.head;
        while let Some(node) = end {
            end = &mut node.next;
        }
        for value in iter {
            end = &mut end.insert(Box::new(Node::new(value))).next;
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::new();
        let mut end = &mut list.head;
        for node in self.nodes() {
            let copy = Node {
                value: node.value.clone(),
                next: None,
            };
            end = &mut end.insert(Box::new(copy)).next;
        }
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().map(Node::value).eq(other.nodes().map(Node::value))
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.nodes().map(Node::value).collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, node) in self.nodes().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            match node.value() {
                Some(value) => write!(f, "({value:?})")?,
                None => write!(f, "()")?,
            }
        }
        Ok(())
    }
}
