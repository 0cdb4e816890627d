use std::iter::FusedIterator;

use super::{LinkedList, Node, Popped};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // The iterator just holds the list and pops from the front, skipping vacant nodes.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.list.pop() {
                Popped::Empty => break None,
                Popped::Vacant => continue,
                Popped::Value(value) => break Some(value),
            }
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: self.head(),
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next {
            self.next = node.next();
            if let Some(value) = node.value() {
                return Some(value);
            }
        }
        None
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            next: self.head_mut(),
        }
    }
}

pub struct IterMut<'a, T> {
    pub(crate) next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next.take() {
            self.next = node.next.as_deref_mut();
            if let Some(value) = node.value.as_mut() {
                return Some(value);
            }
        }
        None
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// An iterator over every [`Node`] of a [`LinkedList`], including vacant ones.
pub struct Nodes<'a, T> {
    pub(crate) next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        Some(node)
    }
}

impl<'a, T> FusedIterator for Nodes<'a, T> {}

impl<T> Clone for Nodes<'_, T> {
    fn clone(&self) -> Self {
        Nodes {
            next: self.next,
        }
    }
}
