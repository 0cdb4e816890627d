//! Helpers for observing when values are dropped.

use std::cell::Cell;
use std::rc::Rc;

/// A value which increments a shared counter when dropped. Clones share the counter, so a test can
/// hand many of these to a collection and check exactly how many were released.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a new CountedDrop with its own counter, starting at `value`.
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(value)))
    }

    /// Returns the number of drops recorded so far by any value sharing this counter.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
