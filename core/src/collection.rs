//! Generic ordered container for printable items.
//!
//! A building block for homogeneous child lists: it keeps insertion
//! order, finds items by structural equality, and renders purely by
//! delegation without contributing a line of its own.

use std::fmt;
use std::slice;

use crate::render::Printable;

/// An owned, ordered, homogeneous list of nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item; insertion order is display order.
    pub fn add(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> Collection<T> {
    /// First item structurally equal to `target`, if any.
    pub fn find(&self, target: &T) -> Option<&T> {
        self.items.iter().find(|item| *item == target)
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Printable> Printable for Collection<T> {
    /// Pass-through: each item gets the collection's own prefix, and the
    /// last item closes the sibling group. The collection itself is
    /// invisible in the output.
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, _is_last: bool) -> fmt::Result {
        let count: usize = self.items.len();
        for (idx, item) in self.items.iter().enumerate() {
            item.render(out, prefix, idx + 1 == count)?;
        }
        Ok(())
    }
}
