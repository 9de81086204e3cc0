//! `Queue` — a growable FIFO container backed by a ring buffer.
//!
//! The queue is independent of the graph core: breadth-first traversal is the
//! one in-crate consumer, but nothing here knows about vertices. Elements move
//! into queue-owned storage on `enqueue` and back out on `dequeue`, so the
//! queue never aliases caller memory beyond the call.
//!
//! Performance characteristics:
//! - `enqueue` / `dequeue`: O(1) amortized
//! - `peek`: O(1)

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A growable FIFO container.
///
/// ```
/// use trellis::collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("first");
/// queue.enqueue("second");
/// assert_eq!(queue.dequeue(), Some("first"));
/// assert_eq!(queue.dequeue(), Some("second"));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue sized for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a value at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the front element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns `true` exactly when the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements currently queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drops every element, keeping the backing storage.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    /// Consumes the queue, yielding elements front to back.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_round_trip() {
        let mut queue = Queue::new();
        for i in 0..5 {
            queue.enqueue(i);
        }
        for expected in 0..5 {
            assert_eq!(queue.dequeue(), Some(expected));
        }
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn dequeue_on_empty_is_none() {
        let mut queue: Queue<u8> = Queue::new();
        assert_eq!(queue.dequeue(), None);
        queue.enqueue(1);
        queue.dequeue();
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn peek_sees_the_front() {
        let mut queue = Queue::new();
        queue.enqueue(10);
        queue.enqueue(20);
        assert_eq!(queue.peek(), Some(&10));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn interleaved_operations() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert!(queue.is_empty());
    }
}
