//! `Stack` — a growable, array-backed LIFO container.
//!
//! The stack owns value copies of everything pushed into it: `push` moves the
//! element into stack-owned storage and `pop` moves it back out, so the stack
//! never aliases caller memory beyond the call. Capacity starts at a small
//! constant and doubles on exhaustion, amortizing reallocation cost across
//! insertions.
//!
//! Performance characteristics:
//! - `push`: O(1) amortized (geometric growth)
//! - `pop` / `peek`: O(1)
//! - `clear`: O(n) drops, storage retained

use serde::{Deserialize, Serialize};

/// Capacity a stack starts with before the first growth event.
pub const INITIAL_CAPACITY: usize = 10;

/// Multiplier applied to capacity when the stack is full.
pub const GROWTH_FACTOR: usize = 2;

/// A growable LIFO container.
///
/// ```
/// use trellis::collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with `INITIAL_CAPACITY` slots preallocated.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty stack sized for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes a value onto the top of the stack.
    ///
    /// When the stack is full its capacity is multiplied by `GROWTH_FACTOR`
    /// in a single reallocation, so a sequence of n pushes performs O(log n)
    /// reallocations total.
    pub fn push(&mut self, value: T) {
        let capacity = self.items.capacity();
        if self.items.len() == capacity {
            let target = if capacity == 0 {
                INITIAL_CAPACITY
            } else {
                capacity * GROWTH_FACTOR
            };
            self.items.reserve_exact(target - self.items.len());
        }
        self.items.push(value);
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns `true` exactly when the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of elements the stack can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drops every element, keeping the backing storage.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the stack, yielding elements bottom to top.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
