//! Restricted Container Adapters
//!
//! [`Stack`] and [`Queue`] expose single-ended sequential access only:
//! push, extract-next, and a peek at the next accessible element.
//! Destructive extraction is their one iteration mechanism, so
//! rendering works on a private clone and the caller's original is
//! never drained. `std::collections::BinaryHeap` plays the priority
//! variant, yielding elements in descending order.

use std::collections::{BinaryHeap, VecDeque};
use std::mem;

use crate::emitter::Emitter;
use crate::options::PrintOptions;
use crate::render::Render;

/// Last-in-first-out adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push a value on top.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Peek at the top value.
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// Build a stack as if each element of the vector had been pushed
    /// in order, so the vector's last element ends up on top.
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// First-in-first-out adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Push a value at the back.
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove and return the front value.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Peek at the front value.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    /// Build a queue as if each element of the vector had been pushed
    /// in order, so the vector's first element is at the front.
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Emit `[` + extraction-order elements + `]` by draining a clone.
///
/// Emission order must exactly match extraction order, one element in
/// flight at a time.
fn render_drained<T: Render>(
    mut pop_next: impl FnMut() -> Option<T>,
    out: &mut dyn Emitter,
    options: &PrintOptions,
) {
    out.emit("[");
    let mut first = true;
    while let Some(value) = pop_next() {
        if !mem::take(&mut first) {
            out.emit(&options.sep);
        }
        value.render(out, options);
    }
    out.emit("]");
}

impl<T: Clone + Render> Render for Stack<T> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        let mut copy = self.clone();
        render_drained(|| copy.pop(), out, options);
    }
}

impl<T: Clone + Render> Render for Queue<T> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        let mut copy = self.clone();
        render_drained(|| copy.pop(), out, options);
    }
}

impl<T: Clone + Ord + Render> Render for BinaryHeap<T> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        let mut copy = self.clone();
        render_drained(|| copy.pop(), out, options);
    }
}
