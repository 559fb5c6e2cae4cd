//! Sequence Rendering
//!
//! [`Render`] implementations for the iterable std collections. Every
//! sequence renders as `[` + elements + `]`; map entries render as
//! `(key, value)` pairs through the tuple implementation.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use crate::emitter::Emitter;
use crate::options::PrintOptions;
use crate::render::{render_sequence, Render};

impl<T: Render> Render for [T] {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        render_sequence(self, out, options);
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        render_sequence(self, out, options);
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        render_sequence(self, out, options);
    }
}

impl<T: Render> Render for VecDeque<T> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        render_sequence(self, out, options);
    }
}

impl<T: Render> Render for LinkedList<T> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        render_sequence(self, out, options);
    }
}

impl<T: Render> Render for BTreeSet<T> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        render_sequence(self, out, options);
    }
}

// Iteration order is the hasher's; per-instance it is stable, so
// repeated prints of the same set stay byte-identical.
impl<T: Render, S> Render for HashSet<T, S> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        render_sequence(self, out, options);
    }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        render_sequence(self, out, options);
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        render_sequence(self, out, options);
    }
}
