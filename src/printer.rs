//! Print Driver
//!
//! [`Printer`] sequences a list of erased renderable values: separator
//! strictly between consecutive top-level arguments, terminator once at
//! the end, optional flush. The same options instance governs the
//! separators inside any composite value rendered along the way.

use std::mem;

use crate::emitter::{Emitter, StdoutEmitter, StringEmitter};
use crate::options::PrintOptions;
use crate::render::Render;

/// Drives a print call against a sink.
///
/// Generic over the emitter so the same driver serves stdout, string
/// capture, and arbitrary writers. Defaults to stdout with default
/// options, matching the bare `print(...)` convention.
pub struct Printer<E: Emitter = StdoutEmitter> {
    emitter: E,
    options: PrintOptions,
}

impl Printer<StdoutEmitter> {
    /// Create a printer writing to stdout with default options.
    pub fn new() -> Self {
        Self::with_emitter(StdoutEmitter::new())
    }

    /// Create a printer writing to stdout with custom options.
    pub fn with_options(options: PrintOptions) -> Self {
        Self::with_emitter_and_options(StdoutEmitter::new(), options)
    }
}

impl Default for Printer<StdoutEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> Printer<E> {
    /// Create a printer with a specific emitter and default options.
    pub fn with_emitter(emitter: E) -> Self {
        Self::with_emitter_and_options(emitter, PrintOptions::default())
    }

    /// Create a printer with a specific emitter and options.
    pub fn with_emitter_and_options(emitter: E, options: PrintOptions) -> Self {
        Self { emitter, options }
    }

    /// Get the active options.
    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Render each value with the separator strictly between
    /// consecutive arguments, then write the terminator once, then
    /// flush if the options ask for it.
    ///
    /// Zero values renders nothing but still writes the terminator.
    pub fn print(&mut self, values: &[&dyn Render]) {
        let mut first = true;
        for value in values {
            if !mem::take(&mut first) {
                self.emitter.emit(&self.options.sep);
            }
            value.render(&mut self.emitter, &self.options);
        }
        self.emitter.emit(&self.options.end);
        if self.options.flush {
            self.emitter.flush();
        }
    }

    /// Get a reference to the underlying emitter.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Get a mutable reference to the underlying emitter.
    pub fn emitter_mut(&mut self) -> &mut E {
        &mut self.emitter
    }

    /// Consume the printer and return its emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }
}

impl Printer<StringEmitter> {
    /// Get everything printed so far.
    pub fn output(self) -> String {
        self.emitter.output()
    }

    /// Get everything printed so far without consuming.
    pub fn as_str(&self) -> &str {
        self.emitter.as_str()
    }
}
