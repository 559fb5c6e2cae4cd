//! Output Emitter
//!
//! Abstraction for the output sink a print call writes to.
//! Supports string building for in-memory capture and streaming to
//! standard output or any writer.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

/// Trait for emitting rendered output.
///
/// The formatter and the print driver write to an emitter. Different
/// implementations support in-memory strings, standard output, or any
/// other destination. Emission is infallible by contract: writer-backed
/// emitters swallow I/O errors during emit, and callers that care check
/// an explicit finish path instead.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit formatted arguments without an intermediate allocation
    /// where the sink supports it.
    fn emit_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.emit(&args.to_string());
    }

    /// Force any sink-level buffering out to the destination.
    fn flush(&mut self) {}
}

/// String-based emitter for in-memory rendering.
///
/// This is the primary emitter used by tests and by the `format_values`
/// convenience function. It builds a string incrementally and provides
/// the result.
#[derive(Debug, Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the current length of the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_fmt(&mut self, args: fmt::Arguments<'_>) {
        // Writing to a String cannot fail.
        let _ = self.buffer.write_fmt(args);
    }
}

/// Emitter that writes to process standard output.
///
/// This is the default sink of a [`Printer`](crate::Printer). Each emit
/// locks stdout for the duration of the write; callers needing atomicity
/// across a whole print call from multiple threads must serialize at a
/// higher level.
#[derive(Debug, Default)]
pub struct StdoutEmitter;

impl StdoutEmitter {
    /// Create a new stdout emitter.
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for StdoutEmitter {
    fn emit(&mut self, text: &str) {
        // Ignore write errors during emit; stdout failures are not recoverable here
        let _ = io::stdout().lock().write_all(text.as_bytes());
    }

    fn emit_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = io::stdout().lock().write_fmt(args);
    }

    fn flush(&mut self) {
        let _ = io::stdout().lock().flush();
    }
}

/// Emitter backed by an arbitrary writer.
///
/// Writes pass straight through to the writer with no buffering of the
/// emitter's own; wrap the writer in a `BufWriter` before construction
/// if buffering is wanted.
#[derive(Debug)]
pub struct WriterEmitter<W: Write> {
    writer: W,
}

impl<W: Write> WriterEmitter<W> {
    /// Create a new writer-backed emitter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Flush the writer and return it, surfacing any error that occurred.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Emitter for WriterEmitter<W> {
    fn emit(&mut self, text: &str) {
        // Ignore write errors during emit; caller should check finish()
        let _ = self.writer.write_all(text.as_bytes());
    }

    fn emit_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.writer.write_fmt(args);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_emitter_basic() {
        let mut emitter = StringEmitter::new();
        emitter.emit("hello");
        emitter.emit(" ");
        emitter.emit("world");
        assert_eq!(emitter.output(), "hello world");
    }

    #[test]
    fn string_emitter_fmt() {
        let mut emitter = StringEmitter::new();
        emitter.emit_fmt(format_args!("{}-{}", 1, 2));
        assert_eq!(emitter.output(), "1-2");
    }

    #[test]
    fn string_emitter_with_capacity() {
        let emitter = StringEmitter::with_capacity(1024);
        assert!(emitter.is_empty());
        assert_eq!(emitter.len(), 0);
    }

    #[test]
    fn string_emitter_as_str() {
        let mut emitter = StringEmitter::new();
        emitter.emit("partial");
        assert_eq!(emitter.as_str(), "partial");
        emitter.emit(" more");
        assert_eq!(emitter.as_str(), "partial more");
    }

    #[test]
    fn writer_emitter_collects_bytes() {
        let mut emitter = WriterEmitter::new(Vec::new());
        emitter.emit("abc");
        emitter.emit_fmt(format_args!("{}", 42));
        let bytes = match emitter.finish() {
            Ok(bytes) => bytes,
            Err(err) => panic!("finish failed: {err}"),
        };
        assert_eq!(bytes, b"abc42");
    }

    #[test]
    fn writer_emitter_flush_is_infallible() {
        let mut emitter = WriterEmitter::new(Vec::new());
        emitter.emit("x");
        emitter.flush();
        assert_eq!(emitter.writer(), b"x");
    }
}
