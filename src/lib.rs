//! Python-style printing for heterogeneous Rust values.
//!
//! A value's render strategy is decided by its type: plain scalars go
//! out in their `Display` form, sequences as `[a b c]`, tuples as
//! `(a b c)`, fixed-width bit vectors as binary strings, and restricted
//! container adapters by draining a private copy. Types outside those
//! shapes simply do not implement [`Render`], so an unsupported
//! argument is a compile error, never a runtime one.
//!
//! # Modules
//!
//! - [`emitter`]: output sink abstraction for stdout, strings, and writers
//! - [`options`]: separator / terminator / flush configuration
//! - [`render`]: the [`Render`] trait and scalar implementations
//! - [`sequence`]: iterable std collections
//! - [`tuple`]: tuples up to arity 12
//! - [`bits`]: the [`Bits`] fixed-width bit vector
//! - [`adapter`]: [`Stack`], [`Queue`], and `BinaryHeap` rendering
//! - [`printer`]: the [`Printer`] driver
//!
//! # Example
//!
//! ```
//! use pyprint::{pprint_to, PrintOptions, Printer, StringEmitter};
//!
//! let mut printer = Printer::with_emitter(StringEmitter::new());
//! pprint_to!(printer, 1, "two", 3.0);
//! assert_eq!(printer.as_str(), "1 two 3\n");
//!
//! let options = PrintOptions::new().with_sep(", ");
//! let mut printer = Printer::with_emitter_and_options(StringEmitter::new(), options);
//! pprint_to!(printer, vec![1, 2], (3, "four"));
//! assert_eq!(printer.as_str(), "[1, 2], (3, four)\n");
//! ```

pub mod adapter;
pub mod bits;
pub mod emitter;
pub mod options;
pub mod printer;
pub mod render;
pub mod sequence;
pub mod tuple;

pub use adapter::{Queue, Stack};
pub use bits::Bits;
pub use emitter::{Emitter, StdoutEmitter, StringEmitter, WriterEmitter};
pub use options::{PrintOptions, DEFAULT_END, DEFAULT_SEP};
pub use printer::Printer;
pub use render::Render;

/// Print values to stdout with default options.
///
/// Equivalent to `Printer::new().print(values)`. The [`pprint!`] macro
/// builds the erased slice at the call site.
pub fn print(values: &[&dyn Render]) {
    Printer::new().print(values);
}

/// Print values to stdout with explicit options.
pub fn print_with(values: &[&dyn Render], options: PrintOptions) {
    Printer::with_options(options).print(values);
}

/// Render a whole print call to a string: values joined by the
/// separator, followed by the terminator.
///
/// ```
/// use pyprint::{format_values, PrintOptions};
///
/// let out = format_values(&[&1, &2, &3], PrintOptions::new().with_sep(", "));
/// assert_eq!(out, "1, 2, 3\n");
/// ```
pub fn format_values(values: &[&dyn Render], options: PrintOptions) -> String {
    let mut printer = Printer::with_emitter_and_options(StringEmitter::new(), options);
    printer.print(values);
    printer.output()
}

/// Render a single value to a string with default options, no
/// terminator. Mostly useful in tests.
///
/// ```
/// use pyprint::render_to_string;
///
/// assert_eq!(render_to_string(&vec![1, 2, 3]), "[1 2 3]");
/// ```
pub fn render_to_string(value: &dyn Render) -> String {
    let mut emitter = StringEmitter::new();
    value.render(&mut emitter, &PrintOptions::default());
    emitter.output()
}

/// Print a variadic list of values to stdout with default options.
///
/// ```no_run
/// use pyprint::pprint;
///
/// pprint!(1, "two", vec![3, 4]); // writes "1 two [3 4]\n"
/// pprint!();                     // writes "\n"
/// ```
#[macro_export]
macro_rules! pprint {
    () => {
        $crate::print(&[])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::print(&[$(&$value as &dyn $crate::Render),+])
    };
}

/// Print a variadic list of values through an existing [`Printer`].
///
/// ```
/// use pyprint::{pprint_to, Printer, StringEmitter};
///
/// let mut printer = Printer::with_emitter(StringEmitter::new());
/// pprint_to!(printer, "a", "b");
/// pprint_to!(printer);
/// assert_eq!(printer.as_str(), "a b\n\n");
/// ```
#[macro_export]
macro_rules! pprint_to {
    ($printer:expr) => {
        $printer.print(&[])
    };
    ($printer:expr, $($value:expr),+ $(,)?) => {
        $printer.print(&[$(&$value as &dyn $crate::Render),+])
    };
}
