//! Print Options
//!
//! The per-call configuration value: separator, terminator, and flush
//! flag. The sink is supplied separately when constructing a
//! [`Printer`](crate::Printer), so every call names its configuration
//! explicitly instead of smuggling it in as a trailing argument.

use std::borrow::Cow;

/// Default separator between values.
pub const DEFAULT_SEP: &str = " ";

/// Default terminator written after all values.
pub const DEFAULT_END: &str = "\n";

/// Configuration for a print call.
///
/// Immutable for the duration of a call. One instance governs both the
/// separator between top-level arguments and the separator between
/// elements inside a rendered composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Separator inserted between values, and between elements of a
    /// sequence, tuple, or adapter rendering.
    pub sep: Cow<'static, str>,

    /// Terminator appended once after all values.
    pub end: Cow<'static, str>,

    /// Force-flush the sink after the terminator is written.
    pub flush: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            sep: Cow::Borrowed(DEFAULT_SEP),
            end: Cow::Borrowed(DEFAULT_END),
            flush: false,
        }
    }
}

impl PrintOptions {
    /// Create options with the defaults: `sep = " "`, `end = "\n"`,
    /// no flush.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the separator.
    #[must_use]
    pub fn with_sep(mut self, sep: impl Into<Cow<'static, str>>) -> Self {
        self.sep = sep.into();
        self
    }

    /// Replace the terminator.
    #[must_use]
    pub fn with_end(mut self, end: impl Into<Cow<'static, str>>) -> Self {
        self.end = end.into();
        self
    }

    /// Set the flush flag.
    #[must_use]
    pub fn with_flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }
}
