//! Value Formatter
//!
//! The [`Render`] trait decides how a value is written: scalars go out
//! in their `Display` form, composites recurse through their elements.
//! Which rule applies is fixed by the value's type, so an unsupported
//! type is a missing trait implementation and the call site fails to
//! compile.
//!
//! Scalar implementations live here; sequences, tuples, bit vectors,
//! and container adapters have their own modules.

use std::mem;

use crate::emitter::Emitter;
use crate::options::PrintOptions;

/// A value the print driver knows how to write.
///
/// Object safe so a heterogeneous argument list can be erased to
/// `&[&dyn Render]`. Implementations write their textual form to the
/// emitter, recursing through nested structure with the same options.
/// The separator is always emitted as a raw literal string, never
/// re-dispatched through `Render`.
pub trait Render {
    /// Write this value's rendering to `out`.
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions);
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        (**self).render(out, options);
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
        (**self).render(out, options);
    }
}

/// Emit `[` + items joined by the separator + `]`.
///
/// Shared by every homogeneous collection rendering. The separator goes
/// strictly between adjacent items, never before the first or after the
/// last, for 0, 1, or N items.
pub(crate) fn render_sequence<I>(items: I, out: &mut dyn Emitter, options: &PrintOptions)
where
    I: IntoIterator,
    I::Item: Render,
{
    out.emit("[");
    let mut first = true;
    for item in items {
        if !mem::take(&mut first) {
            out.emit(&options.sep);
        }
        item.render(out, options);
    }
    out.emit("]");
}

macro_rules! impl_render_scalar {
    ($($ty:ty),+ $(,)?) => {$(
        impl Render for $ty {
            fn render(&self, out: &mut dyn Emitter, _options: &PrintOptions) {
                out.emit_fmt(format_args!("{self}"));
            }
        }
    )+};
}

// Strings are scalars, not sequences: they render as themselves with no
// brackets, matching every ambient print convention.
impl_render_scalar! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    bool, char,
    str, String,
}
