//! Tuple Rendering
//!
//! [`Render`] for tuples up to arity 12, parenthesized with the
//! separator between components. A 1-tuple renders as `(x)` with no
//! separator; the unit tuple renders as `()`.

use std::mem;

use crate::emitter::Emitter;
use crate::options::PrintOptions;
use crate::render::Render;

impl Render for () {
    fn render(&self, out: &mut dyn Emitter, _options: &PrintOptions) {
        out.emit("()");
    }
}

macro_rules! impl_render_tuple {
    ($( ( $($name:ident $idx:tt),+ ) )+) => {$(
        impl<$($name: Render),+> Render for ($($name,)+) {
            fn render(&self, out: &mut dyn Emitter, options: &PrintOptions) {
                out.emit("(");
                let mut first = true;
                $(
                    if !mem::take(&mut first) {
                        out.emit(&options.sep);
                    }
                    self.$idx.render(out, options);
                )+
                out.emit(")");
            }
        }
    )+};
}

impl_render_tuple! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11)
}
