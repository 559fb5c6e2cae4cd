//! Fixed-Width Bit Vector
//!
//! [`Bits<N>`] holds exactly `N` bits, indexed from the least
//! significant end like `std::bitset`. Its canonical textual form is
//! the most-significant-bit-first binary string, and that is what a
//! print call emits — no brackets, no separators.

use std::fmt::{self, Write as _};

use crate::emitter::Emitter;
use crate::options::PrintOptions;
use crate::render::Render;

/// A bit vector of fixed width `N`.
///
/// Bit 0 is the least significant bit; `Display` writes bit `N - 1`
/// first. Width 8 holding 42 displays as `00101010`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bits<const N: usize> {
    bits: [bool; N],
}

impl<const N: usize> Bits<N> {
    /// Create a bit vector with all bits clear.
    pub fn new() -> Self {
        Self { bits: [false; N] }
    }

    /// Create from the low `N` bits of `value`.
    pub fn from_value(value: u128) -> Self {
        let mut bits = [false; N];
        for (index, bit) in bits.iter_mut().enumerate() {
            if index >= 128 {
                break;
            }
            *bit = (value >> index) & 1 == 1;
        }
        Self { bits }
    }

    /// Read the bit at `index` (0 = least significant).
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Set the bit at `index` (0 = least significant).
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits[index] = value;
    }

    /// The width `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the width is zero.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }
}

impl<const N: usize> Default for Bits<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<u128> for Bits<N> {
    fn from(value: u128) -> Self {
        Self::from_value(value)
    }
}

impl<const N: usize> fmt::Display for Bits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in (0..N).rev() {
            f.write_char(if self.bits[index] { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<const N: usize> Render for Bits<N> {
    fn render(&self, out: &mut dyn Emitter, _options: &PrintOptions) {
        out.emit_fmt(format_args!("{self}"));
    }
}
