//! Integer 2D point.
//!
//! Purpose
//! - `Point` is the integer coordinate passed around the imaging code. It is a
//!   plain `Copy` value; every operation returns a new point except the two
//!   offset mutators.
//!
//! Layout
//! - `mod.rs`: type, constructors, offset, string form.
//! - `ops.rs`: operator traits (`Neg`, `Add<Size>`, `Mul<i32>`, `Div<i32>`, …).
//! - `convert.rs`: conversions to/from `PointF`, `Vec2`, `Size` and rounding.
//! - `transform.rs`: affine transform, rotate, skew.
//! - `parse.rs`: `FromStr` for the `Display` form.
//!
//! Overflow
//! - Integer arithmetic wraps (two's complement) in both debug and release.
//! - Scalar division by zero panics like any Rust integer division.
//! - Float → int narrowing saturates at the `i32` bounds and maps NaN to 0.
//!
//! Code cross-refs: `Size`, `PointF`, `Affine2`, `MidpointRounding`.

mod convert;
mod ops;
mod parse;
mod transform;

pub use parse::ParsePointError;

use std::fmt;

use crate::size::Size;

/// Integer coordinate `(x, y)`.
///
/// Equality and hashing are componentwise; the derived `Hash` feeds `x`
/// then `y`, so equal points always hash equal.
///
/// Not internally synchronized: `offset`/`offset_by` need `&mut self`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// `(0, 0)`.
    pub const EMPTY: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Decode two signed 16-bit halves packed into one `i32`:
    /// `y` from bits 16..32, `x` from bits 0..16, each sign-extended.
    ///
    /// `0x0002_FFFF` decodes to `(-1, 2)`.
    #[inline]
    pub const fn from_packed(value: i32) -> Self {
        let y = ((value >> 16) & 0xFFFF) as i16;
        let x = (value & 0xFFFF) as i16;
        Self {
            x: x as i32,
            y: y as i32,
        }
    }

    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            x: size.width,
            y: size.height,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Translate in place by `(dx, dy)`.
    #[inline]
    pub fn offset(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    /// Translate in place by the coordinates of `other`.
    #[inline]
    pub fn offset_by(&mut self, other: Point) {
        self.offset(other.x, other.y);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point [ X={}, Y={} ]", self.x, self.y)
    }
}
