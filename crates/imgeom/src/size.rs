//! Integer width/height pair.

use std::fmt;

/// Integer extent `(width, height)`. No sign constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// `(0, 0)`.
    pub const EMPTY: Size = Size {
        width: 0,
        height: 0,
    };

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size [ Width={}, Height={} ]", self.width, self.height)
    }
}
