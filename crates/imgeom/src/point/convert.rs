//! Conversions between `Point` and its float/size siblings.
//!
//! Widening (`Point` → `PointF`/`Vec2`) is lossless for realistic ranges.
//! Narrowing (`PointF`/`Vec2` → `Point`) applies ceil/round/trunc per
//! component and then `as i32`, which saturates and maps NaN to 0.

use super::Point;
use crate::cfg::MidpointRounding;
use crate::pointf::PointF;
use crate::size::Size;
use crate::Vec2;

impl Point {
    #[inline]
    pub fn to_float_point(self) -> PointF {
        PointF::new(self.x as f32, self.y as f32)
    }

    #[inline]
    pub fn to_vector(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Reinterpret as an extent: `(width, height) = (x, y)`.
    #[inline]
    pub fn to_size(self) -> Size {
        Size::new(self.x, self.y)
    }

    /// Componentwise ceiling.
    #[inline]
    pub fn ceiling(point: PointF) -> Point {
        Point::new(point.x.ceil() as i32, point.y.ceil() as i32)
    }

    /// Componentwise round to nearest, ties to even.
    #[inline]
    pub fn round(point: PointF) -> Point {
        Self::round_with(point, MidpointRounding::default())
    }

    #[inline]
    pub fn round_with(point: PointF, mode: MidpointRounding) -> Point {
        Point::new(mode.apply(point.x) as i32, mode.apply(point.y) as i32)
    }

    /// Componentwise round of a vector, ties to even.
    #[inline]
    pub fn round_vector(v: Vec2) -> Point {
        Self::round_vector_with(v, MidpointRounding::default())
    }

    #[inline]
    pub fn round_vector_with(v: Vec2, mode: MidpointRounding) -> Point {
        Self::round_with(PointF::from(v), mode)
    }

    /// Componentwise truncation toward zero.
    #[inline]
    pub fn truncate(point: PointF) -> Point {
        Point::new(point.x.trunc() as i32, point.y.trunc() as i32)
    }
}

impl From<Point> for PointF {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_float_point()
    }
}

impl From<Point> for Vec2 {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<Point> for Size {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_size()
    }
}

impl From<Size> for Point {
    #[inline]
    fn from(s: Size) -> Self {
        Point::from_size(s)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
