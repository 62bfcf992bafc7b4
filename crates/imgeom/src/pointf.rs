//! Floating-point coordinate pair.

use std::fmt;

use crate::affine::Affine2;
use crate::Vec2;

/// `f32` coordinate `(x, y)`; the conversion source for `Point::ceiling`,
/// `Point::round` and `Point::truncate` and the result of `Point::transform`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    /// `(0.0, 0.0)`.
    pub const EMPTY: PointF = PointF { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn to_vector(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Apply `matrix` to `point`.
    #[inline]
    pub fn transform(point: PointF, matrix: &Affine2) -> PointF {
        matrix.transform_vector(point.to_vector()).into()
    }
}

impl From<Vec2> for PointF {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<PointF> for Vec2 {
    #[inline]
    fn from(p: PointF) -> Self {
        p.to_vector()
    }
}

impl fmt::Display for PointF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointF [ X={}, Y={} ]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_round_trip_and_translate() {
        let p = PointF::new(1.25, -3.5);
        let v: Vec2 = p.into();
        assert_eq!(PointF::from(v), p);
        let moved = PointF::transform(p, &Affine2::translation(0.75, 0.5));
        assert_eq!(moved, PointF::new(2.0, -3.0));
    }

    #[test]
    fn display() {
        assert_eq!(PointF::new(1.5, -2.0).to_string(), "PointF [ X=1.5, Y=-2 ]");
        assert!(PointF::EMPTY.is_empty());
    }
}
