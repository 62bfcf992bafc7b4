use super::Point;
use crate::affine::Affine2;
use crate::pointf::PointF;

impl Point {
    /// Apply `matrix` to `point`; the result is not rounded.
    #[inline]
    pub fn transform(point: Point, matrix: &Affine2) -> PointF {
        matrix.transform_vector(point.to_vector()).into()
    }

    /// Apply `rotation` and round back to the integer grid.
    ///
    /// Any affine matrix is accepted, not only pure rotations.
    #[inline]
    pub fn rotate(point: Point, rotation: &Affine2) -> Point {
        Self::transform_round(point, rotation)
    }

    /// Apply `skew` and round back to the integer grid. Same as `rotate`.
    #[inline]
    pub fn skew(point: Point, skew: &Affine2) -> Point {
        Self::transform_round(point, skew)
    }

    #[inline]
    fn transform_round(point: Point, matrix: &Affine2) -> Point {
        Point::round_vector(matrix.transform_vector(point.to_vector()))
    }
}
