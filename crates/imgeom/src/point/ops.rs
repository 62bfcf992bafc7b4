use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::Point;
use crate::size::Size;

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl Add<Size> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Size) -> Point {
        Point::new(
            self.x.wrapping_add(rhs.width),
            self.y.wrapping_add(rhs.height),
        )
    }
}

impl Sub<Size> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Size) -> Point {
        Point::new(
            self.x.wrapping_sub(rhs.width),
            self.y.wrapping_sub(rhs.height),
        )
    }
}

impl AddAssign<Size> for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Size) {
        *self = *self + rhs;
    }
}

impl SubAssign<Size> for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Size) {
        *self = *self - rhs;
    }
}

impl Mul<i32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x.wrapping_mul(rhs), self.y.wrapping_mul(rhs))
    }
}

impl Mul<Point> for i32 {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

/// Componentwise division truncating toward zero.
///
/// Panics when `rhs == 0` (and on `i32::MIN / -1`); see `checked_div`.
impl Div<i32> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: i32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Point {
    /// Division that returns `None` instead of panicking.
    #[inline]
    pub fn checked_div(self, rhs: i32) -> Option<Point> {
        Some(Point::new(self.x.checked_div(rhs)?, self.y.checked_div(rhs)?))
    }
}
