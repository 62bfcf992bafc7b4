//! 2D affine transforms (the 3×2 matrix capability used by `Point`).
//!
//! - `Affine2`: `x ↦ M x + t` over `f32`, column-vector convention.
//! - Constructors mirror the usual 3×2 matrix factories (translation, scale,
//!   rotation, skew). `from_rows` accepts the row-major 3×2 layout
//!   `(m11, m12, m21, m22, m31, m32)` where a point is the row vector
//!   `[x y 1]`; it is stored transposed.
//!
//! Code cross-refs: `Point::{transform,rotate,skew}`, `PointF::transform`.

use std::error::Error;
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use nalgebra::{Matrix2, Matrix3, Vector2};

use crate::cfg::SNAP_EPS;
use crate::pointf::PointF;

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f32>,
    pub t: Vector2<f32>,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// Build from the row-major 3×2 layout (`[x y 1] · M`).
    #[inline]
    pub fn from_rows(m11: f32, m12: f32, m21: f32, m22: f32, m31: f32, m32: f32) -> Self {
        Self {
            m: Matrix2::new(m11, m21, m12, m22),
            t: Vector2::new(m31, m32),
        }
    }

    /// Inverse of `from_rows`.
    #[inline]
    pub fn to_rows(&self) -> [f32; 6] {
        [
            self.m[(0, 0)],
            self.m[(1, 0)],
            self.m[(0, 1)],
            self.m[(1, 1)],
            self.t.x,
            self.t.y,
        ]
    }

    #[inline]
    pub fn translation(dx: f32, dy: f32) -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::new(dx, dy),
        }
    }

    #[inline]
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            m: Matrix2::new(sx, 0.0, 0.0, sy),
            t: Vector2::zeros(),
        }
    }

    /// Counterclockwise rotation about the origin (y axis up).
    ///
    /// `sin`/`cos` within `SNAP_EPS` of `0` or `±1` are snapped, so multiples
    /// of 90° are exact.
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let (s, c) = (snap_unit(s), snap_unit(c));
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn rotation_degrees(degrees: f32) -> Self {
        Self::rotation(degrees.to_radians())
    }

    /// Rotation about `center` instead of the origin.
    pub fn rotation_about(radians: f32, center: PointF) -> Self {
        Self::translation(-center.x, -center.y)
            .then(&Self::rotation(radians))
            .then(&Self::translation(center.x, center.y))
    }

    /// Skew: `x' = x + y·tan(radians_x)`, `y' = y + x·tan(radians_y)`.
    #[inline]
    pub fn skew(radians_x: f32, radians_y: f32) -> Self {
        Self {
            m: Matrix2::new(1.0, radians_x.tan(), radians_y.tan(), 1.0),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn skew_degrees(degrees_x: f32, degrees_y: f32) -> Self {
        Self::skew(degrees_x.to_radians(), degrees_y.to_radians())
    }

    #[inline]
    pub fn transform_vector(&self, v: Vector2<f32>) -> Vector2<f32> {
        self.m * v + self.t
    }

    /// Composition that applies `self` first, then `next`.
    #[inline]
    pub fn then(&self, next: &Affine2) -> Affine2 {
        Affine2 {
            m: next.m * self.m,
            t: next.m * self.t + next.t,
        }
    }

    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m.determinant()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// 3×3 homogeneous form acting on column vectors `[x, y, 1]`.
    pub fn to_homogeneous(&self) -> Matrix3<f32> {
        Matrix3::new(
            self.m[(0, 0)],
            self.m[(0, 1)],
            self.t.x,
            self.m[(1, 0)],
            self.m[(1, 1)],
            self.t.y,
            0.0,
            0.0,
            1.0,
        )
    }
}

#[inline]
fn snap_unit(v: f32) -> f32 {
    if v.abs() < SNAP_EPS {
        0.0
    } else if (v - 1.0).abs() < SNAP_EPS {
        1.0
    } else if (v + 1.0).abs() < SNAP_EPS {
        -1.0
    } else {
        v
    }
}

/// Errors from parsing `"m11,m12,m21,m22,m31,m32"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAffineError {
    /// Not exactly six comma-separated entries.
    WrongCount(usize),
    /// Entry `index` (0-based) is not a number.
    BadNumber {
        index: usize,
        source: ParseFloatError,
    },
}

impl fmt::Display for ParseAffineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAffineError::WrongCount(n) => {
                write!(f, "expected 6 matrix entries (m11,m12,m21,m22,m31,m32), got {n}")
            }
            ParseAffineError::BadNumber { index, source } => {
                write!(f, "matrix entry {index} is not a number: {source}")
            }
        }
    }
}

impl Error for ParseAffineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseAffineError::BadNumber { source, .. } => Some(source),
            ParseAffineError::WrongCount(_) => None,
        }
    }
}

impl FromStr for Affine2 {
    type Err = ParseAffineError;

    /// Parse the row-major layout accepted by `from_rows`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 6 {
            return Err(ParseAffineError::WrongCount(parts.len()));
        }
        let mut e = [0.0f32; 6];
        for (index, (slot, part)) in e.iter_mut().zip(&parts).enumerate() {
            *slot = part
                .parse()
                .map_err(|source| ParseAffineError::BadNumber { index, source })?;
        }
        Ok(Self::from_rows(e[0], e[1], e[2], e[3], e[4], e[5]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn approx(a: Vector2<f32>, b: Vector2<f32>) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn rows_layout_matches_row_vector_convention() {
        // [x y 1] · M with M = [[1,2],[3,4],[5,6]]
        let a = Affine2::from_rows(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let out = a.transform_vector(vector![1.0, 1.0]);
        assert_eq!(out, vector![1.0 + 3.0 + 5.0, 2.0 + 4.0 + 6.0]);
        assert_eq!(a.to_rows(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn quarter_turns_are_exact() {
        let r = Affine2::rotation_degrees(90.0);
        assert_eq!(r.transform_vector(vector![1.0, 0.0]), vector![0.0, 1.0]);
        let r = Affine2::rotation_degrees(180.0);
        assert_eq!(r.transform_vector(vector![3.0, -2.0]), vector![-3.0, 2.0]);
        let r = Affine2::rotation_degrees(-90.0);
        assert_eq!(r.transform_vector(vector![0.0, 5.0]), vector![5.0, 0.0]);
    }

    #[test]
    fn rotation_about_center_fixes_center() {
        let c = PointF::new(2.0, 3.0);
        let r = Affine2::rotation_about(0.7, c);
        assert!(approx(r.transform_vector(c.to_vector()), c.to_vector()));
        let r90 = Affine2::rotation_about(std::f32::consts::FRAC_PI_2, c);
        assert!(approx(r90.transform_vector(vector![3.0, 3.0]), vector![2.0, 4.0]));
    }

    #[test]
    fn skew_shears_along_axes() {
        let s = Affine2::skew_degrees(45.0, 0.0);
        assert!(approx(s.transform_vector(vector![0.0, 2.0]), vector![2.0, 2.0]));
        let s = Affine2::skew_degrees(0.0, 45.0);
        assert!(approx(s.transform_vector(vector![2.0, 0.0]), vector![2.0, 2.0]));
    }

    #[test]
    fn then_applies_in_order_and_inverse_undoes() {
        let a = Affine2::scale(2.0, 3.0);
        let b = Affine2::translation(1.0, -1.0);
        let ab = a.then(&b);
        assert_eq!(ab.transform_vector(vector![1.0, 1.0]), vector![3.0, 2.0]);
        let inv = ab.inverse().unwrap();
        assert!(approx(inv.transform_vector(vector![3.0, 2.0]), vector![1.0, 1.0]));
        assert!((ab.determinant() - 6.0).abs() < 1e-6);
        assert!(Affine2::scale(0.0, 1.0).inverse().is_none());
    }

    #[test]
    fn homogeneous_form_agrees() {
        let a = Affine2::from_rows(0.5, 1.0, -2.0, 3.0, 4.0, -5.0);
        let h = a.to_homogeneous();
        let v = nalgebra::Vector3::new(1.5, -0.5, 1.0);
        let hv = h * v;
        assert!(approx(vector![hv.x, hv.y], a.transform_vector(vector![1.5, -0.5])));
        assert!(Affine2::default().is_identity());
    }

    #[test]
    fn parse_rows() {
        let a: Affine2 = "1, 0, 0, 1, 10, -2.5".parse().unwrap();
        assert_eq!(a, Affine2::translation(10.0, -2.5));
        assert_eq!(
            "1,2,3".parse::<Affine2>(),
            Err(ParseAffineError::WrongCount(3))
        );
        let err = "1,0,0,x,0,0".parse::<Affine2>().unwrap_err();
        assert!(matches!(err, ParseAffineError::BadNumber { index: 3, .. }));
        assert!(err.to_string().contains("entry 3"));
    }
}
