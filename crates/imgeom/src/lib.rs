//! Integer and floating-point 2D coordinate types.
//!
//! Purpose
//! - `Point` is the integer coordinate currency of the imaging pipeline:
//!   bit-packed construction, operator set, rounding conversions from
//!   `PointF`/`Vec2`, and affine transforms with rounding back to the grid.
//! - `Size`, `PointF` and `Affine2` are the sibling types `Point` converts to
//!   and from. They carry only the surface `Point` needs.
//!
//! Conventions
//! - All types are plain `Copy` values. The only in-place mutation is
//!   `Point::offset`/`Point::offset_by`.
//! - Integer arithmetic wraps on overflow; scalar division by zero panics.
//! - Float → int narrowing uses `as i32` (saturating, NaN → 0).
//! - Rounding defaults to ties-to-even, see `cfg::MidpointRounding`.

pub mod affine;
pub mod cfg;
pub mod point;
pub mod pointf;
pub mod size;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use affine::{Affine2, ParseAffineError};
pub use cfg::MidpointRounding;
pub use point::{ParsePointError, Point};
pub use pointf::PointF;
pub use size::Size;

/// 2D float vector used as the input/output of affine transforms.
pub type Vec2 = nalgebra::Vector2<f32>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::Affine2;
    pub use crate::cfg::MidpointRounding;
    pub use crate::point::Point;
    pub use crate::pointf::PointF;
    pub use crate::size::Size;
    pub use crate::Vec2;
}
