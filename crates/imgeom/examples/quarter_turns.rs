//! Rotate a small integer outline in quarter turns and at an arbitrary angle.
//!
//! Quarter turns land exactly on the grid; other angles are rounded
//! (ties to even) back onto it.

use imgeom::{Affine2, Point, PointF};

fn main() {
    let outline = [
        Point::new(0, 0),
        Point::new(4, 0),
        Point::new(4, 2),
        Point::new(0, 2),
    ];
    let center = PointF::new(2.0, 1.0);
    for degrees in [90.0f32, 180.0, 270.0, 30.0] {
        let r = Affine2::rotation_about(degrees.to_radians(), center);
        let rotated: Vec<String> = outline
            .iter()
            .map(|&p| Point::rotate(p, &r).to_string())
            .collect();
        println!("deg={degrees:>5} {}", rotated.join(" "));
    }
    let packed = Point::from_packed(0x0002_FFFF);
    println!("packed 0x0002FFFF -> {packed}");
}
