use nalgebra::{Point2, Vector2};

/// Absolute position on the table.
pub type Point = Point2<f64>;
/// Displacement or per-tick momentum.
pub type Vector = Vector2<f64>;

pub fn distance(a: &Point, b: &Point) -> f64 {
    nalgebra::distance(a, b)
}

/// Angle of the ray `from -> to`. Meaningless when the points coincide, callers check first.
pub fn angle(from: &Point, to: &Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Unit vector pointing along `angle`.
pub fn direction(angle: f64) -> Vector {
    Vector::new(angle.cos(), angle.sin())
}

/// Scales `v` down so its length is at most `max`.
pub fn clamped_length(v: Vector, max: f64) -> Vector {
    let length = v.norm();
    if length <= max || length == 0. {
        return v;
    }
    v * (max / length)
}

/// Sign of `x`, with zero mapping to zero (unlike `f64::signum`).
pub fn sign(x: f64) -> f64 {
    if x > 0. {
        1.
    } else if x < 0. {
        -1.
    } else {
        0.
    }
}

pub fn is_finite_point(p: &Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
