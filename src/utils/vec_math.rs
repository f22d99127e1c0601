/// Vector utility: dot product
#[inline]
pub fn dot_product(a: (f64, f64, f64), b: (f64, f64, f64)) -> f64 {
    a.0 * b.0 + a.1 * b.1 + a.2 * b.2
}

/// Vector utility: cross product
#[inline]
pub fn cross_product(a: (f64, f64, f64), b: (f64, f64, f64)) -> (f64, f64, f64) {
    (
        a.1 * b.2 - a.2 * b.1,
        a.2 * b.0 - a.0 * b.2,
        a.0 * b.1 - a.1 * b.0,
    )
}

/// Vector utility: magnitude calculation
#[inline]
pub fn vector_magnitude(v: (f64, f64, f64)) -> f64 {
    (v.0 * v.0 + v.1 * v.1 + v.2 * v.2).sqrt()
}

/// Vector utility: normalization
///
/// A zero vector normalizes to the zero vector by convention, so callers
/// rejecting on a zero direction (e.g. a stationary object) need no extra
/// guard.
#[inline]
pub fn normalize_vector(v: (f64, f64, f64)) -> (f64, f64, f64) {
    let mag_sq = v.0 * v.0 + v.1 * v.1 + v.2 * v.2;
    if mag_sq > 0.0 {
        let flipped = 1.0 / mag_sq.sqrt();
        (v.0 * flipped, v.1 * flipped, v.2 * flipped)
    } else {
        v
    }
}
