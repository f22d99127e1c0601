use crate::utils::{dot_product, normalize_vector};

/// Reflects the velocity of a moving object bouncing off a static surface:
///
/// ```text
/// R = (1 + e) * (-I.N) * N + I
/// ```
///
/// where `I` is the incoming velocity, `N` the unit surface normal, and `e`
/// the restitution coefficient. Only the normal component of the velocity
/// changes; an incoming normal speed of `v` leaves at `e * v`.
pub fn reflect_off_surface(
    velocity: (f64, f64, f64),
    surface_normal: (f64, f64, f64),
    restitution: f64,
) -> (f64, f64, f64) {
    debug_assert!(
        (0.0..=1.0).contains(&restitution),
        "restitution must lie in [0, 1]"
    );
    debug_assert!(
        (dot_product(surface_normal, surface_normal) - 1.0).abs() < 0.01,
        "surface normal must be unit length"
    );

    let scale = (1.0 + restitution) * -dot_product(velocity, surface_normal);
    (
        velocity.0 + surface_normal.0 * scale,
        velocity.1 + surface_normal.1 * scale,
        velocity.2 + surface_normal.2 * scale,
    )
}

/// Splits a velocity into its component along the axis toward the other
/// object and the perpendicular remainder.
fn split_along_axis(
    velocity: (f64, f64, f64),
    from: (f64, f64, f64),
    toward: (f64, f64, f64),
) -> ((f64, f64, f64), (f64, f64, f64)) {
    let axis = normalize_vector((toward.0 - from.0, toward.1 - from.1, toward.2 - from.2));
    let along = dot_product(axis, velocity);
    let normal = (axis.0 * along, axis.1 * along, axis.2 * along);
    let tangential = (
        velocity.0 - normal.0,
        velocity.1 - normal.1,
        velocity.2 - normal.2,
    );
    (normal, tangential)
}

/// Perfectly elastic collision between two equal-mass moving objects.
///
/// Each velocity is decomposed along the line connecting the two centers;
/// the normal components swap and the tangential components pass through
/// unchanged. Coincident centers degrade to a no-op (the axis normalizes to
/// zero).
pub fn exchange_normal_components(
    velocity1: (f64, f64, f64),
    center1: (f64, f64, f64),
    velocity2: (f64, f64, f64),
    center2: (f64, f64, f64),
) -> ((f64, f64, f64), (f64, f64, f64)) {
    let (normal1, tangential1) = split_along_axis(velocity1, center1, center2);
    let (normal2, tangential2) = split_along_axis(velocity2, center2, center1);

    (
        (
            normal2.0 + tangential1.0,
            normal2.1 + tangential1.1,
            normal2.2 + tangential1.2,
        ),
        (
            normal1.0 + tangential2.0,
            normal1.1 + tangential2.1,
            normal1.2 + tangential2.2,
        ),
    )
}

/// Like [`exchange_normal_components`], but the tangential components are
/// exchanged symmetrically as well, approximating surface friction coupling
/// between box pairs.
pub fn exchange_with_tangential(
    velocity1: (f64, f64, f64),
    center1: (f64, f64, f64),
    velocity2: (f64, f64, f64),
    center2: (f64, f64, f64),
) -> ((f64, f64, f64), (f64, f64, f64)) {
    let (normal1, tangential1) = split_along_axis(velocity1, center1, center2);
    let (normal2, tangential2) = split_along_axis(velocity2, center2, center1);

    (
        (
            normal2.0 + tangential2.0,
            normal2.1 + tangential2.1,
            normal2.2 + tangential2.2,
        ),
        (
            normal1.0 + tangential1.0,
            normal1.1 + tangential1.1,
            normal1.2 + tangential1.2,
        ),
    )
}

/// Closest point to `point` on the segment from `start` to `end`. Used to
/// recompute the true contact normal after an edge or vertex hit.
pub fn closest_point_on_segment(
    point: (f64, f64, f64),
    start: (f64, f64, f64),
    end: (f64, f64, f64),
) -> (f64, f64, f64) {
    let segment = (end.0 - start.0, end.1 - start.1, end.2 - start.2);
    let length_sq = dot_product(segment, segment);
    if length_sq <= 0.0 {
        return start;
    }

    let offset = (point.0 - start.0, point.1 - start.1, point.2 - start.2);
    let along = (dot_product(offset, segment) / length_sq).clamp(0.0, 1.0);
    (
        start.0 + segment.0 * along,
        start.1 + segment.1 * along,
        start.2 + segment.2 * along,
    )
}
