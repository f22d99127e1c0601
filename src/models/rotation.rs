use crate::utils::cross_product;

/// Quaternion representation for the rigid rotations that place walls in
/// world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Creates a new identity quaternion (no rotation)
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Creates a quaternion from axis-angle representation
    pub fn from_axis_angle(axis: (f64, f64, f64), angle: f64) -> Self {
        let half_angle = angle / 2.0;
        let sin_half = half_angle.sin();
        let (ax, ay, az) = axis;
        let magnitude = (ax * ax + ay * ay + az * az).sqrt();

        if magnitude < 1e-10 {
            return Quaternion::identity();
        }

        let nx = ax / magnitude;
        let ny = ay / magnitude;
        let nz = az / magnitude;

        Quaternion {
            w: half_angle.cos(),
            x: nx * sin_half,
            y: ny * sin_half,
            z: nz * sin_half,
        }
    }

    /// Rotates a point by this quaternion
    pub fn rotate_point(&self, point: (f64, f64, f64)) -> (f64, f64, f64) {
        let q_vec = (self.x, self.y, self.z);
        let t = cross_product(q_vec, point);
        let t = (2.0 * t.0, 2.0 * t.1, 2.0 * t.2);
        let cross_t = cross_product(q_vec, t);

        (
            point.0 + self.w * t.0 + cross_t.0,
            point.1 + self.w * t.1 + cross_t.1,
            point.2 + self.w * t.2 + cross_t.2,
        )
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}
