use crate::errors::SimulationError;
use crate::models::{Aabb, Plane, Quaternion, Sphere};
use crate::utils::{normalize_vector, vector_magnitude};

/// Kinematic state shared by every movable object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    pub velocity: (f64, f64, f64),
    pub acceleration: (f64, f64, f64),
}

/// A movable sphere: shape plus kinematic state plus the rolling-spin
/// animation state renderers read. The spin fields are cosmetic and play no
/// part in collision detection or response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub shape: Sphere,
    pub motion: Motion,
    /// Unit axis the ball visually rolls around, kept perpendicular to its
    /// horizontal direction of travel.
    pub spin_axis: (f64, f64, f64),
    /// Accumulated roll angle in radians.
    pub spin_angle: f64,
}

impl Ball {
    pub fn new(
        center: (f64, f64, f64),
        radius: f64,
        velocity: (f64, f64, f64),
    ) -> Result<Self, SimulationError> {
        let mut ball = Ball {
            shape: Sphere::new(center, radius)?,
            motion: Motion {
                velocity,
                acceleration: (0.0, 0.0, 0.0),
            },
            spin_axis: (-1.0, 0.0, 0.0),
            spin_angle: 0.0,
        };
        ball.align_spin_axis();
        Ok(ball)
    }

    /// Re-orients the spin axis perpendicular to the ball's direction of
    /// travel in the x-z plane. Called after every response that changes the
    /// ball's velocity.
    pub fn align_spin_axis(&mut self) {
        let vel = self.motion.velocity;
        let axis = (vel.2, 0.0, -vel.0);
        if vector_magnitude(axis) > 0.0 {
            self.spin_axis = normalize_vector(axis);
        } else {
            self.spin_axis = (-1.0, 0.0, 0.0);
        }
    }

    /// Rotates the ball's velocity and spin axis by `theta` radians about
    /// the vertical axis.
    pub fn turn(&mut self, theta: f64) {
        let (old_x, old_z) = (self.motion.velocity.0, self.motion.velocity.2);
        self.motion.velocity.0 = old_x * theta.cos() - old_z * theta.sin();
        self.motion.velocity.2 = old_x * theta.sin() + old_z * theta.cos();

        if vector_magnitude(self.motion.velocity) > 0.0 {
            self.align_spin_axis();
        } else {
            let (axis_x, axis_z) = (self.spin_axis.0, self.spin_axis.2);
            self.spin_axis.0 = axis_x * theta.cos() - axis_z * theta.sin();
            self.spin_axis.2 = axis_x * theta.sin() + axis_z * theta.cos();
        }
    }

    /// Accumulates roll angle from the ball's horizontal speed. A ball only
    /// rolls while moving along the x-z plane.
    pub fn advance_roll(&mut self, dt: f64) {
        let xz_vel = (self.motion.velocity.0, 0.0, self.motion.velocity.2);
        self.spin_angle += vector_magnitude(xz_vel) * dt / self.shape.radius;
    }
}

/// A movable axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub bounds: Aabb,
    pub motion: Motion,
}

impl Block {
    pub fn new(
        minv: (f64, f64, f64),
        maxv: (f64, f64, f64),
        velocity: (f64, f64, f64),
    ) -> Result<Self, SimulationError> {
        Ok(Block {
            bounds: Aabb::new(minv, maxv)?,
            motion: Motion {
                velocity,
                acceleration: (0.0, 0.0, 0.0),
            },
        })
    }

    pub fn center(&self) -> (f64, f64, f64) {
        self.bounds.center()
    }

    pub fn vertex(&self, i: usize) -> (f64, f64, f64) {
        self.bounds.vertex(i)
    }
}

/// A static wall: an infinite collision plane restricted to a finite
/// rectangle.
///
/// The rectangle is defined on the local x-y plane by its bottom-left
/// (`point1`) and top-right (`point2`) corners, and placed in the world by a
/// rigid transform. The collision plane (world-space unit normal plus
/// anchor point) is derived once at construction; walls never move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub plane: Plane,
    /// Bottom-left corner of the rectangle in local coordinates.
    pub point1: (f64, f64, f64),
    /// Top-right corner of the rectangle in local coordinates.
    pub point2: (f64, f64, f64),
    pub rotation: Quaternion,
    pub translation: (f64, f64, f64),
}

impl Wall {
    pub fn new(
        point1: (f64, f64, f64),
        point2: (f64, f64, f64),
        translation: (f64, f64, f64),
        rotation: Quaternion,
    ) -> Result<Self, SimulationError> {
        if point1.0 >= point2.0 || point1.1 >= point2.1 {
            return Err(SimulationError::InvalidExtent);
        }

        // The local rectangle faces +z; the transform carries that normal
        // and the anchor corner into world space.
        let normal = rotation.rotate_point((0.0, 0.0, 1.0));
        let anchor = rotation.rotate_point(point1);
        let anchor = (
            anchor.0 + translation.0,
            anchor.1 + translation.1,
            anchor.2 + translation.2,
        );

        Ok(Wall {
            plane: Plane::new(normal, anchor)?,
            point1,
            point2,
            rotation,
            translation,
        })
    }

    /// Returns one of the 4 rectangle corners in local coordinates.
    ///
    /// Bit 0 selects left vs. right, bit 1 bottom vs. top:
    ///
    /// ```text
    /// 2-----------3
    /// |           |
    /// 0-----------1
    /// ```
    pub fn local_vertex(&self, i: usize) -> (f64, f64, f64) {
        debug_assert!(i <= 3, "corner index out of range");

        (
            if i & 1 != 0 { self.point2.0 } else { self.point1.0 },
            if i & 2 != 0 { self.point2.1 } else { self.point1.1 },
            0.0,
        )
    }

    /// Returns one of the 4 rectangle corners in world coordinates.
    pub fn vertex(&self, i: usize) -> (f64, f64, f64) {
        let rotated = self.rotation.rotate_point(self.local_vertex(i));
        (
            rotated.0 + self.translation.0,
            rotated.1 + self.translation.1,
            rotated.2 + self.translation.2,
        )
    }
}
