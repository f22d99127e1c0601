use crate::errors::SimulationError;
use crate::utils::{normalize_vector, vector_magnitude};

/// Sphere given by its center point and radius.
///
/// The radius is validated at construction and stays constant for the
/// object's lifetime; only the center moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: (f64, f64, f64),
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: (f64, f64, f64), radius: f64) -> Result<Self, SimulationError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimulationError::InvalidRadius);
        }
        Ok(Sphere { center, radius })
    }
}

/// Infinite plane given by a unit normal and one point on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit surface normal. Normalized by the constructor.
    pub normal: (f64, f64, f64),
    /// A single point on the plane.
    pub point: (f64, f64, f64),
}

impl Plane {
    pub fn new(normal: (f64, f64, f64), point: (f64, f64, f64)) -> Result<Self, SimulationError> {
        if vector_magnitude(normal) <= 0.0 {
            return Err(SimulationError::DegenerateNormal);
        }
        Ok(Plane {
            normal: normalize_vector(normal),
            point,
        })
    }
}

/// Axially aligned bounding box given by its min and max corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub minv: (f64, f64, f64),
    pub maxv: (f64, f64, f64),
}

impl Aabb {
    pub fn new(minv: (f64, f64, f64), maxv: (f64, f64, f64)) -> Result<Self, SimulationError> {
        if minv.0 > maxv.0 || minv.1 > maxv.1 || minv.2 > maxv.2 {
            return Err(SimulationError::InvalidBounds);
        }
        Ok(Aabb { minv, maxv })
    }

    /// Returns one of the 8 corner points.
    ///
    /// Bit 0 selects min.x vs. max.x, bit 1 min.y vs. max.y, and bit 2
    /// min.z vs. max.z, so opposite corners differ in every bit.
    pub fn vertex(&self, i: usize) -> (f64, f64, f64) {
        debug_assert!(i <= 7, "corner index out of range");

        (
            if i & 1 != 0 { self.maxv.0 } else { self.minv.0 },
            if i & 2 != 0 { self.maxv.1 } else { self.minv.1 },
            if i & 4 != 0 { self.maxv.2 } else { self.minv.2 },
        )
    }

    pub fn center(&self) -> (f64, f64, f64) {
        (
            (self.minv.0 + self.maxv.0) * 0.5,
            (self.minv.1 + self.maxv.1) * 0.5,
            (self.minv.2 + self.maxv.2) * 0.5,
        )
    }

    /// Moves both corners by the given offset.
    pub fn translate(&mut self, offset: (f64, f64, f64)) {
        self.minv.0 += offset.0;
        self.minv.1 += offset.1;
        self.minv.2 += offset.2;
        self.maxv.0 += offset.0;
        self.maxv.1 += offset.1;
        self.maxv.2 += offset.2;
    }
}
