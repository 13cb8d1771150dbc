//! Infinite planes and point classification against them.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

// Classification constants, combined per-face as a bitmask.
pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// A plane in normal/offset form (plane equation: `n · p = w`).
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane
    pub normal: Vector3<Real>,
    /// Distance from origin along normal
    pub w: Real,
}

impl Plane {
    /// Create a new plane from a normal vector and distance from origin.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            w,
        }
    }

    /// Axis-aligned horizontal plane (+Z normal) at the given height.
    pub fn horizontal(height: Real) -> Self {
        Plane {
            normal: Vector3::z(),
            w: height,
        }
    }

    /// Get the plane normal.
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// Get the offset (distance from origin).
    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Signed distance from `point` to the plane; positive on the normal side.
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Classify a point as [`FRONT`], [`BACK`] or [`COPLANAR`].
    ///
    /// Points within [`EPSILON`] of the plane are treated as exactly
    /// on-plane.
    pub fn orient_point(&self, point: &Point3<Real>) -> i8 {
        let distance = self.signed_distance(point);
        if distance > EPSILON {
            FRONT
        } else if distance < -EPSILON {
            BACK
        } else {
            COPLANAR
        }
    }

    /// Flip the plane (reverse normal and distance).
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Return a flipped copy of this plane.
    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }
}
