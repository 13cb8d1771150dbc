//! Struct and functions for working with `Vertex`s from which meshes are composed.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A mesh vertex, holding position and normal.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non-unit) normal; it is **copied verbatim**
    ///
    /// Non-finite components are sanitised to zero.
    #[inline]
    pub fn new(mut pos: Point3<Real>, mut normal: Vector3<Real>) -> Self {
        for c in pos.coords.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }

        for c in normal.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }

        Vertex { pos, normal }
    }

    /// Linear interpolation toward `other` at parameter `t` in `[0, 1]`.
    ///
    /// # Example
    /// ```rust
    /// # use nalgebra::{Point3, Vector3};
    /// # use isoline::mesh::vertex::Vertex;
    /// let a = Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z());
    /// let b = Vertex::new(Point3::new(2.0, 0.0, 4.0), Vector3::z());
    /// assert_eq!(a.interpolate(&b, 0.5).pos, Point3::new(1.0, 0.0, 2.0));
    /// ```
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        let pos = self.pos + (other.pos - self.pos) * t;
        let normal = self.normal.lerp(&other.normal, t);
        Vertex::new(pos, normal)
    }

    /// Euclidean distance between vertex positions.
    pub fn distance_to(&self, other: &Vertex) -> Real {
        (self.pos - other.pos).norm()
    }

    /// Squared Euclidean distance, avoiding the square root for comparisons.
    pub fn distance_squared_to(&self, other: &Vertex) -> Real {
        (self.pos - other.pos).norm_squared()
    }

    /// Flip vertex normal in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_interpolate() {
        let v1 = Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z());
        let v2 = Vertex::new(Point3::new(0.0, 0.0, 3.0), Vector3::z());
        let v_mid = v1.interpolate(&v2, 1.0 / 3.0);
        assert!((v_mid.pos.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_vertex_sanitise() {
        let v = Vertex::new(
            Point3::new(Real::NAN, 1.0, Real::INFINITY),
            Vector3::new(0.0, Real::NEG_INFINITY, 1.0),
        );
        assert_eq!(v.pos, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(v.normal, Vector3::new(0.0, 0.0, 1.0));
    }
}
