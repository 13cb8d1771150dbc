//! Basic solids with shared vertices, handy as slicing sources.

use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::Point3;
use std::fmt::Debug;

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// An axis-aligned cuboid spanning `[0, width] × [0, length] × [0, height]`.
    pub fn cuboid(width: Real, length: Real, height: Real, metadata: Option<S>) -> Mesh<S> {
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(width, 0.0, 0.0),
            Point3::new(width, length, 0.0),
            Point3::new(0.0, length, 0.0),
            Point3::new(0.0, 0.0, height),
            Point3::new(width, 0.0, height),
            Point3::new(width, length, height),
            Point3::new(0.0, length, height),
        ];

        let faces = vec![
            vec![0, 3, 2, 1], // Bottom face
            vec![4, 5, 6, 7], // Top face
            vec![0, 1, 5, 4], // Front face
            vec![3, 7, 6, 2], // Back face
            vec![0, 4, 7, 3], // Left face
            vec![1, 2, 6, 5], // Right face
        ];

        Mesh::from_faces(&positions, &faces, metadata)
    }

    /// A cube spanning `[0, width]` on each axis.
    pub fn cube(width: Real, metadata: Option<S>) -> Mesh<S> {
        Self::cuboid(width, width, width, metadata)
    }

    /// A square pyramid with the given base side and apex height, base on
    /// the `z = 0` plane.
    pub fn pyramid(base: Real, height: Real, metadata: Option<S>) -> Mesh<S> {
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(base, 0.0, 0.0),
            Point3::new(base, base, 0.0),
            Point3::new(0.0, base, 0.0),
            Point3::new(base / 2.0, base / 2.0, height),
        ];

        let faces = vec![
            vec![0, 3, 2, 1], // Base
            vec![0, 1, 4],
            vec![1, 2, 4],
            vec![2, 3, 4],
            vec![3, 0, 4],
        ];

        Mesh::from_faces(&positions, &faces, metadata)
    }
}
