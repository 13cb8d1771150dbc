//! `Mesh` struct: an arena of vertices, edges and faces addressed by stable
//! integer indices, with the structural edits the slicing pipeline needs.
//!
//! All deletions go through [`Mesh::retain_vertices`], which compacts the
//! arena and rewrites every index, so edges and faces can never dangle.

use crate::float_types::{
    Real,
    parry3d::bounding_volume::Aabb,
};
use crate::mesh::vertex::Vertex;
use hashbrown::HashSet;
use nalgebra::{Point3, Vector3, partial_max, partial_min};
use std::{fmt::Debug, sync::OnceLock};

pub mod bisect;
pub mod plane;
pub mod shapes;
pub mod vertex;
pub mod weld;

pub use bisect::ClearMode;

/// An undirected edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    /// Set on edges created along the cutting plane during bisection.
    pub cut: bool,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Edge { a, b, cut: false }
    }

    /// The endpoint opposite `v`.
    pub const fn other(&self, v: usize) -> usize {
        if self.a == v { self.b } else { self.a }
    }
}

/// Canonical (smaller index first) key for an undirected edge.
pub(crate) const fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

/// A face: an ordered cycle of at least three vertex indices forming a
/// planar polygon, assumed non-self-intersecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,

    /// Lazily calculated AABB that spans `vertices`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Returns a new empty Mesh
    pub fn new() -> Self {
        Mesh {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Build a Mesh from vertex positions and face topology.
    ///
    /// Faces with out-of-range indices or fewer than three distinct
    /// vertices are dropped. Edges are derived from the face cycles,
    /// deduplicated, and vertex normals are averaged from face normals.
    pub fn from_faces(
        positions: &[Point3<Real>],
        faces: &[Vec<usize>],
        metadata: Option<S>,
    ) -> Self {
        let vertices = positions
            .iter()
            .map(|&pos| Vertex::new(pos, Vector3::zeros()))
            .collect::<Vec<_>>();

        let mut mesh = Mesh {
            vertices,
            edges: Vec::new(),
            faces: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata,
        };

        let mut seen = HashSet::new();
        for cycle in faces {
            if cycle.len() < 3 || cycle.iter().any(|&v| v >= positions.len()) {
                continue;
            }
            for i in 0..cycle.len() {
                let a = cycle[i];
                let b = cycle[(i + 1) % cycle.len()];
                if a != b && seen.insert(edge_key(a, b)) {
                    mesh.edges.push(Edge::new(a, b));
                }
            }
            mesh.faces.push(Face {
                indices: cycle.clone(),
            });
        }

        mesh.compute_vertex_normals();
        mesh
    }

    /// Average each vertex normal from the Newell normals of its faces.
    pub fn compute_vertex_normals(&mut self) {
        let mut accumulated = vec![Vector3::zeros(); self.vertices.len()];
        for face in &self.faces {
            let normal = newell_normal(&self.vertices, &face.indices);
            if normal.norm() <= Real::EPSILON {
                continue;
            }
            let normal = normal.normalize();
            for &v in &face.indices {
                accumulated[v] += normal;
            }
        }
        for (vertex, normal) in self.vertices.iter_mut().zip(accumulated) {
            vertex.normal = if normal.norm() > Real::EPSILON {
                normal.normalize()
            } else {
                Vector3::z()
            };
        }
    }

    /// Index of the edge joining `a` and `b`, in either direction.
    pub fn find_edge(&self, a: usize, b: usize) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| edge_key(e.a, e.b) == edge_key(a, b))
    }

    /// Insert `vertex` on `edge`, splitting it in two, and splice the new
    /// vertex into the cycle of every face bordering that edge. Returns the
    /// new vertex index.
    pub fn split_edge(&mut self, edge: usize, vertex: Vertex) -> usize {
        let Edge { a, b, cut } = self.edges[edge];
        let new_vertex = self.vertices.len();
        self.vertices.push(vertex);
        self.edges[edge] = Edge { a, b: new_vertex, cut };
        self.edges.push(Edge { a: new_vertex, b, cut });

        for face in &mut self.faces {
            let n = face.indices.len();
            let adjacency = (0..n).find(|&i| {
                let p = face.indices[i];
                let q = face.indices[(i + 1) % n];
                (p == a && q == b) || (p == b && q == a)
            });
            if let Some(i) = adjacency {
                face.indices.insert(i + 1, new_vertex);
            }
        }

        self.invalidate_bounding_box();
        new_vertex
    }

    /// Split `face` along the chord between cycle positions `i` and `j`
    /// (`i < j`, non-adjacent). Both halves keep the chord endpoints; the
    /// chord edge is created if it does not already exist. Returns
    /// `(new_face_index, chord_edge_index)`.
    pub fn split_face(&mut self, face: usize, i: usize, j: usize) -> (usize, usize) {
        let cycle = &self.faces[face].indices;
        debug_assert!(j > i + 1 && j < cycle.len());
        debug_assert!(!(i == 0 && j == cycle.len() - 1));

        let va = cycle[i];
        let vb = cycle[j];
        let first = cycle[i..=j].to_vec();
        let mut second = cycle[j..].to_vec();
        second.extend_from_slice(&cycle[..=i]);

        self.faces[face].indices = first;
        self.faces.push(Face { indices: second });
        let new_face = self.faces.len() - 1;

        let chord = match self.find_edge(va, vb) {
            Some(existing) => existing,
            None => {
                self.edges.push(Edge::new(va, vb));
                self.edges.len() - 1
            },
        };
        (new_face, chord)
    }

    /// Keep only the vertices `keep` approves of, compacting the arena and
    /// remapping every index. Edges and faces that reference a removed
    /// vertex are removed with it.
    pub fn retain_vertices<F: FnMut(usize) -> bool>(&mut self, mut keep: F) {
        let mut remap = vec![usize::MAX; self.vertices.len()];
        let mut kept = Vec::with_capacity(self.vertices.len());
        for (i, vertex) in self.vertices.iter().enumerate() {
            if keep(i) {
                remap[i] = kept.len();
                kept.push(*vertex);
            }
        }
        self.vertices = kept;

        self.edges = self
            .edges
            .iter()
            .filter_map(|e| {
                let (a, b) = (remap[e.a], remap[e.b]);
                (a != usize::MAX && b != usize::MAX).then_some(Edge { a, b, cut: e.cut })
            })
            .collect();

        self.faces = self
            .faces
            .iter()
            .filter_map(|face| {
                let mut indices = Vec::with_capacity(face.indices.len());
                for &v in &face.indices {
                    if remap[v] == usize::MAX {
                        return None;
                    }
                    indices.push(remap[v]);
                }
                Some(Face { indices })
            })
            .collect();

        self.invalidate_bounding_box();
    }

    /// Drop zero-length edges, duplicate edges, and faces that collapsed
    /// below three vertices.
    pub fn prune_degenerate(&mut self) {
        let mut seen = HashSet::new();
        self.edges.retain(|e| e.a != e.b && seen.insert(edge_key(e.a, e.b)));

        for face in &mut self.faces {
            face.indices.dedup();
            if face.indices.len() > 1 && face.indices.first() == face.indices.last() {
                face.indices.pop();
            }
        }
        self.faces.retain(|face| face.indices.len() >= 3);
    }

    /// Returns an [`Aabb`] indicating the 3D bounds of all `vertices`.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut min_x = Real::MAX;
            let mut min_y = Real::MAX;
            let mut min_z = Real::MAX;
            let mut max_x = -Real::MAX;
            let mut max_y = -Real::MAX;
            let mut max_z = -Real::MAX;

            for v in &self.vertices {
                min_x = *partial_min(&min_x, &v.pos.x).unwrap();
                min_y = *partial_min(&min_y, &v.pos.y).unwrap();
                min_z = *partial_min(&min_z, &v.pos.z).unwrap();

                max_x = *partial_max(&max_x, &v.pos.x).unwrap();
                max_y = *partial_max(&max_y, &v.pos.y).unwrap();
                max_z = *partial_max(&max_z, &v.pos.z).unwrap();
            }

            // If still uninitialized (e.g., no vertices), return a trivial AABB at origin
            if min_x > max_x {
                return Aabb::new(Point3::origin(), Point3::origin());
            }

            let mins = Point3::new(min_x, min_y, min_z);
            let maxs = Point3::new(max_x, max_y, max_z);
            Aabb::new(mins, maxs)
        })
    }

    /// Vertical extent (max Z − min Z) of the mesh.
    pub fn height(&self) -> Real {
        let aabb = self.bounding_box();
        aabb.maxs.z - aabb.mins.z
    }

    /// Invalidates object's cached bounding box.
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Newell's method normal of a vertex cycle (not normalized).
fn newell_normal(vertices: &[Vertex], indices: &[usize]) -> Vector3<Real> {
    let mut normal = Vector3::zeros();
    for i in 0..indices.len() {
        let p = vertices[indices[i]].pos;
        let q = vertices[indices[(i + 1) % indices.len()]].pos;
        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }
    normal
}
