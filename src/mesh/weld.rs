//! Welding (automerge): collapsing vertices that fall within a distance
//! tolerance of each other into one representative.

use crate::float_types::Real;
use crate::mesh::Mesh;
use hashbrown::HashMap;
use std::fmt::Debug;

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Merge all vertices pairwise within `distance` of an earlier vertex
    /// into that vertex, rewiring every edge and face that referenced them
    /// and dropping the zero-length edges and collapsed faces the merge
    /// produces.
    ///
    /// `distance == 0.0` merges exactly coincident positions only. After
    /// welding, no two surviving vertices lie strictly closer than
    /// `distance`, and welding again with the same tolerance is a no-op.
    /// Raising the tolerance is the contour *simplification* knob: coarser
    /// welds mean fewer vertices per polyline.
    ///
    /// # Panics
    /// If `distance` is negative.
    pub fn weld(&mut self, distance: Real) {
        assert!(distance >= 0.0, "weld distance must be non-negative");

        let representative = if distance == 0.0 {
            self.exact_representatives()
        } else {
            self.grid_representatives(distance)
        };

        if representative.iter().enumerate().all(|(i, &r)| i == r) {
            return;
        }

        for edge in &mut self.edges {
            edge.a = representative[edge.a];
            edge.b = representative[edge.b];
        }
        for face in &mut self.faces {
            for v in &mut face.indices {
                *v = representative[*v];
            }
        }

        self.retain_vertices(|v| representative[v] == v);
        self.prune_degenerate();
    }

    /// Representative per vertex for exact-coincidence merging, keyed on
    /// position bit patterns.
    fn exact_representatives(&self) -> Vec<usize> {
        let mut first_at: HashMap<(u64, u64, u64), usize> = HashMap::new();
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let key = (
                    v.pos.x.to_bits() as u64,
                    v.pos.y.to_bits() as u64,
                    v.pos.z.to_bits() as u64,
                );
                *first_at.entry(key).or_insert(i)
            })
            .collect()
    }

    /// Representative per vertex via a spatial hash grid with cells the
    /// size of the tolerance; any pair within `distance` lands in the same
    /// or an adjacent cell.
    fn grid_representatives(&self, distance: Real) -> Vec<usize> {
        let mut grid: HashMap<(i64, i64, i64), Vec<usize>> = HashMap::new();
        let mut representative = Vec::with_capacity(self.vertices.len());

        for (i, vertex) in self.vertices.iter().enumerate() {
            let cell = (
                (vertex.pos.x / distance).floor() as i64,
                (vertex.pos.y / distance).floor() as i64,
                (vertex.pos.z / distance).floor() as i64,
            );

            let mut found = None;
            'search: for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        let neighbor = (cell.0 + dx, cell.1 + dy, cell.2 + dz);
                        let Some(bucket) = grid.get(&neighbor) else {
                            continue;
                        };
                        for &r in bucket {
                            if vertex.distance_to(&self.vertices[r]) <= distance {
                                found = Some(r);
                                break 'search;
                            }
                        }
                    }
                }
            }

            match found {
                Some(r) => representative.push(r),
                None => {
                    grid.entry(cell).or_default().push(i);
                    representative.push(i);
                },
            }
        }
        representative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    use crate::mesh::vertex::Vertex;

    #[test]
    fn test_weld_merges_near_duplicates() {
        let mut mesh: Mesh<()> = Mesh::new();
        mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z()));
        mesh.vertices.push(Vertex::new(Point3::new(0.05, 0.0, 0.0), Vector3::z()));
        mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()));
        mesh.edges.push(crate::mesh::Edge::new(0, 1));
        mesh.edges.push(crate::mesh::Edge::new(1, 2));

        mesh.weld(0.1);

        // the micro-edge collapses, leaving one edge between the survivors
        assert_eq!(mesh.vertices.len(), 2);
        assert_eq!(mesh.edges.len(), 1);
    }

    #[test]
    fn test_weld_zero_is_exact_only() {
        let mut mesh: Mesh<()> = Mesh::new();
        mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z()));
        mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z()));
        mesh.vertices.push(Vertex::new(Point3::new(1e-9, 0.0, 0.0), Vector3::z()));

        mesh.weld(0.0);

        // the exact duplicate merges, the nearby vertex does not
        assert_eq!(mesh.vertices.len(), 2);
    }
}
