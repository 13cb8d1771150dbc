//! Bisection: slicing a mesh by an infinite plane.

use crate::mesh::plane::{BACK, COPLANAR, FRONT, Plane, SPANNING};
use crate::mesh::{Edge, Mesh};
use std::fmt::Debug;

/// Which side(s) of the plane to discard after splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearMode {
    /// Split spanning geometry but keep both halves.
    KeepBoth,
    /// Discard everything strictly above the plane (normal side).
    ClearAbove,
    /// Discard everything strictly below the plane.
    ClearBelow,
    /// Discard both sides, retaining only the cut curve and any geometry
    /// already lying in the plane.
    #[default]
    ClearBoth,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Bisect this mesh by `plane`: split every edge and face that spans
    /// the plane along the exact intersection, then discard geometry per
    /// `mode`.
    ///
    /// Chord edges introduced across split faces carry [`Edge::cut`], so
    /// with [`ClearMode::ClearBoth`] the surviving edges trace the planar
    /// intersection curve(s). A plane that misses the mesh entirely leaves
    /// an empty mesh under `ClearBoth`; faces lying in the plane pass
    /// through unsplit. This operation does not fail on malformed input —
    /// it degrades to whatever curve fragments are geometrically
    /// derivable, dropping degenerate artifacts.
    pub fn bisect(&mut self, plane: &Plane, mode: ClearMode) {
        let mut types: Vec<i8> = self
            .vertices
            .iter()
            .map(|v| plane.orient_point(&v.pos))
            .collect();

        // Split every edge whose endpoints straddle the plane at the
        // interpolated crossing. New vertices are on-plane by construction.
        for edge in 0..self.edges.len() {
            let Edge { a, b, .. } = self.edges[edge];
            if (types[a] | types[b]) != SPANNING {
                continue;
            }
            let da = plane.signed_distance(&self.vertices[a].pos);
            let db = plane.signed_distance(&self.vertices[b].pos);
            let vertex = self.vertices[a].interpolate(&self.vertices[b], da / (da - db));
            self.split_edge(edge, vertex);
            types.push(COPLANAR);
        }

        // Split each spanning face along its pair of on-plane vertices and
        // flag the chord as cut boundary. Coplanar faces pass through, as
        // do faces whose crossing degenerates to a corner touch.
        for face in 0..self.faces.len() {
            let cycle = &self.faces[face].indices;
            let face_type = cycle.iter().fold(0, |acc, &v| acc | types[v]);
            if face_type != SPANNING {
                continue;
            }
            let on_plane: Vec<usize> = (0..cycle.len())
                .filter(|&i| types[cycle[i]] == COPLANAR)
                .collect();
            let &[i, j] = on_plane.as_slice() else {
                continue;
            };
            if j == i + 1 || (i == 0 && j == cycle.len() - 1) {
                continue;
            }
            let (_, chord) = self.split_face(face, i, j);
            self.edges[chord].cut = true;
        }

        let (clear_above, clear_below) = match mode {
            ClearMode::KeepBoth => {
                self.prune_degenerate();
                return;
            },
            ClearMode::ClearAbove => (true, false),
            ClearMode::ClearBelow => (false, true),
            ClearMode::ClearBoth => (true, true),
        };

        self.retain_vertices(|v| match types[v] {
            FRONT => !clear_above,
            BACK => !clear_below,
            _ => true,
        });
        self.prune_degenerate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::plane::Plane;

    #[test]
    fn test_spanning_triangle_splits() {
        // triangle straddling z = 0
        let mut mesh: Mesh<()> = Mesh::from_faces(
            &[
                nalgebra::Point3::new(0.0, 0.0, -1.0),
                nalgebra::Point3::new(2.0, 0.0, -1.0),
                nalgebra::Point3::new(1.0, 0.0, 1.0),
            ],
            &[vec![0, 1, 2]],
            None,
        );
        mesh.bisect(&Plane::horizontal(0.0), ClearMode::KeepBoth);

        // two crossing vertices, two faces, one cut chord
        assert_eq!(mesh.vertices.len(), 5);
        assert_eq!(mesh.faces.len(), 2);
        assert_eq!(mesh.edges.iter().filter(|e| e.cut).count(), 1);
    }

    #[test]
    fn test_clear_above_keeps_lower_half() {
        let mut mesh: Mesh<()> = Mesh::cube(1.0, None);
        mesh.bisect(&Plane::horizontal(0.5), ClearMode::ClearAbove);

        assert!(!mesh.vertices.is_empty());
        for v in &mesh.vertices {
            assert!(v.pos.z <= 0.5 + crate::float_types::EPSILON);
        }
        // the bottom face survives intact
        assert!(!mesh.faces.is_empty());
    }
}
