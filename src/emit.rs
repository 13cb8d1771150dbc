//! The curve-emitter boundary: ordering a contour mesh's edges into
//! polylines and handing them to the host's curve builder.
//!
//! The crate never fits curves itself — hosts implement [`EmitCurves`]
//! (e.g. as a NURBS builder) and [`emit_stack`] drives it over a finished
//! contour stack.

use crate::contour::ContourLevel;
use crate::float_types::Real;
use crate::mesh::Mesh;
use geo::LineString;
use nalgebra::Point3;
use std::fmt::Debug;
use tracing::debug;

/// An ordered planar point chain extracted from a contour mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point3<Real>>,
    /// Whether the last point connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Project to a 2D [`LineString`]; contours are horizontal, so only
    /// the constant Z is dropped.
    pub fn to_line_string(&self) -> LineString<Real> {
        LineString::from(
            self.points
                .iter()
                .map(|p| (p.x, p.y))
                .collect::<Vec<_>>(),
        )
    }
}

/// Chain the edges of `mesh` into polylines, preserving vertex order.
///
/// Closed loops come out as `closed` polylines without a repeated end
/// point; open chains (from non-manifold or open input) keep their
/// endpoints. Branch vertices (valence above two) terminate chains rather
/// than being guessed through.
pub fn polylines<S: Clone + Send + Sync + Debug>(mesh: &Mesh<S>) -> Vec<Polyline> {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); mesh.vertices.len()];
    for (i, edge) in mesh.edges.iter().enumerate() {
        adjacency[edge.a].push(i);
        adjacency[edge.b].push(i);
    }

    let mut visited = vec![false; mesh.edges.len()];
    let mut lines = Vec::new();

    // Open chains start at endpoints and branch vertices.
    for v in 0..mesh.vertices.len() {
        if adjacency[v].len() == 2 {
            continue;
        }
        for k in 0..adjacency[v].len() {
            let edge = adjacency[v][k];
            if !visited[edge] {
                lines.push(walk(mesh, &adjacency, &mut visited, v, edge));
            }
        }
    }

    // Everything left is a closed loop of valence-two vertices.
    for edge in 0..mesh.edges.len() {
        if !visited[edge] {
            lines.push(walk(mesh, &adjacency, &mut visited, mesh.edges[edge].a, edge));
        }
    }

    lines
}

fn walk<S: Clone + Send + Sync + Debug>(
    mesh: &Mesh<S>,
    adjacency: &[Vec<usize>],
    visited: &mut [bool],
    start: usize,
    first_edge: usize,
) -> Polyline {
    let mut points = vec![mesh.vertices[start].pos];
    let mut at = start;
    let mut edge = first_edge;

    loop {
        visited[edge] = true;
        let next = mesh.edges[edge].other(at);
        if next == start {
            return Polyline { points, closed: true };
        }
        points.push(mesh.vertices[next].pos);

        if adjacency[next].len() != 2 {
            return Polyline { points, closed: false };
        }
        let Some(follow) = adjacency[next].iter().copied().find(|&e| !visited[e]) else {
            return Polyline { points, closed: false };
        };
        at = next;
        edge = follow;
    }
}

/// Host-side conversion of contour polylines into smooth curve entities.
///
/// Implementations must carry vertex order losslessly into curve control
/// points and drop no geometry.
pub trait EmitCurves {
    /// Curve entity type produced by the host.
    type Curve;

    /// Convert one level's polylines into a named curve entity.
    fn emit(&mut self, name: &str, height: Real, polylines: &[Polyline]) -> Self::Curve;

    /// Concatenate already emitted curves into a single entity.
    fn join(&mut self, name: &str, curves: Vec<Self::Curve>) -> Self::Curve;
}

/// Emit every non-empty level of a contour stack through `emitter`.
///
/// Empty levels (a plane that missed the mesh) are skipped, not errors.
/// With `join`, the emitted curves are concatenated into one entity named
/// after `group_name`; otherwise one named curve per level is returned, in
/// level order.
pub fn emit_stack<S, E>(
    levels: &[ContourLevel<S>],
    emitter: &mut E,
    group_name: &str,
    join: bool,
) -> Vec<E::Curve>
where
    S: Clone + Send + Sync + Debug,
    E: EmitCurves,
{
    let mut curves = Vec::with_capacity(levels.len());
    for level in levels {
        let lines = polylines(&level.mesh);
        if lines.is_empty() {
            debug!(index = level.index, "skipping empty contour level");
            continue;
        }
        curves.push(emitter.emit(&level.name, level.height, &lines));
    }

    if join && !curves.is_empty() {
        vec![emitter.join(group_name, curves)]
    } else {
        curves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Edge;
    use crate::mesh::vertex::Vertex;
    use nalgebra::Vector3;

    fn wire(points: &[(Real, Real)], edges: &[(usize, usize)]) -> Mesh<()> {
        let mut mesh = Mesh::new();
        for &(x, y) in points {
            mesh.vertices.push(Vertex::new(Point3::new(x, y, 0.0), Vector3::z()));
        }
        for &(a, b) in edges {
            mesh.edges.push(Edge::new(a, b));
        }
        mesh
    }

    #[test]
    fn test_closed_loop_chains() {
        let mesh = wire(
            &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
        );
        let lines = polylines(&mesh);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].closed);
        assert_eq!(lines[0].points.len(), 4);
    }

    #[test]
    fn test_open_chain_keeps_endpoints() {
        let mesh = wire(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], &[(0, 1), (1, 2)]);
        let lines = polylines(&mesh);

        assert_eq!(lines.len(), 1);
        assert!(!lines[0].closed);
        assert_eq!(lines[0].points.len(), 3);
    }

    #[test]
    fn test_two_disjoint_loops() {
        let mesh = wire(
            &[
                (0.0, 0.0),
                (1.0, 0.0),
                (0.5, 1.0),
                (5.0, 0.0),
                (6.0, 0.0),
                (5.5, 1.0),
            ],
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
        );
        let lines = polylines(&mesh);

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.closed && l.points.len() == 3));
    }

    #[test]
    fn test_to_line_string_drops_only_z() {
        let mesh = wire(&[(0.0, 0.0), (2.0, 3.0)], &[(0, 1)]);
        let lines = polylines(&mesh);
        let ls = lines[0].to_line_string();

        assert_eq!(ls.0.len(), 2);
        assert_eq!(ls.0[1].x, 2.0);
        assert_eq!(ls.0[1].y, 3.0);
    }
}
