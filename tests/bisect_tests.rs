use isoline::{ClearMode, Mesh, Plane, polylines};
use nalgebra::Point3;

#[test]
fn cube_cross_section_is_single_closed_loop() {
    let mut cube: Mesh<()> = Mesh::cube(1.0, None);
    cube.bisect(&Plane::horizontal(0.5), ClearMode::ClearBoth);

    assert_eq!(cube.vertices.len(), 4);
    assert_eq!(cube.edges.len(), 4);
    assert!(cube.faces.is_empty());
    assert!(cube.edges.iter().all(|e| e.cut));
    assert!(cube.vertices.iter().all(|v| v.pos.z == 0.5));

    let lines = polylines(&cube);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].closed);
    assert_eq!(lines[0].points.len(), 4);
}

#[test]
fn pyramid_cross_section_shrinks_with_height() {
    let mut pyramid: Mesh<()> = Mesh::pyramid(2.0, 2.0, None);
    pyramid.bisect(&Plane::horizontal(1.0), ClearMode::ClearBoth);

    let lines = polylines(&pyramid);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].closed);
    assert_eq!(lines[0].points.len(), 4);

    // halfway up a 2×2 pyramid the section is a 1×1 square
    for p in &lines[0].points {
        assert!(p.x == 0.5 || p.x == 1.5);
        assert!(p.y == 0.5 || p.y == 1.5);
    }
}

#[test]
fn plane_outside_extent_yields_empty_mesh() {
    let mut above: Mesh<()> = Mesh::cube(1.0, None);
    above.bisect(&Plane::horizontal(5.0), ClearMode::ClearBoth);
    assert!(above.vertices.is_empty());
    assert!(above.edges.is_empty());
    assert!(above.faces.is_empty());

    let mut below: Mesh<()> = Mesh::cube(1.0, None);
    below.bisect(&Plane::horizontal(-5.0), ClearMode::ClearBoth);
    assert!(below.vertices.is_empty());
}

#[test]
fn coplanar_face_passes_through_unsplit() {
    // the cutting plane coincides with the cube's bottom face
    let mut cube: Mesh<()> = Mesh::cube(1.0, None);
    cube.bisect(&Plane::horizontal(0.0), ClearMode::ClearBoth);

    assert_eq!(cube.vertices.len(), 4);
    assert_eq!(cube.faces.len(), 1);
    assert_eq!(cube.faces[0].indices.len(), 4);
    assert_eq!(cube.edges.len(), 4);
}

#[test]
fn clear_below_keeps_upper_half() {
    let mut cube: Mesh<()> = Mesh::cube(1.0, None);
    cube.bisect(&Plane::horizontal(0.25), ClearMode::ClearBelow);

    assert!(!cube.vertices.is_empty());
    for v in &cube.vertices {
        assert!(v.pos.z >= 0.25 - isoline::float_types::EPSILON);
    }
    // top face plus four clipped side faces
    assert_eq!(cube.faces.len(), 5);
}

#[test]
fn keep_both_splits_without_discarding() {
    let mut cube: Mesh<()> = Mesh::cube(1.0, None);
    cube.bisect(&Plane::horizontal(0.5), ClearMode::KeepBoth);

    assert_eq!(cube.vertices.len(), 12);
    // 12 original edges, 4 of them split, plus 4 cut chords
    assert_eq!(cube.edges.len(), 20);
    // 4 side faces split in two, top and bottom untouched
    assert_eq!(cube.faces.len(), 10);
    assert_eq!(cube.edges.iter().filter(|e| e.cut).count(), 4);
}

#[test]
fn disjoint_solids_give_disjoint_loops() {
    // two unit cubes side by side in one mesh
    let mut positions = Vec::new();
    let mut faces = Vec::new();
    for offset in [0.0, 3.0] {
        let base = positions.len();
        for (x, y, z) in [
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 1.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 0.0, 1.0),
            (1.0, 1.0, 1.0),
            (0.0, 1.0, 1.0),
        ] {
            positions.push(Point3::new(x + offset, y, z));
        }
        for quad in [
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [3, 7, 6, 2],
            [0, 4, 7, 3],
            [1, 2, 6, 5],
        ] {
            faces.push(quad.iter().map(|&i| base + i).collect::<Vec<_>>());
        }
    }
    let mut mesh: Mesh<()> = Mesh::from_faces(&positions, &faces, None);
    mesh.bisect(&Plane::horizontal(0.5), ClearMode::ClearBoth);

    let lines = polylines(&mesh);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.closed && l.points.len() == 4));
}
