use domain_kernel::{FaceVertexMesh, HalfedgeMesh, Point, PolyhedralMesh};
use host_kernel::Mesh;
use kernel_bridge::prelude::*;

/// Unit cube with one face split into a pentagon by an extra edge vertex.
fn cube_with_pentagon<M: PolyhedralMesh<Position = Point> + Default>() -> M {
    let mut mesh = M::default();
    for (x, y, z) in [
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 1.0),
        (1.0, 1.0, 1.0),
        (0.0, 1.0, 1.0),
        (0.5, 0.0, 0.0),
    ] {
        mesh.add_vertex(Point::new(x, y, z));
    }
    // Bottom face gains vertex 8 on edge 0-1
    mesh.add_face(&[0, 3, 2, 1, 8]).unwrap();
    mesh.add_face(&[4, 5, 6, 7]).unwrap();
    mesh.add_face(&[0, 8, 1, 5, 4]).unwrap();
    mesh.add_face(&[1, 2, 6, 5]).unwrap();
    mesh.add_face(&[2, 3, 7, 6]).unwrap();
    mesh.add_face(&[3, 0, 4, 7]).unwrap();
    mesh
}

#[test]
fn pentagons_become_fans_with_ngons() {
    let mesh: HalfedgeMesh<Point> = cube_with_pentagon();
    assert_eq!(mesh.boundary_edge_count(), 0);

    let host: Mesh = mesh.try_cast_to().unwrap();
    assert_eq!(host.vertex_count(), 9 + 2);
    assert_eq!(host.quad_count(), 4);
    assert_eq!(host.triangle_count(), 10);
    assert_eq!(host.ngon_count(), 2);
    assert_eq!(host.ngons()[0].boundary_vertex_indices(), &[0, 3, 2, 1, 8]);
    assert_eq!(host.ngons()[1].boundary_vertex_indices(), &[0, 8, 1, 5, 4]);
}

#[test]
fn closed_mesh_roundtrip_through_host() {
    let original: HalfedgeMesh<Point> = cube_with_pentagon();
    let host: Mesh = original.try_cast_to().unwrap();
    let back: HalfedgeMesh<Point> = host.try_cast_to().unwrap();

    assert_eq!(back.face_count(), original.face_count());
    assert_eq!(back.vertex_count(), original.vertex_count() + 2);
    assert_eq!(back.boundary_edge_count(), 0);
    for face in 0..original.face_count() {
        assert_eq!(
            back.face_vertices(face).unwrap(),
            original.face_vertices(face).unwrap()
        );
    }
}

#[test]
fn face_vertex_and_halfedge_agree() {
    let face_vertex: FaceVertexMesh<Point> = cube_with_pentagon();
    let halfedge: HalfedgeMesh<Point> = cube_with_pentagon();

    let a = kernel_bridge::mesh_to_host(&face_vertex).unwrap();
    let b = kernel_bridge::mesh_to_host(&halfedge).unwrap();
    assert_eq!(a, b);

    let back: FaceVertexMesh<Point> = kernel_bridge::mesh_from_host(&a).unwrap();
    assert_eq!(back.faces().count(), 6);
}

#[test]
fn degenerate_face_rejected() {
    let mut mesh: FaceVertexMesh<Point> = cube_with_pentagon();
    mesh.add_face(&[0]).unwrap();

    let err = TryCastTo::<Mesh>::try_cast_to(&mesh).unwrap_err();
    assert_eq!(
        err,
        BridgeError::FaceArity {
            face: 6,
            count: 1,
            min: 3
        }
    );
}
