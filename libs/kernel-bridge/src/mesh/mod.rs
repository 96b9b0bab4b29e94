//! # Mesh Conversions
//!
//! Converts between the domain polyhedral meshes and the host mesh.
//!
//! ## Outbound
//!
//! Domain faces of any arity become host faces by arity:
//!
//! | Vertices | Host representation                                   |
//! |----------|-------------------------------------------------------|
//! | < 3      | rejected with [`BridgeError::FaceArity`]              |
//! | 3        | one triangle                                          |
//! | 4        | one quad                                              |
//! | n ≥ 5    | barycentre vertex, n fan triangles, one n-gon entry   |
//!
//! Vertex and face order are preserved; indices are not, since every
//! n-gon adds a vertex and n faces.
//!
//! ## Inbound
//!
//! Every host vertex (fan barycentres included) becomes a domain vertex, and
//! every entry of [`Mesh::ngons_and_faces`] becomes one domain face over its
//! boundary vertices.

use config::constants::MIN_FACE_VERTICES;
use domain_kernel::{FaceVertexMesh, HalfedgeMesh, KernelResult, Point, PolyhedralMesh};
use host_kernel::{HostResult, Mesh, MeshNgon};
use tracing::{debug, trace};

use crate::cast::{CastTo, TryCastTo};
use crate::error::{BridgeError, BridgeResult};

// =============================================================================
// OUTBOUND
// =============================================================================

/// Converts a domain mesh into a host mesh.
///
/// ## Errors
///
/// - [`BridgeError::FaceArity`] for a face with fewer than three vertices
/// - [`BridgeError::Kernel`] when the source reports an inconsistent face
/// - [`BridgeError::Host`] when a host insertion is rejected
///
/// ## Example
///
/// ```rust
/// use domain_kernel::{FaceVertexMesh, Point, PolyhedralMesh};
/// use kernel_bridge::mesh_to_host;
///
/// let mut mesh = FaceVertexMesh::new();
/// for (x, y) in [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 3.0), (0.0, 2.0)] {
///     mesh.add_vertex(Point::new(x, y, 0.0));
/// }
/// mesh.add_face(&[0, 1, 2, 3, 4])?;
///
/// let host = mesh_to_host(&mesh)?;
/// assert_eq!(host.vertex_count(), 6);
/// assert_eq!(host.triangle_count(), 5);
/// assert_eq!(host.ngons()[0].boundary_vertex_indices(), &[0, 1, 2, 3, 4]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn mesh_to_host<M>(source: &M) -> BridgeResult<Mesh>
where
    M: PolyhedralMesh<Position = Point>,
{
    let mut target = Mesh::with_capacity(source.vertex_count(), source.face_count());
    for vertex in source.vertices() {
        target.add_vertex(vertex.position.cast_to());
    }

    for face in 0..source.face_count() {
        let indices = source.face_vertices(face)?;
        match *indices.as_slice() {
            [a, b, c] => {
                target.add_triangle(a, b, c)?;
            }
            [a, b, c, d] => {
                target.add_quad(a, b, c, d)?;
            }
            _ if indices.len() < MIN_FACE_VERTICES => {
                return Err(BridgeError::FaceArity {
                    face,
                    count: indices.len(),
                    min: MIN_FACE_VERTICES,
                });
            }
            _ => {
                add_fan_ngon(source, &mut target, &indices)?;
            }
        }
    }

    debug!(
        vertices = target.vertex_count(),
        faces = target.face_count(),
        ngons = target.ngon_count(),
        "Converted domain mesh to host mesh"
    );
    Ok(target)
}

/// Adds `boundary` to `target` as a triangle fan around its barycentre plus
/// an n-gon entry, returning the n-gon index.
///
/// Fan triangle `i` is `(barycentre, boundary[i], boundary[i + 1])`, wrapping
/// at the end, so every triangle keeps the winding of the polygon.
fn add_fan_ngon<M>(source: &M, target: &mut Mesh, boundary: &[usize]) -> BridgeResult<usize>
where
    M: PolyhedralMesh<Position = Point>,
{
    let mut sum = Point::ORIGIN;
    for &index in boundary {
        sum += source.vertex(index)?.position;
    }
    let barycentre = sum / boundary.len() as f64;
    let centre = target.add_vertex(barycentre.cast_to());

    let n = boundary.len();
    let fan = (0..n)
        .map(|i| target.add_triangle(centre, boundary[i], boundary[(i + 1) % n]))
        .collect::<HostResult<Vec<usize>>>()?;

    trace!(sides = n, centre, "Triangulated n-gon as fan");
    Ok(target.add_ngon(MeshNgon::new(boundary.to_vec(), fan))?)
}

impl TryCastTo<Mesh> for FaceVertexMesh<Point> {
    fn try_cast_to(&self) -> BridgeResult<Mesh> {
        mesh_to_host(self)
    }
}

impl TryCastTo<Mesh> for HalfedgeMesh<Point> {
    fn try_cast_to(&self) -> BridgeResult<Mesh> {
        mesh_to_host(self)
    }
}

// =============================================================================
// INBOUND
// =============================================================================

/// Converts a host mesh into a fresh domain mesh of type `M`.
///
/// ## Errors
///
/// [`BridgeError::Kernel`] when the domain mesh rejects a vertex reference
/// or a face (e.g. a halfedge mesh given a non-manifold edge).
///
/// ## Example
///
/// ```rust
/// use domain_kernel::{HalfedgeMesh, Point, PolyhedralMesh};
/// use host_kernel::{Mesh, Point3d};
/// use kernel_bridge::mesh_from_host;
///
/// let mut host = Mesh::new();
/// for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
///     host.add_vertex(Point3d::new(x, y, 0.0));
/// }
/// host.add_quad(0, 1, 2, 3)?;
///
/// let mesh: HalfedgeMesh<Point> = mesh_from_host(&host)?;
/// assert_eq!(mesh.face_vertices(0)?, vec![0, 1, 2, 3]);
/// assert_eq!(mesh.boundary_edge_count(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn mesh_from_host<M>(source: &Mesh) -> BridgeResult<M>
where
    M: PolyhedralMesh<Position = Point> + Default,
{
    let mut target = M::default();
    for point in source.vertices() {
        target.add_vertex(point.cast_to());
    }

    for polygon in source.ngons_and_faces() {
        let vertices = polygon
            .boundary_vertex_indices()
            .iter()
            .map(|&index| target.vertex(index).map(|vertex| vertex.index))
            .collect::<KernelResult<Vec<usize>>>()?;
        target.add_face(&vertices)?;
    }

    debug!(
        vertices = target.vertex_count(),
        faces = target.face_count(),
        host_faces = source.face_count(),
        host_ngons = source.ngon_count(),
        "Converted host mesh to domain mesh"
    );
    Ok(target)
}

impl TryCastTo<FaceVertexMesh<Point>> for Mesh {
    fn try_cast_to(&self) -> BridgeResult<FaceVertexMesh<Point>> {
        mesh_from_host(self)
    }
}

impl TryCastTo<HalfedgeMesh<Point>> for Mesh {
    fn try_cast_to(&self) -> BridgeResult<HalfedgeMesh<Point>> {
        mesh_from_host(self)
    }
}
