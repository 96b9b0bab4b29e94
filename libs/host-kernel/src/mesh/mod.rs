//! # Host Mesh
//!
//! Polygon mesh with native triangles and quads and an n-gon overlay.
//!
//! ## Overview
//!
//! - `vertices`: positions, identified by index
//! - `faces`: triangles or quads referencing vertex indices
//! - `ngons`: polygons of any arity, each recording its ordered boundary
//!   vertices and the faces that tessellate it
//!
//! A face belongs to at most one n-gon. Consumers that want "polygons" rather
//! than "faces" walk [`Mesh::ngons_and_faces`], which yields every n-gon once
//! and every face that is not part of an n-gon once.

use config::constants::MIN_FACE_VERTICES;

use crate::error::{HostError, HostResult};
use crate::geometry::Point3d;

// =============================================================================
// FACES AND NGONS
// =============================================================================

/// Native mesh face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFace {
    Triangle([usize; 3]),
    Quad([usize; 4]),
}

impl MeshFace {
    /// Vertex indices in winding order.
    pub fn vertex_indices(&self) -> &[usize] {
        match self {
            MeshFace::Triangle(indices) => indices,
            MeshFace::Quad(indices) => indices,
        }
    }

    #[inline]
    pub fn is_quad(&self) -> bool {
        matches!(self, MeshFace::Quad(_))
    }

    #[inline]
    pub fn is_triangle(&self) -> bool {
        matches!(self, MeshFace::Triangle(_))
    }
}

/// Polygon of arbitrary arity layered over native faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshNgon {
    boundary: Vec<usize>,
    faces: Vec<usize>,
}

impl MeshNgon {
    /// Creates an n-gon from its ordered boundary vertices and the faces
    /// tessellating it. Validation happens in [`Mesh::add_ngon`].
    pub fn new(boundary: Vec<usize>, faces: Vec<usize>) -> Self {
        Self { boundary, faces }
    }

    /// Single-face view used by [`Mesh::ngons_and_faces`].
    fn from_face(face_index: usize, face: &MeshFace) -> Self {
        Self::new(face.vertex_indices().to_vec(), vec![face_index])
    }

    #[inline]
    pub fn boundary_vertex_indices(&self) -> &[usize] {
        &self.boundary
    }

    #[inline]
    pub fn face_indices(&self) -> &[usize] {
        &self.faces
    }

    #[inline]
    pub fn boundary_vertex_count(&self) -> usize {
        self.boundary.len()
    }
}

// =============================================================================
// MESH
// =============================================================================

/// Host polygon mesh.
///
/// # Example
///
/// ```rust
/// use host_kernel::{Mesh, MeshNgon, Point3d};
///
/// let mut mesh = Mesh::new();
/// for (x, y) in [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 3.0), (0.0, 2.0), (1.0, 1.4)] {
///     mesh.add_vertex(Point3d::new(x, y, 0.0));
/// }
/// let faces: Vec<usize> = (0..5)
///     .map(|i| mesh.add_triangle(5, i, (i + 1) % 5))
///     .collect::<Result<_, _>>()?;
/// mesh.add_ngon(MeshNgon::new(vec![0, 1, 2, 3, 4], faces))?;
///
/// assert_eq!(mesh.ngons_and_faces().count(), 1);
/// # Ok::<(), host_kernel::HostError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3d>,
    faces: Vec<MeshFace>,
    ngons: Vec<MeshNgon>,
    /// Owning n-gon of each face.
    face_ngon: Vec<Option<usize>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            ngons: Vec::new(),
            face_ngon: Vec::with_capacity(face_count),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn ngon_count(&self) -> usize {
        self.ngons.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_triangle()).count()
    }

    pub fn quad_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_quad()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3d] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[MeshFace] {
        &self.faces
    }

    #[inline]
    pub fn ngons(&self) -> &[MeshNgon] {
        &self.ngons
    }

    pub fn vertex(&self, index: usize) -> HostResult<Point3d> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(HostError::VertexOutOfRange {
                index,
                count: self.vertices.len(),
            })
    }

    pub fn face(&self, index: usize) -> HostResult<MeshFace> {
        self.faces
            .get(index)
            .copied()
            .ok_or(HostError::FaceOutOfRange {
                index,
                count: self.faces.len(),
            })
    }

    /// N-gon owning face `index`, if any.
    pub fn ngon_of_face(&self, index: usize) -> HostResult<Option<usize>> {
        self.face_ngon
            .get(index)
            .copied()
            .ok_or(HostError::FaceOutOfRange {
                index,
                count: self.faces.len(),
            })
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Point3d) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        index
    }

    /// Adds a triangle and returns its face index.
    pub fn add_triangle(&mut self, a: usize, b: usize, c: usize) -> HostResult<usize> {
        self.push_face(MeshFace::Triangle([a, b, c]))
    }

    /// Adds a quad and returns its face index.
    pub fn add_quad(&mut self, a: usize, b: usize, c: usize, d: usize) -> HostResult<usize> {
        self.push_face(MeshFace::Quad([a, b, c, d]))
    }

    /// Adds an n-gon over existing faces and returns its index.
    ///
    /// # Errors
    ///
    /// - boundary shorter than three vertices
    /// - no faces, unknown vertex or face indices
    /// - a face already owned by another n-gon
    pub fn add_ngon(&mut self, ngon: MeshNgon) -> HostResult<usize> {
        if ngon.boundary.len() < MIN_FACE_VERTICES {
            return Err(HostError::DegenerateNgon {
                count: ngon.boundary.len(),
            });
        }
        if ngon.faces.is_empty() {
            return Err(HostError::EmptyNgon);
        }
        self.check_vertices(&ngon.boundary)?;
        for &face in &ngon.faces {
            if let Some(owner) = self.ngon_of_face(face)? {
                return Err(HostError::FaceAlreadyInNgon { face, ngon: owner });
            }
        }

        let index = self.ngons.len();
        for &face in &ngon.faces {
            self.face_ngon[face] = Some(index);
        }
        self.ngons.push(ngon);
        Ok(index)
    }

    /// Polygons of the mesh in face order: every n-gon once and every face
    /// outside an n-gon once.
    ///
    /// An n-gon is yielded at the position of its lowest face index. A lone
    /// face is yielded as a single-face n-gon whose boundary is the face's
    /// own vertex list.
    pub fn ngons_and_faces(&self) -> impl Iterator<Item = MeshNgon> + '_ {
        let mut yielded = vec![false; self.ngons.len()];
        self.faces
            .iter()
            .enumerate()
            .filter_map(move |(index, face)| match self.face_ngon[index] {
                None => Some(MeshNgon::from_face(index, face)),
                Some(ngon) if !yielded[ngon] => {
                    yielded[ngon] = true;
                    Some(self.ngons[ngon].clone())
                }
                Some(_) => None,
            })
    }

    fn push_face(&mut self, face: MeshFace) -> HostResult<usize> {
        self.check_vertices(face.vertex_indices())?;
        let index = self.faces.len();
        self.faces.push(face);
        self.face_ngon.push(None);
        Ok(index)
    }

    fn check_vertices(&self, indices: &[usize]) -> HostResult<()> {
        let count = self.vertices.len();
        match indices.iter().find(|&&index| index >= count) {
            Some(&index) => Err(HostError::VertexOutOfRange { index, count }),
            None => Ok(()),
        }
    }
}
