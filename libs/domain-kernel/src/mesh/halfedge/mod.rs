//! # Halfedge Mesh
//!
//! Polygon mesh with explicit edge adjacency.
//!
//! ## Overview
//!
//! - Each edge is split into two halfedges with opposite directions, stored
//!   next to each other: the pair of halfedge `h` is `h ^ 1`
//! - A face stores one halfedge of its boundary loop; `next`/`prev` walk it
//! - Halfedges without a face lie on the mesh boundary
//!
//! Edges are never added explicitly. [`add_face`](PolyhedralMesh::add_face)
//! looks up each directed boundary edge of the new face; an existing
//! free halfedge is reused (the face is glued to its neighbour), otherwise a
//! new halfedge pair is allocated.
//!
//! ## Memory Layout
//!
//! ```text
//! Halfedge: [start, end, pair, next, prev, face]
//! Vertex:   [index, position] + one outgoing halfedge
//! Face:     [halfedge]
//! ```

use std::collections::HashMap;

use super::{check_face_vertices, PolyhedralMesh, Vertex};
use crate::error::{KernelError, KernelResult};

/// Smallest face loop a halfedge mesh can represent.
const MIN_LOOP_VERTICES: usize = 2;

// =============================================================================
// HALFEDGE STRUCT
// =============================================================================

/// Single directed halfedge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halfedge {
    /// Starting vertex.
    pub start: usize,
    /// Ending vertex.
    pub end: usize,
    /// Opposite halfedge of the same edge.
    pub pair: usize,
    /// Next halfedge around the face, `None` on the boundary.
    pub next: Option<usize>,
    /// Previous halfedge around the face, `None` on the boundary.
    pub prev: Option<usize>,
    /// Face this halfedge bounds, `None` on the boundary.
    pub face: Option<usize>,
}

impl Halfedge {
    /// True if no face lies on this side of the edge.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.face.is_none()
    }
}

// =============================================================================
// HALFEDGE MESH
// =============================================================================

/// Halfedge polygon mesh over position type `P`.
#[derive(Debug, Clone)]
pub struct HalfedgeMesh<P> {
    vertices: Vec<Vertex<P>>,
    /// One outgoing halfedge per vertex, `None` for isolated vertices.
    outgoing: Vec<Option<usize>>,
    halfedges: Vec<Halfedge>,
    /// One boundary halfedge per face.
    faces: Vec<usize>,
    /// Directed edge `(start, end)` to halfedge index.
    edge_lookup: HashMap<(usize, usize), usize>,
}

impl<P> Default for HalfedgeMesh<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> HalfedgeMesh<P> {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            outgoing: Vec::new(),
            halfedges: Vec::new(),
            faces: Vec::new(),
            edge_lookup: HashMap::new(),
        }
    }

    /// Check if mesh is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get number of halfedges.
    #[must_use]
    pub fn halfedge_count(&self) -> usize {
        self.halfedges.len()
    }

    /// Get number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.halfedges.len() / 2
    }

    /// Number of edges with a face on one side only.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.halfedges
            .chunks_exact(2)
            .filter(|pair| pair[0].is_boundary() != pair[1].is_boundary())
            .count()
    }

    /// Halfedge at `index`.
    pub fn halfedge(&self, index: usize) -> KernelResult<&Halfedge> {
        self.halfedges
            .get(index)
            .ok_or(KernelError::HalfedgeOutOfRange {
                index,
                count: self.halfedges.len(),
            })
    }

    /// Halfedge going from `start` to `end`, if the edge exists.
    pub fn halfedge_between(&self, start: usize, end: usize) -> Option<usize> {
        self.edge_lookup.get(&(start, end)).copied()
    }

    /// One outgoing halfedge of `vertex`, `None` if the vertex is isolated.
    pub fn outgoing_halfedge(&self, vertex: usize) -> KernelResult<Option<usize>> {
        self.outgoing
            .get(vertex)
            .copied()
            .ok_or(KernelError::VertexOutOfRange {
                index: vertex,
                count: self.vertices.len(),
            })
    }

    /// Iterate over the halfedges of a face loop.
    ///
    /// ## Parameters
    ///
    /// - `face`: Face to iterate
    ///
    /// ## Returns
    ///
    /// Iterator over halfedge indices on the face boundary.
    pub fn face_halfedges(&self, face: usize) -> KernelResult<impl Iterator<Item = usize> + '_> {
        let start = *self.faces.get(face).ok_or(KernelError::FaceOutOfRange {
            index: face,
            count: self.faces.len(),
        })?;
        Ok(FaceHalfedgeIterator {
            mesh: self,
            start,
            current: Some(start),
            first: true,
        })
    }

    /// Allocates the halfedge pair of a new edge and returns the `start -> end` half.
    fn insert_edge(&mut self, start: usize, end: usize) -> usize {
        let forward = self.halfedges.len();
        let backward = forward + 1;
        self.halfedges.push(Halfedge {
            start,
            end,
            pair: backward,
            next: None,
            prev: None,
            face: None,
        });
        self.halfedges.push(Halfedge {
            start: end,
            end: start,
            pair: forward,
            next: None,
            prev: None,
            face: None,
        });
        self.edge_lookup.insert((start, end), forward);
        self.edge_lookup.insert((end, start), backward);
        forward
    }
}

impl<P> PolyhedralMesh for HalfedgeMesh<P> {
    type Position = P;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    fn vertices(&self) -> &[Vertex<P>] {
        &self.vertices
    }

    fn face_vertices(&self, face: usize) -> KernelResult<Vec<usize>> {
        Ok(self
            .face_halfedges(face)?
            .map(|h| self.halfedges[h].start)
            .collect())
    }

    fn add_vertex(&mut self, position: P) -> usize {
        let index = self.vertices.len();
        self.vertices.push(Vertex { index, position });
        self.outgoing.push(None);
        index
    }

    fn add_face(&mut self, vertices: &[usize]) -> KernelResult<usize> {
        let n = vertices.len();
        if n < MIN_LOOP_VERTICES {
            return Err(KernelError::DegenerateFace {
                count: n,
                min: MIN_LOOP_VERTICES,
            });
        }
        check_face_vertices(vertices, self.vertices.len())?;

        let directed = |i: usize| (vertices[i], vertices[(i + 1) % n]);

        // Validate every side before touching the arenas
        for i in 0..n {
            let (start, end) = directed(i);
            if let Some(&h) = self.edge_lookup.get(&(start, end)) {
                if !self.halfedges[h].is_boundary() {
                    return Err(KernelError::NonManifoldEdge { start, end });
                }
            }
        }

        let face = self.faces.len();
        let mut loop_edges = Vec::with_capacity(n);
        for i in 0..n {
            let (start, end) = directed(i);
            let h = match self.edge_lookup.get(&(start, end)) {
                Some(&h) => h,
                None => self.insert_edge(start, end),
            };
            loop_edges.push(h);
        }

        for i in 0..n {
            let h = loop_edges[i];
            let halfedge = &mut self.halfedges[h];
            halfedge.face = Some(face);
            halfedge.next = Some(loop_edges[(i + 1) % n]);
            halfedge.prev = Some(loop_edges[(i + n - 1) % n]);

            let start = vertices[i];
            if self.outgoing[start].is_none() {
                self.outgoing[start] = Some(h);
            }
        }

        self.faces.push(loop_edges[0]);
        Ok(face)
    }
}

// =============================================================================
// ITERATORS
// =============================================================================

/// Iterator over halfedges around a face.
struct FaceHalfedgeIterator<'a, P> {
    mesh: &'a HalfedgeMesh<P>,
    start: usize,
    current: Option<usize>,
    first: bool,
}

impl<'a, P> Iterator for FaceHalfedgeIterator<'a, P> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        if !self.first && current == self.start {
            return None;
        }

        self.first = false;
        self.current = self.mesh.halfedges[current].next;

        Some(current)
    }
}
