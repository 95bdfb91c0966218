pub mod edge;
pub mod face;
pub mod feature;
mod svt;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use feature::{Feature, FeatureKind, Proximity};
pub use vertex::{VertexData, VertexId};

use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::error::{PolytopeError, Result};
use crate::math::Point3;

/// Initial storage reserved by [`Polytope::with_capacity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolytopeCapacity {
    /// Number of vertices to reserve room for.
    pub vertices: usize,
    /// Number of edges to reserve room for.
    pub edges: usize,
    /// Number of faces to reserve room for.
    pub faces: usize,
}

impl Default for PolytopeCapacity {
    fn default() -> Self {
        // Euler: a closed triangulation with V vertices has 3V - 6 edges and 2V - 4 faces.
        Self {
            vertices: 64,
            edges: 186,
            faces: 124,
        }
    }
}

/// Incrementally built triangulated polytope around the origin.
///
/// The polytope owns every vertex, edge and face in typed arenas; elements
/// reference each other through ids (generational indices), so a handle kept
/// across a deletion is reported as [`PolytopeError::EntityNotFound`] instead
/// of dangling.
///
/// Each element caches its squared distance to the origin and the point
/// realizing it. Elements are created bottom-up (vertices, then edges, then
/// faces) and torn down top-down. Insertion order is remembered per kind and
/// is the tie-break order of [`Polytope::nearest`].
#[derive(Debug, Default)]
pub struct Polytope {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    vertex_order: Vec<VertexId>,
    edge_order: Vec<EdgeId>,
    face_order: Vec<FaceId>,
}

impl Polytope {
    /// Creates a new, empty polytope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty polytope with storage reserved up front.
    #[must_use]
    pub fn with_capacity(capacity: PolytopeCapacity) -> Self {
        Self {
            vertices: SlotMap::with_capacity_and_key(capacity.vertices),
            edges: SlotMap::with_capacity_and_key(capacity.edges),
            faces: SlotMap::with_capacity_and_key(capacity.faces),
            vertex_order: Vec::with_capacity(capacity.vertices),
            edge_order: Vec::with_capacity(capacity.edges),
            face_order: Vec::with_capacity(capacity.faces),
        }
    }

    // --- Vertex operations ---

    /// Inserts a vertex at `point` and returns its ID.
    pub fn add_vertex(&mut self, point: Point3) -> VertexId {
        let id = self.vertices.insert(VertexData::new(point));
        self.vertex_order.push(id);
        trace!(?id, ?point, "added vertex");
        id
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the polytope.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData> {
        self.vertices
            .get(id)
            .ok_or(PolytopeError::EntityNotFound("vertex"))
    }

    /// Moves a vertex without touching cached distances.
    ///
    /// Cached values of the vertex and of every element built on it are stale
    /// until [`recompute_distances`](Self::recompute_distances) is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the polytope.
    pub fn set_vertex_point(&mut self, id: VertexId, point: Point3) -> Result<()> {
        let vertex = self
            .vertices
            .get_mut(id)
            .ok_or(PolytopeError::EntityNotFound("vertex"))?;
        vertex.point = point;
        Ok(())
    }

    /// Removes a vertex that no edge refers to anymore.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found, or if edges are still
    /// attached to it (the polytope is left unchanged).
    pub fn delete_vertex(&mut self, id: VertexId) -> Result<()> {
        let vertex = self.vertex(id)?;
        if !vertex.edges.is_empty() {
            return Err(PolytopeError::StillReferenced {
                kind: FeatureKind::Vertex.name(),
                count: vertex.edges.len(),
            });
        }
        self.vertices.remove(id);
        self.vertex_order.retain(|&v| v != id);
        trace!(?id, "deleted vertex");
        Ok(())
    }

    // --- Edge operations ---

    /// Inserts an edge between two vertices and returns its ID.
    ///
    /// The endpoints must be distinct; this is only checked in debug builds.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is not found in the polytope.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId> {
        debug_assert_ne!(a, b, "edge endpoints must be distinct");
        let pa = *self.vertex(a)?.point();
        let pb = *self.vertex(b)?.point();

        let id = self.edges.insert(EdgeData::new([a, b], &pa, &pb));
        self.edge_order.push(id);
        for v in [a, b] {
            if let Some(vertex) = self.vertices.get_mut(v) {
                vertex.edges.push(id);
            }
        }
        trace!(?id, ?a, ?b, "added edge");
        Ok(id)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the polytope.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData> {
        self.edges
            .get(id)
            .ok_or(PolytopeError::EntityNotFound("edge"))
    }

    /// Removes an edge that no face borders anymore.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found, or if a face still refers
    /// to it (the polytope is left unchanged).
    pub fn delete_edge(&mut self, id: EdgeId) -> Result<()> {
        let count = self.edge(id)?.face_count();
        if count > 0 {
            return Err(PolytopeError::StillReferenced {
                kind: FeatureKind::Edge.name(),
                count,
            });
        }
        if let Some(edge) = self.edges.remove(id) {
            self.unlink_edge(id, &edge);
        }
        self.edge_order.retain(|&e| e != id);
        trace!(?id, "deleted edge");
        Ok(())
    }

    fn unlink_edge(&mut self, id: EdgeId, edge: &EdgeData) {
        for v in edge.vertices {
            if let Some(vertex) = self.vertices.get_mut(v) {
                if let Some(pos) = vertex.edges.iter().position(|&e| e == id) {
                    vertex.edges.swap_remove(pos);
                }
            }
        }
    }

    // --- Face operations ---

    /// Inserts a triangular face bounded by three edges and returns its ID.
    ///
    /// The edges must close a triangle and each must border at most one face
    /// already; both are only checked in debug builds. The corners are `e1`'s
    /// endpoints plus the endpoint of `e2` that `e1` lacks.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge (or its vertices) is not found in the
    /// polytope.
    pub fn add_face(&mut self, e1: EdgeId, e2: EdgeId, e3: EdgeId) -> Result<FaceId> {
        let edges = [e1, e2, e3];
        for e in edges {
            self.edge(e)?;
        }
        debug_assert!(
            self.edges_close_triangle(edges),
            "face edges must form a closed triangle"
        );
        let corners = self.corner_points(edges)?;

        let id = self.faces.insert(FaceData::new(edges, &corners));
        self.face_order.push(id);
        for e in edges {
            if let Some(edge) = self.edges.get_mut(e) {
                edge.attach_face(id);
            }
        }
        trace!(?id, ?e1, ?e2, ?e3, "added face");
        Ok(id)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the polytope.
    pub fn face(&self, id: FaceId) -> Result<&FaceData> {
        self.faces
            .get(id)
            .ok_or(PolytopeError::EntityNotFound("face"))
    }

    /// Returns the three corner vertices of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its edges is not found.
    pub fn face_vertices(&self, id: FaceId) -> Result<[VertexId; 3]> {
        self.corner_ids(self.face(id)?.edges)
    }

    /// Returns the three corner positions of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its edges is not found.
    pub fn face_points(&self, id: FaceId) -> Result<[Point3; 3]> {
        self.corner_points(self.face(id)?.edges)
    }

    /// Removes a face and frees its slot on each bounding edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found in the polytope.
    pub fn delete_face(&mut self, id: FaceId) -> Result<()> {
        let face = self
            .faces
            .remove(id)
            .ok_or(PolytopeError::EntityNotFound("face"))?;
        self.unlink_face(id, &face);
        self.face_order.retain(|&f| f != id);
        trace!(?id, "deleted face");
        Ok(())
    }

    fn unlink_face(&mut self, id: FaceId, face: &FaceData) {
        for e in face.edges {
            if let Some(edge) = self.edges.get_mut(e) {
                edge.detach_face(id);
            }
        }
    }

    fn corner_ids(&self, [e1, e2, _]: [EdgeId; 3]) -> Result<[VertexId; 3]> {
        let [a, b] = self.edge(e1)?.vertices;
        let [c0, c1] = self.edge(e2)?.vertices;
        let c = if c0 != a && c0 != b { c0 } else { c1 };
        Ok([a, b, c])
    }

    fn corner_points(&self, edges: [EdgeId; 3]) -> Result<[Point3; 3]> {
        let [a, b, c] = self.corner_ids(edges)?;
        Ok([
            *self.vertex(a)?.point(),
            *self.vertex(b)?.point(),
            *self.vertex(c)?.point(),
        ])
    }

    /// Every endpoint of the three edges is shared by exactly two of them.
    fn edges_close_triangle(&self, edges: [EdgeId; 3]) -> bool {
        let mut ends = Vec::with_capacity(6);
        for e in edges {
            match self.edges.get(e) {
                Some(edge) if edge.vertices[0] != edge.vertices[1] => {
                    ends.extend(edge.vertices);
                }
                _ => return false,
            }
        }
        ends.iter()
            .all(|v| ends.iter().filter(|&w| w == v).count() == 2)
    }

    // --- Whole-polytope operations ---

    /// Returns the cached proximity of any element.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the polytope.
    pub fn proximity(&self, feature: Feature) -> Result<&Proximity> {
        match feature {
            Feature::Vertex(id) => self.vertex(id).map(|v| &v.proximity),
            Feature::Edge(id) => self.edge(id).map(|e| &e.proximity),
            Feature::Face(id) => self.face(id).map(|f| &f.proximity),
        }
    }

    /// Returns the element closest to the origin, or `None` if the polytope is
    /// empty.
    ///
    /// Vertices are scanned first, then edges, then faces, each in insertion
    /// order. Only a strictly smaller distance replaces the current best, so
    /// ties go to the earlier kind and then to the earlier element.
    #[must_use]
    pub fn nearest(&self) -> Option<Feature> {
        let vertices = self
            .vertex_order
            .iter()
            .filter_map(|&id| self.vertices.get(id).map(|v| (Feature::Vertex(id), v.dist())));
        let edges = self
            .edge_order
            .iter()
            .filter_map(|&id| self.edges.get(id).map(|e| (Feature::Edge(id), e.dist())));
        let faces = self
            .face_order
            .iter()
            .filter_map(|&id| self.faces.get(id).map(|f| (Feature::Face(id), f.dist())));

        let mut nearest = None;
        let mut nearest_dist = f64::MAX;
        for (feature, dist) in vertices.chain(edges).chain(faces) {
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = Some(feature);
            }
        }
        nearest
    }

    /// Recomputes the cached distance and witness of every element from the
    /// current vertex positions. Topology is left untouched.
    pub fn recompute_distances(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.proximity = VertexData::compute_proximity(&vertex.point);
        }

        for &id in &self.edge_order {
            let Some(&[a, b]) = self.edges.get(id).map(|e| &e.vertices) else {
                continue;
            };
            let (Ok(pa), Ok(pb)) = (self.vertex(a), self.vertex(b)) else {
                continue;
            };
            let proximity = EdgeData::compute_proximity(pa.point(), pb.point());
            if let Some(edge) = self.edges.get_mut(id) {
                edge.proximity = proximity;
            }
        }

        for &id in &self.face_order {
            let Ok(corners) = self.face_points(id) else {
                continue;
            };
            let proximity = FaceData::compute_proximity(&corners);
            if let Some(face) = self.faces.get_mut(id) {
                face.proximity = proximity;
            }
        }

        debug!(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            faces = self.faces.len(),
            "recomputed polytope distances"
        );
    }

    /// Deletes every face, then every edge, then every vertex, leaving the
    /// polytope empty. Calling it on an empty polytope does nothing.
    pub fn destroy(&mut self) {
        if self.is_empty() {
            return;
        }
        debug!(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            faces = self.faces.len(),
            "destroying polytope"
        );

        for id in std::mem::take(&mut self.face_order) {
            if let Some(face) = self.faces.remove(id) {
                self.unlink_face(id, &face);
            }
        }
        for id in std::mem::take(&mut self.edge_order) {
            if let Some(edge) = self.edges.remove(id) {
                self.unlink_edge(id, &edge);
            }
        }
        for id in std::mem::take(&mut self.vertex_order) {
            self.vertices.remove(id);
        }
    }

    // --- Iteration ---

    /// Vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_order.iter().copied()
    }

    /// Edge ids in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_order.iter().copied()
    }

    /// Face ids in insertion order.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.face_order.iter().copied()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the polytope holds no element at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty() && self.faces.is_empty()
    }
}
