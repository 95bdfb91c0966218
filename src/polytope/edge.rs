use crate::math::{point_segment_closest, Point3};

use super::face::FaceId;
use super::feature::Proximity;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the polytope.
    pub struct EdgeId;
}

/// Data associated with a polytope edge.
///
/// An edge connects two distinct vertices and borders at most two faces.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub(crate) vertices: [VertexId; 2],
    pub(crate) faces: [Option<FaceId>; 2],
    pub(crate) proximity: Proximity,
}

impl EdgeData {
    pub(crate) fn new(vertices: [VertexId; 2], a: &Point3, b: &Point3) -> Self {
        Self {
            vertices,
            faces: [None, None],
            proximity: Self::compute_proximity(a, b),
        }
    }

    pub(crate) fn compute_proximity(a: &Point3, b: &Point3) -> Proximity {
        Proximity::new(point_segment_closest(&Point3::origin(), a, b))
    }

    /// Puts `face` in the first free slot.
    pub(crate) fn attach_face(&mut self, face: FaceId) {
        debug_assert!(
            self.faces[0].is_none() || self.faces[1].is_none(),
            "edge already borders two faces"
        );
        if self.faces[0].is_none() {
            self.faces[0] = Some(face);
        } else {
            self.faces[1] = Some(face);
        }
    }

    /// Clears every slot that refers to `face`.
    pub(crate) fn detach_face(&mut self, face: FaceId) {
        for slot in &mut self.faces {
            if *slot == Some(face) {
                *slot = None;
            }
        }
    }

    /// The two endpoint vertices.
    #[must_use]
    pub fn vertices(&self) -> [VertexId; 2] {
        self.vertices
    }

    /// The adjacent faces; a slot is `None` while no face borders that side.
    #[must_use]
    pub fn faces(&self) -> [Option<FaceId>; 2] {
        self.faces
    }

    /// Number of faces currently bordering the edge.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.iter().flatten().count()
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[must_use]
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// The endpoint opposite `vertex`, or `None` if `vertex` is not an endpoint.
    #[must_use]
    pub fn other_vertex(&self, vertex: VertexId) -> Option<VertexId> {
        match self.vertices {
            [a, b] if a == vertex => Some(b),
            [a, b] if b == vertex => Some(a),
            _ => None,
        }
    }

    /// Squared distance from the origin to the segment.
    #[must_use]
    pub fn dist(&self) -> f64 {
        self.proximity.dist
    }

    /// Closest point of the segment to the origin.
    #[must_use]
    pub fn witness(&self) -> &Point3 {
        &self.proximity.witness
    }
}
