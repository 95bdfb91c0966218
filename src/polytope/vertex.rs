use crate::math::Point3;

use super::edge::EdgeId;
use super::feature::Proximity;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the polytope.
    pub struct VertexId;
}

/// Data associated with a polytope vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    pub(crate) point: Point3,
    /// Incident edges, in no particular order. Back-references only.
    pub(crate) edges: Vec<EdgeId>,
    pub(crate) proximity: Proximity,
}

impl VertexData {
    pub(crate) fn new(point: Point3) -> Self {
        Self {
            point,
            edges: Vec::new(),
            proximity: Self::compute_proximity(&point),
        }
    }

    /// A vertex is its own closest point.
    pub(crate) fn compute_proximity(point: &Point3) -> Proximity {
        Proximity {
            dist: point.coords.norm_squared(),
            witness: *point,
        }
    }

    /// The position of the vertex.
    #[must_use]
    pub fn point(&self) -> &Point3 {
        &self.point
    }

    /// Edges incident to this vertex.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Squared distance from the origin to the vertex.
    #[must_use]
    pub fn dist(&self) -> f64 {
        self.proximity.dist
    }

    /// Closest point to the origin (the vertex itself).
    #[must_use]
    pub fn witness(&self) -> &Point3 {
        &self.proximity.witness
    }
}
