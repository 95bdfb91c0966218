use std::fmt;

use crate::math::Point3;

use super::edge::EdgeId;
use super::face::FaceId;
use super::vertex::VertexId;

/// The kind of a polytope element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// A vertex (support point).
    Vertex,
    /// An edge between two vertices.
    Edge,
    /// A triangular face bounded by three edges.
    Face,
}

impl FeatureKind {
    /// Lowercase name of the kind, used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Edge => "edge",
            Self::Face => "face",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A handle to any polytope element, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// A vertex handle.
    Vertex(VertexId),
    /// An edge handle.
    Edge(EdgeId),
    /// A face handle.
    Face(FaceId),
}

impl Feature {
    /// Returns the kind of element this handle refers to.
    #[must_use]
    pub fn kind(self) -> FeatureKind {
        match self {
            Self::Vertex(_) => FeatureKind::Vertex,
            Self::Edge(_) => FeatureKind::Edge,
            Self::Face(_) => FeatureKind::Face,
        }
    }
}

impl From<VertexId> for Feature {
    fn from(id: VertexId) -> Self {
        Self::Vertex(id)
    }
}

impl From<EdgeId> for Feature {
    fn from(id: EdgeId) -> Self {
        Self::Edge(id)
    }
}

impl From<FaceId> for Feature {
    fn from(id: FaceId) -> Self {
        Self::Face(id)
    }
}

/// Cached proximity of an element to the origin.
///
/// Shared by every element kind so that the nearest-feature query can compare
/// vertices, edges and faces through one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    /// Squared distance from the origin to `witness`.
    pub dist: f64,
    /// Closest point of the element to the origin.
    pub witness: Point3,
}

impl Proximity {
    /// Builds a proximity from the `(squared distance, witness)` pair returned
    /// by the closest-point routines.
    #[must_use]
    pub fn new((dist, witness): (f64, Point3)) -> Self {
        Self { dist, witness }
    }
}
