use crate::math::{point_triangle_closest, Point3};

use super::edge::EdgeId;
use super::feature::Proximity;

slotmap::new_key_type! {
    /// Unique identifier for a face in the polytope.
    pub struct FaceId;
}

/// Data associated with a polytope face.
///
/// A face is a triangle bounded by three edges. Its corners are not stored;
/// they are derived from the first two edges.
#[derive(Debug, Clone)]
pub struct FaceData {
    pub(crate) edges: [EdgeId; 3],
    pub(crate) proximity: Proximity,
}

impl FaceData {
    pub(crate) fn new(edges: [EdgeId; 3], corners: &[Point3; 3]) -> Self {
        Self {
            edges,
            proximity: Self::compute_proximity(corners),
        }
    }

    pub(crate) fn compute_proximity([a, b, c]: &[Point3; 3]) -> Proximity {
        Proximity::new(point_triangle_closest(&Point3::origin(), a, b, c))
    }

    /// The three bounding edges, in the order they were given.
    #[must_use]
    pub fn edges(&self) -> [EdgeId; 3] {
        self.edges
    }

    /// Squared distance from the origin to the triangle.
    #[must_use]
    pub fn dist(&self) -> f64 {
        self.proximity.dist
    }

    /// Closest point of the triangle to the origin.
    #[must_use]
    pub fn witness(&self) -> &Point3 {
        &self.proximity.witness
    }
}
