//! Incremental convex polytope for Expanding Polytope Algorithm (EPA)
//! penetration-depth queries.
//!
//! A [`Polytope`] collects support points of a Minkowski difference as
//! vertices, links them into a triangulated surface, and keeps for every
//! vertex, edge and face the squared distance from the origin to its closest
//! point. The EPA driver asks [`Polytope::nearest`] for the feature to expand
//! toward and re-triangulates around each new support point.

pub mod error;
pub mod math;
pub mod polytope;

pub use error::{PolytopeError, Result};
pub use polytope::{
    EdgeData, EdgeId, FaceData, FaceId, Feature, FeatureKind, Polytope, PolytopeCapacity,
    Proximity, VertexData, VertexId,
};
