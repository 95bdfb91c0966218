use thiserror::Error;

/// Errors reported by the polytope mesh.
///
/// Topological misuse of the add operations (repeated edge endpoints, edges
/// that do not close a triangle, a third face on an edge) is a caller contract
/// and is not reported here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolytopeError {
    /// The handle refers to an element that was deleted (or never existed).
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    /// The element is still referenced by `count` elements of the next kind up.
    #[error("{kind} is still referenced by {count} element(s)")]
    StillReferenced { kind: &'static str, count: usize },
}

/// Convenience type alias for results using [`PolytopeError`].
pub type Result<T> = std::result::Result<T, PolytopeError>;
