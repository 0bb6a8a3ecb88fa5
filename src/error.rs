use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A graph was requested with a negative number of vertices
    #[error("invalid argument: vertex count must be non-negative, got {vertex_count}")]
    InvalidArgument { vertex_count: i64 },

    #[error("sequence is not a permutation of 0..n")]
    InvalidPermutation,

    /// A mapping does not have one entry per vertex
    #[error("mapping has length {found}, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}
