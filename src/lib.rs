//! Decrease-key SSSP - Single-Source Shortest Paths over weighted graphs
//!
//! This library provides the classic single-source shortest path algorithms
//! on a shared graph and vertex-state model:
//!
//! - Bellman-Ford for arbitrary weights, reporting reachable negative cycles
//! - shortest paths on directed acyclic graphs via DFS topological order
//! - Dijkstra for non-negative weights, over any [`DecreaseKeyQueue`] backend
//!   (an index-mapped binary heap or a Fibonacci heap)
//!
//! Algorithms never own vertex state. Callers pass a [`VertexStates`] value
//! which every algorithm resets before use and leaves readable afterwards.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord,
    dag::DagShortestPath,
    dijkstra::{BinaryHeapDijkstra, Dijkstra, FibonacciDijkstra},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use config::SsspConfig;
pub use data_structures::{DecreaseKeyQueue, FibonacciHeap, IndexedBinaryHeap};
/// Re-export main types for convenient use
pub use graph::{Color, Direction, VertexId, VertexStates, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(VertexId),

    #[error("Vertex already present as {0}")]
    DuplicateVertex(VertexId),

    #[error("No edge from {0} to {1}")]
    NoSuchEdge(VertexId, VertexId),

    #[error("Value already present in the queue")]
    DuplicateValue,

    #[error("Value not present in the queue")]
    NoSuchElement,

    #[error("Extract from an empty queue")]
    EmptyQueue,

    #[error("New key is greater than the current key")]
    InvalidKey,

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge from {0} to {1} violates the topological order")]
    NotAcyclic(VertexId, VertexId),

    #[error("Graph mismatch: expected {expected} vertices, found {found}")]
    GraphMismatch { expected: usize, found: usize },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
