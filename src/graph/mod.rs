pub mod traits;
pub mod vertex;
pub mod weighted;
pub mod generators;

pub use traits::{Graph, Transpose};
pub use vertex::{Color, VertexId, VertexRecord, VertexStates};
pub use weighted::{Direction, Edge, WeightedGraph};
