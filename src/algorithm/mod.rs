pub mod traits;
pub mod dfs;
pub mod bellman_ford;
pub mod dag;
pub mod dijkstra;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

use std::fmt::Debug;
use num_traits::Float;

use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// Fails unless `source` is a vertex of `graph`
pub(crate) fn check_source<W, G>(graph: &G, source: VertexId) -> Result<()>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    if graph.has_vertex(source) {
        Ok(())
    } else {
        Err(Error::UnknownVertex(source))
    }
}
