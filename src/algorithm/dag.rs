use std::fmt::Debug;
use num_traits::Float;
use log::{debug, warn};

use crate::algorithm::dfs::{check_topological_order, topological_sort};
use crate::algorithm::{check_source, ShortestPathAlgorithm};
use crate::config::SsspConfig;
use crate::graph::{Graph, VertexId, VertexStates};
use crate::{Error, Result};

/// Shortest paths on a directed acyclic graph.
///
/// Vertices are taken in topological order (descending DFS finish time) and
/// each vertex's outgoing arcs are relaxed once. By the time a vertex is
/// processed every predecessor is final, so one pass suffices: O(V + E),
/// negative weights allowed.
///
/// The input must be acyclic. Unless precondition checks are enabled in
/// [`SsspConfig`], a cyclic input is not detected and yields unspecified
/// distances.
#[derive(Debug, Default, Clone)]
pub struct DagShortestPath {
    config: SsspConfig,
}

impl DagShortestPath {
    /// Creates a new DAG shortest path algorithm instance
    pub fn new() -> Self {
        DagShortestPath::default()
    }

    /// Creates an instance with the given configuration
    pub fn with_config(config: SsspConfig) -> Self {
        DagShortestPath { config }
    }

    /// Computes shortest paths in `graph`, taking the processing order from
    /// a DFS of `order_graph`.
    ///
    /// `order_graph` must have the same vertex ids as `graph`; its edges are
    /// used only for ordering and its weights are ignored.
    pub fn run_with_order_graph<W, G, O>(
        &self,
        order_graph: &O,
        graph: &G,
        states: &mut VertexStates<W>,
        source: VertexId,
    ) -> Result<bool>
    where
        W: Float + Debug,
        G: Graph<W>,
        O: Graph<W>,
    {
        check_source(graph, source)?;
        let n = graph.vertex_count();
        if order_graph.vertex_count() != n {
            return Err(Error::GraphMismatch {
                expected: n,
                found: order_graph.vertex_count(),
            });
        }

        let order = topological_sort(order_graph, states);
        if self.config.check_preconditions {
            if let Err(err) = check_topological_order(graph, states) {
                warn!("dag shortest path: rejected input: {}", err);
                return Err(err);
            }
        }

        states.initialize_single_source(n, source);
        for u in order {
            for (v, weight) in graph.outgoing_edges(u) {
                states.relax(u, v, weight);
            }
        }

        debug!("dag shortest path: relaxed {} arcs from {}", graph.edge_count(), source);
        Ok(true)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for DagShortestPath
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "DAG shortest path"
    }

    fn run(&self, graph: &G, states: &mut VertexStates<W>, source: VertexId) -> Result<bool> {
        self.run_with_order_graph(graph, graph, states, source)
    }
}
