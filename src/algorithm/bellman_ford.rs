use std::fmt::Debug;
use num_traits::Float;
use log::{debug, trace};

use crate::algorithm::{check_source, ShortestPathAlgorithm};
use crate::config::SsspConfig;
use crate::graph::{Graph, VertexId, VertexStates};
use crate::Result;

/// Bellman-Ford single-source shortest paths.
///
/// Handles negative weights. Relaxes every arc |V| - 1 times, then makes one
/// more pass: any arc that still relaxes proves a negative cycle reachable
/// from the source, and the run reports failure. O(V * E).
#[derive(Debug, Default, Clone)]
pub struct BellmanFord {
    config: SsspConfig,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord::default()
    }

    /// Creates an instance with the given configuration
    pub fn with_config(config: SsspConfig) -> Self {
        BellmanFord { config }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn run(&self, graph: &G, states: &mut VertexStates<W>, source: VertexId) -> Result<bool> {
        check_source(graph, source)?;

        let n = graph.vertex_count();
        states.initialize_single_source(n, source);

        // Arc order is fixed by the graph, so runs are deterministic
        let arcs: Vec<(VertexId, VertexId, W)> = graph.arcs().collect();

        for pass in 1..n {
            let mut changed = false;
            for &(u, v, weight) in &arcs {
                changed |= states.relax(u, v, weight);
            }
            trace!("bellman-ford: pass {} changed={}", pass, changed);
            if !changed && self.config.early_exit {
                debug!("bellman-ford: stable after {} passes", pass);
                break;
            }
        }

        let negative_cycle = arcs
            .iter()
            .any(|&(u, v, weight)| states.can_relax(u, v, weight));
        if negative_cycle {
            debug!("bellman-ford: negative cycle reachable from {}", source);
        }
        Ok(!negative_cycle)
    }
}
