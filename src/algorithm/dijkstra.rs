use std::fmt::Debug;
use std::marker::PhantomData;
use num_traits::Float;
use log::{debug, warn};

use crate::algorithm::{check_source, ShortestPathAlgorithm};
use crate::config::SsspConfig;
use crate::data_structures::{DecreaseKeyQueue, FibonacciHeap, IndexedBinaryHeap};
use crate::graph::{Graph, VertexId, VertexStates};
use crate::{Error, Result};

/// Dijkstra over a Fibonacci heap: O(V log V + E) queue work
pub type FibonacciDijkstra<W> = Dijkstra<FibonacciHeap<W, VertexId>>;

/// Dijkstra over the index-mapped binary heap: O((V + E) log V) queue work
pub type BinaryHeapDijkstra<W> = Dijkstra<IndexedBinaryHeap<W, VertexId>>;

/// Classic Dijkstra's algorithm, generic over its decrease-key queue backend.
///
/// Every vertex is queued up front keyed by its distance. The minimum is
/// extracted repeatedly and its arcs relaxed; each improvement lowers the
/// target's key. Backends produce identical distances and parents.
///
/// Weights must be non-negative. Unless precondition checks are enabled in
/// [`SsspConfig`], negative weights are not detected and yield unspecified
/// distances, never a panic.
#[derive(Debug, Clone)]
pub struct Dijkstra<Q> {
    config: SsspConfig,
    queue: PhantomData<fn() -> Q>,
}

impl<Q> Default for Dijkstra<Q> {
    fn default() -> Self {
        Dijkstra {
            config: SsspConfig::default(),
            queue: PhantomData,
        }
    }
}

impl<Q> Dijkstra<Q> {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an instance with the given configuration
    pub fn with_config(config: SsspConfig) -> Self {
        Dijkstra {
            config,
            queue: PhantomData,
        }
    }
}

impl<W, G, Q> ShortestPathAlgorithm<W, G> for Dijkstra<Q>
where
    W: Float + Debug,
    G: Graph<W>,
    Q: DecreaseKeyQueue<W, VertexId> + Default,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn run(&self, graph: &G, states: &mut VertexStates<W>, source: VertexId) -> Result<bool> {
        check_source(graph, source)?;

        if self.config.check_preconditions {
            if let Some((u, v, weight)) = graph.arcs().find(|(_, _, weight)| *weight < W::zero()) {
                warn!("dijkstra: negative arc {} -> {}", u, v);
                return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
            }
        }

        let n = graph.vertex_count();
        states.initialize_single_source(n, source);

        // Initialize priority queue with every vertex
        let mut queue = Q::default();
        for (idx, record) in states.records().iter().enumerate() {
            queue.insert(record.distance, VertexId(idx))?;
        }

        // Main Dijkstra loop
        while !queue.is_empty() {
            let (u, _) = queue.extract_min()?;

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                // An extracted vertex can only improve on negative input; leave it be
                if states.relax(u, v, weight) && queue.contains(&v) {
                    let distance = states.distance(v).ok_or(Error::UnknownVertex(v))?;
                    queue.decrease_key(&v, distance)?;
                }
            }
        }

        debug!("dijkstra ({}): settled {} vertices from {}", Q::BACKEND, n, source);
        Ok(true)
    }
}
