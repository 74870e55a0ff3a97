use std::fmt::Debug;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use crate::graph::{Graph, VertexId, VertexStates};
use crate::Result;

/// Snapshot of a shortest path run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult<W> {
    /// Distances from source to each vertex, None when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<VertexId>>,

    /// Source vertex ID
    pub source: VertexId,

    /// True when a negative cycle is reachable from the source; distances
    /// are then not shortest path costs
    pub negative_cycle: bool,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Copies distances and parents out of the vertex state
    pub fn from_states(states: &VertexStates<W>, source: VertexId, negative_cycle: bool) -> Self {
        let records = states.records();
        ShortestPathResult {
            distances: records
                .iter()
                .map(|record| (record.distance < W::infinity()).then_some(record.distance))
                .collect(),
            predecessors: records.iter().map(|record| record.parent).collect(),
            source,
            negative_cycle,
        }
    }

    /// Distance to a vertex, None when unreachable or unknown
    pub fn distance(&self, target: VertexId) -> Option<W> {
        self.distances.get(target.0).copied().flatten()
    }

    /// Get the shortest path from source to target as a sequence of vertices.
    ///
    /// Parents may form a cycle while a negative cycle is present, so the
    /// walk is bounded by the vertex count instead of trusted to end.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if self.negative_cycle || self.distance(target).is_none() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current.0]?;
            path.push(current);
            if path.len() > self.predecessors.len() {
                log::warn!("parent chain from {} does not reach source {}", target, self.source);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Computes shortest paths from `source` into `states`.
    ///
    /// `states` is reset and resized for `graph` first. Returns false when
    /// the distances are not valid shortest path costs (a negative cycle is
    /// reachable from the source), true otherwise.
    fn run(&self, graph: &G, states: &mut VertexStates<W>, source: VertexId) -> Result<bool>;

    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>> {
        let mut states = VertexStates::new(graph.vertex_count());
        let converged = self.run(graph, &mut states, source)?;
        Ok(ShortestPathResult::from_states(&states, source, !converged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Direction, WeightedGraph};
    use crate::BellmanFord;

    #[test]
    fn result_survives_json() {
        let mut graph = WeightedGraph::with_vertices(Direction::Directed, ["a", "b", "c"]).unwrap();
        graph.add_edge(VertexId(0), VertexId(1), 2.5).unwrap();
        let result = BellmanFord::new().compute_shortest_paths(&graph, VertexId(0)).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["distances"], serde_json::json!([0.0, 2.5, null]));
        assert_eq!(value["predecessors"], serde_json::json!([null, 0, null]));
        assert_eq!(value["negative_cycle"], serde_json::json!(false));

        let back: ShortestPathResult<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
