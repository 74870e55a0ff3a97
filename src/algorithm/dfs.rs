//! Depth-first search, topological sort and strongly connected components.
//!
//! The search is iterative: an explicit stack of `(vertex, remaining arcs)`
//! replaces recursion, so deep graphs cannot overflow the call stack.
//! Timestamps follow the recursive formulation: the clock ticks once when a
//! vertex is discovered and once when it finishes, starting at 1.

use std::fmt::Debug;
use num_traits::Float;
use log::debug;

use crate::graph::{Color, Graph, Transpose, VertexId, VertexStates};
use crate::{Error, Result};

/// Runs a full DFS over `graph`, trying roots in vertex order.
///
/// Resets the traversal fields of `states` first, then records color,
/// parent, discover and finish for every vertex. Returns the DFS forest,
/// each tree listing its vertices in discovery order.
pub fn depth_first_search<W, G>(graph: &G, states: &mut VertexStates<W>) -> Vec<Vec<VertexId>>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    search(graph, states, (0..graph.vertex_count()).map(VertexId))
}

/// Runs a full DFS trying roots in the given order.
///
/// Vertices missing from `order` are never used as roots but are still
/// visited when reachable. Fails if `order` names an unknown vertex.
pub fn depth_first_search_ordered<W, G>(
    graph: &G,
    states: &mut VertexStates<W>,
    order: &[VertexId],
) -> Result<Vec<Vec<VertexId>>>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    if let Some(&unknown) = order.iter().find(|vertex| !graph.has_vertex(**vertex)) {
        return Err(Error::UnknownVertex(unknown));
    }
    Ok(search(graph, states, order.iter().copied()))
}

/// Orders all vertices by descending DFS finish time.
///
/// This is a topological order when the graph is acyclic. Cycles are not
/// detected here; on a cyclic graph the order is still complete but has no
/// topological meaning.
pub fn topological_sort<W, G>(graph: &G, states: &mut VertexStates<W>) -> Vec<VertexId>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    depth_first_search(graph, states);
    let mut order: Vec<VertexId> = (0..graph.vertex_count()).map(VertexId).collect();
    order.sort_by_key(|&vertex| std::cmp::Reverse(states.records()[vertex.0].finish));
    order
}

/// Checks that every arc `u -> v` of `graph` finishes `u` after `v` in the
/// DFS recorded in `states`, i.e. that descending finish order is topological.
pub fn check_topological_order<W, G>(graph: &G, states: &VertexStates<W>) -> Result<()>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    for (u, v, _) in graph.arcs() {
        let (Some(finish_u), Some(finish_v)) = (states.finish(u), states.finish(v)) else {
            return Err(Error::GraphMismatch {
                expected: graph.vertex_count(),
                found: states.len(),
            });
        };
        if finish_u <= finish_v {
            return Err(Error::NotAcyclic(u, v));
        }
    }
    Ok(())
}

/// Strongly connected components, by Kosaraju's two passes: a DFS for
/// finish times, then a DFS of the transpose taking roots in descending
/// finish order. Each tree of the second pass is one component.
pub fn strongly_connected_components<W, G>(graph: &G) -> Vec<Vec<VertexId>>
where
    W: Float + Debug,
    G: Graph<W> + Transpose,
{
    let mut states = VertexStates::new(graph.vertex_count());
    let order = topological_sort(graph, &mut states);
    let transposed = graph.transpose();
    search(&transposed, &mut states, order.into_iter())
}

fn search<W, G, I>(graph: &G, states: &mut VertexStates<W>, roots: I) -> Vec<Vec<VertexId>>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
    I: Iterator<Item = VertexId>,
{
    states.reset_traversal(graph.vertex_count());
    let mut time = 0;
    let mut forest = Vec::new();

    for root in roots {
        if states.color(root) == Some(Color::White) {
            forest.push(visit(graph, states, root, &mut time));
        }
    }

    debug!("dfs: {} trees over {} vertices", forest.len(), graph.vertex_count());
    forest
}

/// Explores everything reachable from `root` through white vertices
fn visit<W, G>(graph: &G, states: &mut VertexStates<W>, root: VertexId, time: &mut usize) -> Vec<VertexId>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    let mut tree = vec![root];
    *time += 1;
    states.mark_discovered(root, None, *time);

    let mut stack = vec![(root, graph.outgoing_edges(root))];
    while let Some((vertex, arcs)) = stack.last_mut() {
        let vertex = *vertex;
        let next = arcs
            .find(|(target, _)| states.color(*target) == Some(Color::White))
            .map(|(target, _)| target);

        match next {
            Some(target) => {
                *time += 1;
                states.mark_discovered(target, Some(vertex), *time);
                tree.push(target);
                stack.push((target, graph.outgoing_edges(target)));
            }
            None => {
                stack.pop();
                *time += 1;
                states.mark_finished(vertex, *time);
            }
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    /// Undershorts/pants/shoes style dressing DAG
    fn dressing() -> WeightedGraph<&'static str, f64> {
        let names = ["undershorts", "pants", "belt", "shirt", "tie", "jacket", "socks", "shoes", "watch"];
        let mut graph = WeightedGraph::with_vertices(crate::graph::Direction::Directed, names).unwrap();
        let edges = [
            ("undershorts", "pants"),
            ("undershorts", "shoes"),
            ("pants", "belt"),
            ("pants", "shoes"),
            ("belt", "jacket"),
            ("shirt", "belt"),
            ("shirt", "tie"),
            ("tie", "jacket"),
            ("socks", "shoes"),
        ];
        for (from, to) in edges {
            let from = graph.vertex_id(&from).unwrap();
            let to = graph.vertex_id(&to).unwrap();
            graph.add_edge(from, to, 1.0).unwrap();
        }
        graph
    }

    #[test]
    fn timestamps_nest() {
        let graph = dressing();
        let mut states = graph.new_states();
        depth_first_search(&graph, &mut states);

        let mut stamps: Vec<usize> = states
            .records()
            .iter()
            .flat_map(|record| [record.discover, record.finish])
            .collect();
        stamps.sort_unstable();
        assert_eq!(stamps, (1..=2 * graph.vertex_count()).collect::<Vec<_>>());

        for record in states.records() {
            assert_eq!(record.color, Color::Black);
            assert!(record.discover < record.finish);
            if let Some(parent) = record.parent {
                let parent = states.get(parent).unwrap();
                assert!(parent.discover < record.discover && record.finish < parent.finish);
            }
        }
    }

    #[test]
    fn topological_sort_respects_edges() {
        let graph = dressing();
        let mut states = graph.new_states();
        let order = topological_sort(&graph, &mut states);

        let position = |vertex: VertexId| order.iter().position(|&v| v == vertex).unwrap();
        for (u, v, _) in graph.arcs() {
            assert!(position(u) < position(v));
        }
        assert!(check_topological_order(&graph, &states).is_ok());
    }

    #[test]
    fn cycle_is_reported_by_order_check() {
        let mut graph: WeightedGraph<u8, f64> =
            WeightedGraph::with_vertices(crate::graph::Direction::Directed, 0..3).unwrap();
        graph.add_edge(VertexId(0), VertexId(1), 1.0).unwrap();
        graph.add_edge(VertexId(1), VertexId(2), 1.0).unwrap();
        graph.add_edge(VertexId(2), VertexId(0), 1.0).unwrap();

        let mut states = graph.new_states();
        let order = topological_sort(&graph, &mut states);
        assert_eq!(order.len(), 3);
        assert!(matches!(
            check_topological_order(&graph, &states),
            Err(Error::NotAcyclic(_, _))
        ));
    }

    #[test]
    fn ordered_search_rejects_unknown_root() {
        let graph = dressing();
        let mut states = graph.new_states();
        let result = depth_first_search_ordered(&graph, &mut states, &[VertexId(0), VertexId(42)]);
        assert!(matches!(result, Err(Error::UnknownVertex(VertexId(42)))));
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let n = 200_000;
        let mut graph: WeightedGraph<usize, f64> =
            WeightedGraph::with_vertices(crate::graph::Direction::Directed, 0..n).unwrap();
        for i in 0..n - 1 {
            graph.add_edge(VertexId(i), VertexId(i + 1), 1.0).unwrap();
        }
        let mut states = graph.new_states();
        let forest = depth_first_search(&graph, &mut states);
        assert_eq!(forest.len(), 1);
        assert_eq!(states.finish(VertexId(0)), Some(2 * n));
    }
}
