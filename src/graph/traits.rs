use std::fmt::Debug;
use num_traits::Float;

use crate::graph::VertexId;

/// Trait representing a weighted graph as seen by the traversal and
/// shortest path algorithms
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing arcs of a vertex as `(target, weight)`.
    /// Unknown vertices have no arcs.
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns every arc of the graph as `(from, to, weight)` in a fixed order
    fn arcs<'a>(&'a self) -> Box<dyn Iterator<Item = (VertexId, VertexId, W)> + 'a>
    where
        W: 'a,
    {
        Box::new((0..self.vertex_count()).map(VertexId).flat_map(move |u| {
            self.outgoing_edges(u).map(move |(v, weight)| (u, v, weight))
        }))
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.0 < self.vertex_count()
    }

    /// Returns true if there's an arc between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of an arc if it exists
    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for graphs that can produce their transpose
pub trait Transpose {
    /// Returns a graph with the same vertices and every edge reversed
    fn transpose(&self) -> Self where Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Directed cycle 0 -> 1 -> ... -> n-1 -> 0 with weight = source index
    #[derive(Debug)]
    struct Ring(usize);

    impl Graph<f32> for Ring {
        fn vertex_count(&self) -> usize {
            self.0
        }

        fn edge_count(&self) -> usize {
            self.0
        }

        fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, f32)> + '_> {
            let next = (vertex.0 < self.0).then(|| (VertexId((vertex.0 + 1) % self.0), vertex.0 as f32));
            Box::new(next.into_iter())
        }
    }

    #[test]
    fn default_arcs_walk_every_vertex() {
        let ring = Ring(3);
        let arcs: Vec<_> = ring.arcs().collect();
        assert_eq!(
            arcs,
            vec![
                (VertexId(0), VertexId(1), 0.0),
                (VertexId(1), VertexId(2), 1.0),
                (VertexId(2), VertexId(0), 2.0),
            ]
        );
        assert!(ring.has_edge(VertexId(2), VertexId(0)));
        assert_eq!(ring.get_edge_weight(VertexId(1), VertexId(2)), Some(1.0));
        assert!(!ring.has_vertex(VertexId(3)));
    }
}
