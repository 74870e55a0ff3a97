use crate::graph::{Direction, VertexId, WeightedGraph};
use crate::Result;
use rand::prelude::*;
use std::ops::Range;

// Weights are drawn as integers so path sums stay exact in f64.

fn with_numbered_vertices(direction: Direction, n: usize) -> Result<WeightedGraph<usize, f64>> {
    let mut graph = WeightedGraph::with_capacity(direction, n);
    for i in 0..n {
        graph.add_vertex(i)?;
    }
    Ok(graph)
}

/// Generates a random directed acyclic graph with n vertices.
///
/// Every pair i < j gets the edge i -> j with probability `edge_probability`,
/// so vertex order is a topological order.
pub fn random_dag<R: Rng>(
    n: usize,
    edge_probability: f64,
    weights: Range<i64>,
    rng: &mut R,
) -> Result<WeightedGraph<usize, f64>> {
    let mut graph = with_numbered_vertices(Direction::Directed, n)?;

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(weights.clone()) as f64;
                graph.add_edge(VertexId(i), VertexId(j), weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random directed graph with n vertices and about `edge_count`
/// edges (self-loops are skipped). Cycles are allowed.
pub fn random_digraph<R: Rng>(
    n: usize,
    edge_count: usize,
    weights: Range<i64>,
    rng: &mut R,
) -> Result<WeightedGraph<usize, f64>> {
    let mut graph = with_numbered_vertices(Direction::Directed, n)?;
    if n < 2 {
        return Ok(graph);
    }

    for _ in 0..edge_count {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(weights.clone()) as f64;
            graph.add_edge(VertexId(u), VertexId(v), weight)?;
        }
    }

    Ok(graph)
}

/// Generates a width*height grid graph with unit weights in both directions
pub fn grid(width: usize, height: usize) -> Result<WeightedGraph<usize, f64>> {
    let mut graph = with_numbered_vertices(Direction::Directed, width * height)?;

    // Helper function to get vertex index from 2D coordinates
    let get_index = |x: usize, y: usize| -> VertexId { VertexId(y * width + x) };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            if x + 1 < width {
                graph.add_edge_pair(current, get_index(x + 1, y), None)?;
            }
            if y + 1 < height {
                graph.add_edge_pair(current, get_index(x, y + 1), None)?;
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn dag_edges_point_forward() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_dag(12, 0.4, -5..10, &mut rng).unwrap();
        for (u, v, _) in graph.arcs() {
            assert!(u < v);
        }
    }

    #[test]
    fn digraph_keeps_every_non_loop_draw() {
        let graph = random_digraph(8, 30, 1..5, &mut StdRng::seed_from_u64(11)).unwrap();

        // Replay the same draws
        let mut rng = StdRng::seed_from_u64(11);
        let mut kept = 0;
        for _ in 0..30 {
            let u = rng.gen_range(0..8usize);
            let v = rng.gen_range(0..8usize);
            if u != v {
                let _weight: i64 = rng.gen_range(1..5);
                kept += 1;
            }
        }
        assert_eq!(graph.edge_count(), kept);
    }

    #[test]
    fn grid_has_four_neighbour_arcs() {
        let graph = grid(3, 2).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        // 2 horizontal pairs per row, 3 vertical pairs, each stored both ways
        assert_eq!(graph.edge_count(), 2 * (2 * 2 + 3));
    }
}
