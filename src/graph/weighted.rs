use crate::graph::traits::{Graph, Transpose};
use crate::graph::{VertexId, VertexStates};
use crate::{Error, Result};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Direction mode of a graph, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Directed,
    Undirected,
}

/// A weighted edge between two vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    from: VertexId,
    to: VertexId,
    weight: W,
}

impl<W: Copy> Edge<W> {
    /// Tail of the edge (either endpoint for undirected graphs)
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Head of the edge
    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// Returns the endpoint opposite to `vertex`, or None if `vertex` is not an endpoint
    pub fn other_side(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.from {
            Some(self.to)
        } else if vertex == self.to {
            Some(self.from)
        } else {
            None
        }
    }
}

/// A weighted graph implementation using adjacency lists of shared edges.
///
/// Vertices carry a payload `T` which identifies them; each payload may only
/// be added once. Directed graphs list each edge under its tail, undirected
/// graphs list the same edge under both endpoints.
#[derive(Debug, Clone)]
pub struct WeightedGraph<T, W> {
    direction: Direction,

    /// Vertex payloads, indexed by vertex id
    vertices: Vec<T>,

    /// Payload -> vertex id
    index: HashMap<T, VertexId>,

    /// All edges in insertion order
    edges: Vec<Edge<W>>,

    /// Edge indices incident to each vertex: vertex_id -> [edge index]
    adjacency: Vec<Vec<usize>>,
}

impl<T, W> WeightedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Creates a new empty graph with the given direction mode
    pub fn new(direction: Direction) -> Self {
        WeightedGraph {
            direction,
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::new(Direction::Directed)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(Direction::Undirected)
    }

    /// Creates a new graph with room for the specified number of vertices
    pub fn with_capacity(direction: Direction, vertices: usize) -> Self {
        WeightedGraph {
            direction,
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            edges: Vec::new(),
            adjacency: Vec::with_capacity(vertices),
        }
    }

    /// Creates a graph holding the given vertices, in order
    pub fn with_vertices<I>(direction: Direction, vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let vertices = vertices.into_iter();
        let mut graph = Self::with_capacity(direction, vertices.size_hint().0);
        for vertex in vertices {
            graph.add_vertex(vertex)?;
        }
        Ok(graph)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_directed(&self) -> bool {
        self.direction == Direction::Directed
    }

    /// Adds a vertex and returns its id. Fails if the payload is already present.
    pub fn add_vertex(&mut self, vertex: T) -> Result<VertexId> {
        if let Some(&existing) = self.index.get(&vertex) {
            return Err(Error::DuplicateVertex(existing));
        }
        let id = VertexId(self.vertices.len());
        self.index.insert(vertex.clone(), id);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Looks up the id of a payload
    pub fn vertex_id(&self, vertex: &T) -> Option<VertexId> {
        self.index.get(vertex).copied()
    }

    /// Returns the payload of a vertex
    pub fn vertex(&self, id: VertexId) -> Option<&T> {
        self.vertices.get(id.0)
    }

    /// Iterates over all vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &T)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(idx, vertex)| (VertexId(idx), vertex))
    }

    /// Creates vertex state sized for this graph
    pub fn new_states(&self) -> VertexStates<W> {
        VertexStates::new(self.vertices.len())
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::UnknownVertex(vertex))
        }
    }

    /// Adds an edge from `from` to `to`.
    ///
    /// In a directed graph the edge is listed under `from` only; in an
    /// undirected graph it is listed under both endpoints.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let edge_idx = self.edges.len();
        self.edges.push(Edge { from, to, weight });
        self.adjacency[from.0].push(edge_idx);
        if self.direction == Direction::Undirected && from != to {
            self.adjacency[to.0].push(edge_idx);
        }
        Ok(())
    }

    /// Connects two vertices both ways, with weight 1 when none is given.
    ///
    /// Undirected graphs store a single shared edge; directed graphs store
    /// the two opposite arcs.
    pub fn add_edge_pair(&mut self, u: VertexId, v: VertexId, weight: Option<W>) -> Result<()> {
        let weight = weight.unwrap_or_else(W::one);
        match self.direction {
            Direction::Undirected => self.add_edge(u, v, weight),
            Direction::Directed => {
                self.add_edge(u, v, weight)?;
                if u != v {
                    self.add_edge(v, u, weight)?;
                }
                Ok(())
            }
        }
    }

    /// Returns the edges incident to a vertex (empty for unknown vertices)
    pub fn edges_at(&self, vertex: VertexId) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adjacency
            .get(vertex.0)
            .into_iter()
            .flatten()
            .map(move |&edge_idx| &self.edges[edge_idx])
    }

    /// Returns every edge exactly once, in insertion order
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.edges.iter()
    }

    /// Looks up the weight of the edge from `from` to `to`
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Result<W> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.edges_at(from)
            .find(|edge| edge.other_side(from) == Some(to))
            .map(|edge| edge.weight)
            .ok_or(Error::NoSuchEdge(from, to))
    }
}

impl<T, W> Graph<W> for WeightedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        Box::new(
            self.edges_at(vertex)
                .filter_map(move |edge| edge.other_side(vertex).map(|target| (target, edge.weight))),
        )
    }

    fn arcs<'a>(&'a self) -> Box<dyn Iterator<Item = (VertexId, VertexId, W)> + 'a>
    where
        W: 'a,
    {
        match self.direction {
            Direction::Directed => Box::new(
                self.edges.iter().map(|edge| (edge.from, edge.to, edge.weight)),
            ),
            // An undirected edge relaxes both ways
            Direction::Undirected => Box::new(self.edges.iter().flat_map(|edge| {
                let reverse = (edge.from != edge.to).then_some((edge.to, edge.from, edge.weight));
                std::iter::once((edge.from, edge.to, edge.weight)).chain(reverse)
            })),
        }
    }
}

impl<T, W> Transpose for WeightedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn transpose(&self) -> Self {
        let mut result = WeightedGraph {
            direction: self.direction,
            vertices: self.vertices.clone(),
            index: self.index.clone(),
            edges: Vec::with_capacity(self.edges.len()),
            adjacency: vec![Vec::new(); self.vertices.len()],
        };

        for edge in &self.edges {
            // Endpoints are already members, so this cannot fail
            let edge_idx = result.edges.len();
            result.edges.push(Edge {
                from: edge.to,
                to: edge.from,
                weight: edge.weight,
            });
            result.adjacency[edge.to.0].push(edge_idx);
            if result.direction == Direction::Undirected && edge.from != edge.to {
                result.adjacency[edge.from.0].push(edge_idx);
            }
        }

        result
    }
}
