use std::fmt::{self, Debug, Display};

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Handle of a vertex inside a graph, assigned densely at insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Returns the dense index of the vertex
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

/// DFS coloring of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Not yet discovered
    #[default]
    White,
    /// On the active DFS stack
    Gray,
    /// Fully explored
    Black,
}

/// Mutable algorithm state of a single vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRecord<W> {
    /// Best known distance from the source, an upper bound on the true cost
    pub distance: W,

    /// Vertex that last improved `distance`, or the DFS tree parent after a traversal
    pub parent: Option<VertexId>,

    /// DFS color
    pub color: Color,

    /// DFS discover timestamp
    pub discover: usize,

    /// DFS finish timestamp
    pub finish: usize,
}

impl<W: Float> VertexRecord<W> {
    fn unreached() -> Self {
        VertexRecord {
            distance: W::infinity(),
            parent: None,
            color: Color::White,
            discover: 0,
            finish: 0,
        }
    }
}

/// Per-run vertex state shared by traversal and shortest path algorithms.
///
/// The state is owned by the caller and indexed by [`VertexId`]. Every
/// algorithm resets the part it uses before running, so one value can be
/// reused across runs without leaking results between them. Two algorithms
/// must not run against the same state at the same time.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexStates<W> {
    records: Vec<VertexRecord<W>>,
}

impl<W> VertexStates<W>
where
    W: Float + Debug,
{
    /// Creates state for `vertex_count` unreached vertices
    pub fn new(vertex_count: usize) -> Self {
        VertexStates {
            records: vec![VertexRecord::unreached(); vertex_count],
        }
    }

    /// Number of vertices tracked
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no vertex is tracked
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resets distances and parents for a run from `source`.
    ///
    /// The state is resized to `vertex_count` first. DFS fields are kept.
    pub fn initialize_single_source(&mut self, vertex_count: usize, source: VertexId) {
        self.resize(vertex_count);
        for record in &mut self.records {
            record.distance = W::infinity();
            record.parent = None;
        }
        if let Some(record) = self.records.get_mut(source.0) {
            record.distance = W::zero();
        }
    }

    /// Resets colors, parents and timestamps before a DFS. Distances are kept.
    pub fn reset_traversal(&mut self, vertex_count: usize) {
        self.resize(vertex_count);
        for record in &mut self.records {
            record.color = Color::White;
            record.parent = None;
            record.discover = 0;
            record.finish = 0;
        }
    }

    fn resize(&mut self, vertex_count: usize) {
        self.records.resize(vertex_count, VertexRecord::unreached());
    }

    /// Relaxes the arc `u -> v` of weight `weight`.
    ///
    /// If going through `u` improves `v`, updates its distance and parent and
    /// returns true. This is the only place distances and parents change
    /// during a shortest path run, so distances never increase.
    pub fn relax(&mut self, u: VertexId, v: VertexId, weight: W) -> bool {
        let (Some(from), Some(to)) = (self.records.get(u.0), self.records.get(v.0)) else {
            return false;
        };
        let candidate = from.distance + weight;
        if to.distance > candidate {
            let to = &mut self.records[v.0];
            to.distance = candidate;
            to.parent = Some(u);
            true
        } else {
            false
        }
    }

    /// Returns true if relaxing `u -> v` would still improve `v`
    pub fn can_relax(&self, u: VertexId, v: VertexId, weight: W) -> bool {
        match (self.records.get(u.0), self.records.get(v.0)) {
            (Some(from), Some(to)) => to.distance > from.distance + weight,
            _ => false,
        }
    }

    /// Returns the record of a vertex
    pub fn get(&self, vertex: VertexId) -> Option<&VertexRecord<W>> {
        self.records.get(vertex.0)
    }

    /// Best known distance of a vertex, infinite when unreached
    pub fn distance(&self, vertex: VertexId) -> Option<W> {
        self.get(vertex).map(|record| record.distance)
    }

    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.get(vertex).and_then(|record| record.parent)
    }

    pub fn color(&self, vertex: VertexId) -> Option<Color> {
        self.get(vertex).map(|record| record.color)
    }

    pub fn discover(&self, vertex: VertexId) -> Option<usize> {
        self.get(vertex).map(|record| record.discover)
    }

    pub fn finish(&self, vertex: VertexId) -> Option<usize> {
        self.get(vertex).map(|record| record.finish)
    }

    /// All records, indexed by vertex
    pub fn records(&self) -> &[VertexRecord<W>] {
        &self.records
    }

    // DFS bookkeeping; relaxation goes through `relax` only.

    pub(crate) fn mark_discovered(&mut self, vertex: VertexId, parent: Option<VertexId>, time: usize) {
        let record = &mut self.records[vertex.0];
        record.color = Color::Gray;
        record.parent = parent;
        record.discover = time;
    }

    pub(crate) fn mark_finished(&mut self, vertex: VertexId, time: usize) {
        let record = &mut self.records[vertex.0];
        record.color = Color::Black;
        record.finish = time;
    }
}
