use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::priority_queue::precedes;
use crate::data_structures::DecreaseKeyQueue;
use crate::{Error, Result};

/// Node of the heap forest. Siblings form a circular doubly linked list
/// through `left`/`right`; a node alone in its list points to itself.
#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
    degree: usize,
    /// Lost a child since it last became a child itself
    marked: bool,
}

/// Fibonacci heap with a value -> node index map.
///
/// Nodes live in an arena and refer to each other by slot index. `insert`
/// and `decrease_key` are O(1) amortized: new and cut nodes are simply
/// added to the root list. `extract_min` pays for that laziness by
/// consolidating roots of equal degree, O(log n) amortized.
#[derive(Debug, Clone)]
pub struct FibonacciHeap<K, V>
where
    V: Eq + Hash,
{
    nodes: Vec<Node<K>>,

    /// Value stored in each slot, None for free slots
    values: Vec<Option<V>>,

    /// Free slots available for reuse
    vacant: Vec<usize>,

    /// value -> slot
    index: HashMap<V, usize>,

    /// Root with the smallest key
    min: Option<usize>,

    len: usize,
}

impl<K, V> Default for FibonacciHeap<K, V>
where
    V: Eq + Hash,
{
    fn default() -> Self {
        FibonacciHeap {
            nodes: Vec::new(),
            values: Vec::new(),
            vacant: Vec::new(),
            index: HashMap::new(),
            min: None,
            len: 0,
        }
    }
}

impl<K, V> FibonacciHeap<K, V>
where
    K: PartialOrd + Copy + Debug,
    V: Ord + Hash + Clone + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trees in the root list
    pub fn root_count(&self) -> usize {
        self.min.map_or(0, |min| self.siblings(min).len())
    }

    /// Checks heap order, parent links, degrees, the node count and the index map
    pub fn is_consistent(&self) -> bool {
        let Some(min) = self.min else {
            return self.len == 0 && self.index.is_empty();
        };

        let mut seen = 0;
        let mut stack = Vec::new();
        for root in self.siblings(min) {
            if self.nodes[root].parent.is_some() || self.less(root, min) {
                return false;
            }
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            seen += 1;
            let children = self.children(node);
            if children.len() != self.nodes[node].degree {
                return false;
            }
            for child in children {
                if self.nodes[child].parent != Some(node) || self.less(child, node) {
                    return false;
                }
                stack.push(child);
            }
        }

        let indexed = self.index.iter().all(|(value, &slot)| {
            self.values.get(slot).and_then(|stored| stored.as_ref()) == Some(value)
        });
        seen == self.len && self.index.len() == self.len && indexed
    }

    /// Entry order of two occupied slots, see [`precedes`]
    fn less(&self, a: usize, b: usize) -> bool {
        match (&self.values[a], &self.values[b]) {
            (Some(a_value), Some(b_value)) => {
                precedes((&self.nodes[a].key, a_value), (&self.nodes[b].key, b_value))
            }
            _ => self.nodes[a].key < self.nodes[b].key,
        }
    }

    /// Collects the circular list containing `start`
    fn siblings(&self, start: usize) -> Vec<usize> {
        let mut result = vec![start];
        let mut current = self.nodes[start].right;
        while current != start {
            result.push(current);
            current = self.nodes[current].right;
        }
        result
    }

    fn children(&self, node: usize) -> Vec<usize> {
        self.nodes[node]
            .child
            .map_or_else(Vec::new, |child| self.siblings(child))
    }

    /// Detaches a node from its sibling list, leaving it alone in its own
    fn unlink(&mut self, node: usize) {
        let left = self.nodes[node].left;
        let right = self.nodes[node].right;
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.nodes[node].left = node;
        self.nodes[node].right = node;
    }

    /// Inserts a lone node to the right of `anchor`
    fn splice_after(&mut self, anchor: usize, node: usize) {
        let right = self.nodes[anchor].right;
        self.nodes[node].left = anchor;
        self.nodes[node].right = right;
        self.nodes[anchor].right = node;
        self.nodes[right].left = node;
    }

    /// Adds a lone node to the root list, updating the minimum
    fn add_root(&mut self, node: usize) {
        self.nodes[node].parent = None;
        match self.min {
            None => self.min = Some(node),
            Some(min) => {
                self.splice_after(min, node);
                if self.less(node, min) {
                    self.min = Some(node);
                }
            }
        }
    }

    /// Makes root `child` a child of root `parent`
    fn link(&mut self, child: usize, parent: usize) {
        self.nodes[child].left = child;
        self.nodes[child].right = child;
        self.nodes[child].parent = Some(parent);
        self.nodes[child].marked = false;
        match self.nodes[parent].child {
            None => self.nodes[parent].child = Some(child),
            Some(first) => self.splice_after(first, child),
        }
        self.nodes[parent].degree += 1;
    }

    /// Links roots of equal degree until all root degrees differ
    fn consolidate(&mut self, start: usize) {
        let roots = self.siblings(start);
        let mut by_degree: Vec<Option<usize>> = Vec::new();

        for root in roots {
            let mut node = root;
            let mut degree = self.nodes[node].degree;
            loop {
                if degree >= by_degree.len() {
                    by_degree.resize(degree + 1, None);
                }
                let Some(other) = by_degree[degree].take() else {
                    break;
                };
                let (parent, child) = if self.less(other, node) {
                    (other, node)
                } else {
                    (node, other)
                };
                self.link(child, parent);
                node = parent;
                degree += 1;
            }
            by_degree[degree] = Some(node);
        }

        // Rebuild the root list from the survivors
        self.min = None;
        for root in by_degree.into_iter().flatten() {
            self.nodes[root].left = root;
            self.nodes[root].right = root;
            self.add_root(root);
        }
    }

    /// Moves `node` from the children of `parent` to the root list
    fn cut(&mut self, node: usize, parent: usize) {
        if self.nodes[node].right == node {
            self.nodes[parent].child = None;
        } else {
            if self.nodes[parent].child == Some(node) {
                self.nodes[parent].child = Some(self.nodes[node].right);
            }
            self.unlink(node);
        }
        self.nodes[parent].degree -= 1;
        self.nodes[node].marked = false;
        self.add_root(node);
    }

    fn cascading_cut(&mut self, mut node: usize) {
        while let Some(parent) = self.nodes[node].parent {
            if !self.nodes[node].marked {
                self.nodes[node].marked = true;
                break;
            }
            self.cut(node, parent);
            node = parent;
        }
    }

    fn allocate(&mut self, key: K, value: V) -> usize {
        let node = Node {
            key,
            parent: None,
            child: None,
            left: 0,
            right: 0,
            degree: 0,
            marked: false,
        };
        let slot = match self.vacant.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                self.values[slot] = Some(value);
                slot
            }
            None => {
                self.nodes.push(node);
                self.values.push(Some(value));
                self.nodes.len() - 1
            }
        };
        self.nodes[slot].left = slot;
        self.nodes[slot].right = slot;
        slot
    }
}

impl<K, V> DecreaseKeyQueue<K, V> for FibonacciHeap<K, V>
where
    K: PartialOrd + Copy + Debug,
    V: Ord + Hash + Clone + Debug,
{
    const BACKEND: &'static str = "fibonacci heap";

    fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.index.contains_key(&value) {
            return Err(Error::DuplicateValue);
        }
        let slot = self.allocate(key, value.clone());
        self.index.insert(value, slot);
        self.add_root(slot);
        self.len += 1;
        Ok(())
    }

    fn extract_min(&mut self) -> Result<(V, K)> {
        let min = self.min.ok_or(Error::EmptyQueue)?;

        // Promote every child of the minimum to a root
        for child in self.children(min) {
            self.nodes[child].left = child;
            self.nodes[child].right = child;
            self.add_root(child);
        }
        self.nodes[min].child = None;
        self.nodes[min].degree = 0;

        if self.nodes[min].right == min {
            self.min = None;
        } else {
            let next = self.nodes[min].right;
            self.unlink(min);
            self.consolidate(next);
        }

        let value = self.values[min].take().ok_or(Error::EmptyQueue)?;
        self.index.remove(&value);
        self.vacant.push(min);
        self.len -= 1;
        Ok((value, self.nodes[min].key))
    }

    fn decrease_key(&mut self, value: &V, new_key: K) -> Result<()> {
        let node = *self.index.get(value).ok_or(Error::NoSuchElement)?;
        let current = self.nodes[node].key;
        if new_key > current {
            return Err(Error::InvalidKey);
        }
        if !(new_key < current) {
            return Ok(());
        }

        self.nodes[node].key = new_key;
        match self.nodes[node].parent {
            Some(parent) if self.less(node, parent) => {
                self.cut(node, parent);
                self.cascading_cut(parent);
            }
            Some(_) => {}
            None => {
                if let Some(min) = self.min {
                    if self.less(node, min) {
                        self.min = Some(node);
                    }
                }
            }
        }
        Ok(())
    }

    fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    fn key_of(&self, value: &V) -> Option<K> {
        self.index.get(value).map(|&slot| self.nodes[slot].key)
    }

    fn peek_min(&self) -> Option<(&V, K)> {
        let min = self.min?;
        self.values[min]
            .as_ref()
            .map(|value| (value, self.nodes[min].key))
    }

    fn len(&self) -> usize {
        self.len
    }
}
