//! Ordered arc sequences with cumulative weight, and the edit operations
//! Yen's algorithm needs to turn one accepted path into the next candidate.

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::graph::{ArcId, Graph};

#[derive(Clone, Copy, Debug)]
struct PathNode {
    arc: ArcId,
    cumulative_weight: f64,
}

/// An ordered sequence of arcs `a_0, a_1, ..., a_n` with `a_i.head ==
/// a_{i+1}.tail`, each carrying the cumulative weight from the path's
/// start through that arc.
///
/// `P` ties a `Path` to the arc-payload type of the [`Graph`] it was built
/// from; a `Path` holds no reference to the graph itself, only [`ArcId`]s,
/// so it outlives any particular borrow of it.
#[derive(Debug)]
pub struct Path<P> {
    nodes: VecDeque<PathNode>,
    _marker: PhantomData<fn() -> P>,
}

impl<P> Path<P> {
    /// An empty path, weight zero.
    pub fn new() -> Self {
        Path {
            nodes: VecDeque::new(),
            _marker: PhantomData,
        }
    }

    /// Number of arcs in the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the path has no arcs.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total weight: the cumulative weight of the last node, or zero for
    /// an empty path.
    pub fn weight(&self) -> f64 {
        self.nodes.back().map_or(0.0, |n| n.cumulative_weight)
    }

    pub(crate) fn arc_at(&self, idx: usize) -> ArcId {
        self.nodes[idx].arc
    }

    /// Prepends an arc, whose cumulative weight from the path's new start
    /// is `cumulative_weight`.
    pub(crate) fn push_front(&mut self, arc: ArcId, cumulative_weight: f64) {
        self.nodes.push_front(PathNode {
            arc,
            cumulative_weight,
        });
    }

    /// Appends an arc.
    pub(crate) fn push_back(&mut self, arc: ArcId, cumulative_weight: f64) {
        self.nodes.push_back(PathNode {
            arc,
            cumulative_weight,
        });
    }

    /// Produces a deep copy of the prefix strictly before node `end`.
    ///
    /// # Panics
    /// Panics if `end > self.len()`.
    pub(crate) fn root_path(&self, end: usize) -> Path<P> {
        assert!(end <= self.nodes.len(), "root_path: end out of range");
        Path {
            nodes: self.nodes.iter().take(end).copied().collect(),
            _marker: PhantomData,
        }
    }

    /// Walks `self` and `root` in lockstep. If every arc in `root` matches
    /// the corresponding prefix arc of `self`, returns the index of the
    /// node in `self` immediately after the prefix. Returns `None` if
    /// `self` is shorter than `root` or diverges from it anywhere.
    pub(crate) fn next_node(&self, root: &Path<P>) -> Option<usize> {
        if self.nodes.len() <= root.nodes.len() {
            return None;
        }
        for (a, b) in self.nodes.iter().zip(root.nodes.iter()) {
            if a.arc != b.arc {
                return None;
            }
        }
        Some(root.nodes.len())
    }

    /// Concatenates `other`'s nodes after `self`'s, shifting each of
    /// `other`'s cumulative weights by `self`'s terminal weight so the
    /// running total stays correct. Consumes both paths, returning the
    /// merged one. If `self` is empty, the result is simply `other`.
    pub(crate) fn merge_delete(mut self, other: Path<P>) -> Path<P> {
        if self.nodes.is_empty() {
            return other;
        }
        let base = self.weight();
        self.nodes.extend(other.nodes.into_iter().map(|n| PathNode {
            arc: n.arc,
            cumulative_weight: n.cumulative_weight + base,
        }));
        self
    }

    /// Sets `usable = flag` on every node's arc tail, and on every node's
    /// arc head except the path's last node (the spur vertex must stay
    /// usable).
    pub(crate) fn enable_nodes(&self, graph: &mut Graph<P>, flag: bool) {
        let last = self.nodes.len().saturating_sub(1);
        for (i, node) in self.nodes.iter().enumerate() {
            let arc = graph.arc(node.arc);
            let (tail, head) = (arc.tail(), arc.head());
            graph.set_usable(tail, flag);
            if i != last {
                graph.set_usable(head, flag);
            }
        }
    }

    /// Renders the path as `"id0 -> id1(w1) -> id2(w2) -> ..."`, matching
    /// the illustrative (non-normative) logging format. Not used by the
    /// algorithms themselves.
    pub fn render(&self, graph: &Graph<P>) -> String {
        if self.nodes.is_empty() {
            return String::new();
        }
        let first_tail = graph.arc(self.nodes[0].arc).tail();
        let mut out = format!("{}", first_tail.index());
        for node in &self.nodes {
            let arc = graph.arc(node.arc);
            out.push_str(&format!(
                " -> {}({})",
                arc.head().index(),
                node.cumulative_weight
            ));
        }
        out
    }
}

impl<P> Default for Path<P> {
    fn default() -> Self {
        Self::new()
    }
}
