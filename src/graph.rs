//! Directed weighted graph storage: vertices, arcs, and the transient
//! per-vertex working state shared by [`crate::dijkstra`] and [`crate::ksp`].

use crate::heap::{FibonacciHeap, Handle};

/// Strong-typed index of a vertex within a [`Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw dense index as a vertex id.
    pub fn new(idx: usize) -> Self {
        VertexId(idx)
    }

    /// The underlying dense index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Strong-typed index of an arc within a [`Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArcId(usize);

impl ArcId {
    fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Vertex {
    first_arc: Option<ArcId>,
}

/// A directed edge from `tail` to `head`, carrying a weight and an opaque
/// caller payload.
#[derive(Debug)]
pub struct Arc<P> {
    tail: VertexId,
    head: VertexId,
    weight: f64,
    payload: P,
    next: Option<ArcId>,
}

impl<P> Arc<P> {
    /// The arc's tail vertex.
    pub fn tail(&self) -> VertexId {
        self.tail
    }

    /// The arc's head vertex.
    pub fn head(&self) -> VertexId {
        self.head
    }

    /// The arc's current weight. Equal to `+inf` while the arc is
    /// soft-removed; see [`Graph::remove_arc`].
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The caller-supplied payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }
}

/// Transient per-vertex algorithm state, held separately from topology so
/// that resetting it is a single uniform pass rather than a walk over
/// scattered fields on `Vertex`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VertexState {
    pub(crate) priority: f64,
    pub(crate) path_arc: Option<ArcId>,
    pub(crate) usable: bool,
    pub(crate) heap_handle: Option<Handle>,
}

impl Default for VertexState {
    fn default() -> Self {
        VertexState {
            priority: f64::INFINITY,
            path_arc: None,
            usable: true,
            heap_handle: None,
        }
    }
}

/// A directed, weighted graph with dense integer vertex ids, owning its
/// vertices and arcs, plus the scratch heap and removal list that
/// [`crate::dijkstra`] and [`crate::ksp`] reuse across passes.
///
/// Not `Sync`: two threads must not share a `Graph` without external mutual
/// exclusion, since shortest-path and KSP queries mutate per-vertex
/// transient state and arc weights in place.
#[derive(Debug)]
pub struct Graph<P> {
    vertices: Vec<Vertex>,
    arcs: Vec<Arc<P>>,
    pub(crate) state: Vec<VertexState>,
    pub(crate) scratch_heap: FibonacciHeap<VertexId, f64>,
    pub(crate) removals: Vec<(ArcId, f64)>,
}

impl<P> Graph<P> {
    /// Builds an empty graph with `n` vertices, ids `0..n`.
    pub fn with_size(n: usize) -> Self {
        Graph {
            vertices: (0..n).map(|_| Vertex { first_arc: None }).collect(),
            arcs: Vec::new(),
            state: vec![VertexState::default(); n],
            scratch_heap: FibonacciHeap::new(),
            removals: Vec::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of arcs currently in the graph.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Prepends a new arc `s -> t` with weight `w` and payload `payload` to
    /// `s`'s outgoing list. Parallel arcs are permitted; each is
    /// independent.
    ///
    /// # Panics
    /// Panics if `s` or `t` is out of range, or if `w` is negative or
    /// non-finite.
    pub fn set_weight(&mut self, s: VertexId, t: VertexId, w: f64, payload: P) -> ArcId {
        assert!(s.index() < self.vertices.len(), "source vertex out of range");
        assert!(t.index() < self.vertices.len(), "target vertex out of range");
        assert!(w.is_finite() && w >= 0.0, "arc weight must be finite and non-negative");

        let id = ArcId(self.arcs.len());
        let next = self.vertices[s.index()].first_arc;
        self.arcs.push(Arc {
            tail: s,
            head: t,
            weight: w,
            payload,
            next,
        });
        self.vertices[s.index()].first_arc = Some(id);
        id
    }

    /// Soft-removes `arc`: records its current weight for later
    /// restoration and sets its live weight to `+inf`, so Dijkstra treats
    /// it as impassable without actually deleting it.
    ///
    /// A no-op if the arc is already soft-removed (its weight is already
    /// `+inf`, which a live arc can never legitimately have), so KSP can
    /// remove the same arc from two different root-prefix matches in one
    /// spur iteration without corrupting the restoration list.
    pub fn remove_arc(&mut self, arc: ArcId) {
        let w = self.arcs[arc.index()].weight;
        if w.is_infinite() {
            return;
        }
        self.removals.push((arc, w));
        self.arcs[arc.index()].weight = f64::INFINITY;
    }

    /// Restores every arc soft-removed since the last call and clears the
    /// removal list.
    pub fn restore_removals(&mut self) {
        for (arc, w) in self.removals.drain(..) {
            self.arcs[arc.index()].weight = w;
        }
    }

    /// Sets the `usable` flag of `v`.
    pub(crate) fn set_usable(&mut self, v: VertexId, usable: bool) {
        self.state[v.index()].usable = usable;
    }

    pub(crate) fn is_usable(&self, v: VertexId) -> bool {
        self.state[v.index()].usable
    }

    pub(crate) fn arc(&self, id: ArcId) -> &Arc<P> {
        &self.arcs[id.index()]
    }

    pub(crate) fn first_arc(&self, v: VertexId) -> Option<ArcId> {
        self.vertices[v.index()].first_arc
    }

    pub(crate) fn next_arc(&self, a: ArcId) -> Option<ArcId> {
        self.arcs[a.index()].next
    }

    /// Resets every vertex's transient state to the "at rest" invariant:
    /// `usable = true`, `path_arc = None`, `priority = +inf`, no heap
    /// handle. Used internally before/after Dijkstra and KSP passes; not
    /// part of the normative public algorithm but required to implement
    /// it without aliasing stale state across calls.
    pub(crate) fn reset_state(&mut self) {
        for s in self.state.iter_mut() {
            *s = VertexState::default();
        }
        self.scratch_heap.clear();
        self.removals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_empty() {
        let g = Graph::<()>::with_size(3);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.arc_count(), 0);
    }

    #[test]
    fn set_weight_appends_and_links() {
        let mut g = Graph::<()>::with_size(2);
        let a = g.set_weight(VertexId::new(0), VertexId::new(1), 1.0, ());
        let b = g.set_weight(VertexId::new(0), VertexId::new(1), 2.0, ());
        assert_eq!(g.arc_count(), 2);
        // Most recently inserted arc is first in the list.
        assert_eq!(g.first_arc(VertexId::new(0)), Some(b));
        assert_eq!(g.next_arc(b), Some(a));
        assert_eq!(g.next_arc(a), None);
    }

    #[test]
    #[should_panic]
    fn set_weight_rejects_out_of_range() {
        let mut g = Graph::<()>::with_size(1);
        g.set_weight(VertexId::new(0), VertexId::new(5), 1.0, ());
    }

    #[test]
    #[should_panic]
    fn set_weight_rejects_negative() {
        let mut g = Graph::<()>::with_size(2);
        g.set_weight(VertexId::new(0), VertexId::new(1), -1.0, ());
    }

    #[test]
    fn remove_and_restore_arc() {
        let mut g = Graph::<()>::with_size(2);
        let a = g.set_weight(VertexId::new(0), VertexId::new(1), 3.0, ());
        g.remove_arc(a);
        assert_eq!(g.arc(a).weight(), f64::INFINITY);
        g.restore_removals();
        assert_eq!(g.arc(a).weight(), 3.0);
        assert!(g.removals.is_empty());
    }
}
