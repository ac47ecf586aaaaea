//! Yen's algorithm for the K shortest loopless paths between two vertices.

use crate::dijkstra;
use crate::graph::{Graph, VertexId};
use crate::heap::FibonacciHeap;
use crate::path::Path;

/// Finds up to `k` loopless paths from `s` to `t`, ordered by
/// non-decreasing total weight.
///
/// Returns fewer than `k` paths if the graph does not have that many
/// loopless `s -> t` paths; returns an empty vector if `t` is unreachable
/// from `s`.
///
/// Parallel arcs are treated as distinct: two paths that use the same
/// sequence of vertices but a different arc between two of them (see
/// `set_weight`'s "no dedup" contract) count as two different loopless
/// paths, since a `Path` is defined by its arc sequence, not its vertex
/// sequence.
///
/// On return, the graph is back at rest: every arc has its original
/// weight, every vertex is usable, and the removal list and scratch heap
/// are empty — the same postcondition a bare call to
/// [`dijkstra::shortest_path`] leaves behind.
pub fn k_shortest_paths<P>(
    graph: &mut Graph<P>,
    s: VertexId,
    t: VertexId,
    k: usize,
) -> Vec<Path<P>> {
    let mut a: Vec<Path<P>> = Vec::new();
    if k == 0 {
        return a;
    }

    match dijkstra::shortest_path(graph, s, t) {
        Some(p) => a.push(p),
        None => return a,
    }

    // Candidate heap: paths not yet accepted into `a`, keyed by total
    // weight. Whatever is still inside at the end is simply dropped when
    // `b` goes out of scope.
    let mut b: FibonacciHeap<Path<P>, f64> = FibonacciHeap::new();

    while a.len() < k {
        let prev = a.last().expect("a is non-empty: seeded above");

        for end in 0..prev.len() {
            let root = prev.root_path(end);
            root.enable_nodes(graph, false);

            // The arc `prev` itself takes out of the spur vertex.
            graph.remove_arc(prev.arc_at(end));

            // Every already-accepted path sharing this root prefix must
            // not be reproduced: remove the arc each takes next.
            for candidate in a.iter() {
                if let Some(idx) = candidate.next_node(&root) {
                    graph.remove_arc(candidate.arc_at(idx));
                }
            }

            let spur_vertex = graph.arc(prev.arc_at(end)).tail();
            let spur = dijkstra::shortest_path(graph, spur_vertex, t);

            root.enable_nodes(graph, true);

            if let Some(spur_path) = spur {
                let merged = root.merge_delete(spur_path);
                let weight = merged.weight();
                b.insert(merged, weight);
            }

            graph.restore_removals();
        }

        match b.pop_min() {
            Some((path, _)) => a.push(path),
            None => break,
        }
    }

    a
}
