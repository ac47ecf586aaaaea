//! Single-source shortest path restricted to usable vertices, built on top
//! of the graph's scratch [`FibonacciHeap`](crate::heap::FibonacciHeap).

use crate::graph::{Graph, VertexId};
use crate::path::Path;

/// Computes the shortest path from `s` to `t`, considering only vertices
/// whose `usable` flag is currently set (see [`Graph::set_weight`] and the
/// KSP driver in [`crate::ksp`] for how that flag gets toggled).
///
/// Returns `None` if `t` is unreachable from `s` through usable vertices
/// and current arc weights.
///
/// On return, every usable vertex's path-arc records its predecessor arc
/// on the shortest-path tree rooted at `s` (arbitrary for vertices the
/// search never improved); non-usable vertices are left untouched. The
/// graph's scratch heap is empty on exit regardless of outcome.
///
/// # Panics
/// Panics if `s` or `t` is not currently usable.
pub fn shortest_path<P>(graph: &mut Graph<P>, s: VertexId, t: VertexId) -> Option<Path<P>> {
    assert!(graph.is_usable(s), "source vertex must be usable");
    assert!(graph.is_usable(t), "target vertex must be usable");

    graph.scratch_heap.clear();
    for idx in 0..graph.vertex_count() {
        let v = VertexId::new(idx);
        if !graph.is_usable(v) {
            continue;
        }
        graph.state[idx].path_arc = None;
        graph.state[idx].priority = f64::INFINITY;
        let handle = graph.scratch_heap.insert(v, f64::INFINITY);
        graph.state[idx].heap_handle = Some(handle);
    }

    let s_handle = graph.state[s.index()]
        .heap_handle
        .expect("source vertex was just inserted into the scratch heap");
    graph.scratch_heap.decrease_priority(s_handle, 0.0);
    graph.state[s.index()].priority = 0.0;

    let mut reached_t = false;
    while let Some((u, u_priority)) = graph.scratch_heap.pop_min() {
        if u == t {
            reached_t = true;
            break;
        }
        if u_priority.is_infinite() {
            break;
        }

        let mut next = graph.first_arc(u);
        while let Some(arc_id) = next {
            let arc = graph.arc(arc_id);
            let v = arc.head();
            next = graph.next_arc(arc_id);

            if !graph.is_usable(v) {
                continue;
            }
            let w = u_priority + arc.weight();
            if w < graph.state[v.index()].priority {
                graph.state[v.index()].priority = w;
                graph.state[v.index()].path_arc = Some(arc_id);
                let handle = graph.state[v.index()]
                    .heap_handle
                    .expect("usable vertex has a scratch-heap handle");
                graph.scratch_heap.decrease_priority(handle, w);
            }
        }
    }

    graph.scratch_heap.clear();

    if !reached_t || graph.state[t.index()].priority.is_infinite() {
        return None;
    }

    let mut path = Path::new();
    let mut cur = t;
    while cur != s {
        let arc_id = graph.state[cur.index()]
            .path_arc
            .expect("reachable vertex has a recorded predecessor arc");
        let cumulative_weight = graph.state[cur.index()].priority;
        path.push_front(arc_id, cumulative_weight);
        cur = graph.arc(arc_id).tail();
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn trivial_direct_edge() {
        let mut g = Graph::<()>::with_size(2);
        g.set_weight(VertexId::new(0), VertexId::new(1), 5.0, ());
        let p = shortest_path(&mut g, VertexId::new(0), VertexId::new(1)).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.weight(), 5.0);
    }

    #[test]
    fn diamond_picks_cheaper_route() {
        let mut g = Graph::<()>::with_size(4);
        g.set_weight(VertexId::new(0), VertexId::new(1), 1.0, ());
        g.set_weight(VertexId::new(0), VertexId::new(2), 2.0, ());
        g.set_weight(VertexId::new(1), VertexId::new(3), 4.0, ());
        g.set_weight(VertexId::new(2), VertexId::new(3), 1.0, ());

        let p = shortest_path(&mut g, VertexId::new(0), VertexId::new(3)).unwrap();
        assert_eq!(p.weight(), 3.0);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn unreachable_returns_none() {
        let mut g = Graph::<()>::with_size(3);
        g.set_weight(VertexId::new(0), VertexId::new(1), 1.0, ());
        assert!(shortest_path(&mut g, VertexId::new(0), VertexId::new(2)).is_none());
    }

    #[test]
    fn parallel_arcs_take_the_cheapest() {
        let mut g = Graph::<()>::with_size(2);
        g.set_weight(VertexId::new(0), VertexId::new(1), 10.0, ());
        g.set_weight(VertexId::new(0), VertexId::new(1), 3.0, ());
        g.set_weight(VertexId::new(0), VertexId::new(1), 7.0, ());

        let p = shortest_path(&mut g, VertexId::new(0), VertexId::new(1)).unwrap();
        assert_eq!(p.weight(), 3.0);
    }

    #[test]
    fn self_loop_is_harmless() {
        let mut g = Graph::<()>::with_size(2);
        g.set_weight(VertexId::new(0), VertexId::new(0), 1.0, ());
        g.set_weight(VertexId::new(0), VertexId::new(1), 2.0, ());
        let p = shortest_path(&mut g, VertexId::new(0), VertexId::new(1)).unwrap();
        assert_eq!(p.weight(), 2.0);
    }

    #[test]
    fn respects_disabled_vertices() {
        let mut g = Graph::<()>::with_size(3);
        g.set_weight(VertexId::new(0), VertexId::new(1), 1.0, ());
        g.set_weight(VertexId::new(1), VertexId::new(2), 1.0, ());
        g.set_usable(VertexId::new(1), false);
        assert!(shortest_path(&mut g, VertexId::new(0), VertexId::new(2)).is_none());
    }
}
