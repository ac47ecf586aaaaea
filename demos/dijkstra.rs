use yen_ksp::dijkstra::shortest_path;
use yen_ksp::{Graph, VertexId};

fn main() {
    let mut g = Graph::<&'static str>::with_size(4);
    g.set_weight(VertexId::new(0), VertexId::new(1), 1.0, "a->b");
    g.set_weight(VertexId::new(0), VertexId::new(2), 2.0, "a->c");
    g.set_weight(VertexId::new(1), VertexId::new(3), 4.0, "b->d");
    g.set_weight(VertexId::new(2), VertexId::new(3), 1.0, "c->d");

    match shortest_path(&mut g, VertexId::new(0), VertexId::new(3)) {
        Some(path) => println!(
            "shortest path: {} (weight {})",
            path.render(&g),
            path.weight()
        ),
        None => println!("no path found"),
    }
}
