use yen_ksp::ksp::k_shortest_paths;
use yen_ksp::{Graph, VertexId};

fn main() {
    // The classic Yen's-algorithm worked example: C, D, E, F, G, H
    // renumbered 0..6.
    let mut g = Graph::<()>::with_size(6);
    g.set_weight(VertexId::new(0), VertexId::new(1), 3.0, ());
    g.set_weight(VertexId::new(0), VertexId::new(2), 2.0, ());
    g.set_weight(VertexId::new(1), VertexId::new(3), 4.0, ());
    g.set_weight(VertexId::new(2), VertexId::new(1), 1.0, ());
    g.set_weight(VertexId::new(2), VertexId::new(3), 2.0, ());
    g.set_weight(VertexId::new(2), VertexId::new(4), 3.0, ());
    g.set_weight(VertexId::new(3), VertexId::new(4), 2.0, ());
    g.set_weight(VertexId::new(3), VertexId::new(5), 1.0, ());
    g.set_weight(VertexId::new(4), VertexId::new(5), 2.0, ());

    let paths = k_shortest_paths(&mut g, VertexId::new(0), VertexId::new(5), 3);
    for (i, path) in paths.iter().enumerate() {
        println!("#{}: {} (weight {})", i + 1, path.render(&g), path.weight());
    }
}
