//! K shortest loopless paths over a directed, weighted graph.
//!
//! Built from three layered pieces: a [`heap::FibonacciHeap`] providing
//! decrease-key, [`dijkstra::shortest_path`] using one heap instance to
//! find a single shortest route, and [`ksp::k_shortest_paths`] (Yen's
//! algorithm) using a second heap of candidate paths to rank the next k-1
//! routes after the first.
//!
//! ```
//! use yen_ksp::{Graph, VertexId};
//! use yen_ksp::ksp::k_shortest_paths;
//!
//! let mut g = Graph::<()>::with_size(4);
//! g.set_weight(VertexId::new(0), VertexId::new(1), 1.0, ());
//! g.set_weight(VertexId::new(0), VertexId::new(2), 2.0, ());
//! g.set_weight(VertexId::new(1), VertexId::new(3), 4.0, ());
//! g.set_weight(VertexId::new(2), VertexId::new(3), 1.0, ());
//!
//! let paths = k_shortest_paths(&mut g, VertexId::new(0), VertexId::new(3), 2);
//! assert_eq!(paths.len(), 2);
//! assert_eq!(paths[0].weight(), 3.0);
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    broken_intra_doc_links
)]

pub mod dijkstra;
pub mod graph;
pub mod heap;
pub mod ksp;
pub mod path;

pub use graph::{ArcId, Graph, VertexId};
pub use heap::FibonacciHeap;
pub use path::Path;
