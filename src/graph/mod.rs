pub use bit_graph::BitGraph;
pub use engine::SubgraphEngine;
pub use graph::Graph;
pub use hash_map_graph::HashMapGraph;
pub use vertex_index::VertexIndex;

mod bit_graph;
mod engine;
mod graph;
mod hash_map_graph;
mod vertex_index;
