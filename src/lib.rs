pub mod datastructures;
pub mod graph;
pub mod io;

pub use datastructures::{BitSet, SetBits};
pub use graph::{BitGraph, Graph, HashMapGraph, SubgraphEngine, VertexIndex};
